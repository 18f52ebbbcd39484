#![doc = include_str!("../README.md")]

mod client;
pub mod endpoint;
mod error;
pub mod paths;
pub mod session;
pub mod store;
mod types;
pub mod view;

pub use client::StatsClient;
pub use endpoint::EndpointResolver;
pub use error::ClientError;
pub use session::SessionStore;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::*;
pub use view::{Completion, RequestGenerations, RequestTicket, View, ViewState};
