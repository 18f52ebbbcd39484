//! Per-view request bookkeeping.
//!
//! Every fetch a view starts gets a ticket. Only the newest ticket may
//! write the view's state, so a slow response to an old query (say, a
//! previous time range) can never overwrite the result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter shared by all fetches of one view.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    current: AtomicU64,
}

/// Proof of which generation started a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket { generation }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.generation
    }
}

/// What a view is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T, E> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(E),
}

impl<T, E> ViewState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Whether a completed request was allowed to update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request started in the meantime; the result was dropped.
    Superseded,
}

/// A view's state plus the generation guard in front of it.
#[derive(Debug, Default)]
pub struct View<T, E> {
    generations: RequestGenerations,
    state: ViewState<T, E>,
}

impl<T, E> View<T, E> {
    pub fn new() -> Self {
        Self { generations: RequestGenerations::new(), state: ViewState::Idle }
    }

    /// Mark the view loading and hand out the ticket for the new request.
    pub fn begin(&mut self) -> RequestTicket {
        self.state = ViewState::Loading;
        self.generations.begin()
    }

    /// Apply `result` if `ticket` is still the newest request.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, E>) -> Completion {
        if !self.generations.is_current(ticket) {
            tracing::debug!("Dropping result of superseded request #{}", ticket.generation);
            return Completion::Superseded;
        }
        self.state = match result {
            Ok(data) => ViewState::Loaded(data),
            Err(e) => ViewState::Failed(e),
        };
        Completion::Applied
    }

    pub fn state(&self) -> &ViewState<T, E> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<T, E> {
        self.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_newer_ticket_supersedes() {
        let generations = RequestGenerations::new();
        let first = generations.begin();
        assert!(generations.is_current(first));

        let second = generations.begin();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut view: View<&str, String> = View::new();
        let short_term = view.begin();
        let long_term = view.begin();

        assert_eq!(view.complete(long_term, Ok("long")), Completion::Applied);
        assert_eq!(view.complete(short_term, Ok("short")), Completion::Superseded);
        assert_eq!(view.state().data(), Some(&"long"));
    }

    #[test]
    fn test_stale_error_is_dropped() {
        let mut view: View<u32, String> = View::new();
        let old = view.begin();
        let new = view.begin();

        view.complete(new, Ok(7));
        view.complete(old, Err("timeout".to_string()));
        assert_eq!(view.state(), &ViewState::Loaded(7));
    }

    #[test]
    fn test_failure_leaves_view_not_loading() {
        let mut view: View<u32, String> = View::new();
        assert_eq!(view.state(), &ViewState::Idle);

        let ticket = view.begin();
        assert!(view.state().is_loading());

        view.complete(ticket, Err("502".to_string()));
        assert!(!view.state().is_loading());
        assert_eq!(view.state().error().map(String::as_str), Some("502"));
    }

    #[tokio::test]
    async fn test_out_of_order_responses() {
        let mut view: View<&'static str, String> = View::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        // The older request is the slower one.
        for (label, delay_ms) in [("medium_term", 50u64), ("short_term", 5u64)] {
            let ticket = view.begin();
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                let _ = tx.send((ticket, label));
            });
        }
        drop(tx);

        let mut outcomes = Vec::new();
        while let Some((ticket, label)) = rx.recv().await {
            outcomes.push((label, view.complete(ticket, Ok(label))));
        }

        assert_eq!(
            outcomes,
            vec![("short_term", Completion::Applied), ("medium_term", Completion::Superseded)]
        );
        assert_eq!(view.into_state(), ViewState::Loaded("short_term"));
    }
}
