use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tunestats_types::TimeRange;

#[derive(Parser, Debug)]
#[command(
    name = "tunestats",
    about = "Tunestats - personal listening statistics in the terminal",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        env = "TUNESTATS_DATA_DIR",
        help = "Directory for settings and session"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[arg(
        long,
        global = true,
        env = "TUNESTATS_TOKEN",
        hide_env_values = true,
        help = "Session token; stored for later runs"
    )]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Sign in through the backend, or store tokens from the redirect URL")]
    Login {
        #[arg(long, help = "Redirect URL containing access_token")]
        redirect: Option<String>,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show the signed-in profile")]
    Me,

    #[command(subcommand, about = "Top artists, tracks or albums")]
    Top(TopCommands),

    #[command(about = "Recently played tracks")]
    Recent {
        #[arg(short, long, default_value_t = 50)]
        limit: u32,

        #[arg(short, long, value_name = "SECS", help = "Refresh every SECS seconds until Ctrl-C")]
        watch: Option<u64>,
    },

    #[command(about = "Totals and top lists from recorded history")]
    Stats {
        #[arg(short, long, default_value_t = 30, help = "Days to include (0 = all time)")]
        days: u32,
    },

    #[command(about = "Recorded listening history")]
    History {
        #[arg(short, long, default_value_t = 30, help = "Days to include (0 = all time)")]
        days: u32,

        #[arg(short, long, default_value_t = 100)]
        limit: u32,

        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    #[command(about = "Listening analytics and monthly summaries")]
    Analytics {
        #[arg(short, long, default_value_t = 30, help = "Days to analyse (7, 30, 90, 0 = all)")]
        days: u32,

        #[arg(short, long, default_value_t = 6)]
        months: u32,
    },

    #[command(subcommand, about = "Which backend to talk to")]
    Backend(BackendCommands),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct TopArgs {
    #[arg(
        short,
        long,
        default_value_t = TimeRange::MediumTerm,
        help = "short, medium or long (also short_term, ...)"
    )]
    pub range: TimeRange,

    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Subcommand, Debug)]
pub enum TopCommands {
    #[command(about = "Most listened artists")]
    Artists(TopArgs),
    #[command(about = "Most listened tracks")]
    Tracks(TopArgs),
    #[command(about = "Albums ranked by how many of your top tracks they hold")]
    Albums(TopArgs),
}

#[derive(Subcommand, Debug)]
pub enum BackendCommands {
    #[command(about = "Show the backend URL in use")]
    Show,

    #[command(about = "Use a different backend (e.g. an ngrok tunnel)")]
    Set {
        #[arg(help = "Base URL, e.g. https://abc123.ngrok.io")]
        url: String,
    },

    #[command(about = "Go back to the default backend")]
    Reset,

    #[command(about = "Check that a backend answers")]
    Test {
        #[arg(help = "URL to probe (defaults to the one in use)")]
        url: Option<String>,
    },
}
