//! CLI commands and argument parsing

use crate::auth::{API_KEY_ENV, API_SECRET_ENV};
use crate::types::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "EASYREDIR_BASE_URL";

/// EasyRedir command-line client
#[derive(Parser, Debug)]
#[command(name = "easyredir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API secret
    #[arg(long, global = true, env = API_SECRET_ENV, hide_env_values = true)]
    pub api_secret: Option<String>,

    /// API root
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage redirect rules
    #[command(subcommand)]
    Rules(RulesCommand),

    /// Inspect hosts
    #[command(subcommand)]
    Hosts(HostsCommand),

    /// Print "pong" without contacting the API
    Ping,
}

/// `rules` subcommands
#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// List rules
    List {
        /// Only rules whose source URL matches
        #[arg(long)]
        source_filter: Option<String>,

        /// Only rules whose target URL matches
        #[arg(long)]
        target_filter: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Start after this rule id
        #[arg(long)]
        starting_after: Option<String>,

        /// End before this rule id
        #[arg(long)]
        ending_before: Option<String>,

        /// Follow every page
        #[arg(long)]
        all: bool,
    },

    /// Create a rule
    Create {
        /// Source URL (repeatable)
        #[arg(long = "source-url", required = true)]
        source_urls: Vec<String>,

        /// Target URL
        #[arg(long)]
        target_url: String,

        /// e.g. moved_permanently, found
        #[arg(long)]
        response_type: Option<String>,

        /// Forward query parameters to the target
        #[arg(long)]
        forward_params: bool,

        /// Forward the request path to the target
        #[arg(long)]
        forward_path: bool,
    },

    /// Delete a rule
    Remove {
        /// Rule id
        id: String,
    },
}

/// `hosts` subcommands
#[derive(Subcommand, Debug)]
pub enum HostsCommand {
    /// Show one host
    Get {
        /// Host id
        id: String,
    },

    /// List hosts
    List {
        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Follow every page
        #[arg(long)]
        all: bool,
    },
}
