//! CLI module
//!
//! Command-line front end over the API client.
//!
//! # Commands
//!
//! - `rules list` - List redirect rules (one page, or every page with `--all`)
//! - `rules create` - Create a redirect rule
//! - `rules remove` - Delete a redirect rule
//! - `hosts get` - Show one host
//! - `hosts list` - List hosts
//! - `ping` - Check that the binary runs

mod commands;
mod runner;

pub use commands::{Cli, Commands, HostsCommand, RulesCommand};
pub use runner::{exit_code, Runner};
