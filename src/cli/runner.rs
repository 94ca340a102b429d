//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, HostsCommand, RulesCommand};
use crate::client::EasyRedir;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{Collection, ListOptions};
use crate::rules::RuleAttributes;
use crate::types::to_yaml;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        print!("{output}");
        Ok(())
    }

    /// Run the CLI command and return what it would print
    pub async fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Ping => Ok("pong\n".to_string()),
            Commands::Rules(command) => self.rules(command).await,
            Commands::Hosts(command) => self.hosts(command).await,
        }
    }

    async fn rules(&self, command: &RulesCommand) -> Result<String> {
        let client = self.client()?;
        let rules = client.rules();

        match command {
            RulesCommand::List {
                source_filter,
                target_filter,
                limit,
                starting_after,
                ending_before,
                all,
            } => {
                let options = list_options(
                    source_filter.as_deref(),
                    target_filter.as_deref(),
                    *limit,
                    starting_after.as_deref(),
                    ending_before.as_deref(),
                );
                let collection = if *all {
                    rules.list(&options).await?
                } else {
                    Collection::from(rules.list_page(&options).await?)
                };
                render_collection(&collection)
            }
            RulesCommand::Create {
                source_urls,
                target_url,
                response_type,
                forward_params,
                forward_path,
            } => {
                let attributes = RuleAttributes {
                    forward_params: Some(*forward_params),
                    forward_path: Some(*forward_path),
                    response_type: response_type.clone(),
                    source_urls: source_urls.clone(),
                    target_url: Some(target_url.clone()),
                };
                rules.create(&attributes).await?.to_yaml()
            }
            RulesCommand::Remove { id } => {
                rules.remove(id).await?;
                Ok(format!("Removed rule {id}\n"))
            }
        }
    }

    async fn hosts(&self, command: &HostsCommand) -> Result<String> {
        let client = self.client()?;
        let hosts = client.hosts();

        match command {
            HostsCommand::Get { id } => hosts.get(id).await?.to_yaml(),
            HostsCommand::List { limit, all } => {
                let options = list_options(None, None, *limit, None, None);
                let collection = if *all {
                    hosts.list(&options).await?
                } else {
                    Collection::from(hosts.list_page(&options).await?)
                };
                render_collection(&collection)
            }
        }
    }

    /// Build the client configuration from flags and environment
    pub fn config(&self) -> Result<ClientConfig> {
        let key = self
            .cli
            .api_key
            .as_deref()
            .ok_or_else(|| Error::missing_field("api_key"))?;
        let secret = self
            .cli
            .api_secret
            .as_deref()
            .ok_or_else(|| Error::missing_field("api_secret"))?;

        Ok(ClientConfig::builder()
            .base_url(&self.cli.base_url)
            .credentials(key, secret)
            .timeout(Duration::from_secs(self.cli.timeout))
            .build())
    }

    fn client(&self) -> Result<EasyRedir> {
        let config = self.config()?;
        debug!("Using API at {}", config.base_url);
        EasyRedir::new(config)
    }
}

/// Process exit status for a failed command: 2 when rate limited, 1 otherwise
pub fn exit_code(error: &Error) -> i32 {
    if error.is_rate_limited() {
        2
    } else {
        1
    }
}

pub(crate) fn list_options(
    source_filter: Option<&str>,
    target_filter: Option<&str>,
    limit: Option<u32>,
    starting_after: Option<&str>,
    ending_before: Option<&str>,
) -> ListOptions {
    ListOptions {
        starting_after: starting_after.map(String::from),
        ending_before: ending_before.map(String::from),
        source_filter: source_filter.map(String::from),
        target_filter: target_filter.map(String::from),
        limit,
    }
}

/// Every record as YAML followed by a blank line, then `Total: N`
pub(crate) fn render_collection<T: Serialize>(collection: &Collection<T>) -> Result<String> {
    let mut out = String::new();
    for record in collection {
        out.push_str(&to_yaml(record)?);
        out.push('\n');
    }
    out.push_str(&format!("Total: {}\n", collection.len()));
    Ok(out)
}
