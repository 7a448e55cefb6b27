//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::OpenSeaClient;
use crate::error::{Result, ResultExt};
use crate::params::{CollectionsParams, EventsParams};
use serde::Serialize;
use std::fs;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against a client configured from the environment
    pub async fn run(&self) -> Result<()> {
        let client = OpenSeaClient::from_env()?;
        self.run_with(&client).await
    }

    /// Run the CLI command against the given client
    pub async fn run_with(&self, client: &OpenSeaClient) -> Result<()> {
        let rendered = match &self.cli.command {
            Commands::Collections {
                chain,
                limit,
                include_hidden,
                order_by,
                cursor,
                max_pages,
                single_page,
            } => {
                let mut builder = CollectionsParams::builder()
                    .chain(chain.as_str())
                    .limit(*limit)
                    .include_hidden(*include_hidden)
                    .max_pages(*max_pages);
                if let Some(order_by) = order_by {
                    builder = builder.order_by(order_by.as_str());
                }
                if let Some(cursor) = cursor {
                    builder = builder.cursor(cursor.as_str());
                }
                let params = builder.build()?;

                if *single_page {
                    self.render(&client.get_collections(&params).await?)?
                } else {
                    self.render(&client.get_all_collections(&params).await?)?
                }
            }
            Commands::Events {
                slug,
                event_types,
                after,
                before,
                limit,
                cursor,
                max_pages,
                single_page,
            } => {
                let mut builder = EventsParams::builder(slug.as_str())
                    .limit(*limit)
                    .max_pages(*max_pages);
                if !event_types.is_empty() {
                    builder = builder.event_types(event_types.iter().map(String::as_str));
                }
                if let Some(after) = after {
                    builder = builder.after(*after);
                }
                if let Some(before) = before {
                    builder = builder.before(*before);
                }
                if let Some(cursor) = cursor {
                    builder = builder.cursor(cursor.as_str());
                }
                let params = builder.build()?;

                if *single_page {
                    self.render(&client.get_collection_events(&params).await?)?
                } else {
                    self.render(&client.get_all_collection_events(&params).await?)?
                }
            }
        };

        self.emit(&rendered)
    }

    /// Serialize a result as JSON
    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Write rendered output to the output file or stdout
    fn emit(&self, rendered: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                fs::write(path, format!("{rendered}\n"))
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("Wrote results to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}")?;
            }
        }
        Ok(())
    }
}
