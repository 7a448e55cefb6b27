//! OpenSea client CLI
//!
//! Command-line interface for fetching collections and collection events

use clap::Parser;
use opensea_client::cli::{Cli, Runner};
use opensea_client::logging::{self, LogConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: (if cli.verbose { "debug" } else { "info" }).to_string(),
        log_dir: cli.log_dir.clone(),
        file_name: None,
    };
    if let Err(e) = logging::init(&log_config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
