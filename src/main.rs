// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (progress lines go through `tracing`)
// 2. Parse and validate the three positional arguments
// 3. Crawl the site until no task is left
// 4. Print the report
// 5. Exit with proper code (0 = success, 1 = bad arguments, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;    // src/cli.rs - command-line parsing
mod crawl;  // src/crawl/ - scheduler, visit ledger, completion tracking
mod page;   // src/page/ - fetching, link extraction, URL normalization
mod report; // src/report.rs - sorting and printing the results

use anyhow::Result;
use clap::Parser;
use cli::{Cli, CliError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Fixed filter: the crawler reads no environment variables
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) if e.is::<CliError>() => {
            println!("{}", e);
            1
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let config = Cli::parse().into_config()?;

    println!("starting crawl of: {}", config.raw_base);

    let base = config.raw_base.clone();
    let pages = crawl::crawl(&base, config).await?;

    print!("{}", report::render_report(&pages, &base));
    Ok(())
}
