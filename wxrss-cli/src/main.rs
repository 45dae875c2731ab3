//! Binary crate for the `wxrss` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the fetch/parse/render pipeline
//! - Writing the report to stdout or a file

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
