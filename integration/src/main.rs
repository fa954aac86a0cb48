//! Integration tests for the MyToken contracts. These assume that a devnet is already
//! running locally, with the token deployed behind its proxy.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use eyre::Result;
use test_inventory::{IntegrationTest, TestArgs};
use tracing::info;

mod abis;
mod cli;
mod constants;
mod test_inventory;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().pretty().init();

    let args = TestArgs::from_cli(&cli)?;
    info!("running integration tests against proxy {:#x}", args.proxy_address);

    let mut failures = Vec::new();
    for test in inventory::iter::<IntegrationTest> {
        if cli.test.as_deref().is_some_and(|name| name != test.name) {
            continue;
        }

        print!("{} ... ", test.name);
        match (test.test_fn)(args.clone()).await {
            Ok(()) => println!("{}", "PASS".green().bold()),
            Err(e) => {
                println!("{}", "FAIL".red().bold());
                println!("\t{e:?}");
                failures.push(test.name);
            },
        }
    }

    if !failures.is_empty() {
        eyre::bail!("{} test(s) failed: {}", failures.len(), failures.join(", "));
    }

    Ok(())
}
