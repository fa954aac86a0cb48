//! Definition of the CLI arguments for integration tests

use clap::Parser;

use crate::constants::{DEFAULT_DEPLOYMENTS_FILE, DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes that the token has already been deployed behind its proxy on the devnet,
/// e.g. with the `deploy-proxy` script, and that the signing key owns it.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run, runs all tests if unset
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Path to file containing contract deployment info
    #[arg(short, long, env = "DEPLOYMENTS_PATH", default_value = DEFAULT_DEPLOYMENTS_FILE)]
    pub(crate) deployments_file: String,

    /// Devnet private key, defaults to default Nitro devnet private key
    #[arg(short, long, env = "PRIV_KEY", default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL, defaults to default Nitro devnet hostport
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}
