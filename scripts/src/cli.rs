//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{build_and_deploy_stylus_contract, deploy_and_upgrade, deploy_proxy, upgrade},
    constants::DEFAULT_DEPLOYMENTS_PATH,
    errors::ScriptError,
    types::{DeployerClient, StylusContract},
};

/// Scripts for deploying & upgrading the MyToken contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Path to a `deployments.json` file
    #[arg(short, long, env = "DEPLOYMENTS_PATH", default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the upgradeable proxy, pointing at an implementation
    DeployProxy(DeployProxyArgs),
    /// Build & deploy a Stylus contract
    DeployStylus(DeployStylusArgs),
    /// Upgrade the implementation behind the proxy
    Upgrade(UpgradeArgs),
    /// Deploy the first token version behind a proxy, then upgrade it to the second
    DeployAndUpgrade(DeployAndUpgradeArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: DeployerClient,
        rpc_url: &str,
        priv_key: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployProxy(args) => {
                deploy_proxy(&args, &client, deployments_path).await.map(|_| ())
            }
            Command::DeployStylus(args) => {
                build_and_deploy_stylus_contract(&args, &client, rpc_url, priv_key, deployments_path)
                    .await
                    .map(|_| ())
            }
            Command::Upgrade(args) => upgrade(&args, &client, deployments_path).await,
            Command::DeployAndUpgrade(args) => {
                deploy_and_upgrade(&args, &client, rpc_url, priv_key, deployments_path).await
            }
        }
    }
}

/// Deploy the token's upgradeable proxy contract.
///
/// Concretely, this is a [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract. The proxy's constructor calls `initialize()`
/// on the implementation, making the deployer the token's owner.
///
/// Calls made directly to the `TransparentUpgradeableProxy` contract will be forwarded to the implementation contract.
/// Upgrade calls can only be made to the `TransparentUpgradeableProxy` through the `ProxyAdmin`.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// Address of the owner of the proxy admin contract,
    /// defaults to the deployer
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Path to the hex-encoded creation bytecode of the
    /// `TransparentUpgradeableProxy` contract
    #[arg(long)]
    pub proxy_bytecode: PathBuf,

    /// Token implementation contract address in hex,
    /// defaults to the deployed v1 implementation
    #[arg(short, long)]
    pub implementation: Option<String>,
}

/// Deploy a Stylus contract
#[derive(Args)]
pub struct DeployStylusArgs {
    /// The Stylus contract to deploy
    #[arg(short, long)]
    pub contract: StylusContract,
}

/// Upgrade the token implementation
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy admin contract,
    /// defaults to the deployed proxy admin
    #[arg(long)]
    pub proxy_admin: Option<String>,

    /// Address of the proxy contract,
    /// defaults to the deployed proxy
    #[arg(long)]
    pub proxy: Option<String>,

    /// Address of the new implementation contract,
    /// defaults to the deployed v2 implementation
    #[arg(short, long)]
    pub implementation: Option<String>,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(short, long)]
    pub calldata: Option<String>,
}

/// Deploy the token's first version behind a proxy & upgrade it to the second version
#[derive(Args)]
pub struct DeployAndUpgradeArgs {
    /// Path to the hex-encoded creation bytecode of the
    /// `TransparentUpgradeableProxy` contract
    #[arg(long)]
    pub proxy_bytecode: PathBuf,
}
