//! Defines types and utilities for managing the inventory of integration tests

use std::{future::Future, pin::Pin};

use alloy::{network::Ethereum, primitives::Address, providers::DynProvider};
use eyre::Result;
use scripts::{
    constants::{
        MY_TOKEN_2_CONTRACT_KEY, MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY, MY_TOKEN_PROXY_CONTRACT_KEY,
    },
    utils::{parse_addr_from_deployments_file, setup_client},
};

use crate::{abis::IMyToken::IMyTokenInstance, cli::Cli, utils::WrapEyre};

/// The token contract, bound to a signing provider
pub type Token = IMyTokenInstance<DynProvider<Ethereum>, Ethereum>;

/// The arguments provided to each integration test
#[derive(Clone)]
pub struct TestArgs {
    /// The RPC URL of the devnet node
    pub rpc_url: String,
    /// The provider, signing with the key that deployed and owns the token
    pub provider: DynProvider<Ethereum>,
    /// The address of the owner
    pub owner: Address,
    /// The token, called through its proxy
    pub token: Token,
    /// The address of the token proxy contract
    pub proxy_address: Address,
    /// The address of the proxy admin contract
    pub proxy_admin_address: Address,
    /// The address of the version 2 token implementation, if one was deployed
    pub token_v2_address: Option<Address>,
}

impl TestArgs {
    /// Connects to the devnet and reads the deployed contract addresses
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let client = setup_client(&cli.priv_key, &cli.rpc_url).to_eyre()?;
        let proxy_address =
            parse_addr_from_deployments_file(&cli.deployments_file, MY_TOKEN_PROXY_CONTRACT_KEY)
                .to_eyre()?;
        let proxy_admin_address = parse_addr_from_deployments_file(
            &cli.deployments_file,
            MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY,
        )
        .to_eyre()?;
        let token_v2_address =
            parse_addr_from_deployments_file(&cli.deployments_file, MY_TOKEN_2_CONTRACT_KEY).ok();

        let token = IMyTokenInstance::new(proxy_address, client.provider.clone());

        Ok(Self {
            rpc_url: cli.rpc_url.clone(),
            provider: client.provider,
            owner: client.address,
            token,
            proxy_address,
            proxy_admin_address,
            token_v2_address,
        })
    }
}

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A struct representing an integration test
pub struct IntegrationTest {
    /// The name of the test
    pub name: &'static str,
    /// The test function
    pub test_fn: TestFn,
}

// Collect the integration tests into an iterable
inventory::collect!(IntegrationTest);

/// Macro to register an integration test
#[macro_export]
macro_rules! integration_test {
    ($test_fn:ident) => {
        inventory::submit!($crate::test_inventory::IntegrationTest {
            name: stringify!($test_fn),
            test_fn: move |args| std::boxed::Box::pin($test_fn(args)),
        });
    };
}
