//! Tests of the token's initial state

use alloy::primitives::U256;
use contracts_common::constants::{INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, V1};
use eyre::{ensure, Result};

use crate::{integration_test, test_inventory::TestArgs, utils::assert_reverts};

/// Test that the token was initialized with the deployer as owner
async fn test_initializes(args: TestArgs) -> Result<()> {
    let token = &args.token;

    ensure!(token.owner().call().await? == args.owner, "deployer does not own the token");
    ensure!(token.name().call().await? == TOKEN_NAME, "unexpected name");
    ensure!(token.symbol().call().await? == TOKEN_SYMBOL, "unexpected symbol");
    ensure!(token.decimals().call().await? == TOKEN_DECIMALS, "unexpected decimals");
    ensure!(token.initializedVersion().call().await? >= V1, "token not initialized");
    ensure!(
        token.totalSupply().call().await? >= U256::from(INITIAL_SUPPLY),
        "initial supply was not minted"
    );

    Ok(())
}
integration_test!(test_initializes);

/// Test that the initializer cannot run a second time
async fn test_initialize_twice_reverts(args: TestArgs) -> Result<()> {
    assert_reverts(args.token.initialize()).await
}
integration_test!(test_initialize_twice_reverts);
