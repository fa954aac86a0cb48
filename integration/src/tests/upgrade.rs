//! Tests of upgrading the token behind its proxy

use alloy::sol_types::SolCall;
use contracts_common::constants::V2;
use eyre::{ensure, OptionExt, Result};
use tracing::info;

use crate::{
    abis::{IMyToken::initializeV2Call, ProxyAdmin},
    integration_test,
    test_inventory::TestArgs,
    utils::{assert_reverts, wait_for_tx_success},
};

/// Test upgrading the proxy to the second implementation, reinitializing it atomically.
///
/// Skips the upgrade itself if a previous run already performed it.
async fn test_upgrade(args: TestArgs) -> Result<()> {
    let token = &args.token;
    let owner = token.owner().call().await?;
    let supply = token.totalSupply().call().await?;

    if token.version().call().await? < V2 {
        let implementation =
            args.token_v2_address.ok_or_eyre("no version 2 implementation deployed")?;
        let proxy_admin = ProxyAdmin::new(args.proxy_admin_address, args.provider.clone());
        let data = initializeV2Call {}.abi_encode();

        wait_for_tx_success(proxy_admin.upgradeAndCall(
            args.proxy_address,
            implementation,
            data.into(),
        ))
        .await?;
        info!("upgraded proxy {:#x} to {implementation:#x}", args.proxy_address);
    }

    ensure!(token.version().call().await? == V2, "proxy does not point at version 2");
    ensure!(token.initializedVersion().call().await? == V2, "version 2 not initialized");
    ensure!(token.owner().call().await? == owner, "owner changed across the upgrade");
    ensure!(token.totalSupply().call().await? == supply, "supply changed across the upgrade");

    // The reinitializer only runs once
    assert_reverts(token.initializeV2()).await
}
integration_test!(test_upgrade);
