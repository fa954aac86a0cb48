//! Implementations of the various deploy scripts

use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolCall,
};
use tracing::{info, warn};

use crate::{
    cli::{DeployAndUpgradeArgs, DeployProxyArgs, DeployStylusArgs, UpgradeArgs},
    constants::{
        MY_TOKEN_2_CONTRACT_KEY, MY_TOKEN_CONTRACT_KEY, MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY,
        MY_TOKEN_PROXY_CONTRACT_KEY,
    },
    errors::ScriptError,
    solidity::{initializeCall, initializeV2Call, ProxyAdmin},
    types::{DeployerClient, StylusContract},
    utils::{
        address_or_deployed, build_stylus_contract, deploy_contract, deploy_stylus_contract,
        get_proxy_admin_address, parse_address, parse_calldata, proxy_deploy_code,
        read_proxy_bytecode, write_deployed_address,
    },
};

/// Deploys the proxy, initializing the implementation behind it.
///
/// Returns the addresses of the proxy and of its admin contract.
pub async fn deploy_proxy(
    args: &DeployProxyArgs,
    client: &DeployerClient,
    deployments_path: &str,
) -> Result<(Address, Address), ScriptError> {
    let bytecode = read_proxy_bytecode(&args.proxy_bytecode)?;

    // Parse proxy contract constructor arguments
    let implementation_address = address_or_deployed(
        args.implementation.as_deref(),
        deployments_path,
        MY_TOKEN_CONTRACT_KEY,
    )?;
    let owner_address = match &args.owner {
        Some(owner) => parse_address(owner)?,
        None => client.address,
    };
    let initialize_calldata = Bytes::from(initializeCall {}.abi_encode());

    let deploy_code =
        proxy_deploy_code(bytecode, implementation_address, owner_address, initialize_calldata);
    let proxy_address = deploy_contract(client, deploy_code).await?;
    let proxy_admin_address = get_proxy_admin_address(client, proxy_address).await?;

    write_deployed_address(deployments_path, MY_TOKEN_PROXY_CONTRACT_KEY, proxy_address)?;
    write_deployed_address(
        deployments_path,
        MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY,
        proxy_admin_address,
    )?;

    info!("Proxy contract deployed at {:#x}", proxy_address);
    info!("Proxy admin contract deployed at {:#x}", proxy_admin_address);

    Ok((proxy_address, proxy_admin_address))
}

/// Builds & deploys a Stylus contract, returning its address
pub async fn build_and_deploy_stylus_contract(
    args: &DeployStylusArgs,
    client: &DeployerClient,
    rpc_url: &str,
    priv_key: &str,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    let wasm_file_path = build_stylus_contract(args.contract)?;
    deploy_stylus_contract(
        wasm_file_path,
        rpc_url,
        priv_key,
        client,
        args.contract,
        deployments_path,
    )
    .await
}

/// Points the proxy at a new implementation through the proxy admin,
/// atomically calling the implementation with the given calldata
pub async fn upgrade(
    args: &UpgradeArgs,
    client: &DeployerClient,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let proxy_admin_address = address_or_deployed(
        args.proxy_admin.as_deref(),
        deployments_path,
        MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY,
    )?;
    let proxy_address =
        address_or_deployed(args.proxy.as_deref(), deployments_path, MY_TOKEN_PROXY_CONTRACT_KEY)?;
    let implementation_address = address_or_deployed(
        args.implementation.as_deref(),
        deployments_path,
        MY_TOKEN_2_CONTRACT_KEY,
    )?;

    let data = match &args.calldata {
        Some(calldata) => parse_calldata(calldata)?,
        None => {
            warn!("Upgrading without calldata, no reinitializer will run");
            Bytes::new()
        }
    };

    let proxy_admin = ProxyAdmin::new(proxy_admin_address, client.provider.clone());
    let receipt = proxy_admin
        .upgradeAndCall(proxy_address, implementation_address, data)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(String::from("upgrade transaction reverted")));
    }

    info!("Proxy {:#x} upgraded to {:#x}", proxy_address, implementation_address);
    Ok(())
}

/// Deploys the first token version behind a proxy, then deploys the
/// second version and upgrades the proxy to it, running its reinitializer
pub async fn deploy_and_upgrade(
    args: &DeployAndUpgradeArgs,
    client: &DeployerClient,
    rpc_url: &str,
    priv_key: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let v1_args = DeployStylusArgs { contract: StylusContract::MyToken };
    let v1_address =
        build_and_deploy_stylus_contract(&v1_args, client, rpc_url, priv_key, deployments_path)
            .await?;

    let proxy_args = DeployProxyArgs {
        owner: None,
        proxy_bytecode: args.proxy_bytecode.clone(),
        implementation: Some(format!("{v1_address:#x}")),
    };
    let (proxy_address, proxy_admin_address) =
        deploy_proxy(&proxy_args, client, deployments_path).await?;
    info!("First version deployed to {:#x}", proxy_address);

    let v2_args = DeployStylusArgs { contract: StylusContract::MyToken2 };
    let v2_address =
        build_and_deploy_stylus_contract(&v2_args, client, rpc_url, priv_key, deployments_path)
            .await?;

    let upgrade_args = UpgradeArgs {
        proxy_admin: Some(format!("{proxy_admin_address:#x}")),
        proxy: Some(format!("{proxy_address:#x}")),
        implementation: Some(format!("{v2_address:#x}")),
        calldata: Some(hex::encode(initializeV2Call {}.abi_encode())),
    };
    upgrade(&upgrade_args, client, deployments_path).await?;
    info!("Successfully upgraded");

    Ok(())
}
