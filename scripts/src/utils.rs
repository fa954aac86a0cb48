//! Utilities for the deploy scripts.

use std::{
    fs::{self, File},
    io::Read,
    iter,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    str::FromStr,
};

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol_types::SolValue,
    transports::http::reqwest::Url,
};
use itertools::Itertools;
use json::JsonValue;
use tracing::info;

use crate::{
    constants::{
        AGGRESSIVE_OPTIMIZATION_FLAG, BUILD_COMMAND, CARGO_COMMAND, DEPLOYMENTS_KEY,
        DEPLOY_COMMAND, NIGHTLY_TOOLCHAIN_SELECTOR, NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT,
        OPT_WASM_EXTENSION, PROXY_ADMIN_STORAGE_SLOT, RELEASE_PATH_SEGMENT, STYLUS_COMMAND,
        STYLUS_CONTRACTS_CRATE_NAME, STYLUS_CONTRACTS_WASM_FILE, TARGET_PATH_SEGMENT,
        WASM_OPT_COMMAND, WASM_TARGET_TRIPLE, Z_FLAGS,
    },
    errors::ScriptError,
    types::{DeployerClient, StylusContract},
};

/// Sets up the RPC client with which to send transactions, signing with the given private key
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DeployerClient, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let address = signer.address();

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(DeployerClient {
        provider: DynProvider::<Ethereum>::new(provider),
        address,
    })
}

/// Parses a hex address given on the command line
pub fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Parses hex calldata given on the command line, with or without a `0x` prefix
pub fn parse_calldata(calldata: &str) -> Result<Bytes, ScriptError> {
    hex::decode(calldata.trim().trim_start_matches("0x"))
        .map(Bytes::from)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

// ---------------
// | DEPLOYMENTS |
// ---------------

/// Reads and parses a JSON file
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the address stored under `contract_key` in the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(format!(
                    "could not parse {contract_key} address from deployments file"
                ))
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parses the address given on the command line, or falls back
/// to the one stored under `contract_key` in the deployments file
pub fn address_or_deployed(
    address: Option<&str>,
    deployments_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    match address {
        Some(address) => parse_address(address),
        None => parse_addr_from_deployments_file(deployments_path, contract_key),
    }
}

/// Stores `address` under `contract_key` in the deployments file,
/// creating the file if it doesn't exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

// ---------
// | PROXY |
// ---------

/// Reads the hex-encoded creation bytecode of the proxy contract
pub fn read_proxy_bytecode(path: &Path) -> Result<Vec<u8>, ScriptError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    hex::decode(contents.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Builds the deployment code of the proxy contract: its creation bytecode, followed by
/// its ABI-encoded constructor arguments `(implementation, owner, data)`
pub fn proxy_deploy_code(
    bytecode: Vec<u8>,
    implementation: Address,
    owner: Address,
    data: Bytes,
) -> Bytes {
    let constructor_args = (implementation, owner, data).abi_encode_params();
    [bytecode, constructor_args].concat().into()
}

/// Deploys a contract from the given deployment code, returning its address
pub async fn deploy_contract(
    client: &DeployerClient,
    deploy_code: Bytes,
) -> Result<Address, ScriptError> {
    let tx = TransactionRequest::default().with_deploy_code(deploy_code);

    let receipt = client
        .provider
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(String::from(
            "deployment transaction reverted",
        )));
    }

    receipt.contract_address.ok_or(ScriptError::ContractDeployment(String::from(
        "no contract address in deployment receipt",
    )))
}

/// Reads the address of the proxy admin contract from the proxy's storage.
///
/// This is the recommended way to get the proxy admin address:
/// https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
pub async fn get_proxy_admin_address(
    client: &DeployerClient,
    proxy_address: Address,
) -> Result<Address, ScriptError> {
    let slot = U256::from_str(PROXY_ADMIN_STORAGE_SLOT)
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    let slot_value: [u8; NUM_BYTES_STORAGE_SLOT] = client
        .provider
        .get_storage_at(proxy_address, slot)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .to_be_bytes();

    Ok(Address::from_slice(
        &slot_value[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
    ))
}

// ----------
// | STYLUS |
// ----------

/// Runs the given command, mapping a failed exit status to a compilation error
fn command_success_or(mut cmd: Command, err_msg: &str) -> Result<(), ScriptError> {
    if !cmd
        .output()
        .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
        .status
        .success()
    {
        Err(ScriptError::ContractCompilation(String::from(err_msg)))
    } else {
        Ok(())
    }
}

/// Compiles the given Stylus contract to WASM and optimizes the resulting binary,
/// returning the path to the optimized WASM file.
///
/// Assumes that `cargo`, the `nightly` toolchain, and `wasm-opt` are locally available.
pub fn build_stylus_contract(contract: StylusContract) -> Result<PathBuf, ScriptError> {
    let current_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_path = current_dir
        .parent()
        .ok_or(ScriptError::ContractCompilation(String::from(
            "Could not find contracts directory",
        )))?;

    let mut build_cmd = Command::new(CARGO_COMMAND);
    build_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    // Build from the workspace root
    build_cmd.current_dir(workspace_path);
    // Use the nightly toolchain, this allows us to use the -Z flags below
    build_cmd.arg(NIGHTLY_TOOLCHAIN_SELECTOR);
    build_cmd.arg(BUILD_COMMAND);
    build_cmd.arg("-r");
    build_cmd.arg("-p");
    build_cmd.arg(STYLUS_CONTRACTS_CRATE_NAME);
    // The contract's feature selects which implementation version gets built
    build_cmd.arg("--features");
    build_cmd.arg(contract.to_string());
    build_cmd.arg("--target");
    build_cmd.arg(WASM_TARGET_TRIPLE);
    // Set the Z flags, used to optimize the resulting binary size.
    // See constants.rs for the list of flags.
    let z_flags = iter::repeat("-Z")
        .take(Z_FLAGS.len())
        .interleave_shortest(Z_FLAGS);
    build_cmd.args(z_flags);

    info!("Building {} contract", contract);
    command_success_or(build_cmd, "Failed to build contract WASM")?;

    let wasm_file_path = workspace_path
        .join(TARGET_PATH_SEGMENT)
        .join(WASM_TARGET_TRIPLE)
        .join(RELEASE_PATH_SEGMENT)
        .join(STYLUS_CONTRACTS_WASM_FILE);

    // Both versions build to the same file, so the optimized
    // output is named after the contract
    let opt_wasm_file_path =
        wasm_file_path.with_file_name(format!("{contract}.{OPT_WASM_EXTENSION}"));

    let mut opt_cmd = Command::new(WASM_OPT_COMMAND);
    opt_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    opt_cmd.arg(wasm_file_path);
    opt_cmd.arg("-o");
    opt_cmd.arg(opt_wasm_file_path.clone());
    opt_cmd.arg(AGGRESSIVE_OPTIMIZATION_FLAG);

    command_success_or(opt_cmd, "Failed to optimize contract WASM")?;

    Ok(opt_wasm_file_path)
}

/// Deploys the given WASM binary with `cargo stylus`, recording the deployed address
/// in the deployments file
pub async fn deploy_stylus_contract(
    wasm_file_path: PathBuf,
    rpc_url: &str,
    priv_key: &str,
    client: &DeployerClient,
    contract: StylusContract,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    // Get expected deployment address
    let deployer_nonce = client
        .provider
        .get_transaction_count(client.address)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;
    let deployed_address = client.address.create(deployer_nonce);

    // Run deploy command
    let mut deploy_cmd = Command::new(CARGO_COMMAND);
    deploy_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    deploy_cmd.arg(STYLUS_COMMAND);
    deploy_cmd.arg(DEPLOY_COMMAND);
    deploy_cmd.arg("--wasm-file");
    deploy_cmd.arg(wasm_file_path);
    deploy_cmd.arg("-e");
    deploy_cmd.arg(rpc_url);
    deploy_cmd.arg("--private-key");
    deploy_cmd.arg(priv_key);

    command_success_or(deploy_cmd, "Failed to deploy Stylus contract")?;

    // Write deployed address to deployments file
    write_deployed_address(
        deployments_path,
        contract.deployments_key(),
        deployed_address,
    )?;

    info!("{} contract deployed at {:#x}", contract, deployed_address);
    Ok(deployed_address)
}
