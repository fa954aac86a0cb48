//! Constants used in the deploy scripts

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The name of the crate in this workspace in which the Stylus contracts
/// are defined
pub const STYLUS_CONTRACTS_CRATE_NAME: &str = "contracts-stylus";

/// The file name of the WASM binary built from the Stylus contracts crate
pub const STYLUS_CONTRACTS_WASM_FILE: &str = "contracts_stylus.wasm";

/// The name of the Cargo command
pub const CARGO_COMMAND: &str = "cargo";

/// The name of the build command
pub const BUILD_COMMAND: &str = "build";

/// The target triple for the WASM build target
pub const WASM_TARGET_TRIPLE: &str = "wasm32-unknown-unknown";

/// The nightly toolchain selector
pub const NIGHTLY_TOOLCHAIN_SELECTOR: &str = "+nightly";

/// Nightly Z flags to add to build command
pub const Z_FLAGS: [&str; 3] = [
    "unstable-options",
    "build-std=std,panic_abort",
    "build-std-features=panic_immediate_abort",
];

/// The name of the target directory
pub const TARGET_PATH_SEGMENT: &str = "target";

/// The name of the release directory
pub const RELEASE_PATH_SEGMENT: &str = "release";

/// The extension of an optimized WASM file
pub const OPT_WASM_EXTENSION: &str = "opt.wasm";

/// The name of the `wasm-opt` command
pub const WASM_OPT_COMMAND: &str = "wasm-opt";

/// The most aggressive optimization flag for the `wasm-opt` command
pub const AGGRESSIVE_OPTIMIZATION_FLAG: &str = "-O4";

/// The name of the stylus command
pub const STYLUS_COMMAND: &str = "stylus";

/// The name of the deploy command
pub const DEPLOY_COMMAND: &str = "deploy";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The v1 token implementation contract key in the deployments file
pub const MY_TOKEN_CONTRACT_KEY: &str = "my_token_contract";

/// The v2 token implementation contract key in the deployments file
pub const MY_TOKEN_2_CONTRACT_KEY: &str = "my_token_2_contract";

/// The token proxy contract key in the deployments file
pub const MY_TOKEN_PROXY_CONTRACT_KEY: &str = "my_token_proxy_contract";

/// The token proxy admin contract key in the deployments file
pub const MY_TOKEN_PROXY_ADMIN_CONTRACT_KEY: &str = "my_token_proxy_admin_contract";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";
