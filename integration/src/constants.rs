//! Constants used in the integration tests

/// The default hostport that the Nitro devnet L2 node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8547";

/// The default private key that the Nitro devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

/// The default path of the deployments file written by the deploy scripts
pub(crate) const DEFAULT_DEPLOYMENTS_FILE: &str = "deployments.json";

/// The amount of ETH, in wei, deposited in the custody tests (0.01 ETH)
pub(crate) const DEPOSIT_AMOUNT: u128 = 10_000_000_000_000_000;

/// The amount of ETH, in wei, sent to each freshly generated test account (0.1 ETH)
pub(crate) const FUNDING_AMOUNT: u128 = 100_000_000_000_000_000;

/// The number of accounts depositing ETH before the owner sweeps it
pub(crate) const NUM_DEPOSITORS: usize = 5;

/// The number of attempts made at fetching a transaction receipt
pub(crate) const RECEIPT_FETCH_ATTEMPTS: usize = 10;

/// The delay between attempts at fetching a transaction receipt, in milliseconds
pub(crate) const RECEIPT_FETCH_DELAY_MS: u64 = 100;

/// The amount of tokens moved in the token tests, in base units
pub(crate) const TOKEN_AMOUNT: u128 = 1_000;
