//! Constants that parameterize the token, its versions, and its revert messages

/// The name of the token
pub const TOKEN_NAME: &str = "MyToken";

/// The ticker symbol of the token
pub const TOKEN_SYMBOL: &str = "MTK";

/// The number of decimals used to display token amounts
pub const TOKEN_DECIMALS: u8 = 18;

/// The supply minted to the owner on initialization,
/// one whole token in base units (10^18)
pub const INITIAL_SUPPLY: u128 = 1_000_000_000_000_000_000;

/// The initializer version set by `initialize`
pub const V1: u64 = 1;

/// The initializer version set by `initializeV2`
pub const V2: u64 = 2;

// -------------------
// | REVERT MESSAGES |
// -------------------

/// The revert message when calling an owner-only method
/// when the caller is not the owner
pub const NOT_OWNER_ERROR_MESSAGE: &[u8] = b"not owner";

/// The revert message when an initializer runs a second time
pub const ALREADY_INITIALIZED_ERROR_MESSAGE: &[u8] = b"already initialized";

/// The revert message when attempting to initialize
/// the contract to a past or unsupported version
pub const INVALID_VERSION_ERROR_MESSAGE: &[u8] = b"invalid version";

/// The revert message when a deposit carries no value
pub const ZERO_DEPOSIT_ERROR_MESSAGE: &[u8] = b"zero deposit";

/// The revert message when an account's token balance
/// does not cover the requested amount
pub const INSUFFICIENT_BALANCE_ERROR_MESSAGE: &[u8] = b"insufficient balance";

/// The revert message when a spender's allowance
/// does not cover the requested amount
pub const INSUFFICIENT_ALLOWANCE_ERROR_MESSAGE: &[u8] = b"insufficient allowance";

/// The revert message when withdrawing with no recorded deposit
pub const NOTHING_TO_WITHDRAW_ERROR_MESSAGE: &[u8] = b"nothing to withdraw";

/// The revert message when calling an unpaused-only method
/// when the contract is paused
pub const PAUSED_ERROR_MESSAGE: &[u8] = b"paused";

/// The revert message when calling a paused-only method
/// when the contract is unpaused
pub const UNPAUSED_ERROR_MESSAGE: &[u8] = b"unpaused";

/// The revert message when an account or owner address
/// is attempted to be set to the zero address
pub const ZERO_ADDRESS_ERROR_MESSAGE: &[u8] = b"zero address";

/// The revert message when a balance, allowance, or supply overflows
pub const OVERFLOW_ERROR_MESSAGE: &[u8] = b"arithmetic overflow";

/// The revert message when sending ETH out of the contract fails
pub const ETH_TRANSFER_FAILED_ERROR_MESSAGE: &[u8] = b"eth transfer failed";
