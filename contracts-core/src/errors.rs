//! Errors stemming from token operations

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use contracts_common::constants::{
    ALREADY_INITIALIZED_ERROR_MESSAGE, ETH_TRANSFER_FAILED_ERROR_MESSAGE,
    INSUFFICIENT_ALLOWANCE_ERROR_MESSAGE, INSUFFICIENT_BALANCE_ERROR_MESSAGE,
    INVALID_VERSION_ERROR_MESSAGE, NOTHING_TO_WITHDRAW_ERROR_MESSAGE, NOT_OWNER_ERROR_MESSAGE,
    OVERFLOW_ERROR_MESSAGE, PAUSED_ERROR_MESSAGE, UNPAUSED_ERROR_MESSAGE,
    ZERO_ADDRESS_ERROR_MESSAGE, ZERO_DEPOSIT_ERROR_MESSAGE,
};

/// Errors that cause a token call to revert
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The caller is not the owner
    NotOwner,
    /// The initializer for this version already ran
    AlreadyInitialized,
    /// The requested initializer version is out of order or unsupported
    InvalidVersion,
    /// A deposit was made with no value attached
    ZeroDeposit,
    /// The token balance does not cover the amount
    InsufficientBalance,
    /// The spender's allowance does not cover the amount
    InsufficientAllowance,
    /// The caller has no recorded ETH deposit
    NothingToWithdraw,
    /// The contract is paused
    Paused,
    /// The contract is not paused
    NotPaused,
    /// The zero address was given where an account is required
    ZeroAddress,
    /// A balance, allowance, or supply would overflow
    Overflow,
    /// Sending ETH out of the contract failed
    EthTransferFailed,
}

impl TokenError {
    /// The revert message for this error
    pub fn message(&self) -> &'static [u8] {
        match self {
            TokenError::NotOwner => NOT_OWNER_ERROR_MESSAGE,
            TokenError::AlreadyInitialized => ALREADY_INITIALIZED_ERROR_MESSAGE,
            TokenError::InvalidVersion => INVALID_VERSION_ERROR_MESSAGE,
            TokenError::ZeroDeposit => ZERO_DEPOSIT_ERROR_MESSAGE,
            TokenError::InsufficientBalance => INSUFFICIENT_BALANCE_ERROR_MESSAGE,
            TokenError::InsufficientAllowance => INSUFFICIENT_ALLOWANCE_ERROR_MESSAGE,
            TokenError::NothingToWithdraw => NOTHING_TO_WITHDRAW_ERROR_MESSAGE,
            TokenError::Paused => PAUSED_ERROR_MESSAGE,
            TokenError::NotPaused => UNPAUSED_ERROR_MESSAGE,
            TokenError::ZeroAddress => ZERO_ADDRESS_ERROR_MESSAGE,
            TokenError::Overflow => OVERFLOW_ERROR_MESSAGE,
            TokenError::EthTransferFailed => ETH_TRANSFER_FAILED_ERROR_MESSAGE,
        }
    }
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Revert messages are ASCII constants
        let msg = core::str::from_utf8(self.message()).unwrap_or("token error");
        write!(f, "{}", msg)
    }
}

/// Revert payloads of external contract methods are raw bytes
impl From<TokenError> for Vec<u8> {
    fn from(err: TokenError) -> Vec<u8> {
        err.message().to_vec()
    }
}
