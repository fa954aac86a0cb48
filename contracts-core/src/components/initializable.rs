//! Mirrors OpenZeppelin's `Initializable` contract for protected initialization:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/utils/Initializable.sol
//!
//! But made significantly simpler because the functions defined here are not modifiers, as in Solidity.

use contracts_common::{solidity::Initialized, types::TokenEvent};

use crate::{
    backends::{TokenBackend, TokenStorage},
    errors::TokenError,
};

/// Versioned, run-once initialization
pub struct Initializable;

impl Initializable {
    /// Marks the contract as initialized to `version`.
    ///
    /// Versions must strictly increase, so each initializer runs at most once and
    /// later initializers can be added by upgrades.
    pub fn _initialize<B: TokenBackend>(backend: &mut B, version: u64) -> Result<(), TokenError> {
        if backend.get_initialized_version() >= version {
            return Err(TokenError::AlreadyInitialized);
        }

        backend.set_initialized_version(version);
        backend.emit(TokenEvent::Initialized(Initialized { version }));
        Ok(())
    }

    /// Gets the highest version that has been initialized.
    pub fn _get_initialized_version<S: TokenStorage>(storage: &S) -> u64 {
        storage.get_initialized_version()
    }
}
