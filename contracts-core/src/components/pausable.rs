//! Mirrors OpenZeppelin's `Pausable` contract for emergency stops:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/utils/Pausable.sol

use contracts_common::{
    solidity::{Paused, Unpaused},
    types::{CallContext, TokenEvent},
};

use crate::{
    backends::{TokenBackend, TokenStorage},
    errors::TokenError,
};

/// A pause switch guarding user-facing operations
pub struct Pausable;

impl Pausable {
    /// Whether the contract is paused
    pub fn paused<S: TokenStorage>(storage: &S) -> bool {
        storage.get_paused()
    }

    /// Reverts if the contract is paused
    pub fn when_not_paused<S: TokenStorage>(storage: &S) -> Result<(), TokenError> {
        if storage.get_paused() {
            return Err(TokenError::Paused);
        }

        Ok(())
    }

    /// Reverts if the contract is not paused
    pub fn when_paused<S: TokenStorage>(storage: &S) -> Result<(), TokenError> {
        if !storage.get_paused() {
            return Err(TokenError::NotPaused);
        }

        Ok(())
    }

    /// Pauses the contract, emitting `Paused`. Access control is left to the caller.
    pub fn _pause<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Self::when_not_paused(backend)?;
        backend.set_paused(true);
        backend.emit(TokenEvent::Paused(Paused {
            account: ctx.sender,
        }));
        Ok(())
    }

    /// Unpauses the contract, emitting `Unpaused`. Access control is left to the caller.
    pub fn _unpause<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Self::when_paused(backend)?;
        backend.set_paused(false);
        backend.emit(TokenEvent::Unpaused(Unpaused {
            account: ctx.sender,
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use contracts_common::types::CallContext;

    use super::Pausable;
    use crate::{errors::TokenError, test_helpers::MemoryBackend};

    #[test]
    fn test_pause_toggles() {
        let mut backend = MemoryBackend::default();
        let ctx = CallContext::new(Address::with_last_byte(1));

        assert_eq!(Pausable::_unpause(&mut backend, &ctx), Err(TokenError::NotPaused));

        Pausable::_pause(&mut backend, &ctx).unwrap();
        assert!(Pausable::paused(&backend));
        assert_eq!(Pausable::_pause(&mut backend, &ctx), Err(TokenError::Paused));
        assert_eq!(Pausable::when_not_paused(&backend), Err(TokenError::Paused));

        Pausable::_unpause(&mut backend, &ctx).unwrap();
        assert!(!Pausable::paused(&backend));
    }
}
