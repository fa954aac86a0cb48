//! Mirrors OpenZeppelin's `Ownable` contract for access controls:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/access/Ownable.sol
//!
//! Since Stylus does not yet support constructors, the owner is set by the token's initializer.

use alloy_primitives::Address;
use contracts_common::{solidity::OwnershipTransferred, types::CallContext, types::TokenEvent};

use crate::{
    backends::{TokenBackend, TokenStorage},
    errors::TokenError,
};

/// Access control over owner-only methods
pub struct Ownable;

impl Ownable {
    /// The current owner
    pub fn owner<S: TokenStorage>(storage: &S) -> Address {
        storage.get_owner()
    }

    /// Transfers ownership to `new_owner`, which may not be the zero address
    pub fn transfer_ownership<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        Self::check_owner(backend, ctx)?;
        if new_owner == Address::ZERO {
            return Err(TokenError::ZeroAddress);
        }

        Self::_transfer_ownership(backend, new_owner);
        Ok(())
    }

    /// Leaves the contract without an owner, disabling every owner-only method
    pub fn renounce_ownership<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
    ) -> Result<(), TokenError> {
        Self::check_owner(backend, ctx)?;
        Self::_transfer_ownership(backend, Address::ZERO);
        Ok(())
    }

    /// Reverts unless the caller is the owner
    pub fn check_owner<S: TokenStorage>(storage: &S, ctx: &CallContext) -> Result<(), TokenError> {
        if storage.get_owner() != ctx.sender {
            return Err(TokenError::NotOwner);
        }

        Ok(())
    }

    /// Sets the owner without access checks
    pub fn _transfer_ownership<B: TokenBackend>(backend: &mut B, new_owner: Address) {
        let previous_owner = backend.get_owner();
        backend.set_owner(new_owner);

        backend.emit(TokenEvent::OwnershipTransferred(OwnershipTransferred {
            previous_owner,
            new_owner,
        }));
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use contracts_common::types::CallContext;

    use super::Ownable;
    use crate::{errors::TokenError, test_helpers::MemoryBackend};

    fn owned_backend(owner: Address) -> MemoryBackend {
        let mut backend = MemoryBackend::default();
        Ownable::_transfer_ownership(&mut backend, owner);
        backend
    }

    #[test]
    fn test_only_owner_transfers_ownership() {
        let owner = Address::with_last_byte(1);
        let other = Address::with_last_byte(2);
        let mut backend = owned_backend(owner);

        let res = Ownable::transfer_ownership(&mut backend, &CallContext::new(other), other);
        assert_eq!(res, Err(TokenError::NotOwner));

        Ownable::transfer_ownership(&mut backend, &CallContext::new(owner), other).unwrap();
        assert_eq!(Ownable::owner(&backend), other);
    }

    #[test]
    fn test_zero_owner_rejected() {
        let owner = Address::with_last_byte(1);
        let mut backend = owned_backend(owner);

        let res = Ownable::transfer_ownership(&mut backend, &CallContext::new(owner), Address::ZERO);
        assert_eq!(res, Err(TokenError::ZeroAddress));
        assert_eq!(Ownable::owner(&backend), owner);
    }

    #[test]
    fn test_renounce_ownership() {
        let owner = Address::with_last_byte(1);
        let mut backend = owned_backend(owner);

        Ownable::renounce_ownership(&mut backend, &CallContext::new(owner)).unwrap();
        assert_eq!(Ownable::owner(&backend), Address::ZERO);
        assert_eq!(
            Ownable::check_owner(&backend, &CallContext::new(owner)),
            Err(TokenError::NotOwner)
        );
    }
}
