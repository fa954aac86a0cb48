//! The MyToken contract logic: an ownable, pausable, upgradeable ERC20 that also keeps
//! custody of deposited ETH.
//!
//! Each method here is the body of an external contract method. Access control and pause
//! checks are applied here, the bookkeeping itself lives in the submodules.

pub mod custody;
pub mod erc20;
pub mod rewards;

#[cfg(test)]
mod tests;

use alloy_primitives::{Address, U256};
use contracts_common::{
    constants::{INITIAL_SUPPLY, V1, V2},
    types::CallContext,
};

use crate::{
    backends::TokenBackend,
    components::{initializable::Initializable, ownable::Ownable, pausable::Pausable},
    errors::TokenError,
};

use self::{custody::EthCustody, erc20::Erc20, rewards::Rewards};

/// The external surface of the token
pub struct MyToken;

impl MyToken {
    // ----------------
    // | INITIALIZERS |
    // ----------------

    /// Sets the caller as owner and mints the initial supply to them.
    /// Can only be called once.
    pub fn initialize<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Initializable::_initialize(backend, V1)?;
        Ownable::_transfer_ownership(backend, ctx.sender);
        Erc20::_mint(backend, ctx.sender, U256::from(INITIAL_SUPPLY))
    }

    /// Reinitializes the contract to version 2 after an upgrade.
    ///
    /// Requires `initialize` to have run, and an implementation of at least version 2.
    /// Not gated on the owner, as the proxy admin invokes it atomically with the upgrade.
    pub fn initialize_v2<B: TokenBackend>(
        backend: &mut B,
        implementation_version: u64,
    ) -> Result<(), TokenError> {
        if implementation_version < V2 || Initializable::_get_initialized_version(backend) < V1 {
            return Err(TokenError::InvalidVersion);
        }

        Initializable::_initialize(backend, V2)
    }

    // -----------
    // | OWNABLE |
    // -----------

    /// Transfers ownership to `new_owner`
    pub fn transfer_ownership<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        Ownable::transfer_ownership(backend, ctx, new_owner)
    }

    /// Renounces ownership
    pub fn renounce_ownership<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
    ) -> Result<(), TokenError> {
        Ownable::renounce_ownership(backend, ctx)
    }

    // ---------
    // | ERC20 |
    // ---------

    /// Moves `amount` tokens from the caller to `to`
    pub fn transfer<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        to: Address,
        amount: U256,
    ) -> Result<bool, TokenError> {
        Pausable::when_not_paused(backend)?;
        Erc20::_transfer(backend, ctx.sender, to, amount)?;
        Ok(true)
    }

    /// Moves `amount` tokens from `from` to `to`, consuming the caller's allowance
    pub fn transfer_from<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, TokenError> {
        Pausable::when_not_paused(backend)?;
        Erc20::_spend_allowance(backend, from, ctx.sender, amount)?;
        Erc20::_transfer(backend, from, to, amount)?;
        Ok(true)
    }

    /// Sets the allowance of `spender` over the caller's tokens
    pub fn approve<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        spender: Address,
        amount: U256,
    ) -> Result<bool, TokenError> {
        Erc20::_approve(backend, ctx.sender, spender, amount)?;
        Ok(true)
    }

    /// Raises the allowance of `spender` over the caller's tokens by `added`
    pub fn increase_allowance<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        spender: Address,
        added: U256,
    ) -> Result<bool, TokenError> {
        let current = Erc20::allowance(backend, ctx.sender, spender);
        let amount = current.checked_add(added).ok_or(TokenError::Overflow)?;
        Erc20::_approve(backend, ctx.sender, spender, amount)?;
        Ok(true)
    }

    /// Lowers the allowance of `spender` over the caller's tokens by `subtracted`
    pub fn decrease_allowance<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        spender: Address,
        subtracted: U256,
    ) -> Result<bool, TokenError> {
        let current = Erc20::allowance(backend, ctx.sender, spender);
        let amount = current.checked_sub(subtracted).ok_or(TokenError::InsufficientAllowance)?;
        Erc20::_approve(backend, ctx.sender, spender, amount)?;
        Ok(true)
    }

    /// Mints `amount` tokens to `to`. Owner only.
    pub fn mint<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        Ownable::check_owner(backend, ctx)?;
        Pausable::when_not_paused(backend)?;
        Erc20::_mint(backend, to, amount)
    }

    /// Burns `amount` of the caller's tokens
    pub fn burn<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        amount: U256,
    ) -> Result<(), TokenError> {
        Pausable::when_not_paused(backend)?;
        Erc20::_burn(backend, ctx.sender, amount)
    }

    // -----------
    // | CUSTODY |
    // -----------

    /// Records the ETH attached to the call against the caller
    pub fn deposit<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Pausable::when_not_paused(backend)?;
        EthCustody::deposit(backend, ctx)
    }

    /// Pays the caller's recorded deposit back to them
    pub fn withdraw_balance<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
    ) -> Result<U256, TokenError> {
        EthCustody::withdraw_balance(backend, ctx)
    }

    /// Sweeps the contract's whole ETH balance to the owner. Owner only.
    pub fn withdraw_all<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
    ) -> Result<U256, TokenError> {
        Ownable::check_owner(backend, ctx)?;
        EthCustody::_sweep(backend, ctx.sender)
    }

    // -----------
    // | REWARDS |
    // -----------

    /// Mints `holder` an amount equal to the current total supply. Owner only.
    pub fn make_holder_rich<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
        holder: Address,
    ) -> Result<U256, TokenError> {
        Ownable::check_owner(backend, ctx)?;
        Pausable::when_not_paused(backend)?;
        Rewards::_make_holder_rich(backend, holder)
    }

    // ---------
    // | ADMIN |
    // ---------

    /// Pauses the contract. Owner only.
    pub fn pause<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Ownable::check_owner(backend, ctx)?;
        Pausable::_pause(backend, ctx)
    }

    /// Unpauses the contract. Owner only.
    pub fn unpause<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        Ownable::check_owner(backend, ctx)?;
        Pausable::_unpause(backend, ctx)
    }
}
