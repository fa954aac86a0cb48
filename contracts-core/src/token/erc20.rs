//! The ERC20 ledger: balances, allowances, and total supply.
//!
//! Modeled on OpenZeppelin's `ERC20`, with every balance and supply update checked so that
//! the sum of balances always equals the total supply.

use alloy_primitives::{Address, U256};
use contracts_common::{
    constants::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL},
    solidity::{Approval, Transfer},
    types::TokenEvent,
};

use crate::{
    backends::{TokenBackend, TokenStorage},
    errors::TokenError,
};

/// Balance and allowance bookkeeping
pub struct Erc20;

impl Erc20 {
    // -----------
    // | GETTERS |
    // -----------

    /// The name of the token
    pub fn name() -> &'static str {
        TOKEN_NAME
    }

    /// The ticker symbol of the token
    pub fn symbol() -> &'static str {
        TOKEN_SYMBOL
    }

    /// The number of decimals used to display amounts
    pub fn decimals() -> u8 {
        TOKEN_DECIMALS
    }

    /// The total token supply
    pub fn total_supply<S: TokenStorage>(storage: &S) -> U256 {
        storage.get_total_supply()
    }

    /// The token balance of `account`
    pub fn balance_of<S: TokenStorage>(storage: &S, account: Address) -> U256 {
        storage.get_balance(account)
    }

    /// The remaining amount `spender` may transfer on behalf of `owner`
    pub fn allowance<S: TokenStorage>(storage: &S, owner: Address, spender: Address) -> U256 {
        storage.get_allowance(owner, spender)
    }

    // -------------
    // | INTERNALS |
    // -------------

    /// Moves `amount` tokens from `from` to `to`
    pub fn _transfer<B: TokenBackend>(
        backend: &mut B,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if from == Address::ZERO || to == Address::ZERO {
            return Err(TokenError::ZeroAddress);
        }

        let from_balance = backend.get_balance(from);
        let new_from_balance =
            from_balance.checked_sub(amount).ok_or(TokenError::InsufficientBalance)?;
        backend.set_balance(from, new_from_balance);

        // Read after the debit so that a self-transfer nets out
        let to_balance = backend.get_balance(to);
        let new_to_balance = to_balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        backend.set_balance(to, new_to_balance);

        backend.emit(TokenEvent::Transfer(Transfer {
            from,
            to,
            value: amount,
        }));
        Ok(())
    }

    /// Creates `amount` tokens and assigns them to `to`
    pub fn _mint<B: TokenBackend>(
        backend: &mut B,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if to == Address::ZERO {
            return Err(TokenError::ZeroAddress);
        }

        let supply = backend.get_total_supply().checked_add(amount).ok_or(TokenError::Overflow)?;
        let balance = backend.get_balance(to).checked_add(amount).ok_or(TokenError::Overflow)?;
        backend.set_total_supply(supply);
        backend.set_balance(to, balance);

        backend.emit(TokenEvent::Transfer(Transfer {
            from: Address::ZERO,
            to,
            value: amount,
        }));
        Ok(())
    }

    /// Destroys `amount` tokens held by `from`
    pub fn _burn<B: TokenBackend>(
        backend: &mut B,
        from: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if from == Address::ZERO {
            return Err(TokenError::ZeroAddress);
        }

        let balance =
            backend.get_balance(from).checked_sub(amount).ok_or(TokenError::InsufficientBalance)?;
        let supply = backend.get_total_supply().checked_sub(amount).ok_or(TokenError::Overflow)?;
        backend.set_balance(from, balance);
        backend.set_total_supply(supply);

        backend.emit(TokenEvent::Transfer(Transfer {
            from,
            to: Address::ZERO,
            value: amount,
        }));
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s tokens to `amount`
    pub fn _approve<B: TokenBackend>(
        backend: &mut B,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if owner == Address::ZERO || spender == Address::ZERO {
            return Err(TokenError::ZeroAddress);
        }

        backend.set_allowance(owner, spender, amount);
        backend.emit(TokenEvent::Approval(Approval {
            owner,
            spender,
            value: amount,
        }));
        Ok(())
    }

    /// Consumes `amount` of the allowance of `spender` over `owner`'s tokens.
    ///
    /// An allowance of `U256::MAX` is treated as infinite and never decreases.
    /// No `Approval` event is emitted.
    pub fn _spend_allowance<B: TokenBackend>(
        backend: &mut B,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let current = backend.get_allowance(owner, spender);
        if current == U256::MAX {
            return Ok(());
        }

        let remaining = current.checked_sub(amount).ok_or(TokenError::InsufficientAllowance)?;
        backend.set_allowance(owner, spender, remaining);
        Ok(())
    }
}
