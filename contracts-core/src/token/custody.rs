//! The ETH custody ledger.
//!
//! Tracks the ETH each account has deposited, separately from the contract's actual balance.
//! Records are scoped to a custody epoch: advancing the epoch invalidates every outstanding
//! record at once, which is how a full sweep clears the ledger without iterating over it.

use alloy_primitives::{Address, U256};
use contracts_common::{
    solidity::{EthDeposited, EthWithdrawn},
    types::{CallContext, TokenEvent},
};

use crate::{
    backends::{DepositRecord, TokenBackend, TokenStorage},
    errors::TokenError,
};

/// Deposit and withdrawal bookkeeping for ETH held by the contract
pub struct EthCustody;

impl EthCustody {
    /// The live deposit of `account`, zero if its record predates the current epoch
    pub fn get_eth_balance<S: TokenStorage>(storage: &S, account: Address) -> U256 {
        let record = storage.get_deposit_record(account);
        if record.epoch == storage.get_custody_epoch() {
            record.amount
        } else {
            U256::ZERO
        }
    }

    /// The sum of all live deposits
    pub fn total_eth_deposits<S: TokenStorage>(storage: &S) -> U256 {
        storage.get_total_eth_deposits()
    }

    /// Records the value attached to the call against the caller
    pub fn deposit<B: TokenBackend>(backend: &mut B, ctx: &CallContext) -> Result<(), TokenError> {
        if ctx.value == U256::ZERO {
            return Err(TokenError::ZeroDeposit);
        }

        let epoch = backend.get_custody_epoch();
        let amount = Self::get_eth_balance(backend, ctx.sender)
            .checked_add(ctx.value)
            .ok_or(TokenError::Overflow)?;
        let total =
            backend.get_total_eth_deposits().checked_add(ctx.value).ok_or(TokenError::Overflow)?;

        backend.set_deposit_record(ctx.sender, DepositRecord { epoch, amount });
        backend.set_total_eth_deposits(total);
        debug_assert!(total <= backend.contract_balance());

        backend.emit(TokenEvent::EthDeposited(EthDeposited {
            account: ctx.sender,
            amount: ctx.value,
        }));
        Ok(())
    }

    /// Pays the caller's live deposit back to the caller, clearing its record.
    ///
    /// Returns the amount paid out.
    pub fn withdraw_balance<B: TokenBackend>(
        backend: &mut B,
        ctx: &CallContext,
    ) -> Result<U256, TokenError> {
        let amount = Self::get_eth_balance(backend, ctx.sender);
        if amount == U256::ZERO {
            return Err(TokenError::NothingToWithdraw);
        }

        let epoch = backend.get_custody_epoch();
        let total =
            backend.get_total_eth_deposits().checked_sub(amount).ok_or(TokenError::Overflow)?;
        backend.set_deposit_record(ctx.sender, DepositRecord { epoch, amount: U256::ZERO });
        backend.set_total_eth_deposits(total);

        backend.transfer_eth(ctx.sender, amount)?;
        backend.emit(TokenEvent::EthWithdrawn(EthWithdrawn {
            account: ctx.sender,
            amount,
        }));
        Ok(amount)
    }

    /// Sweeps the contract's entire ETH balance to `recipient` and invalidates every
    /// outstanding deposit record. Access control is left to the caller.
    ///
    /// Returns the amount paid out.
    pub fn _sweep<B: TokenBackend>(backend: &mut B, recipient: Address) -> Result<U256, TokenError> {
        let amount = backend.contract_balance();

        let epoch = backend.get_custody_epoch().checked_add(1).ok_or(TokenError::Overflow)?;
        backend.set_custody_epoch(epoch);
        backend.set_total_eth_deposits(U256::ZERO);

        if amount > U256::ZERO {
            backend.transfer_eth(recipient, amount)?;
            backend.emit(TokenEvent::EthWithdrawn(EthWithdrawn {
                account: recipient,
                amount,
            }));
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use contracts_common::types::CallContext;

    use super::EthCustody;
    use crate::{errors::TokenError, test_helpers::MemoryBackend};

    /// Simulates a deposit call, crediting the contract with the attached value first
    fn deposit(backend: &mut MemoryBackend, ctx: &CallContext) -> Result<(), TokenError> {
        backend.credit_eth(backend.contract_address, ctx.value);
        EthCustody::deposit(backend, ctx)
    }

    #[test]
    fn test_deposits_accumulate() {
        let mut backend = MemoryBackend::default();
        let depositor = Address::with_last_byte(1);
        let ctx = CallContext::with_value(depositor, U256::from(5));

        deposit(&mut backend, &ctx).unwrap();
        deposit(&mut backend, &ctx).unwrap();
        assert_eq!(EthCustody::get_eth_balance(&backend, depositor), U256::from(10));
        assert_eq!(EthCustody::total_eth_deposits(&backend), U256::from(10));
    }

    #[test]
    fn test_zero_deposit() {
        let mut backend = MemoryBackend::default();
        let ctx = CallContext::new(Address::with_last_byte(1));

        assert_eq!(deposit(&mut backend, &ctx), Err(TokenError::ZeroDeposit));
    }

    #[test]
    fn test_withdraw_clears_record() {
        let mut backend = MemoryBackend::default();
        let depositor = Address::with_last_byte(1);

        deposit(&mut backend, &CallContext::with_value(depositor, U256::from(7))).unwrap();
        let paid = EthCustody::withdraw_balance(&mut backend, &CallContext::new(depositor)).unwrap();

        assert_eq!(paid, U256::from(7));
        assert_eq!(backend.eth_balance(depositor), U256::from(7));
        assert_eq!(EthCustody::get_eth_balance(&backend, depositor), U256::ZERO);
        assert_eq!(
            EthCustody::withdraw_balance(&mut backend, &CallContext::new(depositor)),
            Err(TokenError::NothingToWithdraw)
        );
    }

    #[test]
    fn test_sweep_invalidates_records() {
        let mut backend = MemoryBackend::default();
        let depositor = Address::with_last_byte(1);
        let recipient = Address::with_last_byte(2);

        deposit(&mut backend, &CallContext::with_value(depositor, U256::from(3))).unwrap();
        let swept = EthCustody::_sweep(&mut backend, recipient).unwrap();

        assert_eq!(swept, U256::from(3));
        assert_eq!(backend.eth_balance(recipient), U256::from(3));
        assert_eq!(EthCustody::get_eth_balance(&backend, depositor), U256::ZERO);
        assert_eq!(EthCustody::total_eth_deposits(&backend), U256::ZERO);

        // A fresh deposit after the sweep starts from zero
        deposit(&mut backend, &CallContext::with_value(depositor, U256::from(2))).unwrap();
        assert_eq!(EthCustody::get_eth_balance(&backend, depositor), U256::from(2));
    }

    #[test]
    fn test_empty_sweep_is_silent() {
        let mut backend = MemoryBackend::default();
        let recipient = Address::with_last_byte(2);

        let swept = EthCustody::_sweep(&mut backend, recipient).unwrap();

        assert_eq!(swept, U256::ZERO);
        assert_eq!(backend.custody_epoch, 1);
        assert!(backend.logs.is_empty());
    }
}
