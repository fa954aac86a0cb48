//! "Backends" representing the state and host functionality the token logic runs against,
//! either the Stylus VM in a smart contract context, or in-memory structures in tests.
//!
//! This abstraction exists primarly to run the same contract logic natively in tests.

use alloy_primitives::{Address, U256};
use contracts_common::types::TokenEvent;

use crate::errors::TokenError;

/// An entry of the ETH custody ledger.
///
/// The amount only counts while `epoch` matches the ledger's current custody epoch,
/// which lets a full sweep invalidate every record without iterating over them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepositRecord {
    /// The custody epoch in which the record was last written
    pub epoch: u64,
    /// The deposited amount, in wei
    pub amount: U256,
}

/// Persistent contract state.
///
/// The type that implements this trait is either the contract's storage layout in the
/// Stylus VM, or a plain in-memory structure in a testing context.
pub trait TokenStorage {
    // -----------
    // | OWNABLE |
    // -----------

    /// The current owner
    fn get_owner(&self) -> Address;
    /// Overwrite the owner
    fn set_owner(&mut self, owner: Address);

    // -----------------
    // | INITIALIZABLE |
    // -----------------

    /// The highest initializer version that ran
    fn get_initialized_version(&self) -> u64;
    /// Overwrite the initialized version
    fn set_initialized_version(&mut self, version: u64);

    // ------------
    // | PAUSABLE |
    // ------------

    /// Whether the contract is paused
    fn get_paused(&self) -> bool;
    /// Overwrite the paused flag
    fn set_paused(&mut self, paused: bool);

    // ---------
    // | ERC20 |
    // ---------

    /// The total token supply
    fn get_total_supply(&self) -> U256;
    /// Overwrite the total token supply
    fn set_total_supply(&mut self, supply: U256);
    /// The token balance of `account`
    fn get_balance(&self, account: Address) -> U256;
    /// Overwrite the token balance of `account`
    fn set_balance(&mut self, account: Address, balance: U256);
    /// The amount `spender` may transfer on behalf of `owner`
    fn get_allowance(&self, owner: Address, spender: Address) -> U256;
    /// Overwrite the allowance of `spender` over `owner`'s tokens
    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256);

    // -----------
    // | CUSTODY |
    // -----------

    /// The current custody epoch
    fn get_custody_epoch(&self) -> u64;
    /// Overwrite the custody epoch
    fn set_custody_epoch(&mut self, epoch: u64);
    /// The raw custody record of `account`, possibly from a past epoch
    fn get_deposit_record(&self, account: Address) -> DepositRecord;
    /// Overwrite the custody record of `account`
    fn set_deposit_record(&mut self, account: Address, record: DepositRecord);
    /// The sum of all live custody records
    fn get_total_eth_deposits(&self) -> U256;
    /// Overwrite the sum of all live custody records
    fn set_total_eth_deposits(&mut self, total: U256);
}

/// Host functionality of the VM the contract executes in.
///
/// The type that implements this trait should either call out to the Stylus host in a
/// smart contract context, or record effects in memory in a testing context.
pub trait HostBackend {
    /// Emit an event log
    fn emit(&mut self, event: TokenEvent);
    /// The ETH balance held by the contract, including the value of the current call
    fn contract_balance(&self) -> U256;
    /// Send `amount` wei from the contract to `to`
    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), TokenError>;
}

/// A full backend for the token logic
pub trait TokenBackend: TokenStorage + HostBackend {}

impl<T: TokenStorage + HostBackend> TokenBackend for T {}
