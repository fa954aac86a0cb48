//! The MyToken smart contract: an ownable, pausable ERC20 that keeps custody of
//! deposited ETH, deployed behind an upgradeable proxy.
//!
//! All logic lives in `contracts-core`; the methods here only bind it to the ABI.

use alloc::{string::String, vec::Vec};
use contracts_core::{
    components::{initializable::Initializable, ownable::Ownable, pausable::Pausable},
    token::{custody::EthCustody, erc20::Erc20, MyToken},
};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap, StorageU256, StorageU64},
};

use crate::utils::{constants::IMPLEMENTATION_VERSION, helpers::call_context};

/// A custody ledger entry, mirroring `DepositRecord`
#[storage]
pub struct StorageDepositRecord {
    /// The custody epoch in which the record was last written
    pub(crate) epoch: StorageU64,
    /// The deposited amount, in wei
    pub(crate) amount: StorageU256,
}

/// The token's storage layout.
///
/// New fields may only be appended, as every implementation version shares this layout.
#[storage]
#[entrypoint]
pub struct MyTokenContract {
    /// The highest initializer version that ran
    pub(crate) initialized: StorageU64,
    /// The owner of the contract
    pub(crate) owner: StorageAddress,
    /// Whether the contract is paused
    pub(crate) paused: StorageBool,
    /// The total token supply
    pub(crate) total_supply: StorageU256,
    /// Token balances
    pub(crate) balances: StorageMap<Address, StorageU256>,
    /// Allowances, keyed by owner then spender
    pub(crate) allowances: StorageMap<Address, StorageMap<Address, StorageU256>>,
    /// The current custody epoch
    pub(crate) custody_epoch: StorageU64,
    /// ETH custody records
    pub(crate) deposit_records: StorageMap<Address, StorageDepositRecord>,
    /// The sum of all live custody records
    pub(crate) total_eth_deposits: StorageU256,
}

#[public]
impl MyTokenContract {
    // ----------------
    // | INITIALIZERS |
    // ----------------

    /// Initializes the token, making the caller its owner
    pub fn initialize(&mut self) -> Result<(), Vec<u8>> {
        MyToken::initialize(self, &call_context())?;
        Ok(())
    }

    /// Reinitializes the token after an upgrade to v2
    #[selector(name = "initializeV2")]
    pub fn initialize_v2(&mut self) -> Result<(), Vec<u8>> {
        MyToken::initialize_v2(self, IMPLEMENTATION_VERSION)?;
        Ok(())
    }

    /// The version of this implementation
    pub fn version(&self) -> Result<u64, Vec<u8>> {
        Ok(IMPLEMENTATION_VERSION)
    }

    /// The highest initializer version that ran
    pub fn initialized_version(&self) -> Result<u64, Vec<u8>> {
        Ok(Initializable::_get_initialized_version(self))
    }

    // -----------
    // | OWNABLE |
    // -----------

    /// The owner of the contract
    pub fn owner(&self) -> Result<Address, Vec<u8>> {
        Ok(Ownable::owner(self))
    }

    /// Transfers ownership to `new_owner`
    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), Vec<u8>> {
        MyToken::transfer_ownership(self, &call_context(), new_owner)?;
        Ok(())
    }

    /// Renounces ownership, leaving the contract ownerless
    pub fn renounce_ownership(&mut self) -> Result<(), Vec<u8>> {
        MyToken::renounce_ownership(self, &call_context())?;
        Ok(())
    }

    // ---------
    // | ERC20 |
    // ---------

    pub fn name(&self) -> Result<String, Vec<u8>> {
        Ok(Erc20::name().into())
    }

    pub fn symbol(&self) -> Result<String, Vec<u8>> {
        Ok(Erc20::symbol().into())
    }

    pub fn decimals(&self) -> Result<u8, Vec<u8>> {
        Ok(Erc20::decimals())
    }

    pub fn total_supply(&self) -> Result<U256, Vec<u8>> {
        Ok(Erc20::total_supply(self))
    }

    pub fn balance_of(&self, account: Address) -> Result<U256, Vec<u8>> {
        Ok(Erc20::balance_of(self, account))
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> Result<U256, Vec<u8>> {
        Ok(Erc20::allowance(self, owner, spender))
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> Result<bool, Vec<u8>> {
        Ok(MyToken::transfer(self, &call_context(), to, amount)?)
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, Vec<u8>> {
        Ok(MyToken::transfer_from(self, &call_context(), from, to, amount)?)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> Result<bool, Vec<u8>> {
        Ok(MyToken::approve(self, &call_context(), spender, amount)?)
    }

    pub fn increase_allowance(&mut self, spender: Address, added: U256) -> Result<bool, Vec<u8>> {
        Ok(MyToken::increase_allowance(self, &call_context(), spender, added)?)
    }

    pub fn decrease_allowance(
        &mut self,
        spender: Address,
        subtracted: U256,
    ) -> Result<bool, Vec<u8>> {
        Ok(MyToken::decrease_allowance(self, &call_context(), spender, subtracted)?)
    }

    /// Mints tokens to `to`. Owner only.
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), Vec<u8>> {
        MyToken::mint(self, &call_context(), to, amount)?;
        Ok(())
    }

    /// Burns the caller's tokens
    pub fn burn(&mut self, amount: U256) -> Result<(), Vec<u8>> {
        MyToken::burn(self, &call_context(), amount)?;
        Ok(())
    }

    // -----------
    // | CUSTODY |
    // -----------

    /// Deposits the attached ETH into custody
    #[payable]
    pub fn deposit(&mut self) -> Result<(), Vec<u8>> {
        MyToken::deposit(self, &call_context())?;
        Ok(())
    }

    /// The ETH `account` holds in custody
    pub fn get_eth_balance(&self, account: Address) -> Result<U256, Vec<u8>> {
        Ok(EthCustody::get_eth_balance(self, account))
    }

    /// The sum of all ETH held in custody
    pub fn total_eth_deposits(&self) -> Result<U256, Vec<u8>> {
        Ok(EthCustody::total_eth_deposits(self))
    }

    /// Withdraws the caller's ETH from custody
    pub fn withdraw_balance(&mut self) -> Result<(), Vec<u8>> {
        MyToken::withdraw_balance(self, &call_context())?;
        Ok(())
    }

    /// Sweeps the contract's ETH to the owner. Owner only.
    pub fn withdraw_all(&mut self) -> Result<(), Vec<u8>> {
        MyToken::withdraw_all(self, &call_context())?;
        Ok(())
    }

    // -----------
    // | REWARDS |
    // -----------

    /// Mints `holder` the current total supply. Owner only.
    pub fn make_holder_rich(&mut self, holder: Address) -> Result<(), Vec<u8>> {
        MyToken::make_holder_rich(self, &call_context(), holder)?;
        Ok(())
    }

    // ------------
    // | PAUSABLE |
    // ------------

    /// Whether the contract is paused
    pub fn paused(&self) -> Result<bool, Vec<u8>> {
        Ok(Pausable::paused(self))
    }

    /// Pauses the contract. Owner only.
    pub fn pause(&mut self) -> Result<(), Vec<u8>> {
        MyToken::pause(self, &call_context())?;
        Ok(())
    }

    /// Unpauses the contract. Owner only.
    pub fn unpause(&mut self) -> Result<(), Vec<u8>> {
        MyToken::unpause(self, &call_context())?;
        Ok(())
    }
}
