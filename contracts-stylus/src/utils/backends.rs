//! Implementations of the token backends on top of Stylus storage and host functions

use contracts_core::{
    backends::{DepositRecord, HostBackend, TokenStorage},
    errors::TokenError,
};
use contracts_common::types::TokenEvent;
use stylus_sdk::{
    alloy_primitives::{Address, U256, U64},
    call, contract,
};

use crate::{contracts::MyTokenContract, utils::helpers::log_event};

impl TokenStorage for MyTokenContract {
    fn get_owner(&self) -> Address {
        self.owner.get()
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    fn get_initialized_version(&self) -> u64 {
        self.initialized.get().to()
    }

    fn set_initialized_version(&mut self, version: u64) {
        self.initialized.set(U64::from_limbs([version]));
    }

    fn get_paused(&self) -> bool {
        self.paused.get()
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused.set(paused);
    }

    fn get_total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    fn set_total_supply(&mut self, supply: U256) {
        self.total_supply.set(supply);
    }

    fn get_balance(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    fn set_balance(&mut self, account: Address, balance: U256) {
        self.balances.insert(account, balance);
    }

    fn get_allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.setter(owner).insert(spender, amount);
    }

    fn get_custody_epoch(&self) -> u64 {
        self.custody_epoch.get().to()
    }

    fn set_custody_epoch(&mut self, epoch: u64) {
        self.custody_epoch.set(U64::from_limbs([epoch]));
    }

    fn get_deposit_record(&self, account: Address) -> DepositRecord {
        let record = self.deposit_records.getter(account);
        DepositRecord {
            epoch: record.epoch.get().to(),
            amount: record.amount.get(),
        }
    }

    fn set_deposit_record(&mut self, account: Address, record: DepositRecord) {
        let mut stored = self.deposit_records.setter(account);
        stored.epoch.set(U64::from_limbs([record.epoch]));
        stored.amount.set(record.amount);
    }

    fn get_total_eth_deposits(&self) -> U256 {
        self.total_eth_deposits.get()
    }

    fn set_total_eth_deposits(&mut self, total: U256) {
        self.total_eth_deposits.set(total);
    }
}

impl HostBackend for MyTokenContract {
    fn emit(&mut self, event: TokenEvent) {
        log_event(event);
    }

    fn contract_balance(&self) -> U256 {
        contract::balance()
    }

    /// Sends ETH with all remaining gas, so the recipient may be a contract
    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        call::transfer_eth(self, to, amount).map_err(|_| TokenError::EthTransferFailed)
    }
}
