//! In-memory backends for running the token logic natively, and a minimal local chain
//! simulating accounts, ETH balances, call atomicity, and proxy upgrades on top of them.

use alloc::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};

use alloy_primitives::{Address, U256};
use contracts_common::{
    constants::V1,
    types::{CallContext, TokenEvent},
};

use crate::{
    backends::{DepositRecord, HostBackend, TokenStorage},
    errors::TokenError,
    token::MyToken,
};

/// The number of funded signers on a fresh local chain
pub const NUM_SIGNERS: usize = 10;

/// The ETH each signer starts with, in whole ether
pub const SIGNER_ETH: u64 = 10_000;

/// One ether, in wei
pub fn one_ether() -> U256 {
    U256::from(10).pow(U256::from(18))
}

/// Contract state and host effects, all held in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    /// The owner
    pub owner: Address,
    /// The highest initializer version that ran
    pub initialized_version: u64,
    /// Whether the contract is paused
    pub paused: bool,
    /// The total token supply
    pub total_supply: U256,
    /// Token balances
    pub balances: BTreeMap<Address, U256>,
    /// Allowances, keyed by (owner, spender)
    pub allowances: BTreeMap<(Address, Address), U256>,
    /// The current custody epoch
    pub custody_epoch: u64,
    /// Custody records
    pub deposit_records: BTreeMap<Address, DepositRecord>,
    /// The sum of all live custody records
    pub total_eth_deposits: U256,

    /// The address the contract is deployed at
    pub contract_address: Address,
    /// ETH balances of every account, the contract included
    pub eth_balances: BTreeMap<Address, U256>,
    /// Events emitted so far
    pub logs: Vec<TokenEvent>,
    /// Accounts that revert when sent ETH
    pub rejecting_accounts: BTreeSet<Address>,
}

impl MemoryBackend {
    /// The ETH balance of `account`
    pub fn eth_balance(&self, account: Address) -> U256 {
        self.eth_balances.get(&account).copied().unwrap_or_default()
    }

    /// Adds `amount` wei to the ETH balance of `account`
    pub fn credit_eth(&mut self, account: Address, amount: U256) {
        let balance = self.eth_balance(account) + amount;
        self.eth_balances.insert(account, balance);
    }

    /// Moves `amount` wei between two accounts
    pub fn move_eth(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        let from_balance =
            self.eth_balance(from).checked_sub(amount).ok_or(TokenError::EthTransferFailed)?;
        self.eth_balances.insert(from, from_balance);
        self.credit_eth(to, amount);
        Ok(())
    }
}

impl TokenStorage for MemoryBackend {
    fn get_owner(&self) -> Address {
        self.owner
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner = owner;
    }

    fn get_initialized_version(&self) -> u64 {
        self.initialized_version
    }

    fn set_initialized_version(&mut self, version: u64) {
        self.initialized_version = version;
    }

    fn get_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn get_total_supply(&self) -> U256 {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: U256) {
        self.total_supply = supply;
    }

    fn get_balance(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: Address, balance: U256) {
        self.balances.insert(account, balance);
    }

    fn get_allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.insert((owner, spender), amount);
    }

    fn get_custody_epoch(&self) -> u64 {
        self.custody_epoch
    }

    fn set_custody_epoch(&mut self, epoch: u64) {
        self.custody_epoch = epoch;
    }

    fn get_deposit_record(&self, account: Address) -> DepositRecord {
        self.deposit_records.get(&account).copied().unwrap_or_default()
    }

    fn set_deposit_record(&mut self, account: Address, record: DepositRecord) {
        self.deposit_records.insert(account, record);
    }

    fn get_total_eth_deposits(&self) -> U256 {
        self.total_eth_deposits
    }

    fn set_total_eth_deposits(&mut self, total: U256) {
        self.total_eth_deposits = total;
    }
}

impl HostBackend for MemoryBackend {
    fn emit(&mut self, event: TokenEvent) {
        self.logs.push(event);
    }

    fn contract_balance(&self) -> U256 {
        self.eth_balance(self.contract_address)
    }

    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        if self.rejecting_accounts.contains(&to) {
            return Err(TokenError::EthTransferFailed);
        }

        self.move_eth(self.contract_address, to, amount)
    }
}

/// A single token deployment behind a proxy, on a chain of funded signers.
///
/// Every call executes against a copy of the state that is only committed if the call
/// succeeds, so a reverted call leaves no trace.
#[derive(Clone, Debug)]
pub struct LocalChain {
    /// The committed state
    state: MemoryBackend,
    /// The funded signers, the first of which deploys the contract
    signers: Vec<Address>,
    /// The version of the implementation the proxy currently points at
    implementation_version: u64,
}

impl LocalChain {
    /// The address of the proxy
    pub const PROXY_ADDRESS: Address = Address::new([0xaa; 20]);
    /// The address of the proxy admin
    pub const PROXY_ADMIN_ADDRESS: Address = Address::new([0xad; 20]);

    /// Deploys the v1 implementation behind a proxy, initializing it from the first signer
    pub fn deploy() -> Result<Self, TokenError> {
        let signers: Vec<Address> =
            (0..NUM_SIGNERS).map(|i| Address::with_last_byte(0x10 + i as u8)).collect();

        let mut state = MemoryBackend { contract_address: Self::PROXY_ADDRESS, ..Default::default() };
        let funding = U256::from(SIGNER_ETH) * one_ether();
        for signer in signers.iter() {
            state.credit_eth(*signer, funding);
        }

        let mut chain = Self { state, signers, implementation_version: V1 };
        let deployer = chain.deployer();
        chain.execute(CallContext::new(deployer), MyToken::initialize)?;
        Ok(chain)
    }

    /// The `i`th signer
    pub fn signer(&self, i: usize) -> Address {
        self.signers[i]
    }

    /// The signer that deployed and owns the contract
    pub fn deployer(&self) -> Address {
        self.signers[0]
    }

    /// Executes a state-changing call atomically.
    ///
    /// The value attached to the call moves from the sender to the contract before the
    /// call body runs.
    pub fn execute<T, F>(&mut self, ctx: CallContext, call: F) -> Result<T, TokenError>
    where
        F: FnOnce(&mut MemoryBackend, &CallContext) -> Result<T, TokenError>,
    {
        let mut pending = self.state.clone();
        pending.move_eth(ctx.sender, pending.contract_address, ctx.value)?;

        let res = call(&mut pending, &ctx)?;
        self.state = pending;
        Ok(res)
    }

    /// Executes a read-only call
    pub fn view<T, F>(&self, call: F) -> T
    where
        F: FnOnce(&MemoryBackend) -> T,
    {
        call(&self.state)
    }

    /// The ETH balance of `account`
    pub fn eth_balance(&self, account: Address) -> U256 {
        self.state.eth_balance(account)
    }

    /// The ETH balance of the contract
    pub fn contract_eth_balance(&self) -> U256 {
        self.state.contract_balance()
    }

    /// Events emitted by committed calls
    pub fn logs(&self) -> &[TokenEvent] {
        &self.state.logs
    }

    /// Makes `account` revert when sent ETH
    pub fn reject_eth(&mut self, account: Address) {
        self.state.rejecting_accounts.insert(account);
    }

    /// The version of the implementation the proxy points at
    pub fn implementation_version(&self) -> u64 {
        self.implementation_version
    }

    /// Points the proxy at an implementation of `version` and atomically reinitializes it,
    /// as the proxy admin's `upgradeAndCall` would
    pub fn upgrade_and_initialize(&mut self, version: u64) -> Result<(), TokenError> {
        let ctx = CallContext::new(Self::PROXY_ADMIN_ADDRESS);
        self.execute(ctx, |backend, _| MyToken::initialize_v2(backend, version))?;
        self.implementation_version = version;
        Ok(())
    }
}
