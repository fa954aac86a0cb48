//! Common types shared between the contract logic and the VM bindings

use alloy_primitives::{Address, U256};

use crate::solidity::{
    Approval, EthDeposited, EthWithdrawn, HolderEnriched, Initialized, OwnershipTransferred,
    Paused, Transfer, Unpaused,
};

/// The message-level context of a contract call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// The immediate caller of the contract
    pub sender: Address,
    /// The ETH value attached to the call, in wei
    pub value: U256,
}

impl CallContext {
    /// A call from `sender` carrying no value
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            value: U256::ZERO,
        }
    }

    /// A call from `sender` carrying `value` wei
    pub fn with_value(sender: Address, value: U256) -> Self {
        Self { sender, value }
    }
}

/// An event emitted by the token contract.
///
/// Host backends translate these into EVM logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenEvent {
    /// Tokens moved between accounts, minted (from zero) or burned (to zero)
    Transfer(Transfer),
    /// An allowance was set
    Approval(Approval),
    /// The owner changed
    OwnershipTransferred(OwnershipTransferred),
    /// An initializer ran
    Initialized(Initialized),
    /// The contract was paused
    Paused(Paused),
    /// The contract was unpaused
    Unpaused(Unpaused),
    /// ETH was deposited into custody
    EthDeposited(EthDeposited),
    /// ETH was paid out of custody
    EthWithdrawn(EthWithdrawn),
    /// A holder received the lottery reward
    HolderEnriched(HolderEnriched),
}
