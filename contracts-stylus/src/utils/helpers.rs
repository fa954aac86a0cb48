//! Miscellaneous helper functions for the contracts.

use contracts_common::types::{CallContext, TokenEvent};
use stylus_sdk::{evm, msg};

/// Builds the context of the current call from the message the VM is executing
pub fn call_context() -> CallContext {
    CallContext::with_value(msg::sender(), msg::value())
}

/// Emits the given event as an EVM log
pub fn log_event(event: TokenEvent) {
    match event {
        TokenEvent::Transfer(e) => evm::log(e),
        TokenEvent::Approval(e) => evm::log(e),
        TokenEvent::OwnershipTransferred(e) => evm::log(e),
        TokenEvent::Initialized(e) => evm::log(e),
        TokenEvent::Paused(e) => evm::log(e),
        TokenEvent::Unpaused(e) => evm::log(e),
        TokenEvent::EthDeposited(e) => evm::log(e),
        TokenEvent::EthWithdrawn(e) => evm::log(e),
        TokenEvent::HolderEnriched(e) => evm::log(e),
    }
}
