//! Solidity type definitions used throughout the project

#![allow(missing_docs)]

use alloy_sol_types::sol;

sol! {
    // ----------
    // | EVENTS |
    // ----------

    // ERC20 events
    #[derive(Debug, PartialEq, Eq)]
    event Transfer(address indexed from, address indexed to, uint256 value);
    #[derive(Debug, PartialEq, Eq)]
    event Approval(address indexed owner, address indexed spender, uint256 value);

    // Ownable events
    #[derive(Debug, PartialEq, Eq)]
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);

    // Initializable events
    #[derive(Debug, PartialEq, Eq)]
    event Initialized(uint64 version);

    // Pausable events
    #[derive(Debug, PartialEq, Eq)]
    event Paused(address account);
    #[derive(Debug, PartialEq, Eq)]
    event Unpaused(address account);

    // Custody events
    #[derive(Debug, PartialEq, Eq)]
    event EthDeposited(address indexed account, uint256 amount);
    #[derive(Debug, PartialEq, Eq)]
    event EthWithdrawn(address indexed account, uint256 amount);

    // Reward events
    #[derive(Debug, PartialEq, Eq)]
    event HolderEnriched(address indexed holder, uint256 amount);
}
