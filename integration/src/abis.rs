//! Solidity ABI definitions of the contracts used in integration tests

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IMyToken {
        function initialize() external;
        function initializeV2() external;
        function version() external view returns (uint64);
        function initializedVersion() external view returns (uint64);

        function owner() external view returns (address);
        function transferOwnership(address new_owner) external;
        function renounceOwnership() external;

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function increaseAllowance(address spender, uint256 added) external returns (bool);
        function decreaseAllowance(address spender, uint256 subtracted) external returns (bool);
        function mint(address to, uint256 amount) external;
        function burn(uint256 amount) external;

        function deposit() external payable;
        function getEthBalance(address account) external view returns (uint256);
        function totalEthDeposits() external view returns (uint256);
        function withdrawBalance() external;
        function withdrawAll() external;

        function makeHolderRich(address holder) external;

        function paused() external view returns (bool);
        function pause() external;
        function unpause() external;
    }

    #[sol(rpc)]
    interface ProxyAdmin {
        function owner() external view returns (address);
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external payable;
    }
}
