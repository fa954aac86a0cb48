//! Definitions of Solidity functions called during deployment

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::sol;

sol! {
    // Token initializers, used as proxy constructor & upgrade calldata
    function initialize() external;
    function initializeV2() external;

    #[sol(rpc)]
    interface ProxyAdmin {
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external payable;
    }
}
