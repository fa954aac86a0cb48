//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::{network::Ethereum, primitives::Address, providers::DynProvider};
use clap::ValueEnum;

use crate::constants::{MY_TOKEN_2_CONTRACT_KEY, MY_TOKEN_CONTRACT_KEY};

/// The possible Stylus contracts to deploy
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StylusContract {
    /// The first version of the token
    MyToken,
    /// The second version of the token, the upgrade target of the first
    MyToken2,
}

impl StylusContract {
    /// The key under which the contract's address is stored in the deployments file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            StylusContract::MyToken => MY_TOKEN_CONTRACT_KEY,
            StylusContract::MyToken2 => MY_TOKEN_2_CONTRACT_KEY,
        }
    }
}

/// Formats as the name of the Cargo feature that builds the contract
impl Display for StylusContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylusContract::MyToken => write!(f, "my-token"),
            StylusContract::MyToken2 => write!(f, "my-token-2"),
        }
    }
}

/// An RPC client signing transactions with the deployer's key
#[derive(Clone)]
pub struct DeployerClient {
    /// The provider, with the deployer's wallet attached
    pub provider: DynProvider<Ethereum>,
    /// The address of the deployer
    pub address: Address,
}
