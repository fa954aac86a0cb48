//! MyToken smart contracts

#[cfg(any(feature = "my-token", feature = "my-token-2"))]
mod my_token;

#[cfg(any(feature = "my-token", feature = "my-token-2"))]
pub use my_token::MyTokenContract;
