//! Core smart contract functionality, defined agnostically of running in the Stylus VM

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod backends;
pub mod components;
pub mod errors;
pub mod token;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
