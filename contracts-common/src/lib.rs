//! Common modules used throughout the project, including contracts & testing code

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod constants;
pub mod solidity;
pub mod types;
