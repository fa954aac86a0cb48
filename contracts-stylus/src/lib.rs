//! The Stylus entrypoint of the MyToken contract.
//!
//! Each implementation version is built from this crate by enabling its feature,
//! `my-token` for v1 or `my-token-2` for v2. Both share one storage layout.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main, no_std)]

extern crate alloc;

mod contracts;
mod utils;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;
