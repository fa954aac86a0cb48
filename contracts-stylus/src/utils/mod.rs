//! Various utilities used throughout the contracts,
//! including constants and backend definitions

#[cfg(any(feature = "my-token", feature = "my-token-2"))]
pub mod backends;
pub mod constants;
#[cfg(any(feature = "my-token", feature = "my-token-2"))]
pub mod helpers;
