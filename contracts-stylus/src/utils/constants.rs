//! Constants used throughout the contracts

/// The version of the implementation being built, reported by `version()`
/// and checked by the v2 reinitializer
#[cfg(not(feature = "my-token-2"))]
pub const IMPLEMENTATION_VERSION: u64 = contracts_common::constants::V1;

/// The version of the implementation being built, reported by `version()`
/// and checked by the v2 reinitializer
#[cfg(feature = "my-token-2")]
pub const IMPLEMENTATION_VERSION: u64 = contracts_common::constants::V2;
