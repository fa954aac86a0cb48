//! Composable contract "components" that the token builds upon for common functionality

pub mod initializable;
pub mod ownable;
pub mod pausable;
