//! The "lottery" reward, which makes a holder rich by minting them the entire current supply

use alloy_primitives::{Address, U256};
use contracts_common::{solidity::HolderEnriched, types::TokenEvent};

use crate::{backends::TokenBackend, errors::TokenError};

use super::erc20::Erc20;

/// Reward distribution
pub struct Rewards;

impl Rewards {
    /// Credits `holder` with an amount equal to the total supply at call time,
    /// doubling the supply. Access control is left to the caller.
    ///
    /// Returns the amount credited.
    pub fn _make_holder_rich<B: TokenBackend>(
        backend: &mut B,
        holder: Address,
    ) -> Result<U256, TokenError> {
        let amount = backend.get_total_supply();
        Erc20::_mint(backend, holder, amount)?;

        backend.emit(TokenEvent::HolderEnriched(HolderEnriched { holder, amount }));
        Ok(amount)
    }
}
