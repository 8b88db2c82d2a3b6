// Copyright 2023-2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate::{
    types::{FundingPlan, SwapQuote},
    BalanceOf, Config,
};
use alloc::vec::Vec;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::types::{Asset, OutcomeIndex};

/// Trait for fixed product calculations and access to pool data.
pub(crate) trait PoolOperations<T: Config> {
    /// Return the number of outcomes traded in the pool.
    fn outcome_count(&self) -> usize;

    /// Return the position token of `outcome_index`.
    fn position(&self, outcome_index: OutcomeIndex) -> Result<Asset, DispatchError>;

    /// Perform a checked addition to the reserve of `outcome_index`.
    fn increase_reserve(
        &mut self,
        outcome_index: OutcomeIndex,
        increase_amount: &BalanceOf<T>,
    ) -> DispatchResult;

    /// Perform a checked subtraction from the reserve of `outcome_index`.
    fn decrease_reserve(
        &mut self,
        outcome_index: OutcomeIndex,
        decrease_amount: &BalanceOf<T>,
    ) -> DispatchResult;

    /// Calculate the amount of `outcome_index` received for `investment_amount` units of
    /// collateral and the fee retained by the pool.
    fn calculate_buy_amount(
        &self,
        outcome_index: OutcomeIndex,
        investment_amount: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError>;

    /// Calculate the amount of `outcome_index` which must be sold to receive `return_amount`
    /// units of collateral and the fee retained by the pool.
    fn calculate_sell_amount(
        &self,
        outcome_index: OutcomeIndex,
        return_amount: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError>;

    /// Calculate how `amount` units of collateral are split between the pool and the funder and
    /// how many shares are minted.
    fn calculate_funding(
        &self,
        amount: BalanceOf<T>,
        distribution_hint: &[BalanceOf<T>],
    ) -> Result<FundingPlan<BalanceOf<T>>, DispatchError>;

    /// Calculate the amounts of each outcome paid out for burning `shares`.
    fn calculate_defunding(
        &self,
        shares: BalanceOf<T>,
    ) -> Result<Vec<BalanceOf<T>>, DispatchError>;
}
