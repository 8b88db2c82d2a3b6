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
    math::{Math, MathOps},
    traits::{LiquiditySharesManager, PoolOperations},
    types::{FundingPlan, LiquidityShares, SwapQuote},
    BalanceOf, Config, Error,
};
use alloc::vec::Vec;
use frame_support::{
    pallet_prelude::RuntimeDebugNoBound, storage::bounded_vec::BoundedVec, CloneNoBound,
    PartialEqNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
    types::{Asset, OutcomeIndex},
};

/// A fixed product market maker pool.
///
/// `positions` and `reserves` are indexed by outcome. The reserves always coincide with the
/// position balances of `account_id`. Fees are held in `collateral` by `account_id` and tracked by
/// `liquidity_shares`.
#[derive(
    CloneNoBound,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct Pool<T: Config> {
    pub account_id: T::AccountId,
    pub collateral: Asset,
    pub conditions: BoundedVec<T::ConditionId, T::MaxConditions>,
    pub positions: BoundedVec<Asset, T::MaxOutcomes>,
    pub reserves: BoundedVec<BalanceOf<T>, T::MaxOutcomes>,
    pub swap_fee: BalanceOf<T>,
    pub liquidity_shares: LiquidityShares<T>,
}

impl<T: Config> Pool<T> {
    fn index(&self, outcome_index: OutcomeIndex) -> Result<usize, DispatchError> {
        let index = outcome_index as usize;
        if index < self.positions.len() {
            Ok(index)
        } else {
            Err(Error::<T>::InvalidOutcomeIndex.into())
        }
    }
}

impl<T: Config> PoolOperations<T> for Pool<T> {
    fn outcome_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, outcome_index: OutcomeIndex) -> Result<Asset, DispatchError> {
        let index = self.index(outcome_index)?;
        self.positions.get(index).copied().ok_or(Error::<T>::InvalidOutcomeIndex.into())
    }

    fn increase_reserve(
        &mut self,
        outcome_index: OutcomeIndex,
        increase_amount: &BalanceOf<T>,
    ) -> DispatchResult {
        let index = self.index(outcome_index)?;
        let value = self.reserves.get_mut(index).ok_or(Error::<T>::InvalidOutcomeIndex)?;
        *value = value.checked_add_res(increase_amount)?;
        Ok(())
    }

    fn decrease_reserve(
        &mut self,
        outcome_index: OutcomeIndex,
        decrease_amount: &BalanceOf<T>,
    ) -> DispatchResult {
        let index = self.index(outcome_index)?;
        let value = self.reserves.get_mut(index).ok_or(Error::<T>::InvalidOutcomeIndex)?;
        *value = value.checked_sub_res(decrease_amount)?;
        Ok(())
    }

    fn calculate_buy_amount(
        &self,
        outcome_index: OutcomeIndex,
        investment_amount: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError> {
        let index = self.index(outcome_index)?;
        Math::<T>::calculate_buy_amount(&self.reserves, index, investment_amount, self.swap_fee)
    }

    fn calculate_sell_amount(
        &self,
        outcome_index: OutcomeIndex,
        return_amount: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError> {
        let index = self.index(outcome_index)?;
        Math::<T>::calculate_sell_amount(&self.reserves, index, return_amount, self.swap_fee)
    }

    fn calculate_funding(
        &self,
        amount: BalanceOf<T>,
        distribution_hint: &[BalanceOf<T>],
    ) -> Result<FundingPlan<BalanceOf<T>>, DispatchError> {
        Math::<T>::calculate_funding(
            &self.reserves,
            self.liquidity_shares.total_shares(),
            amount,
            distribution_hint,
        )
    }

    fn calculate_defunding(
        &self,
        shares: BalanceOf<T>,
    ) -> Result<Vec<BalanceOf<T>>, DispatchError> {
        Math::<T>::calculate_defunding(&self.reserves, self.liquidity_shares.total_shares(), shares)
    }
}
