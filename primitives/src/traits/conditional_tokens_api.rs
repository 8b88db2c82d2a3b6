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

use crate::types::OutcomeIndex;
use sp_runtime::DispatchResult;

/// Interface of the outcome-token ledger which backs positions 1:1 with collateral.
///
/// A position is identified by its collateral and its outcome collection, a list of
/// `(condition, outcome slot)` pairs with one entry per condition. Splitting `amount` units of
/// collateral into a full set of positions (one for every combination of outcome slots) and
/// merging them back are the only ways positions are created or destroyed.
pub trait ConditionalTokensApi {
    type AccountId;
    type Asset;
    type Balance;
    type ConditionId;

    /// Return the number of outcome slots of `condition_id`, or `None` if the condition was
    /// never prepared.
    fn outcome_slot_count(condition_id: &Self::ConditionId) -> Option<OutcomeIndex>;

    /// Return the position of `collateral` in the outcome collection `collection`.
    fn position_id(
        collateral: Self::Asset,
        collection: &[(Self::ConditionId, OutcomeIndex)],
    ) -> Self::Asset;

    /// Take `amount` units of `collateral` from `who` and mint `amount` units of every element
    /// of `positions` to `who`. The caller is responsible for `positions` being a full set.
    fn split_position(
        who: &Self::AccountId,
        collateral: Self::Asset,
        positions: &[Self::Asset],
        amount: Self::Balance,
    ) -> DispatchResult;

    /// Burn `amount` units of every element of `positions` held by `who` and pay `amount` units
    /// of `collateral` to `who`.
    fn merge_positions(
        who: &Self::AccountId,
        collateral: Self::Asset,
        positions: &[Self::Asset],
        amount: Self::Balance,
    ) -> DispatchResult;
}
