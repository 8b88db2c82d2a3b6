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
use sp_runtime::DispatchError;

/// Prepares conditions on the outcome-token ledger so that benchmarks can create pools.
pub trait ConditionalTokensBenchmarkHelper {
    type ConditionId;

    /// Prepare a condition with `outcome_slot_count` slots and return its ID. Different values
    /// of `seed` yield different conditions.
    fn prepare_condition(
        seed: u32,
        outcome_slot_count: OutcomeIndex,
    ) -> Result<Self::ConditionId, DispatchError>;
}
