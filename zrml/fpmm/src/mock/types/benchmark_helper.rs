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

use crate::mock::types::MockConditionalTokens;
use sp_runtime::DispatchError;
use zeitgeist_primitives::{
    traits::ConditionalTokensBenchmarkHelper,
    types::{ConditionId, OutcomeIndex},
};

pub struct BenchmarkHelper;

impl ConditionalTokensBenchmarkHelper for BenchmarkHelper {
    type ConditionId = ConditionId;

    fn prepare_condition(
        seed: u32,
        outcome_slot_count: OutcomeIndex,
    ) -> Result<Self::ConditionId, DispatchError> {
        let condition_id = ConditionId::from_low_u64_be(seed.into());
        MockConditionalTokens::prepare_condition(condition_id, outcome_slot_count);
        Ok(condition_id)
    }
}
