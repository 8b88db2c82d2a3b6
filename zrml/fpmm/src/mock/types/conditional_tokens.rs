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

use crate::mock::runtime::Currencies;
use alloc::collections::BTreeMap;
use core::cell::RefCell;
use frame_support::traits::Get;
use orml_traits::MultiCurrency;
use sp_runtime::{
    traits::{AccountIdConversion, BlakeTwo256, Hash},
    DispatchResult,
};
use zeitgeist_primitives::{
    constants::mock::ConditionalTokensPalletId,
    traits::ConditionalTokensApi,
    types::{AccountIdTest, Asset, Balance, ConditionId, OutcomeIndex},
};

/// Minimal outcome-token ledger. Collateral of split positions is escrowed in a dedicated account
/// and positions are minted on `orml_tokens`.
pub struct MockConditionalTokens;

impl MockConditionalTokens {
    pub fn prepare_condition(condition_id: ConditionId, outcome_slot_count: OutcomeIndex) {
        CONDITIONS.with(|conditions| {
            conditions.borrow_mut().insert(condition_id, outcome_slot_count);
        });
    }

    pub fn reset() {
        CONDITIONS.with(|conditions| conditions.borrow_mut().clear());
    }

    pub fn escrow_account() -> AccountIdTest {
        ConditionalTokensPalletId::get().into_account_truncating()
    }
}

impl ConditionalTokensApi for MockConditionalTokens {
    type AccountId = AccountIdTest;
    type Asset = Asset;
    type Balance = Balance;
    type ConditionId = ConditionId;

    fn outcome_slot_count(condition_id: &ConditionId) -> Option<OutcomeIndex> {
        CONDITIONS.with(|conditions| conditions.borrow().get(condition_id).copied())
    }

    fn position_id(collateral: Asset, collection: &[(ConditionId, OutcomeIndex)]) -> Asset {
        Asset::Position(BlakeTwo256::hash_of(&(collateral, collection)))
    }

    fn split_position(
        who: &AccountIdTest,
        collateral: Asset,
        positions: &[Asset],
        amount: Balance,
    ) -> DispatchResult {
        Currencies::transfer(collateral, who, &Self::escrow_account(), amount)?;
        for &position in positions {
            Currencies::deposit(position, who, amount)?;
        }
        Ok(())
    }

    fn merge_positions(
        who: &AccountIdTest,
        collateral: Asset,
        positions: &[Asset],
        amount: Balance,
    ) -> DispatchResult {
        for &position in positions {
            Currencies::withdraw(position, who, amount)?;
        }
        Currencies::transfer(collateral, &Self::escrow_account(), who, amount)
    }
}

thread_local! {
    static CONDITIONS: RefCell<BTreeMap<ConditionId, OutcomeIndex>> =
        const { RefCell::new(BTreeMap::new()) };
}
