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

#![cfg(all(feature = "mock", test))]

mod add_funding;
mod buy;
mod sell;
mod transfer_shares;
mod withdraw_fees;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{Currencies, Fpmm, Runtime, RuntimeOrigin, System},
        types::MockConditionalTokens,
    },
    traits::*,
    *,
};
use frame_support::{assert_noop, assert_ok};
use more_asserts::assert_ge;
use orml_traits::MultiCurrency;
use sp_core::U256;
use sp_runtime::DispatchError;
use zeitgeist_primitives::{
    constants::{base_multiples::*, BASE, CENT},
    traits::ConditionalTokensApi,
    types::{AccountIdTest, Asset, Balance, ConditionId, OutcomeIndex, PoolId},
};

const SWAP_FEE: Balance = 3 * BASE / 1_000;

fn prepare_condition(seed: u64, outcome_slot_count: OutcomeIndex) -> ConditionId {
    let condition_id = ConditionId::from_low_u64_be(seed);
    MockConditionalTokens::prepare_condition(condition_id, outcome_slot_count);
    condition_id
}

fn create_pool(outcome_count: OutcomeIndex, swap_fee: Balance) -> PoolId {
    let condition_id = prepare_condition(PoolCount::<Runtime>::get() as u64, outcome_count);
    let pool_id = PoolCount::<Runtime>::get();
    assert_ok!(Fpmm::create_pool(
        RuntimeOrigin::signed(ALICE),
        COLLATERAL,
        vec![condition_id],
        swap_fee,
    ));
    pool_id
}

/// Create a pool and fund it with `amount` of ALICE's collateral.
fn create_funded_pool(
    outcome_count: OutcomeIndex,
    swap_fee: Balance,
    amount: Balance,
    distribution_hint: Vec<Balance>,
) -> PoolId {
    let pool_id = create_pool(outcome_count, swap_fee);
    deposit(ALICE, amount);
    assert_ok!(Fpmm::add_funding(
        RuntimeOrigin::signed(ALICE),
        pool_id,
        amount,
        distribution_hint,
    ));
    pool_id
}

fn deposit(who: AccountIdTest, amount: Balance) {
    assert_ok!(Currencies::deposit(COLLATERAL, &who, amount));
}

fn collateral_of(who: AccountIdTest) -> Balance {
    Currencies::free_balance(COLLATERAL, &who)
}

fn pool(pool_id: PoolId) -> PoolOf<Runtime> {
    Pools::<Runtime>::get(pool_id).unwrap()
}

fn position_balances(pool_id: PoolId, who: AccountIdTest) -> Vec<Balance> {
    pool(pool_id)
        .positions
        .iter()
        .map(|&position| Currencies::free_balance(position, &who))
        .collect()
}

fn reserves_product(pool_id: PoolId) -> U256 {
    pool(pool_id).reserves.iter().fold(U256::one(), |product, &reserve| product * U256::from(reserve))
}

fn assert_reserves_match_pool_account(pool_id: PoolId) {
    let pool = pool(pool_id);
    assert_eq!(pool.reserves.to_vec(), position_balances(pool_id, pool.account_id));
}
