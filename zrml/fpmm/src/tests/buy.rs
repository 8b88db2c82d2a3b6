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

use super::*;
use test_case::test_case;

#[test]
fn buy_works() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        let outcome_index = 1;
        let investment_amount = _1;
        let expected_fee = 3_000_000_000_000_000;
        let expected_amount_out = 5_201_273_719_612_626_408;
        deposit(BOB, investment_amount);
        assert_ok!(Fpmm::buy(
            RuntimeOrigin::signed(BOB),
            pool_id,
            investment_amount,
            outcome_index,
            expected_amount_out,
        ));
        let pool = pool(pool_id);
        let amount_in_minus_fees = investment_amount - expected_fee;
        assert_eq!(
            pool.reserves.to_vec(),
            vec![
                _5 + amount_in_minus_fees,
                _10 + amount_in_minus_fees - expected_amount_out,
                _5 + amount_in_minus_fees,
                _5 + amount_in_minus_fees,
            ]
        );
        assert_eq!(position_balances(pool_id, BOB), vec![0, expected_amount_out, 0, 0]);
        assert_eq!(collateral_of(BOB), 0);
        assert_eq!(collateral_of(pool.account_id), expected_fee);
        assert_eq!(Fpmm::collected_fees(pool_id), Ok(expected_fee));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &ALICE), Ok(expected_fee));
        assert_reserves_match_pool_account(pool_id);
        System::assert_last_event(
            Event::<Runtime>::BuyExecuted {
                who: BOB,
                pool_id,
                outcome_index,
                investment_amount,
                fee_amount: expected_fee,
                outcome_tokens_bought: expected_amount_out,
            }
            .into(),
        );
    });
}

#[test]
fn buy_does_not_decrease_the_product_of_reserves() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, 0, _10, vec![]);
        deposit(BOB, _1);
        let product_before = reserves_product(pool_id);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, 0, 0));
        assert_eq!(Fpmm::pool_balances(pool_id), Ok(vec![9_090_909_090_909_090_910, _11]));
        assert_ge!(reserves_product(pool_id), product_before);
    });
}

#[test]
fn buy_fails_on_slippage() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit(BOB, _1);
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, 1, 5_201_273_719_612_626_409),
            Error::<Runtime>::SlippageExceeded
        );
    });
}

#[test]
fn buy_fails_on_zero_amount() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, 0, 0, 0),
            Error::<Runtime>::InvalidAmount
        );
    });
}

#[test_case(2)]
#[test_case(OutcomeIndex::MAX)]
fn buy_fails_on_invalid_outcome_index(outcome_index: OutcomeIndex) {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        deposit(BOB, _1);
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, outcome_index, 0),
            Error::<Runtime>::InvalidOutcomeIndex
        );
    });
}

#[test]
fn buy_fails_on_unfunded_pool() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(2, SWAP_FEE);
        deposit(BOB, _1);
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, 0, 0),
            Error::<Runtime>::InsufficientLiquidity
        );
    });
}

#[test]
fn buy_fails_on_insufficient_collateral() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        deposit(BOB, _1);
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _2, 0, 0),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}

#[test]
fn buy_fails_on_unknown_pool() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::buy(RuntimeOrigin::signed(BOB), 3, _1, 0, 0),
            Error::<Runtime>::PoolNotFound
        );
    });
}
