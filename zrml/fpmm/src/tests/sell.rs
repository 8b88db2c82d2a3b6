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

fn deposit_position(pool_id: PoolId, outcome_index: usize, who: AccountIdTest, amount: Balance) {
    let position = pool(pool_id).positions[outcome_index];
    assert_ok!(Currencies::deposit(position, &who, amount));
}

#[test]
fn sell_works() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        let outcome_index = 1;
        let return_amount = _1_2;
        let expected_fee = 1_504_513_540_621_866;
        let expected_amount_in = 4_232_693_540_779_737_062;
        deposit_position(pool_id, outcome_index as usize, BOB, _5);
        assert_ok!(Fpmm::sell(
            RuntimeOrigin::signed(BOB),
            pool_id,
            return_amount,
            outcome_index,
            expected_amount_in,
        ));
        let pool = pool(pool_id);
        let return_amount_plus_fees = return_amount + expected_fee;
        assert_eq!(
            pool.reserves.to_vec(),
            vec![
                _5 - return_amount_plus_fees,
                _10 + expected_amount_in - return_amount_plus_fees,
                _5 - return_amount_plus_fees,
                _5 - return_amount_plus_fees,
            ]
        );
        assert_eq!(position_balances(pool_id, BOB), vec![0, _5 - expected_amount_in, 0, 0]);
        assert_eq!(collateral_of(BOB), return_amount);
        assert_eq!(collateral_of(pool.account_id), expected_fee);
        assert_eq!(Fpmm::collected_fees(pool_id), Ok(expected_fee));
        assert_reserves_match_pool_account(pool_id);
        System::assert_last_event(
            Event::<Runtime>::SellExecuted {
                who: BOB,
                pool_id,
                outcome_index,
                return_amount,
                fee_amount: expected_fee,
                outcome_tokens_sold: expected_amount_in,
            }
            .into(),
        );
    });
}

#[test]
fn sell_does_not_decrease_the_product_of_reserves() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit_position(pool_id, 1, BOB, _5);
        let product_before = reserves_product(pool_id);
        assert_ok!(Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1_2, 1, _5));
        assert_ge!(reserves_product(pool_id), product_before);
    });
}

#[test]
fn buy_and_sell_round_trip_loses_value() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, CENT, _10, vec![]);
        deposit(BOB, _1);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, 0, 0));
        let amount_bought = position_balances(pool_id, BOB)[0];
        assert_eq!(amount_bought, 1_890_818_926_296_633_303);
        // Recovering the full investment requires more tokens than were bought.
        assert_eq!(Fpmm::calc_sell_amount(pool_id, _1, 0), Ok(1_931_061_432_941_200_658));
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1, 0, amount_bought),
            Error::<Runtime>::SlippageExceeded
        );
    });
}

#[test]
fn sell_fails_on_slippage() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit_position(pool_id, 1, BOB, _5);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1_2, 1, 4_232_693_540_779_737_061),
            Error::<Runtime>::SlippageExceeded
        );
    });
}

#[test]
fn sell_fails_on_excessive_return_amount() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit_position(pool_id, 1, BOB, _100);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _5, 1, _100),
            Error::<Runtime>::ExcessiveReturnAmount
        );
    });
}

#[test]
fn sell_fails_on_insufficient_outcome_tokens() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit_position(pool_id, 1, BOB, _1);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1_2, 1, _5),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}

#[test]
fn sell_fails_on_zero_amount() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, 0, 0, _1),
            Error::<Runtime>::InvalidAmount
        );
    });
}

#[test]
fn sell_fails_on_invalid_outcome_index() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1, 2, _10),
            Error::<Runtime>::InvalidOutcomeIndex
        );
    });
}

#[test]
fn sell_fails_on_unfunded_pool() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(2, SWAP_FEE);
        assert_noop!(
            Fpmm::sell(RuntimeOrigin::signed(BOB), pool_id, _1, 0, _10),
            Error::<Runtime>::InsufficientLiquidity
        );
    });
}
