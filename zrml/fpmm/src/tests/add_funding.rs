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
fn add_funding_works_on_first_funding_with_distribution_hint() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(4, SWAP_FEE);
        deposit(ALICE, _10);
        assert_ok!(Fpmm::add_funding(
            RuntimeOrigin::signed(ALICE),
            pool_id,
            _10,
            vec![1, 2, 1, 1],
        ));
        let pool = pool(pool_id);
        assert_eq!(pool.reserves.to_vec(), vec![_5, _10, _5, _5]);
        assert_eq!(position_balances(pool_id, ALICE), vec![_5, 0, _5, _5]);
        assert_eq!(collateral_of(ALICE), 0);
        assert_eq!(collateral_of(pool.account_id), 0);
        assert_eq!(collateral_of(MockConditionalTokens::escrow_account()), _10);
        assert_eq!(Fpmm::shares_of(pool_id, &ALICE), Ok(_10));
        assert_eq!(Fpmm::total_shares(pool_id), Ok(_10));
        assert_reserves_match_pool_account(pool_id);
        System::assert_last_event(
            Event::<Runtime>::FundingAdded {
                who: ALICE,
                pool_id,
                amount: _10,
                amounts_added: vec![_5, _10, _5, _5],
                shares_minted: _10,
            }
            .into(),
        );
    });
}

#[test_case(vec![]; "empty hint")]
#[test_case(vec![_3, _3, _3]; "flat hint")]
fn add_funding_works_on_first_funding_with_uniform_odds(distribution_hint: Vec<Balance>) {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(3, SWAP_FEE, _10, distribution_hint);
        assert_eq!(pool(pool_id).reserves.to_vec(), vec![_10, _10, _10]);
        assert_eq!(position_balances(pool_id, ALICE), vec![0, 0, 0]);
        assert_eq!(Fpmm::shares_of(pool_id, &ALICE), Ok(_10));
    });
}

#[test]
fn add_funding_works_on_subsequent_funding() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit(BOB, _5);
        assert_ok!(Fpmm::add_funding(RuntimeOrigin::signed(BOB), pool_id, _5, vec![]));
        let amounts_added = vec![_5 / 2, _5, _5 / 2, _5 / 2];
        assert_eq!(
            pool(pool_id).reserves.to_vec(),
            vec![_5 + _5 / 2, _15, _5 + _5 / 2, _5 + _5 / 2]
        );
        assert_eq!(position_balances(pool_id, BOB), vec![_5 / 2, 0, _5 / 2, _5 / 2]);
        assert_eq!(collateral_of(BOB), 0);
        assert_eq!(Fpmm::shares_of(pool_id, &BOB), Ok(_5));
        assert_eq!(Fpmm::total_shares(pool_id), Ok(_15));
        assert_reserves_match_pool_account(pool_id);
        System::assert_last_event(
            Event::<Runtime>::FundingAdded {
                who: BOB,
                pool_id,
                amount: _5,
                amounts_added,
                shares_minted: _5,
            }
            .into(),
        );
    });
}

#[test]
fn add_funding_mints_equal_shares_for_equal_funding() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        for who in [BOB, CHARLIE] {
            deposit(who, _3);
            assert_ok!(Fpmm::add_funding(RuntimeOrigin::signed(who), pool_id, _3, vec![]));
        }
        assert_eq!(Fpmm::shares_of(pool_id, &BOB), Ok(_3));
        assert_eq!(Fpmm::shares_of(pool_id, &CHARLIE), Ok(_3));
        assert_eq!(position_balances(pool_id, BOB), position_balances(pool_id, CHARLIE));
    });
}

#[test]
fn add_funding_keeps_odds_after_trades() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        deposit(CHARLIE, _1);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(CHARLIE), pool_id, _1, 0, 0));
        let reserves_before = pool(pool_id).reserves.to_vec();
        deposit(BOB, _10);
        assert_ok!(Fpmm::add_funding(RuntimeOrigin::signed(BOB), pool_id, _10, vec![]));
        let reserves_after = pool(pool_id).reserves.to_vec();
        // The largest reserve receives the full amount, every other reserve grows at the same
        // rate (up to rounding).
        assert_eq!(reserves_after[1], reserves_before[1] + _10);
        let expected_added = _10 * reserves_before[0] / reserves_before[1];
        assert_eq!(reserves_after[0], reserves_before[0] + expected_added);
        assert_reserves_match_pool_account(pool_id);
    });
}

#[test]
fn add_funding_fails_on_zero_amount() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(2, SWAP_FEE);
        assert_noop!(
            Fpmm::add_funding(RuntimeOrigin::signed(ALICE), pool_id, 0, vec![]),
            Error::<Runtime>::InvalidAmount
        );
    });
}

#[test]
fn add_funding_fails_on_distribution_hint_for_funded_pool() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        deposit(BOB, _1);
        assert_noop!(
            Fpmm::add_funding(RuntimeOrigin::signed(BOB), pool_id, _1, vec![1, 1]),
            Error::<Runtime>::UnexpectedDistribution
        );
    });
}

#[test_case(vec![1, 1]; "too short")]
#[test_case(vec![1, 1, 1, 1]; "too long")]
#[test_case(vec![0, 0, 0]; "all zero")]
#[test_case(vec![1, 0, 1]; "zero weight")]
fn add_funding_fails_on_invalid_distribution_hint(distribution_hint: Vec<Balance>) {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(3, SWAP_FEE);
        deposit(ALICE, _10);
        assert_noop!(
            Fpmm::add_funding(RuntimeOrigin::signed(ALICE), pool_id, _10, distribution_hint),
            Error::<Runtime>::InvalidDistribution
        );
    });
}

#[test]
fn add_funding_fails_on_insufficient_collateral() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_pool(2, SWAP_FEE);
        deposit(ALICE, _1);
        assert_noop!(
            Fpmm::add_funding(RuntimeOrigin::signed(ALICE), pool_id, _2, vec![]),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}

#[test]
fn add_funding_fails_on_unknown_pool() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::add_funding(RuntimeOrigin::signed(ALICE), 7, _1, vec![]),
            Error::<Runtime>::PoolNotFound
        );
    });
}
