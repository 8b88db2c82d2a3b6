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

#[test]
fn withdraw_fees_works() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(4, SWAP_FEE, _10, vec![1, 2, 1, 1]);
        deposit(BOB, _1);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), pool_id, _1, 1, 0));
        let expected_fees = 3_000_000_000_000_000;
        assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(ALICE), pool_id));
        assert_eq!(collateral_of(ALICE), expected_fees);
        assert_eq!(collateral_of(pool(pool_id).account_id), 0);
        assert_eq!(Fpmm::collected_fees(pool_id), Ok(0));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &ALICE), Ok(0));
        System::assert_last_event(
            Event::<Runtime>::FeesWithdrawn { who: ALICE, pool_id, amount: expected_fees }.into(),
        );
    });
}

#[test]
fn withdraw_fees_distributes_fees_pro_rata() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, CENT, _10, vec![]);
        deposit(BOB, _10);
        assert_ok!(Fpmm::add_funding(RuntimeOrigin::signed(BOB), pool_id, _10, vec![]));
        deposit(CHARLIE, _1);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(CHARLIE), pool_id, _1, 0, 0));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &ALICE), Ok(CENT / 2));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &BOB), Ok(CENT / 2));
        assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(ALICE), pool_id));
        assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(BOB), pool_id));
        assert_eq!(collateral_of(ALICE), CENT / 2);
        assert_eq!(collateral_of(BOB), CENT / 2);
        assert_eq!(Fpmm::collected_fees(pool_id), Ok(0));
    });
}

#[test]
fn withdraw_fees_does_not_pay_fees_collected_before_joining() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, CENT, _10, vec![]);
        deposit(CHARLIE, _1);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(CHARLIE), pool_id, _1, 0, 0));
        deposit(BOB, _10);
        assert_ok!(Fpmm::add_funding(RuntimeOrigin::signed(BOB), pool_id, _10, vec![]));
        assert_eq!(Fpmm::shares_of(pool_id, &BOB), Ok(9_099_181_073_703_366_696));
        assert_eq!(position_balances(pool_id, BOB), vec![1_720_490_378_795_844_680, 0]);

        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &BOB), Ok(0));
        // One unit is lost to rounding.
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &ALICE), Ok(CENT - 1));
        assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(BOB), pool_id));
        assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(ALICE), pool_id));
        assert_eq!(collateral_of(BOB), 0);
        assert_eq!(collateral_of(ALICE), CENT - 1);
        assert_eq!(collateral_of(pool(pool_id).account_id), 1);
    });
}

#[test]
fn withdraw_fees_is_noop_without_fees() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        for who in [ALICE, BOB] {
            assert_ok!(Fpmm::withdraw_fees(RuntimeOrigin::signed(who), pool_id));
            System::assert_last_event(
                Event::<Runtime>::FeesWithdrawn { who, pool_id, amount: 0 }.into(),
            );
        }
        assert_eq!(collateral_of(ALICE), 0);
        assert_eq!(collateral_of(BOB), 0);
    });
}

#[test]
fn withdraw_fees_fails_on_unknown_pool() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::withdraw_fees(RuntimeOrigin::signed(ALICE), 0),
            Error::<Runtime>::PoolNotFound
        );
    });
}
