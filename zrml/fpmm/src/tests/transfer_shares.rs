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
fn transfer_shares_works() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_ok!(Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, BOB, _4));
        assert_eq!(Fpmm::shares_of(pool_id, &ALICE), Ok(_6));
        assert_eq!(Fpmm::shares_of(pool_id, &BOB), Ok(_4));
        assert_eq!(Fpmm::total_shares(pool_id), Ok(_10));
        System::assert_last_event(
            Event::<Runtime>::SharesTransferred { who: ALICE, pool_id, receiver: BOB, amount: _4 }
                .into(),
        );
    });
}

#[test]
fn transfer_shares_withdraws_fees_of_sender() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, CENT, _10, vec![]);
        deposit(CHARLIE, _2);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(CHARLIE), pool_id, _1, 0, 0));
        assert_ok!(Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, BOB, _4));
        System::assert_has_event(
            Event::<Runtime>::FeesWithdrawn { who: ALICE, pool_id, amount: CENT }.into(),
        );
        assert_eq!(collateral_of(ALICE), CENT);
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &BOB), Ok(0));

        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(CHARLIE), pool_id, _1, 1, 0));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &ALICE), Ok(6 * CENT / 10));
        assert_eq!(Fpmm::fees_withdrawable_by(pool_id, &BOB), Ok(4 * CENT / 10));
    });
}

#[test]
fn receiver_can_remove_transferred_shares() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_ok!(Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, BOB, _10));
        assert_eq!(Fpmm::shares_of(pool_id, &ALICE), Ok(0));
        assert!(!pool(pool_id).liquidity_shares.accounts.contains_key(&ALICE));
        assert_ok!(Fpmm::remove_funding(RuntimeOrigin::signed(BOB), pool_id, _10));
        assert_eq!(position_balances(pool_id, BOB), vec![_10, _10]);
        assert_eq!(Fpmm::total_shares(pool_id), Ok(0));
    });
}

#[test]
fn transfer_shares_to_self_keeps_shares() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_ok!(Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, ALICE, _4));
        assert_eq!(Fpmm::shares_of(pool_id, &ALICE), Ok(_10));
        assert_eq!(Fpmm::total_shares(pool_id), Ok(_10));
    });
}

#[test]
fn transfer_shares_fails_on_zero_amount() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_noop!(
            Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, BOB, 0),
            Error::<Runtime>::InvalidAmount
        );
    });
}

#[test]
fn transfer_shares_fails_on_insufficient_shares() {
    ExtBuilder::build().execute_with(|| {
        let pool_id = create_funded_pool(2, SWAP_FEE, _10, vec![]);
        assert_noop!(
            Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), pool_id, BOB, _10 + 1),
            Error::<Runtime>::InsufficientShares
        );
        assert_noop!(
            Fpmm::transfer_shares(RuntimeOrigin::signed(BOB), pool_id, ALICE, 1),
            Error::<Runtime>::InsufficientShares
        );
    });
}

#[test]
fn transfer_shares_fails_on_unknown_pool() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::transfer_shares(RuntimeOrigin::signed(ALICE), 0, BOB, _1),
            Error::<Runtime>::PoolNotFound
        );
    });
}
