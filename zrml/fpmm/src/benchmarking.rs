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

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::{traits::PoolOperations, BalanceOf, Pallet as Fpmm, PoolCount, Pools};
use alloc::{vec, vec::Vec};
use frame_benchmarking::v2::*;
use frame_support::{
    assert_ok,
    storage::{with_transaction, TransactionOutcome::*},
    traits::Get,
};
use frame_system::RawOrigin;
use orml_traits::MultiCurrency;
use sp_runtime::SaturatedConversion;
use zeitgeist_primitives::{
    constants::{base_multiples::*, CENT},
    traits::ConditionalTokensBenchmarkHelper,
    types::Asset,
};

macro_rules! assert_ok_with_transaction {
    ($expr:expr) => {{
        assert_ok!(with_transaction(|| match $expr {
            Ok(val) => Commit(Ok(val)),
            Err(err) => Rollback(Err(err)),
        }));
    }};
}

const COLLATERAL: Asset = Asset::Ztg;

fn create_pool<T: Config>(caller: T::AccountId, outcome_count: u32) -> T::PoolId {
    let condition_id =
        T::BenchmarkHelper::prepare_condition(0, outcome_count.saturated_into()).unwrap();
    assert_ok!(T::MultiCurrency::deposit(COLLATERAL, &caller, _100.saturated_into()));
    let pool_id = PoolCount::<T>::get();
    assert_ok_with_transaction!(Fpmm::<T>::do_create_pool(
        caller,
        COLLATERAL,
        vec![condition_id],
        CENT.saturated_into(),
    ));
    pool_id
}

fn create_funded_pool<T: Config>(caller: T::AccountId, outcome_count: u32) -> T::PoolId {
    let pool_id = create_pool::<T>(caller.clone(), outcome_count);
    assert_ok_with_transaction!(Fpmm::<T>::do_add_funding(
        caller,
        pool_id,
        _10.saturated_into(),
        vec![],
    ));
    pool_id
}

fn buy_outcome<T: Config>(pool_id: T::PoolId, buyer: T::AccountId) {
    let amount: BalanceOf<T> = _1.saturated_into();
    assert_ok!(T::MultiCurrency::deposit(COLLATERAL, &buyer, amount));
    assert_ok_with_transaction!(Fpmm::<T>::do_buy(
        buyer,
        pool_id,
        amount,
        0,
        0u8.saturated_into(),
    ));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_pool(n: Linear<2, { T::MaxOutcomes::get() }>) {
        let alice: T::AccountId = whitelisted_caller();
        let condition_id = T::BenchmarkHelper::prepare_condition(0, n.saturated_into()).unwrap();
        assert_ok!(T::MultiCurrency::deposit(COLLATERAL, &alice, _1.saturated_into()));
        let pool_id = PoolCount::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), COLLATERAL, vec![condition_id], CENT.saturated_into());

        assert_eq!(Pools::<T>::get(pool_id).unwrap().outcome_count(), n as usize);
    }

    #[benchmark]
    fn add_funding(n: Linear<2, { T::MaxOutcomes::get() }>) {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice, n);
        let bob: T::AccountId = account("bob", 0, 0);
        let amount: BalanceOf<T> = _10.saturated_into();
        assert_ok!(T::MultiCurrency::deposit(COLLATERAL, &bob, amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), pool_id, amount, Vec::new());
    }

    #[benchmark]
    fn remove_funding(n: Linear<2, { T::MaxOutcomes::get() }>) {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice.clone(), n);
        buy_outcome::<T>(pool_id, account("bob", 0, 0));

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), pool_id, _5.saturated_into());
    }

    #[benchmark]
    fn buy(n: Linear<2, { T::MaxOutcomes::get() }>) {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice, n);
        let bob: T::AccountId = account("bob", 0, 0);
        let amount: BalanceOf<T> = _1.saturated_into();
        assert_ok!(T::MultiCurrency::deposit(COLLATERAL, &bob, amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), pool_id, amount, 0, 0u8.saturated_into());
    }

    #[benchmark]
    fn sell(n: Linear<2, { T::MaxOutcomes::get() }>) {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice, n);
        let bob: T::AccountId = account("bob", 0, 0);
        let position = Pools::<T>::get(pool_id).unwrap().position(0).unwrap();
        assert_ok!(T::MultiCurrency::deposit(position, &bob, _5.saturated_into()));

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), pool_id, _1_10.saturated_into(), 0, _5.saturated_into());
    }

    #[benchmark]
    fn withdraw_fees() {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice.clone(), T::MaxOutcomes::get());
        buy_outcome::<T>(pool_id, account("bob", 0, 0));

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), pool_id);
    }

    #[benchmark]
    fn transfer_shares() {
        let alice: T::AccountId = whitelisted_caller();
        let pool_id = create_funded_pool::<T>(alice.clone(), T::MaxOutcomes::get());
        buy_outcome::<T>(pool_id, account("bob", 0, 0));
        let charlie: T::AccountId = account("charlie", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), pool_id, charlie, _1.saturated_into());
    }

    impl_benchmark_test_suite!(
        Fpmm,
        crate::mock::ext_builder::ExtBuilder::build(),
        crate::mock::runtime::Runtime
    );
}
