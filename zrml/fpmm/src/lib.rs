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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod math;
pub mod mock;
mod pool_storage;
mod tests;
pub mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        traits::{LiquiditySharesManager, PoolOperations, PoolStorage},
        types::{FundingPlan, LiquidityShares, Pool, SwapQuote},
        weights::WeightInfoZeitgeist,
    };
    use alloc::{collections::BTreeSet, vec, vec::Vec};
    use core::marker::PhantomData;
    use frame_support::{
        dispatch::DispatchResultWithPostInfo,
        ensure,
        pallet_prelude::{StorageMap, StorageValue, ValueQuery},
        require_transactional,
        storage::bounded_vec::BoundedVec,
        traits::{Get, IsType, StorageVersion},
        transactional, PalletId, Parameter, Twox64Concat,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use orml_traits::MultiCurrency;
    use parity_scale_codec::MaxEncodedLen;
    use sp_runtime::{
        traits::{AccountIdConversion, AtLeast32Bit, MaybeSerializeDeserialize, Member, Zero},
        DispatchError, DispatchResult, SaturatedConversion,
    };
    use zeitgeist_primitives::{
        math::{
            checked_ops_res::{CheckedAddRes, CheckedSubRes},
            fixed::{BaseProvider, ZeitgeistBase},
        },
        traits::ConditionalTokensApi,
        types::{Asset, OutcomeIndex},
    };

    #[cfg(feature = "runtime-benchmarks")]
    use zeitgeist_primitives::traits::ConditionalTokensBenchmarkHelper;

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-fpmm";

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> =
        <<T as Config>::MultiCurrency as MultiCurrency<AccountIdOf<T>>>::Balance;
    pub(crate) type PoolOf<T> = Pool<T>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: ConditionalTokensBenchmarkHelper<ConditionId = Self::ConditionId>;

        /// Identifier of a condition prepared on the outcome-token ledger.
        type ConditionId: Copy + MaxEncodedLen + Member + Ord + Parameter;

        /// The outcome-token ledger. Splits collateral into full sets of positions and merges full
        /// sets back into collateral.
        type ConditionalTokens: ConditionalTokensApi<
            AccountId = Self::AccountId,
            Asset = Asset,
            Balance = BalanceOf<Self>,
            ConditionId = Self::ConditionId,
        >;

        type MultiCurrency: MultiCurrency<Self::AccountId, CurrencyId = Asset>;

        type PoolId: AtLeast32Bit
            + Copy
            + Default
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;

        /// Maximum number of conditions a pool may be created from.
        #[pallet::constant]
        type MaxConditions: Get<u32>;

        /// Maximum number of liquidity providers per pool.
        #[pallet::constant]
        type MaxLiquidityProviders: Get<u32>;

        /// Maximum number of outcomes per pool, that is, the maximum product of the outcome slot
        /// counts of the pool's conditions.
        #[pallet::constant]
        type MaxOutcomes: Get<u32>;

        #[pallet::constant]
        type MaxSwapFee: Get<BalanceOf<Self>>;

        #[pallet::constant]
        type PalletId: Get<PalletId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::storage]
    pub(crate) type Pools<T: Config> = StorageMap<_, Twox64Concat, T::PoolId, PoolOf<T>>;

    #[pallet::storage]
    pub(crate) type PoolCount<T: Config> = StorageValue<_, T::PoolId, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A pool was created. It holds no liquidity until it is funded.
        PoolCreated {
            who: T::AccountId,
            pool_id: T::PoolId,
            account_id: T::AccountId,
            collateral: Asset,
            conditions: Vec<T::ConditionId>,
            positions: Vec<Asset>,
            swap_fee: BalanceOf<T>,
        },
        /// Liquidity was added to a pool. `amounts_added` are the outcome amounts kept by the pool;
        /// the rest of each position was sent back to `who`.
        FundingAdded {
            who: T::AccountId,
            pool_id: T::PoolId,
            amount: BalanceOf<T>,
            amounts_added: Vec<BalanceOf<T>>,
            shares_minted: BalanceOf<T>,
        },
        /// Liquidity was removed from a pool.
        FundingRemoved {
            who: T::AccountId,
            pool_id: T::PoolId,
            amounts_removed: Vec<BalanceOf<T>>,
            collateral_removed_from_fee_pool: BalanceOf<T>,
            shares_burnt: BalanceOf<T>,
        },
        /// Outcome tokens were bought from a pool.
        BuyExecuted {
            who: T::AccountId,
            pool_id: T::PoolId,
            outcome_index: OutcomeIndex,
            investment_amount: BalanceOf<T>,
            fee_amount: BalanceOf<T>,
            outcome_tokens_bought: BalanceOf<T>,
        },
        /// Outcome tokens were sold to a pool.
        SellExecuted {
            who: T::AccountId,
            pool_id: T::PoolId,
            outcome_index: OutcomeIndex,
            return_amount: BalanceOf<T>,
            fee_amount: BalanceOf<T>,
            outcome_tokens_sold: BalanceOf<T>,
        },
        /// Liquidity provider withdrew fees.
        FeesWithdrawn { who: T::AccountId, pool_id: T::PoolId, amount: BalanceOf<T> },
        /// Pool shares were transferred to another account.
        SharesTransferred {
            who: T::AccountId,
            pool_id: T::PoolId,
            receiver: T::AccountId,
            amount: BalanceOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Specified monetary amount is zero or too small to have any effect.
        InvalidAmount,
        /// At least one reserve of the pool is empty.
        InsufficientLiquidity,
        /// The trade did not meet the specified slippage bound.
        SlippageExceeded,
        /// The distribution hint is malformed or yields an empty reserve.
        InvalidDistribution,
        /// A distribution hint was specified for a pool which is already funded.
        UnexpectedDistribution,
        /// User doesn't own enough pool shares.
        InsufficientShares,
        /// The requested return amount would drain at least one reserve of the pool.
        ExcessiveReturnAmount,
        /// A calculation overflowed.
        ArithmeticOverflow,
        /// Specified pool does not exist.
        PoolNotFound,
        /// The outcome index is out of range for this pool.
        InvalidOutcomeIndex,
        /// One of the specified conditions was never prepared.
        ConditionNotFound,
        /// The list of conditions is empty, too long or contains duplicates.
        InvalidConditions,
        /// The conditions combine to less than two or more than the maximum number of outcomes.
        InvalidOutcomeCount,
        /// Pool's swap fee exceeds the allowed upper limit.
        SwapFeeAboveMax,
        /// The pool has reached the maximum number of liquidity providers.
        TooManyLiquidityProviders,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a pool trading the outcomes of `conditions` against `collateral`.
        ///
        /// The pool trades one position for every element of the cartesian product of the
        /// outcome slots of `conditions`. The creator pays the existential deposit of `collateral`
        /// to the pool account, which remains there for the lifetime of the pool.
        ///
        /// # Parameters
        ///
        /// - `origin`: The creator of the pool.
        /// - `collateral`: The asset the positions are backed by.
        /// - `conditions`: Prepared conditions, pairwise distinct.
        /// - `swap_fee`: The fee charged on each trade, at most `MaxSwapFee`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_pool(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn create_pool(
            origin: OriginFor<T>,
            collateral: Asset,
            conditions: Vec<T::ConditionId>,
            #[pallet::compact] swap_fee: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let pool_id = Self::do_create_pool(who, collateral, conditions, swap_fee)?;
            let outcome_count = Self::outcome_count_of(pool_id)?;
            Ok(Some(T::WeightInfo::create_pool(outcome_count)).into())
        }

        /// Add liquidity to a pool.
        ///
        /// `amount` units of collateral are split into full sets. The pool keeps its share of each
        /// position and sends the rest back to the funder. The first funding may specify
        /// `distribution_hint` to set the initial odds; an empty hint means uniform odds. Later
        /// fundings must leave the hint empty and are added at the current odds.
        ///
        /// # Parameters
        ///
        /// - `origin`: The liquidity provider.
        /// - `pool_id`: Identifier of the pool.
        /// - `amount`: Amount of collateral to fund the pool with.
        /// - `distribution_hint`: Relative weights of the outcomes, first funding only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_funding(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn add_funding(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
            #[pallet::compact] amount: BalanceOf<T>,
            distribution_hint: Vec<BalanceOf<T>>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count_of(pool_id)?;
            Self::do_add_funding(who, pool_id, amount, distribution_hint)?;
            Ok(Some(T::WeightInfo::add_funding(outcome_count)).into())
        }

        /// Burn pool shares and receive the proportional amount of every reserve, together with the
        /// caller's fees.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_funding(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn remove_funding(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
            #[pallet::compact] shares_to_burn: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count_of(pool_id)?;
            Self::do_remove_funding(who, pool_id, shares_to_burn)?;
            Ok(Some(T::WeightInfo::remove_funding(outcome_count)).into())
        }

        /// Buy outcome tokens from the specified pool.
        ///
        /// `investment_amount` is paid in collateral. The transaction fails if the amount of
        /// outcome tokens received is smaller than `min_outcome_tokens_to_buy`.
        ///
        /// # Parameters
        ///
        /// - `origin`: The buyer.
        /// - `pool_id`: Identifier of the pool.
        /// - `investment_amount`: Amount of collateral paid, including the swap fee.
        /// - `outcome_index`: Index of the outcome to buy.
        /// - `min_outcome_tokens_to_buy`: Minimum amount of outcome tokens the buyer expects.
        ///
        /// # Complexity
        ///
        /// `O(n)` where `n` is the number of outcomes of the pool.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::buy(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn buy(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
            #[pallet::compact] investment_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
            #[pallet::compact] min_outcome_tokens_to_buy: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count_of(pool_id)?;
            Self::do_buy(
                who,
                pool_id,
                investment_amount,
                outcome_index,
                min_outcome_tokens_to_buy,
            )?;
            Ok(Some(T::WeightInfo::buy(outcome_count)).into())
        }

        /// Sell outcome tokens to the specified pool.
        ///
        /// The seller receives exactly `return_amount` units of collateral. The transaction fails
        /// if this requires more than `max_outcome_tokens_to_sell` outcome tokens.
        ///
        /// # Complexity
        ///
        /// `O(n)` where `n` is the number of outcomes of the pool.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::sell(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn sell(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
            #[pallet::compact] return_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
            #[pallet::compact] max_outcome_tokens_to_sell: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count_of(pool_id)?;
            Self::do_sell(
                who,
                pool_id,
                return_amount,
                outcome_index,
                max_outcome_tokens_to_sell,
            )?;
            Ok(Some(T::WeightInfo::sell(outcome_count)).into())
        }

        /// Withdraw the caller's share of the fees collected by the pool.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::withdraw_fees())]
        #[transactional]
        pub fn withdraw_fees(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_withdraw_fees(who, pool_id)
        }

        /// Transfer pool shares to `receiver`.
        ///
        /// The caller's fees are withdrawn first. The receiver is not entitled to fees collected
        /// before the transfer.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::transfer_shares())]
        #[transactional]
        pub fn transfer_shares(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: T::PoolId,
            receiver: T::AccountId,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer_shares(who, pool_id, receiver, amount)
        }
    }

    impl<T: Config> Pallet<T> {
        #[require_transactional]
        pub(crate) fn do_create_pool(
            who: T::AccountId,
            collateral: Asset,
            conditions: Vec<T::ConditionId>,
            swap_fee: BalanceOf<T>,
        ) -> Result<T::PoolId, DispatchError> {
            ensure!(swap_fee <= T::MaxSwapFee::get(), Error::<T>::SwapFeeAboveMax);
            let base = ZeitgeistBase::<BalanceOf<T>>::get()?;
            ensure!(swap_fee < base, Error::<T>::SwapFeeAboveMax);
            ensure!(!conditions.is_empty(), Error::<T>::InvalidConditions);
            let distinct = conditions.iter().collect::<BTreeSet<_>>();
            ensure!(distinct.len() == conditions.len(), Error::<T>::InvalidConditions);
            let conditions: BoundedVec<T::ConditionId, T::MaxConditions> =
                conditions.try_into().map_err(|_| Error::<T>::InvalidConditions)?;

            let slot_counts = conditions
                .iter()
                .map(|condition_id| {
                    T::ConditionalTokens::outcome_slot_count(condition_id)
                        .ok_or(Error::<T>::ConditionNotFound)
                })
                .collect::<Result<Vec<_>, _>>()?;
            let outcome_count = slot_counts
                .iter()
                .try_fold(1u32, |acc, &count| acc.checked_mul(count.into()))
                .ok_or(Error::<T>::InvalidOutcomeCount)?;
            ensure!(
                (2..=T::MaxOutcomes::get()).contains(&outcome_count),
                Error::<T>::InvalidOutcomeCount
            );
            let positions = Self::positions(collateral, &conditions, &slot_counts, outcome_count)?;

            let pool_id = <Self as PoolStorage>::next_pool_id();
            let account_id = Self::pool_account_id(&pool_id);
            // Keeps the pool account alive while its fee pool is empty.
            let existential_deposit = T::MultiCurrency::minimum_balance(collateral);
            T::MultiCurrency::transfer(collateral, &who, &account_id, existential_deposit)?;

            let reserves: BoundedVec<BalanceOf<T>, T::MaxOutcomes> =
                vec![Zero::zero(); positions.len()]
                    .try_into()
                    .map_err(|_| Error::<T>::InvalidOutcomeCount)?;
            let pool = Pool {
                account_id: account_id.clone(),
                collateral,
                conditions: conditions.clone(),
                positions: positions.clone(),
                reserves,
                swap_fee,
                liquidity_shares: LiquidityShares::new(),
            };
            let pool_id = <Self as PoolStorage>::add(pool)?;

            log::debug!(
                target: LOG_TARGET,
                "Created pool {:?} with {} outcomes at {:?}",
                pool_id,
                outcome_count,
                account_id,
            );
            Self::deposit_event(Event::<T>::PoolCreated {
                who,
                pool_id,
                account_id,
                collateral,
                conditions: conditions.into_inner(),
                positions: positions.into_inner(),
                swap_fee,
            });

            Ok(pool_id)
        }

        /// Derive the position of every element of the cartesian product of the outcome slots of
        /// `conditions`. The slot of the first condition varies fastest.
        fn positions(
            collateral: Asset,
            conditions: &[T::ConditionId],
            slot_counts: &[OutcomeIndex],
            outcome_count: u32,
        ) -> Result<BoundedVec<Asset, T::MaxOutcomes>, DispatchError> {
            let mut positions = Vec::with_capacity(outcome_count as usize);
            for outcome in 0..outcome_count {
                let mut rest = outcome;
                let mut collection = Vec::with_capacity(conditions.len());
                for (&condition_id, &slot_count) in conditions.iter().zip(slot_counts.iter()) {
                    let slot_count = u32::from(slot_count);
                    let slot = rest.checked_rem(slot_count).ok_or(Error::<T>::InvalidOutcomeCount)?;
                    rest = rest.checked_div(slot_count).ok_or(Error::<T>::InvalidOutcomeCount)?;
                    collection.push((condition_id, slot.saturated_into::<OutcomeIndex>()));
                }
                positions.push(T::ConditionalTokens::position_id(collateral, &collection));
            }
            positions.try_into().map_err(|_| Error::<T>::InvalidOutcomeCount.into())
        }

        #[require_transactional]
        pub(crate) fn do_add_funding(
            who: T::AccountId,
            pool_id: T::PoolId,
            amount: BalanceOf<T>,
            distribution_hint: Vec<BalanceOf<T>>,
        ) -> DispatchResult {
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                let FundingPlan { amounts_added, send_back, shares_minted } =
                    pool.calculate_funding(amount, &distribution_hint)?;

                T::MultiCurrency::transfer(pool.collateral, &who, &pool.account_id, amount)?;
                T::ConditionalTokens::split_position(
                    &pool.account_id,
                    pool.collateral,
                    &pool.positions,
                    amount,
                )?;
                for (&position, &amount_back) in pool.positions.iter().zip(send_back.iter()) {
                    T::MultiCurrency::transfer(position, &pool.account_id, &who, amount_back)?;
                }
                for (reserve, amount_added) in pool.reserves.iter_mut().zip(amounts_added.iter()) {
                    *reserve = reserve.checked_add_res(amount_added)?;
                }
                pool.liquidity_shares.join(&who, shares_minted)?;

                log::debug!(
                    target: LOG_TARGET,
                    "{:?} funded pool {:?} with {:?}, minting {:?} shares",
                    who,
                    pool_id,
                    amount,
                    shares_minted,
                );
                Self::deposit_event(Event::<T>::FundingAdded {
                    who: who.clone(),
                    pool_id,
                    amount,
                    amounts_added,
                    shares_minted,
                });

                Ok(())
            })
        }

        #[require_transactional]
        pub(crate) fn do_remove_funding(
            who: T::AccountId,
            pool_id: T::PoolId,
            shares_to_burn: BalanceOf<T>,
        ) -> DispatchResult {
            ensure!(!shares_to_burn.is_zero(), Error::<T>::InvalidAmount);
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                ensure!(
                    pool.liquidity_shares.shares_of(&who) >= shares_to_burn,
                    Error::<T>::InsufficientShares
                );
                let amounts_removed = pool.calculate_defunding(shares_to_burn)?;

                for ((&position, reserve), amount) in
                    pool.positions.iter().zip(pool.reserves.iter_mut()).zip(amounts_removed.iter())
                {
                    *reserve = reserve.checked_sub_res(amount)?;
                    T::MultiCurrency::transfer(position, &pool.account_id, &who, *amount)?;
                }
                let fees = pool.liquidity_shares.exit(&who, shares_to_burn)?;
                T::MultiCurrency::transfer(pool.collateral, &pool.account_id, &who, fees)?;

                log::debug!(
                    target: LOG_TARGET,
                    "{:?} burnt {:?} shares of pool {:?}, receiving {:?} in fees",
                    who,
                    shares_to_burn,
                    pool_id,
                    fees,
                );
                Self::deposit_event(Event::<T>::FundingRemoved {
                    who: who.clone(),
                    pool_id,
                    amounts_removed,
                    collateral_removed_from_fee_pool: fees,
                    shares_burnt: shares_to_burn,
                });

                Ok(())
            })
        }

        #[require_transactional]
        pub(crate) fn do_buy(
            who: T::AccountId,
            pool_id: T::PoolId,
            investment_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
            min_outcome_tokens_to_buy: BalanceOf<T>,
        ) -> DispatchResult {
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                let SwapQuote { amount: outcome_tokens_bought, fee } =
                    pool.calculate_buy_amount(outcome_index, investment_amount)?;
                ensure!(
                    outcome_tokens_bought >= min_outcome_tokens_to_buy,
                    Error::<T>::SlippageExceeded
                );
                let amount_in_minus_fees = investment_amount.checked_sub_res(&fee)?;
                let position = pool.position(outcome_index)?;

                T::MultiCurrency::transfer(
                    pool.collateral,
                    &who,
                    &pool.account_id,
                    investment_amount,
                )?;
                T::ConditionalTokens::split_position(
                    &pool.account_id,
                    pool.collateral,
                    &pool.positions,
                    amount_in_minus_fees,
                )?;
                T::MultiCurrency::transfer(
                    position,
                    &pool.account_id,
                    &who,
                    outcome_tokens_bought,
                )?;
                for reserve in pool.reserves.iter_mut() {
                    *reserve = reserve.checked_add_res(&amount_in_minus_fees)?;
                }
                pool.decrease_reserve(outcome_index, &outcome_tokens_bought)?;
                pool.liquidity_shares.deposit_fees(fee)?;

                log::debug!(
                    target: LOG_TARGET,
                    "{:?} bought {:?} of outcome {} from pool {:?} for {:?} (fee {:?})",
                    who,
                    outcome_tokens_bought,
                    outcome_index,
                    pool_id,
                    investment_amount,
                    fee,
                );
                Self::deposit_event(Event::<T>::BuyExecuted {
                    who: who.clone(),
                    pool_id,
                    outcome_index,
                    investment_amount,
                    fee_amount: fee,
                    outcome_tokens_bought,
                });

                Ok(())
            })
        }

        #[require_transactional]
        pub(crate) fn do_sell(
            who: T::AccountId,
            pool_id: T::PoolId,
            return_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
            max_outcome_tokens_to_sell: BalanceOf<T>,
        ) -> DispatchResult {
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                let SwapQuote { amount: outcome_tokens_sold, fee } =
                    pool.calculate_sell_amount(outcome_index, return_amount)?;
                ensure!(
                    outcome_tokens_sold <= max_outcome_tokens_to_sell,
                    Error::<T>::SlippageExceeded
                );
                let return_amount_plus_fees = return_amount.checked_add_res(&fee)?;
                let position = pool.position(outcome_index)?;

                T::MultiCurrency::transfer(position, &who, &pool.account_id, outcome_tokens_sold)?;
                T::ConditionalTokens::merge_positions(
                    &pool.account_id,
                    pool.collateral,
                    &pool.positions,
                    return_amount_plus_fees,
                )?;
                T::MultiCurrency::transfer(pool.collateral, &pool.account_id, &who, return_amount)?;
                pool.increase_reserve(outcome_index, &outcome_tokens_sold)?;
                for reserve in pool.reserves.iter_mut() {
                    *reserve = reserve.checked_sub_res(&return_amount_plus_fees)?;
                }
                pool.liquidity_shares.deposit_fees(fee)?;

                log::debug!(
                    target: LOG_TARGET,
                    "{:?} sold {:?} of outcome {} to pool {:?} for {:?} (fee {:?})",
                    who,
                    outcome_tokens_sold,
                    outcome_index,
                    pool_id,
                    return_amount,
                    fee,
                );
                Self::deposit_event(Event::<T>::SellExecuted {
                    who: who.clone(),
                    pool_id,
                    outcome_index,
                    return_amount,
                    fee_amount: fee,
                    outcome_tokens_sold,
                });

                Ok(())
            })
        }

        #[require_transactional]
        pub(crate) fn do_withdraw_fees(who: T::AccountId, pool_id: T::PoolId) -> DispatchResult {
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                let amount = pool.liquidity_shares.withdraw_fees(&who)?;
                T::MultiCurrency::transfer(pool.collateral, &pool.account_id, &who, amount)?;
                Self::deposit_event(Event::<T>::FeesWithdrawn {
                    who: who.clone(),
                    pool_id,
                    amount,
                });
                Ok(())
            })
        }

        #[require_transactional]
        pub(crate) fn do_transfer_shares(
            who: T::AccountId,
            pool_id: T::PoolId,
            receiver: T::AccountId,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
            <Self as PoolStorage>::try_mutate_pool(&pool_id, |pool| {
                let fees = pool.liquidity_shares.split(&who, &receiver, amount)?;
                T::MultiCurrency::transfer(pool.collateral, &pool.account_id, &who, fees)?;
                if !fees.is_zero() {
                    Self::deposit_event(Event::<T>::FeesWithdrawn {
                        who: who.clone(),
                        pool_id,
                        amount: fees,
                    });
                }
                Self::deposit_event(Event::<T>::SharesTransferred {
                    who: who.clone(),
                    pool_id,
                    receiver: receiver.clone(),
                    amount,
                });
                Ok(())
            })
        }

        fn outcome_count_of(pool_id: T::PoolId) -> Result<u32, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.outcome_count().saturated_into())
        }

        /// Return the amount of outcome `outcome_index` received for `investment_amount` units of
        /// collateral.
        pub fn calc_buy_amount(
            pool_id: T::PoolId,
            investment_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.calculate_buy_amount(outcome_index, investment_amount)?.amount)
        }

        /// Return the amount of outcome `outcome_index` which must be sold to receive
        /// `return_amount` units of collateral.
        pub fn calc_sell_amount(
            pool_id: T::PoolId,
            return_amount: BalanceOf<T>,
            outcome_index: OutcomeIndex,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.calculate_sell_amount(outcome_index, return_amount)?.amount)
        }

        pub fn fees_withdrawable_by(
            pool_id: T::PoolId,
            who: &T::AccountId,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            pool.liquidity_shares.fees_withdrawable_by(who)
        }

        /// Fees collected by the pool and not yet withdrawn.
        pub fn collected_fees(pool_id: T::PoolId) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            pool.liquidity_shares.collected_fees()
        }

        /// The reserves of the pool, indexed by outcome.
        pub fn pool_balances(pool_id: T::PoolId) -> Result<Vec<BalanceOf<T>>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.reserves.into_inner())
        }

        pub fn shares_of(
            pool_id: T::PoolId,
            who: &T::AccountId,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.liquidity_shares.shares_of(who))
        }

        pub fn total_shares(pool_id: T::PoolId) -> Result<BalanceOf<T>, DispatchError> {
            let pool = <Self as PoolStorage>::get(pool_id)?;
            Ok(pool.liquidity_shares.total_shares())
        }

        pub fn pool_account_id(pool_id: &T::PoolId) -> T::AccountId {
            T::PalletId::get().into_sub_account_truncating((*pool_id).saturated_into::<u128>())
        }
    }
}
