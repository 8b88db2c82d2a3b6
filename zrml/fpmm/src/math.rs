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

//! Fixed product pricing and funding math.
//!
//! All functions round in favor of the pool: Fees and amounts paid in are rounded up, amounts paid
//! out are rounded down, and every factor of the ending balance product is rounded up.

use crate::{
    types::{FundingPlan, SwapQuote},
    BalanceOf, Config, Error,
};
use alloc::{vec, vec::Vec};
use core::marker::PhantomData;
use frame_support::ensure;
use sp_runtime::{
    traits::{CheckedSub, Zero},
    DispatchError,
};
use zeitgeist_primitives::math::fixed::{
    BaseProvider, FixedDiv, FixedMul, FixedMulDiv, ZeitgeistBase,
};

pub(crate) trait MathOps<T: Config> {
    /// Calculate the amount of outcome `outcome_index` received for `investment_amount` units of
    /// collateral, and the fee charged.
    fn calculate_buy_amount(
        reserves: &[BalanceOf<T>],
        outcome_index: usize,
        investment_amount: BalanceOf<T>,
        swap_fee: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError>;

    /// Calculate the amount of outcome `outcome_index` a seller has to pay in to receive
    /// `return_amount` units of collateral, and the fee charged.
    fn calculate_sell_amount(
        reserves: &[BalanceOf<T>],
        outcome_index: usize,
        return_amount: BalanceOf<T>,
        swap_fee: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError>;

    fn calculate_funding(
        reserves: &[BalanceOf<T>],
        total_shares: BalanceOf<T>,
        amount: BalanceOf<T>,
        distribution_hint: &[BalanceOf<T>],
    ) -> Result<FundingPlan<BalanceOf<T>>, DispatchError>;

    fn calculate_defunding(
        reserves: &[BalanceOf<T>],
        total_shares: BalanceOf<T>,
        shares: BalanceOf<T>,
    ) -> Result<Vec<BalanceOf<T>>, DispatchError>;
}

pub(crate) struct Math<T>(PhantomData<T>);

impl<T: Config> Math<T> {
    fn to_u128(value: BalanceOf<T>) -> Result<u128, DispatchError> {
        value.try_into().map_err(|_| Self::overflow())
    }

    fn from_u128(value: u128) -> Result<BalanceOf<T>, DispatchError> {
        value.try_into().map_err(|_| Self::overflow())
    }

    fn to_u128_vec(values: &[BalanceOf<T>]) -> Result<Vec<u128>, DispatchError> {
        values.iter().map(|&value| Self::to_u128(value)).collect()
    }

    /// `x * multiplier / divisor`, rounded down.
    fn mul_div_floor(
        x: BalanceOf<T>,
        multiplier: BalanceOf<T>,
        divisor: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        x.bmul_bdiv_floor(multiplier, divisor).map_err(|_| Self::overflow())
    }

    fn overflow() -> DispatchError {
        Error::<T>::ArithmeticOverflow.into()
    }
}

impl<T: Config> MathOps<T> for Math<T> {
    fn calculate_buy_amount(
        reserves: &[BalanceOf<T>],
        outcome_index: usize,
        investment_amount: BalanceOf<T>,
        swap_fee: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError> {
        ensure!(!investment_amount.is_zero(), Error::<T>::InvalidAmount);
        ensure!(outcome_index < reserves.len(), Error::<T>::InvalidOutcomeIndex);
        ensure!(reserves.iter().all(|r| !r.is_zero()), Error::<T>::InsufficientLiquidity);
        let fee = investment_amount.bmul_ceil(swap_fee).map_err(|_| Self::overflow())?;
        let amount_in_minus_fees =
            investment_amount.checked_sub(&fee).ok_or_else(Self::overflow)?;
        let amount = detail::calculate_buy_amount(
            &Self::to_u128_vec(reserves)?,
            outcome_index,
            Self::to_u128(amount_in_minus_fees)?,
        )
        .ok_or_else(Self::overflow)?;
        Ok(SwapQuote { amount: Self::from_u128(amount)?, fee })
    }

    fn calculate_sell_amount(
        reserves: &[BalanceOf<T>],
        outcome_index: usize,
        return_amount: BalanceOf<T>,
        swap_fee: BalanceOf<T>,
    ) -> Result<SwapQuote<BalanceOf<T>>, DispatchError> {
        ensure!(!return_amount.is_zero(), Error::<T>::InvalidAmount);
        ensure!(outcome_index < reserves.len(), Error::<T>::InvalidOutcomeIndex);
        ensure!(reserves.iter().all(|r| !r.is_zero()), Error::<T>::InsufficientLiquidity);
        // The amount removed from every reserve: `return_amount / (1 - swap_fee)`.
        let one_minus_fee = ZeitgeistBase::<BalanceOf<T>>::get()
            .map_err(|_| Self::overflow())?
            .checked_sub(&swap_fee)
            .ok_or_else(Self::overflow)?;
        let gross = return_amount.bdiv_ceil(one_minus_fee).map_err(|_| Self::overflow())?;
        let drains_pool = reserves
            .iter()
            .enumerate()
            .any(|(index, &reserve)| index != outcome_index && gross >= reserve);
        ensure!(!drains_pool, Error::<T>::ExcessiveReturnAmount);
        let amount = detail::calculate_sell_amount(
            &Self::to_u128_vec(reserves)?,
            outcome_index,
            Self::to_u128(gross)?,
        )
        .ok_or_else(Self::overflow)?;
        let fee = gross.checked_sub(&return_amount).ok_or_else(Self::overflow)?;
        Ok(SwapQuote { amount: Self::from_u128(amount)?, fee })
    }

    fn calculate_funding(
        reserves: &[BalanceOf<T>],
        total_shares: BalanceOf<T>,
        amount: BalanceOf<T>,
        distribution_hint: &[BalanceOf<T>],
    ) -> Result<FundingPlan<BalanceOf<T>>, DispatchError> {
        ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
        let (amounts_added, shares_minted) = if total_shares.is_zero() {
            // With a hint, the outcome with the largest weight receives `amount` and the others
            // a proportional part of it.
            let amounts_added = if distribution_hint.is_empty() {
                vec![amount; reserves.len()]
            } else {
                ensure!(
                    distribution_hint.len() == reserves.len(),
                    Error::<T>::InvalidDistribution
                );
                let max_weight = distribution_hint
                    .iter()
                    .copied()
                    .max()
                    .filter(|weight| !weight.is_zero())
                    .ok_or(Error::<T>::InvalidDistribution)?;
                distribution_hint
                    .iter()
                    .map(|&weight| Self::mul_div_floor(amount, weight, max_weight))
                    .collect::<Result<Vec<_>, _>>()?
            };
            ensure!(amounts_added.iter().all(|a| !a.is_zero()), Error::<T>::InvalidDistribution);
            (amounts_added, amount)
        } else {
            ensure!(distribution_hint.is_empty(), Error::<T>::UnexpectedDistribution);
            // The largest reserve receives `amount` and the others a part proportional to their
            // current reserve.
            let pool_weight = reserves
                .iter()
                .copied()
                .max()
                .filter(|weight| !weight.is_zero())
                .ok_or(Error::<T>::InsufficientLiquidity)?;
            let amounts_added = reserves
                .iter()
                .map(|&reserve| Self::mul_div_floor(amount, reserve, pool_weight))
                .collect::<Result<Vec<_>, _>>()?;
            let shares_minted = Self::mul_div_floor(amount, total_shares, pool_weight)?;
            ensure!(!shares_minted.is_zero(), Error::<T>::InvalidAmount);
            (amounts_added, shares_minted)
        };
        let send_back = amounts_added
            .iter()
            .map(|added| amount.checked_sub(added).ok_or_else(Self::overflow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FundingPlan { amounts_added, send_back, shares_minted })
    }

    fn calculate_defunding(
        reserves: &[BalanceOf<T>],
        total_shares: BalanceOf<T>,
        shares: BalanceOf<T>,
    ) -> Result<Vec<BalanceOf<T>>, DispatchError> {
        ensure!(!shares.is_zero(), Error::<T>::InvalidAmount);
        ensure!(shares <= total_shares, Error::<T>::InsufficientShares);
        reserves.iter().map(|&reserve| Self::mul_div_floor(reserve, shares, total_shares)).collect()
    }
}

mod detail {
    use sp_core::U256;
    use sp_runtime::Rounding;
    use zeitgeist_primitives::{
        constants::BASE,
        math::fixed::{checked_mul_div_u256, u256_to_u128},
    };

    /// Multiply `reserve * BASE` by `factor(r)` for every reserve `r` except the one at
    /// `outcome_index`, rounding each step up, and return the result divided by `BASE`, rounded
    /// up.
    fn ending_balance<F>(reserves: &[u128], outcome_index: usize, factor: F) -> Option<u128>
    where
        F: Fn(U256) -> Option<(U256, U256)>,
    {
        let base = U256::from(BASE);
        let reserve = *reserves.get(outcome_index)?;
        let mut ending = U256::from(reserve).checked_mul(base)?;
        for (_, &other) in reserves.iter().enumerate().filter(|(i, _)| *i != outcome_index) {
            let (numerator, denominator) = factor(other.into())?;
            ending = checked_mul_div_u256(ending, numerator, denominator, Rounding::Up).ok()?;
        }
        let ending = checked_mul_div_u256(ending, U256::one(), base, Rounding::Up).ok()?;
        u256_to_u128(ending).ok()
    }

    pub(super) fn calculate_buy_amount(
        reserves: &[u128],
        outcome_index: usize,
        amount_in_minus_fees: u128,
    ) -> Option<u128> {
        let amount = U256::from(amount_in_minus_fees);
        let ending =
            ending_balance(reserves, outcome_index, |r| Some((r, r.checked_add(amount)?)))?;
        reserves.get(outcome_index)?.checked_add(amount_in_minus_fees)?.checked_sub(ending)
    }

    pub(super) fn calculate_sell_amount(
        reserves: &[u128],
        outcome_index: usize,
        gross_amount: u128,
    ) -> Option<u128> {
        let amount = U256::from(gross_amount);
        let ending =
            ending_balance(reserves, outcome_index, |r| Some((r, r.checked_sub(amount)?)))?;
        gross_amount.checked_add(ending)?.checked_sub(*reserves.get(outcome_index)?)
    }
}

#[cfg(all(feature = "mock", test))]
mod tests {
    use super::*;
    use crate::mock::runtime::Runtime as MockRuntime;
    use alloc::vec;
    use more_asserts::{assert_ge, assert_le};
    use test_case::test_case;
    use zeitgeist_primitives::constants::{base_multiples::*, BASE, CENT};

    type MockBalance = BalanceOf<MockRuntime>;
    type MockMath = Math<MockRuntime>;

    const FEE: MockBalance = 3 * BASE / 1_000;

    fn quote(amount: MockBalance, fee: MockBalance) -> SwapQuote<MockBalance> {
        SwapQuote { amount, fee }
    }

    #[test_case(vec![_10, _10], 0, _1, 0, quote(1_909_090_909_090_909_090, 0))]
    #[test_case(vec![_10, _10], 0, _1, CENT, quote(1_890_818_926_296_633_303, CENT))]
    #[test_case(
        vec![_5, _10, _5, _5],
        1,
        _1,
        FEE,
        quote(5_201_273_719_612_626_408, FEE);
        "four outcomes"
    )]
    #[test_case(vec![_4, _8, _12], 2, _3, 2 * CENT, quote(9_882_284_085_580_768_035, 6 * CENT))]
    #[test_case(vec![1, 1], 0, 1, 0, quote(1, 0); "one unit")]
    #[test_case(vec![_1, _1], 0, 1, FEE, quote(0, 1); "fee eats everything")]
    fn calculate_buy_amount_works(
        reserves: Vec<MockBalance>,
        outcome_index: usize,
        investment_amount: MockBalance,
        swap_fee: MockBalance,
        expected: SwapQuote<MockBalance>,
    ) {
        assert_eq!(
            MockMath::calculate_buy_amount(&reserves, outcome_index, investment_amount, swap_fee),
            Ok(expected)
        );
    }

    #[test_case(vec![_10, _10], 0, _1, 0, quote(2_111_111_111_111_111_112, 0))]
    #[test_case(
        vec![_10, _10],
        0,
        _1,
        CENT,
        quote(2_133_696_515_718_987_632, 10_101_010_101_010_102)
    )]
    #[test_case(
        vec![_5, _10, _5, _5],
        1,
        _1_2,
        FEE,
        quote(4_232_693_540_779_737_062, 1_504_513_540_621_866);
        "four outcomes"
    )]
    #[test_case(
        vec![_4, _8, _12],
        0,
        _3,
        2 * CENT,
        quote(7_759_514_991_324_277_931, 61_224_489_795_918_368)
    )]
    fn calculate_sell_amount_works(
        reserves: Vec<MockBalance>,
        outcome_index: usize,
        return_amount: MockBalance,
        swap_fee: MockBalance,
        expected: SwapQuote<MockBalance>,
    ) {
        assert_eq!(
            MockMath::calculate_sell_amount(&reserves, outcome_index, return_amount, swap_fee),
            Ok(expected)
        );
    }

    #[test_case(vec![_10, _10], 0, Error::<MockRuntime>::InvalidAmount)]
    #[test_case(vec![_10, 0], _1, Error::<MockRuntime>::InsufficientLiquidity)]
    fn calculate_buy_amount_fails(
        reserves: Vec<MockBalance>,
        investment_amount: MockBalance,
        error: Error<MockRuntime>,
    ) {
        assert_eq!(
            MockMath::calculate_buy_amount(&reserves, 0, investment_amount, FEE),
            Err(error.into())
        );
    }

    #[test_case(vec![_10, _10], 0, Error::<MockRuntime>::InvalidAmount)]
    #[test_case(vec![0, _10], _1, Error::<MockRuntime>::InsufficientLiquidity)]
    #[test_case(vec![_10, _10], _10, Error::<MockRuntime>::ExcessiveReturnAmount)]
    #[test_case(vec![_10, _5], _5, Error::<MockRuntime>::ExcessiveReturnAmount; "exactly drained")]
    fn calculate_sell_amount_fails(
        reserves: Vec<MockBalance>,
        return_amount: MockBalance,
        error: Error<MockRuntime>,
    ) {
        assert_eq!(
            MockMath::calculate_sell_amount(&reserves, 0, return_amount, 0),
            Err(error.into())
        );
    }

    #[test]
    fn calculate_buy_amount_fails_on_overflow() {
        let reserves = vec![u128::MAX, u128::MAX];
        assert_eq!(
            MockMath::calculate_buy_amount(&reserves, 0, _1, 0),
            Err(Error::<MockRuntime>::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn calculate_buy_amount_rounds_in_favor_of_the_pool() {
        // Exact value is 1 + 10 - 100 / 11 = 1.90909...
        let quote = MockMath::calculate_buy_amount(&[_10, _10], 0, _1, 0).unwrap();
        assert_le!(quote.amount * 11, 21 * BASE);
        // Exact value is 1 - 10 + 100 / 9 = 2.1111...
        let quote = MockMath::calculate_sell_amount(&[_10, _10], 0, _1, 0).unwrap();
        assert_ge!(quote.amount * 9, 19 * BASE);
    }

    #[test]
    fn calculate_buy_amount_is_idempotent() {
        let reserves = vec![_5, _10, _5, _5];
        let first = MockMath::calculate_buy_amount(&reserves, 1, _1, FEE);
        let second = MockMath::calculate_buy_amount(&reserves, 1, _1, FEE);
        assert_eq!(first, second);
    }

    #[test_case(vec![], vec![_10, _10, _10, _10], vec![0, 0, 0, 0]; "uniform")]
    #[test_case(vec![1, 2, 1, 1], vec![_5, _10, _5, _5], vec![_5, 0, _5, _5]; "hinted")]
    #[test_case(
        vec![3, 1, 2, 3],
        vec![_10, _10 / 3, 2 * _10 / 3, _10],
        vec![0, _10 - _10 / 3, _10 - 2 * _10 / 3, 0];
        "rounded down"
    )]
    fn calculate_first_funding_works(
        distribution_hint: Vec<MockBalance>,
        amounts_added: Vec<MockBalance>,
        send_back: Vec<MockBalance>,
    ) {
        assert_eq!(
            MockMath::calculate_funding(&[0, 0, 0, 0], 0, _10, &distribution_hint),
            Ok(FundingPlan { amounts_added, send_back, shares_minted: _10 })
        );
    }

    #[test_case(vec![1, 2, 3], Error::<MockRuntime>::InvalidDistribution; "hint too short")]
    #[test_case(vec![0, 0, 0, 0], Error::<MockRuntime>::InvalidDistribution; "zero weights")]
    #[test_case(vec![1, 0, 1, 1], Error::<MockRuntime>::InvalidDistribution; "zero weight")]
    #[test_case(
        vec![1, 1, 1, BASE * BASE],
        Error::<MockRuntime>::InvalidDistribution;
        "weight rounds to zero"
    )]
    fn calculate_first_funding_fails(
        distribution_hint: Vec<MockBalance>,
        error: Error<MockRuntime>,
    ) {
        assert_eq!(
            MockMath::calculate_funding(&[0, 0, 0, 0], 0, _10, &distribution_hint),
            Err(error.into())
        );
    }

    #[test_case(vec![_5, _10, _5, _5], _10, _5, vec![_5 / 2, _5, _5 / 2, _5 / 2], _5)]
    #[test_case(
        vec![_3, _7, _11],
        _5,
        _1,
        vec![272_727_272_727_272_727, 636_363_636_363_636_363, _1],
        454_545_454_545_454_545
    )]
    fn calculate_subsequent_funding_works(
        reserves: Vec<MockBalance>,
        total_shares: MockBalance,
        amount: MockBalance,
        amounts_added: Vec<MockBalance>,
        shares_minted: MockBalance,
    ) {
        let send_back = amounts_added.iter().map(|a| amount - a).collect();
        assert_eq!(
            MockMath::calculate_funding(&reserves, total_shares, amount, &[]),
            Ok(FundingPlan { amounts_added, send_back, shares_minted })
        );
    }

    #[test]
    fn calculate_subsequent_funding_fails_on_hint() {
        assert_eq!(
            MockMath::calculate_funding(&[_1, _1], _1, _1, &[_1, _1]),
            Err(Error::<MockRuntime>::UnexpectedDistribution.into())
        );
    }

    #[test]
    fn calculate_funding_fails_on_zero_amount() {
        assert_eq!(
            MockMath::calculate_funding(&[0, 0], 0, 0, &[]),
            Err(Error::<MockRuntime>::InvalidAmount.into())
        );
    }

    #[test]
    fn calculate_subsequent_funding_fails_if_no_shares_are_minted() {
        assert_eq!(
            MockMath::calculate_funding(&[_10, _10], 1, 1, &[]),
            Err(Error::<MockRuntime>::InvalidAmount.into())
        );
    }

    #[test_case(vec![_5, _10, _5, _5], _10, _5, vec![_5 / 2, _5, _5 / 2, _5 / 2])]
    #[test_case(vec![7, 5, 3], 3, 2, vec![4, 3, 2]; "rounded down")]
    #[test_case(vec![_5, _10], _10, _10, vec![_5, _10]; "everything")]
    fn calculate_defunding_works(
        reserves: Vec<MockBalance>,
        total_shares: MockBalance,
        shares: MockBalance,
        expected: Vec<MockBalance>,
    ) {
        assert_eq!(MockMath::calculate_defunding(&reserves, total_shares, shares), Ok(expected));
    }

    #[test]
    fn calculate_defunding_fails_on_excessive_shares() {
        assert_eq!(
            MockMath::calculate_defunding(&[_1, _1], _1, _2),
            Err(Error::<MockRuntime>::InsufficientShares.into())
        );
    }
}
