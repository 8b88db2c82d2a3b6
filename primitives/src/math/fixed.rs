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

//! Fixed-point helpers for balances scaled by [`BASE`].
//!
//! Each operation rounds in a fixed direction, named by its suffix. Intermediate products are
//! computed with 256 bits, so `x * y` never overflows before the division brings the result back
//! into range.

use crate::constants::BASE;
use core::marker::PhantomData;
use sp_arithmetic::{traits::AtLeast32BitUnsigned, ArithmeticError, Rounding};
use sp_core::U256;
use sp_runtime::DispatchError;

pub trait BaseProvider<T> {
    fn get() -> Result<T, DispatchError>;
}

pub struct ZeitgeistBase<T>(PhantomData<T>);

// Used to avoid saturating operations.
impl<T> BaseProvider<T> for ZeitgeistBase<T>
where
    T: AtLeast32BitUnsigned,
{
    fn get() -> Result<T, DispatchError> {
        BASE.try_into()
            .map_err(|_| DispatchError::Other("ZeitgeistBase failed to convert BASE to Balance"))
    }
}

/// Calculate `x * numerator / denominator` with a 256 bit intermediate result, rounded as
/// specified by `rounding`. Only `Rounding::Down` and `Rounding::Up` are supported.
pub fn checked_mul_div_u256(
    x: U256,
    numerator: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, DispatchError> {
    if denominator.is_zero() {
        return Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero));
    }
    let product =
        x.checked_mul(numerator).ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))?;
    let quotient = product / denominator;
    let remainder = product % denominator;
    match rounding {
        Rounding::Down => Ok(quotient),
        Rounding::Up if remainder.is_zero() => Ok(quotient),
        Rounding::Up => quotient
            .checked_add(U256::one())
            .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow)),
        _ => Err(DispatchError::Other("unsupported rounding mode")),
    }
}

/// Narrow a 256 bit value to `u128`, failing with `Overflow` if it doesn't fit.
pub fn u256_to_u128(value: U256) -> Result<u128, DispatchError> {
    if value > U256::from(u128::MAX) {
        return Err(DispatchError::Arithmetic(ArithmeticError::Overflow));
    }
    Ok(value.low_u128())
}

fn checked_mul_div<T>(
    x: T,
    numerator: T,
    denominator: T,
    rounding: Rounding,
) -> Result<T, DispatchError>
where
    T: AtLeast32BitUnsigned + Copy,
{
    let to_u256 = |value: T| -> Result<U256, DispatchError> {
        let value: u128 =
            value.try_into().map_err(|_| DispatchError::Arithmetic(ArithmeticError::Overflow))?;
        Ok(U256::from(value))
    };
    let result =
        checked_mul_div_u256(to_u256(x)?, to_u256(numerator)?, to_u256(denominator)?, rounding)?;
    u256_to_u128(result)?
        .try_into()
        .map_err(|_| DispatchError::Arithmetic(ArithmeticError::Overflow))
}

pub trait FixedMul
where
    Self: Sized,
{
    /// Calculate the fixed-point product `self * other`, rounded up.
    fn bmul_ceil(&self, other: Self) -> Result<Self, DispatchError>;
}

pub trait FixedDiv
where
    Self: Sized,
{
    /// Calculate the fixed-point quotient `self / other`, rounded up.
    fn bdiv_ceil(&self, other: Self) -> Result<Self, DispatchError>;
}

/// Helper trait for computing `self * multiplier / divisor` without losing precision to an
/// intermediate rounding step.
pub trait FixedMulDiv
where
    Self: Sized,
{
    fn bmul_bdiv_floor(&self, multiplier: Self, divisor: Self) -> Result<Self, DispatchError>;
}

impl<T> FixedMul for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn bmul_ceil(&self, other: Self) -> Result<Self, DispatchError> {
        checked_mul_div(*self, other, ZeitgeistBase::get()?, Rounding::Up)
    }
}

impl<T> FixedDiv for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn bdiv_ceil(&self, other: Self) -> Result<Self, DispatchError> {
        checked_mul_div(*self, ZeitgeistBase::get()?, other, Rounding::Up)
    }
}

impl<T> FixedMulDiv for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn bmul_bdiv_floor(&self, multiplier: Self, divisor: Self) -> Result<Self, DispatchError> {
        checked_mul_div(*self, multiplier, divisor, Rounding::Down)
    }
}
