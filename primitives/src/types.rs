// Copyright 2023-2025 Forecasting Technologies LTD.
// Copyright 2021-2022 Zeitgeist PM LLC.
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

pub use crate::asset::*;

/// Signed version of Balance
pub type Amount = i128;

/// Balance of an account.
pub type Balance = u128;

/// An index to a block.
pub type BlockNumber = u64;

pub type BasicCurrencyAdapter<R, B> =
    orml_currencies::BasicCurrencyAdapter<R, B, Amount, Balance>;

/// Identifier of a condition prepared on the outcome-token ledger.
pub type ConditionId = sp_core::H256;

pub type CurrencyId = Asset;

/// The index of an outcome slot within a single condition.
pub type OutcomeIndex = u16;

/// The identifier of a collateral-backed outcome position.
pub type PositionId = sp_core::H256;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// Pool identifier.
pub type PoolId = u128;

// Tests

pub type AccountIdTest = u128;
