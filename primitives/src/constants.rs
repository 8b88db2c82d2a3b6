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

#[cfg(feature = "mock")]
pub mod mock;
pub mod base_multiples;

use crate::types::Balance;

/// One unit of any fixed-point quantity: balances, prices and fee rates all use 18 decimals.
pub const BASE: u128 = 1_000_000_000_000_000_000;
pub const CENT: Balance = BASE / 100; // 10_000_000_000_000_000
