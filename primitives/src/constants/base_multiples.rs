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

use crate::constants::BASE;

pub const _1: u128 = BASE;
pub const _2: u128 = 2 * _1;
pub const _3: u128 = 3 * _1;
pub const _4: u128 = 4 * _1;
pub const _5: u128 = 5 * _1;
pub const _6: u128 = 6 * _1;
pub const _7: u128 = 7 * _1;
pub const _8: u128 = 8 * _1;
pub const _9: u128 = 9 * _1;
pub const _10: u128 = 10 * _1;
pub const _11: u128 = 11 * _1;
pub const _12: u128 = 12 * _1;
pub const _15: u128 = 15 * _1;
pub const _20: u128 = 20 * _1;
pub const _25: u128 = 25 * _1;
pub const _30: u128 = 30 * _1;
pub const _50: u128 = 50 * _1;
pub const _100: u128 = 100 * _1;
pub const _1000: u128 = 1_000 * _1;
pub const _1000000: u128 = 1_000_000 * _1;

pub const _1_2: u128 = _1 / 2;

pub const _1_3: u128 = _1 / 3;
pub const _2_3: u128 = _2 / 3;

pub const _1_4: u128 = _1 / 4;
pub const _3_4: u128 = _3 / 4;

pub const _1_5: u128 = _1 / 5;

pub const _1_10: u128 = _1 / 10;
pub const _3_10: u128 = _3 / 10;
pub const _9_10: u128 = _9 / 10;

pub const _1_100: u128 = _1 / 100;
pub const _3_1000: u128 = _3 / 1000;
