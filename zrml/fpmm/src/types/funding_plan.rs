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

use alloc::vec::Vec;

/// The outcome of a funding calculation. The liquidity manager performs the transfers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingPlan<Balance> {
    /// Amount of each outcome retained in the pool, indexed by outcome.
    pub amounts_added: Vec<Balance>,
    /// Amount of each outcome returned to the funder, indexed by outcome.
    pub send_back: Vec<Balance>,
    pub shares_minted: Balance,
}
