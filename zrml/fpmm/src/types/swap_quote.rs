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

/// A trade quote. `amount` is the number of outcome tokens paid out (buy) or required (sell),
/// `fee` is the collateral retained for liquidity providers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapQuote<Balance> {
    pub amount: Balance,
    pub fee: Balance,
}
