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

use crate::{BalanceOf, Config};
use sp_runtime::{DispatchError, DispatchResult};

/// Trait for managing liquidity shares and distributing fees to liquidity providers according to
/// their share of the total issuance at the time the fees were collected.
pub trait LiquiditySharesManager<T: Config> {
    /// Mint `amount` shares to `who`. Fees collected before the mint are not attributed to the new
    /// shares.
    fn join(&mut self, who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult;

    /// Burn `amount` shares of `who` after withdrawing their fees. Returns the amount of fees
    /// withdrawn.
    fn exit(
        &mut self,
        who: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Transfer `amount` shares from `sender` to `receiver` after withdrawing the fees of `sender`.
    /// Returns the amount of fees withdrawn.
    fn split(
        &mut self,
        sender: &T::AccountId,
        receiver: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Attribute `amount` units of collected fees to the current shareholders.
    fn deposit_fees(&mut self, amount: BalanceOf<T>) -> DispatchResult;

    /// Withdraw and return the fees belonging to `who`.
    fn withdraw_fees(&mut self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the fees `who` could withdraw right now.
    fn fees_withdrawable_by(&self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the amount of fees collected and not yet withdrawn.
    fn collected_fees(&self) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the shares of `who`, zero if `who` is not a liquidity provider.
    fn shares_of(&self, who: &T::AccountId) -> BalanceOf<T>;

    fn total_shares(&self) -> BalanceOf<T>;
}
