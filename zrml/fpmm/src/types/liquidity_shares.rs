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

use crate::{traits::LiquiditySharesManager, BalanceOf, Config, Error, LOG_TARGET};
use frame_support::{
    ensure, pallet_prelude::RuntimeDebugNoBound, storage::bounded_btree_map::BoundedBTreeMap,
    CloneNoBound, PartialEqNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{Saturating, Zero},
    DispatchError, DispatchResult, RuntimeDebug,
};
use zeitgeist_primitives::math::{
    checked_ops_res::{CheckedAddRes, CheckedSubRes},
    fixed::FixedMulDiv,
};

/// Share balance of a liquidity provider together with the fees they either withdrew or were
/// credited with when they received their shares.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct LiquidityProvider<Balance> {
    pub shares: Balance,
    pub withdrawn_fees: Balance,
}

pub type LiquidityProviderOf<T> = LiquidityProvider<BalanceOf<T>>;

/// Ledger of liquidity shares and of the fee pool.
///
/// Fees are held in collateral. Every collected fee increases `fee_pool_weight`. A provider holding
/// `s` of `total_shares` shares is entitled to `fee_pool_weight * s / total_shares` minus their
/// `withdrawn_fees`. Minting shares credits the provider's `withdrawn_fees` (and the fee pool) with
/// the weight of the new shares, so fees collected before a provider joined are never diluted.
///
/// The following always holds: `total_withdrawn_fees` is the sum of all `withdrawn_fees` and
/// `fee_pool_weight - total_withdrawn_fees` is the amount of collateral held as fees.
#[derive(
    CloneNoBound,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct LiquidityShares<T: Config> {
    pub accounts: BoundedBTreeMap<T::AccountId, LiquidityProviderOf<T>, T::MaxLiquidityProviders>,
    pub total_shares: BalanceOf<T>,
    pub fee_pool_weight: BalanceOf<T>,
    pub total_withdrawn_fees: BalanceOf<T>,
}

impl<T: Config> LiquidityShares<T> {
    pub(crate) fn new() -> Self {
        LiquidityShares {
            accounts: BoundedBTreeMap::new(),
            total_shares: Zero::zero(),
            fee_pool_weight: Zero::zero(),
            total_withdrawn_fees: Zero::zero(),
        }
    }

    fn provider(&self, who: &T::AccountId) -> LiquidityProviderOf<T> {
        self.accounts.get(who).copied().unwrap_or_default()
    }

    /// Portion of the fee pool weight that belongs to `shares`, rounded down.
    fn weight_of(&self, shares: BalanceOf<T>) -> Result<BalanceOf<T>, DispatchError> {
        if self.total_shares.is_zero() {
            return Ok(Zero::zero());
        }
        self.fee_pool_weight.bmul_bdiv_floor(shares, self.total_shares)
    }

    fn set_provider(
        &mut self,
        who: &T::AccountId,
        provider: LiquidityProviderOf<T>,
    ) -> DispatchResult {
        if provider.shares.is_zero() {
            // Rounding dust left in `withdrawn_fees` is removed from the fee pool together with the
            // entry; `fee_pool_weight - total_withdrawn_fees` is unaffected.
            let dust = provider.withdrawn_fees;
            self.total_withdrawn_fees = self.total_withdrawn_fees.checked_sub_res(&dust)?;
            self.fee_pool_weight = self.fee_pool_weight.checked_sub_res(&dust)?;
            self.accounts.remove(who);
            return Ok(());
        }
        if let Some(entry) = self.accounts.get_mut(who) {
            *entry = provider;
            return Ok(());
        }
        self.accounts
            .try_insert(who.clone(), provider)
            .map_err(|_| Error::<T>::TooManyLiquidityProviders)?;
        Ok(())
    }
}

impl<T: Config> LiquiditySharesManager<T> for LiquidityShares<T> {
    fn join(&mut self, who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        let weight = if self.total_shares.is_zero() {
            amount
        } else {
            self.fee_pool_weight.bmul_bdiv_floor(amount, self.total_shares)?
        };
        let mut provider = self.provider(who);
        provider.shares = provider.shares.checked_add_res(&amount)?;
        provider.withdrawn_fees = provider.withdrawn_fees.checked_add_res(&weight)?;
        self.set_provider(who, provider)?;
        self.fee_pool_weight = self.fee_pool_weight.checked_add_res(&weight)?;
        self.total_withdrawn_fees = self.total_withdrawn_fees.checked_add_res(&weight)?;
        self.total_shares = self.total_shares.checked_add_res(&amount)?;
        Ok(())
    }

    fn exit(
        &mut self,
        who: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        ensure!(self.provider(who).shares >= amount, Error::<T>::InsufficientShares);
        let fees = self.withdraw_fees(who)?;
        let mut provider = self.provider(who);
        let weight = self.weight_of(amount)?.min(provider.withdrawn_fees);
        provider.shares = provider.shares.checked_sub_res(&amount)?;
        provider.withdrawn_fees = provider.withdrawn_fees.checked_sub_res(&weight)?;
        self.total_withdrawn_fees = self.total_withdrawn_fees.checked_sub_res(&weight)?;
        self.fee_pool_weight = self.fee_pool_weight.checked_sub_res(&weight)?;
        self.total_shares = self.total_shares.checked_sub_res(&amount)?;
        self.set_provider(who, provider)?;
        Ok(fees)
    }

    fn split(
        &mut self,
        sender: &T::AccountId,
        receiver: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        ensure!(self.provider(sender).shares >= amount, Error::<T>::InsufficientShares);
        let fees = self.withdraw_fees(sender)?;
        if sender == receiver {
            return Ok(fees);
        }
        let mut from = self.provider(sender);
        let weight = self.weight_of(amount)?.min(from.withdrawn_fees);
        from.shares = from.shares.checked_sub_res(&amount)?;
        from.withdrawn_fees = from.withdrawn_fees.checked_sub_res(&weight)?;
        self.set_provider(sender, from)?;
        let mut to = self.provider(receiver);
        to.shares = to.shares.checked_add_res(&amount)?;
        to.withdrawn_fees = to.withdrawn_fees.checked_add_res(&weight)?;
        self.set_provider(receiver, to)?;
        Ok(fees)
    }

    fn deposit_fees(&mut self, amount: BalanceOf<T>) -> DispatchResult {
        self.fee_pool_weight = self.fee_pool_weight.checked_add_res(&amount)?;
        Ok(())
    }

    fn withdraw_fees(&mut self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError> {
        let Some(mut provider) = self.accounts.get(who).copied() else {
            return Ok(Zero::zero());
        };
        let entitlement = self.weight_of(provider.shares)?;
        if entitlement < provider.withdrawn_fees {
            log::warn!(
                target: LOG_TARGET,
                "Fee entitlement {:?} of {:?} is below their withdrawn fees {:?}",
                entitlement,
                who,
                provider.withdrawn_fees,
            );
        }
        let amount =
            entitlement.saturating_sub(provider.withdrawn_fees).min(self.collected_fees()?);
        if amount.is_zero() {
            return Ok(amount);
        }
        provider.withdrawn_fees = provider.withdrawn_fees.checked_add_res(&amount)?;
        self.total_withdrawn_fees = self.total_withdrawn_fees.checked_add_res(&amount)?;
        self.set_provider(who, provider)?;
        Ok(amount)
    }

    fn fees_withdrawable_by(&self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError> {
        let provider = self.provider(who);
        let entitlement = self.weight_of(provider.shares)?;
        Ok(entitlement.saturating_sub(provider.withdrawn_fees).min(self.collected_fees()?))
    }

    fn collected_fees(&self) -> Result<BalanceOf<T>, DispatchError> {
        self.fee_pool_weight.checked_sub_res(&self.total_withdrawn_fees)
    }

    fn shares_of(&self, who: &T::AccountId) -> BalanceOf<T> {
        self.provider(who).shares
    }

    fn total_shares(&self) -> BalanceOf<T> {
        self.total_shares
    }
}

#[cfg(all(feature = "mock", test))]
mod tests {
    use super::*;
    use crate::mock::{
        consts::{ALICE, BOB, CHARLIE},
        runtime::Runtime,
    };
    use frame_support::traits::Get;
    use zeitgeist_primitives::constants::base_multiples::*;

    type Shares = LiquidityShares<Runtime>;

    fn fund(shares: &mut Shares, who: u128, amount: u128) {
        assert_eq!(shares.join(&who, amount), Ok(()));
    }

    #[test]
    fn first_join_credits_the_full_amount() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        assert_eq!(shares.shares_of(&ALICE), _10);
        assert_eq!(shares.total_shares(), _10);
        assert_eq!(shares.fee_pool_weight, _10);
        assert_eq!(shares.total_withdrawn_fees, _10);
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(0));
        assert_eq!(shares.collected_fees(), Ok(0));
    }

    #[test]
    fn fees_are_distributed_pro_rata() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        fund(&mut shares, BOB, _30);
        assert_eq!(shares.deposit_fees(_4), Ok(()));
        assert_eq!(shares.collected_fees(), Ok(_4));
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(_1));
        assert_eq!(shares.fees_withdrawable_by(&BOB), Ok(_3));
        assert_eq!(shares.withdraw_fees(&BOB), Ok(_3));
        assert_eq!(shares.withdraw_fees(&BOB), Ok(0));
        assert_eq!(shares.collected_fees(), Ok(_1));
        assert_eq!(shares.withdraw_fees(&ALICE), Ok(_1));
        assert_eq!(shares.collected_fees(), Ok(0));
    }

    #[test]
    fn late_provider_does_not_receive_earlier_fees() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        assert_eq!(shares.deposit_fees(_2), Ok(()));
        fund(&mut shares, BOB, _10);
        assert_eq!(shares.fee_pool_weight, _20 + _4);
        assert_eq!(shares.total_withdrawn_fees, _20 + _2);
        assert_eq!(shares.fees_withdrawable_by(&BOB), Ok(0));
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(_2));
        assert_eq!(shares.deposit_fees(_2), Ok(()));
        assert_eq!(shares.fees_withdrawable_by(&BOB), Ok(_1));
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(_3));
    }

    #[test]
    fn exit_pays_out_fees_before_burning() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        assert_eq!(shares.deposit_fees(_1), Ok(()));
        assert_eq!(shares.exit(&ALICE, _5), Ok(_1));
        assert_eq!(shares.shares_of(&ALICE), _5);
        assert_eq!(shares.total_shares(), _5);
        assert_eq!(shares.fee_pool_weight, _5 + _1_2);
        assert_eq!(shares.total_withdrawn_fees, _5 + _1_2);
        assert_eq!(shares.collected_fees(), Ok(0));
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(0));
    }

    #[test]
    fn exit_of_all_shares_removes_the_provider() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        fund(&mut shares, BOB, _5);
        assert_eq!(shares.exit(&ALICE, _10), Ok(0));
        assert!(!shares.accounts.contains_key(&ALICE));
        assert_eq!(shares.total_shares(), _5);
        assert_eq!(shares.fee_pool_weight, _5);
        assert_eq!(shares.total_withdrawn_fees, _5);
    }

    #[test]
    fn exit_fails_on_insufficient_shares() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        assert_eq!(shares.exit(&ALICE, _10 + 1), Err(Error::<Runtime>::InsufficientShares.into()));
        assert_eq!(shares.exit(&BOB, 1), Err(Error::<Runtime>::InsufficientShares.into()));
    }

    #[test]
    fn split_moves_shares_and_fee_weight() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _10);
        assert_eq!(shares.deposit_fees(_2), Ok(()));
        assert_eq!(shares.split(&ALICE, &BOB, _4), Ok(_2));
        assert_eq!(shares.shares_of(&ALICE), _6);
        assert_eq!(shares.shares_of(&BOB), _4);
        assert_eq!(shares.total_shares(), _10);
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(0));
        assert_eq!(shares.fees_withdrawable_by(&BOB), Ok(0));
        assert_eq!(shares.deposit_fees(_1), Ok(()));
        assert_eq!(shares.fees_withdrawable_by(&ALICE), Ok(6 * _1 / 10));
        assert_eq!(shares.fees_withdrawable_by(&BOB), Ok(4 * _1 / 10));
    }

    #[test]
    fn split_fails_on_insufficient_shares() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _1);
        assert_eq!(
            shares.split(&ALICE, &BOB, _2),
            Err(Error::<Runtime>::InsufficientShares.into())
        );
    }

    #[test]
    fn split_to_self_is_a_noop() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _3);
        let before = shares.clone();
        assert_eq!(shares.split(&ALICE, &ALICE, _3), Ok(0));
        assert_eq!(shares, before);
    }

    #[test]
    fn withdraw_fees_of_unknown_account_returns_zero() {
        let mut shares = Shares::new();
        fund(&mut shares, ALICE, _1);
        assert_eq!(shares.deposit_fees(_1), Ok(()));
        assert_eq!(shares.withdraw_fees(&CHARLIE), Ok(0));
        assert_eq!(shares.collected_fees(), Ok(_1));
    }

    #[test]
    fn join_fails_if_there_are_too_many_providers() {
        let mut shares = Shares::new();
        let max: u32 = <Runtime as Config>::MaxLiquidityProviders::get();
        for who in 0..max as u128 {
            fund(&mut shares, who, _1);
        }
        assert_eq!(
            shares.join(&(max as u128), _1),
            Err(Error::<Runtime>::TooManyLiquidityProviders.into())
        );
        assert_eq!(shares.total_shares(), max as u128 * _1);
        // Existing providers can still add shares.
        fund(&mut shares, ALICE, _1);
    }
}
