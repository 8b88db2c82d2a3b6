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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Asset, Balance, CurrencyId};
use frame_support::{parameter_types, PalletId};
use orml_traits::parameter_type_with_key;

// Fixed product market maker
parameter_types! {
    pub const FpmmPalletId: PalletId = PalletId(*b"zge/fpmm");
    pub const MaxConditions: u32 = 3;
    pub const MaxLiquidityProviders: u32 = 64;
    pub const MaxOutcomes: u32 = 16;
    pub const MaxSwapFee: Balance = BASE / 10; // 10%
}

// Outcome-token ledger
parameter_types! {
    pub const ConditionalTokensPalletId: PalletId = PalletId(*b"zge/ctkn");
}

// Shared within tests
// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// ORML
parameter_types! {
    pub const GetNativeCurrencyId: CurrencyId = Asset::Ztg;
}

parameter_type_with_key! {
    // Only the native token is subject to an existential deposit.
    pub ExistentialDeposits: |currency_id: CurrencyId| -> Balance {
        match currency_id {
            Asset::Ztg => ExistentialDeposit::get(),
            _ => 0
        }
    };
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}
