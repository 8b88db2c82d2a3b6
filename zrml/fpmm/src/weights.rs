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

use core::marker::PhantomData;
use frame_support::weights::Weight;

pub trait WeightInfoZeitgeist {
    fn create_pool(n: u32) -> Weight;
    fn add_funding(n: u32) -> Weight;
    fn remove_funding(n: u32) -> Weight;
    fn buy(n: u32) -> Weight;
    fn sell(n: u32) -> Weight;
    fn withdraw_fees() -> Weight;
    fn transfer_shares() -> Weight;
}

/// Placeholder weights, linear in the number of outcomes `n`, until benchmarks are run on
/// reference hardware.
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    fn create_pool(n: u32) -> Weight {
        Weight::from_parts(40_000_000, 4_000)
            .saturating_add(Weight::from_parts(5_000_000, 0).saturating_mul(n.into()))
    }
    fn add_funding(n: u32) -> Weight {
        Weight::from_parts(60_000_000, 6_000)
            .saturating_add(Weight::from_parts(20_000_000, 2_600).saturating_mul(n.into()))
    }
    fn remove_funding(n: u32) -> Weight {
        Weight::from_parts(60_000_000, 6_000)
            .saturating_add(Weight::from_parts(12_000_000, 2_600).saturating_mul(n.into()))
    }
    fn buy(n: u32) -> Weight {
        Weight::from_parts(60_000_000, 6_000)
            .saturating_add(Weight::from_parts(15_000_000, 2_600).saturating_mul(n.into()))
    }
    fn sell(n: u32) -> Weight {
        Weight::from_parts(60_000_000, 6_000)
            .saturating_add(Weight::from_parts(15_000_000, 2_600).saturating_mul(n.into()))
    }
    fn withdraw_fees() -> Weight {
        Weight::from_parts(45_000_000, 6_000)
    }
    fn transfer_shares() -> Weight {
        Weight::from_parts(50_000_000, 6_000)
    }
}
