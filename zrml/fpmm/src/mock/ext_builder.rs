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

use crate::mock::{
    consts::{ALICE, BOB, CHARLIE},
    runtime::{Runtime, System},
    types::MockConditionalTokens,
};
use sp_runtime::BuildStorage;
use zeitgeist_primitives::constants::base_multiples::*;

pub struct ExtBuilder;

impl ExtBuilder {
    pub fn build() -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> {
            balances: vec![(ALICE, _100), (BOB, _100), (CHARLIE, _100)],
        }
        .assimilate_storage(&mut t)
        .unwrap();

        MockConditionalTokens::reset();

        let mut test_ext: sp_io::TestExternalities = t.into();

        test_ext.execute_with(|| System::set_block_number(1));

        test_ext
    }
}
