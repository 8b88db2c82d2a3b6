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

use crate::types::PositionId;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The `Asset` enum represents all currencies the market maker moves around.
///
/// Collateral is either the native token or a foreign asset. Outcome positions are minted by
/// the outcome-token ledger and are identified by a hash of the collateral and the outcome
/// collection they represent, so positions backed by different collateral never collide.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone,
    Copy,
    Debug,
    Decode,
    Default,
    Eq,
    Encode,
    MaxEncodedLen,
    Ord,
    PartialEq,
    PartialOrd,
    TypeInfo,
)]
pub enum Asset {
    #[codec(index = 0)]
    #[default]
    Ztg,

    #[codec(index = 1)]
    ForeignAsset(u32),

    #[codec(index = 2)]
    Position(PositionId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::H256;

    #[test]
    fn codec_indices_are_stable() {
        assert_eq!(Asset::Ztg.encode(), vec![0]);
        assert_eq!(Asset::ForeignAsset(1).encode(), vec![1, 1, 0, 0, 0]);
        let position = Asset::Position(H256::zero());
        let encoded = position.encode();
        assert_eq!(encoded[0], 2);
        assert_eq!(Asset::decode(&mut &encoded[..]).unwrap(), position);
    }
}
