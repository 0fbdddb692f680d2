// Copyright 2024-2025 Forecasting Technologies LTD.
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

use crate::types::CombinatorialId;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The `Asset` enum represents all types of assets which the market maker can hold.
///
/// Collateral is either the native currency or a foreign asset. Conditional tokens are identified
/// by their position ID and live in the same multi-currency ledger as the collateral.
///
/// Beware! The SCALE encoding of this type is used to derive position IDs. Reordering the variants
/// changes every position ID.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Debug, Decode, Default, Eq, Encode, MaxEncodedLen, Ord, PartialEq, PartialOrd,
    TypeInfo,
)]
pub enum Asset {
    #[default]
    Native,
    ForeignAsset(u32),
    ConditionalToken(CombinatorialId),
}

impl Asset {
    /// Returns `true` if the asset can serve as collateral of a market.
    pub fn is_collateral(&self) -> bool {
        !self.is_conditional_token()
    }

    pub fn is_conditional_token(&self) -> bool {
        matches!(self, Asset::ConditionalToken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Asset::Native, true)]
    #[test_case(Asset::ForeignAsset(0), true)]
    #[test_case(Asset::ForeignAsset(u32::MAX), true)]
    #[test_case(Asset::ConditionalToken([0; 32]), false)]
    #[test_case(Asset::ConditionalToken([7; 32]), false)]
    fn is_collateral_works(asset: Asset, expected: bool) {
        assert_eq!(asset.is_collateral(), expected);
        assert_eq!(asset.is_conditional_token(), !expected);
    }
}
