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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Asset, Balance};
use frame_support::{parameter_types, PalletId};
use orml_traits::parameter_type_with_key;

// Fixed-product market maker parameters
parameter_types! {
    pub const FpmmPalletId: PalletId = FPMM_PALLET_ID;
    pub const MaxConditions: u32 = 4;
    pub const MaxFee: Balance = BASE / 10; // 10%
    pub const MaxOutcomes: u32 = 64;
}

// Conditional tokens parameters
parameter_types! {
    pub const ConditionalTokensPalletId: PalletId = PalletId(*b"zge/cotk");
}

// ORML
parameter_types! {
    pub const GetNativeCurrencyId: Asset = Asset::Native;
}

parameter_type_with_key! {
    pub ExistentialDeposits: |currency_id: Asset| -> Balance {
        match currency_id {
            Asset::Native => ExistentialDeposit::get(),
            _ => 0,
        }
    };
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}

// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}
