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

//! Placeholder weights for zrml_fpmm. The ledger operations dominate, so the outcome-dependent
//! weights scale with the number of positions `o` and the condition-dependent ones with the
//! number of conditions `c`.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(clippy::unnecessary_cast)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn deploy_market() -> Weight;
    fn initialize(c: u32, o: u32) -> Weight;
    fn create_market(c: u32, o: u32) -> Weight;
    fn buy(o: u32) -> Weight;
    fn sell(o: u32) -> Weight;
    fn add_funding(o: u32) -> Weight;
    fn remove_funding() -> Weight;
    fn redeem_fees(c: u32) -> Weight;
}

pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `Fpmm::Deployments` (r:1 w:1)
    fn deploy_market() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Fpmm::Deployments` (r:1 w:0)
    /// Storage: `Fpmm::Markets` (r:1 w:1)
    /// Storage: `ConditionalTokens` (r:c w:0)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    fn initialize(c: u32, o: u32) -> Weight {
        Weight::from_parts(40_000_000, 6_000)
            .saturating_add(Weight::from_parts(2_000_000, 2_500).saturating_mul(c.into()))
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(c.into())))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn create_market(c: u32, o: u32) -> Weight {
        Self::deploy_market()
            .saturating_add(Self::initialize(c, o))
            .saturating_add(Self::add_funding(o))
    }
    /// Storage: `Fpmm::Markets` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:o+2 w:o+2)
    fn buy(o: u32) -> Weight {
        Weight::from_parts(60_000_000, 7_000)
            .saturating_add(Weight::from_parts(25_000_000, 2_600).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(o.into())))
            .saturating_add(T::DbWeight::get().writes(3_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(o.into())))
    }
    /// Storage: `Fpmm::Markets` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:o+2 w:o+2)
    fn sell(o: u32) -> Weight {
        Weight::from_parts(62_000_000, 7_000)
            .saturating_add(Weight::from_parts(25_000_000, 2_600).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(o.into())))
            .saturating_add(T::DbWeight::get().writes(3_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(o.into())))
    }
    /// Storage: `Fpmm::Markets` (r:1 w:1)
    /// Storage: `Fpmm::LiquidityShares` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:o+2 w:o+2)
    fn add_funding(o: u32) -> Weight {
        Weight::from_parts(50_000_000, 7_000)
            .saturating_add(Weight::from_parts(20_000_000, 2_600).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(o.into())))
            .saturating_add(T::DbWeight::get().writes(4_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(o.into())))
    }
    fn remove_funding() -> Weight {
        Weight::from_parts(5_000_000, 0)
    }
    /// Storage: `Fpmm::Markets` (r:1 w:1)
    /// Storage: `Fpmm::LiquidityShares` (r:1 w:1)
    /// Storage: `ConditionalTokens` (r:c w:0)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    fn redeem_fees(c: u32) -> Weight {
        Weight::from_parts(45_000_000, 8_000)
            .saturating_add(Weight::from_parts(2_000_000, 2_500).saturating_mul(c.into()))
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(c.into())))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
}
