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

use crate::types::Asset;

/// Signed counter-part of Balance
pub type Amount = i128;

/// Balance of an account.
pub type Balance = u128;

/// ORML adapter
pub type BasicCurrencyAdapter<R, B> = orml_currencies::BasicCurrencyAdapter<R, B, Amount, Balance>;

/// An identifier of a condition, a collection of outcomes or a position.
pub type CombinatorialId = [u8; 32];

pub type CurrencyId = Asset;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// The market identifier type. Doubles as the salt which the market's account is derived from.
pub type MarketId = u128;

/// The account identifier used in tests and the mock runtime.
pub type AccountIdTest = u128;

/// The collection ID of the empty collection. Splitting collateral uses this as parent.
pub const ROOT_COLLECTION_ID: CombinatorialId = [0u8; 32];
