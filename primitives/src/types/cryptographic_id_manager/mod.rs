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

//! Derives IDs by hashing the big-endian encodings of their constituents with `Hasher`.
//!
//! Unlike elliptic curve based schemes, the collection IDs produced here depend on the order in
//! which conditions are split. The market maker and the ledger always split in the same order, so
//! this doesn't cause positions to diverge.

mod hash_tuple;

pub use hash_tuple::{HashTuple, ToBytes};

use crate::{
    traits::CombinatorialIdManager,
    types::{Asset, CombinatorialId},
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use parity_scale_codec::Encode;

pub struct CryptographicIdManager<AccountId, Hasher>(PhantomData<(AccountId, Hasher)>);

impl<AccountId, Hasher> CombinatorialIdManager for CryptographicIdManager<AccountId, Hasher>
where
    AccountId: Encode,
    Hasher: HashTuple,
{
    type AccountId = AccountId;
    type Asset = Asset;
    type CombinatorialId = CombinatorialId;

    fn get_condition_id(
        oracle: &Self::AccountId,
        question_id: Self::CombinatorialId,
        outcome_slot_count: u16,
    ) -> Self::CombinatorialId {
        let input = ((oracle.encode(), question_id), outcome_slot_count);
        Hasher::hash_tuple(input)
    }

    fn get_collection_id(
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        index_set: Vec<bool>,
    ) -> Self::CombinatorialId {
        let input = (parent_collection_id, (condition_id, index_set));
        Hasher::hash_tuple(input)
    }

    fn get_position_id(
        collateral: Self::Asset,
        collection_id: Self::CombinatorialId,
    ) -> Self::CombinatorialId {
        let input = (collateral, collection_id);
        Hasher::hash_tuple(input)
    }
}
