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

use alloc::vec::Vec;

/// Handles calculations of condition, collection and position IDs.
///
/// Any ledger which holds the positions of a market must derive IDs the same way, otherwise the
/// market maker will look for its pool under the wrong positions.
pub trait CombinatorialIdManager {
    type AccountId;
    type Asset;
    type CombinatorialId;

    /// Calculate the ID of the condition `oracle` prepares for `question_id` with
    /// `outcome_slot_count` outcomes.
    fn get_condition_id(
        oracle: &Self::AccountId,
        question_id: Self::CombinatorialId,
        outcome_slot_count: u16,
    ) -> Self::CombinatorialId;

    /// Calculate the collection ID obtained when splitting `parent_collection_id` over the
    /// condition given by `condition_id` and the `index_set`.
    fn get_collection_id(
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        index_set: Vec<bool>,
    ) -> Self::CombinatorialId;

    /// Calculate the position ID belonging to the `collection_id` combined with `collateral` as
    /// collateral.
    fn get_position_id(
        collateral: Self::Asset,
        collection_id: Self::CombinatorialId,
    ) -> Self::CombinatorialId;
}
