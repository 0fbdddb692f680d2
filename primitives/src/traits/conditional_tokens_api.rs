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
use sp_runtime::{DispatchError, DispatchResult};

/// The ledger of conditional tokens which the market maker trades against.
///
/// Partitions are lists of index sets, each index set marking the outcomes of the condition it
/// contains. The root collection is denoted by `ROOT_COLLECTION_ID`; splitting it consumes
/// collateral, merging into it releases collateral.
pub trait ConditionalTokensApi {
    type AccountId;
    type Asset;
    type Balance;
    type CombinatorialId;

    /// Register a condition with `outcome_slot_count` outcomes which `oracle` will report on.
    fn prepare_condition(
        oracle: Self::AccountId,
        question_id: Self::CombinatorialId,
        outcome_slot_count: u16,
    ) -> Result<Self::CombinatorialId, DispatchError>;

    /// Returns `None` if the condition wasn't prepared.
    fn outcome_slot_count(condition_id: Self::CombinatorialId) -> Option<u16>;

    /// Sum of the payout numerators of the condition; zero if the condition isn't resolved.
    fn payout_denominator(condition_id: Self::CombinatorialId) -> Self::Balance;

    fn split_position(
        who: &Self::AccountId,
        collateral: Self::Asset,
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        partition: Vec<Vec<bool>>,
        amount: Self::Balance,
    ) -> DispatchResult;

    fn merge_positions(
        who: &Self::AccountId,
        collateral: Self::Asset,
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        partition: Vec<Vec<bool>>,
        amount: Self::Balance,
    ) -> DispatchResult;

    /// Balances of `who` for each of `position_ids`, in the same order.
    fn balance_of_batch(
        who: &Self::AccountId,
        position_ids: &[Self::CombinatorialId],
    ) -> Vec<Self::Balance>;

    fn transfer_position(
        position_id: Self::CombinatorialId,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;
}
