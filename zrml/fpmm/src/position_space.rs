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

//! Enumeration of the positions spanned by a list of conditions.
//!
//! For conditions `c_0, ..., c_{n-1}` with slot counts `s_0, ..., s_{n-1}`, the positions are
//! ordered so that the outcome tuple `(i_0, ..., i_{n-1})` lives at index
//! `i_0 + s_0 * (i_1 + s_1 * (i_2 + ...))`, i.e. the first condition varies fastest. The
//! collections are built by splitting the root collection over the last condition first.

use crate::types::Condition;
use alloc::{vec, vec::Vec};
use fpmm_primitives::{
    traits::CombinatorialIdManager,
    types::{Asset, CombinatorialId, ROOT_COLLECTION_ID},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionSpaceError {
    /// The number of derived positions differs from the product of the slot counts.
    PositionCountMismatch,
    /// The product of the slot counts doesn't fit into `usize`.
    TooManyOutcomes,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionSpace {
    /// `collection_ids[k]` contains the parent collections which are split over condition `k`
    /// when buying complete sets.
    pub collection_ids: Vec<Vec<CombinatorialId>>,
    pub position_ids: Vec<CombinatorialId>,
}

impl PositionSpace {
    pub fn build<M>(collateral: Asset, conditions: &[Condition]) -> Result<Self, PositionSpaceError>
    where
        M: CombinatorialIdManager<Asset = Asset, CombinatorialId = CombinatorialId>,
    {
        let expected_count = position_count(conditions)?;

        let mut collection_ids = Vec::with_capacity(conditions.len());
        let mut frontier = vec![ROOT_COLLECTION_ID];
        for condition in conditions.iter().rev() {
            let slot_count = condition.outcome_slot_count;
            let mut next = Vec::with_capacity(frontier.len().saturating_mul(slot_count.into()));
            for parent in frontier.iter() {
                for index in 0..slot_count {
                    next.push(M::get_collection_id(
                        *parent,
                        condition.id,
                        basic_index_set(slot_count, index),
                    ));
                }
            }
            collection_ids.push(frontier);
            frontier = next;
        }
        // Pushed from the last condition to the first.
        collection_ids.reverse();

        let position_ids: Vec<_> = frontier
            .into_iter()
            .map(|collection_id| M::get_position_id(collateral, collection_id))
            .collect();
        if position_ids.len() != expected_count {
            return Err(PositionSpaceError::PositionCountMismatch);
        }

        Ok(Self { collection_ids, position_ids })
    }
}

/// Returns the number of positions spanned by `conditions`.
pub fn position_count(conditions: &[Condition]) -> Result<usize, PositionSpaceError> {
    conditions
        .iter()
        .try_fold(1usize, |acc, condition| acc.checked_mul(condition.outcome_slot_count.into()))
        .ok_or(PositionSpaceError::TooManyOutcomes)
}

/// Returns the index of the position which corresponds to `outcome_indices`, or `None` if the
/// tuple doesn't match the conditions.
pub fn position_index(conditions: &[Condition], outcome_indices: &[u16]) -> Option<usize> {
    if conditions.len() != outcome_indices.len() {
        return None;
    }
    let mut result = 0usize;
    for (condition, &index) in conditions.iter().zip(outcome_indices.iter()).rev() {
        if index >= condition.outcome_slot_count {
            return None;
        }
        result = result
            .checked_mul(condition.outcome_slot_count.into())?
            .checked_add(index.into())?;
    }
    Some(result)
}

/// The index set which contains only the outcome `index`.
pub fn basic_index_set(outcome_slot_count: u16, index: u16) -> Vec<bool> {
    let mut index_set = vec![false; outcome_slot_count.into()];
    if let Some(slot) = index_set.get_mut(usize::from(index)) {
        *slot = true;
    }
    index_set
}

/// The partition of a condition's outcomes into singletons.
pub fn basic_partition(outcome_slot_count: u16) -> Vec<Vec<bool>> {
    (0..outcome_slot_count).map(|index| basic_index_set(outcome_slot_count, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpmm_primitives::types::{AccountIdTest, CryptographicIdManager};
    use frame_support::Blake2_256;
    use test_case::test_case;

    type IdManager = CryptographicIdManager<AccountIdTest, Blake2_256>;

    const COLLATERAL: Asset = Asset::ForeignAsset(0);

    fn conditions(slot_counts: &[u16]) -> Vec<Condition> {
        slot_counts
            .iter()
            .enumerate()
            .map(|(i, &outcome_slot_count)| Condition {
                id: IdManager::get_condition_id(&0, [i as u8; 32], outcome_slot_count),
                outcome_slot_count,
            })
            .collect()
    }

    // Depth-first reference enumeration: Recurse over the conditions from last to first and
    // record each parent at the level it is split on.
    fn record(
        conditions: &[Condition],
        conditions_left: usize,
        parent: CombinatorialId,
        collection_ids: &mut Vec<Vec<CombinatorialId>>,
        position_ids: &mut Vec<CombinatorialId>,
    ) {
        if conditions_left == 0 {
            position_ids.push(IdManager::get_position_id(COLLATERAL, parent));
            return;
        }
        let k = conditions_left - 1;
        let condition = conditions[k];
        collection_ids[k].push(parent);
        for index in 0..condition.outcome_slot_count {
            let child = IdManager::get_collection_id(
                parent,
                condition.id,
                basic_index_set(condition.outcome_slot_count, index),
            );
            record(conditions, k, child, collection_ids, position_ids);
        }
    }

    fn reference(conditions: &[Condition]) -> PositionSpace {
        let mut collection_ids = vec![vec![]; conditions.len()];
        let mut position_ids = vec![];
        record(
            conditions,
            conditions.len(),
            ROOT_COLLECTION_ID,
            &mut collection_ids,
            &mut position_ids,
        );
        PositionSpace { collection_ids, position_ids }
    }

    #[test_case(&[2])]
    #[test_case(&[3])]
    #[test_case(&[2, 2])]
    #[test_case(&[2, 3])]
    #[test_case(&[3, 2])]
    #[test_case(&[2, 3, 4])]
    #[test_case(&[4, 2, 2, 2])]
    fn build_matches_depth_first_enumeration(slot_counts: &[u16]) {
        let conditions = conditions(slot_counts);
        let actual = PositionSpace::build::<IdManager>(COLLATERAL, &conditions).unwrap();
        assert_eq!(actual, reference(&conditions));
    }

    #[test_case(&[2], &[1])]
    #[test_case(&[2, 3], &[3, 1])]
    #[test_case(&[2, 3, 4], &[12, 4, 1])]
    fn build_records_collections_per_condition(slot_counts: &[u16], expected: &[usize]) {
        let conditions = conditions(slot_counts);
        let space = PositionSpace::build::<IdManager>(COLLATERAL, &conditions).unwrap();
        let lengths: Vec<_> = space.collection_ids.iter().map(|ids| ids.len()).collect();
        // The last condition is split from the root collection only.
        assert_eq!(space.collection_ids.last().unwrap(), &vec![ROOT_COLLECTION_ID]);
        assert_eq!(lengths, expected);
    }

    #[test]
    fn build_yields_distinct_positions() {
        let conditions = conditions(&[2, 3, 4]);
        let space = PositionSpace::build::<IdManager>(COLLATERAL, &conditions).unwrap();
        assert_eq!(space.position_ids.len(), 24);
        let mut sorted = space.position_ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 24);
    }

    #[test]
    fn build_depends_on_collateral() {
        let conditions = conditions(&[2, 2]);
        let native = PositionSpace::build::<IdManager>(Asset::Native, &conditions).unwrap();
        let foreign = PositionSpace::build::<IdManager>(COLLATERAL, &conditions).unwrap();
        assert_eq!(native.collection_ids, foreign.collection_ids);
        assert!(native.position_ids.iter().all(|id| !foreign.position_ids.contains(id)));
    }

    #[test]
    fn position_index_follows_first_condition_fastest() {
        let conditions = conditions(&[2, 3]);
        let space = PositionSpace::build::<IdManager>(COLLATERAL, &conditions).unwrap();
        for i0 in 0..2u16 {
            for i1 in 0..3u16 {
                let index = position_index(&conditions, &[i0, i1]).unwrap();
                assert_eq!(index, usize::from(i0) + 2 * usize::from(i1));
                // Walk the path from the root collection, last condition first.
                let c1 = IdManager::get_collection_id(
                    ROOT_COLLECTION_ID,
                    conditions[1].id,
                    basic_index_set(3, i1),
                );
                let c0 = IdManager::get_collection_id(c1, conditions[0].id, basic_index_set(2, i0));
                assert_eq!(space.position_ids[index], IdManager::get_position_id(COLLATERAL, c0));
            }
        }
    }

    #[test_case(&[2, 3], &[2, 0]; "index out of range")]
    #[test_case(&[2, 3], &[0]; "too few indices")]
    #[test_case(&[2], &[0, 0]; "too many indices")]
    fn position_index_rejects_invalid_tuples(slot_counts: &[u16], outcome_indices: &[u16]) {
        assert_eq!(position_index(&conditions(slot_counts), outcome_indices), None);
    }

    #[test]
    fn position_count_detects_overflow() {
        let conditions = conditions(&[u16::MAX; 8]);
        assert_eq!(position_count(&conditions), Err(PositionSpaceError::TooManyOutcomes));
    }

    #[test]
    fn basic_partition_works() {
        assert_eq!(
            basic_partition(3),
            vec![vec![true, false, false], vec![false, true, false], vec![false, false, true]]
        );
    }
}
