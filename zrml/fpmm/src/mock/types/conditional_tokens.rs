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

//! Conditional tokens ledger backed by `orml_currencies`. Positions are held as
//! `Asset::ConditionalToken` and collateral of split positions is stored in the ledger account.
//! Prepared conditions and reported payouts live in thread-local storage.

use crate::mock::runtime::Currencies;
use alloc::{collections::BTreeMap, vec, vec::Vec};
use core::cell::RefCell;
use fpmm_primitives::{
    constants::mock::ConditionalTokensPalletId,
    traits::{CombinatorialIdManager, ConditionalTokensApi},
    types::{
        AccountIdTest, Asset, Balance, CombinatorialId, CryptographicIdManager,
        ROOT_COLLECTION_ID,
    },
};
use frame_support::{ensure, traits::Get, Blake2_256};
use orml_traits::MultiCurrency;
use sp_runtime::{traits::AccountIdConversion, DispatchError, DispatchResult};

type IdManager = CryptographicIdManager<AccountIdTest, Blake2_256>;

#[derive(Clone, Debug, Default)]
struct ConditionInfo {
    outcome_slot_count: u16,
    payouts: Vec<Balance>,
}

pub struct MockConditionalTokens;

impl MockConditionalTokens {
    pub fn reset() {
        CONDITIONS.with(|conditions| conditions.borrow_mut().clear());
    }

    pub fn account_id() -> AccountIdTest {
        ConditionalTokensPalletId::get().into_account_truncating()
    }

    /// Report `payouts` for the condition. Any nonzero payout vector resolves the condition.
    pub fn report_payouts(condition_id: CombinatorialId, payouts: Vec<Balance>) -> DispatchResult {
        CONDITIONS.with(|conditions| {
            let mut conditions = conditions.borrow_mut();
            let info = conditions
                .get_mut(&condition_id)
                .ok_or(DispatchError::Other("MockConditionalTokens: condition not prepared"))?;
            ensure!(
                payouts.len() == usize::from(info.outcome_slot_count),
                DispatchError::Other("MockConditionalTokens: invalid payout vector")
            );
            ensure!(
                info.payouts.is_empty(),
                DispatchError::Other("MockConditionalTokens: payouts already reported")
            );
            info.payouts = payouts;
            Ok(())
        })
    }

    fn outcome_slot_count_or_err(condition_id: CombinatorialId) -> Result<u16, DispatchError> {
        Self::outcome_slot_count(condition_id)
            .ok_or(DispatchError::Other("MockConditionalTokens: condition not prepared"))
    }

    // Only complete partitions are supported.
    fn ensure_partition(outcome_slot_count: u16, partition: &[Vec<bool>]) -> DispatchResult {
        let mut free_index_set = vec![true; outcome_slot_count.into()];
        for index_set in partition.iter() {
            ensure!(
                index_set.len() == free_index_set.len() && index_set.iter().any(|&i| i),
                DispatchError::Other("MockConditionalTokens: invalid index set")
            );
            for (free, &taken) in free_index_set.iter_mut().zip(index_set.iter()) {
                ensure!(
                    *free || !taken,
                    DispatchError::Other("MockConditionalTokens: overlapping index sets")
                );
                *free = *free && !taken;
            }
        }
        ensure!(
            free_index_set.iter().all(|&i| !i),
            DispatchError::Other("MockConditionalTokens: incomplete partition")
        );
        Ok(())
    }

    fn child_positions(
        collateral: Asset,
        parent_collection_id: CombinatorialId,
        condition_id: CombinatorialId,
        partition: Vec<Vec<bool>>,
    ) -> Vec<Asset> {
        partition
            .into_iter()
            .map(|index_set| {
                let collection_id =
                    IdManager::get_collection_id(parent_collection_id, condition_id, index_set);
                Asset::ConditionalToken(IdManager::get_position_id(collateral, collection_id))
            })
            .collect()
    }

    fn parent_position(collateral: Asset, parent_collection_id: CombinatorialId) -> Asset {
        Asset::ConditionalToken(IdManager::get_position_id(collateral, parent_collection_id))
    }
}

impl ConditionalTokensApi for MockConditionalTokens {
    type AccountId = AccountIdTest;
    type Asset = Asset;
    type Balance = Balance;
    type CombinatorialId = CombinatorialId;

    /// Unlike a production ledger, this accepts conditions with a single outcome slot.
    fn prepare_condition(
        oracle: Self::AccountId,
        question_id: Self::CombinatorialId,
        outcome_slot_count: u16,
    ) -> Result<Self::CombinatorialId, DispatchError> {
        ensure!(
            outcome_slot_count > 0,
            DispatchError::Other("MockConditionalTokens: no outcome slots")
        );
        let condition_id = IdManager::get_condition_id(&oracle, question_id, outcome_slot_count);
        CONDITIONS.with(|conditions| {
            let mut conditions = conditions.borrow_mut();
            ensure!(
                !conditions.contains_key(&condition_id),
                DispatchError::Other("MockConditionalTokens: condition already prepared")
            );
            conditions
                .insert(condition_id, ConditionInfo { outcome_slot_count, payouts: vec![] });
            Ok(condition_id)
        })
    }

    fn outcome_slot_count(condition_id: Self::CombinatorialId) -> Option<u16> {
        CONDITIONS.with(|conditions| {
            conditions.borrow().get(&condition_id).map(|info| info.outcome_slot_count)
        })
    }

    fn payout_denominator(condition_id: Self::CombinatorialId) -> Self::Balance {
        CONDITIONS.with(|conditions| {
            conditions
                .borrow()
                .get(&condition_id)
                .map(|info| info.payouts.iter().sum())
                .unwrap_or_default()
        })
    }

    fn split_position(
        who: &Self::AccountId,
        collateral: Self::Asset,
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        partition: Vec<Vec<bool>>,
        amount: Self::Balance,
    ) -> DispatchResult {
        let outcome_slot_count = Self::outcome_slot_count_or_err(condition_id)?;
        Self::ensure_partition(outcome_slot_count, &partition)?;

        if parent_collection_id == ROOT_COLLECTION_ID {
            Currencies::transfer(collateral, who, &Self::account_id(), amount)?;
        } else {
            let parent = Self::parent_position(collateral, parent_collection_id);
            Currencies::withdraw(parent, who, amount)?;
        }

        for position in
            Self::child_positions(collateral, parent_collection_id, condition_id, partition)
        {
            Currencies::deposit(position, who, amount)?;
        }

        Ok(())
    }

    fn merge_positions(
        who: &Self::AccountId,
        collateral: Self::Asset,
        parent_collection_id: Self::CombinatorialId,
        condition_id: Self::CombinatorialId,
        partition: Vec<Vec<bool>>,
        amount: Self::Balance,
    ) -> DispatchResult {
        let outcome_slot_count = Self::outcome_slot_count_or_err(condition_id)?;
        Self::ensure_partition(outcome_slot_count, &partition)?;

        for position in
            Self::child_positions(collateral, parent_collection_id, condition_id, partition)
        {
            Currencies::withdraw(position, who, amount)?;
        }

        if parent_collection_id == ROOT_COLLECTION_ID {
            Currencies::transfer(collateral, &Self::account_id(), who, amount)?;
        } else {
            let parent = Self::parent_position(collateral, parent_collection_id);
            Currencies::deposit(parent, who, amount)?;
        }

        Ok(())
    }

    fn balance_of_batch(
        who: &Self::AccountId,
        position_ids: &[Self::CombinatorialId],
    ) -> Vec<Self::Balance> {
        position_ids
            .iter()
            .map(|&position_id| Currencies::free_balance(Asset::ConditionalToken(position_id), who))
            .collect()
    }

    fn transfer_position(
        position_id: Self::CombinatorialId,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult {
        Currencies::transfer(Asset::ConditionalToken(position_id), from, to, amount)
    }
}

thread_local! {
    static CONDITIONS: RefCell<BTreeMap<CombinatorialId, ConditionInfo>> =
        const { RefCell::new(BTreeMap::new()) };
}
