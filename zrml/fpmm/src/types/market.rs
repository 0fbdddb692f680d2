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

use crate::{
    math::{Math, MathOps},
    pallet::{AccountIdOf, BalanceOf, Config},
    position_space::basic_partition,
    traits::MarketOperations,
    types::Condition,
    Error,
};
use alloc::vec::Vec;
use fpmm_primitives::{
    traits::ConditionalTokensApi,
    types::{Asset, CombinatorialId},
};
use frame_support::{
    storage::bounded_vec::BoundedVec, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, DispatchError, DispatchResult};

/// A fixed product market maker trading the combinatorial positions of `conditions`.
#[derive(
    CloneNoBound,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct Market<T: Config> {
    pub creator: AccountIdOf<T>,
    /// The account which holds the pool and the collected fees.
    pub account_id: AccountIdOf<T>,
    pub collateral: Asset,
    pub conditions: BoundedVec<Condition, T::MaxConditions>,
    /// `collection_ids[k]` lists the parent collections split over `conditions[k]`.
    pub collection_ids: BoundedVec<BoundedVec<CombinatorialId, T::MaxOutcomes>, T::MaxConditions>,
    pub position_ids: BoundedVec<CombinatorialId, T::MaxOutcomes>,
    pub fee: BalanceOf<T>,
    pub oracle: AccountIdOf<T>,
    pub oracle_fee: BalanceOf<T>,
    /// Collateral collected from trading fees which hasn't been paid out yet.
    pub fee_pool_weight: BalanceOf<T>,
    pub oracle_paid: bool,
    pub total_shares: BalanceOf<T>,
}

impl<T: Config> MarketOperations<T> for Market<T> {
    fn outcome_count(&self) -> usize {
        self.position_ids.len()
    }

    fn position_id(&self, outcome_index: u32) -> Result<CombinatorialId, DispatchError> {
        let index = usize::try_from(outcome_index).map_err(|_| Error::<T>::NarrowingConversion)?;
        Ok(*self.position_ids.get(index).ok_or(Error::<T>::InvalidOutcomeIndex)?)
    }

    fn pool_balances(&self) -> Vec<BalanceOf<T>> {
        T::ConditionalTokens::balance_of_batch(&self.account_id, &self.position_ids)
    }

    fn is_resolved(&self) -> bool {
        self.conditions
            .iter()
            .all(|condition| !T::ConditionalTokens::payout_denominator(condition.id).is_zero())
    }

    fn calculate_buy_amount(
        &self,
        outcome_index: u32,
        investment_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let index = usize::try_from(outcome_index).map_err(|_| Error::<T>::NarrowingConversion)?;
        Math::<T>::calculate_buy_amount(&self.pool_balances(), index, investment_amount, self.fee)
    }

    fn calculate_sell_amount(
        &self,
        outcome_index: u32,
        return_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let index = usize::try_from(outcome_index).map_err(|_| Error::<T>::NarrowingConversion)?;
        Math::<T>::calculate_sell_amount(&self.pool_balances(), index, return_amount, self.fee)
    }

    fn calculate_fee_amount(
        &self,
        investment_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        Math::<T>::calculate_fee_amount(investment_amount, self.fee)
    }

    fn calculate_amount_plus_fees(
        &self,
        return_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        Math::<T>::calculate_amount_plus_fees(return_amount, self.fee)
    }

    fn split_through_all_conditions(&self, amount: BalanceOf<T>) -> DispatchResult {
        let levels = self.conditions.iter().zip(self.collection_ids.iter());
        for (condition, parent_collection_ids) in levels.rev() {
            for parent_collection_id in parent_collection_ids.iter() {
                T::ConditionalTokens::split_position(
                    &self.account_id,
                    self.collateral,
                    *parent_collection_id,
                    condition.id,
                    basic_partition(condition.outcome_slot_count),
                    amount,
                )?;
            }
        }
        Ok(())
    }

    fn merge_through_all_conditions(&self, amount: BalanceOf<T>) -> DispatchResult {
        let levels = self.conditions.iter().zip(self.collection_ids.iter());
        for (condition, parent_collection_ids) in levels {
            for parent_collection_id in parent_collection_ids.iter() {
                T::ConditionalTokens::merge_positions(
                    &self.account_id,
                    self.collateral,
                    *parent_collection_id,
                    condition.id,
                    basic_partition(condition.outcome_slot_count),
                    amount,
                )?;
            }
        }
        Ok(())
    }
}
