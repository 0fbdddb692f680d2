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

use crate::pallet::{BalanceOf, Config};
use alloc::vec::Vec;
use fpmm_primitives::types::CombinatorialId;
use sp_runtime::{DispatchError, DispatchResult};

/// Trait for fixed product calculations and access to market data.
pub(crate) trait MarketOperations<T: Config> {
    /// Return the number of positions traded in the market.
    fn outcome_count(&self) -> usize;

    /// Return the position ID of the outcome at `outcome_index`.
    fn position_id(&self, outcome_index: u32) -> Result<CombinatorialId, DispatchError>;

    /// Return the market account's balance of each position, in canonical order.
    ///
    /// Beware! These are live ledger balances, so tokens sent to the market account by anyone
    /// other than the market maker affect prices.
    fn pool_balances(&self) -> Vec<BalanceOf<T>>;

    /// Return `true` if every condition of the market has a nonzero payout denominator.
    fn is_resolved(&self) -> bool;

    /// Calculate the number of outcome tokens received for `investment_amount` units of
    /// collateral.
    fn calculate_buy_amount(
        &self,
        outcome_index: u32,
        investment_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Calculate the number of outcome tokens required to receive `return_amount` units of
    /// collateral.
    fn calculate_sell_amount(
        &self,
        outcome_index: u32,
        return_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    fn calculate_fee_amount(
        &self,
        investment_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    fn calculate_amount_plus_fees(
        &self,
        return_amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Split `amount` units of collateral held by the market account into `amount` units of
    /// every position.
    fn split_through_all_conditions(&self, amount: BalanceOf<T>) -> DispatchResult;

    /// Merge `amount` units of every position held by the market account back into `amount`
    /// units of collateral.
    fn merge_through_all_conditions(&self, amount: BalanceOf<T>) -> DispatchResult;
}
