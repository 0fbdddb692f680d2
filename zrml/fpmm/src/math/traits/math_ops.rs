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

use crate::{BalanceOf, Config};
use sp_runtime::DispatchError;

pub(crate) trait MathOps<T: Config> {
    /// Calculate the number of outcome tokens received when buying the outcome at `outcome_index`
    /// for `investment_amount` units of collateral.
    ///
    /// # Parameters
    ///
    /// - `balances`: The market maker's balances of each position.
    /// - `outcome_index`: The position being bought.
    /// - `investment_amount`: The amount of collateral paid, including fees.
    /// - `fee`: The fractional trading fee.
    fn calculate_buy_amount(
        balances: &[BalanceOf<T>],
        outcome_index: usize,
        investment_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Calculate the number of outcome tokens that must be sold to the market maker to receive
    /// exactly `return_amount` units of collateral after fees.
    ///
    /// # Parameters
    ///
    /// - `balances`: The market maker's balances of each position.
    /// - `outcome_index`: The position being sold.
    /// - `return_amount`: The amount of collateral received.
    /// - `fee`: The fractional trading fee.
    fn calculate_sell_amount(
        balances: &[BalanceOf<T>],
        outcome_index: usize,
        return_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Calculate the fee skimmed from `investment_amount`, rounded down.
    fn calculate_fee_amount(
        investment_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// Calculate the gross amount of collateral which yields `return_amount` after deducting
    /// fees, rounded down.
    fn calculate_amount_plus_fees(
        return_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;
}
