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

use crate::{math::traits::MathOps, BalanceOf, Config, Error};
use core::marker::PhantomData;
use fpmm_primitives::math::{
    checked_ops_res::{CheckedAddRes, CheckedMulRes, CheckedSubRes},
    fixed::{BaseProvider, CeilDiv, FixedDiv, FixedMul, MulDiv, ZeitgeistBase},
};
use frame_support::ensure;
use sp_runtime::{traits::Zero, DispatchError};

pub(crate) struct Math<T>(PhantomData<T>);

impl<T> MathOps<T> for Math<T>
where
    T: Config,
{
    fn calculate_buy_amount(
        balances: &[BalanceOf<T>],
        outcome_index: usize,
        investment_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let fee_amount = Self::calculate_fee_amount(investment_amount, fee)?;
        let investment_amount_minus_fees = investment_amount.checked_sub_res(&fee_amount)?;
        let buy_token_pool_balance =
            *balances.get(outcome_index).ok_or(Error::<T>::InvalidOutcomeIndex)?;
        let base = ZeitgeistBase::<BalanceOf<T>>::get()?;

        let mut ending_outcome_balance = buy_token_pool_balance.checked_mul_res(&base)?;
        for (i, pool_balance) in balances.iter().enumerate() {
            if i == outcome_index {
                continue;
            }
            let denominator = pool_balance.checked_add_res(&investment_amount_minus_fees)?;
            ending_outcome_balance =
                ending_outcome_balance.mul_div_ceil(*pool_balance, denominator)?;
        }
        ensure!(!ending_outcome_balance.is_zero(), Error::<T>::DegeneratePool);

        buy_token_pool_balance
            .checked_add_res(&investment_amount_minus_fees)?
            .checked_sub_res(&ending_outcome_balance.ceil_div(base)?)
    }

    fn calculate_sell_amount(
        balances: &[BalanceOf<T>],
        outcome_index: usize,
        return_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let return_amount_plus_fees = Self::calculate_amount_plus_fees(return_amount, fee)?;
        let sell_token_pool_balance =
            *balances.get(outcome_index).ok_or(Error::<T>::InvalidOutcomeIndex)?;
        let base = ZeitgeistBase::<BalanceOf<T>>::get()?;

        let mut ending_outcome_balance = sell_token_pool_balance.checked_mul_res(&base)?;
        for (i, pool_balance) in balances.iter().enumerate() {
            if i == outcome_index {
                continue;
            }
            // Zero if the pool would be drained; `mul_div_ceil` rejects this.
            let denominator = pool_balance.checked_sub_res(&return_amount_plus_fees)?;
            ending_outcome_balance =
                ending_outcome_balance.mul_div_ceil(*pool_balance, denominator)?;
        }
        ensure!(!ending_outcome_balance.is_zero(), Error::<T>::DegeneratePool);

        return_amount_plus_fees
            .checked_add_res(&ending_outcome_balance.ceil_div(base)?)?
            .checked_sub_res(&sell_token_pool_balance)
    }

    fn calculate_fee_amount(
        investment_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        investment_amount.bmul_floor(fee)
    }

    fn calculate_amount_plus_fees(
        return_amount: BalanceOf<T>,
        fee: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let base = ZeitgeistBase::<BalanceOf<T>>::get()?;
        return_amount.bdiv_floor(base.checked_sub_res(&fee)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock::runtime::Runtime as MockRuntime, Error};
    use alloc::vec;
    use fpmm_primitives::constants::{base_multiples::*, BASE, CENT};
    use sp_runtime::ArithmeticError;
    use test_case::test_case;

    type MockMath = Math<MockRuntime>;

    #[test_case(vec![_1000, _1000], 0, _100, 0, 1_909_090_909_090)]
    #[test_case(vec![_1000, _1000], 1, _100, 0, 1_909_090_909_090)]
    #[test_case(vec![_1000, _1000], 0, _100, CENT, 1_890_818_926_296)]
    #[test_case(vec![_1000, _1000, _1000], 1, _100, 0, 2_735_537_190_082)]
    #[test_case(vec![_100, _50, _200], 2, _10, 0, 584_848_484_848)]
    #[test_case(vec![1, 1], 0, 0, 0, 0)]
    fn calculate_buy_amount_works(
        balances: Vec<u128>,
        outcome_index: usize,
        investment_amount: u128,
        fee: u128,
        expected: u128,
    ) {
        assert_eq!(
            MockMath::calculate_buy_amount(&balances, outcome_index, investment_amount, fee),
            Ok(expected)
        );
    }

    #[test_case(vec![_1000, _1000], 0, _100, 0, 2_111_111_111_112)]
    #[test_case(vec![_1000, _1000], 0, _100, CENT, 2_133_696_515_719)]
    #[test_case(vec![_1000, _1000, _1000], 1, _100, 0, 3_345_679_012_346)]
    fn calculate_sell_amount_works(
        balances: Vec<u128>,
        outcome_index: usize,
        return_amount: u128,
        fee: u128,
        expected: u128,
    ) {
        assert_eq!(
            MockMath::calculate_sell_amount(&balances, outcome_index, return_amount, fee),
            Ok(expected)
        );
    }

    #[test]
    fn calculate_buy_amount_fails_on_invalid_outcome_index() {
        assert_eq!(
            MockMath::calculate_buy_amount(&[_1, _1], 2, _1, 0),
            Err(Error::<MockRuntime>::InvalidOutcomeIndex.into())
        );
    }

    #[test]
    fn calculate_sell_amount_fails_on_invalid_outcome_index() {
        assert_eq!(
            MockMath::calculate_sell_amount(&[_1, _1], 2, _1, 0),
            Err(Error::<MockRuntime>::InvalidOutcomeIndex.into())
        );
    }

    #[test_case(vec![0, _1]; "empty outcome")]
    #[test_case(vec![_1, 0]; "empty other outcome")]
    fn calculate_buy_amount_fails_on_degenerate_pool(balances: Vec<u128>) {
        assert_eq!(
            MockMath::calculate_buy_amount(&balances, 0, _1, 0),
            Err(Error::<MockRuntime>::DegeneratePool.into())
        );
    }

    #[test]
    fn calculate_buy_amount_fails_on_empty_pool_with_zero_investment() {
        assert_eq!(
            MockMath::calculate_buy_amount(&[_1, 0], 0, 0, 0),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }

    #[test]
    fn calculate_sell_amount_fails_if_pool_would_be_drained() {
        assert_eq!(
            MockMath::calculate_sell_amount(&[_10, _10], 0, _10, 0),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(
            MockMath::calculate_sell_amount(&[_10, _10], 0, _20, 0),
            Err(DispatchError::Arithmetic(ArithmeticError::Underflow))
        );
    }

    #[test]
    fn calculate_sell_amount_fails_on_degenerate_pool() {
        assert_eq!(
            MockMath::calculate_sell_amount(&[0, _10], 0, _1, 0),
            Err(Error::<MockRuntime>::DegeneratePool.into())
        );
    }

    #[test_case(_100, 0, 0)]
    #[test_case(_100, CENT, _1)]
    #[test_case(3, BASE / 2, 1)]
    #[test_case(_1, BASE, _1)]
    fn calculate_fee_amount_works(investment_amount: u128, fee: u128, expected: u128) {
        assert_eq!(MockMath::calculate_fee_amount(investment_amount, fee), Ok(expected));
    }

    #[test_case(_100, 0, _100)]
    #[test_case(_100, CENT, 1_010_101_010_101)]
    #[test_case(_1, BASE / 2, _2)]
    fn calculate_amount_plus_fees_works(return_amount: u128, fee: u128, expected: u128) {
        assert_eq!(MockMath::calculate_amount_plus_fees(return_amount, fee), Ok(expected));
    }

    #[test]
    fn calculate_amount_plus_fees_fails_on_full_fee() {
        assert_eq!(
            MockMath::calculate_amount_plus_fees(_1, BASE),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }
}
