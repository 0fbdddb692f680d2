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

//! Checked arithmetic which reports failures as `DispatchError::Arithmetic`.
//!
//! Pool balances, liquidity shares and fee pools are all updated through these traits, so any
//! overflow or underflow aborts the surrounding dispatchable instead of wrapping.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

/// Declares `$trait_name::$method` and implements it for every type implementing `$checked`,
/// mapping `None` to `ArithmeticError::$error`.
macro_rules! checked_op_res {
    ($trait_name:ident, $method:ident, $checked:ident, $checked_method:ident, $error:ident) => {
        pub trait $trait_name
        where
            Self: Sized,
        {
            fn $method(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T> $trait_name for T
        where
            T: $checked,
        {
            #[inline]
            fn $method(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$checked_method(other)
                    .ok_or(DispatchError::Arithmetic(ArithmeticError::$error))
            }
        }
    };
}

checked_op_res!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, Overflow);
checked_op_res!(CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, Underflow);
checked_op_res!(CheckedMulRes, checked_mul_res, CheckedMul, checked_mul, Overflow);
checked_op_res!(CheckedDivRes, checked_div_res, CheckedDiv, checked_div, DivisionByZero);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const OVERFLOW: DispatchError = DispatchError::Arithmetic(ArithmeticError::Overflow);
    const UNDERFLOW: DispatchError = DispatchError::Arithmetic(ArithmeticError::Underflow);

    #[test_case(1u128, 2, Ok(3))]
    #[test_case(u128::MAX, 1, Err(OVERFLOW))]
    fn checked_add_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_add_res(&b), expected);
    }

    #[test_case(3u128, 2, Ok(1))]
    #[test_case(3u128, 3, Ok(0))]
    #[test_case(2u128, 3, Err(UNDERFLOW))]
    fn checked_sub_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_sub_res(&b), expected);
    }

    #[test_case(3u128, 2, Ok(6))]
    #[test_case(u128::MAX, 2, Err(OVERFLOW))]
    fn checked_mul_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_mul_res(&b), expected);
    }

    #[test_case(7u128, 2, Ok(3))]
    #[test_case(7u128, 0, Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero)))]
    fn checked_div_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_div_res(&b), expected);
    }

    #[test]
    fn shares_cannot_be_burned_beyond_total() {
        let total_shares: u128 = 1_000;
        assert_eq!(total_shares.checked_sub_res(&1_001), Err(UNDERFLOW));
    }
}
