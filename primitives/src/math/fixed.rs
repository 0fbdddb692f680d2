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

//! Fixed-point arithmetic with `BASE` representing 1.0.
//!
//! All operations compute the intermediate product with 256 bits of precision, so the only
//! overflow which can occur is that of the final result.

use crate::{
    constants::BASE,
    math::checked_ops_res::{CheckedAddRes, CheckedDivRes, CheckedSubRes},
};
use core::marker::PhantomData;
use sp_arithmetic::{
    helpers_128bit::multiply_by_rational_with_rounding,
    per_things::Rounding,
    traits::{AtLeast32BitUnsigned, Zero},
    ArithmeticError,
};
use sp_runtime::{DispatchError, SaturatedConversion};

pub trait BaseProvider<T> {
    fn get() -> Result<T, DispatchError>;
}

pub struct ZeitgeistBase<T>(PhantomData<T>);

// Used to avoid saturating operations.
impl<T> BaseProvider<T> for ZeitgeistBase<T>
where
    T: AtLeast32BitUnsigned,
{
    fn get() -> Result<T, DispatchError> {
        BASE.try_into()
            .map_err(|_| DispatchError::Other("ZeitgeistBase failed to convert BASE to Balance"))
    }
}

pub trait FixedMul
where
    Self: Sized,
{
    /// Fixed-point multiplication, rounding down.
    fn bmul_floor(&self, other: Self) -> Result<Self, DispatchError>;
}

pub trait FixedDiv
where
    Self: Sized,
{
    /// Fixed-point division, rounding down.
    fn bdiv_floor(&self, other: Self) -> Result<Self, DispatchError>;
}

/// Computes `self * numerator / denominator` without overflowing in the intermediate product.
pub trait MulDiv
where
    Self: Sized,
{
    fn mul_div_floor(&self, numerator: Self, denominator: Self) -> Result<Self, DispatchError>;

    fn mul_div_ceil(&self, numerator: Self, denominator: Self) -> Result<Self, DispatchError>;
}

/// Integer division rounding towards positive infinity.
pub trait CeilDiv
where
    Self: Sized,
{
    fn ceil_div(&self, other: Self) -> Result<Self, DispatchError>;
}

fn mul_div_with_rounding<T>(
    a: T,
    b: T,
    c: T,
    rounding: Rounding,
) -> Result<T, DispatchError>
where
    T: AtLeast32BitUnsigned,
{
    if c.is_zero() {
        return Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero));
    }
    let a: u128 = a.saturated_into();
    let b: u128 = b.saturated_into();
    let c: u128 = c.saturated_into();
    let result = multiply_by_rational_with_rounding(a, b, c, rounding)
        .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))?;
    result.try_into().map_err(|_| DispatchError::Arithmetic(ArithmeticError::Overflow))
}

impl<T> FixedMul for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn bmul_floor(&self, other: Self) -> Result<Self, DispatchError> {
        mul_div_with_rounding(*self, other, ZeitgeistBase::get()?, Rounding::Down)
    }
}

impl<T> FixedDiv for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn bdiv_floor(&self, other: Self) -> Result<Self, DispatchError> {
        mul_div_with_rounding(*self, ZeitgeistBase::get()?, other, Rounding::Down)
    }
}

impl<T> MulDiv for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn mul_div_floor(&self, numerator: Self, denominator: Self) -> Result<Self, DispatchError> {
        mul_div_with_rounding(*self, numerator, denominator, Rounding::Down)
    }

    fn mul_div_ceil(&self, numerator: Self, denominator: Self) -> Result<Self, DispatchError> {
        mul_div_with_rounding(*self, numerator, denominator, Rounding::Up)
    }
}

impl<T> CeilDiv for T
where
    T: AtLeast32BitUnsigned + Copy,
{
    fn ceil_div(&self, other: Self) -> Result<Self, DispatchError> {
        if self.is_zero() {
            // Still reject division by zero.
            let _ = self.checked_div_res(&other)?;
            return Ok(Zero::zero());
        }
        self.checked_sub_res(&T::one())?.checked_div_res(&other)?.checked_add_res(&T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CENT;
    use test_case::test_case;

    #[test_case(0, 0, Ok(0))]
    #[test_case(BASE, BASE, Ok(BASE))]
    #[test_case(2 * BASE, BASE / 2, Ok(BASE))]
    #[test_case(3, BASE / 2, Ok(1))]
    #[test_case(1, CENT, Ok(0))]
    #[test_case(u128::MAX, 2 * BASE, Err(DispatchError::Arithmetic(ArithmeticError::Overflow)))]
    fn bmul_floor_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.bmul_floor(b), expected);
    }

    #[test_case(BASE, BASE, Ok(BASE))]
    #[test_case(BASE, 2 * BASE, Ok(BASE / 2))]
    #[test_case(1, 3 * BASE, Ok(0))]
    #[test_case(BASE, 3 * BASE, Ok(3_333_333_333))]
    #[test_case(BASE, 0, Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero)))]
    fn bdiv_floor_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.bdiv_floor(b), expected);
    }

    #[test]
    fn mul_div_does_not_overflow_in_intermediate_product() {
        let a = u128::MAX / 2;
        assert_eq!(a.mul_div_floor(4, 4), Ok(a));
        assert_eq!(a.mul_div_ceil(3, 3), Ok(a));
        assert_eq!(
            a.mul_div_floor(4, 1),
            Err(DispatchError::Arithmetic(ArithmeticError::Overflow))
        );
    }

    #[test_case(10, 3, 3, 4)]
    #[test_case(9, 3, 3, 3)]
    #[test_case(1, 7, 0, 1)]
    #[test_case(0, 7, 0, 0)]
    fn mul_div_rounding_works(a: u128, b: u128, floor: u128, ceil: u128) {
        assert_eq!(a.mul_div_floor(1, b), Ok(floor));
        assert_eq!(a.mul_div_ceil(1, b), Ok(ceil));
    }

    #[test_case(0, 5, Ok(0))]
    #[test_case(1, 5, Ok(1))]
    #[test_case(5, 5, Ok(1))]
    #[test_case(6, 5, Ok(2))]
    #[test_case(u128::MAX, 1, Ok(u128::MAX))]
    #[test_case(0, 0, Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero)))]
    #[test_case(3, 0, Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero)))]
    fn ceil_div_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.ceil_div(b), expected);
    }
}
