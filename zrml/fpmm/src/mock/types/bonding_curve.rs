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

use alloc::{vec, vec::Vec};
use core::cell::RefCell;
use fpmm_primitives::{
    traits::BondingCurve,
    types::{Balance, IdentityBondingCurve},
};
use sp_runtime::DispatchError;

/// Bonding curve which behaves like `IdentityBondingCurve` unless a return value is configured.
/// Records the arguments of every call.
pub struct MockBondingCurve;

impl MockBondingCurve {
    pub fn reset() {
        BONDING_CURVE_CALL_DATA.with(|values| values.borrow_mut().clear());
        BONDING_CURVE_RETURN_VALUE.with(|value| *value.borrow_mut() = None);
    }

    pub fn set_return_value(value: Result<Balance, DispatchError>) {
        BONDING_CURVE_RETURN_VALUE.with(|v| *v.borrow_mut() = Some(value));
    }

    /// Returns the `(requested_increase, current_supply)` pairs the curve was called with.
    pub fn calls() -> Vec<(Balance, Balance)> {
        BONDING_CURVE_CALL_DATA.with(|values| values.borrow().clone())
    }
}

impl BondingCurve<Balance> for MockBondingCurve {
    fn calculate_cost(
        requested_increase: Balance,
        current_supply: Balance,
    ) -> Result<Balance, DispatchError> {
        BONDING_CURVE_CALL_DATA
            .with(|values| values.borrow_mut().push((requested_increase, current_supply)));

        BONDING_CURVE_RETURN_VALUE.with(|value| value.borrow().clone()).unwrap_or_else(|| {
            IdentityBondingCurve::<Balance>::calculate_cost(requested_increase, current_supply)
        })
    }
}

thread_local! {
    pub static BONDING_CURVE_CALL_DATA: RefCell<Vec<(Balance, Balance)>> =
        const { RefCell::new(vec![]) };
    pub static BONDING_CURVE_RETURN_VALUE: RefCell<Option<Result<Balance, DispatchError>>> =
        const { RefCell::new(None) };
}
