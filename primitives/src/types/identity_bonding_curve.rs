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

use crate::traits::BondingCurve;
use core::marker::PhantomData;
use sp_runtime::DispatchError;

/// Issues exactly as many liquidity shares as collateral was deposited, regardless of the current
/// supply.
pub struct IdentityBondingCurve<Balance>(PhantomData<Balance>);

impl<Balance> BondingCurve<Balance> for IdentityBondingCurve<Balance> {
    fn calculate_cost(
        requested_increase: Balance,
        _current_supply: Balance,
    ) -> Result<Balance, DispatchError> {
        Ok(requested_increase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case(1, 0)]
    #[test_case(1_000, 0)]
    #[test_case(1_000, 123_456)]
    #[test_case(u128::MAX, u128::MAX)]
    fn calculate_cost_returns_requested_increase(requested_increase: u128, current_supply: u128) {
        assert_eq!(
            IdentityBondingCurve::<u128>::calculate_cost(requested_increase, current_supply),
            Ok(requested_increase)
        );
    }
}
