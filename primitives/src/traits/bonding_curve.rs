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

use sp_runtime::DispatchError;

/// Issuance policy for liquidity shares.
///
/// Given the amount of collateral a liquidity provider deposits and the current total supply of
/// liquidity shares, returns the amount of shares to mint. Implementations must be pure; the market
/// maker makes no assumption about the relationship between deposit and issuance.
pub trait BondingCurve<Balance> {
    fn calculate_cost(
        requested_increase: Balance,
        current_supply: Balance,
    ) -> Result<Balance, DispatchError>;
}
