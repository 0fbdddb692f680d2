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
    mock::{runtime::Runtime, types::MockConditionalTokens},
    BalanceOf,
};
use alloc::vec::Vec;
use fpmm_primitives::{traits::ConditionalTokensBenchmarkHelper, types::CombinatorialId};
use sp_runtime::DispatchResult;

pub struct BenchmarkHelper;

impl ConditionalTokensBenchmarkHelper for BenchmarkHelper {
    type Balance = BalanceOf<Runtime>;
    type CombinatorialId = CombinatorialId;

    fn report_payouts(
        condition_id: Self::CombinatorialId,
        payouts: Vec<Self::Balance>,
    ) -> DispatchResult {
        MockConditionalTokens::report_payouts(condition_id, payouts)
    }
}
