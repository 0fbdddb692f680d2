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

use super::*;
use test_case::test_case;

#[test_case(ALICE, 0)]
#[test_case(ALICE, _1)]
#[test_case(ALICE, _1000)]
#[test_case(BOB, _1)]
fn remove_funding_fails(who: AccountIdTest, shares: Balance) {
    ExtBuilder::build().execute_with(|| {
        let (market_id, _) = create_binary_market(CENT, _1000);
        assert_noop!(
            Fpmm::remove_funding(RuntimeOrigin::signed(who), market_id, shares),
            Error::<Runtime>::FundingRemovalDisabled,
        );
    });
}

#[test]
fn remove_funding_fails_on_resolved_market() {
    ExtBuilder::build().execute_with(|| {
        let (market_id, condition_id) = create_binary_market(CENT, _1000);
        resolve(condition_id);
        assert_noop!(
            Fpmm::remove_funding(RuntimeOrigin::signed(ALICE), market_id, _1000),
            Error::<Runtime>::FundingRemovalDisabled,
        );
    });
}

#[test]
fn remove_funding_fails_on_unknown_market() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::remove_funding(RuntimeOrigin::signed(ALICE), MARKET_ID, _1),
            Error::<Runtime>::FundingRemovalDisabled,
        );
    });
}

#[test]
fn remove_funding_fails_on_unsigned_origin() {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Fpmm::remove_funding(RuntimeOrigin::none(), MARKET_ID, _1),
            DispatchError::BadOrigin,
        );
    });
}
