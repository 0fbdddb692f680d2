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

#![cfg(all(feature = "mock", test))]

mod buy_and_sell;
mod queries;
mod remove_funding;

use crate::{
    assert_approx,
    mock::{
        ext_builder::ExtBuilder,
        runtime::{Currencies, Fpmm, Runtime, RuntimeOrigin, System},
        types::{MockBondingCurve, MockConditionalTokens},
    },
    traits::MarketOperations,
    *,
};
use fpmm_primitives::{
    constants::{base_multiples::*, BASE, CENT},
    traits::ConditionalTokensApi,
    types::{AccountIdTest, Asset, Balance, CombinatorialId, MarketId},
};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;
use sp_runtime::DispatchError;

const ALICE: AccountIdTest = 0;
const BOB: AccountIdTest = 1;
const CHARLIE: AccountIdTest = 2;
const ORACLE: AccountIdTest = 3;

const COLLATERAL: Asset = Asset::ForeignAsset(0);
const MARKET_ID: MarketId = 0;

/// Prepare a condition reported on by `ORACLE`. Each `question` yields a different condition.
fn prepare_condition(question: u8, outcome_slot_count: u16) -> CombinatorialId {
    MockConditionalTokens::prepare_condition(ORACLE, [question; 32], outcome_slot_count).unwrap()
}

/// Resolve the condition in favor of its first outcome.
fn resolve(condition_id: CombinatorialId) {
    let outcome_slot_count = MockConditionalTokens::outcome_slot_count(condition_id).unwrap();
    let mut payouts = vec![0; outcome_slot_count.into()];
    payouts[0] = 1;
    assert_ok!(MockConditionalTokens::report_payouts(condition_id, payouts));
}

fn deposit(who: AccountIdTest, amount: Balance) {
    assert_ok!(Currencies::deposit(COLLATERAL, &who, amount));
}

fn free_balance(asset: Asset, who: AccountIdTest) -> Balance {
    Currencies::free_balance(asset, &who)
}

/// Let `ALICE` create the market `MARKET_ID` from `condition_ids` and fund it with
/// `initial_funding`.
fn create_market(
    condition_ids: Vec<CombinatorialId>,
    fee: Balance,
    oracle_fee: Balance,
    initial_funding: Balance,
) -> MarketId {
    deposit(ALICE, initial_funding);
    assert_ok!(Fpmm::create_market(
        RuntimeOrigin::signed(ALICE),
        MARKET_ID,
        COLLATERAL,
        condition_ids,
        fee,
        ORACLE,
        oracle_fee,
        initial_funding,
    ));
    MARKET_ID
}

/// Create a market with a single binary condition. Returns the market ID and the condition ID.
fn create_binary_market(fee: Balance, initial_funding: Balance) -> (MarketId, CombinatorialId) {
    let condition_id = prepare_condition(0, 2);
    let market_id = create_market(vec![condition_id], fee, _1_10, initial_funding);
    (market_id, condition_id)
}

fn market(market_id: MarketId) -> MarketOf<Runtime> {
    Markets::<Runtime>::get(market_id).unwrap()
}

fn position(market_id: MarketId, outcome_index: u32) -> Asset {
    Asset::ConditionalToken(market(market_id).position_id(outcome_index).unwrap())
}

fn pool_balances(market_id: MarketId) -> Vec<Balance> {
    Fpmm::pool_balances(market_id).unwrap()
}

fn market_account(market_id: MarketId) -> AccountIdTest {
    Fpmm::market_account(market_id)
}

#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr, $precision:expr $(,)?) => {
        match (&$left, &$right, &$precision) {
            (left_val, right_val, precision_val) => {
                let diff = if *left_val > *right_val {
                    *left_val - *right_val
                } else {
                    *right_val - *left_val
                };
                if diff > *precision_val {
                    panic!(
                        "assertion `left approx== right` failed\n      left: {}\n     right: {}\n \
                         precision: {}\ndifference: {}",
                        *left_val, *right_val, *precision_val, diff
                    );
                }
            }
        }
    };
}
