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

#[test]
fn calc_buy_amount_matches_buy() {
    ExtBuilder::build().execute_with(|| {
        let condition_id = prepare_condition(0, 3);
        let market_id = create_market(vec![condition_id], CENT, _1_10, _1000);
        let expected = Fpmm::calc_buy_amount(market_id, _10, 2).unwrap();
        deposit(BOB, _10);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), market_id, 2, _10, 0));
        assert_eq!(free_balance(position(market_id, 2), BOB), expected);
    });
}

#[test]
fn calc_sell_amount_matches_sell() {
    ExtBuilder::build().execute_with(|| {
        let condition_id = prepare_condition(0, 3);
        let market_id = create_market(vec![condition_id], CENT, _1_10, _1000);
        deposit(BOB, _10);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), market_id, 2, _10, 0));
        let balance = free_balance(position(market_id, 2), BOB);
        let expected = Fpmm::calc_sell_amount(market_id, _5, 2).unwrap();
        assert_ok!(Fpmm::sell(RuntimeOrigin::signed(BOB), market_id, 2, _5, expected));
        assert_eq!(free_balance(position(market_id, 2), BOB), balance - expected);
    });
}

#[test]
fn calc_amounts_fail_on_invalid_outcome_index() {
    ExtBuilder::build().execute_with(|| {
        let (market_id, _) = create_binary_market(CENT, _1000);
        assert_eq!(
            Fpmm::calc_buy_amount(market_id, _1, 2),
            Err(Error::<Runtime>::InvalidOutcomeIndex.into())
        );
        assert_eq!(
            Fpmm::calc_sell_amount(market_id, _1, 2),
            Err(Error::<Runtime>::InvalidOutcomeIndex.into())
        );
    });
}

#[test]
fn queries_fail_on_unknown_market() {
    ExtBuilder::build().execute_with(|| {
        let error: DispatchError = Error::<Runtime>::MarketNotFound.into();
        assert_eq!(Fpmm::calc_buy_amount(MARKET_ID, _1, 0), Err(error));
        assert_eq!(Fpmm::calc_sell_amount(MARKET_ID, _1, 0), Err(error));
        assert_eq!(Fpmm::pool_balances(MARKET_ID), Err(error));
        assert_eq!(Fpmm::is_resolved(MARKET_ID), Err(error));
        assert_eq!(Fpmm::total_liquidity_shares(MARKET_ID), Err(error));
        assert_eq!(Fpmm::liquidity_shares_of(MARKET_ID, &ALICE), 0);
    });
}

#[test]
fn is_resolved_works() {
    ExtBuilder::build().execute_with(|| {
        let (market_id, condition_id) = create_binary_market(CENT, _1000);
        assert_eq!(Fpmm::is_resolved(market_id), Ok(false));
        resolve(condition_id);
        assert_eq!(Fpmm::is_resolved(market_id), Ok(true));
    });
}

#[test]
fn pool_balances_follow_position_order() {
    ExtBuilder::build().execute_with(|| {
        let condition_ids = vec![prepare_condition(0, 2), prepare_condition(1, 2)];
        let market_id = create_market(condition_ids, 0, _1_10, _100);
        deposit(BOB, _10);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), market_id, 3, _10, 0));
        let amount_bought = free_balance(position(market_id, 3), BOB);
        let expected = vec![_100 + _10, _100 + _10, _100 + _10, _100 + _10 - amount_bought];
        assert_eq!(pool_balances(market_id), expected);
        for (outcome_index, &balance) in expected.iter().enumerate() {
            let market_balance =
                free_balance(position(market_id, outcome_index as u32), market_account(market_id));
            assert_eq!(market_balance, balance);
        }
    });
}
