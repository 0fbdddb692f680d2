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
use more_asserts::assert_ge;
use sp_core::U256;
use test_case::test_case;

fn pool_product(market_id: MarketId) -> U256 {
    pool_balances(market_id).into_iter().fold(U256::one(), |acc, b| acc * U256::from(b))
}

#[test_case(vec![2], 0, 0)]
#[test_case(vec![2], CENT, 1)]
#[test_case(vec![3], _1_20, 2)]
#[test_case(vec![4], CENT, 0)]
#[test_case(vec![2, 3], CENT, 4)]
#[test_case(vec![2, 2, 2], _1_20, 7)]
fn buy_and_sell_round_trip_is_consistent(slot_counts: Vec<u16>, fee: Balance, outcome_index: u32) {
    ExtBuilder::build().execute_with(|| {
        let condition_ids = slot_counts
            .iter()
            .enumerate()
            .map(|(question, &slots)| prepare_condition(question as u8, slots))
            .collect();
        let market_id = create_market(condition_ids, fee, _1_10, _1000);
        let outcome_count = pool_balances(market_id).len() as u128;
        let investment_amount = _100;
        let amount_bought =
            Fpmm::calc_buy_amount(market_id, investment_amount, outcome_index).unwrap();
        deposit(BOB, investment_amount);
        assert_ok!(Fpmm::buy(
            RuntimeOrigin::signed(BOB),
            market_id,
            outcome_index,
            investment_amount,
            amount_bought,
        ));

        // Returning this amount merges exactly what the buy split into the pool.
        let investment_minus_fees = investment_amount - investment_amount * fee / BASE;
        let return_amount = investment_minus_fees * (BASE - fee) / BASE;
        let amount_in = Fpmm::calc_sell_amount(market_id, return_amount, outcome_index).unwrap();
        assert_approx!(amount_in, amount_bought, outcome_count);
        assert_ge!(amount_in, amount_bought);
    });
}

#[test]
fn pool_product_never_decreases() {
    ExtBuilder::build().execute_with(|| {
        let condition_id = prepare_condition(0, 3);
        let market_id = create_market(vec![condition_id], CENT, _1_10, _1000);
        deposit(BOB, _100);
        deposit(CHARLIE, _50);

        // (who, buy, outcome_index, amount, limit)
        let trades = [
            (BOB, true, 0, _100, 0),
            (CHARLIE, true, 2, _50, 0),
            (BOB, false, 0, _20, _100),
            (CHARLIE, false, 2, _10, _50),
            (BOB, true, 1, _10, 0),
        ];
        let mut product = pool_product(market_id);
        for (who, buy, outcome_index, amount, limit) in trades {
            let origin = RuntimeOrigin::signed(who);
            if buy {
                assert_ok!(Fpmm::buy(origin, market_id, outcome_index, amount, limit));
            } else {
                assert_ok!(Fpmm::sell(origin, market_id, outcome_index, amount, limit));
            }
            let new_product = pool_product(market_id);
            assert_ge!(new_product, product);
            product = new_product;
        }
    });
}

#[test]
fn buy_and_sell_everything_collects_fees_of_both_trades() {
    ExtBuilder::build().execute_with(|| {
        let (market_id, _) = create_binary_market(_1_20, _1000);
        deposit(BOB, _1000);
        assert_ok!(Fpmm::buy(RuntimeOrigin::signed(BOB), market_id, 0, _1000, 0));
        let amount_bought = free_balance(position(market_id, 0), BOB);
        let buy_fee_amount = 500_000_000_000;
        assert_eq!(amount_bought, 14_371_794_871_794);
        assert_eq!(market(market_id).fee_pool_weight, buy_fee_amount);
        assert_eq!(pool_balances(market_id), vec![5_128_205_128_206, 19_500_000_000_000]);

        // Find the largest return which doesn't cost more than the tokens `BOB` holds.
        let sellable = |return_amount| {
            Fpmm::calc_sell_amount(market_id, return_amount, 0)
                .map(|amount_in| amount_in <= amount_bought)
                .unwrap_or(false)
        };
        let (mut low, mut high) = (1, _1000);
        while low < high {
            let mid = (low + high + 1) / 2;
            if sellable(mid) {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        let return_amount = low;
        assert_eq!(return_amount, 9_024_999_999_999);
        assert!(return_amount < _1000);

        assert_ok!(Fpmm::sell(
            RuntimeOrigin::signed(BOB),
            market_id,
            0,
            return_amount,
            amount_bought
        ));

        let sell_fee_amount = 474_999_999_999;
        let amount_sold = 14_371_794_871_792;
        System::assert_last_event(
            Event::SellExecuted {
                who: BOB,
                market_id,
                outcome_index: 0,
                return_amount,
                fee_amount: sell_fee_amount,
                outcome_tokens_sold: amount_sold,
            }
            .into(),
        );
        assert_eq!(free_balance(position(market_id, 0), BOB), amount_bought - amount_sold);
        assert_eq!(free_balance(COLLATERAL, BOB), return_amount);
        assert_eq!(market(market_id).fee_pool_weight, buy_fee_amount + sell_fee_amount);
        assert_eq!(
            free_balance(COLLATERAL, market_account(market_id)),
            buy_fee_amount + sell_fee_amount
        );
    });
}
