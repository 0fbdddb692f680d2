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

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::{
    traits::{MarketOperations, MarketStorage},
    BalanceOf, Pallet as Fpmm,
};
use alloc::{vec, vec::Vec};
use fpmm_primitives::{
    constants::{base_multiples::*, CENT},
    traits::{CombinatorialIdManager, ConditionalTokensApi, ConditionalTokensBenchmarkHelper},
    types::{Asset, CombinatorialId},
};
use frame_benchmarking::v2::*;
use frame_support::{assert_ok, traits::Get};
use frame_system::RawOrigin;
use orml_traits::MultiCurrency;
use sp_runtime::{traits::Zero, SaturatedConversion};

const COLLATERAL: Asset = Asset::Native;

fn oracle<T: Config>() -> T::AccountId {
    account("oracle", 0, 0)
}

/// Prepare conditions with the specified slot counts. Conditions which already exist are reused.
fn prepare_conditions<T: Config>(slot_counts: &[u16]) -> Vec<CombinatorialId> {
    slot_counts
        .iter()
        .enumerate()
        .map(|(index, &outcome_slot_count)| {
            let question_id = [index.saturated_into::<u8>(); 32];
            let condition_id = T::CombinatorialIdManager::get_condition_id(
                &oracle::<T>(),
                question_id,
                outcome_slot_count,
            );
            if T::ConditionalTokens::outcome_slot_count(condition_id).is_none() {
                assert_ok!(T::ConditionalTokens::prepare_condition(
                    oracle::<T>(),
                    question_id,
                    outcome_slot_count,
                ));
            }
            condition_id
        })
        .collect()
}

/// The first condition has `o` outcomes, the other `c - 1` conditions are binary.
fn slot_counts(c: u32, o: u32) -> Vec<u16> {
    let mut result = vec![o.saturated_into::<u16>()];
    result.resize(c.saturated_into(), 2);
    result
}

fn resolve<T: Config>(condition_ids: &[CombinatorialId]) {
    for &condition_id in condition_ids.iter() {
        if T::ConditionalTokens::payout_denominator(condition_id).is_zero() {
            let outcome_slot_count =
                T::ConditionalTokens::outcome_slot_count(condition_id).unwrap_or_default();
            let mut payouts = vec![Zero::zero(); outcome_slot_count.into()];
            payouts[0] = 1u128.saturated_into();
            assert_ok!(T::BenchmarkHelper::report_payouts(condition_id, payouts));
        }
    }
}

fn fund<T: Config>(who: &T::AccountId, amount: BalanceOf<T>) {
    let total = amount + T::MultiCurrency::minimum_balance(COLLATERAL);
    assert_ok!(T::MultiCurrency::deposit(COLLATERAL, who, total));
}

fn create_market<T: Config>(
    caller: T::AccountId,
    condition_ids: Vec<CombinatorialId>,
    initial_funding: BalanceOf<T>,
) -> T::MarketId {
    let market_id = 0u32.into();
    fund::<T>(&caller, initial_funding);
    assert_ok!(Fpmm::<T>::create_market(
        RawOrigin::Signed(caller).into(),
        market_id,
        COLLATERAL,
        condition_ids,
        CENT.saturated_into(),
        oracle::<T>(),
        _1_10.saturated_into(),
        initial_funding,
    ));
    market_id
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deploy_market() {
        let alice: T::AccountId = whitelisted_caller();
        let market_id: T::MarketId = 0u32.into();

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), market_id);

        assert!(Deployments::<T>::contains_key(market_id));
    }

    #[benchmark]
    fn initialize(c: Linear<1, 4>, o: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let market_id: T::MarketId = 0u32.into();
        let condition_ids = prepare_conditions::<T>(&slot_counts(c, o));
        fund::<T>(&alice, Zero::zero());
        assert_ok!(Fpmm::<T>::deploy_market(RawOrigin::Signed(alice.clone()).into(), market_id));

        #[extrinsic_call]
        _(
            RawOrigin::Signed(alice),
            market_id,
            COLLATERAL,
            condition_ids,
            CENT.saturated_into(),
            oracle::<T>(),
            _1_10.saturated_into(),
        );

        assert!(Markets::<T>::contains_key(market_id));
    }

    #[benchmark]
    fn create_market(c: Linear<1, 4>, o: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let market_id: T::MarketId = 0u32.into();
        let condition_ids = prepare_conditions::<T>(&slot_counts(c, o));
        let amount: BalanceOf<T> = _100.saturated_into();
        fund::<T>(&alice, amount);

        #[extrinsic_call]
        _(
            RawOrigin::Signed(alice),
            market_id,
            COLLATERAL,
            condition_ids,
            CENT.saturated_into(),
            oracle::<T>(),
            _1_10.saturated_into(),
            amount,
        );

        assert_eq!(Fpmm::<T>::total_liquidity_shares(market_id), Ok(amount));
    }

    #[benchmark]
    fn buy(o: Linear<2, 64>) {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let condition_ids = prepare_conditions::<T>(&slot_counts(1, o));
        let market_id = create_market::<T>(alice, condition_ids, _100.saturated_into());
        let investment_amount: BalanceOf<T> = _1.saturated_into();
        fund::<T>(&bob, investment_amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), market_id, 0, investment_amount, Zero::zero());
    }

    #[benchmark]
    fn sell(o: Linear<2, 64>) {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let condition_ids = prepare_conditions::<T>(&slot_counts(1, o));
        let market_id = create_market::<T>(alice, condition_ids, _100.saturated_into());
        let investment_amount: BalanceOf<T> = _2.saturated_into();
        fund::<T>(&bob, investment_amount);
        assert_ok!(Fpmm::<T>::buy(
            RawOrigin::Signed(bob.clone()).into(),
            market_id,
            0,
            investment_amount,
            Zero::zero(),
        ));
        let market = <Fpmm<T> as MarketStorage>::get(market_id).unwrap();
        let position = Asset::ConditionalToken(market.position_id(0).unwrap());
        let max_outcome_tokens = T::MultiCurrency::free_balance(position, &bob);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), market_id, 0, _1.saturated_into(), max_outcome_tokens);
    }

    #[benchmark]
    fn add_funding(o: Linear<2, 64>) {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let condition_ids = prepare_conditions::<T>(&slot_counts(1, o));
        let market_id = create_market::<T>(alice, condition_ids, _100.saturated_into());
        let amount: BalanceOf<T> = _10.saturated_into();
        fund::<T>(&bob, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob.clone()), market_id, amount);

        assert_eq!(Fpmm::<T>::liquidity_shares_of(market_id, &bob), amount);
    }

    #[benchmark]
    fn remove_funding() {
        let alice: T::AccountId = whitelisted_caller();
        let condition_ids = prepare_conditions::<T>(&slot_counts(1, 2));
        let market_id = create_market::<T>(alice.clone(), condition_ids, _100.saturated_into());

        #[block]
        {
            let result = Fpmm::<T>::remove_funding(
                RawOrigin::Signed(alice).into(),
                market_id,
                _1.saturated_into(),
            );
            assert!(result.is_err());
        }
    }

    #[benchmark]
    fn redeem_fees(c: Linear<1, 4>) {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let condition_ids = prepare_conditions::<T>(&slot_counts(c, 2));
        let market_id =
            create_market::<T>(alice.clone(), condition_ids.clone(), _100.saturated_into());
        let investment_amount: BalanceOf<T> = _10.saturated_into();
        fund::<T>(&bob, investment_amount);
        assert_ok!(Fpmm::<T>::buy(
            RawOrigin::Signed(bob).into(),
            market_id,
            0,
            investment_amount,
            Zero::zero(),
        ));
        resolve::<T>(&condition_ids);
        // The oracle must be able to hold its fee so that the transfer is measured.
        fund::<T>(&oracle::<T>(), Zero::zero());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice.clone()), market_id);

        assert!(Fpmm::<T>::liquidity_shares_of(market_id, &alice).is_zero());
    }

    impl_benchmark_test_suite!(
        Fpmm,
        crate::mock::ext_builder::ExtBuilder::build(),
        crate::mock::runtime::Runtime
    );
}
