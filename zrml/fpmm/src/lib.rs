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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::too_many_arguments)]

extern crate alloc;

mod benchmarking;
mod market_storage;
mod math;
pub mod mock;
pub mod position_space;
mod tests;
pub mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        position_space::{position_count, PositionSpace, PositionSpaceError},
        traits::{MarketOperations, MarketStorage},
        types::{Condition, Market, OraclePayout},
        weights::*,
    };
    use alloc::{collections::BTreeSet, vec::Vec};
    use core::marker::PhantomData;
    use fpmm_primitives::{
        constants::BASE,
        math::{
            checked_ops_res::{CheckedAddRes, CheckedSubRes},
            fixed::{FixedMul, MulDiv},
        },
        traits::{BondingCurve, CombinatorialIdManager, ConditionalTokensApi},
        types::{Asset, CombinatorialId},
    };
    use frame_support::{
        dispatch::DispatchResultWithPostInfo,
        ensure,
        pallet_prelude::{OptionQuery, StorageDoubleMap, StorageMap, ValueQuery},
        require_transactional,
        storage::bounded_vec::BoundedVec,
        traits::{Get, IsType, StorageVersion},
        transactional, Blake2_128Concat, PalletId, Parameter, Twox64Concat,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use orml_traits::MultiCurrency;
    use parity_scale_codec::MaxEncodedLen;
    use sp_runtime::{
        traits::{
            AccountIdConversion, AtLeast32Bit, MaybeSerializeDeserialize, Member, Saturating, Zero,
        },
        DispatchError, DispatchResult, SaturatedConversion,
    };

    #[cfg(feature = "runtime-benchmarks")]
    use fpmm_primitives::traits::ConditionalTokensBenchmarkHelper;

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-fpmm";

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> =
        <<T as Config>::MultiCurrency as MultiCurrency<AccountIdOf<T>>>::Balance;
    pub type MarketOf<T> = Market<T>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: ConditionalTokensBenchmarkHelper<
            Balance = BalanceOf<Self>,
            CombinatorialId = CombinatorialId,
        >;

        /// Determines how many liquidity shares are issued for funding a market.
        type BondingCurve: BondingCurve<BalanceOf<Self>>;

        /// Derives the collection and position IDs of the positions traded in a market. Must
        /// match the derivation used by `ConditionalTokens`.
        type CombinatorialIdManager: CombinatorialIdManager<
            AccountId = Self::AccountId,
            Asset = Asset,
            CombinatorialId = CombinatorialId,
        >;

        /// Ledger which holds the positions and performs splits and merges.
        type ConditionalTokens: ConditionalTokensApi<
            AccountId = Self::AccountId,
            Asset = Asset,
            Balance = BalanceOf<Self>,
            CombinatorialId = CombinatorialId,
        >;

        /// Identifier of a market. Doubles as the salt from which the market's account is
        /// derived.
        type MarketId: AtLeast32Bit
            + Copy
            + Default
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        type MultiCurrency: MultiCurrency<Self::AccountId, CurrencyId = Asset>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;

        /// The maximum number of conditions a market may be built from.
        #[pallet::constant]
        type MaxConditions: Get<u32>;

        /// The maximum trading fee. Must be less than `BASE`.
        #[pallet::constant]
        type MaxFee: Get<BalanceOf<Self>>;

        /// The maximum number of positions a market may trade, i.e. the maximum product of the
        /// slot counts of its conditions.
        #[pallet::constant]
        type MaxOutcomes: Get<u32>;

        #[pallet::constant]
        type PalletId: Get<PalletId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Maps a deployed market ID to the account which deployed it.
    #[pallet::storage]
    pub(crate) type Deployments<T: Config> =
        StorageMap<_, Twox64Concat, T::MarketId, AccountIdOf<T>, OptionQuery>;

    #[pallet::storage]
    pub(crate) type Markets<T: Config> =
        StorageMap<_, Twox64Concat, T::MarketId, MarketOf<T>, OptionQuery>;

    #[pallet::storage]
    pub(crate) type LiquidityShares<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        T::MarketId,
        Blake2_128Concat,
        AccountIdOf<T>,
        BalanceOf<T>,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A market ID was reserved and its account derived.
        MarketDeployed { who: AccountIdOf<T>, market_id: T::MarketId, account_id: AccountIdOf<T> },
        /// A deployed market was initialized and is open for funding and trading.
        MarketInitialized {
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            account_id: AccountIdOf<T>,
            collateral: Asset,
            condition_ids: Vec<CombinatorialId>,
            position_ids: Vec<CombinatorialId>,
            fee: BalanceOf<T>,
            oracle: AccountIdOf<T>,
            oracle_fee: BalanceOf<T>,
        },
        /// Informant bought outcome tokens. `investment_amount` includes `fee_amount`.
        BuyExecuted {
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            outcome_index: u32,
            investment_amount: BalanceOf<T>,
            fee_amount: BalanceOf<T>,
            outcome_tokens_bought: BalanceOf<T>,
        },
        /// Informant sold outcome tokens. `return_amount` is received after deducting
        /// `fee_amount`.
        SellExecuted {
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            outcome_index: u32,
            return_amount: BalanceOf<T>,
            fee_amount: BalanceOf<T>,
            outcome_tokens_sold: BalanceOf<T>,
        },
        /// Liquidity provider funded the market.
        FundingAdded {
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            amount: BalanceOf<T>,
            shares_minted: BalanceOf<T>,
        },
        /// The oracle received its share of the fees.
        OracleFeePaid { market_id: T::MarketId, oracle: AccountIdOf<T>, amount: BalanceOf<T> },
        /// The oracle's share of the fees is below what its account can hold and was left to
        /// the liquidity providers.
        OracleFeeForfeited {
            market_id: T::MarketId,
            oracle: AccountIdOf<T>,
            amount: BalanceOf<T>,
        },
        /// Liquidity provider burned their shares for their share of the fees.
        FeesRedeemed {
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            shares_burned: BalanceOf<T>,
            amount: BalanceOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A market with this ID was already deployed.
        AlreadyDeployed,
        /// The market was already initialized.
        AlreadyInitialized,
        /// Amount paid is above the specified maximum.
        AmountInAboveMax,
        /// Amount received is below the specified minimum.
        AmountOutBelowMin,
        /// A condition wasn't prepared in the conditional tokens ledger.
        ConditionNotPrepared,
        /// A pool balance would become zero during a calculation.
        DegeneratePool,
        /// The same condition was specified twice.
        DuplicateCondition,
        /// The trading fee exceeds the allowed maximum.
        FeeTooHigh,
        /// Liquidity can't be removed from a market.
        FundingRemovalDisabled,
        /// Conditional tokens can't be used as collateral.
        InvalidCollateral,
        /// The outcome index doesn't belong to any of the market's positions.
        InvalidOutcomeIndex,
        /// A condition has fewer than two outcome slots.
        InvalidOutcomeSlotCount,
        /// The market hasn't been deployed.
        MarketNotFound,
        /// Fees can only be redeemed once all conditions are resolved.
        MarketNotResolved,
        /// Narrowing type conversion occurred.
        NarrowingConversion,
        /// No conditions were specified.
        NoConditions,
        /// The informant doesn't own any liquidity shares of this market.
        NoLiquidityShares,
        /// No market with this ID was deployed.
        NotDeployed,
        /// Only the account which deployed the market may initialize it.
        NotDeployer,
        /// The oracle fee exceeds `BASE`.
        OracleFeeTooHigh,
        /// The number of derived positions doesn't match the slot counts. This shouldn't happen.
        PositionCountMismatch,
        /// The number of conditions is above the allowed maximum.
        TooManyConditions,
        /// The number of positions is above the allowed maximum.
        TooManyOutcomes,
        /// Specified monetary amount is zero.
        ZeroAmount,
    }

    impl<T> From<PositionSpaceError> for Error<T> {
        fn from(error: PositionSpaceError) -> Self {
            match error {
                PositionSpaceError::PositionCountMismatch => Error::<T>::PositionCountMismatch,
                PositionSpaceError::TooManyOutcomes => Error::<T>::TooManyOutcomes,
            }
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Reserve `market_id` and derive the market's account from it.
        ///
        /// The account depends only on `market_id`, so it is known before the market is
        /// initialized. Only the informant may initialize the market.
        ///
        /// # Parameters
        ///
        /// - `origin`: The deployer.
        /// - `market_id`: The salt of the market.
        ///
        /// # Complexity
        ///
        /// `O(1)`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deploy_market())]
        #[transactional]
        pub fn deploy_market(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_deploy_market(who, market_id)
        }

        /// Initialize a deployed market.
        ///
        /// Enumerates the positions spanned by `condition_ids` and transfers the existential
        /// deposit of `collateral` from the informant to the market account. The market starts
        /// without liquidity.
        ///
        /// # Parameters
        ///
        /// - `origin`: The deployer of the market.
        /// - `market_id`: The ID used when deploying the market.
        /// - `collateral`: The collateral used to buy complete sets of positions.
        /// - `condition_ids`: The conditions, prepared in the conditional tokens ledger, whose
        ///   combinations are traded.
        /// - `fee`: The fractional trading fee.
        /// - `oracle`: The account which receives `oracle_fee` of the collected fees once the
        ///   market is resolved.
        /// - `oracle_fee`: The oracle's fraction of the collected fees.
        ///
        /// # Complexity
        ///
        /// `O(c + o)`, where `c` is the number of conditions and `o` is the number of positions.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::initialize(
            condition_ids.len().saturated_into(),
            T::MaxOutcomes::get(),
        ))]
        #[transactional]
        pub fn initialize(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
            collateral: Asset,
            condition_ids: Vec<CombinatorialId>,
            #[pallet::compact] fee: BalanceOf<T>,
            oracle: AccountIdOf<T>,
            #[pallet::compact] oracle_fee: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let condition_count: u32 = condition_ids.len().saturated_into();
            let outcome_count = Self::do_initialize(
                who,
                market_id,
                collateral,
                condition_ids,
                fee,
                oracle,
                oracle_fee,
            )?;
            Ok(Some(T::WeightInfo::initialize(condition_count, outcome_count)).into())
        }

        /// Buy outcome tokens from the specified market.
        ///
        /// The `investment_amount` is paid in collateral. The fee is skimmed off, the rest is
        /// split into complete sets and the tokens of the outcome at `outcome_index` are sent
        /// back to the informant. The transaction fails if the informant would receive fewer than
        /// `min_outcome_tokens` tokens.
        ///
        /// # Parameters
        ///
        /// - `origin`: The buyer.
        /// - `market_id`: The market to trade on.
        /// - `outcome_index`: The index of the position to buy.
        /// - `investment_amount`: Amount of collateral paid, including fees.
        /// - `min_outcome_tokens`: Minimum number of outcome tokens the buyer expects to receive.
        ///
        /// # Complexity
        ///
        /// `O(o)`, where `o` is the number of positions, when using a ledger with `O(1)` splits.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::buy(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn buy(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
            outcome_index: u32,
            #[pallet::compact] investment_amount: BalanceOf<T>,
            #[pallet::compact] min_outcome_tokens: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count(market_id)?;
            Self::do_buy(who, market_id, outcome_index, investment_amount, min_outcome_tokens)?;
            Ok(Some(T::WeightInfo::buy(outcome_count)).into())
        }

        /// Sell outcome tokens to the specified market.
        ///
        /// The informant receives exactly `return_amount` units of collateral. The number of
        /// outcome tokens paid is determined by the pool, and the transaction fails if it is
        /// larger than `max_outcome_tokens`.
        ///
        /// # Parameters
        ///
        /// - `origin`: The seller.
        /// - `market_id`: The market to trade on.
        /// - `outcome_index`: The index of the position to sell.
        /// - `return_amount`: Amount of collateral received, fees already deducted.
        /// - `max_outcome_tokens`: Maximum number of outcome tokens the seller is willing to pay.
        ///
        /// # Complexity
        ///
        /// `O(o)`, where `o` is the number of positions, when using a ledger with `O(1)` merges.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::sell(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn sell(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
            outcome_index: u32,
            #[pallet::compact] return_amount: BalanceOf<T>,
            #[pallet::compact] max_outcome_tokens: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count(market_id)?;
            Self::do_sell(who, market_id, outcome_index, return_amount, max_outcome_tokens)?;
            Ok(Some(T::WeightInfo::sell(outcome_count)).into())
        }

        /// Add liquidity to the specified market.
        ///
        /// The `amount` is split into complete sets which are added to the pool, so funding
        /// doesn't move the prices only if the pool is balanced. The informant receives the
        /// liquidity shares issued by the bonding curve.
        ///
        /// # Parameters
        ///
        /// - `origin`: The liquidity provider.
        /// - `market_id`: The market to fund.
        /// - `amount`: Amount of collateral to deposit.
        ///
        /// # Complexity
        ///
        /// `O(o)`, where `o` is the number of positions.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::add_funding(T::MaxOutcomes::get()))]
        #[transactional]
        pub fn add_funding(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let outcome_count = Self::outcome_count(market_id)?;
            Self::do_add_funding(who, market_id, amount)?;
            Ok(Some(T::WeightInfo::add_funding(outcome_count)).into())
        }

        /// Remove liquidity from the specified market.
        ///
        /// Funding can't be removed. Liquidity providers are compensated through the trading fees
        /// they redeem once the market is resolved. Always fails with `FundingRemovalDisabled`.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::remove_funding())]
        pub fn remove_funding(
            origin: OriginFor<T>,
            #[pallet::compact] _market_id: T::MarketId,
            #[pallet::compact] _shares: BalanceOf<T>,
        ) -> DispatchResult {
            let _ = ensure_signed(origin)?;

            Err(Error::<T>::FundingRemovalDisabled.into())
        }

        /// Redeem the informant's share of the collected fees.
        ///
        /// Requires that every condition of the market is resolved. The first redemption pays
        /// the oracle its fraction of the fees. The informant's liquidity shares are burned in
        /// exchange for their pro rata share of the remaining fees.
        ///
        /// # Parameters
        ///
        /// - `origin`: The liquidity provider.
        /// - `market_id`: The market to redeem the fees of.
        ///
        /// # Complexity
        ///
        /// `O(c)`, where `c` is the number of conditions.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::redeem_fees(T::MaxConditions::get()))]
        #[transactional]
        pub fn redeem_fees(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let market = <Self as MarketStorage>::get(market_id)?;
            let condition_count: u32 = market.conditions.len().saturated_into();
            Self::do_redeem_fees(who, market_id)?;
            Ok(Some(T::WeightInfo::redeem_fees(condition_count)).into())
        }

        /// Deploy and initialize a market in one go, and optionally fund it.
        ///
        /// See `deploy_market`, `initialize` and `add_funding` for details. No funding is added
        /// if `initial_funding` is zero.
        ///
        /// # Complexity
        ///
        /// `O(c + o)`, where `c` is the number of conditions and `o` is the number of positions.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::create_market(
            condition_ids.len().saturated_into(),
            T::MaxOutcomes::get(),
        ))]
        #[transactional]
        pub fn create_market(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: T::MarketId,
            collateral: Asset,
            condition_ids: Vec<CombinatorialId>,
            #[pallet::compact] fee: BalanceOf<T>,
            oracle: AccountIdOf<T>,
            #[pallet::compact] oracle_fee: BalanceOf<T>,
            #[pallet::compact] initial_funding: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let condition_count: u32 = condition_ids.len().saturated_into();
            Self::do_deploy_market(who.clone(), market_id)?;
            let outcome_count = Self::do_initialize(
                who.clone(),
                market_id,
                collateral,
                condition_ids,
                fee,
                oracle,
                oracle_fee,
            )?;
            if !initial_funding.is_zero() {
                Self::do_add_funding(who, market_id, initial_funding)?;
            }
            Ok(Some(T::WeightInfo::create_market(condition_count, outcome_count)).into())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Return the account of the market with ID `market_id`, whether or not it was deployed.
        pub fn market_account(market_id: T::MarketId) -> AccountIdOf<T> {
            T::PalletId::get().into_sub_account_truncating(market_id.saturated_into::<u128>())
        }

        /// Calculate the number of outcome tokens received when buying the outcome at
        /// `outcome_index` for `investment_amount`.
        pub fn calc_buy_amount(
            market_id: T::MarketId,
            investment_amount: BalanceOf<T>,
            outcome_index: u32,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let market = <Self as MarketStorage>::get(market_id)?;
            market.calculate_buy_amount(outcome_index, investment_amount)
        }

        /// Calculate the number of outcome tokens that must be sold to receive `return_amount`
        /// after fees.
        pub fn calc_sell_amount(
            market_id: T::MarketId,
            return_amount: BalanceOf<T>,
            outcome_index: u32,
        ) -> Result<BalanceOf<T>, DispatchError> {
            let market = <Self as MarketStorage>::get(market_id)?;
            market.calculate_sell_amount(outcome_index, return_amount)
        }

        pub fn pool_balances(market_id: T::MarketId) -> Result<Vec<BalanceOf<T>>, DispatchError> {
            Ok(<Self as MarketStorage>::get(market_id)?.pool_balances())
        }

        pub fn is_resolved(market_id: T::MarketId) -> Result<bool, DispatchError> {
            Ok(<Self as MarketStorage>::get(market_id)?.is_resolved())
        }

        pub fn liquidity_shares_of(market_id: T::MarketId, who: &AccountIdOf<T>) -> BalanceOf<T> {
            LiquidityShares::<T>::get(market_id, who)
        }

        pub fn total_liquidity_shares(
            market_id: T::MarketId,
        ) -> Result<BalanceOf<T>, DispatchError> {
            Ok(<Self as MarketStorage>::get(market_id)?.total_shares)
        }

        fn outcome_count(market_id: T::MarketId) -> Result<u32, DispatchError> {
            let market = <Self as MarketStorage>::get(market_id)?;
            Ok(market.outcome_count().saturated_into())
        }

        #[require_transactional]
        pub(crate) fn do_deploy_market(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
        ) -> DispatchResult {
            ensure!(!Deployments::<T>::contains_key(market_id), Error::<T>::AlreadyDeployed);
            Deployments::<T>::insert(market_id, who.clone());
            let account_id = Self::market_account(market_id);
            Self::deposit_event(Event::<T>::MarketDeployed { who, market_id, account_id });
            Ok(())
        }

        /// Validate the parameters, build the market and store it. Returns the number of
        /// positions.
        #[require_transactional]
        pub(crate) fn do_initialize(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            collateral: Asset,
            condition_ids: Vec<CombinatorialId>,
            fee: BalanceOf<T>,
            oracle: AccountIdOf<T>,
            oracle_fee: BalanceOf<T>,
        ) -> Result<u32, DispatchError> {
            let deployer = Deployments::<T>::get(market_id).ok_or(Error::<T>::NotDeployed)?;
            ensure!(deployer == who, Error::<T>::NotDeployer);
            ensure!(!Markets::<T>::contains_key(market_id), Error::<T>::AlreadyInitialized);
            ensure!(collateral.is_collateral(), Error::<T>::InvalidCollateral);
            let base: BalanceOf<T> = BASE.saturated_into();
            ensure!(fee <= T::MaxFee::get() && fee < base, Error::<T>::FeeTooHigh);
            ensure!(oracle_fee <= base, Error::<T>::OracleFeeTooHigh);

            let conditions = Self::load_conditions(&condition_ids)?;
            let outcome_count = position_count(&conditions).map_err(Error::<T>::from)?;
            ensure!(
                outcome_count <= T::MaxOutcomes::get().saturated_into::<usize>(),
                Error::<T>::TooManyOutcomes
            );
            let PositionSpace { collection_ids, position_ids } =
                PositionSpace::build::<T::CombinatorialIdManager>(collateral, &conditions)
                    .map_err(Error::<T>::from)?;

            let collection_ids = collection_ids
                .into_iter()
                .map(|ids| {
                    BoundedVec::<_, T::MaxOutcomes>::try_from(ids)
                        .map_err(|_| Error::<T>::TooManyOutcomes)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let account_id = Self::market_account(market_id);
            let market = Market {
                creator: who.clone(),
                account_id: account_id.clone(),
                collateral,
                conditions: BoundedVec::try_from(conditions)
                    .map_err(|_| Error::<T>::TooManyConditions)?,
                collection_ids: BoundedVec::try_from(collection_ids)
                    .map_err(|_| Error::<T>::TooManyConditions)?,
                position_ids: BoundedVec::try_from(position_ids.clone())
                    .map_err(|_| Error::<T>::TooManyOutcomes)?,
                fee,
                oracle: oracle.clone(),
                oracle_fee,
                fee_pool_weight: Zero::zero(),
                oracle_paid: false,
                total_shares: Zero::zero(),
            };
            Markets::<T>::insert(market_id, market);

            // Keep the market account alive even if all fees are paid out.
            let existential_deposit = T::MultiCurrency::minimum_balance(collateral);
            if !existential_deposit.is_zero() {
                T::MultiCurrency::transfer(collateral, &who, &account_id, existential_deposit)?;
            }

            log::debug!(
                target: LOG_TARGET,
                "Initialized market {:?} with {} positions",
                market_id,
                outcome_count,
            );
            Self::deposit_event(Event::<T>::MarketInitialized {
                who,
                market_id,
                account_id,
                collateral,
                condition_ids,
                position_ids,
                fee,
                oracle,
                oracle_fee,
            });

            Ok(outcome_count.saturated_into())
        }

        fn load_conditions(
            condition_ids: &[CombinatorialId],
        ) -> Result<Vec<Condition>, DispatchError> {
            ensure!(!condition_ids.is_empty(), Error::<T>::NoConditions);
            let condition_count: u32 = condition_ids.len().saturated_into();
            ensure!(condition_count <= T::MaxConditions::get(), Error::<T>::TooManyConditions);
            let mut seen = BTreeSet::new();
            let mut conditions = Vec::with_capacity(condition_ids.len());
            for &id in condition_ids.iter() {
                ensure!(seen.insert(id), Error::<T>::DuplicateCondition);
                let outcome_slot_count = T::ConditionalTokens::outcome_slot_count(id)
                    .ok_or(Error::<T>::ConditionNotPrepared)?;
                ensure!(outcome_slot_count >= 2, Error::<T>::InvalidOutcomeSlotCount);
                conditions.push(Condition { id, outcome_slot_count });
            }
            Ok(conditions)
        }

        #[require_transactional]
        pub(crate) fn do_buy(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            outcome_index: u32,
            investment_amount: BalanceOf<T>,
            min_outcome_tokens: BalanceOf<T>,
        ) -> DispatchResult {
            ensure!(!investment_amount.is_zero(), Error::<T>::ZeroAmount);
            let market = <Self as MarketStorage>::get(market_id)?;
            let position_id = market.position_id(outcome_index)?;
            let outcome_tokens_bought =
                market.calculate_buy_amount(outcome_index, investment_amount)?;
            ensure!(outcome_tokens_bought >= min_outcome_tokens, Error::<T>::AmountOutBelowMin);
            let fee_amount = market.calculate_fee_amount(investment_amount)?;
            let investment_amount_minus_fees = investment_amount.checked_sub_res(&fee_amount)?;

            let market = <Self as MarketStorage>::try_mutate_market(&market_id, |market| {
                market.fee_pool_weight = market.fee_pool_weight.checked_add_res(&fee_amount)?;
                Ok(market.clone())
            })?;

            T::MultiCurrency::transfer(
                market.collateral,
                &who,
                &market.account_id,
                investment_amount,
            )?;
            market.split_through_all_conditions(investment_amount_minus_fees)?;
            T::ConditionalTokens::transfer_position(
                position_id,
                &market.account_id,
                &who,
                outcome_tokens_bought,
            )?;

            Self::deposit_event(Event::<T>::BuyExecuted {
                who,
                market_id,
                outcome_index,
                investment_amount,
                fee_amount,
                outcome_tokens_bought,
            });

            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_sell(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            outcome_index: u32,
            return_amount: BalanceOf<T>,
            max_outcome_tokens: BalanceOf<T>,
        ) -> DispatchResult {
            ensure!(!return_amount.is_zero(), Error::<T>::ZeroAmount);
            let market = <Self as MarketStorage>::get(market_id)?;
            let position_id = market.position_id(outcome_index)?;
            let outcome_tokens_sold = market.calculate_sell_amount(outcome_index, return_amount)?;
            ensure!(outcome_tokens_sold <= max_outcome_tokens, Error::<T>::AmountInAboveMax);
            let return_amount_plus_fees = market.calculate_amount_plus_fees(return_amount)?;
            let fee_amount = return_amount_plus_fees.checked_sub_res(&return_amount)?;

            let market = <Self as MarketStorage>::try_mutate_market(&market_id, |market| {
                market.fee_pool_weight = market.fee_pool_weight.checked_add_res(&fee_amount)?;
                Ok(market.clone())
            })?;

            T::ConditionalTokens::transfer_position(
                position_id,
                &who,
                &market.account_id,
                outcome_tokens_sold,
            )?;
            market.merge_through_all_conditions(return_amount_plus_fees)?;
            T::MultiCurrency::transfer(market.collateral, &market.account_id, &who, return_amount)?;

            Self::deposit_event(Event::<T>::SellExecuted {
                who,
                market_id,
                outcome_index,
                return_amount,
                fee_amount,
                outcome_tokens_sold,
            });

            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_add_funding(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            let (market, shares_minted) =
                <Self as MarketStorage>::try_mutate_market(&market_id, |market| {
                    let shares_minted =
                        T::BondingCurve::calculate_cost(amount, market.total_shares)?;
                    market.total_shares = market.total_shares.checked_add_res(&shares_minted)?;
                    LiquidityShares::<T>::try_mutate(market_id, &who, |shares| -> DispatchResult {
                        *shares = shares.checked_add_res(&shares_minted)?;
                        Ok(())
                    })?;
                    Ok((market.clone(), shares_minted))
                })?;

            T::MultiCurrency::transfer(market.collateral, &who, &market.account_id, amount)?;
            market.split_through_all_conditions(amount)?;

            Self::deposit_event(Event::<T>::FundingAdded { who, market_id, amount, shares_minted });

            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_redeem_fees(
            who: AccountIdOf<T>,
            market_id: T::MarketId,
        ) -> DispatchResult {
            let (market, oracle_payout, shares_burned, amount) =
                <Self as MarketStorage>::try_mutate_market(&market_id, |market| {
                    ensure!(market.is_resolved(), Error::<T>::MarketNotResolved);

                    let oracle_payout = if market.oracle_paid {
                        None
                    } else {
                        let oracle_fee_amount =
                            market.fee_pool_weight.bmul_floor(market.oracle_fee)?;
                        market.oracle_paid = true;
                        // Dust the oracle can't hold stays with the liquidity providers.
                        if Self::can_receive(market.collateral, &market.oracle, oracle_fee_amount)
                        {
                            market.fee_pool_weight =
                                market.fee_pool_weight.checked_sub_res(&oracle_fee_amount)?;
                            Some(OraclePayout::Paid(oracle_fee_amount))
                        } else {
                            Some(OraclePayout::Forfeited(oracle_fee_amount))
                        }
                    };

                    let shares_burned = LiquidityShares::<T>::get(market_id, &who);
                    ensure!(!shares_burned.is_zero(), Error::<T>::NoLiquidityShares);
                    let amount =
                        market.fee_pool_weight.mul_div_floor(shares_burned, market.total_shares)?;
                    LiquidityShares::<T>::remove(market_id, &who);
                    market.total_shares = market.total_shares.checked_sub_res(&shares_burned)?;
                    market.fee_pool_weight = market.fee_pool_weight.checked_sub_res(&amount)?;

                    Ok((market.clone(), oracle_payout, shares_burned, amount))
                })?;

            match oracle_payout {
                Some(OraclePayout::Paid(oracle_fee_amount)) => {
                    if !oracle_fee_amount.is_zero() {
                        T::MultiCurrency::transfer(
                            market.collateral,
                            &market.account_id,
                            &market.oracle,
                            oracle_fee_amount,
                        )?;
                    }
                    log::debug!(
                        target: LOG_TARGET,
                        "Paid {:?} to the oracle of market {:?}",
                        oracle_fee_amount,
                        market_id,
                    );
                    Self::deposit_event(Event::<T>::OracleFeePaid {
                        market_id,
                        oracle: market.oracle.clone(),
                        amount: oracle_fee_amount,
                    });
                }
                Some(OraclePayout::Forfeited(oracle_fee_amount)) => {
                    log::warn!(
                        target: LOG_TARGET,
                        "Oracle of market {:?} can't receive {:?}; leaving it in the fee pool",
                        market_id,
                        oracle_fee_amount,
                    );
                    Self::deposit_event(Event::<T>::OracleFeeForfeited {
                        market_id,
                        oracle: market.oracle.clone(),
                        amount: oracle_fee_amount,
                    });
                }
                None => {}
            }

            if amount.is_zero() {
                log::warn!(
                    target: LOG_TARGET,
                    "Burned {:?} shares of market {:?} without payout",
                    shares_burned,
                    market_id,
                );
            } else {
                T::MultiCurrency::transfer(market.collateral, &market.account_id, &who, amount)?;
            }

            Self::deposit_event(Event::<T>::FeesRedeemed { who, market_id, shares_burned, amount });

            Ok(())
        }

        /// Returns `true` if `who` ends up with at least the minimum balance of `asset` after
        /// receiving `amount`.
        fn can_receive(asset: Asset, who: &AccountIdOf<T>, amount: BalanceOf<T>) -> bool {
            amount.is_zero()
                || T::MultiCurrency::free_balance(asset, who).saturating_add(amount)
                    >= T::MultiCurrency::minimum_balance(asset)
        }
    }
}
