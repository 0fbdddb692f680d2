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

use crate::{traits::MarketStorage, Config, Error, MarketOf, Markets, Pallet};
use sp_runtime::DispatchError;

impl<T> MarketStorage for Pallet<T>
where
    T: Config,
{
    type MarketId = T::MarketId;
    type Market = MarketOf<T>;

    fn get(market_id: Self::MarketId) -> Result<Self::Market, DispatchError> {
        Markets::<T>::get(market_id).ok_or(Error::<T>::MarketNotFound.into())
    }

    fn try_mutate_market<R, F>(market_id: &Self::MarketId, mutator: F) -> Result<R, DispatchError>
    where
        F: FnMut(&mut MarketOf<T>) -> Result<R, DispatchError>,
    {
        Markets::<T>::try_mutate(market_id, |maybe_market| {
            maybe_market.as_mut().ok_or(Error::<T>::MarketNotFound.into()).and_then(mutator)
        })
    }
}
