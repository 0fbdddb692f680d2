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

use crate::types::{Asset, CombinatorialId};
use alloc::{vec, vec::Vec};
use frame_support::{Blake2_256, StorageHasher};
use parity_scale_codec::Encode;

pub trait ToBytes {
    fn to_bytes(&self) -> Vec<u8>;
}

pub trait HashTuple {
    fn hash_tuple<T1, T2>(tuple: (T1, T2)) -> CombinatorialId
    where
        T1: ToBytes,
        T2: ToBytes;
}

impl HashTuple for Blake2_256 {
    fn hash_tuple<T1, T2>(tuple: (T1, T2)) -> CombinatorialId
    where
        T1: ToBytes,
        T2: ToBytes,
    {
        Blake2_256::hash(&tuple.to_bytes())
    }
}

/// Implements `ToBytes` for any type implementing `to_be_bytes`.
macro_rules! impl_to_bytes {
    ($($t:ty),*) => {
        $(
            impl ToBytes for $t {
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
            }
        )*
    };
}

impl_to_bytes!(u8, u16, u32, u64, u128);

impl ToBytes for bool {
    fn to_bytes(&self) -> Vec<u8> {
        vec![*self as u8]
    }
}

impl ToBytes for CombinatorialId {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<T> ToBytes for Vec<T>
where
    T: ToBytes,
{
    fn to_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(|x| x.to_bytes()).collect()
    }
}

impl<T1, T2> ToBytes for (T1, T2)
where
    T1: ToBytes,
    T2: ToBytes,
{
    fn to_bytes(&self) -> Vec<u8> {
        let mut result = self.0.to_bytes();
        result.extend_from_slice(&self.1.to_bytes());
        result
    }
}

/// Beware! All changes to this implementation need to be backwards compatible. Failure to follow
/// this restriction will result in positions changing IDs between versions, causing unreachable
/// funds.
impl ToBytes for Asset {
    fn to_bytes(&self) -> Vec<u8> {
        self.encode()
    }
}
