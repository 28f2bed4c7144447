//! Serde adapters for 128-bit integers.
//!
//! Liquidity and price values routinely exceed 2^53, so they are written as
//! decimal strings. Plain JSON numbers are accepted on input.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum<T> {
    Str(String),
    Num(T),
}

fn parse<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    match StrOrNum::<T>::deserialize(deserializer)? {
        StrOrNum::Str(s) => s
            .trim()
            .parse::<T>()
            .map_err(|e| D::Error::custom(format!("invalid integer '{s}': {e}"))),
        StrOrNum::Num(n) => Ok(n),
    }
}

pub mod u128_str {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        parse(deserializer)
    }
}

pub mod i128_str {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        parse(deserializer)
    }
}

pub mod opt_u128_str {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<u128>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u128>, D::Error> {
        match Option::<StrOrNum<u128>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(StrOrNum::Num(n)) => Ok(Some(n)),
            Some(StrOrNum::Str(s)) => s
                .trim()
                .parse::<u128>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid integer '{s}': {e}"))),
        }
    }
}
