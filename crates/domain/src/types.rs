// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Visibility code attached to an advert whose rate type no longer matches
/// the rate type currently in effect.
pub const ADVERT_INACTIVE: &str = "advert_inactive";

/// Visibility code attached to an advert that is not listed.
pub const ADVERTISER_ADS_PAUSED: &str = "advertiser_ads_paused";

/// Pricing mode of an advert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// The advert is priced at a fixed exchange rate.
    #[default]
    Fixed,
    /// The advert is priced as a percentage offset from the market rate.
    Float,
}

impl RateType {
    /// Converts this rate type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Float => "float",
        }
    }
}

impl FromStr for RateType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "float" => Ok(Self::Float),
            _ => Err(DomainError::InvalidRateType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of an advert, from the advertiser's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvertType {
    /// The advertiser buys; counterparties pay with any listed method.
    Buy,
    /// The advertiser sells; counterparties pay into the advertiser's methods.
    Sell,
}

impl AdvertType {
    /// Converts this advert type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl FromStr for AdvertType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(DomainError::InvalidAdvertType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AdvertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The validated fields of the advert form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// Total advert amount.
    Amount,
    /// Fixed rate, or floating offset percentage.
    RateValue,
    /// Minimum order limit.
    MinOrder,
    /// Maximum order limit.
    MaxOrder,
}

impl FormField {
    /// Every validated field, in form order.
    pub const ALL: [Self; 4] = [Self::Amount, Self::RateValue, Self::MinOrder, Self::MaxOrder];

    /// Sibling key holding the selected rate type (`fixed` or `float`).
    pub const RATE_TYPE_KEY: &'static str = "rate-type-string";

    /// Sibling key holding the allowed floating offset, in percent.
    pub const FLOAT_RATE_OFFSET_LIMIT_KEY: &'static str = "float-rate-offset-limit";

    /// Returns the form key of this field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::RateValue => "rate-value",
            Self::MinOrder => "min-order",
            Self::MaxOrder => "max-order",
        }
    }

    /// Looks up a field by its form key.
    ///
    /// Returns `None` for keys that carry no validation rules.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
