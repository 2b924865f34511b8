// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Countries keyed by country code.
pub type CountryList = BTreeMap<String, CountryEntry>;

/// A payment method offered in a country.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodInfo {
    /// Name shown to users.
    pub display_name: String,
    /// Method category, e.g. `bank` or `ewallet`.
    #[serde(rename = "type")]
    pub method_type: String,
}

/// Marketplace settings for one country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryEntry {
    /// Country name.
    pub country_name: String,
    /// Local currency code.
    pub local_currency: String,
    /// Allowed floating rate offset, in percent.
    pub float_rate_offset_limit: Option<f64>,
    /// Payment methods available in the country, keyed by method id.
    pub payment_methods: BTreeMap<String, PaymentMethodInfo>,
}

/// Keeps the countries that support at least one of `payment_methods`.
///
/// With no payment methods to filter by, the list is returned unchanged.
#[must_use]
pub fn filter_countries_by_payment_methods<S: AsRef<str>>(
    country_list: &CountryList,
    payment_methods: Option<&[S]>,
) -> CountryList {
    let Some(methods) = payment_methods.filter(|methods| !methods.is_empty()) else {
        return country_list.clone();
    };

    country_list
        .iter()
        .filter(|(_, entry)| {
            methods
                .iter()
                .any(|method| entry.payment_methods.contains_key(method.as_ref()))
        })
        .map(|(code, entry)| (code.clone(), entry.clone()))
        .collect()
}
