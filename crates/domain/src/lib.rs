// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod countries;
mod dirty;
mod eligibility;
mod error;
mod localize;
mod numeric;
mod payload;
mod rules;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use countries::{
    CountryEntry, CountryList, PaymentMethodInfo, filter_countries_by_payment_methods,
};
pub use dirty::{DirtyCheckInputs, InitialFormSnapshot, canonical_threshold, is_form_unchanged};
pub use eligibility::{COMPLETION_RATE, JOIN_DATE, eligibility_error_message};
pub use error::DomainError;
pub use localize::{DefaultLocalizer, Localize, substitute_placeholders};
pub use numeric::{
    DecimalInput, MAX_RATE_INPUT_LENGTH, count_decimal_places, is_decimal, is_within_range,
    parse_form_number, restrict_decimal_place,
};
pub use payload::{
    AdvertPayload, AdvertTemplate, CopyFormValues, PaymentMethodLookup, build_copy_advert_payload,
};
pub use rules::{FieldAccessor, Rule, RuleSet, build_rules, rules_for, validate_form};
pub use types::{ADVERT_INACTIVE, ADVERTISER_ADS_PAUSED, AdvertType, FormField, RateType};
pub use visibility::{derive_visibility_codes, is_action_point_active, should_show_tooltip};
