// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advert check documents and reports.

use p2p_ads_domain::{
    AdvertPayload, AdvertTemplate, CopyFormValues, CountryList, DecimalInput, DirtyCheckInputs,
    InitialFormSnapshot, PaymentMethodLookup, RateType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the checker evaluates for one advert form.
///
/// Only `fields` is required; each optional section enables one check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvertCheckRequest {
    /// Form values keyed by form field name, including the
    /// `rate-type-string` and `float-rate-offset-limit` siblings.
    pub fields: BTreeMap<String, String>,
    /// Listing state of the advert being edited.
    pub advert: Option<AdvertListing>,
    /// Snapshot and current values for unsaved-change detection.
    pub dirty_check: Option<DirtyCheck>,
    /// Country list to narrow by payment method.
    pub countries: Option<CountryFilter>,
    /// Eligibility codes returned for a counterparty.
    pub eligibility_codes: Option<Vec<String>>,
    /// Raw rate input to filter.
    pub rate_input: Option<String>,
    /// Advert to copy into a new create request.
    pub copy: Option<CopyAdvert>,
}

/// Listing state of an advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertListing {
    /// Visibility codes reported by the marketplace.
    #[serde(default)]
    pub visibility_status: Vec<String>,
    /// Whether the advertiser's adverts are listed.
    #[serde(default = "listed_by_default")]
    pub is_listed: bool,
    /// Rate type the advert was created with.
    pub rate_type: RateType,
    /// Rate type currently in effect for the advert's country.
    pub current_rate_type: RateType,
}

const fn listed_by_default() -> bool {
    true
}

/// Inputs for unsaved-change detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtyCheck {
    /// Values captured when the form opened.
    pub initial: InitialFormSnapshot,
    /// Values now on the form.
    pub current: DirtyCheckInputs,
}

/// Country list narrowed by the selected payment methods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryFilter {
    /// Countries keyed by country code.
    pub country_list: CountryList,
    /// Selected payment method ids.
    pub payment_methods: Vec<String>,
}

/// An advert copy request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyAdvert {
    /// The advert being copied.
    pub template: AdvertTemplate,
    /// Values entered on the copy form.
    pub values: CopyFormValues,
    /// Marketplace payment method ids keyed by name.
    #[serde(default)]
    pub marketplace_methods: PaymentMethodLookup,
    /// Advertiser payment method ids keyed by name.
    #[serde(default)]
    pub advertiser_methods: PaymentMethodLookup,
}

/// Result of checking an advert document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvertCheckReport {
    /// True when no form field failed validation.
    pub valid: bool,
    /// First failing rule message, keyed by form field name.
    pub field_errors: BTreeMap<String, String>,
    /// Derived visibility state.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visibility: Option<VisibilityReport>,
    /// Whether the form holds no unsaved changes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub form_unchanged: Option<bool>,
    /// Country codes supporting the selected payment methods.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub countries: Option<Vec<String>>,
    /// Eligibility explanation for the counterparty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub eligibility_message: Option<String>,
    /// Outcome of the rate input filter.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rate_input: Option<RateInputReport>,
    /// Create request for the copied advert.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub copy_payload: Option<AdvertPayload>,
}

/// Derived visibility state of an advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityReport {
    /// Visibility codes to display.
    pub codes: Vec<String>,
    /// Whether the rate type needs advertiser action.
    pub action_point_active: bool,
    /// Whether the row shows a tooltip icon.
    pub show_tooltip: bool,
}

/// Outcome of filtering a rate input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum RateInputReport {
    /// The input is forwarded as typed.
    Accept,
    /// The input is cut back to the contained value.
    Truncate(String),
    /// The input is dropped.
    Reject,
}

impl From<DecimalInput> for RateInputReport {
    fn from(input: DecimalInput) -> Self {
        match input {
            DecimalInput::Accept => Self::Accept,
            DecimalInput::Truncate(kept) => Self::Truncate(kept),
            DecimalInput::Reject => Self::Reject,
        }
    }
}
