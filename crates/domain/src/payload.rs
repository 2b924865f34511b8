// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Create-advert request built when an advertiser copies an existing advert.
//!
//! The copy keeps the source advert's direction, rate type, eligibility
//! conditions and payment methods, and takes amount, limits and rate from
//! the copy form.

use crate::error::DomainError;
use crate::numeric::parse_form_number;
use crate::types::{AdvertType, FormField, RateType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payment method identifiers keyed by method name.
pub type PaymentMethodLookup = BTreeMap<String, String>;

/// The advert being copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertTemplate {
    /// Advert direction.
    #[serde(rename = "type")]
    pub advert_type: AdvertType,
    /// Pricing mode.
    pub rate_type: RateType,
    /// Countries the advert is restricted to.
    #[serde(default)]
    pub eligible_countries: Vec<String>,
    /// Names of the payment methods on the advert.
    #[serde(default)]
    pub payment_method_names: Vec<String>,
    /// Advertiser contact details (sell adverts).
    #[serde(default)]
    pub contact_info: Option<String>,
    /// Advert instructions.
    #[serde(default)]
    pub description: Option<String>,
    /// Minimum counterparty completion rate; zero means none.
    #[serde(default)]
    pub min_completion_rate: f64,
    /// Minimum counterparty account age in days; zero means none.
    #[serde(default)]
    pub min_join_days: u32,
}

/// Values entered on the copy form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyFormValues {
    /// Total advert amount.
    pub amount: String,
    /// Maximum order limit.
    pub max_order: String,
    /// Minimum order limit.
    pub min_order: String,
    /// Rate value.
    pub rate_value: String,
}

/// Create-advert request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertPayload {
    /// Total advert amount.
    pub amount: f64,
    /// Countries the advert is restricted to.
    pub eligible_countries: Vec<String>,
    /// Maximum order amount.
    pub max_order_amount: f64,
    /// Minimum order amount.
    pub min_order_amount: f64,
    /// Rate or floating offset.
    pub rate: f64,
    /// Pricing mode.
    pub rate_type: RateType,
    /// Advert direction.
    #[serde(rename = "type")]
    pub advert_type: AdvertType,
    /// Payment method ids from the marketplace list (buy adverts).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payment_method_names: Option<Vec<String>>,
    /// Ids of the advertiser's own payment methods (sell adverts).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payment_method_ids: Option<Vec<String>>,
    /// Advertiser contact details (sell adverts).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_info: Option<String>,
    /// Advert instructions.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Minimum counterparty completion rate.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_completion_rate: Option<f64>,
    /// Minimum counterparty account age in days.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_join_days: Option<u32>,
}

/// Builds the create-advert request for a copied advert.
///
/// Buy adverts resolve payment method names through `marketplace_methods`;
/// sell adverts resolve them through `advertiser_methods` and carry the
/// contact details.
///
/// # Errors
///
/// Returns an error if a form value is not a number or a payment method
/// name cannot be resolved.
pub fn build_copy_advert_payload(
    template: &AdvertTemplate,
    values: &CopyFormValues,
    marketplace_methods: &PaymentMethodLookup,
    advertiser_methods: &PaymentMethodLookup,
) -> Result<AdvertPayload, DomainError> {
    let mut payload: AdvertPayload = AdvertPayload {
        amount: form_number(FormField::Amount, &values.amount)?,
        eligible_countries: template.eligible_countries.clone(),
        max_order_amount: form_number(FormField::MaxOrder, &values.max_order)?,
        min_order_amount: form_number(FormField::MinOrder, &values.min_order)?,
        rate: form_number(FormField::RateValue, &values.rate_value)?,
        rate_type: template.rate_type,
        advert_type: template.advert_type,
        payment_method_names: None,
        payment_method_ids: None,
        contact_info: None,
        description: None,
        min_completion_rate: None,
        min_join_days: None,
    };

    match template.advert_type {
        AdvertType::Buy => {
            payload.payment_method_names = Some(resolve_methods(
                &template.payment_method_names,
                marketplace_methods,
            )?);
        }
        AdvertType::Sell => {
            payload.contact_info.clone_from(&template.contact_info);
            payload.payment_method_ids = Some(resolve_methods(
                &template.payment_method_names,
                advertiser_methods,
            )?);
        }
    }

    payload.description = template
        .description
        .clone()
        .filter(|description| !description.is_empty());

    if template.min_completion_rate > 0.0 {
        payload.min_completion_rate = Some(template.min_completion_rate);
    }
    if template.min_join_days > 0 {
        payload.min_join_days = Some(template.min_join_days);
    }

    Ok(payload)
}

fn form_number(field: FormField, value: &str) -> Result<f64, DomainError> {
    parse_form_number(value).ok_or_else(|| DomainError::InvalidNumber {
        field: field.key().to_string(),
        value: value.to_string(),
    })
}

fn resolve_methods(
    names: &[String],
    lookup: &PaymentMethodLookup,
) -> Result<Vec<String>, DomainError> {
    names
        .iter()
        .map(|name| {
            lookup
                .get(name)
                .cloned()
                .ok_or_else(|| DomainError::UnknownPaymentMethod { name: name.clone() })
        })
        .collect()
}
