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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod request;

#[cfg(test)]
mod tests;

pub use error::CheckerError;
pub use request::{
    AdvertCheckReport, AdvertCheckRequest, AdvertListing, CopyAdvert, CountryFilter, DirtyCheck,
    RateInputReport, VisibilityReport,
};

use p2p_ads_domain::{
    FormField, Localize, build_copy_advert_payload, derive_visibility_codes,
    eligibility_error_message, filter_countries_by_payment_methods, is_action_point_active,
    is_form_unchanged, restrict_decimal_place, should_show_tooltip, validate_form,
};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::{debug, info};

/// Options applied to every checked document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckOptions {
    /// Replaces the document's floating rate offset limit, in percent.
    pub offset_limit: Option<f64>,
}

impl CheckOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::InvalidOffsetLimit` if the offset limit is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), CheckerError> {
        match self.offset_limit {
            Some(limit) if !limit.is_finite() || limit < 0.0 => {
                Err(CheckerError::InvalidOffsetLimit(limit))
            }
            _ => Ok(()),
        }
    }
}

/// Parses an advert check document.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a valid document.
pub fn load_request(
    mut reader: impl Read,
    source_name: &str,
) -> Result<AdvertCheckRequest, CheckerError> {
    let mut raw: String = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|source| CheckerError::Read {
            source_name: source_name.to_string(),
            source,
        })?;

    let request: AdvertCheckRequest = serde_json::from_str(&raw)?;
    debug!(source = source_name, fields = request.fields.len(), "Loaded advert document");
    Ok(request)
}

/// Runs every check the document asks for.
///
/// # Errors
///
/// Returns an error if the options are invalid or the copy section cannot
/// be turned into a create request.
pub fn check_advert(
    request: &AdvertCheckRequest,
    options: &CheckOptions,
    localizer: &dyn Localize,
) -> Result<AdvertCheckReport, CheckerError> {
    options.validate()?;

    let mut fields = request.fields.clone();
    if let Some(limit) = options.offset_limit {
        debug!(limit, "Overriding floating rate offset limit");
        fields.insert(
            FormField::FLOAT_RATE_OFFSET_LIMIT_KEY.to_string(),
            limit.to_string(),
        );
    }

    let field_errors: BTreeMap<String, String> = validate_form(&fields, localizer)
        .into_iter()
        .map(|(field, message)| {
            debug!(field = field.key(), %message, "Field failed validation");
            (field.key().to_string(), message)
        })
        .collect();

    let mut report: AdvertCheckReport = AdvertCheckReport {
        valid: field_errors.is_empty(),
        field_errors,
        ..AdvertCheckReport::default()
    };

    if let Some(advert) = &request.advert {
        let action_point_active: bool =
            is_action_point_active(advert.rate_type, advert.current_rate_type);
        let codes: Vec<String> = derive_visibility_codes(
            &advert.visibility_status,
            action_point_active,
            advert.is_listed,
        );
        report.visibility = Some(VisibilityReport {
            show_tooltip: should_show_tooltip(&codes),
            codes,
            action_point_active,
        });
    }

    if let Some(dirty_check) = &request.dirty_check {
        report.form_unchanged = Some(is_form_unchanged(&dirty_check.initial, &dirty_check.current));
    }

    if let Some(filter) = &request.countries {
        let eligible = filter_countries_by_payment_methods(
            &filter.country_list,
            Some(filter.payment_methods.as_slice()),
        );
        report.countries = Some(eligible.into_keys().collect());
    }

    if let Some(codes) = &request.eligibility_codes {
        report.eligibility_message = Some(eligibility_error_message(codes, localizer));
    }

    if let Some(rate_input) = &request.rate_input {
        report.rate_input = Some(restrict_decimal_place(rate_input).into());
    }

    if let Some(copy) = &request.copy {
        report.copy_payload = Some(build_copy_advert_payload(
            &copy.template,
            &copy.values,
            &copy.marketplace_methods,
            &copy.advertiser_methods,
        )?);
    }

    info!(
        valid = report.valid,
        errors = report.field_errors.len(),
        "Advert check complete"
    );
    Ok(report)
}
