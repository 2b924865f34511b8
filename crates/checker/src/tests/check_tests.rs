// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AdvertCheckReport, AdvertCheckRequest, CheckOptions, CheckerError, RateInputReport,
    check_advert, load_request,
};
use p2p_ads_domain::{ADVERT_INACTIVE, ADVERTISER_ADS_PAUSED, DefaultLocalizer, DomainError};

const FULL_DOCUMENT: &str = r#"{
    "fields": {
        "amount": "100",
        "rate-type-string": "float",
        "float-rate-offset-limit": "5",
        "rate-value": "-2.5",
        "min-order": "10",
        "max-order": "50"
    },
    "advert": {
        "visibility_status": ["advert_remaining"],
        "is_listed": false,
        "rate_type": "fixed",
        "current_rate_type": "float"
    },
    "dirty_check": {
        "initial": {
            "payment_methods": ["skrill", "bank_transfer"],
            "selected_countries": ["ng"],
            "min_completion_rate": "80"
        },
        "current": {
            "payment_methods": ["bank_transfer", "skrill"],
            "preferred_countries": ["ng"],
            "min_completion_rate": "80",
            "is_dirty": false,
            "rate_type": "float",
            "advert_rate_type": "float"
        }
    },
    "countries": {
        "country_list": {
            "ng": { "country_name": "Nigeria", "payment_methods": { "bank_transfer": {} } },
            "za": { "country_name": "South Africa", "payment_methods": { "skrill": {} } }
        },
        "payment_methods": ["bank_transfer"]
    },
    "eligibility_codes": ["join_date"],
    "rate_input": "12.345"
}"#;

fn load(document: &str) -> AdvertCheckRequest {
    load_request(document.as_bytes(), "test").unwrap()
}

fn run(request: &AdvertCheckRequest) -> AdvertCheckReport {
    check_advert(request, &CheckOptions::default(), &DefaultLocalizer).unwrap()
}

#[test]
fn test_full_document_runs_every_check() {
    let report: AdvertCheckReport = run(&load(FULL_DOCUMENT));

    assert!(report.valid);
    assert!(report.field_errors.is_empty());

    let visibility = report.visibility.unwrap();
    assert!(visibility.action_point_active);
    assert_eq!(
        visibility.codes,
        vec!["advert_remaining", ADVERTISER_ADS_PAUSED, ADVERT_INACTIVE]
    );
    assert!(visibility.show_tooltip);

    assert_eq!(report.form_unchanged, Some(true));
    assert_eq!(report.countries, Some(vec![String::from("ng")]));
    assert_eq!(
        report.eligibility_message.as_deref(),
        Some("You've not used Deriv P2P long enough for this ad.")
    );
    assert_eq!(report.rate_input, Some(RateInputReport::Reject));
    assert_eq!(report.copy_payload, None);
}

#[test]
fn test_field_errors_are_keyed_by_form_name() {
    let request: AdvertCheckRequest = load(
        r#"{ "fields": { "amount": "10.555", "rate-type-string": "fixed", "rate-value": "1" } }"#,
    );
    let report: AdvertCheckReport = run(&request);

    assert!(!report.valid);
    assert_eq!(
        report.field_errors.get("amount").map(String::as_str),
        Some("Only up to 2 decimals are allowed.")
    );
    assert_eq!(
        report.field_errors.get("min-order").map(String::as_str),
        Some("Min limit is required")
    );
    assert!(!report.field_errors.contains_key("rate-value"));
    assert_eq!(report.visibility, None);
}

#[test]
fn test_offset_limit_option_overrides_document() {
    let request: AdvertCheckRequest = load(FULL_DOCUMENT);
    let options = CheckOptions {
        offset_limit: Some(2.0),
    };
    let report = check_advert(&request, &options, &DefaultLocalizer).unwrap();

    assert_eq!(
        report.field_errors.get("rate-value").map(String::as_str),
        Some("Enter a value that's within -2% to +2%")
    );
}

#[test]
fn test_negative_offset_limit_is_rejected() {
    let options = CheckOptions {
        offset_limit: Some(-1.0),
    };
    let result = check_advert(&AdvertCheckRequest::default(), &options, &DefaultLocalizer);
    assert!(matches!(result, Err(CheckerError::InvalidOffsetLimit(_))));
}

#[test]
fn test_copy_section_builds_payload() {
    let request: AdvertCheckRequest = load(
        r#"{
            "copy": {
                "template": {
                    "type": "sell",
                    "rate_type": "fixed",
                    "payment_method_names": ["Skrill"],
                    "contact_info": "+234 555",
                    "min_completion_rate": 90
                },
                "values": { "amount": "100", "max_order": "40", "min_order": "5", "rate_value": "1.2" },
                "advertiser_methods": { "Skrill": "17" }
            }
        }"#,
    );
    let payload = run(&request).copy_payload.unwrap();

    assert_eq!(payload.payment_method_ids, Some(vec![String::from("17")]));
    assert_eq!(payload.contact_info.as_deref(), Some("+234 555"));
    assert_eq!(payload.min_completion_rate, Some(90.0));
    assert_eq!(payload.min_join_days, None);
}

#[test]
fn test_copy_with_unknown_method_fails() {
    let request: AdvertCheckRequest = load(
        r#"{
            "copy": {
                "template": { "type": "buy", "rate_type": "fixed", "payment_method_names": ["Skrill"] },
                "values": { "amount": "100", "max_order": "40", "min_order": "5", "rate_value": "1.2" }
            }
        }"#,
    );
    let result = check_advert(&request, &CheckOptions::default(), &DefaultLocalizer);
    assert!(matches!(
        result,
        Err(CheckerError::Domain(DomainError::UnknownPaymentMethod { .. }))
    ));
}

#[test]
fn test_rate_input_report_serialization() {
    let request: AdvertCheckRequest = load(r#"{ "rate_input": "123456789" }"#);
    let report = run(&request);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["rate_input"]["outcome"], "truncate");
    assert_eq!(json["rate_input"]["value"], "12345678");
    assert!(json.get("visibility").is_none());
}

#[test]
fn test_malformed_document_is_rejected() {
    let result = load_request(&b"{ \"fields\": [] }"[..], "test");
    assert!(matches!(result, Err(CheckerError::Document(_))));
}
