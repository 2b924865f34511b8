// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AdvertType, DomainError, FormField, RateType};
use std::str::FromStr;

#[test]
fn test_rate_type_round_trips_through_strings() {
    for rate_type in [RateType::Fixed, RateType::Float] {
        assert_eq!(RateType::from_str(rate_type.as_str()), Ok(rate_type));
    }
    assert_eq!(
        "floating".parse::<RateType>(),
        Err(DomainError::InvalidRateType(String::from("floating")))
    );
}

#[test]
fn test_rate_type_serializes_as_wire_string() {
    assert_eq!(serde_json::to_string(&RateType::Float).unwrap(), "\"float\"");
    let parsed: RateType = serde_json::from_str("\"fixed\"").unwrap();
    assert_eq!(parsed, RateType::Fixed);
}

#[test]
fn test_advert_type_parsing() {
    assert_eq!("buy".parse::<AdvertType>(), Ok(AdvertType::Buy));
    assert_eq!("sell".parse::<AdvertType>(), Ok(AdvertType::Sell));
    assert!(matches!(
        "Buy".parse::<AdvertType>(),
        Err(DomainError::InvalidAdvertType(_))
    ));
}

#[test]
fn test_form_field_keys() {
    assert_eq!(FormField::from_key("amount"), Some(FormField::Amount));
    assert_eq!(FormField::from_key("rate-value"), Some(FormField::RateValue));
    assert_eq!(FormField::from_key("min-order"), Some(FormField::MinOrder));
    assert_eq!(FormField::from_key("max-order"), Some(FormField::MaxOrder));
    assert_eq!(FormField::from_key(FormField::RATE_TYPE_KEY), None);
    assert_eq!(FormField::MaxOrder.to_string(), "max-order");
}
