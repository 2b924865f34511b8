// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advert form field validation rules.
//!
//! Each validated field gets an ordered [`RuleSet`]. Rules are evaluated in
//! declaration order and the first failing rule's message is shown to the
//! user. Cross-field rules read sibling values through a [`FieldAccessor`]
//! each time they run, so they always see the latest form state.

use crate::localize::Localize;
use crate::numeric::{count_decimal_places, is_decimal, is_within_range, parse_form_number};
use crate::types::{FormField, RateType};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

const MAX_DECIMAL_PLACES: usize = 2;

/// Read access to the current value of any form field.
pub trait FieldAccessor {
    /// Returns the current value stored under `key`, if any.
    fn get_value(&self, key: &str) -> Option<String>;
}

impl<F> FieldAccessor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get_value(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl<S: BuildHasher> FieldAccessor for HashMap<String, String, S> {
    fn get_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl FieldAccessor for BTreeMap<String, String> {
    fn get_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

type Check<'a> = Box<dyn Fn(&str) -> Result<(), String> + 'a>;

/// A single named validation rule.
pub struct Rule<'a> {
    name: &'static str,
    check: Check<'a>,
}

impl<'a> Rule<'a> {
    fn new(name: &'static str, check: impl Fn(&str) -> Result<(), String> + 'a) -> Self {
        Self {
            name,
            check: Box::new(check),
        }
    }

    /// Returns the rule identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Checks a field value against this rule.
    ///
    /// # Errors
    ///
    /// Returns the localized user-facing message if the value fails the rule.
    pub fn check(&self, value: &str) -> Result<(), String> {
        (self.check)(value)
    }
}

impl std::fmt::Debug for Rule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Ordered validation rules for one form field.
#[derive(Debug, Default)]
pub struct RuleSet<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> RuleSet<'a> {
    /// Creates a rule set that accepts every value.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    fn with(mut self, name: &'static str, check: impl Fn(&str) -> Result<(), String> + 'a) -> Self {
        self.rules.push(Rule::new(name, check));
        self
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the rule set accepts every value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rule identifiers in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Validates a value, stopping at the first failing rule.
    ///
    /// # Errors
    ///
    /// Returns the message of the first rule the value fails.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

/// Builds the rule set for the field stored under `field_key`.
///
/// Keys that are not validated fields get an empty rule set, so the field
/// is always considered valid.
#[must_use]
pub fn build_rules<'a>(
    field_key: &str,
    accessor: &'a dyn FieldAccessor,
    localizer: &'a dyn Localize,
) -> RuleSet<'a> {
    FormField::from_key(field_key).map_or_else(RuleSet::empty, |field| {
        rules_for(field, accessor, localizer)
    })
}

/// Builds the rule set for a validated field.
#[must_use]
pub fn rules_for<'a>(
    field: FormField,
    accessor: &'a dyn FieldAccessor,
    localizer: &'a dyn Localize,
) -> RuleSet<'a> {
    match field {
        FormField::Amount => amount_rules(accessor, localizer),
        FormField::RateValue => rate_value_rules(accessor, localizer),
        FormField::MinOrder => min_order_rules(accessor, localizer),
        FormField::MaxOrder => max_order_rules(accessor, localizer),
    }
}

/// Validates every form field, reading values through `accessor`.
///
/// Missing values are validated as empty. Only failing fields appear in the
/// result.
#[must_use]
pub fn validate_form(
    accessor: &dyn FieldAccessor,
    localizer: &dyn Localize,
) -> BTreeMap<FormField, String> {
    FormField::ALL
        .into_iter()
        .filter_map(|field| {
            let value: String = accessor.get_value(field.key()).unwrap_or_default();
            rules_for(field, accessor, localizer)
                .validate(&value)
                .err()
                .map(|message| (field, message))
        })
        .collect()
}

fn amount_rules<'a>(accessor: &'a dyn FieldAccessor, localizer: &'a dyn Localize) -> RuleSet<'a> {
    RuleSet::empty()
        .with("required", move |value| {
            required(value, &localizer.localize("Amount", &[]), localizer)
        })
        .with("numeric", move |value| {
            numeric(value, "Enter a valid amount", localizer)
        })
        .with("decimal_places", move |value| decimal_places(value, localizer))
        .with("not_below_min_order", move |value| {
            fail_if(
                compare_sibling(value, FormField::MinOrder, accessor, |own, other| own < other),
                "Amount should not be below Min limit",
                localizer,
            )
        })
        .with("not_below_max_order", move |value| {
            fail_if(
                compare_sibling(value, FormField::MaxOrder, accessor, |own, other| own < other),
                "Amount should not be below Max limit",
                localizer,
            )
        })
}

fn rate_value_rules<'a>(
    accessor: &'a dyn FieldAccessor,
    localizer: &'a dyn Localize,
) -> RuleSet<'a> {
    RuleSet::empty()
        .with("required", move |value| {
            let label: &str = if selected_rate_type(accessor) == Some(RateType::Fixed) {
                "Fixed rate"
            } else {
                "Floating rate"
            };
            required(value, &localizer.localize(label, &[]), localizer)
        })
        .with("numeric", move |value| {
            numeric(value, "Enter a valid amount", localizer)
        })
        .with("decimal_places", move |value| {
            if selected_rate_type(accessor) == Some(RateType::Fixed) {
                decimal_places(value, localizer)
            } else {
                Ok(())
            }
        })
        .with("within_offset_limit", move |value| {
            if value.is_empty() || selected_rate_type(accessor) != Some(RateType::Float) {
                return Ok(());
            }

            // An absent limit fails the range check.
            let limit_value: Option<String> =
                accessor.get_value(FormField::FLOAT_RATE_OFFSET_LIMIT_KEY);
            let limit: Option<f64> = limit_value.as_deref().and_then(parse_form_number);
            let within: bool = match (parse_form_number(value), limit) {
                (Some(rate), Some(limit)) => is_within_range(rate, limit),
                _ => false,
            };

            if within {
                Ok(())
            } else {
                Err(localizer.localize(
                    "Enter a value that's within -{{limitValue}}% to +{{limitValue}}%",
                    &[("limitValue", limit_value.unwrap_or_default())],
                ))
            }
        })
}

fn min_order_rules<'a>(
    accessor: &'a dyn FieldAccessor,
    localizer: &'a dyn Localize,
) -> RuleSet<'a> {
    RuleSet::empty()
        .with("required", move |value| {
            required(value, &localizer.localize("Min limit", &[]), localizer)
        })
        .with("numeric", move |value| {
            numeric(value, "Only numbers are allowed.", localizer)
        })
        .with("decimal_places", move |value| decimal_places(value, localizer))
        .with("not_above_amount", move |value| {
            fail_if(
                compare_sibling(value, FormField::Amount, accessor, |own, other| own > other),
                "Min limit should not exceed Amount",
                localizer,
            )
        })
        .with("not_above_max_order", move |value| {
            fail_if(
                compare_sibling(value, FormField::MaxOrder, accessor, |own, other| own > other),
                "Min limit should not exceed Max limit",
                localizer,
            )
        })
}

fn max_order_rules<'a>(
    accessor: &'a dyn FieldAccessor,
    localizer: &'a dyn Localize,
) -> RuleSet<'a> {
    RuleSet::empty()
        .with("required", move |value| {
            required(value, &localizer.localize("Max limit", &[]), localizer)
        })
        .with("numeric", move |value| {
            numeric(value, "Only numbers are allowed.", localizer)
        })
        .with("decimal_places", move |value| decimal_places(value, localizer))
        .with("not_above_amount", move |value| {
            fail_if(
                compare_sibling(value, FormField::Amount, accessor, |own, other| own > other),
                "Max limit should not exceed Amount",
                localizer,
            )
        })
        .with("not_below_min_order", move |value| {
            fail_if(
                compare_sibling(value, FormField::MinOrder, accessor, |own, other| own < other),
                "Max limit should not be below Min limit",
                localizer,
            )
        })
}

fn required(value: &str, label: &str, localizer: &dyn Localize) -> Result<(), String> {
    if value.is_empty() {
        return Err(localizer.localize("{{field}} is required", &[("field", label.to_string())]));
    }
    Ok(())
}

fn numeric(value: &str, message: &str, localizer: &dyn Localize) -> Result<(), String> {
    if parse_form_number(value).is_none() {
        return Err(localizer.localize(message, &[]));
    }
    Ok(())
}

fn decimal_places(value: &str, localizer: &dyn Localize) -> Result<(), String> {
    let positive: bool = parse_form_number(value).is_some_and(|number| number > 0.0);
    if positive && is_decimal(value) && count_decimal_places(value) <= MAX_DECIMAL_PLACES {
        return Ok(());
    }
    Err(localizer.localize("Only up to 2 decimals are allowed.", &[]))
}

fn fail_if(failed: bool, message: &str, localizer: &dyn Localize) -> Result<(), String> {
    if failed {
        return Err(localizer.localize(message, &[]));
    }
    Ok(())
}

/// Compares a value with a sibling field, if the sibling is set.
///
/// Unset siblings and values that are not numbers never fail a comparison.
fn compare_sibling(
    value: &str,
    sibling: FormField,
    accessor: &dyn FieldAccessor,
    fails: impl Fn(f64, f64) -> bool,
) -> bool {
    let Some(other) = accessor
        .get_value(sibling.key())
        .filter(|other| !other.is_empty())
    else {
        return false;
    };

    match (parse_form_number(value), parse_form_number(&other)) {
        (Some(own), Some(other)) => fails(own, other),
        _ => false,
    }
}

fn selected_rate_type(accessor: &dyn FieldAccessor) -> Option<RateType> {
    accessor
        .get_value(FormField::RATE_TYPE_KEY)
        .and_then(|rate_type| rate_type.parse().ok())
}
