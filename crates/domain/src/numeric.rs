// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Numeric interpretation of form input strings.
//!
//! Form inputs arrive as text. These helpers decide whether a value is a
//! number, how many decimals it carries, and whether a keystroke should be
//! accepted by the rate input.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of characters the rate input keeps.
pub const MAX_RATE_INPUT_LENGTH: usize = 8;

// Patterns are literals; compilation cannot fail.
#[allow(clippy::expect_used)]
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("decimal literal pattern")
});

#[allow(clippy::expect_used)]
static RATE_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]{0,4}(\.[0-9]{0,2})?$").expect("rate input pattern")
});

/// Interprets a form value as a number.
///
/// Surrounding whitespace is ignored and an empty value reads as zero.
/// Returns `None` when the value is not a finite number.
#[must_use]
pub fn parse_form_number(value: &str) -> Option<f64> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Returns true if `value` is a plain decimal literal such as `12`, `-3.5`
/// or `.25`.
#[must_use]
pub fn is_decimal(value: &str) -> bool {
    DECIMAL_LITERAL.is_match(value)
}

/// Counts the characters after the decimal point.
#[must_use]
pub fn count_decimal_places(value: &str) -> usize {
    value
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().count())
}

/// Returns true if `value` lies within `-limit..=limit`.
#[must_use]
pub fn is_within_range(value: f64, limit: f64) -> bool {
    value >= -limit && value <= limit
}

/// Outcome of filtering a keystroke in the rate input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalInput {
    /// The value is well-formed and should be forwarded.
    Accept,
    /// The value is too long; the input is reset to the kept prefix and
    /// the change is not forwarded.
    Truncate(String),
    /// The value is malformed and the change is dropped.
    Reject,
}

/// Filters a rate input value.
///
/// Values longer than [`MAX_RATE_INPUT_LENGTH`] characters are cut back.
/// Otherwise the value is accepted when it has an optional sign, at most
/// four integer digits and at most two decimals.
#[must_use]
pub fn restrict_decimal_place(value: &str) -> DecimalInput {
    if value.chars().count() > MAX_RATE_INPUT_LENGTH {
        return DecimalInput::Truncate(value.chars().take(MAX_RATE_INPUT_LENGTH).collect());
    }

    if RATE_INPUT.is_match(value) {
        DecimalInput::Accept
    } else {
        DecimalInput::Reject
    }
}
