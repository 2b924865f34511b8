// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting advert data.
///
/// Field validation failures are not errors; they are user-facing
/// messages returned by the rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rate type string is not recognized.
    InvalidRateType(String),
    /// Advert type string is not recognized.
    InvalidAdvertType(String),
    /// A form value could not be interpreted as a number.
    InvalidNumber {
        /// The form field the value came from.
        field: String,
        /// The raw value.
        value: String,
    },
    /// A payment method name has no known identifier.
    UnknownPaymentMethod {
        /// The payment method name.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRateType(value) => write!(f, "Invalid rate type: {value}"),
            Self::InvalidAdvertType(value) => write!(f, "Invalid advert type: {value}"),
            Self::InvalidNumber { field, value } => {
                write!(f, "Value '{value}' for field '{field}' is not a valid number")
            }
            Self::UnknownPaymentMethod { name } => {
                write!(f, "Payment method '{name}' is not available")
            }
        }
    }
}

impl std::error::Error for DomainError {}
