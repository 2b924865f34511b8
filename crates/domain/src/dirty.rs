// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Detection of unsaved changes on the advert edit form.

use crate::numeric::parse_form_number;
use crate::types::RateType;
use serde::{Deserialize, Serialize};

/// Field values captured when the advert form opens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialFormSnapshot {
    /// Selected payment method identifiers.
    pub payment_methods: Vec<String>,
    /// Selected preferred countries.
    pub selected_countries: Vec<String>,
    /// Minimum completion rate, if one was set.
    pub min_completion_rate: Option<String>,
    /// Minimum join days, if set.
    pub min_join_days: Option<String>,
}

impl InitialFormSnapshot {
    /// Captures a snapshot, normalizing the threshold values.
    #[must_use]
    pub fn capture(
        payment_methods: Vec<String>,
        selected_countries: Vec<String>,
        min_completion_rate: Option<&str>,
        min_join_days: Option<&str>,
    ) -> Self {
        Self {
            payment_methods,
            selected_countries,
            min_completion_rate: canonical_threshold(min_completion_rate),
            min_join_days: canonical_threshold(min_join_days),
        }
    }
}

/// Current form state compared against an [`InitialFormSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirtyCheckInputs {
    /// Currently selected payment method identifiers.
    pub payment_methods: Vec<String>,
    /// Currently selected preferred countries.
    pub preferred_countries: Vec<String>,
    /// Current minimum completion rate.
    pub min_completion_rate: Option<String>,
    /// Current minimum join days.
    pub min_join_days: Option<String>,
    /// Whether the form layer saw any other field change.
    pub is_dirty: bool,
    /// Rate type currently selected on the form.
    pub rate_type: RateType,
    /// Rate type the advert was saved with.
    pub advert_rate_type: RateType,
}

/// Returns true if the form holds no changes relative to `initial`.
///
/// Payment methods and preferred countries are compared as sorted lists, so
/// selection order does not matter. Threshold values compare in canonical
/// form (see [`canonical_threshold`]).
#[must_use]
pub fn is_form_unchanged(initial: &InitialFormSnapshot, current: &DirtyCheckInputs) -> bool {
    same_selection(&initial.payment_methods, &current.payment_methods)
        && canonical_threshold(current.min_completion_rate.as_deref())
            == canonical_threshold(initial.min_completion_rate.as_deref())
        && canonical_threshold(current.min_join_days.as_deref())
            == canonical_threshold(initial.min_join_days.as_deref())
        && same_selection(&initial.selected_countries, &current.preferred_countries)
        && !current.is_dirty
        && current.rate_type == current.advert_rate_type
}

/// Canonical form of an optional threshold value.
///
/// Absent, blank and zero values mean "no threshold" and map to `None`.
/// Anything else keeps its trimmed text.
#[must_use]
pub fn canonical_threshold(value: Option<&str>) -> Option<String> {
    let trimmed: &str = value?.trim();
    #[allow(clippy::float_cmp)]
    let is_zero: bool = parse_form_number(trimmed).is_some_and(|n| n == 0.0);
    if trimmed.is_empty() || is_zero {
        return None;
    }
    Some(trimmed.to_string())
}

fn same_selection(initial: &[String], current: &[String]) -> bool {
    if initial.len() != current.len() {
        return false;
    }

    let mut initial: Vec<&String> = initial.iter().collect();
    let mut current: Vec<&String> = current.iter().collect();
    initial.sort_unstable();
    current.sort_unstable();
    initial == current
}
