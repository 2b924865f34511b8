// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advert visibility status derivation.
//!
//! The marketplace reports a list of visibility codes for each advert. The
//! advert list refines that list with two facts it knows locally: whether
//! the advertiser has paused listing, and whether the advert's rate type
//! has fallen out of step with the rate type currently in effect.

use crate::types::{ADVERT_INACTIVE, ADVERTISER_ADS_PAUSED, RateType};

/// Derives the visibility codes to display for an advert.
///
/// Steps, each reading the result of the previous one:
/// 1. Copy `current_codes`, dropping repeated codes.
/// 2. Append the paused code if the advert is not listed.
/// 3. Remove the inactive code if no action point is active.
/// 4. Append the inactive code if an action point is active.
///
/// Surviving input codes keep their order; appended codes go last.
#[must_use]
pub fn derive_visibility_codes<S: AsRef<str>>(
    current_codes: &[S],
    action_point_active: bool,
    is_listed: bool,
) -> Vec<String> {
    let mut codes: Vec<String> = Vec::with_capacity(current_codes.len() + 2);
    for code in current_codes {
        let code: &str = code.as_ref();
        if !contains(&codes, code) {
            codes.push(code.to_string());
        }
    }

    if !is_listed && !contains(&codes, ADVERTISER_ADS_PAUSED) {
        codes.push(ADVERTISER_ADS_PAUSED.to_string());
    }

    if action_point_active {
        if !contains(&codes, ADVERT_INACTIVE) {
            codes.push(ADVERT_INACTIVE.to_string());
        }
    } else {
        codes.retain(|code| code != ADVERT_INACTIVE);
    }

    codes
}

/// Returns true if the visibility codes warrant a tooltip icon.
///
/// A single code gets a tooltip unless it is the inactive or paused code,
/// which the advert row already explains. Several codes always get one.
#[must_use]
pub fn should_show_tooltip<S: AsRef<str>>(codes: &[S]) -> bool {
    match codes {
        [] => false,
        [only] => {
            let only: &str = only.as_ref();
            only != ADVERT_INACTIVE && only != ADVERTISER_ADS_PAUSED
        }
        _ => true,
    }
}

/// Returns true if the advert needs advertiser action because its rate
/// type differs from the rate type currently in effect.
#[must_use]
pub fn is_action_point_active(advert_rate_type: RateType, current_rate_type: RateType) -> bool {
    advert_rate_type != current_rate_type
}

fn contains(codes: &[String], code: &str) -> bool {
    codes.iter().any(|existing| existing == code)
}
