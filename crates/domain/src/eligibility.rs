// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::localize::Localize;

/// Eligibility code: the user's completion rate is below the advert minimum.
pub const COMPLETION_RATE: &str = "completion_rate";

/// Eligibility code: the user joined more recently than the advert allows.
pub const JOIN_DATE: &str = "join_date";

/// Explains why a user cannot place an order on an advert.
///
/// A single recognized code gets its specific message. Any other
/// combination gets the generic message.
#[must_use]
pub fn eligibility_error_message<S: AsRef<str>>(codes: &[S], localizer: &dyn Localize) -> String {
    let specific: Option<&str> = match codes {
        [only] => match only.as_ref() {
            COMPLETION_RATE => Some("Your completion rate is too low for this ad."),
            JOIN_DATE => Some("You've not used Deriv P2P long enough for this ad."),
            _ => None,
        },
        _ => None,
    };

    localizer.localize(
        specific.unwrap_or("The advertiser has set conditions for this ad that you don't meet."),
        &[],
    )
}
