// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DirtyCheckInputs, InitialFormSnapshot, RateType, canonical_threshold, is_form_unchanged};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn create_snapshot() -> InitialFormSnapshot {
    InitialFormSnapshot::capture(
        strings(&["b", "a"]),
        strings(&["za", "ng"]),
        Some("80"),
        Some("15"),
    )
}

fn create_unchanged_inputs() -> DirtyCheckInputs {
    DirtyCheckInputs {
        payment_methods: strings(&["a", "b"]),
        preferred_countries: strings(&["ng", "za"]),
        min_completion_rate: Some(String::from("80")),
        min_join_days: Some(String::from("15")),
        is_dirty: false,
        rate_type: RateType::Float,
        advert_rate_type: RateType::Float,
    }
}

#[test]
fn test_reordered_selections_are_unchanged() {
    assert!(is_form_unchanged(&create_snapshot(), &create_unchanged_inputs()));
}

#[test]
fn test_dirty_flag_marks_form_changed() {
    let inputs = DirtyCheckInputs {
        is_dirty: true,
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &inputs));
}

#[test]
fn test_added_payment_method_marks_form_changed() {
    let inputs = DirtyCheckInputs {
        payment_methods: strings(&["a", "b", "c"]),
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &inputs));
}

#[test]
fn test_swapped_payment_method_marks_form_changed() {
    let inputs = DirtyCheckInputs {
        payment_methods: strings(&["a", "c"]),
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &inputs));
}

#[test]
fn test_changed_country_marks_form_changed() {
    let inputs = DirtyCheckInputs {
        preferred_countries: strings(&["ng"]),
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &inputs));
}

#[test]
fn test_changed_thresholds_mark_form_changed() {
    let rate = DirtyCheckInputs {
        min_completion_rate: Some(String::from("90")),
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &rate));

    let days = DirtyCheckInputs {
        min_join_days: None,
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &days));
}

#[test]
fn test_rate_type_switch_marks_form_changed() {
    let inputs = DirtyCheckInputs {
        rate_type: RateType::Fixed,
        ..create_unchanged_inputs()
    };
    assert!(!is_form_unchanged(&create_snapshot(), &inputs));
}

#[test]
fn test_cleared_thresholds_match_absent_snapshot() {
    let snapshot = InitialFormSnapshot::capture(Vec::new(), Vec::new(), None, Some(""));
    let inputs = DirtyCheckInputs {
        min_completion_rate: Some(String::from("0")),
        min_join_days: None,
        ..DirtyCheckInputs::default()
    };
    assert!(is_form_unchanged(&snapshot, &inputs));
}

#[test]
fn test_canonical_threshold() {
    assert_eq!(canonical_threshold(None), None);
    assert_eq!(canonical_threshold(Some("")), None);
    assert_eq!(canonical_threshold(Some("0")), None);
    assert_eq!(canonical_threshold(Some(" 50 ")), Some(String::from("50")));
}

#[test]
fn test_tiny_threshold_is_kept() {
    assert_eq!(canonical_threshold(Some("-0")), None);
    assert_eq!(
        canonical_threshold(Some("0.0000000000000001")),
        Some(String::from("0.0000000000000001"))
    );
}
