// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Localization capability.
//!
//! Rule sets never look up translations themselves. Callers pass a
//! [`Localize`] implementation, which receives English message templates
//! containing `{{name}}` placeholders plus the values to substitute.

/// Renders a message template in the user's language.
pub trait Localize {
    /// Returns the localized form of `template` with `values` substituted.
    fn localize(&self, template: &str, values: &[(&str, String)]) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str, &[(&str, String)]) -> String,
{
    fn localize(&self, template: &str, values: &[(&str, String)]) -> String {
        self(template, values)
    }
}

/// English localizer: substitutes placeholders and keeps the template text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localize for DefaultLocalizer {
    fn localize(&self, template: &str, values: &[(&str, String)]) -> String {
        substitute_placeholders(template, values)
    }
}

/// Replaces every `{{name}}` in `template` with the matching value.
///
/// Whitespace inside the braces is ignored. Placeholders without a value
/// are left untouched.
#[must_use]
pub fn substitute_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut output: String = String::with_capacity(template.len());
    let mut rest: &str = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open: &str = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name: &str = after_open[..end].trim();
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
