//! `{{ variable }}` substitution for message templates.
//!
//! Placeholder paths are resolved with [`read`], so `{{ user.name }}` reaches
//! into nested params. Unknown variables render as the empty string; a
//! placeholder is never left in the output.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::path::read;
use crate::value::Params;

/// Matches `{{ ... }}` non-greedily; group 1 is the variable path.
pub static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").unwrap());

/// Replace every `{{ path }}` in `template` with the matching param.
///
/// ```
/// use i18n_context::core::interpolate::interpolate;
/// use i18n_context::value::{Params, params};
///
/// assert_eq!(interpolate("Hello {{ name }}", &params([("name", "Tom")])), "Hello Tom");
/// assert_eq!(interpolate("Hello {{ name }}", &Params::new()), "Hello ");
/// ```
pub fn interpolate(template: &str, params: &Params) -> String {
    interpolate_with(template, params, &PLACEHOLDER_REGEX)
}

/// Same as [`interpolate`] with a caller-supplied placeholder pattern.
///
/// Capture group 1 is taken as the variable path. Patterns without a group
/// use the whole match.
pub fn interpolate_with(template: &str, params: &Params, pattern: &Regex) -> String {
    pattern
        .replace_all(template, |caps: &Captures| {
            let path = caps.get(1).or_else(|| caps.get(0)).map_or("", |m| m.as_str());
            read(params, path)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .into_owned()
}
