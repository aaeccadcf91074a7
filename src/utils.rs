//! Common utility functions shared across the codebase.

/// Locale used when the host reports none.
pub const FALLBACK_LOCALE: &str = "en";

/// The host environment's preferred locale as a BCP 47 tag (e.g. `en-US`).
///
/// Falls back to [`FALLBACK_LOCALE`] when the platform reports nothing.
pub fn host_locale() -> String {
    sys_locale::get_locale()
        .filter(|locale| !locale.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Parse a `name=value` pair as given on the command line.
///
/// Only the first `=` splits; the value may contain more.
///
/// # Examples
///
/// ```
/// use i18n_context::utils::parse_key_value;
///
/// assert_eq!(parse_key_value("name=Tom"), Ok(("name".to_string(), "Tom".to_string())));
/// assert_eq!(parse_key_value("eq=a=b"), Ok(("eq".to_string(), "a=b".to_string())));
/// assert!(parse_key_value("novalue").is_err());
/// ```
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got \"{}\"", raw)),
    }
}
