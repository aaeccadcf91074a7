//! Dotted-path lookup into nested tables.
//!
//! `"Common.buttons.save"` walks `Common`, then `buttons`, then `save`.
//! Lookups never fail loudly: a missing segment, a non-table intermediate
//! or an empty segment all resolve to `None`.

use crate::value::{Table, Value};

/// Resolve `path` against `table`.
///
/// The path is trimmed and split on `.`. Once an intermediate value is falsy
/// or missing, the walk stops and yields `None`. The final value is returned
/// as-is, falsy or not.
///
/// ```
/// use i18n_context::core::path::read;
/// use i18n_context::value::Table;
///
/// let table: Table = serde_json::from_str(r#"{"a": {"b": {"c": "hello"}}}"#).unwrap();
/// assert_eq!(read(&table, "a.b.c").and_then(|v| v.as_str()), Some("hello"));
/// assert!(read(&table, "a.b.d").is_none());
/// ```
pub fn read<'a>(table: &'a Table, path: &str) -> Option<&'a Value> {
    read_segments(table, path.trim().split('.'))
}

/// Like [`read`], falling back to `default` when nothing is found.
pub fn read_or<'a>(table: &'a Table, path: &str, default: &'a Value) -> &'a Value {
    read(table, path).unwrap_or(default)
}

/// Walk already-split segments, left to right.
///
/// An empty segment list resolves to `None`.
pub fn read_segments<'a, 's, I>(table: &'a Table, segments: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut segments = segments.into_iter();
    let mut current = table.get(segments.next()?);

    for segment in segments {
        current = match current {
            Some(value) if value.is_truthy() => value.get(segment),
            _ => return None,
        };
    }

    current
}
