//! Pure lookup primitives: dotted-path reads and template interpolation.
//!
//! - `path`: resolves `"a.b.c"` against nested tables
//! - `interpolate`: substitutes `{{ var }}` placeholders from params

pub mod interpolate;
pub mod path;

pub use interpolate::{PLACEHOLDER_REGEX, interpolate, interpolate_with};
pub use path::{read, read_or, read_segments};
