//! Message file loading.
//!
//! - `json`: reads a directory of `<locale>.json` files into a dictionary

pub mod json;
