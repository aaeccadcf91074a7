//! i18n-context - reactive translations for component trees
//!
//! A translation store holds one message table per locale and an active
//! locale. Keys are dotted paths into the active table; string messages may
//! carry `{{ name }}` placeholders filled from parameters, and callable
//! messages compute their text from the parameters. Reads are tracked, so an
//! [`reactive::Effect`] that translated something re-runs when the locale or
//! the table it read changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface for inspecting message catalogs
//! - `config`: Configuration file loading and parsing
//! - `context`: Provider/consumer plumbing exposing a store to a subtree
//! - `core`: Deep path reads and placeholder interpolation
//! - `parsers`: Locale file loading
//! - `reactive`: Observables and auto-tracking effects
//! - `store`: The translation store (`translate`, `add`, `locale`, `dict`)
//! - `utils`: Shared utility functions
//! - `value`: The dynamic value model for message tables
//!
//! ## Example
//!
//! ```
//! use i18n_context::context::{ProviderProps, TranslationProvider, use_translation};
//! use i18n_context::value::{Dictionary, Value, params};
//!
//! let dict: Dictionary = serde_json::from_value(serde_json::json!({
//!     "en": { "greet": "Hello {{ name }}" },
//!     "fr": { "greet": "Bonjour {{ name }}" },
//! }))
//! .unwrap();
//!
//! let provider = TranslationProvider::mount(ProviderProps::new().dict(dict).locale("fr"));
//! provider.render(|| {
//!     let (t, actions) = use_translation().unwrap();
//!     let name = params([("name", "Tom")]);
//!     assert_eq!(t.translate("greet", Some(&name), None), Value::from("Bonjour Tom"));
//!
//!     actions.locale(Some("en"));
//!     assert_eq!(t.text("greet", Some(&name)), "Hello Tom");
//! });
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod parsers;
pub mod reactive;
pub mod store;
pub mod utils;
pub mod value;
