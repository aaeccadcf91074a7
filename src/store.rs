//! Translation store: the current locale plus one observable table per locale.
//!
//! [`create_translation_context`] builds a store and hands out its two faces:
//! a [`Translator`] for lookups and an [`Actions`] handle for mutation. Both
//! share the same state.
//!
//! ## Reactivity
//!
//! Each locale table is its own [`Observable`], so a write to `en` only
//! notifies readers of `en`. Readers of a locale that does not exist yet
//! subscribe to the set of known locales instead and are notified when it is
//! created.
//!
//! ## Failure Modes
//!
//! None. A missing locale, key or param degrades to the default value or the
//! empty string.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::core::{interpolate, read, read_segments};
use crate::reactive::Observable;
use crate::utils::host_locale;
use crate::value::{Dictionary, Params, Table, Value};

struct StoreState {
    locale: Observable<String>,
    dictionary: RefCell<BTreeMap<String, Observable<Table>>>,
    locales: Observable<BTreeSet<String>>,
}

impl StoreState {
    fn new(dict: Dictionary, locale: String) -> Self {
        let locales = dict.keys().cloned().collect();
        let dictionary = dict
            .into_iter()
            .map(|(locale, table)| (locale, Observable::new(table)))
            .collect();
        Self {
            locale: Observable::new(locale),
            dictionary: RefCell::new(dictionary),
            locales: Observable::new(locales),
        }
    }

    /// The observable table for `locale`. When absent, tracks the locale set
    /// so the caller hears about its creation.
    fn entry(&self, locale: &str) -> Option<Observable<Table>> {
        let entry = self.dictionary.borrow().get(locale).cloned();
        if entry.is_none() {
            self.locales.with(|_| ());
        }
        entry
    }
}

/// Lookup face of a store.
#[derive(Clone)]
pub struct Translator {
    state: Rc<StoreState>,
}

/// Mutation face of a store.
#[derive(Clone)]
pub struct Actions {
    state: Rc<StoreState>,
}

/// The `(translate, actions)` pair exposed by a store.
pub type TranslationContext = (Translator, Actions);

/// Create a store seeded with `dict`.
///
/// `locale` defaults to the host locale (see [`host_locale`]).
///
/// ```
/// use i18n_context::store::create_translation_context;
/// use i18n_context::value::Dictionary;
///
/// let dict: Dictionary = serde_json::from_str(
///     r#"{"fr": {"title": "Bonjour"}, "en": {"title": "Hello"}}"#,
/// ).unwrap();
/// let (t, actions) = create_translation_context(dict, Some("fr".to_string()));
///
/// assert_eq!(t.text("title", None), "Bonjour");
/// actions.locale(Some("en"));
/// assert_eq!(t.text("title", None), "Hello");
/// ```
pub fn create_translation_context(dict: Dictionary, locale: Option<String>) -> TranslationContext {
    let locale = locale.unwrap_or_else(host_locale);
    tracing::debug!(locale = %locale, locales = dict.len(), "creating translation store");
    let state = Rc::new(StoreState::new(dict, locale));
    (
        Translator {
            state: Rc::clone(&state),
        },
        Actions { state },
    )
}

impl Translator {
    /// Resolve `key` in the current locale.
    ///
    /// - callables are invoked with `params` and their result returned as-is;
    /// - strings are interpolated with `params`;
    /// - anything else (tables, numbers, non-string defaults) passes through.
    ///
    /// `default` replaces a missing key and is treated like a found value,
    /// so a string default is interpolated too. Without one, a missing key
    /// yields `""`.
    pub fn translate(&self, key: &str, params: Option<&Params>, default: Option<Value>) -> Value {
        let locale = self.state.locale.get();
        let found = self
            .state
            .entry(&locale)
            .and_then(|table| table.with(|table| read(table, key).cloned()));
        let value = found.unwrap_or_else(|| default.unwrap_or_else(|| Value::from("")));

        let empty = Params::new();
        let params = params.unwrap_or(&empty);
        match value {
            Value::Func(f) => f.call(params),
            Value::Text(template) => Value::Text(interpolate(&template, params)),
            other => other,
        }
    }

    /// String form of [`Translator::translate`] without a default.
    pub fn text(&self, key: &str, params: Option<&Params>) -> String {
        self.translate(key, params, None).to_string()
    }
}

impl Actions {
    /// Shallow-merge `table` into `locale`'s table, creating it if needed.
    ///
    /// Top-level keys of `table` overwrite; nested tables are replaced, not
    /// merged.
    pub fn add(&self, locale: &str, table: Table) {
        let existing = self.state.dictionary.borrow().get(locale).cloned();
        match existing {
            Some(entry) => {
                let keys = table.len();
                let changed = entry.update(|current| current.extend(table));
                tracing::trace!(locale, keys, changed, "merged translations");
            }
            None => {
                tracing::debug!(locale, keys = table.len(), "added locale");
                self.state
                    .dictionary
                    .borrow_mut()
                    .insert(locale.to_string(), Observable::new(table));
                self.state.locales.update(|locales| {
                    locales.insert(locale.to_string());
                });
            }
        }
    }

    /// Switch to `new_locale` when given and non-empty; return the current
    /// locale either way.
    pub fn locale(&self, new_locale: Option<&str>) -> String {
        if let Some(new_locale) = new_locale.filter(|l| !l.is_empty()) {
            if self.state.locale.peek() != new_locale {
                tracing::debug!(locale = new_locale, "locale changed");
            }
            self.state.locale.set(new_locale.to_string());
        }
        self.state.locale.get()
    }

    /// Deep read rooted at the dictionary: the first segment picks the
    /// locale, the rest are read inside its table.
    pub fn dict(&self, path: &str) -> Option<Value> {
        let mut segments = path.trim().split('.');
        let locale = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        let entry = self.state.entry(locale)?;
        entry.with(|table| {
            if rest.is_empty() {
                Some(Value::Table(table.clone()))
            } else {
                read_segments(table, rest).cloned()
            }
        })
    }

    /// Known locale codes, sorted.
    pub fn locales(&self) -> Vec<String> {
        self.state.locales.with(|locales| locales.iter().cloned().collect())
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.state.locale.peek())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Actions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actions")
            .field("locale", &self.state.locale.peek())
            .field("locales", &self.state.locales.peek())
            .finish()
    }
}
