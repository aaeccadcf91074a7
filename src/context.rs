//! Provider/consumer binding of a translation store to a render subtree.
//!
//! A [`TranslationProvider`] owns one store per mount. Code running inside
//! [`TranslationProvider::render`] reaches the nearest provider's store with
//! [`use_translation`], without the store being passed down explicitly.
//! Providers nest: an inner provider shadows the outer one for its own
//! subtree only.
//!
//! Calling [`use_translation`] outside any provider returns `None`. That is
//! a caller error; nothing else guards against it.
//!
//! ```
//! use i18n_context::context::{ProviderProps, TranslationProvider, use_translation};
//! use i18n_context::value::Dictionary;
//!
//! let dict: Dictionary = serde_json::from_str(r#"{"fr": {"title": "Bonjour"}}"#).unwrap();
//! let provider = TranslationProvider::mount(ProviderProps::new().dict(dict).locale("fr"));
//!
//! let title = provider.render(|| {
//!     let (t, _actions) = use_translation().expect("inside a provider");
//!     t.text("title", None)
//! });
//! assert_eq!(title, "Bonjour");
//! assert!(use_translation().is_none());
//! ```

use std::cell::RefCell;

use crate::store::{TranslationContext, create_translation_context};
use crate::value::Dictionary;

thread_local! {
    static PROVIDERS: RefCell<Vec<TranslationContext>> = const { RefCell::new(Vec::new()) };
}

/// Provider inputs. Both are optional: the dictionary starts empty and the
/// locale defaults to the host locale.
#[derive(Debug, Clone, Default)]
pub struct ProviderProps {
    pub dict: Option<Dictionary>,
    pub locale: Option<String>,
}

impl ProviderProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dict(mut self, dict: Dictionary) -> Self {
        self.dict = Some(dict);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Owns one store and exposes it to everything rendered beneath it.
#[derive(Debug)]
pub struct TranslationProvider {
    context: TranslationContext,
}

impl TranslationProvider {
    /// Create the provider's store.
    pub fn mount(props: ProviderProps) -> Self {
        let ProviderProps { dict, locale } = props;
        Self {
            context: create_translation_context(dict.unwrap_or_default(), locale),
        }
    }

    /// Run `children` with this provider's store as the nearest context.
    ///
    /// Returns whatever `children` returns. The context is withdrawn when
    /// `children` returns or unwinds.
    pub fn render<R>(&self, children: impl FnOnce() -> R) -> R {
        PROVIDERS.with(|stack| stack.borrow_mut().push(self.context.clone()));
        let _scope = ProviderScope;
        children()
    }

    /// This provider's `(translate, actions)` pair.
    pub fn context(&self) -> TranslationContext {
        self.context.clone()
    }
}

struct ProviderScope;

impl Drop for ProviderScope {
    fn drop(&mut self) {
        PROVIDERS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// The nearest enclosing provider's `(translate, actions)` pair, or `None`
/// outside every provider.
pub fn use_translation() -> Option<TranslationContext> {
    PROVIDERS.with(|stack| stack.borrow().last().cloned())
}
