//! Self-tracking computations.
//!
//! An [`Effect`] runs its closure once on creation and again whenever an
//! [`Observable`](super::Observable) it read during its last run changes.
//! Dependencies are collected afresh on every run, so branches that stop
//! reading an observable stop being notified by it.
//!
//! Running effects are kept on a thread-local stack; observables consult the
//! top of the stack when read.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use super::observable::Subscription;

thread_local! {
    static OBSERVERS: RefCell<Vec<Rc<EffectInner>>> = const { RefCell::new(Vec::new()) };
}

/// The innermost running effect, if any.
pub(crate) fn current_observer() -> Option<Rc<EffectInner>> {
    OBSERVERS.with(|stack| stack.borrow().last().cloned())
}

pub(crate) struct EffectInner {
    computation: RefCell<Box<dyn FnMut()>>,
    sources: RefCell<Vec<Subscription>>,
    seen: RefCell<HashSet<usize>>,
    runs: Cell<u64>,
}

impl EffectInner {
    /// Record `source` for the current run. Returns false if already seen.
    pub(crate) fn mark_source(&self, source: usize) -> bool {
        self.seen.borrow_mut().insert(source)
    }

    pub(crate) fn hold(&self, subscription: Subscription) {
        self.sources.borrow_mut().push(subscription);
    }

    /// Drop the previous dependencies and re-run with tracking.
    ///
    /// # Panics
    ///
    /// Panics if the computation triggers its own re-run.
    pub(crate) fn run(self: &Rc<Self>) {
        let previous = std::mem::take(&mut *self.sources.borrow_mut());
        drop(previous);
        self.seen.borrow_mut().clear();

        OBSERVERS.with(|stack| stack.borrow_mut().push(Rc::clone(self)));
        let _pop = PopObserver;
        let mut computation = self.computation.borrow_mut();
        (*computation)();
        self.runs.set(self.runs.get() + 1);
    }
}

struct PopObserver;

impl Drop for PopObserver {
    fn drop(&mut self) {
        OBSERVERS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// A computation that re-runs when the observables it reads change.
///
/// Dropping the `Effect` stops it.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use i18n_context::reactive::{Effect, Observable};
///
/// let name = Observable::new("Tom".to_string());
/// let rendered = Rc::new(RefCell::new(String::new()));
///
/// let out = Rc::clone(&rendered);
/// let source = name.clone();
/// let _effect = Effect::new(move || *out.borrow_mut() = format!("Hi {}", source.get()));
/// assert_eq!(*rendered.borrow(), "Hi Tom");
///
/// name.set("Ada".to_string());
/// assert_eq!(*rendered.borrow(), "Hi Ada");
/// ```
pub struct Effect {
    inner: Rc<EffectInner>,
}

impl Effect {
    pub fn new(computation: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(EffectInner {
            computation: RefCell::new(Box::new(computation)),
            sources: RefCell::new(Vec::new()),
            seen: RefCell::new(HashSet::new()),
            runs: Cell::new(0),
        });
        inner.run();
        Self { inner }
    }

    /// How many times the computation has run, including the first.
    pub fn run_count(&self) -> u64 {
        self.inner.runs.get()
    }

    /// Number of distinct observables read during the last run.
    pub(crate) fn source_count(&self) -> usize {
        self.inner.seen.borrow().len()
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("runs", &self.run_count())
            .field("sources", &self.source_count())
            .finish()
    }
}
