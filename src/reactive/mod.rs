#![forbid(unsafe_code)]

//! Reactive primitives backing the translation store.
//!
//! - [`Observable`]: a shared, version-tracked value with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Effect`]: a computation that re-runs when observables it read change.
//!
//! # Architecture
//!
//! Everything is single-threaded (`Rc<RefCell<..>>`). Subscribers are held
//! as `Weak` callbacks and pruned lazily. Notification is synchronous: by
//! the time a write returns, every dependent effect has re-run.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op.
//! 4. An effect subscribes to each observable at most once per run.

mod effect;
pub mod observable;

pub use effect::Effect;
pub use observable::{Observable, Subscription};
