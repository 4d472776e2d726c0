// src/scope.rs
//! Scope guards: run a closure when the guard is dropped.
//!
//! - [`ScopeExit`] always runs.
//! - [`ScopeFail`] runs only when the scope is left by a panic.
//! - [`ScopeSuccess`] runs only when the scope is left normally.
//!
//! Each guard runs its action at most once, and not at all after
//! [`release`](ScopeExit::release).
//!
//! ```
//! use endian_rs::scope::scope_exit;
//! use std::cell::Cell;
//!
//! let closed = Cell::new(false);
//! {
//!     let _guard = scope_exit(|| closed.set(true));
//! }
//! assert!(closed.get());
//! ```

use std::thread;

struct Armed<F: FnOnce()> {
    action: Option<F>,
    panicking_on_entry: bool,
}

impl<F: FnOnce()> Armed<F> {
    fn new(action: F) -> Self {
        Armed {
            action: Some(action),
            panicking_on_entry: thread::panicking(),
        }
    }

    fn release(&mut self) {
        self.action = None;
    }

    /// A panic started after the guard was created and is unwinding now.
    fn failed(&self) -> bool {
        thread::panicking() && !self.panicking_on_entry
    }

    fn fire(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Runs its action when dropped.
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub struct ScopeExit<F: FnOnce()> {
    inner: Armed<F>,
}

impl<F: FnOnce()> ScopeExit<F> {
    pub fn new(action: F) -> Self {
        ScopeExit { inner: Armed::new(action) }
    }

    /// Disarm the guard.
    pub fn release(&mut self) {
        self.inner.release();
    }
}

impl<F: FnOnce()> Drop for ScopeExit<F> {
    fn drop(&mut self) {
        self.inner.fire();
    }
}

/// Runs its action when dropped during a panic.
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub struct ScopeFail<F: FnOnce()> {
    inner: Armed<F>,
}

impl<F: FnOnce()> ScopeFail<F> {
    pub fn new(action: F) -> Self {
        ScopeFail { inner: Armed::new(action) }
    }

    /// Disarm the guard.
    pub fn release(&mut self) {
        self.inner.release();
    }
}

impl<F: FnOnce()> Drop for ScopeFail<F> {
    fn drop(&mut self) {
        if self.inner.failed() {
            self.inner.fire();
        }
    }
}

/// Runs its action when dropped outside of a panic.
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub struct ScopeSuccess<F: FnOnce()> {
    inner: Armed<F>,
}

impl<F: FnOnce()> ScopeSuccess<F> {
    pub fn new(action: F) -> Self {
        ScopeSuccess { inner: Armed::new(action) }
    }

    /// Disarm the guard.
    pub fn release(&mut self) {
        self.inner.release();
    }
}

impl<F: FnOnce()> Drop for ScopeSuccess<F> {
    fn drop(&mut self) {
        if !self.inner.failed() {
            self.inner.fire();
        }
    }
}

/// Run `action` when the returned guard leaves scope, however it leaves.
pub fn scope_exit<F: FnOnce()>(action: F) -> ScopeExit<F> {
    ScopeExit::new(action)
}

/// Run `action` only if the scope is left by a panic.
pub fn scope_fail<F: FnOnce()>(action: F) -> ScopeFail<F> {
    ScopeFail::new(action)
}

/// Run `action` only if the scope is left without a panic.
pub fn scope_success<F: FnOnce()>(action: F) -> ScopeSuccess<F> {
    ScopeSuccess::new(action)
}
