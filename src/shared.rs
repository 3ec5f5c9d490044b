//! Driver shared between the main loop and interrupt handlers.
//!
//! The driver is not reentrant and a multi-byte operation such as `clear()`
//! must not interleave with another writer. `SharedDisplay` keeps the driver
//! behind a `critical_section::Mutex` so each closure passed to `with` runs
//! as one uninterrupted logical operation.

use core::cell::RefCell;
use critical_section::Mutex;

pub struct SharedDisplay<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> SharedDisplay<T> {
    /// Empty slot, usable in a `static`.
    pub const fn new() -> Self {
        Self { inner: Mutex::new(RefCell::new(None)) }
    }

    /// Stash the driver, returning the one previously installed.
    pub fn install(&self, display: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(display))
    }

    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the driver inside a critical section.
    /// Returns `None` when nothing is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<T> Default for SharedDisplay<T> {
    fn default() -> Self {
        Self::new()
    }
}
