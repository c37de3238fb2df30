//! Live value cells: the shared storage debug options read and write.
//!
//! A cell is declared by the code that *uses* the value — typically a
//! module-level `static` read on hot paths — and handed to the option by
//! reference. Business logic and the option tree share the cell rather than
//! synchronizing through each other.
//!
//! All cells are safe for concurrent access. Atomicity is per-value only:
//! a reader on another thread sees either the old or the new value, with no
//! ordering relationship to other cells (`Ordering::Relaxed`).

use std::borrow::Cow;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use parking_lot::RwLock;

/// An atomic boolean cell, the storage behind a switch option.
///
/// `new` is const so a cell can back a module-level `static`:
///
/// ```
/// use debugopts::BoolCell;
/// static VERBOSE: BoolCell = BoolCell::new(false);
/// ```
#[derive(Debug)]
pub struct BoolCell(AtomicBool);

impl BoolCell {
    pub const fn new(initial: bool) -> Self {
        Self(AtomicBool::new(initial))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Flip the value, returning the previous state.
    pub fn toggle(&self) -> bool {
        self.0.fetch_xor(true, Ordering::Relaxed)
    }
}

/// An atomic integer cell, the storage behind an enumeration option.
#[derive(Debug)]
pub struct IntCell(AtomicI64);

impl IntCell {
    pub const fn new(initial: i64) -> Self {
        Self(AtomicI64::new(initial))
    }

    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: i64) {
        self.0.store(value, Ordering::Relaxed);
    }
}

/// A thread-safe string cell, the storage behind a text option.
///
/// The compile-time default is a borrowed `&'static str` so `new` stays
/// const; the first `set` swaps in an owned string.
#[derive(Debug)]
pub struct TextCell(RwLock<Cow<'static, str>>);

impl TextCell {
    pub const fn new(initial: &'static str) -> Self {
        Self(RwLock::new(Cow::Borrowed(initial)))
    }

    pub fn get(&self) -> String {
        self.0.read().to_string()
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.0.write() = Cow::Owned(value.into());
    }
}

/// How an option holds its cell: borrowed from a `static` shared with
/// business logic, or owned by the option for group-local declarations.
pub(crate) enum CellRef<T: 'static> {
    Shared(&'static T),
    Owned(Box<T>),
}

impl<T> Deref for CellRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            CellRef::Shared(cell) => cell,
            CellRef::Owned(cell) => cell,
        }
    }
}
