use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, PoisonError};

/// Caller-owned bookkeeping attached to a registry entry.
///
/// The registry stores and returns these values and nothing more. They are the only
/// part of a frozen registry that may change, which is why they sit behind an atomic
/// and a lock instead of plain fields.
#[derive(Debug, Default)]
pub struct Scratch {
    var1: AtomicI32,
    string1: Mutex<String>,
}

impl Scratch {
    pub fn user_var1(&self) -> i32 {
        self.var1.load(Ordering::Relaxed)
    }

    pub fn set_user_var1(&self, value: i32) {
        self.var1.store(value, Ordering::Relaxed);
    }

    /// Adds `delta` and returns the new value.
    pub fn delta_user_var1(&self, delta: i32) -> i32 {
        self.var1
            .fetch_add(delta, Ordering::Relaxed)
            .wrapping_add(delta)
    }

    pub fn user_string1(&self) -> String {
        self.string1
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_user_string1(&self, value: impl Into<String>) {
        *self.string1.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    pub fn reset(&self) {
        self.set_user_var1(0);
        self.set_user_string1(String::new());
    }
}
