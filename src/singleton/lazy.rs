//! # Write-once cell with double-checked locking.
//!
//! [`LazySingleton`] defers construction of a value until the first
//! [`get`](LazySingleton::get) and guarantees the initializer runs exactly once,
//! however many threads race for it.
//!
//! ## State machine
//! ```text
//!  Uninitialized ──get()──► lock ──re-check──► Initializing ──init()──► Initialized
//!        ▲                    │                      │
//!        │                    └─ already Initialized └─ init() panicked
//!        │                       (lost the race)        (state rolled back)
//!        └──────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - **Fast path**: once initialized, `get()` is a single atomic load, no lock.
//! - **Slow path**: the mutex is held only while checking and constructing.
//! - **Panicking initializer**: the state returns to `Uninitialized`; the next
//!   caller retries (the poisoned mutex is recovered).
//! - **No reset**: an initialized value lives as long as the cell.
//!
//! The cell is a plain value: keep it in a `static` for a process-wide
//! instance, or own it and share it through `Arc` to inject it explicitly.
//!
//! ## Example
//! ```rust
//! use patternbook::{InitState, LazySingleton};
//!
//! static GREETING: LazySingleton<String> = LazySingleton::new(|| "hello".to_string());
//!
//! assert_eq!(GREETING.state(), InitState::Uninitialized);
//! assert_eq!(GREETING.get(), "hello");
//! assert!(std::ptr::eq(GREETING.get(), GREETING.get()));
//! assert_eq!(GREETING.state(), InitState::Initialized);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const INITIALIZED: u8 = 2;

/// Observable initialization state of a [`LazySingleton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitState {
    /// Nobody asked for the value yet (or the last attempt panicked).
    Uninitialized,
    /// A caller holds the lock and is running the initializer.
    Initializing,
    /// The value exists and is handed out without locking.
    Initialized,
}

/// Lazily constructed, write-once value.
pub struct LazySingleton<T, F = fn() -> T> {
    state: AtomicU8,
    lock: Mutex<()>,
    value: OnceLock<T>,
    init: F,
}

impl<T, F> LazySingleton<T, F> {
    /// Creates an empty cell; `init` runs on first access.
    pub const fn new(init: F) -> Self {
        Self {
            state: AtomicU8::new(UNINITIALIZED),
            lock: Mutex::new(()),
            value: OnceLock::new(),
            init,
        }
    }

    /// Current state.
    pub fn state(&self) -> InitState {
        match self.state.load(Ordering::Acquire) {
            INITIALIZED => InitState::Initialized,
            INITIALIZING => InitState::Initializing,
            _ => InitState::Uninitialized,
        }
    }

    /// The value, if some caller already constructed it. Never blocks.
    pub fn get_if_initialized(&self) -> Option<&T> {
        if self.state.load(Ordering::Acquire) == INITIALIZED {
            self.value.get()
        } else {
            None
        }
    }
}

impl<T, F: Fn() -> T> LazySingleton<T, F> {
    /// Returns the instance, constructing it on first use.
    pub fn get(&self) -> &T {
        if let Some(v) = self.get_if_initialized() {
            return v;
        }
        self.get_slow()
    }

    #[cold]
    fn get_slow(&self) -> &T {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished while we waited for the lock.
        if let Some(v) = self.value.get() {
            return v;
        }

        self.state.store(INITIALIZING, Ordering::Release);
        let rollback = Rollback(&self.state);
        let value = (self.init)();
        std::mem::forget(rollback);

        let v = self.value.get_or_init(|| value);
        self.state.store(INITIALIZED, Ordering::Release);
        v
    }
}

/// Resets the state if the initializer unwinds.
struct Rollback<'a>(&'a AtomicU8);

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        self.0.store(UNINITIALIZED, Ordering::Release);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazySingleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySingleton")
            .field("state", &self.state())
            .field("value", &self.get_if_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Barrier};

    #[test]
    fn test_starts_uninitialized_and_constructs_on_first_get() {
        let calls = AtomicUsize::new(0);
        let cell = LazySingleton::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        });

        assert_eq!(cell.state(), InitState::Uninitialized);
        assert!(cell.get_if_initialized().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(cell.get(), &[1, 2, 3]);
        assert_eq!(cell.get(), &[1, 2, 3]);
        assert_eq!(cell.state(), InitState::Initialized);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_get_constructs_once_and_shares_reference() {
        const THREADS: usize = 16;
        let calls = AtomicUsize::new(0);
        let cell = LazySingleton::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            String::from("only one")
        });
        let barrier = Barrier::new(THREADS);

        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        cell.get() as *const String as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(addrs.iter().all(|a| *a == addrs[0]));
    }

    #[test]
    fn test_panicking_initializer_rolls_back_and_retries() {
        let attempts = AtomicUsize::new(0);
        let cell = LazySingleton::new(|| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("first attempt fails");
            }
            42
        });

        let first = panic::catch_unwind(AssertUnwindSafe(|| *cell.get()));
        assert!(first.is_err());
        assert_eq!(cell.state(), InitState::Uninitialized);

        assert_eq!(*cell.get(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_through_arc() {
        let cell = Arc::new(LazySingleton::new(|| 7u32));
        let other = Arc::clone(&cell);
        assert!(std::ptr::eq(cell.get(), other.get()));
        assert!(format!("{cell:?}").contains("Initialized"));
    }
}
