//! # Process-wide singleton.
//!
//! [`Singleton::instance`] hands out the one `Singleton` of the process. Its
//! constructor is private; the instance lives in a `static` [`LazySingleton`]
//! and is never torn down.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;

use super::LazySingleton;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);
static INSTANCE: LazySingleton<Singleton> = LazySingleton::new(Singleton::construct);

/// The single process-wide instance.
#[derive(Debug)]
pub struct Singleton {
    created_at: SystemTime,
}

impl Singleton {
    fn construct() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Self {
            created_at: SystemTime::now(),
        }
    }

    /// Returns the instance, creating it on first call.
    ///
    /// # Example
    /// ```rust
    /// use patternbook::Singleton;
    ///
    /// assert!(std::ptr::eq(Singleton::instance(), Singleton::instance()));
    /// assert_eq!(Singleton::constructions(), 1);
    /// ```
    pub fn instance() -> &'static Singleton {
        INSTANCE.get()
    }

    /// How many times the constructor ran: 0 before first use, 1 afterwards.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Wall-clock time of construction.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}
