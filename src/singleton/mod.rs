//! Lazy, thread-safe single-instance construction.
//!
//! ## Contents
//! - [`LazySingleton`] reusable write-once cell (double-checked locking), usable
//!   as a `static` or injected through `Arc`
//! - [`InitState`] its observable state
//! - [`Singleton`] the process-wide instance built on top of it

mod instance;
mod lazy;

pub use instance::Singleton;
pub use lazy::{InitState, LazySingleton};
