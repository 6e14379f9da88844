//! Specification pattern: open/closed filtering.
//!
//! ## Contents
//! - [`Specification`] predicate trait, [`AndSpecification`] short-circuiting conjunction
//! - [`Product`], [`Color`], [`Size`] sample domain with [`ColorSpecification`] / [`SizeSpecification`]
//! - [`filter`] lazy, order-preserving application of a specification
//! - [`ProductFilter`] the closed, one-method-per-criterion alternative

mod filter;
mod product;
mod specification;

pub use filter::{filter, ProductFilter};
pub use product::{Color, ColorSpecification, Product, Size, SizeSpecification};
pub use specification::{AndSpecification, Specification};
