//! # Composable specifications.
//!
//! A [`Specification`] is a boolean predicate over a domain value. New
//! filtering criteria are added as new types instead of new filter methods,
//! and existing ones combine with [`AndSpecification`].
//!
//! ## Composition
//! ```text
//! ColorSpecification(Yellow).and(SizeSpecification(Large))
//!   └─► AndSpecification { first, second }
//!         is_satisfied(x) = first(x) && second(x)   (second skipped when first is false)
//! ```
//!
//! ## Example
//! ```rust
//! use patternbook::{Color, ColorSpecification, Product, Size, SizeSpecification, Specification};
//!
//! let house = Product::new("House", "A huge house", Color::Yellow, Size::Large);
//! let spec = ColorSpecification::new(Color::Yellow).and(SizeSpecification::new(Size::Large));
//! assert!(spec.is_satisfied(&house));
//! ```

use std::sync::Arc;

/// Boolean predicate over `T`.
pub trait Specification<T: ?Sized> {
    /// Whether `item` meets the criterion.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Combines `self` and `other` with a short-circuiting logical AND.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

/// Logical AND of two specifications.
///
/// `second` is never evaluated when `first` rejects the item, which matters
/// for specifications with side effects or a noticeable cost.
#[derive(Clone, Debug)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    /// Builds the conjunction `first && second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}
