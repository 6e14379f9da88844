//! # Lazy filtering.
//!
//! [`filter`] yields the items accepted by a [`Specification`], in input
//! order, without collecting. Iterating again means calling `filter` again on
//! the source.
//!
//! [`ProductFilter`] is the closed alternative: one hard-coded method per
//! criterion. It exists to contrast with the open `filter` + specification
//! approach, where new criteria need no change here.
//!
//! ## Example
//! ```rust
//! use patternbook::{filter, Color, ColorSpecification, Product, Size};
//!
//! let products = [
//!     Product::new("Apple", "Fruit", Color::Red, Size::Small),
//!     Product::new("Tree", "Christmas Tree", Color::Green, Size::Medium),
//! ];
//! let spec = ColorSpecification::new(Color::Green);
//! let names: Vec<&str> = filter(&products, &spec).map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Tree"]);
//! ```

use super::product::{Color, Product};
use super::Specification;

/// Lazily yields the items of `items` that satisfy `spec`, preserving order.
pub fn filter<'a, T, I, S>(items: I, spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
    S: Specification<T> + ?Sized,
{
    items.into_iter().filter(move |item| spec.is_satisfied(item))
}

/// Filter with one method per criterion.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductFilter;

impl ProductFilter {
    /// Lazily yields the products of the given colour.
    pub fn filter_by_color<'a, I>(
        &self,
        products: I,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a
    where
        I: IntoIterator<Item = &'a Product>,
        I::IntoIter: 'a,
    {
        products.into_iter().filter(move |p| p.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{AndSpecification, ColorSpecification, SizeSpecification};
    use crate::specs::product::Size;
    use std::cell::Cell;

    fn catalogue() -> Vec<Product> {
        vec![
            Product::new("Apple", "Fruit", Color::Red, Size::Small),
            Product::new("Tree", "Christmas Tree", Color::Green, Size::Medium),
            Product::new("House", "A huge house", Color::Yellow, Size::Large),
        ]
    }

    fn names<'a>(it: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        it.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_filter_by_green_returns_tree() {
        let products = catalogue();
        let spec = ColorSpecification::new(Color::Green);
        assert_eq!(names(filter(&products, &spec)), ["Tree"]);
    }

    #[test]
    fn test_filter_by_yellow_and_large_returns_house() {
        let products = catalogue();
        let spec = AndSpecification::new(
            ColorSpecification::new(Color::Yellow),
            SizeSpecification::new(Size::Large),
        );
        assert_eq!(names(filter(&products, &spec)), ["House"]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let mut products = catalogue();
        products.push(Product::new("Leaf", "Oak leaf", Color::Green, Size::Small));
        products.push(Product::new("Frog", "Tree frog", Color::Green, Size::Small));
        let spec = ColorSpecification::new(Color::Green);
        assert_eq!(names(filter(&products, &spec)), ["Tree", "Leaf", "Frog"]);
    }

    #[test]
    fn test_filter_with_trait_object() {
        let products = catalogue();
        let spec: Box<dyn Specification<Product>> = Box::new(SizeSpecification::new(Size::Small));
        assert_eq!(names(filter(&products, spec.as_ref())), ["Apple"]);
    }

    #[test]
    fn test_filter_is_lazy() {
        struct Probe<'c>(&'c Cell<usize>);

        impl Specification<Product> for Probe<'_> {
            fn is_satisfied(&self, _item: &Product) -> bool {
                self.0.set(self.0.get() + 1);
                true
            }
        }

        let products = catalogue();
        let calls = Cell::new(0);
        let probe = Probe(&calls);
        let mut it = filter(&products, &probe);
        assert_eq!(calls.get(), 0);
        assert_eq!(it.next().map(|p| p.name.as_str()), Some("Apple"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_by_color_matches_spec_based_filter() {
        let products = catalogue();
        let spec = ColorSpecification::new(Color::Red);
        assert_eq!(
            names(ProductFilter.filter_by_color(&products, Color::Red)),
            names(filter(&products, &spec))
        );
    }
}
