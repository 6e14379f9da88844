//! # Product catalogue model and its specifications.
//!
//! - [`Product`] the filtered entity
//! - [`Color`], [`Size`] closed attribute sets, parseable from their names
//! - [`ColorSpecification`], [`SizeSpecification`] single-attribute criteria

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

use super::Specification;

/// Product colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

/// Product size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Color {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl Size {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl FromStr for Color {
    type Err = PatternError;

    /// Parses a colour name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            _ => Err(PatternError::invalid("color", s)),
        }
    }
}

impl FromStr for Size {
    type Err = PatternError;

    /// Parses a size name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(PatternError::invalid("size", s)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogue entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    /// Builds a product from its attributes.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: Color,
        size: Size,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            color,
            size,
        }
    }
}

/// Matches products of one colour.
#[derive(Clone, Copy, Debug)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Matches products of one size.
#[derive(Clone, Copy, Debug)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}
