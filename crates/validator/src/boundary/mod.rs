//! Boundary algebra
//!
//! A [`Boundary`] is one side of a numeric or length range: unlimited, or a
//! limit that is inclusive or exclusive. A [`BoundaryPair`] is a minimum and a
//! maximum that passed conflict detection in [`BoundaryResolver`].
//!
//! # Examples
//!
//! ```
//! use conform_validator::boundary::{Edges, resolve_boundaries};
//!
//! let edges = Edges::<i64>::new().inclusive_minimum(0).exclusive_maximum(100);
//! let pair = resolve_boundaries(&edges).unwrap();
//! assert!(pair.fits(&0));
//! assert!(pair.fits(&99));
//! assert!(!pair.fits(&100));
//! ```

pub mod config;
mod resolver;

pub use config::ResolverConfig;
pub use resolver::{
    BoundaryResolver, resolve_boundaries, resolve_length_boundaries, resolve_size_boundaries,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::value::Value;

// ============================================================================
// SIDE
// ============================================================================

/// Which side of a range a boundary constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Minimum,
    Maximum,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        })
    }
}

// ============================================================================
// BOUNDARY
// ============================================================================

/// One side of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary<T> {
    /// Always satisfied.
    Unlimited,
    /// A concrete edge.
    Limit { value: T, inclusive: bool },
}

impl<T> Boundary<T> {
    #[must_use]
    pub const fn inclusive(value: T) -> Self {
        Self::Limit {
            value,
            inclusive: true,
        }
    }

    #[must_use]
    pub const fn exclusive(value: T) -> Self {
        Self::Limit {
            value,
            inclusive: false,
        }
    }

    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Returns the edge value of a limit.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Unlimited => None,
            Self::Limit { value, .. } => Some(value),
        }
    }

    /// Distance between the edge and the first value it admits on an integer
    /// scale: 0 for inclusive limits, 1 for exclusive ones.
    #[must_use]
    pub const fn alignment(&self) -> u8 {
        match self {
            Self::Limit {
                inclusive: false, ..
            } => 1,
            _ => 0,
        }
    }

    /// Maps the edge value, keeping inclusivity.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Boundary<U> {
        match self {
            Self::Unlimited => Boundary::Unlimited,
            Self::Limit { value, inclusive } => Boundary::Limit {
                value: f(value),
                inclusive,
            },
        }
    }
}

impl<T: PartialOrd> Boundary<T> {
    /// Fit rule for a minimum: `value >= limit` or `value > limit`.
    #[must_use]
    pub fn fits_minimum(&self, value: &T) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limit {
                value: limit,
                inclusive: true,
            } => value >= limit,
            Self::Limit {
                value: limit,
                inclusive: false,
            } => value > limit,
        }
    }

    /// Fit rule for a maximum: `value <= limit` or `value < limit`.
    #[must_use]
    pub fn fits_maximum(&self, value: &T) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limit {
                value: limit,
                inclusive: true,
            } => value <= limit,
            Self::Limit {
                value: limit,
                inclusive: false,
            } => value < limit,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Limit {
                value,
                inclusive: true,
            } => write!(f, "{value} (inclusive)"),
            Self::Limit {
                value,
                inclusive: false,
            } => write!(f, "{value} (exclusive)"),
        }
    }
}

// ============================================================================
// BOUNDARY PAIR
// ============================================================================

/// A minimum and a maximum that passed conflict detection.
///
/// Only [`BoundaryResolver`] builds pairs, so a pair of two limits always
/// admits at least one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPair<T> {
    minimum: Boundary<T>,
    maximum: Boundary<T>,
}

impl<T> BoundaryPair<T> {
    /// A pair that admits everything.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            minimum: Boundary::Unlimited,
            maximum: Boundary::Unlimited,
        }
    }

    pub(crate) const fn new_unchecked(minimum: Boundary<T>, maximum: Boundary<T>) -> Self {
        Self { minimum, maximum }
    }

    #[must_use]
    pub const fn minimum(&self) -> &Boundary<T> {
        &self.minimum
    }

    #[must_use]
    pub const fn maximum(&self) -> &Boundary<T> {
        &self.maximum
    }
}

impl<T: PartialOrd> BoundaryPair<T> {
    /// Returns the side `value` violates, checking the minimum first.
    #[must_use]
    pub fn violated_side(&self, value: &T) -> Option<Side> {
        if !self.minimum.fits_minimum(value) {
            Some(Side::Minimum)
        } else if !self.maximum.fits_maximum(value) {
            Some(Side::Maximum)
        } else {
            None
        }
    }

    #[must_use]
    pub fn fits(&self, value: &T) -> bool {
        self.violated_side(value).is_none()
    }
}

// ============================================================================
// EDGES
// ============================================================================

/// A user-supplied edge: a concrete value or an explicit "unlimited".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge<T> {
    Unlimited,
    Limit(T),
}

/// The four optional edges a caller may supply for a range.
///
/// Per side at most one of the inclusive/exclusive edges may be set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges<T> {
    pub inclusive_minimum: Option<Edge<T>>,
    pub exclusive_minimum: Option<Edge<T>>,
    pub inclusive_maximum: Option<Edge<T>>,
    pub exclusive_maximum: Option<Edge<T>>,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Edges<T> {
    /// No edges supplied.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inclusive_minimum: None,
            exclusive_minimum: None,
            inclusive_maximum: None,
            exclusive_maximum: None,
        }
    }

    /// Inclusive range `[minimum, maximum]`.
    #[must_use]
    pub fn between(minimum: T, maximum: T) -> Self {
        Self::new().inclusive_minimum(minimum).inclusive_maximum(maximum)
    }

    pub fn inclusive_minimum(mut self, value: T) -> Self {
        self.inclusive_minimum = Some(Edge::Limit(value));
        self
    }

    pub fn exclusive_minimum(mut self, value: T) -> Self {
        self.exclusive_minimum = Some(Edge::Limit(value));
        self
    }

    pub fn inclusive_maximum(mut self, value: T) -> Self {
        self.inclusive_maximum = Some(Edge::Limit(value));
        self
    }

    pub fn exclusive_maximum(mut self, value: T) -> Self {
        self.exclusive_maximum = Some(Edge::Limit(value));
        self
    }

    /// Explicitly leaves the minimum unconstrained.
    #[must_use]
    pub fn unlimited_minimum(mut self) -> Self {
        self.inclusive_minimum = Some(Edge::Unlimited);
        self
    }

    /// Explicitly leaves the maximum unconstrained.
    #[must_use]
    pub fn unlimited_maximum(mut self) -> Self {
        self.inclusive_maximum = Some(Edge::Unlimited);
        self
    }

    /// Marks every side with no supplied edge as unlimited.
    ///
    /// Validator builders call this so an omitted side means "no constraint"
    /// rather than a missing boundary.
    #[must_use]
    pub fn or_unlimited(mut self) -> Self {
        if self.inclusive_minimum.is_none() && self.exclusive_minimum.is_none() {
            self.inclusive_minimum = Some(Edge::Unlimited);
        }
        if self.inclusive_maximum.is_none() && self.exclusive_maximum.is_none() {
            self.inclusive_maximum = Some(Edge::Unlimited);
        }
        self
    }
}

// ============================================================================
// BOUNDARY VALUE
// ============================================================================

/// A comparable edge type.
///
/// `aligned` moves a value by a boundary's alignment in a widened domain so
/// the overlap check cannot overflow. Continuous types ignore the alignment;
/// for them a collapsed range is decided by the resolver from inclusivity.
pub trait BoundaryValue: Copy + PartialOrd + fmt::Display + fmt::Debug + Into<Value> {
    /// Domain the overlap comparison runs in.
    type Wide: PartialOrd + Copy;

    /// Whether values are discrete, so that an exclusive edge is equivalent to
    /// the adjacent inclusive one.
    const DISCRETE: bool;

    fn aligned(self, delta: i8) -> Self::Wide;
}

impl BoundaryValue for i64 {
    type Wide = i128;
    const DISCRETE: bool = true;

    fn aligned(self, delta: i8) -> i128 {
        i128::from(self) + i128::from(delta)
    }
}

impl BoundaryValue for usize {
    type Wide = i128;
    const DISCRETE: bool = true;

    fn aligned(self, delta: i8) -> i128 {
        self as i128 + i128::from(delta)
    }
}

impl BoundaryValue for f64 {
    type Wide = f64;
    const DISCRETE: bool = false;

    fn aligned(self, _delta: i8) -> f64 {
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_by_inclusivity() {
        assert_eq!(Boundary::inclusive(3).alignment(), 0);
        assert_eq!(Boundary::exclusive(3).alignment(), 1);
        assert_eq!(Boundary::<i64>::Unlimited.alignment(), 0);
    }

    #[test]
    fn fit_rule_minimum() {
        assert!(Boundary::inclusive(5).fits_minimum(&5));
        assert!(!Boundary::exclusive(5).fits_minimum(&5));
        assert!(Boundary::exclusive(5).fits_minimum(&6));
        assert!(Boundary::<i64>::Unlimited.fits_minimum(&i64::MIN));
    }

    #[test]
    fn fit_rule_maximum() {
        assert!(Boundary::inclusive(5).fits_maximum(&5));
        assert!(!Boundary::exclusive(5).fits_maximum(&5));
        assert!(Boundary::exclusive(5).fits_maximum(&4));
        assert!(Boundary::<i64>::Unlimited.fits_maximum(&i64::MAX));
    }

    #[test]
    fn violated_side_checks_minimum_first() {
        let pair = BoundaryPair::new_unchecked(Boundary::inclusive(0), Boundary::exclusive(10));
        assert_eq!(pair.violated_side(&-1), Some(Side::Minimum));
        assert_eq!(pair.violated_side(&10), Some(Side::Maximum));
        assert_eq!(pair.violated_side(&9), None);
    }

    #[test]
    fn or_unlimited_fills_only_empty_sides() {
        let edges = Edges::<i64>::new().exclusive_minimum(1).or_unlimited();
        assert_eq!(edges.inclusive_minimum, None);
        assert_eq!(edges.exclusive_minimum, Some(Edge::Limit(1)));
        assert_eq!(edges.inclusive_maximum, Some(Edge::Unlimited));
    }

    #[test]
    fn boundary_display() {
        assert_eq!(Boundary::inclusive(3).to_string(), "3 (inclusive)");
        assert_eq!(Boundary::exclusive(3).to_string(), "3 (exclusive)");
        assert_eq!(Boundary::<i64>::Unlimited.to_string(), "unlimited");
    }

    #[test]
    fn widened_alignment_does_not_overflow() {
        assert_eq!(i64::MAX.aligned(1), i128::from(i64::MAX) + 1);
        assert_eq!(0usize.aligned(-1), -1);
    }
}
