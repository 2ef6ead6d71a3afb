//! Boundary pair resolution and conflict detection

use std::cmp::Ordering;

use super::config::ResolverConfig;
use super::{Boundary, BoundaryPair, BoundaryValue, Edge, Edges, Side};
use crate::foundation::{ValidationError, ValidationResult, Value};

/// Turns user-supplied edges into a validated [`BoundaryPair`].
///
/// Resolution is pure: the same edges and configuration always produce the
/// same pair or the same error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryResolver {
    config: ResolverConfig,
}

impl BoundaryResolver {
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves value edges.
    ///
    /// Each side takes exactly one of its inclusive/exclusive edges. When both
    /// sides are limits the range must admit more than one value, unless
    /// `allow_single_match` is set.
    pub fn resolve<T: BoundaryValue>(&self, edges: &Edges<T>) -> ValidationResult<BoundaryPair<T>> {
        let minimum = resolve_side(Side::Minimum, edges.inclusive_minimum, edges.exclusive_minimum)?;
        let maximum = resolve_side(Side::Maximum, edges.inclusive_maximum, edges.exclusive_maximum)?;
        self.check_pair(minimum, maximum)
    }

    /// Resolves length edges, rejecting any edge outside `[0, max_length]`.
    pub fn resolve_length(&self, edges: &Edges<i64>) -> ValidationResult<BoundaryPair<usize>> {
        self.resolve_measure(edges, self.config.max_length, |side, value, limit| {
            ValidationError::InvalidLength { side, value, limit }
        })
    }

    /// Resolves size edges, rejecting any edge outside `[0, max_size]`.
    pub fn resolve_size(&self, edges: &Edges<i64>) -> ValidationResult<BoundaryPair<usize>> {
        self.resolve_measure(edges, self.config.max_size, |side, value, limit| {
            ValidationError::InvalidSize { side, value, limit }
        })
    }

    fn resolve_measure(
        &self,
        edges: &Edges<i64>,
        limit: usize,
        invalid: fn(Side, i64, usize) -> ValidationError,
    ) -> ValidationResult<BoundaryPair<usize>> {
        let to_measure = |side: Side, boundary: Boundary<i64>| -> ValidationResult<Boundary<usize>> {
            match boundary {
                Boundary::Unlimited => Ok(Boundary::Unlimited),
                Boundary::Limit { value, inclusive } => match usize::try_from(value) {
                    Ok(measure) if measure <= limit => Ok(Boundary::Limit {
                        value: measure,
                        inclusive,
                    }),
                    _ => Err(invalid(side, value, limit)),
                },
            }
        };

        let minimum = resolve_side(Side::Minimum, edges.inclusive_minimum, edges.exclusive_minimum)?;
        let minimum = to_measure(Side::Minimum, minimum)?;
        let maximum = resolve_side(Side::Maximum, edges.inclusive_maximum, edges.exclusive_maximum)?;
        let maximum = to_measure(Side::Maximum, maximum)?;
        self.check_pair(minimum, maximum)
    }

    fn check_pair<T: BoundaryValue>(
        &self,
        minimum: Boundary<T>,
        maximum: Boundary<T>,
    ) -> ValidationResult<BoundaryPair<T>> {
        let (
            Boundary::Limit {
                value: low,
                inclusive: low_inclusive,
            },
            Boundary::Limit {
                value: high,
                inclusive: high_inclusive,
            },
        ) = (minimum, maximum)
        else {
            return Ok(BoundaryPair::new_unchecked(minimum, maximum));
        };

        let lowest = low.aligned(alignment(minimum));
        let highest = high.aligned(-alignment(maximum));

        let collapsed = match lowest.partial_cmp(&highest) {
            Some(Ordering::Less) => false,
            Some(Ordering::Equal) if T::DISCRETE || (low_inclusive && high_inclusive) => true,
            _ => {
                tracing::trace!(%minimum, %maximum, "overlapping boundaries");
                return Err(ValidationError::OverlappingBoundaries {
                    minimum: minimum.map(Into::into),
                    maximum: maximum.map(Into::into),
                });
            }
        };

        if collapsed && !self.config.allow_single_match {
            tracing::trace!(%minimum, %maximum, "single match boundaries");
            return Err(ValidationError::SingleMatchBoundaries {
                minimum: minimum.map(Into::into),
                maximum: maximum.map(Into::into),
            });
        }

        Ok(BoundaryPair::new_unchecked(minimum, maximum))
    }
}

fn alignment<T>(boundary: Boundary<T>) -> i8 {
    // alignment() is 0 or 1
    boundary.alignment() as i8
}

fn resolve_side<T: Into<Value>>(
    side: Side,
    inclusive: Option<Edge<T>>,
    exclusive: Option<Edge<T>>,
) -> ValidationResult<Boundary<T>> {
    match (inclusive, exclusive) {
        (Some(inclusive), Some(exclusive)) => Err(ValidationError::MutuallyExclusiveBoundaries {
            side,
            inclusive: edge_to_boundary(inclusive, true).map(Into::into),
            exclusive: edge_to_boundary(exclusive, false).map(Into::into),
        }),
        (Some(edge), None) => Ok(edge_to_boundary(edge, true)),
        (None, Some(edge)) => Ok(edge_to_boundary(edge, false)),
        (None, None) => Err(ValidationError::MissingBoundary { side }),
    }
}

fn edge_to_boundary<T>(edge: Edge<T>, inclusive: bool) -> Boundary<T> {
    match edge {
        Edge::Unlimited => Boundary::Unlimited,
        Edge::Limit(value) => Boundary::Limit { value, inclusive },
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Resolves value edges with the default (strict) configuration.
pub fn resolve_boundaries<T: BoundaryValue>(edges: &Edges<T>) -> ValidationResult<BoundaryPair<T>> {
    BoundaryResolver::default().resolve(edges)
}

/// Resolves length edges with the default (strict) configuration.
pub fn resolve_length_boundaries(edges: &Edges<i64>) -> ValidationResult<BoundaryPair<usize>> {
    BoundaryResolver::default().resolve_length(edges)
}

/// Resolves size edges with the default (strict) configuration.
pub fn resolve_size_boundaries(edges: &Edges<i64>) -> ValidationResult<BoundaryPair<usize>> {
    BoundaryResolver::default().resolve_size(edges)
}

// ============================================================================
// TESTS
// ============================================================================
