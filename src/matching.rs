//! Value matching strategies.
//!
//! Searches by value (`find_vertex`, `is_vertex`, `is_edge`, ...) go through a
//! [`ValueMatcher`] chosen as a type parameter of the graph, the same way edge
//! directionality is a marker type rather than a runtime flag. Identity checks
//! never go through a matcher.
//!
//! Both matchers are reflexive: a value that is unequal to itself (a float
//! NaN) still matches another such value, so it can be found again after it
//! has been stored and never yields two vertices with the same value.

use core::cmp::Ordering;

/// Decides whether a stored value and a probe denote the same vertex.
pub trait ValueMatcher<T: ?Sized> {
    /// Returns true if `stored` matches `probe`.
    fn matches(stored: &T, probe: &T) -> bool;
}

/// Matches with `PartialEq`. The default for every graph.
///
/// For `T: Eq` this is plain `==`. For types whose equality is not reflexive,
/// two values that are each unequal to themselves also match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByEquality;

/// Matches when `PartialOrd` orders the values as equal or `PartialEq` says
/// they are equal.
///
/// For most types this agrees with [`ByEquality`]. It differs for types whose
/// ordering is coarser than their equality; floats are the common case, where
/// `0.0` and `-0.0` order as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByOrdering;

/// True for values that are not equal to themselves.
#[inline]
fn is_irreflexive<T: PartialEq + ?Sized>(value: &T) -> bool {
    let same = value;
    value != same
}

impl<T: PartialEq + ?Sized> ValueMatcher<T> for ByEquality {
    #[inline]
    fn matches(stored: &T, probe: &T) -> bool {
        stored == probe || (is_irreflexive(stored) && is_irreflexive(probe))
    }
}

impl<T: PartialOrd + ?Sized> ValueMatcher<T> for ByOrdering {
    #[inline]
    fn matches(stored: &T, probe: &T) -> bool {
        matches!(stored.partial_cmp(probe), Some(Ordering::Equal))
            || stored == probe
            || (is_irreflexive(stored) && is_irreflexive(probe))
    }
}
