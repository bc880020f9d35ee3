//! Distance algebra shared by every shortest-path search.
//!
//! A relaxer fixes what "better" means: [`ShortestDistance`] minimizes sums,
//! [`CriticalDistance`] maximizes them (longest / critical paths). Because a
//! relaxer is also a [`Comparator`], it orders the priority queue directly.
//!
//! Distances are bounded: the type's maximum (or minimum) stands in for
//! infinity, including for floats, and `combine` saturates at both bounds so a
//! sum that would overflow reads as unreached instead of wrapping.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Sub};

use num_traits::{Bounded, Zero};

use crate::collections::Comparator;

/// Numeric distance and weight values.
pub trait Weight:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Zero + Bounded + Debug
{
}

impl<T> Weight for T where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> + Zero + Bounded + Debug
{
}

/// `distance + weight`, clamped to `[min_value, max_value]`.
#[inline]
fn saturating_sum<D: Weight>(distance: D, weight: D) -> D {
    if weight >= D::zero() {
        if distance > D::max_value() - weight {
            return D::max_value();
        }
    } else if distance < D::min_value() - weight {
        return D::min_value();
    }
    distance + weight
}

/// Distance algebra: an initial value, a combination rule and an order.
pub trait DistanceRelaxer<D>: Comparator<D> + Copy {
    /// Distance of a vertex that has not been reached.
    fn initial_distance(&self) -> D;

    /// Extends `distance` by an edge of `weight`.
    fn combine(&self, distance: D, weight: D) -> D;

    /// Returns `true` if `distance` is the unreached marker.
    #[inline]
    fn is_unreached(&self, distance: &D) -> bool {
        self.compare(distance, &self.initial_distance()) == Ordering::Equal
    }

    /// Returns `true` if `tentative` strictly improves on `current`.
    #[inline]
    fn relax(&self, tentative: &D, current: &D) -> bool {
        self.compare(tentative, current) == Ordering::Less
    }
}

/// Smaller sums are better; unreached vertices sit at the maximum value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestDistance;

impl<D: Weight> Comparator<D> for ShortestDistance {
    #[inline]
    fn compare(&self, a: &D, b: &D) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

impl<D: Weight> DistanceRelaxer<D> for ShortestDistance {
    fn initial_distance(&self) -> D {
        D::max_value()
    }

    #[inline]
    fn combine(&self, distance: D, weight: D) -> D {
        saturating_sum(distance, weight)
    }
}

/// Larger sums are better; unreached vertices sit at the minimum value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriticalDistance;

impl<D: Weight> Comparator<D> for CriticalDistance {
    #[inline]
    fn compare(&self, a: &D, b: &D) -> Ordering {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    }
}

impl<D: Weight> DistanceRelaxer<D> for CriticalDistance {
    fn initial_distance(&self) -> D {
        D::min_value()
    }

    #[inline]
    fn combine(&self, distance: D, weight: D) -> D {
        saturating_sum(distance, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_prefers_smaller() {
        let r = ShortestDistance;
        assert_eq!(DistanceRelaxer::<u32>::initial_distance(&r), u32::MAX);
        assert!(r.relax(&3u32, &5));
        assert!(!r.relax(&5u32, &5));
        assert_eq!(r.combine(2i64, 3), 5);
    }

    #[test]
    fn critical_prefers_larger() {
        let r = CriticalDistance;
        assert_eq!(DistanceRelaxer::<i32>::initial_distance(&r), i32::MIN);
        assert!(r.relax(&7i32, &5));
        assert!(!r.relax(&5i32, &7));
        assert_eq!(r.compare(&1.0f64, &2.0), Ordering::Greater);
    }

    #[test]
    fn combine_saturates_at_the_bounds() {
        let r = ShortestDistance;
        assert_eq!(r.combine(u64::MAX - 1, 5), u64::MAX);
        assert_eq!(r.combine(3u64, u64::MAX), u64::MAX);
        assert_eq!(r.combine(i64::MIN + 1, -5), i64::MIN);
        assert_eq!(r.combine(2.0f64, f64::INFINITY), f64::MAX);
        assert_eq!(CriticalDistance.combine(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn initial_distance_is_unreached() {
        let r = ShortestDistance;
        assert!(r.is_unreached(&u64::MAX));
        assert!(r.is_unreached(&r.combine(1.0f64, f64::INFINITY)));
        assert!(!r.is_unreached(&0u64));
        assert!(CriticalDistance.is_unreached(&i32::MIN));
        assert!(!CriticalDistance.is_unreached(&i32::MAX));
    }

    #[test]
    fn nan_never_relaxes() {
        let r = ShortestDistance;
        assert!(!r.relax(&f64::NAN, &1.0));
        assert!(!r.relax(&1.0, &f64::NAN));
        assert_eq!(r.compare(&f64::NAN, &0.0), Ordering::Equal);
    }
}
