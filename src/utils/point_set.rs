use crate::math::{Point, Real};

/// A read-only collection of points that can be visited without being copied.
///
/// The covariance estimator and the projectors only need to iterate over the
/// points, so they accept any `PointSet`: a plain slice, or an indexed view
/// into a shared vertex buffer (see [`IndexedPoints`](crate::fitting::IndexedPoints)).
///
/// Implementations must visit the same points, in the same order, every time
/// [`PointSet::for_each_point`] is called.
pub trait PointSet {
    /// The number of points visited by [`PointSet::for_each_point`].
    fn num_points(&self) -> usize;

    /// Calls `f` on every point of this set.
    fn for_each_point(&self, f: impl FnMut(&Point<Real>));
}

impl PointSet for [Point<Real>] {
    #[inline]
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn for_each_point(&self, f: impl FnMut(&Point<Real>)) {
        self.iter().for_each(f)
    }
}

impl<const N: usize> PointSet for [Point<Real>; N] {
    #[inline]
    fn num_points(&self) -> usize {
        N
    }

    #[inline]
    fn for_each_point(&self, f: impl FnMut(&Point<Real>)) {
        self.iter().for_each(f)
    }
}

impl PointSet for Vec<Point<Real>> {
    #[inline]
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn for_each_point(&self, f: impl FnMut(&Point<Real>)) {
        self.iter().for_each(f)
    }
}
