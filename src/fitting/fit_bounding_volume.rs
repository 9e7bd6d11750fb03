use crate::bounding_volume::BoundingVolume;
use crate::fitting::{BvKind, FitError, FittedVolume};
use crate::math::{Point, Real};
use crate::utils::{NalgebraEigenSolver, PointSet, SymmetricEigenSolver};

/// Trait of bounding volumes that can be fitted around a set of points.
///
/// Implementors provide exact constructions for one point, one segment and one
/// triangle, and a general construction based on the principal axes of the
/// point set. [`FitBoundingVolume::fit`] picks the right one from the number
/// of points:
///
/// - 1, 2 and 3 points use the exact constructions;
/// - 6 points are seen as two triangles, fitted separately then merged;
/// - any other number of points uses the general construction.
pub trait FitBoundingVolume: BoundingVolume + Sized {
    /// The family of this bounding volume.
    const KIND: BvKind;

    /// Fits this bounding volume around a single point.
    fn fit_point(pt: &Point<Real>) -> Self;

    /// Fits this bounding volume around the segment `[a, b]`.
    fn fit_segment(a: &Point<Real>, b: &Point<Real>) -> Self;

    /// Fits this bounding volume around the triangle `abc`.
    fn fit_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self;

    /// Fits this bounding volume around any number of points, using the
    /// eigenvectors of their covariance matrix as axes.
    ///
    /// # Panics
    ///
    /// Panics if the point set is empty.
    fn fit_point_set<P, S>(pts: &P, solver: &S) -> Self
    where
        P: PointSet + ?Sized,
        S: SymmetricEigenSolver + ?Sized;

    /// Wraps this bounding volume into a [`FittedVolume`].
    fn into_fitted(self) -> FittedVolume;

    /// Fits this bounding volume around `pts`, using `solver` for the general construction.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    fn fit_with_solver<S: SymmetricEigenSolver + ?Sized>(pts: &[Point<Real>], solver: &S) -> Self {
        match pts {
            [] => panic!("Cannot fit a bounding volume around less than 1 point."),
            [a] => Self::fit_point(a),
            [a, b] => Self::fit_segment(a, b),
            [a, b, c] => Self::fit_triangle(a, b, c),
            [a, b, c, d, e, f] => Self::fit_triangle(a, b, c).merged(&Self::fit_triangle(d, e, f)),
            _ => Self::fit_point_set(pts, solver),
        }
    }

    /// Fits this bounding volume around `pts`.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty. See [`FitBoundingVolume::try_fit`] for a
    /// non-panicking version.
    fn fit(pts: &[Point<Real>]) -> Self {
        Self::fit_with_solver(pts, &NalgebraEigenSolver)
    }

    /// Fits this bounding volume around `pts`, or returns an error if `pts` is empty.
    fn try_fit(pts: &[Point<Real>]) -> Result<Self, FitError> {
        if pts.is_empty() {
            Err(FitError::EmptyPointSet)
        } else {
            Ok(Self::fit(pts))
        }
    }
}
