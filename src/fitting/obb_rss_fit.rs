use crate::bounding_volume::{Obb, ObbRss, Rss};
use crate::fitting::{BvKind, FitBoundingVolume, FittedVolume};
use crate::math::{Point, Real};
use crate::utils::{self, PointSet, SymmetricEigenSolver};

impl FitBoundingVolume for ObbRss {
    const KIND: BvKind = BvKind::ObbRss;

    fn fit_point(pt: &Point<Real>) -> Self {
        ObbRss::from_point(*pt)
    }

    fn fit_segment(a: &Point<Real>, b: &Point<Real>) -> Self {
        ObbRss::new(Obb::fit_segment(a, b), Rss::fit_segment(a, b))
    }

    fn fit_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        ObbRss::new(Obb::fit_triangle(a, b, c), Rss::fit_triangle(a, b, c))
    }

    fn fit_point_set<P, S>(pts: &P, solver: &S) -> Self
    where
        P: PointSet + ?Sized,
        S: SymmetricEigenSolver + ?Sized,
    {
        // Both components share the same axes: decompose the covariance only once.
        let axes = utils::point_set_principal_axes(pts, solver);
        let (center, half_extents) = utils::extent_and_center(pts, &axes);
        let (origin, lengths, radius) = utils::swept_rectangle(pts, &axes);

        ObbRss::new(
            Obb::new(center, axes, half_extents),
            Rss::new(origin, axes, lengths, radius),
        )
    }

    fn into_fitted(self) -> FittedVolume {
        FittedVolume::ObbRss(self)
    }
}
