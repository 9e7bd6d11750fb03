use crate::bounding_volume::Rss;
use crate::fitting::{BvKind, FitBoundingVolume, FittedVolume};
use crate::math::{Point, Real};
use crate::utils::{self, PointSet, SymmetricEigenSolver};

impl FitBoundingVolume for Rss {
    const KIND: BvKind = BvKind::Rss;

    fn fit_point(pt: &Point<Real>) -> Self {
        Rss::from_point(*pt)
    }

    fn fit_segment(a: &Point<Real>, b: &Point<Real>) -> Self {
        // The rectangle starts at `b` and goes toward `a`.
        let (axes, length) = utils::segment_frame(a, b);
        Rss::new(*b, axes, [length, 0.0], 0.0)
    }

    fn fit_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let axes = utils::triangle_frame(a, b, c);
        let (origin, lengths, radius) = utils::swept_rectangle(&[*a, *b, *c], &axes);
        Rss::new(origin, axes, lengths, radius)
    }

    fn fit_point_set<P, S>(pts: &P, solver: &S) -> Self
    where
        P: PointSet + ?Sized,
        S: SymmetricEigenSolver + ?Sized,
    {
        let axes = utils::point_set_principal_axes(pts, solver);
        let (origin, lengths, radius) = utils::swept_rectangle(pts, &axes);
        Rss::new(origin, axes, lengths, radius)
    }

    fn into_fitted(self) -> FittedVolume {
        FittedVolume::Rss(self)
    }
}
