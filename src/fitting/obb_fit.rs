use crate::bounding_volume::Obb;
use crate::fitting::{BvKind, FitBoundingVolume, FittedVolume};
use crate::math::{Point, Real, Vector};
use crate::utils::{self, PointSet, SymmetricEigenSolver};
use na;

impl FitBoundingVolume for Obb {
    const KIND: BvKind = BvKind::Obb;

    fn fit_point(pt: &Point<Real>) -> Self {
        Obb::from_point(*pt)
    }

    fn fit_segment(a: &Point<Real>, b: &Point<Real>) -> Self {
        let (axes, length) = utils::segment_frame(a, b);
        Obb::new(na::center(a, b), axes, Vector::new(length * 0.5, 0.0, 0.0))
    }

    fn fit_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let axes = utils::triangle_frame(a, b, c);
        let (center, half_extents) = utils::extent_and_center(&[*a, *b, *c], &axes);
        Obb::new(center, axes, half_extents)
    }

    fn fit_point_set<P, S>(pts: &P, solver: &S) -> Self
    where
        P: PointSet + ?Sized,
        S: SymmetricEigenSolver + ?Sized,
    {
        let axes = utils::point_set_principal_axes(pts, solver);
        let (center, half_extents) = utils::extent_and_center(pts, &axes);
        Obb::new(center, axes, half_extents)
    }

    fn into_fitted(self) -> FittedVolume {
        FittedVolume::Obb(self)
    }
}
