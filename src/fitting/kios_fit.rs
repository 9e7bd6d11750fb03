use crate::bounding_volume::{BoundingSphere, KIos, Obb};
use crate::fitting::{BvKind, FitBoundingVolume, FittedVolume};
use crate::math::{Point, Real, Vector};
use crate::utils::{self, PointSet, SymmetricEigenSolver, COS_A, INV_SIN_A, KIOS_RATIO};
use arrayvec::ArrayVec;

impl FitBoundingVolume for KIos {
    const KIND: BvKind = BvKind::KIos;

    fn fit_point(pt: &Point<Real>) -> Self {
        KIos::from_point(*pt)
    }

    fn fit_segment(a: &Point<Real>, b: &Point<Real>) -> Self {
        let obb = Obb::fit_segment(a, b);
        let r0 = obb.half_extents.x;
        let r1 = r0 * INV_SIN_A;

        let mut spheres = ArrayVec::new();
        spheres.push(BoundingSphere::new(obb.center, r0));

        for i in 1..3 {
            let delta = obb.axis(i) * (r1 * COS_A);
            spheres.push(BoundingSphere::new(obb.center - delta, r1));
            spheres.push(BoundingSphere::new(obb.center + delta, r1));
        }

        KIos::new(obb, spheres)
    }

    fn fit_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let obb = Obb::fit_triangle(a, b, c);
        let (center, r0) = utils::circumcircle(a, b, c);
        let r1 = r0 * INV_SIN_A;
        let delta = obb.axis(2) * (r1 * COS_A);

        let spheres = [
            BoundingSphere::new(center, r0),
            BoundingSphere::new(center - delta, r1),
            BoundingSphere::new(center + delta, r1),
        ];

        KIos::new(obb, spheres.into_iter().collect())
    }

    fn fit_point_set<P, S>(pts: &P, solver: &S) -> Self
    where
        P: PointSet + ?Sized,
        S: SymmetricEigenSolver + ?Sized,
    {
        let obb = Obb::fit_point_set(pts, solver);
        let center = obb.center;
        let extents = obb.half_extents;
        let r0 = utils::maximum_distance(pts, &center);

        let num_spheres = num_spheres(&extents);
        log::trace!(
            "Fitting a kIOS with {} spheres (half-extents: {:?}).",
            num_spheres,
            extents
        );

        let mut spheres = ArrayVec::new();
        spheres.push(BoundingSphere::new(center, r0));

        if num_spheres >= 3 {
            let r10 = (r0 * r0 - extents.z * extents.z).max(0.0).sqrt() * INV_SIN_A;
            let offset = r10 * COS_A - extents.z;
            spheres.extend(sphere_pair(pts, &center, &obb.axis(2), offset, r10));

            if num_spheres >= 5 {
                let offset = (r10 * r10 - extents.x * extents.x - extents.z * extents.z)
                    .max(0.0)
                    .sqrt()
                    - extents.y;
                spheres.extend(sphere_pair(pts, &center, &obb.axis(1), offset, r10));
            }
        }

        KIos::new(obb, spheres)
    }

    fn into_fitted(self) -> FittedVolume {
        FittedVolume::KIos(self)
    }
}

/// The number of spheres of a kIOS, from the half-extents of its box.
///
/// Elongated boxes get more spheres: 3 for a flat box, 5 for a thin one.
pub(crate) fn num_spheres(half_extents: &Vector<Real>) -> usize {
    if half_extents.x > KIOS_RATIO * half_extents.z {
        if half_extents.x > KIOS_RATIO * half_extents.y {
            5
        } else {
            3
        }
    } else {
        1
    }
}

/// Places two spheres of radius `radius` at `center ∓ axis * offset`, then
/// moves each of them once along `axis` by how much it misses the furthest
/// point of `pts`.
fn sphere_pair<P: PointSet + ?Sized>(
    pts: &P,
    center: &Point<Real>,
    axis: &Vector<Real>,
    offset: Real,
    radius: Real,
) -> [BoundingSphere; 2] {
    let delta = axis * offset;
    let mut lo = center - delta;
    let mut hi = center + delta;

    let lo_reach = utils::maximum_distance(pts, &lo);
    let hi_reach = utils::maximum_distance(pts, &hi);
    lo += axis * (lo_reach - radius);
    hi += axis * (radius - hi_reach);

    [
        BoundingSphere::new(lo, radius),
        BoundingSphere::new(hi, radius),
    ]
}
