//! Projection of point sets onto a fixed frame.

use crate::math::{Matrix, Point, Real, Vector};
use crate::utils::PointSet;
use na;

/// Computes the center and half-extents of the smallest box with the given
/// axes enclosing a point set.
///
/// The axes are the columns of `axes` and must be orthonormal.
///
/// # Panics
///
/// Panics if the point set is empty.
pub fn extent_and_center<P: PointSet + ?Sized>(
    pts: &P,
    axes: &Matrix<Real>,
) -> (Point<Real>, Vector<Real>) {
    assert!(
        pts.num_points() > 0,
        "Cannot compute the extents of less than 1 point."
    );

    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    pts.for_each_point(|pt| {
        let proj = axes.tr_mul(&pt.coords);
        mins = mins.inf(&proj);
        maxs = maxs.sup(&proj);
    });

    let center = axes * ((mins + maxs) * 0.5);
    let half_extents = ((maxs - mins) * 0.5).map(|e| e.max(0.0));

    (Point::from(center), half_extents)
}

/// Computes the distance between `query` and the point of `pts` furthest from it.
///
/// Returns zero if the point set is empty.
pub fn maximum_distance<P: PointSet + ?Sized>(pts: &P, query: &Point<Real>) -> Real {
    let mut max_sq_dist: Real = 0.0;

    pts.for_each_point(|pt| {
        max_sq_dist = max_sq_dist.max(na::distance_squared(pt, query));
    });

    max_sq_dist.sqrt()
}

/// Computes a rectangle swept by a sphere, with the given axes, enclosing a point set.
///
/// The rectangle lies on the plane spanned by the first two columns of `axes`.
/// Returns its origin (the corner with the smallest coordinates along the
/// first two axes), its side lengths along the first two axes, and the sweep radius.
///
/// The radius is half the thickness of the point set along the third axis. The
/// rectangle sides are then shrunk as much as the sphere allows, and grown
/// along the diagonal wherever a point falls outside of a rounded corner.
///
/// # Panics
///
/// Panics if the point set is empty.
pub fn swept_rectangle<P: PointSet + ?Sized>(
    pts: &P,
    axes: &Matrix<Real>,
) -> (Point<Real>, [Real; 2], Real) {
    assert!(
        pts.num_points() > 0,
        "Cannot compute the swept rectangle of less than 1 point."
    );

    let mut min_z = Real::MAX;
    let mut max_z = -Real::MAX;

    pts.for_each_point(|pt| {
        let z = axes.column(2).dot(&pt.coords);
        min_z = min_z.min(z);
        max_z = max_z.max(z);
    });

    let radius = ((max_z - min_z) * 0.5).max(0.0);
    let sq_radius = radius * radius;
    let cz = (max_z + min_z) * 0.5;
    // Half-width of the sphere's cross-section at the height `z`.
    let half_chord = |z: Real| (sq_radius - (z - cz) * (z - cz)).max(0.0).sqrt();

    let [mut min_x, mut max_x] = rectangle_side(pts, axes, 0, &half_chord);
    let [mut min_y, mut max_y] = rectangle_side(pts, axes, 1, &half_chord);

    // Points lying beyond both sides of a corner may still be outside of the
    // rounded corner. Push the corner outward along the diagonal.
    let a = Real::sqrt(0.5);

    pts.for_each_point(|pt| {
        let proj = axes.tr_mul(&pt.coords);

        let sx: Real = if proj.x > max_x {
            1.0
        } else if proj.x < min_x {
            -1.0
        } else {
            return;
        };
        let sy: Real = if proj.y > max_y {
            1.0
        } else if proj.y < min_y {
            -1.0
        } else {
            return;
        };

        let corner_x = if sx > 0.0 { max_x } else { min_x };
        let corner_y = if sy > 0.0 { max_y } else { min_y };
        let dx = (proj.x - corner_x) * sx;
        let dy = (proj.y - corner_y) * sy;
        let dz = cz - proj.z;

        let u = dx * a + dy * a;
        let t = (a * u - dx) * (a * u - dx) + (a * u - dy) * (a * u - dy) + dz * dz;
        let u = u - (sq_radius - t).max(0.0).sqrt();

        if u > 0.0 {
            if sx > 0.0 {
                max_x += u * a;
            } else {
                min_x -= u * a;
            }

            if sy > 0.0 {
                max_y += u * a;
            } else {
                min_y -= u * a;
            }
        }
    });

    let origin = axes * Vector::new(min_x, min_y, cz);
    let lengths = [(max_x - min_x).max(0.0), (max_y - min_y).max(0.0)];

    (Point::from(origin), lengths, radius)
}

/// Computes the interval `[min, max]` along the axis `i` such that every point
/// is within reach of the sphere swept between `min` and `max`, ignoring the
/// other in-plane axis.
fn rectangle_side<P: PointSet + ?Sized>(
    pts: &P,
    axes: &Matrix<Real>,
    i: usize,
    half_chord: &impl Fn(Real) -> Real,
) -> [Real; 2] {
    let axis = axes.column(i);
    let normal = axes.column(2);

    // Start from the two extreme points along the axis.
    let mut lowest: Option<(Real, Real)> = None;
    let mut highest: Option<(Real, Real)> = None;

    pts.for_each_point(|pt| {
        let x = axis.dot(&pt.coords);
        let z = normal.dot(&pt.coords);

        if lowest.map(|l| x < l.0).unwrap_or(true) {
            lowest = Some((x, z));
        }
        if highest.map(|h| x > h.0).unwrap_or(true) {
            highest = Some((x, z));
        }
    });

    let (Some((lo_x, lo_z)), Some((hi_x, hi_z))) = (lowest, highest) else {
        return [0.0; 2];
    };

    let mut min = lo_x + half_chord(lo_z);
    let mut max = hi_x - half_chord(hi_z);

    // Then grow the interval until every point is within reach of one of its ends.
    pts.for_each_point(|pt| {
        let x = axis.dot(&pt.coords);

        if x < min {
            let z = normal.dot(&pt.coords);
            min = min.min(x + half_chord(z));
        }
        if x > max {
            let z = normal.dot(&pt.coords);
            max = max.max(x - half_chord(z));
        }
    });

    // Every point reaches any value between `max` and `min` when they cross.
    if max < min {
        let mid = (min + max) * 0.5;
        [mid, mid]
    } else {
        [min, max]
    }
}
