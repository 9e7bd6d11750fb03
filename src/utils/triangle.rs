use crate::math::{Point, Real, DEFAULT_EPSILON};
use na;

/// The circumcircle of the triangle `abc`, as its center and radius.
///
/// If the triangle is degenerate (the three points are colinear), the circle
/// with the longest segment as diameter is returned instead. In both cases the
/// radius is the distance from the center to the farthest vertex.
pub fn circumcircle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> (Point<Real>, Real) {
    let ac = a - c;
    let bc = b - c;

    let nac = ac.norm_squared();
    let nbc = bc.norm_squared();

    let dab = ac.dot(&bc);
    let denom = 2.0 * (nac * nbc - dab * dab);

    let center = if denom <= DEFAULT_EPSILON * nac * nbc {
        // The triangle is degenerate, so we find the longest segment and take its center.
        let nab = (a - b).norm_squared();

        if nab >= nac && nab >= nbc {
            na::center(a, b)
        } else if nac >= nbc && nac >= nab {
            na::center(a, c)
        } else {
            na::center(b, c)
        }
    } else {
        let k = bc * nac - ac * nbc;
        c + (ac * k.dot(&bc) - bc * k.dot(&ac)) / denom
    };

    let radius = na::distance(a, &center)
        .max(na::distance(b, &center))
        .max(na::distance(c, &center));

    (center, radius)
}
