use crate::math::{Point, Real, Vector};
use crate::utils::PointSet;
use na;

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is calculated by averaging all the point coordinates. All points
/// are weighted equally, so a point visited twice (for example the same vertex
/// shared by two triangles) counts twice.
///
/// # Panics
///
/// Panics if the point set is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bvfit3d::math::Point;
/// use bvfit3d::utils::center;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
///
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center<P: PointSet + ?Sized>(pts: &P) -> Point<Real> {
    assert!(
        pts.num_points() > 0,
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.num_points() as f64));
    let mut res = Vector::zeros();

    pts.for_each_point(|pt| res += pt.coords * denom);

    Point::from(res)
}
