use crate::math::{Matrix, Point, Real};
use crate::utils::PointSet;
use na;

/// Computes the covariance matrix of a set of points.
pub fn cov<P: PointSet + ?Sized>(pts: &P) -> Matrix<Real> {
    center_cov(pts).1
}

/// Computes the center and the covariance matrix of a set of points.
///
/// # Panics
///
/// Panics if the point set is empty.
pub fn center_cov<P: PointSet + ?Sized>(pts: &P) -> (Point<Real>, Matrix<Real>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<Real> = na::zero();
    let normalizer: Real = na::convert::<f64, Real>(1.0 / (pts.num_points() as f64));

    pts.for_each_point(|p| {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    });

    (center, cov)
}
