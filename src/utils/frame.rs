use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils::WBasis;

/// Completes a unit vector into a right-handed orthonormal frame.
///
/// The first column of the result is `axis0` and the third column is computed
/// as the cross product of the first two.
pub fn basis_from_axis(axis0: &Vector<Real>) -> Matrix<Real> {
    let [axis1, _] = axis0.orthonormal_basis();
    let axis2 = axis0.cross(&axis1);
    Matrix::from_columns(&[*axis0, axis1, axis2])
}

/// Computes the frame of the segment `[b, a]` and its length.
///
/// The first axis is the direction from `b` to `a`. If both points coincide,
/// the `+X` axis is used instead.
pub fn segment_frame(a: &Point<Real>, b: &Point<Real>) -> (Matrix<Real>, Real) {
    let ab = a - b;
    let length = ab.norm();

    let axis0 = if length > 0.0 {
        ab / length
    } else {
        log::debug!("Fitting a segment with coincident endpoints {:?}.", a);
        Vector::x()
    };

    (basis_from_axis(&axis0), length)
}

/// Computes the frame of the triangle `abc`.
///
/// The third axis is the triangle normal and the first axis follows the
/// longest of the edges `a - b`, `b - c`, `c - a` (the first one in that order
/// on ties). Degenerate triangles get the frame of their longest edge.
pub fn triangle_frame(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Matrix<Real> {
    let edges = [a - b, b - c, c - a];
    let sq_lengths = edges.map(|e| e.norm_squared());

    let mut imax = 0;
    if sq_lengths[1] > sq_lengths[imax] {
        imax = 1;
    }
    if sq_lengths[2] > sq_lengths[imax] {
        imax = 2;
    }

    let normal = edges[0].cross(&edges[1]);
    let max_sq_length = sq_lengths[imax];

    if max_sq_length == 0.0 || normal.norm() <= DEFAULT_EPSILON.sqrt() * max_sq_length {
        log::debug!("Fitting a degenerate triangle {:?}.", [a, b, c]);
        let axis0 = edges[imax]
            .try_normalize(0.0)
            .unwrap_or_else(Vector::x);
        return basis_from_axis(&axis0);
    }

    let axis0 = edges[imax] / max_sq_length.sqrt();
    let Some(axis1) = normal.cross(&axis0).try_normalize(DEFAULT_EPSILON) else {
        log::debug!("Fitting a degenerate triangle {:?}.", [a, b, c]);
        return basis_from_axis(&axis0);
    };
    let axis2 = axis0.cross(&axis1);

    Matrix::from_columns(&[axis0, axis1, axis2])
}
