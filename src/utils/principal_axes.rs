use crate::math::{Matrix, Real, Vector};
use crate::utils::{PointSet, SymmetricEigenSolver};
use core::cmp::Reverse;
use ordered_float::OrderedFloat;

/// Orders the eigenpairs of a covariance matrix into a right-handed frame.
///
/// The first column of the result is the eigenvector with the largest
/// eigenvalue, the second column the eigenvector with the middle eigenvalue.
/// The third column is always recomputed as the cross product of the first two,
/// so the frame is right-handed even if the solver returned a reflection.
///
/// Exactly equal eigenvalues are resolved deterministically: the lowest index
/// of a tied group takes the middle slot.
pub fn principal_axes(eigenvalues: &Vector<Real>, eigenvectors: &Matrix<Real>) -> Matrix<Real> {
    let mut order = [0usize, 1, 2];
    // Decreasing eigenvalues. On ties the higher index comes first, so the
    // lowest index of a tie at the top lands in the middle slot.
    order.sort_by_key(|&i| (Reverse(OrderedFloat(eigenvalues[i])), Reverse(i)));

    // Same rule for a tie at the bottom.
    if eigenvalues[order[1]] == eigenvalues[order[2]] && order[2] < order[1] {
        order.swap(1, 2);
    }

    let (max, mid) = (order[0], order[1]);

    let axis0 = eigenvectors.column(max).into_owned();
    let axis1 = eigenvectors.column(mid).into_owned();
    let axis2 = axis0.cross(&axis1);

    Matrix::from_columns(&[axis0, axis1, axis2])
}

/// Computes the principal axes of a point set: its covariance matrix is
/// decomposed by `solver` and the eigenvectors are ordered by decreasing
/// variance with [`principal_axes`].
///
/// # Panics
///
/// Panics if the point set is empty.
pub fn point_set_principal_axes<P, S>(pts: &P, solver: &S) -> Matrix<Real>
where
    P: PointSet + ?Sized,
    S: SymmetricEigenSolver + ?Sized,
{
    let cov = crate::utils::cov(pts);
    let (eigenvalues, eigenvectors) = solver.eigen(&cov);
    principal_axes(&eigenvalues, &eigenvectors)
}
