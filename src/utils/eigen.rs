use crate::math::{Matrix, Real, Vector};

/// A solver computing the eigen-decomposition of a symmetric 3x3 matrix.
///
/// This is the only numeric dependency of the general fitting path. The
/// eigenpairs may be returned in any order and the eigenvectors do not have to
/// form a right-handed basis: [`principal_axes`](crate::utils::principal_axes)
/// takes care of ordering them.
pub trait SymmetricEigenSolver {
    /// Returns the eigenvalues of `m` and the matching unit eigenvectors, stored
    /// as the columns of the returned matrix.
    ///
    /// `m` is assumed to be symmetric. Only its lower triangle may be read.
    fn eigen(&self, m: &Matrix<Real>) -> (Vector<Real>, Matrix<Real>);
}

impl<S: SymmetricEigenSolver + ?Sized> SymmetricEigenSolver for &S {
    #[inline]
    fn eigen(&self, m: &Matrix<Real>) -> (Vector<Real>, Matrix<Real>) {
        (**self).eigen(m)
    }
}

/// The default eigen solver, based on `nalgebra`'s symmetric QR algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NalgebraEigenSolver;

impl SymmetricEigenSolver for NalgebraEigenSolver {
    #[inline]
    fn eigen(&self, m: &Matrix<Real>) -> (Vector<Real>, Matrix<Real>) {
        let eigen = m.symmetric_eigen();
        (eigen.eigenvalues, eigen.eigenvectors)
    }
}
