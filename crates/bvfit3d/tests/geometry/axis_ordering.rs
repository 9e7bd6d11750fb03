use crate::common::{random_cloud, shuffled};
use bvfit3d::bounding_volume::{BoundingVolume, Obb, Rss};
use bvfit3d::fitting::FitBoundingVolume;
use bvfit3d::math::{Matrix, Point, Real, Vector};
use bvfit3d::utils::SymmetricEigenSolver;

/// An eigen solver returning fixed eigenpairs, whatever the input matrix.
struct StubSolver {
    eigenvalues: Vector<Real>,
    eigenvectors: Matrix<Real>,
}

impl SymmetricEigenSolver for StubSolver {
    fn eigen(&self, _: &Matrix<Real>) -> (Vector<Real>, Matrix<Real>) {
        (self.eigenvalues, self.eigenvectors)
    }
}

fn stub_axes(eigenvalues: Vector<Real>) -> Matrix<Real> {
    let solver = StubSolver {
        eigenvalues,
        eigenvectors: Matrix::identity(),
    };
    let pts = random_cloud(7, 10, Vector::new(1.0, 1.0, 1.0));
    Obb::fit_with_solver(&pts, &solver).axes
}

#[test]
fn stub_solver_tie_breaks() {
    let axes = stub_axes(Vector::new(2.0, 2.0, 1.0));
    assert_eq!(axes.column(0), Vector::y());
    assert_eq!(axes.column(1), Vector::x());
    assert_eq!(axes.column(2), -Vector::z());

    let axes = stub_axes(Vector::new(3.0, 1.0, 1.0));
    assert_eq!(axes.column(0), Vector::x());
    assert_eq!(axes.column(1), Vector::y());
    assert_eq!(axes.column(2), Vector::z());

    let axes = stub_axes(Vector::new(1.0, 1.0, 1.0));
    assert_eq!(axes.column(0), Vector::z());
    assert_eq!(axes.column(1), Vector::x());
    assert_eq!(axes.column(2), Vector::y());
}

#[test]
fn general_frames_are_right_handed_and_orthonormal() {
    for seed in 0..8 {
        let pts = random_cloud(seed, 50, Vector::new(5.0, 2.0, 0.5));
        let obb = Obb::fit(&pts);
        let rss = Rss::fit(&pts);

        for axes in [obb.axes, rss.axes] {
            assert!(relative_eq!(
                axes.transpose() * axes,
                Matrix::identity(),
                epsilon = 1.0e-4
            ));

            let axis0 = axes.column(0).into_owned();
            let axis1 = axes.column(1).into_owned();
            assert_eq!(axes.column(2).into_owned(), axis0.cross(&axis1));
        }
    }
}

#[test]
fn general_fit_follows_the_cloud_shape() {
    let pts = random_cloud(3, 500, Vector::new(5.0, 2.0, 0.5));
    let obb = Obb::fit(&pts);

    // The extents are sorted like the shape of the cloud.
    assert!(obb.half_extents.x > obb.half_extents.y);
    assert!(obb.half_extents.y > obb.half_extents.z);
    assert!(relative_eq!(obb.half_extents.x, 5.0, epsilon = 0.5));
}

#[test]
fn general_fit_ignores_the_point_order() {
    let pts = random_cloud(5, 40, Vector::new(5.0, 2.0, 0.5));
    let permuted: Vec<Point<Real>> = shuffled(6, &pts);

    let a = Obb::fit(&pts);
    let b = Obb::fit(&permuted);
    assert!(relative_eq!(a.center, b.center, epsilon = 1.0e-3));
    assert!(relative_eq!(a.half_extents, b.half_extents, epsilon = 1.0e-3));

    let a = Rss::fit(&pts);
    let b = Rss::fit(&permuted);
    assert!(relative_eq!(a.radius, b.radius, epsilon = 1.0e-3));
    assert!(relative_eq!(a.lengths[0], b.lengths[0], epsilon = 1.0e-3));
    assert!(relative_eq!(a.lengths[1], b.lengths[1], epsilon = 1.0e-3));
    assert!(relative_eq!(a.center(), b.center(), epsilon = 1.0e-3));
}
