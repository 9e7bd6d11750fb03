//! Oriented Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Matrix, Point, Real, Rotation, Vector, DEFAULT_EPSILON, DIM};
use crate::utils::{self, NalgebraEigenSolver, SymmetricEigenSolver};
use na::{Quaternion, Rotation3};

/// An Oriented Bounding Box (OBB).
///
/// The box is centered at `center` and its faces are orthogonal to the columns
/// of `axes`, which form a right-handed orthonormal frame.
///
/// # Invariants
///
/// Every component of `half_extents` is non-negative.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The box axes, one per column.
    pub axes: Matrix<Real>,
    /// The half-width of the box along each of its axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new OBB.
    #[inline]
    pub fn new(center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            center,
            axes,
            half_extents,
        }
    }

    /// An OBB with zero extents, located at `pt` and aligned with the world axes.
    #[inline]
    pub fn from_point(pt: Point<Real>) -> Self {
        Self::new(pt, Matrix::identity(), Vector::zeros())
    }

    /// The `i`-th axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The full widths of this box along each of its axes.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// Expresses `pt` in the local frame of this box, relative to its center.
    #[inline]
    pub fn local_point(&self, pt: &Point<Real>) -> Vector<Real> {
        self.axes.tr_mul(&(pt - self.center))
    }

    /// Computes the vertices of this box.
    ///
    /// The `i`-th vertex lies on the negative side of the axis `j` if the
    /// `j`-th bit of `i` is set.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mut res = [self.center; 8];

        for (i, vtx) in res.iter_mut().enumerate() {
            for j in 0..DIM {
                let sign = if i & (1 << j) != 0 { -1.0 } else { 1.0 };
                *vtx += self.axes.column(j) * (self.half_extents[j] * sign);
            }
        }

        res
    }

    /// Checks if this box contains another one.
    pub fn contains(&self, other: &Obb) -> bool {
        other.vertices().iter().all(|pt| self.contains_point(pt))
    }

    // Average of both orientations, for boxes close to each other.
    fn merge_close(&self, other: &Obb) -> Obb {
        let q1 = obb_rotation(&self.axes);
        let mut q2 = obb_rotation(&other.axes);

        if q1.coords.dot(&q2.coords) < 0.0 {
            q2 = Rotation::new_unchecked(-q2.into_inner());
        }

        let q = Rotation::new_normalize(Quaternion::from(q1.coords + q2.coords));
        let axes = q.to_rotation_matrix().into_inner();

        let vertices = self.vertices();
        let other_vertices = other.vertices();
        let pts: [&[Point<Real>]; 2] = [&vertices, &other_vertices];

        let (center, half_extents) = utils::extent_and_center(&Corners(pts), &axes);
        Obb::new(center, axes, half_extents)
    }

    // First axis along the line joining the centers, for boxes far from each other.
    fn merge_far<S: SymmetricEigenSolver + ?Sized>(&self, other: &Obb, solver: &S) -> Obb {
        let axis0 = (self.center - other.center).normalize();

        let vertices = self.vertices();
        let other_vertices = other.vertices();
        let pts: [&[Point<Real>]; 2] = [&vertices, &other_vertices];

        // The spread of the corners in the plane orthogonal to `axis0` gives the second axis.
        let mut projected = [Point::origin(); 16];
        for (proj, pt) in projected
            .iter_mut()
            .zip(vertices.iter().chain(other_vertices.iter()))
        {
            *proj = pt - axis0 * pt.coords.dot(&axis0);
        }

        let plane_axes = utils::point_set_principal_axes(&projected, solver);
        let spread = plane_axes.column(0).into_owned();
        // The corners may not spread at all (e.g. two flat boxes facing each other).
        let axis1 = (spread - axis0 * spread.dot(&axis0))
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(|| utils::basis_from_axis(&axis0).column(1).into_owned());
        let axis2 = axis0.cross(&axis1);
        let axes = Matrix::from_columns(&[axis0, axis1, axis2]);

        let (center, half_extents) = utils::extent_and_center(&Corners(pts), &axes);
        Obb::new(center, axes, half_extents)
    }
}

fn obb_rotation(axes: &Matrix<Real>) -> Rotation<Real> {
    Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(*axes))
}

// The corners of two boxes, seen as a single point set.
struct Corners<'a>([&'a [Point<Real>]; 2]);

impl utils::PointSet for Corners<'_> {
    fn num_points(&self) -> usize {
        self.0[0].len() + self.0[1].len()
    }

    fn for_each_point(&self, f: impl FnMut(&Point<Real>)) {
        self.0[0].iter().chain(self.0[1].iter()).for_each(f)
    }
}

impl BoundingVolume for Obb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.local_point(pt);
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    fn merge(&mut self, other: &Obb) {
        *self = self.merged(other);
    }

    fn merged(&self, other: &Obb) -> Obb {
        let center_dist = na::distance(&self.center, &other.center);
        let max_extent = self.half_extents.max() + other.half_extents.max();

        if center_dist > 2.0 * max_extent {
            self.merge_far(other, &NalgebraEigenSolver)
        } else {
            self.merge_close(other)
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.half_extents.add_scalar_mut(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Obb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Obb::new(self.center, self.axes, self.half_extents.add_scalar(amount))
    }
}
