//! Rectangle Swept Sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Matrix, Point, Real, Vector};
use crate::utils::{self, NalgebraEigenSolver};
use core::f64::consts::PI;

/// A Rectangle Swept Sphere (RSS): the set of points within `radius` of a rectangle.
///
/// The rectangle spans `origin + [0, lengths[0]] * axis0 + [0, lengths[1]] * axis1`
/// where `axis0` and `axis1` are the first two columns of `axes`. The third
/// column is the rectangle normal.
///
/// # Invariants
///
/// The lengths and the radius are non-negative.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Rss {
    /// The rectangle corner with the smallest coordinates along the first two axes.
    pub origin: Point<Real>,
    /// The rectangle axes, one per column.
    pub axes: Matrix<Real>,
    /// The side lengths of the rectangle along the first two axes.
    pub lengths: [Real; 2],
    /// The radius of the sphere swept over the rectangle.
    pub radius: Real,
}

impl Rss {
    /// Creates a new RSS.
    #[inline]
    pub fn new(origin: Point<Real>, axes: Matrix<Real>, lengths: [Real; 2], radius: Real) -> Self {
        Self {
            origin,
            axes,
            lengths,
            radius,
        }
    }

    /// A zero-sized RSS located at `pt` and aligned with the world axes.
    #[inline]
    pub fn from_point(pt: Point<Real>) -> Self {
        Self::new(pt, Matrix::identity(), [0.0; 2], 0.0)
    }

    /// The `i`-th axis of this RSS.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The four corners of the rectangle.
    pub fn rectangle_vertices(&self) -> [Point<Real>; 4] {
        let side0 = self.axis(0) * self.lengths[0];
        let side1 = self.axis(1) * self.lengths[1];

        [
            self.origin,
            self.origin + side0,
            self.origin + side0 + side1,
            self.origin + side1,
        ]
    }

    /// The distance between `pt` and the rectangle.
    pub fn rectangle_distance(&self, pt: &Point<Real>) -> Real {
        let local = self.axes.tr_mul(&(pt - self.origin));
        let dx = local.x - local.x.clamp(0.0, self.lengths[0]);
        let dy = local.y - local.y.clamp(0.0, self.lengths[1]);

        (dx * dx + dy * dy + local.z * local.z).sqrt()
    }

    /// The volume of this RSS.
    pub fn volume(&self) -> Real {
        let [l0, l1] = self.lengths;
        let r = self.radius;
        let pi = PI as Real;

        2.0 * r * l0 * l1 + pi * r * r * (l0 + l1) + 4.0 / 3.0 * pi * r * r * r
    }

    /// Checks if this RSS contains another one.
    ///
    /// The distance to a rectangle is convex, so it is enough to check the
    /// corners of the other rectangle.
    pub fn contains(&self, other: &Rss) -> bool {
        let margin = self.radius - other.radius;
        margin >= 0.0
            && other
                .rectangle_vertices()
                .iter()
                .all(|pt| self.rectangle_distance(pt) <= margin)
    }

    /// The corners of the smallest box aligned with this RSS and containing it.
    pub fn bounding_box_vertices(&self) -> [Point<Real>; 8] {
        let r = self.radius;
        let mut res = [self.origin; 8];

        for (i, vtx) in res.iter_mut().enumerate() {
            let x = if i & 1 == 0 { -r } else { self.lengths[0] + r };
            let y = if i & 2 == 0 { -r } else { self.lengths[1] + r };
            let z = if i & 4 == 0 { -r } else { r };
            *vtx += self.axes * Vector::new(x, y, z);
        }

        res
    }
}

impl BoundingVolume for Rss {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.origin + self.axis(0) * (self.lengths[0] * 0.5) + self.axis(1) * (self.lengths[1] * 0.5)
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.rectangle_distance(pt) <= self.radius
    }

    fn merge(&mut self, other: &Rss) {
        *self = self.merged(other);
    }

    fn merged(&self, other: &Rss) -> Rss {
        let mut pts = [Point::origin(); 16];
        pts[..8].copy_from_slice(&self.bounding_box_vertices());
        pts[8..].copy_from_slice(&other.bounding_box_vertices());

        let axes = utils::point_set_principal_axes(&pts, &NalgebraEigenSolver);
        let (origin, lengths, radius) = utils::swept_rectangle(&pts, &axes);
        Rss::new(origin, axes, lengths, radius)
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount;
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Rss {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Rss::new(self.origin, self.axes, self.lengths, self.radius + amount)
    }
}
