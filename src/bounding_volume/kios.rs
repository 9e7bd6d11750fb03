//! k-discrete-orientation spheres.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, Obb};
use crate::math::{Point, Real};
use arrayvec::ArrayVec;

/// The maximum number of spheres of a [`KIos`].
pub const KIOS_MAX_SPHERES: usize = 5;

/// A k-discrete-orientation spheres bounding volume (kIOS).
///
/// A kIOS pairs an [`Obb`] with 1, 3 or 5 spheres. The first sphere is
/// centered on the fitted point set and covers all of it. The other spheres come
/// in pairs placed symmetrically along one of the box axes; they are larger
/// and tighter on the flat sides of the point set.
///
/// A point is considered inside of a kIOS if it is inside of its box and inside
/// of at least one of its spheres.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct KIos {
    /// The box enclosing the point set.
    pub obb: Obb,
    /// The spheres. There are always 1, 3 or 5 of them.
    pub spheres: ArrayVec<BoundingSphere, KIOS_MAX_SPHERES>,
}

impl KIos {
    /// Creates a new kIOS.
    ///
    /// # Panics
    ///
    /// Panics if the number of spheres is not 1, 3 or 5.
    pub fn new(obb: Obb, spheres: ArrayVec<BoundingSphere, KIOS_MAX_SPHERES>) -> Self {
        assert!(
            matches!(spheres.len(), 1 | 3 | 5),
            "A kIOS must have 1, 3 or 5 spheres."
        );
        Self { obb, spheres }
    }

    /// A kIOS made of a single point.
    pub fn from_point(pt: Point<Real>) -> Self {
        let mut spheres = ArrayVec::new();
        spheres.push(BoundingSphere::new(pt, 0.0));
        Self::new(Obb::from_point(pt), spheres)
    }

    /// The number of spheres of this kIOS.
    #[inline]
    pub fn num_spheres(&self) -> usize {
        self.spheres.len()
    }
}

impl BoundingVolume for KIos {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.spheres[0].center
    }

    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.obb.contains_point(pt) && self.spheres.iter().any(|s| s.contains_point(pt))
    }

    fn merge(&mut self, other: &KIos) {
        *self = self.merged(other);
    }

    fn merged(&self, other: &KIos) -> KIos {
        // Keep as many spheres as the coarsest of both, merged pairwise.
        let spheres = self
            .spheres
            .iter()
            .zip(other.spheres.iter())
            .map(|(a, b)| a.merged(b))
            .collect();

        KIos {
            obb: self.obb.merged(&other.obb),
            spheres,
        }
    }

    fn loosen(&mut self, amount: Real) {
        self.obb.loosen(amount);
        self.spheres.iter_mut().for_each(|s| s.loosen(amount));
    }

    fn loosened(&self, amount: Real) -> KIos {
        let mut res = self.clone();
        res.loosen(amount);
        res
    }
}
