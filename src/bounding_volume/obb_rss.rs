//! Combined OBB and RSS.

use crate::bounding_volume::{BoundingVolume, Obb, Rss};
use crate::math::{Point, Real};

/// An [`Obb`] and an [`Rss`] fitted on the same point set.
///
/// Both components share the same axes when fitted together. Points are
/// contained if they are inside of both components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct ObbRss {
    /// The box component.
    pub obb: Obb,
    /// The rectangle swept sphere component.
    pub rss: Rss,
}

static_assertions::assert_eq_size!(ObbRss, [Real; 30]);

impl ObbRss {
    /// Creates a new combined volume.
    #[inline]
    pub fn new(obb: Obb, rss: Rss) -> Self {
        Self { obb, rss }
    }

    /// A zero-sized volume located at `pt`.
    #[inline]
    pub fn from_point(pt: Point<Real>) -> Self {
        Self::new(Obb::from_point(pt), Rss::from_point(pt))
    }
}

impl BoundingVolume for ObbRss {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.obb.center
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.obb.contains_point(pt) && self.rss.contains_point(pt)
    }

    fn merge(&mut self, other: &ObbRss) {
        *self = self.merged(other);
    }

    fn merged(&self, other: &ObbRss) -> ObbRss {
        ObbRss::new(self.obb.merged(&other.obb), self.rss.merged(&other.rss))
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        self.obb.loosen(amount);
        self.rss.loosen(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> ObbRss {
        ObbRss::new(self.obb.loosened(amount), self.rss.loosened(amount))
    }
}
