use crate::bounding_volume::{BoundingVolume, KIos, Obb, ObbRss, Rss};
use crate::fitting::{FitBoundingVolume, FitError};
use crate::math::{Point, Real};
use crate::utils::{NalgebraEigenSolver, SymmetricEigenSolver};

/// The families of bounding volumes that can be fitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BvKind {
    /// An oriented bounding box, see [`Obb`].
    Obb,
    /// A rectangle swept sphere, see [`Rss`].
    Rss,
    /// A k-discrete-orientation spheres volume, see [`KIos`].
    KIos,
    /// An oriented bounding box paired with a rectangle swept sphere, see [`ObbRss`].
    ObbRss,
}

/// A bounding volume of a family selected at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FittedVolume {
    /// An oriented bounding box.
    Obb(Obb),
    /// A rectangle swept sphere.
    Rss(Rss),
    /// A k-discrete-orientation spheres volume.
    KIos(KIos),
    /// An oriented bounding box paired with a rectangle swept sphere.
    ObbRss(ObbRss),
}

static_assertions::assert_impl_all!(FittedVolume: Send, Sync);

impl FittedVolume {
    /// Fits a bounding volume of the family `kind` around `pts`.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn fit(kind: BvKind, pts: &[Point<Real>]) -> Self {
        Self::fit_with_solver(kind, pts, &NalgebraEigenSolver)
    }

    /// Fits a bounding volume of the family `kind` around `pts`, using
    /// `solver` for the general construction.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn fit_with_solver<S: SymmetricEigenSolver + ?Sized>(
        kind: BvKind,
        pts: &[Point<Real>],
        solver: &S,
    ) -> Self {
        match kind {
            BvKind::Obb => Obb::fit_with_solver(pts, solver).into_fitted(),
            BvKind::Rss => Rss::fit_with_solver(pts, solver).into_fitted(),
            BvKind::KIos => KIos::fit_with_solver(pts, solver).into_fitted(),
            BvKind::ObbRss => ObbRss::fit_with_solver(pts, solver).into_fitted(),
        }
    }

    /// Fits a bounding volume of the family `kind` around `pts`, or returns an
    /// error if `pts` is empty.
    pub fn try_fit(kind: BvKind, pts: &[Point<Real>]) -> Result<Self, FitError> {
        if pts.is_empty() {
            Err(FitError::EmptyPointSet)
        } else {
            Ok(Self::fit(kind, pts))
        }
    }

    /// The family of this bounding volume.
    pub fn kind(&self) -> BvKind {
        match self {
            FittedVolume::Obb(_) => BvKind::Obb,
            FittedVolume::Rss(_) => BvKind::Rss,
            FittedVolume::KIos(_) => BvKind::KIos,
            FittedVolume::ObbRss(_) => BvKind::ObbRss,
        }
    }

    /// The center of this bounding volume.
    pub fn center(&self) -> Point<Real> {
        match self {
            FittedVolume::Obb(bv) => bv.center(),
            FittedVolume::Rss(bv) => bv.center(),
            FittedVolume::KIos(bv) => bv.center(),
            FittedVolume::ObbRss(bv) => bv.center(),
        }
    }

    /// Checks if this bounding volume contains the given point.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        match self {
            FittedVolume::Obb(bv) => bv.contains_point(pt),
            FittedVolume::Rss(bv) => bv.contains_point(pt),
            FittedVolume::KIos(bv) => bv.contains_point(pt),
            FittedVolume::ObbRss(bv) => bv.contains_point(pt),
        }
    }

    /// Creates a new, enlarged version, of this bounding volume.
    pub fn loosened(&self, amount: Real) -> Self {
        match self {
            FittedVolume::Obb(bv) => FittedVolume::Obb(bv.loosened(amount)),
            FittedVolume::Rss(bv) => FittedVolume::Rss(bv.loosened(amount)),
            FittedVolume::KIos(bv) => FittedVolume::KIos(bv.loosened(amount)),
            FittedVolume::ObbRss(bv) => FittedVolume::ObbRss(bv.loosened(amount)),
        }
    }

    /// Merges this bounding volume with another one of the same family.
    pub fn merged(&self, other: &FittedVolume) -> Result<Self, FitError> {
        match (self, other) {
            (FittedVolume::Obb(a), FittedVolume::Obb(b)) => Ok(FittedVolume::Obb(a.merged(b))),
            (FittedVolume::Rss(a), FittedVolume::Rss(b)) => Ok(FittedVolume::Rss(a.merged(b))),
            (FittedVolume::KIos(a), FittedVolume::KIos(b)) => Ok(FittedVolume::KIos(a.merged(b))),
            (FittedVolume::ObbRss(a), FittedVolume::ObbRss(b)) => {
                Ok(FittedVolume::ObbRss(a.merged(b)))
            }
            _ => Err(FitError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            }),
        }
    }

    /// The oriented bounding box, if this is one.
    pub fn as_obb(&self) -> Option<&Obb> {
        match self {
            FittedVolume::Obb(bv) => Some(bv),
            _ => None,
        }
    }

    /// The rectangle swept sphere, if this is one.
    pub fn as_rss(&self) -> Option<&Rss> {
        match self {
            FittedVolume::Rss(bv) => Some(bv),
            _ => None,
        }
    }

    /// The k-discrete-orientation spheres volume, if this is one.
    pub fn as_kios(&self) -> Option<&KIos> {
        match self {
            FittedVolume::KIos(bv) => Some(bv),
            _ => None,
        }
    }

    /// The combined OBB and RSS, if this is one.
    pub fn as_obb_rss(&self) -> Option<&ObbRss> {
        match self {
            FittedVolume::ObbRss(bv) => Some(bv),
            _ => None,
        }
    }
}
