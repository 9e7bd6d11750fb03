use crate::math::Real;

/// Elongation ratio between two OBB half-extents above which a kIOS gets more spheres.
pub(crate) const KIOS_RATIO: Real = 1.5;
/// `1 / sin(30°)`: radius factor of the auxiliary kIOS spheres.
pub(crate) const INV_SIN_A: Real = 2.0;
/// `cos(30°)`: offset factor of the auxiliary kIOS spheres.
pub(crate) const COS_A: Real = 0.866_025_403_784_438_6;
