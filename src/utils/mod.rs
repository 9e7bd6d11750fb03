//! Geometric helpers shared by every bounding volume fitter.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::eigen::{NalgebraEigenSolver, SymmetricEigenSolver};
pub use self::frame::{basis_from_axis, segment_frame, triangle_frame};
pub use self::point_set::PointSet;
pub use self::principal_axes::{point_set_principal_axes, principal_axes};
pub use self::projection::{extent_and_center, maximum_distance, swept_rectangle};
pub use self::triangle::circumcircle;

pub(crate) use self::consts::*;
pub use self::wops::{WBasis, WSign};

mod center;
mod consts;
mod cov;
mod eigen;
mod frame;
mod point_set;
mod principal_axes;
mod projection;
mod triangle;
mod wops;
