//! Fitting of bounding volumes around point sets and mesh primitives.

pub use self::fit_bounding_volume::FitBoundingVolume;
pub use self::fit_error::FitError;
pub use self::fitted_volume::{BvKind, FittedVolume};
pub use self::indexed_fitter::{IndexedFitter, IndexedPoints, MeshTopology};

mod fit_bounding_volume;
mod fit_error;
mod fitted_volume;
mod indexed_fitter;
mod kios_fit;
mod obb_fit;
mod obb_rss_fit;
mod rss_fit;
