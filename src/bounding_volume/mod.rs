//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
#[doc(inline)]
pub use crate::bounding_volume::kios::KIos;
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;
#[doc(inline)]
pub use crate::bounding_volume::obb_rss::ObbRss;
#[doc(inline)]
pub use crate::bounding_volume::rss::Rss;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod kios;
#[doc(hidden)]
pub mod obb;
#[doc(hidden)]
pub mod obb_rss;
#[doc(hidden)]
pub mod rss;
