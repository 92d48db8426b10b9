mod core;
pub mod normalize;
mod ops;
pub mod validate;

#[cfg(feature = "serde")]
mod serde_;

pub use self::core::Angle;
pub use normalize::{clamp_lat, wrap_0_2pi, wrap_pm_pi};
pub use validate::{validate_latitude, validate_longitude};
