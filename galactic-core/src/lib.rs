//! Shared scalar vocabulary for the galactic toolkit.
//!
//! This crate holds the types the other workspace members build on:
//!
//! - [`Angle`]: radians inside, degree constructors outside. Consumers
//!   never see the internal unit.
//! - [`Measurement`]: a value with an optional symmetric 1-sigma
//!   uncertainty. Whether a call propagates uncertainty is decided by this
//!   explicit discriminant, never by inspecting argument shapes at runtime.
//! - [`errors`]: the [`CoreError`] taxonomy shared by validation code.
//! - [`math`] / [`constants`]: `libm`-backed helpers and high-precision
//!   angular constants.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod measurement;

pub use angle::Angle;
pub use errors::{CoreError, CoreResult, NumericErrorKind};
pub use measurement::Measurement;
