//! Heliocentric → Galactocentric distance conversion.
//!
//! Given a direction on the sky in Galactic coordinates and a heliocentric
//! distance, [`helio_to_galactocentric`] places the object in the Galaxy by
//! solving the Sun-object-Galactic-center triangle. When the heliocentric
//! distance carries an uncertainty, the solar reference distance must too,
//! and the result carries the first-order propagated sigma.

pub mod constants;
pub mod distance;
pub mod errors;
pub mod galactic;
pub mod galactocentric;

pub use distance::Distance;
pub use errors::{CoordError, CoordResult};
pub use galactic::GalacticCoordinate;
pub use galactocentric::{helio_to_galactocentric, helio_to_galactocentric_with_sun, sun_distance};

pub use galactic_core::{Angle, Measurement};
