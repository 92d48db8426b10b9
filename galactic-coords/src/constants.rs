/// Galactocentric distance of the Sun in kiloparsecs.
///
/// R0 = 8.33 ± 0.35 kpc, from the S2-orbit determination of the mass of the
/// central black hole: Gillessen, S., et al. (2009). "Monitoring stellar
/// orbits around the massive black hole in the Galactic center". ApJ, 692, 1075.
pub const SUN_GALACTOCENTRIC_DISTANCE_KPC: f64 = 8.33;

/// Published 1-sigma uncertainty on [`SUN_GALACTOCENTRIC_DISTANCE_KPC`].
pub const SUN_GALACTOCENTRIC_DISTANCE_ERR_KPC: f64 = 0.35;

pub const PARSECS_PER_KILOPARSEC: f64 = 1000.0;

#[allow(clippy::excessive_precision)]
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.2615637769;
