//! Heliocentric → Galactocentric distance.
//!
//! The Sun, the object, and the Galactic center form a triangle. Projecting
//! the heliocentric distance onto the Galactic plane (`u = d·cos b`) and
//! applying the law of cosines with the longitude as the included angle:
//!
//! ```text
//! D² = u² + R₀² - 2·u·R₀·cos l
//! ```
//!
//! where `R₀` is the Sun's own Galactocentric distance. When the object
//! distance carries an uncertainty, the result's sigma combines both input
//! variances to first order (delta method):
//!
//! ```text
//! σ_D² = (∂D/∂d)²·σ_d² + (∂D/∂R₀)²·σ_R₀²
//! ∂D/∂d  = (u - R₀·cos l)·cos b / D
//! ∂D/∂R₀ = (R₀ - u·cos l) / D
//! ```
//!
//! Propagation requires the uncertainty of *every* operand it flows
//! through: asking for it while leaving the solar sigma out is a
//! configuration error, not a silent default.

use crate::constants::{SUN_GALACTOCENTRIC_DISTANCE_ERR_KPC, SUN_GALACTOCENTRIC_DISTANCE_KPC};
use crate::{CoordError, CoordResult, Distance, GalacticCoordinate};
use galactic_core::Measurement;

/// The default solar reference distance, 8.33 ± 0.35 kpc
/// (Gillessen et al. 2009).
pub fn sun_distance() -> CoordResult<Measurement> {
    Ok(Measurement::with_uncertainty(
        SUN_GALACTOCENTRIC_DISTANCE_KPC,
        SUN_GALACTOCENTRIC_DISTANCE_ERR_KPC,
    )?)
}

/// Converts a heliocentric distance to a Galactocentric distance using the
/// default solar reference of [`sun_distance`].
///
/// Both distances are in kiloparsecs. If `helio` carries an uncertainty,
/// the default solar uncertainty propagates with it and the result carries
/// the combined sigma; otherwise the result is exact.
pub fn helio_to_galactocentric(
    coord: &GalacticCoordinate,
    helio: Measurement,
) -> CoordResult<Measurement> {
    helio_to_galactocentric_with_sun(coord, helio, sun_distance()?)
}

/// Converts a heliocentric distance to a Galactocentric distance with an
/// explicit solar reference distance.
///
/// # Behavior
///
/// - `helio` exact: only the central solar value is used; a solar
///   uncertainty, if present, is ignored. The result is exact.
/// - `helio` with uncertainty: `sun` must also carry one, otherwise
///   [`CoordError::MissingSolarUncertainty`] is returned. The result
///   carries the first-order propagated sigma.
///
/// # Errors
///
/// Also fails with `InvalidDistance` if either distance is non-positive or
/// non-finite, and with `DegenerateGeometry` if uncertainty propagation is
/// requested for an object exactly at the Galactic center (the distance
/// gradient is undefined there).
pub fn helio_to_galactocentric_with_sun(
    coord: &GalacticCoordinate,
    helio: Measurement,
    sun: Measurement,
) -> CoordResult<Measurement> {
    // positive-finite preconditions, phrased through the Distance rules
    Distance::from_kiloparsecs(helio.value())?;
    Distance::from_kiloparsecs(sun.value())?;

    let cos_l = coord.longitude().cos();
    let cos_b = coord.latitude().cos();

    let d = helio.value();
    let r = sun.value();
    let u = d * cos_b;

    let dist = libm::sqrt(u * u + r * r - 2.0 * u * r * cos_l);

    let sigma_d = match helio.uncertainty() {
        Some(sigma) => sigma,
        None => return Ok(Measurement::exact(dist)?),
    };
    let sigma_r = sun.uncertainty().ok_or(CoordError::MissingSolarUncertainty)?;

    if dist == 0.0 {
        return Err(CoordError::degenerate_geometry(
            "object at the Galactic center: distance gradient undefined, \
             cannot propagate uncertainty",
        ));
    }

    let d_dist_d_helio = (u - r * cos_l) * cos_b / dist;
    let d_dist_d_sun = (r - u * cos_l) / dist;

    let sigma = libm::sqrt(
        (d_dist_d_helio * sigma_d).powi(2) + (d_dist_d_sun * sigma_r).powi(2),
    );

    Ok(Measurement::with_uncertainty(dist, sigma)?)
}
