use galactic_coords::{GalacticCoordinate, Measurement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Exact distances ---

    println!("=== Galactocentric distances (default R0 = 8.33 kpc) ===\n");

    // A star 1 kpc away toward the Galactic anticenter
    let anticenter = GalacticCoordinate::from_degrees(180.0, 0.0)?;
    let d = anticenter.galactocentric_distance(Measurement::exact(1.0)?)?;
    println!("1 kpc toward the anticenter:    D_gal = {} kpc", d);

    // The same star seen toward the center
    let center = GalacticCoordinate::from_degrees(0.0, 0.0)?;
    let d = center.galactocentric_distance(Measurement::exact(1.0)?)?;
    println!("1 kpc toward the center:        D_gal = {} kpc", d);

    // Off-plane: the heliocentric distance is projected onto the plane
    let cygnus = GalacticCoordinate::from_degrees(76.0, 1.3)?;
    let d = cygnus.galactocentric_distance(Measurement::exact(1.4)?)?;
    println!("Cyg OB2 (l=76.0°, b=+1.3°):     D_gal = {} kpc\n", d);

    // --- With uncertainty propagation ---

    println!("=== With measurement uncertainties ===\n");

    let helio = Measurement::with_uncertainty(1.0, 1.0)?;
    let d = anticenter.galactocentric_distance(helio)?;
    println!("(1 ± 1) kpc, anticenter:        D_gal = {} kpc", d);

    // Overriding the solar reference with another published value
    let sun = Measurement::with_uncertainty(8.178, 0.026)?; // GRAVITY 2019
    let d = anticenter.galactocentric_distance_with_sun(helio, sun)?;
    println!("same, R0 = 8.178 ± 0.026 kpc:   D_gal = {} kpc", d);

    Ok(())
}
