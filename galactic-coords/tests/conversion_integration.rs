use galactic_coords::{
    helio_to_galactocentric, helio_to_galactocentric_with_sun, sun_distance, CoordError,
    GalacticCoordinate, Measurement,
};

fn exact(v: f64) -> Measurement {
    Measurement::exact(v).expect("finite literal")
}

fn with_sigma(v: f64, s: f64) -> Measurement {
    Measurement::with_uncertainty(v, s).expect("finite literals")
}

#[test]
fn test_center_and_anticenter_degeneracy() {
    // along the center/anticenter axis the triangle collapses to a line and
    // D_gal = |R0 - d| (center) or R0 + d (anticenter)
    let center = GalacticCoordinate::from_degrees(0.0, 0.0).unwrap();
    let anticenter = GalacticCoordinate::from_degrees(180.0, 0.0).unwrap();
    let r0 = sun_distance().unwrap().value();

    for d in [0.1, 1.0, 4.165, 8.33, 12.0, 30.0] {
        let toward = helio_to_galactocentric(&center, exact(d)).unwrap();
        assert!(
            (toward.value() - (r0 - d).abs()).abs() < 1e-9,
            "center direction, d = {}: got {}",
            d,
            toward.value()
        );

        let away = helio_to_galactocentric(&anticenter, exact(d)).unwrap();
        assert!(
            (away.value() - (r0 + d)).abs() < 1e-9,
            "anticenter direction, d = {}: got {}",
            d,
            away.value()
        );
    }
}

#[test]
fn test_reference_case_one_kpc_anticenter() {
    let anticenter = GalacticCoordinate::from_degrees(180.0, 0.0).unwrap();
    let d = helio_to_galactocentric(&anticenter, exact(1.0)).unwrap();
    assert!((d.value() - 9.33).abs() < 1e-9);
    assert!(!d.has_uncertainty());
}

#[test]
fn test_reference_case_with_propagation() {
    let anticenter = GalacticCoordinate::from_degrees(180.0, 0.0).unwrap();
    let d = helio_to_galactocentric(&anticenter, with_sigma(1.0, 1.0)).unwrap();
    assert!((d.value() - 9.33).abs() < 1e-9);
    assert!((d.uncertainty().unwrap() - 1.059481).abs() < 1e-5);
}

#[test]
fn test_propagation_requires_solar_sigma() {
    let anticenter = GalacticCoordinate::from_degrees(180.0, 0.0).unwrap();
    let result =
        helio_to_galactocentric_with_sun(&anticenter, with_sigma(1.0, 1.0), exact(8.33));
    assert!(matches!(result, Err(CoordError::MissingSolarUncertainty)));
}

#[test]
fn test_full_turn_longitude_invariance() {
    for (l, b, d) in [(10.0, 5.0, 2.0), (120.0, -30.0, 0.7), (300.0, 15.0, 11.0)] {
        let once = GalacticCoordinate::from_degrees(l, b).unwrap();
        let wrapped = GalacticCoordinate::from_degrees(l + 360.0, b).unwrap();
        let a = helio_to_galactocentric(&once, exact(d)).unwrap();
        let c = helio_to_galactocentric(&wrapped, exact(d)).unwrap();
        assert!((a.value() - c.value()).abs() < 1e-12);
    }
}

#[test]
fn test_triangle_inequality_bounds() {
    // any result must lie between |R0 - u| and R0 + u with u the projected
    // heliocentric distance
    let r0 = sun_distance().unwrap().value();
    for (l, b, d) in [(45.0, 0.0, 3.0), (90.0, 20.0, 6.0), (250.0, -45.0, 1.5)] {
        let coord = GalacticCoordinate::from_degrees(l, b).unwrap();
        let u = d * coord.latitude().cos();
        let got = helio_to_galactocentric(&coord, exact(d)).unwrap().value();
        assert!(got >= (r0 - u).abs() - 1e-12);
        assert!(got <= r0 + u + 1e-12);
    }
}

#[test]
fn test_sigma_shrinks_with_input_sigma() {
    let coord = GalacticCoordinate::from_degrees(90.0, 0.0).unwrap();
    let wide = helio_to_galactocentric(&coord, with_sigma(2.0, 0.5)).unwrap();
    let narrow = helio_to_galactocentric(&coord, with_sigma(2.0, 0.05)).unwrap();
    assert!(narrow.uncertainty().unwrap() < wide.uncertainty().unwrap());
}
