use utmconvert::{Hemisphere, LatLon, Utm};

/// Grid of points spanning every zone and the whole UTM latitude range.
fn grid() -> impl Iterator<Item = LatLon> {
    (-84..=84).step_by(4).flat_map(|lat| {
        (-180..180).step_by(5).map(move |lon| {
            // Offset from whole degrees to stay off zone and band edges
            LatLon::new(f64::from(lat) * 0.99 + 0.123, f64::from(lon) + 0.456)
        })
    })
}

#[test]
fn round_trip_within_tolerance() {
    let mut worst = 0_f64;

    for coord in grid() {
        let utm = coord.to_utm().unwrap();
        let back = utm.to_latlon();

        let dlat = (back.latitude() - coord.latitude()).abs();
        let dlon = (back.longitude() - coord.longitude()).abs();
        assert!(dlat < 1e-6, "{coord} -> {utm} -> {back}");
        assert!(dlon < 1e-6, "{coord} -> {utm} -> {back}");

        worst = worst.max(coord.haversine(&back));
    }

    // 1e-6 degrees is ~11cm on the ground
    assert!(worst < 0.12, "worst round trip error {worst}m");
}

#[test]
fn round_trip_through_text() {
    for coord in grid() {
        let utm = coord.to_utm().unwrap();

        let parsed = Utm::parse_with_hemisphere(&utm.to_string()).unwrap();
        assert_eq!(parsed, utm);

        let banded = utm.to_string_with_latitude_band().unwrap();
        let parsed = Utm::parse_with_latitude_band(&banded).unwrap();
        assert_eq!(parsed, utm);
    }
}

#[test]
fn forward_results_stay_in_zone() {
    for coord in grid() {
        let utm = coord.to_utm().unwrap();

        assert_eq!(utm.hemisphere(), Hemisphere::from_latitude(coord.latitude()));
        assert!((1..=60).contains(&utm.zone()));
        // Regular zones are 6° wide; the widened Svalbard zones reach 9°
        // from their central meridian
        assert!(
            (100_000.0..=900_000.0).contains(&utm.easting()),
            "{coord} easting {}",
            utm.easting()
        );
    }
}

#[test]
fn inverse_is_reproducible() {
    let utm = Utm::create(33, Hemisphere::Northern, 514_278.715, 8_683_355.47).unwrap();
    let first = utm.to_latlon();

    let results: Vec<LatLon> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || utm.to_latlon()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, first);
    }
}
