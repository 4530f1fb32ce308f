use crate::{
    constants::{MAX_UTM_LATITUDE, MAX_ZONE, SVALBARD_LATITUDE},
    hemisphere::Hemisphere,
    Error,
};

/// Latitude band letters from south to north, `I` and `O` omitted.
pub const LATITUDE_BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";

// First band letter of the northern hemisphere
const FIRST_NORTHERN_BAND: char = 'N';

// Widened zones north of 72°N: [min lon, max lon) -> zone. 32, 34 and 36
// are not used in band X.
const SVALBARD_ZONES: [(f64, f64, i32); 4] = [
    (6., 9., 31),
    (9., 21., 33),
    (21., 33., 35),
    (33., 42., 37),
];

fn check_latitude(lat: f64) -> Result<(), Error> {
    if (-MAX_UTM_LATITUDE..=MAX_UTM_LATITUDE).contains(&lat) {
        Ok(())
    } else {
        Err(Error::LatitudeOutOfRange(lat))
    }
}

/// Longitude of the central meridian of a UTM zone, in degrees.
///
/// ```
/// use utmconvert::central_meridian;
///
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(32), 9.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    6.0 * f64::from(zone) - 183.
}

/// Maps a latitude/longitude pair to its UTM zone number. North of 72°
/// the four widened Svalbard zones replace the regular 6° grid between
/// 6°E and 42°E.
///
/// A longitude of exactly 180° lies on the edge of both zone 1 and zone
/// 60; it resolves to zone 1.
///
/// # Errors
///
/// Returns [`Error::LatitudeOutOfRange`] if `lat` is outside `[-84, 84]`
/// and [`Error::InvalidLongitude`] if `lon` is not finite.
///
/// # Usage
///
/// ```
/// use utmconvert::zone::zone_number;
///
/// assert_eq!(zone_number(59.139586, 9.942634), Ok(32));
/// assert_eq!(zone_number(78.0, 15.0), Ok(33));
/// assert_eq!(zone_number(0.0, 180.0), Ok(1));
/// assert!(zone_number(85.0, 0.0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn zone_number(lat: f64, lon: f64) -> Result<i32, Error> {
    check_latitude(lat)?;
    if !lon.is_finite() {
        return Err(Error::InvalidLongitude(lon));
    }

    if lat >= SVALBARD_LATITUDE {
        let widened = SVALBARD_ZONES
            .iter()
            .find(|(min, max, _)| (*min..*max).contains(&lon));

        if let Some((_, _, zone)) = widened {
            return Ok(*zone);
        }
    }

    // Euclidean remainder keeps every finite longitude inside 1..=60
    let column = ((lon + 180.) / 6.).floor() as i64;
    Ok(column.rem_euclid(i64::from(MAX_ZONE)) as i32 + 1)
}

/// Maps a latitude to its band letter. Bands are 8° high from 80°S to
/// 72°N, and band `X` covers the 12° from 72°N to 84°N. Latitudes between
/// 84°S and 80°S fall into band `C`.
///
/// # Errors
///
/// Returns [`Error::LatitudeOutOfRange`] if `lat` is outside `[-84, 84]`.
///
/// # Usage
///
/// ```
/// use utmconvert::latitude_band;
///
/// assert_eq!(latitude_band(-80.0), Ok('C'));
/// assert_eq!(latitude_band(0.0), Ok('N'));
/// assert_eq!(latitude_band(83.5), Ok('X'));
/// assert!(latitude_band(-84.5).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn latitude_band(lat: f64) -> Result<char, Error> {
    check_latitude(lat)?;

    let clamped = lat.min(SVALBARD_LATITUDE);
    let band_idx = ((clamped + 80.) / 8.).floor().max(0.) as usize;

    LATITUDE_BANDS
        .chars()
        .nth(band_idx)
        .ok_or(Error::LatitudeOutOfRange(lat))
}

/// Hemisphere containing a latitude band: `C..=M` are southern, `N..=X`
/// northern.
///
/// Note that `S` is read as the northern band 32°N..40°N, never as
/// "south". Use [`Hemisphere::from_letter`] for hemisphere letters.
///
/// # Errors
///
/// Returns [`Error::InvalidLatitudeBand`] if `band` is not one of
/// [`LATITUDE_BANDS`].
///
/// # Usage
///
/// ```
/// use utmconvert::{hemisphere_from_band, Hemisphere};
///
/// assert_eq!(hemisphere_from_band('S'), Ok(Hemisphere::Northern));
/// assert_eq!(hemisphere_from_band('M'), Ok(Hemisphere::Southern));
/// assert!(hemisphere_from_band('Y').is_err());
/// ```
pub fn hemisphere_from_band(band: char) -> Result<Hemisphere, Error> {
    if !LATITUDE_BANDS.contains(band) {
        return Err(Error::InvalidLatitudeBand(band));
    }

    if band >= FIRST_NORTHERN_BAND {
        Ok(Hemisphere::Northern)
    } else {
        Ok(Hemisphere::Southern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_cover_equator_without_gaps() {
        for lon in -180..180 {
            let expected = (lon + 180) / 6 + 1;
            assert_eq!(zone_number(0., f64::from(lon)), Ok(expected), "lon {lon}");
        }
    }

    #[test]
    fn svalbard_zones() {
        for lon in 6..9 {
            assert_eq!(zone_number(72., f64::from(lon)), Ok(31));
        }
        for lon in 9..21 {
            assert_eq!(zone_number(72., f64::from(lon)), Ok(33));
        }
        for lon in 21..33 {
            assert_eq!(zone_number(72., f64::from(lon)), Ok(35));
        }
        for lon in 33..42 {
            assert_eq!(zone_number(72., f64::from(lon)), Ok(37));
        }
    }

    #[test]
    fn svalbard_skips_even_zones() {
        for tenth in 0..=840 {
            let lon = 0.05 * f64::from(tenth);
            let zone = zone_number(80., lon).unwrap();
            assert!(![32, 34, 36].contains(&zone), "lon {lon} gave zone {zone}");
        }
    }

    #[test]
    fn svalbard_only_applies_to_band_x() {
        assert_eq!(zone_number(71.9, 10.), Ok(32));
        assert_eq!(zone_number(72., 10.), Ok(33));
        // Outside the widened span the regular grid applies
        assert_eq!(zone_number(75., 5.), Ok(31));
        assert_eq!(zone_number(75., 42.), Ok(38));
    }

    #[test]
    fn antimeridian_and_wrapping() {
        assert_eq!(zone_number(0., 180.), Ok(1));
        assert_eq!(zone_number(0., -180.), Ok(1));
        assert_eq!(zone_number(0., 179.999), Ok(60));
        assert_eq!(zone_number(0., -186.), Ok(60));
        assert_eq!(zone_number(0., 363.), Ok(31));
    }

    #[test]
    fn polar_latitudes_rejected() {
        assert_eq!(zone_number(85., 0.), Err(Error::LatitudeOutOfRange(85.)));
        assert_eq!(zone_number(-84.1, 0.), Err(Error::LatitudeOutOfRange(-84.1)));
        assert!(zone_number(84., 0.).is_ok());
        assert!(zone_number(-84., 0.).is_ok());
        assert!(zone_number(f64::NAN, 0.).is_err());
        assert!(matches!(zone_number(0., f64::INFINITY), Err(Error::InvalidLongitude(_))));
    }

    #[test]
    fn band_edges() {
        let expected = [
            (-80., 'C'), (-72., 'D'), (-64., 'E'), (-56., 'F'), (-48., 'G'),
            (-40., 'H'), (-32., 'J'), (-24., 'K'), (-16., 'L'), (-8., 'M'),
            (0., 'N'), (8., 'P'), (16., 'Q'), (24., 'R'), (32., 'S'),
            (40., 'T'), (48., 'U'), (56., 'V'), (64., 'W'), (72., 'X'),
        ];

        for (lat, band) in expected {
            assert_eq!(latitude_band(lat), Ok(band), "lat {lat}");
        }
    }

    #[test]
    fn band_x_is_twelve_degrees() {
        for lat in 72..=84 {
            assert_eq!(latitude_band(f64::from(lat)), Ok('X'));
        }
        assert_eq!(latitude_band(72.000_001), Ok('X'));
        assert_eq!(latitude_band(71.999_999), Ok('W'));
    }

    #[test]
    fn southern_polar_edge_is_band_c() {
        assert_eq!(latitude_band(-84.), Ok('C'));
        assert_eq!(latitude_band(-80.5), Ok('C'));
        assert_eq!(latitude_band(-79.9), Ok('C'));
        assert!(latitude_band(84.1).is_err());
    }

    #[test]
    fn band_error_reports_caller_latitude() {
        assert_eq!(latitude_band(84.5), Err(Error::LatitudeOutOfRange(84.5)));
        assert_eq!(latitude_band(-90.), Err(Error::LatitudeOutOfRange(-90.)));
    }

    #[test]
    fn band_hemispheres() {
        for band in "CDEFGHJKLM".chars() {
            assert_eq!(hemisphere_from_band(band), Ok(Hemisphere::Southern));
        }
        for band in "NPQRSTUVWX".chars() {
            assert_eq!(hemisphere_from_band(band), Ok(Hemisphere::Northern));
        }
        for band in ['A', 'B', 'I', 'O', 'Y', 'Z', 'n', '3'] {
            assert_eq!(hemisphere_from_band(band), Err(Error::InvalidLatitudeBand(band)));
        }
    }
}
