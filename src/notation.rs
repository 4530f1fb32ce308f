//! Text notations for UTM coordinates.
//!
//! Two notations are in common use and cannot be told apart in general:
//!
//! * latitude band: `32V 553936E 6555976N`, where the letter is one of the
//!   twenty bands `C..=X` (without `I` and `O`),
//! * hemisphere: `32N 553936E 6555976N`, where the letter is `N` or `S`.
//!
//! `S` is both the band from 32°N to 40°N and the southern hemisphere, so the
//! caller picks the parser matching the notation they have.
//!
//! Both grammars are `ZZL<ws>EASTINGE<ws>NORTHINGN` with a two digit zone,
//! a single whitespace character as separator and unsigned decimal numbers
//! (`123`, `123.45`, `.5` and `5.` are accepted).

use std::fmt::{self, Formatter};

use crate::{
    constants::{GEOGRAPHIC_STEP, MAX_UTM_LATITUDE},
    hemisphere::Hemisphere,
    utm::Utm,
    zone::{hemisphere_from_band, latitude_band, LATITUDE_BANDS},
    Error,
};

const HEMISPHERES: &str = "NS";

/// Parses a UTM coordinate written with a latitude band letter, for
/// instance `32V 553936E 6555976N`. The hemisphere is derived from the
/// band, so `S` means the northern band 32°N..40°N.
///
/// # Errors
///
/// Returns [`Error::InvalidUtmString`] if the text does not follow the
/// notation and [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
///
/// # Usage
///
/// ```
/// use utmconvert::{parse_utm_with_latitude_band, Hemisphere, Utm};
///
/// let coord = parse_utm_with_latitude_band("32V 0553936E 655576N").unwrap();
/// assert_eq!(coord, Utm::create(32, Hemisphere::Northern, 553936.0, 655576.0).unwrap());
///
/// let coord = parse_utm_with_latitude_band("11S 500000E 3762155N").unwrap();
/// assert_eq!(coord.hemisphere(), Hemisphere::Northern);
/// ```
pub fn parse_utm_with_latitude_band(value: &str) -> Result<Utm, Error> {
    let (zone, band, easting, northing) = tokenize(value, LATITUDE_BANDS, "latitude band")?;
    let hemisphere = hemisphere_from_band(band)?;

    Utm::create(zone, hemisphere, easting, northing)
}

/// Parses a UTM coordinate written with a hemisphere letter, for instance
/// `32N 553936E 6555976N`.
///
/// # Errors
///
/// Returns [`Error::InvalidUtmString`] if the text does not follow the
/// notation and [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
///
/// # Usage
///
/// ```
/// use utmconvert::{parse_utm_with_hemisphere, Hemisphere};
///
/// let coord = parse_utm_with_hemisphere("56S 334368.63E 6250948.35N").unwrap();
/// assert_eq!(coord.zone(), 56);
/// assert_eq!(coord.hemisphere(), Hemisphere::Southern);
///
/// assert!(parse_utm_with_hemisphere("not a coordinate").is_err());
/// ```
pub fn parse_utm_with_hemisphere(value: &str) -> Result<Utm, Error> {
    let (zone, letter, easting, northing) = tokenize(value, HEMISPHERES, "hemisphere")?;
    let hemisphere = Hemisphere::from_letter(letter)
        .ok_or_else(|| Error::InvalidUtmString(format!("Hemisphere letter {letter} not in set {HEMISPHERES}")))?;

    Utm::create(zone, hemisphere, easting, northing)
}

/// Formats a UTM coordinate in hemisphere notation: two digit zone,
/// `N`/`S`, then easting and northing in their shortest exact decimal
/// form, e.g. `32N 553936E 6555976N`. The result parses back to the same
/// coordinate with [`parse_utm_with_hemisphere`] whenever easting and
/// northing are not negative.
///
/// This is also the [`Display`](std::fmt::Display) form of [`Utm`].
///
/// ```
/// use utmconvert::{format_utm, Hemisphere, Utm};
///
/// let coord = Utm::create(5, Hemisphere::Southern, 334368.5, 6250948.0).unwrap();
/// assert_eq!(format_utm(&coord), "05S 334368.5E 6250948N");
/// ```
pub fn format_utm(value: &Utm) -> String {
    value.to_string()
}

/// Formats a UTM coordinate in latitude band notation, e.g.
/// `32V 553936E 6555976N`. The band comes from the latitude of the
/// inverse transform and stays on the coordinate's side of the equator,
/// so the result parses back with [`parse_utm_with_latitude_band`].
///
/// # Errors
///
/// Returns [`Error::LatitudeOutOfRange`] if the coordinate lies poleward
/// of 84°.
///
/// ```
/// use utmconvert::{format_utm_with_latitude_band, Hemisphere, Utm};
///
/// let coord = Utm::create(32, Hemisphere::Northern, 553936.0, 6555976.0).unwrap();
/// assert_eq!(format_utm_with_latitude_band(&coord).unwrap(), "32V 553936E 6555976N");
/// ```
pub fn format_utm_with_latitude_band(value: &Utm) -> Result<String, Error> {
    let mut lat = value.to_latlon().latitude();
    // Rounding lifts 84°N to 84.00000001
    if lat > MAX_UTM_LATITUDE && lat <= MAX_UTM_LATITUDE + GEOGRAPHIC_STEP {
        lat = MAX_UTM_LATITUDE;
    }

    let band = match (latitude_band(lat)?, value.hemisphere) {
        // Rounding can put a point on the equator into the wrong hemisphere
        (band, Hemisphere::Southern) if band >= 'N' => 'M',
        (band, Hemisphere::Northern) if band < 'N' => 'N',
        (band, _) => band,
    };

    Ok(format!("{:02}{band} {}E {}N", value.zone, value.easting, value.northing))
}

pub(crate) fn write_with_hemisphere(f: &mut Formatter<'_>, value: &Utm) -> fmt::Result {
    write!(
        f,
        "{:02}{} {}E {}N",
        value.zone,
        value.hemisphere.letter(),
        value.easting,
        value.northing,
    )
}

// ASCII whitespace, vertical tab included
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Splits `value` into zone, letter, easting and northing, checking the
/// letter against `letters`.
fn tokenize(value: &str, letters: &str, notation: &str) -> Result<(i32, char, f64, f64), Error> {
    let invalid = |reason: String| {
        Error::InvalidUtmString(format!("{reason} in {notation} notation {value:?}"))
    };

    let chars = value.as_bytes();
    let len = chars.len();

    if len < 3 || !chars[0].is_ascii_digit() || !chars[1].is_ascii_digit() {
        return Err(invalid("Expected a two digit zone".to_string()));
    }
    let zone = i32::from(chars[0] - b'0') * 10 + i32::from(chars[1] - b'0');
    let mut p = 2;

    let letter = char::from(chars[p]);
    if !letters.contains(letter) {
        return Err(invalid(format!("Letter {letter:?} not in set {letters}")));
    }
    p += 1;

    let easting = read_number(value, &mut p, b'E').map_err(invalid)?;
    let northing = read_number(value, &mut p, b'N').map_err(invalid)?;

    if p != len {
        return Err(invalid(format!("Unexpected trailing text {:?}", &value[p..])));
    }

    Ok((zone, letter, easting, northing))
}

/// Reads `<ws>digits[.digits]<suffix>` starting at `p`, leaving `p` after
/// the suffix.
fn read_number(value: &str, p: &mut usize, suffix: u8) -> Result<f64, String> {
    let chars = value.as_bytes();

    if !chars.get(*p).copied().is_some_and(is_separator) {
        return Err(format!("Missing whitespace before the {} value", char::from(suffix)));
    }
    *p += 1;

    let start = *p;
    while chars.get(*p).is_some_and(u8::is_ascii_digit) {
        *p += 1;
    }
    if chars.get(*p) == Some(&b'.') {
        *p += 1;
        while chars.get(*p).is_some_and(u8::is_ascii_digit) {
            *p += 1;
        }
    }
    let number = &value[start..*p];

    if chars.get(*p) != Some(&suffix) {
        return Err(format!("Expected '{}' after {number:?}", char::from(suffix)));
    }
    *p += 1;

    number
        .parse()
        .map_err(|_| format!("{number:?} is not a number"))
}
