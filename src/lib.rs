#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! coordinates using Krüger's series (third order).
//!
//! ```
//! use utmconvert::{LatLon, Hemisphere};
//!
//! let coord = LatLon::new(59.139586, 9.942634);
//! let utm = coord.to_utm().unwrap();
//!
//! assert_eq!(utm.zone(), 32);
//! assert_eq!(utm.hemisphere(), Hemisphere::Northern);
//! assert!((utm.easting() - 553935.9960721927).abs() < 1e-6);
//! assert!((utm.northing() - 6555976.042645933).abs() < 1e-6);
//! ```

use thiserror::Error;

pub mod ellipsoid;
pub mod hemisphere;
pub mod latlon;
pub mod notation;
pub mod utm;
pub mod zone;

pub use ellipsoid::{EllipsoidParameters, WGS84};
pub use hemisphere::Hemisphere;
pub use latlon::LatLon;
pub use notation::{
    format_utm, format_utm_with_latitude_band, parse_utm_with_hemisphere,
    parse_utm_with_latitude_band,
};
pub use utm::Utm;
pub use zone::{central_meridian, hemisphere_from_band, latitude_band, LATITUDE_BANDS};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Latitude {0} outside of UTM range [-84, 84]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is not a finite value")]
    InvalidLongitude(f64),
    #[error("Latitude band {0:?} not in set CDEFGHJKLMNPQRSTUVWX")]
    InvalidLatitudeBand(char),
    #[error("Zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("Northing {northing} not in range for {hemisphere} hemisphere [{min}, {max}]")]
    InvalidNorthing {
        northing: f64,
        hemisphere: Hemisphere,
        min: f64,
        max: f64,
    },
    #[error("Series coefficient index {0} not in range [1, 3]")]
    InvalidCoefficientIndex(usize),
    #[error("UTM string is invalid: {0}")]
    InvalidUtmString(String),
}

impl Error {
    /// Whether the error rejects a value outside its valid range.
    pub fn is_range_error(&self) -> bool {
        !self.is_format_error()
    }

    /// Whether the error rejects text that does not follow a UTM notation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidUtmString(_))
    }
}

/// Returns the UTM zone for `coord`, see [`zone::zone_number`].
///
/// # Errors
///
/// Returns [`Error::LatitudeOutOfRange`] if the latitude is outside `[-84, 84]`
/// and [`Error::InvalidLongitude`] if the longitude is not finite.
pub fn zone_number(coord: &LatLon) -> Result<i32, Error> {
    zone::zone_number(coord.latitude(), coord.longitude())
}

/// Projects `coord` onto its UTM zone.
///
/// # Errors
///
/// Fails under the same conditions as [`zone_number`].
pub fn to_utm(coord: &LatLon) -> Result<Utm, Error> {
    Utm::from_latlon(coord)
}

/// Converts a UTM coordinate back to latitude/longitude, rounded up at the
/// eighth decimal.
pub fn to_geographic(coord: &Utm) -> LatLon {
    coord.to_latlon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes() {
        assert!(Error::InvalidZone(61).is_range_error());
        assert!(Error::LatitudeOutOfRange(85.0).is_range_error());
        assert!(Error::InvalidCoefficientIndex(4).is_range_error());
        assert!(Error::InvalidUtmString("x".to_string()).is_format_error());
        assert!(!Error::InvalidUtmString("x".to_string()).is_range_error());
    }

    #[test]
    fn free_functions_delegate() {
        let coord = LatLon::new(43.642567, -79.387139);
        assert_eq!(zone_number(&coord), Ok(17));

        let utm = to_utm(&coord).unwrap();
        let back = to_geographic(&utm);
        assert!((back.latitude() - coord.latitude()).abs() < 1e-6);
        assert!((back.longitude() - coord.longitude()).abs() < 1e-6);
    }
}
