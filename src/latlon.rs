use std::fmt::Display;

use crate::{utm::Utm, zone, Error};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 latitude/longitude point, in degrees. Can be
/// converted to/from [`Utm`] as long as the latitude is within `[-84, 84]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "lng"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a point without checking its values. Longitude is not
    /// restricted; conversions normalize it to its UTM zone.
    pub const fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be finite
    ///
    /// # Errors
    ///
    /// Returns [`Error::LatitudeOutOfRange`] or [`Error::InvalidLongitude`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(43.642567, -79.387139).unwrap();
    /// assert_eq!(coord.latitude(), 43.642567);
    /// assert_eq!(coord.longitude(), -79.387139);
    ///
    /// assert!(LatLon::create(100.0, 0.0).is_err());
    /// assert!(LatLon::create(0.0, f64::NAN).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::LatitudeOutOfRange(lat))
        } else if !lon.is_finite() {
            Err(Error::InvalidLongitude(lon))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the point is north of the equator. The equator
    /// itself counts as north.
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// UTM zone containing this point.
    ///
    /// # Errors
    ///
    /// See [`zone::zone_number`].
    pub fn zone_number(&self) -> Result<i32, Error> {
        zone::zone_number(self.latitude, self.longitude)
    }

    /// Latitude band letter of this point.
    ///
    /// # Errors
    ///
    /// See [`zone::latitude_band`].
    pub fn latitude_band(&self) -> Result<char, Error> {
        zone::latitude_band(self.latitude)
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, LatLon, Utm};
    ///
    /// let coord_utm = Utm::create(32, Hemisphere::Northern, 553936.0, 6555976.0).unwrap();
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// assert_eq!(converted, LatLon::new(59.13958562, 9.94263406));
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`]
    ///
    /// # Errors
    ///
    /// Fails if the latitude is outside `[-84, 84]` or the longitude is not
    /// finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, LatLon};
    ///
    /// let coord = LatLon::new(43.642567, -79.387139);
    /// let converted = coord.to_utm().unwrap();
    ///
    /// assert_eq!(converted.zone(), 17);
    /// assert_eq!(converted.hemisphere(), Hemisphere::Northern);
    /// assert!((converted.easting() - 630084.3008325039).abs() < 1e-6);
    /// assert!((converted.northing() - 4833438.585627057).abs() < 1e-6);
    /// ```
    pub fn to_utm(&self) -> Result<Utm, Error> {
        Utm::from_latlon(self)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lat = ryu::Buffer::new();
        let mut lon = ryu::Buffer::new();
        write!(f, "{} {}", lat.format(self.latitude), lon.format(self.longitude))
    }
}
