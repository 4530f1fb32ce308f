use crate::{
    constants::{GEOGRAPHIC_DECIMALS, MAX_ZONE, MIN_ZONE, UTM_FALSE_EASTING},
    hemisphere::Hemisphere,
    latlon::LatLon,
    notation,
    projections::transverse_mercator::TransverseMercator,
    utility::round_ceiling,
    zone::{central_meridian, zone_number},
    Error,
};

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: zone number, hemisphere, easting and northing in meters.
///
/// The zone is always within `[1, 60]`. Whether the northing fits its
/// hemisphere is only checked by [`Utm::create_strict`] and
/// [`Utm::validate_northing`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    #[cfg_attr(feature = "serde", serde(alias = "zone_number"))]
    pub(crate) zone: i32,
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Utm {
        Self {
            zone,
            hemisphere,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, Utm};
    ///
    /// let coord = Utm::create(32, Hemisphere::Northern, 553936.0, 6555976.0).unwrap();
    ///
    /// assert_eq!(coord.zone(), 32);
    /// assert_eq!(coord.hemisphere(), Hemisphere::Northern);
    /// assert_eq!(coord.easting(), 553936.0);
    /// assert_eq!(coord.northing(), 6555976.0);
    ///
    /// assert!(Utm::create(0, Hemisphere::Northern, 553936.0, 6555976.0).is_err());
    /// assert!(Utm::create(61, Hemisphere::Northern, 553936.0, 6555976.0).is_err());
    /// ```
    pub fn create(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Result<Utm, Error> {
        if !(MIN_ZONE..=MAX_ZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        Ok(Utm::new(zone, hemisphere, easting, northing))
    }

    /// Like [`Utm::create`], but also requires the northing to lie in the
    /// hemisphere's valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidNorthing`] if the northing is outside
    /// [`Hemisphere::min_northing`]..=[`Hemisphere::max_northing`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, Utm};
    ///
    /// assert!(Utm::create_strict(32, Hemisphere::Northern, 553936.0, 6555976.0).is_ok());
    /// assert!(Utm::create_strict(32, Hemisphere::Southern, 553936.0, 655576.0).is_err());
    /// ```
    pub fn create_strict(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Result<Utm, Error> {
        let utm = Utm::create(zone, hemisphere, easting, northing)?;
        utm.validate_northing()?;

        Ok(utm)
    }

    /// Checks the northing against the hemisphere's valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNorthing`] if it is outside that range.
    pub fn validate_northing(&self) -> Result<(), Error> {
        self.hemisphere.validate_northing(self.northing)
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`]. The zone comes from
    /// [`zone_number`] and the hemisphere from the sign of the latitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LatitudeOutOfRange`] if the latitude is outside
    /// `[-84, 84]` and [`Error::InvalidLongitude`] if the longitude is not
    /// finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, LatLon, Utm};
    ///
    /// let converted = Utm::from_latlon(&LatLon::new(59.139586, 9.942634)).unwrap();
    ///
    /// assert_eq!(converted.zone(), 32);
    /// assert_eq!(converted.hemisphere(), Hemisphere::Northern);
    /// assert!((converted.easting() - 553935.9960721927).abs() < 1e-6);
    /// assert!((converted.northing() - 6555976.042645933).abs() < 1e-6);
    ///
    /// assert!(Utm::from_latlon(&LatLon::new(85.0, 0.0)).is_err());
    /// ```
    pub fn from_latlon(value: &LatLon) -> Result<Utm, Error> {
        let zone = zone_number(value.latitude, value.longitude)?;
        let hemisphere = Hemisphere::from_latitude(value.latitude);

        let (x, y) = TransverseMercator::utm()
            .from_latlon(central_meridian(zone), value.latitude, value.longitude);

        Ok(Utm::new(
            zone,
            hemisphere,
            x + UTM_FALSE_EASTING,
            y + hemisphere.false_northing(),
        ))
    }

    /// Converts from [`Utm`] to [`LatLon`]. Both values are rounded
    /// towards positive infinity at the eighth decimal, so results are
    /// reproducible digit for digit.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{Hemisphere, LatLon, Utm};
    ///
    /// let coord = Utm::create(17, Hemisphere::Northern, 630084.0, 4833438.0).unwrap();
    ///
    /// assert_eq!(coord.to_latlon(), LatLon::new(43.64256178, -79.38714286));
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let x = self.easting - UTM_FALSE_EASTING;
        let y = self.northing - self.hemisphere.false_northing();

        let (lat, lon) = TransverseMercator::utm().to_latlon(central_meridian(self.zone), x, y);

        LatLon::new(
            round_ceiling(lat, GEOGRAPHIC_DECIMALS),
            round_ceiling(lon, GEOGRAPHIC_DECIMALS),
        )
    }

    /// Parses latitude band notation, e.g. `32V 553936E 6555976N`.
    ///
    /// # Errors
    ///
    /// See [`notation::parse_utm_with_latitude_band`].
    pub fn parse_with_latitude_band(value: &str) -> Result<Utm, Error> {
        notation::parse_utm_with_latitude_band(value)
    }

    /// Parses hemisphere notation, e.g. `32N 553936E 6555976N`.
    ///
    /// # Errors
    ///
    /// See [`notation::parse_utm_with_hemisphere`].
    pub fn parse_with_hemisphere(value: &str) -> Result<Utm, Error> {
        notation::parse_utm_with_hemisphere(value)
    }

    /// Formats in latitude band notation.
    ///
    /// # Errors
    ///
    /// See [`notation::format_utm_with_latitude_band`].
    pub fn to_string_with_latitude_band(&self) -> Result<String, Error> {
        notation::format_utm_with_latitude_band(self)
    }
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        notation::write_with_hemisphere(f, self)
    }
}
