// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// Offset added to every easting so it stays positive across the zone
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;

/// UTM is undefined poleward of this latitude (degrees)
pub(crate) const MAX_UTM_LATITUDE: f64 = 84.;
/// Southern edge of band X, where the widened Svalbard zones begin
pub(crate) const SVALBARD_LATITUDE: f64 = 72.;

pub(crate) const MIN_ZONE: i32 = 1;
pub(crate) const MAX_ZONE: i32 = 60;

/// Decimal places kept by the inverse transform
pub(crate) const GEOGRAPHIC_DECIMALS: u32 = 8;
/// Largest amount the inverse rounding adds to a coordinate
pub(crate) const GEOGRAPHIC_STEP: f64 = 1e-8;
