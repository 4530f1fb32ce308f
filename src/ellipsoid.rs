use lazy_static::lazy_static;

use crate::{constants::{WGS84_A, WGS84_F, UTM_K0}, Error};

/// Order of the Krüger series used by both transforms
pub const SERIES_ORDER: usize = 3;

lazy_static! {
    /// Derived parameters of the WGS84 ellipsoid, built on first use and
    /// shared read-only afterwards.
    pub static ref WGS84: EllipsoidParameters = EllipsoidParameters::new(WGS84_A, WGS84_F, UTM_K0);
}

/// Constants derived from an ellipsoid's equatorial radius and flattening
/// which feed the forward and inverse transverse Mercator series.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipsoidParameters {
    equatorial_radius: f64,
    flattening: f64,
    third_flattening: f64,
    rectifying_radius: f64,
    scale_factor: f64,
    normalization_factor: f64,
    alp: [f64; SERIES_ORDER],
    bet: [f64; SERIES_ORDER],
    del: [f64; SERIES_ORDER],
}

impl EllipsoidParameters {
    pub(crate) fn new(a: f64, f: f64, k0: f64) -> EllipsoidParameters {
        let n = f / (2. - f);
        let n2 = n.powi(2);
        let n3 = n.powi(3);
        let n4 = n.powi(4);
        let n6 = n.powi(6);
        let n8 = n.powi(8);

        // Radius of the circle with the same circumference as a meridian
        let rectifying_radius = (a / (1. + n))
            * (1. + n2 / 4. + n4 / 64. + n6 / 256. + (25. / 16384.) * n8);

        let alp = [
            (1. / 2.) * n - (2. / 3.) * n2 + (5. / 16.) * n3,
            (13. / 48.) * n2 - (3. / 5.) * n3,
            (61. / 240.) * n3,
        ];
        let bet = [
            (1. / 2.) * n - (2. / 3.) * n2 + (37. / 96.) * n3,
            (1. / 48.) * n2 + (1. / 15.) * n3,
            (17. / 480.) * n3,
        ];
        let del = [
            2. * n - (2. / 3.) * n2 - 2. * n3,
            (7. / 3.) * n2 - (8. / 5.) * n3,
            (56. / 15.) * n3,
        ];

        Self {
            equatorial_radius: a,
            flattening: f,
            third_flattening: n,
            rectifying_radius,
            scale_factor: k0,
            normalization_factor: k0 * rectifying_radius,
            alp,
            bet,
            del,
        }
    }

    pub fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// `n = f / (2 - f)`
    pub fn third_flattening(&self) -> f64 {
        self.third_flattening
    }

    pub fn rectifying_radius(&self) -> f64 {
        self.rectifying_radius
    }

    /// Point scale factor on the central meridian, `k0`.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// `k0 * A`, the factor between normalized and projected coordinates.
    pub fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    /// Forward series coefficient `α_j`, `j` in `1..=3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficientIndex`] if `j` is outside `1..=3`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::WGS84;
    ///
    /// assert!((WGS84.alpha(1).unwrap() - 8.377318188192541e-4).abs() < 1e-15);
    /// assert!(WGS84.alpha(0).is_err());
    /// assert!(WGS84.alpha(4).is_err());
    /// ```
    pub fn alpha(&self, j: usize) -> Result<f64, Error> {
        coefficient(&self.alp, j)
    }

    /// Inverse series coefficient `β_j`, `j` in `1..=3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficientIndex`] if `j` is outside `1..=3`.
    pub fn beta(&self, j: usize) -> Result<f64, Error> {
        coefficient(&self.bet, j)
    }

    /// Conformal to geodetic latitude series coefficient `δ_j`, `j` in `1..=3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficientIndex`] if `j` is outside `1..=3`.
    pub fn delta(&self, j: usize) -> Result<f64, Error> {
        coefficient(&self.del, j)
    }

    pub(crate) fn alp(&self) -> &[f64; SERIES_ORDER] {
        &self.alp
    }

    pub(crate) fn bet(&self) -> &[f64; SERIES_ORDER] {
        &self.bet
    }

    pub(crate) fn del(&self) -> &[f64; SERIES_ORDER] {
        &self.del
    }
}

fn coefficient(coeffs: &[f64; SERIES_ORDER], j: usize) -> Result<f64, Error> {
    if (1..=SERIES_ORDER).contains(&j) {
        Ok(coeffs[j - 1])
    } else {
        Err(Error::InvalidCoefficientIndex(j))
    }
}
