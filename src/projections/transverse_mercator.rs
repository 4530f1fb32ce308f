use num::Complex;

use crate::ellipsoid::{EllipsoidParameters, WGS84};

// Krüger's series in complex form. With zeta = xi + i*eta the forward
// transform is
//
//   zeta + sum_j alp[j] * sin(2j * zeta)
//
// whose real part is the northing and imaginary part the easting term,
// since sin(a + ib) = sin(a)cosh(b) + i cos(a)sinh(b). The inverse
// subtracts the same series with the bet coefficients.

fn krueger_sum(zeta: Complex<f64>, coeffs: &[f64], sign: f64) -> Complex<f64> {
    coeffs
        .iter()
        .zip(1_i32..)
        .fold(zeta, |acc, (coeff, j)| {
            acc + (zeta * (2. * f64::from(j))).sin() * (sign * coeff)
        })
}

pub(crate) struct TransverseMercator {
    ellipsoid: &'static EllipsoidParameters,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        Self { ellipsoid: &WGS84 }
    }

    /// Projects `lat`/`lon` relative to the meridian `lon0`, all in degrees.
    /// Returns `(x, y)` in metres without false easting or northing.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let n = self.ellipsoid.third_flattening();
        let k0a = self.ellipsoid.normalization_factor();

        let phi = lat.to_radians();
        let lam = lon.to_radians() - lon0.to_radians();

        let e1 = 2. * n.sqrt() / (1. + n);
        let sphi = phi.sin();
        // tangent of the conformal latitude
        let tau = (sphi.atanh() - e1 * (e1 * sphi).atanh()).sinh();

        let xip = (tau / lam.cos()).atan();
        let etap = (lam.sin() / (1. + tau.powi(2)).sqrt()).atanh();

        let zeta = krueger_sum(Complex::new(xip, etap), self.ellipsoid.alp(), 1.);
        log::trace!("forward lat={lat} lon={lon} lon0={lon0}: xi'={xip} eta'={etap} -> {zeta}");

        (k0a * zeta.im, k0a * zeta.re)
    }

    /// Inverse of [`TransverseMercator::from_latlon`]. Returns unrounded
    /// `(lat, lon)` in degrees.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let k0a = self.ellipsoid.normalization_factor();

        let zeta = Complex::new(y / k0a, x / k0a);
        let zetap = krueger_sum(zeta, self.ellipsoid.bet(), -1.);
        let (xip, etap) = (zetap.re, zetap.im);

        // rectifying latitude
        let chi = (xip.sin() / etap.cosh()).asin();
        let phi = self
            .ellipsoid
            .del()
            .iter()
            .zip(1_i32..)
            .fold(chi, |acc, (del, j)| acc + del * (2. * f64::from(j) * chi).sin());

        let lon = lon0 + (etap.sinh() / xip.cos()).atan().to_degrees();
        log::trace!("inverse x={x} y={y} lon0={lon0}: xi'={xip} eta'={etap} chi={chi}");

        (phi.to_degrees(), lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_meridian_on_equator_is_origin() {
        let (x, y) = TransverseMercator::utm().from_latlon(9., 0., 9.);
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let tm = TransverseMercator::utm();
        let (xe, ye) = tm.from_latlon(-75., 40., -73.);
        let (xw, yw) = tm.from_latlon(-75., 40., -77.);
        assert!((xe + xw).abs() < 1e-6);
        assert!((ye - yw).abs() < 1e-6);
    }

    #[test]
    fn southern_latitudes_mirror_northern() {
        let tm = TransverseMercator::utm();
        let (xn, yn) = tm.from_latlon(3., 45., 4.);
        let (xs, ys) = tm.from_latlon(3., -45., 4.);
        assert!((xn - xs).abs() < 1e-6);
        assert!((yn + ys).abs() < 1e-6);
    }

    #[test]
    fn inverse_undoes_forward() {
        let tm = TransverseMercator::utm();
        for (lat, lon) in [(59.139586_f64, 9.942634_f64), (-33.8688, 151.2093), (83.9, 40.), (-80., 0.5)] {
            let lon0 = 6. * ((lon + 180.) / 6.).floor() - 177.;
            let (x, y) = tm.from_latlon(lon0, lat, lon);
            let (lat_back, lon_back) = tm.to_latlon(lon0, x, y);
            assert!((lat_back - lat).abs() < 1e-7, "{lat} -> {lat_back}");
            assert!((lon_back - lon).abs() < 1e-7, "{lon} -> {lon_back}");
        }
    }

    #[test]
    fn meridian_arc_at_84_degrees() {
        // Meridian arc from the equator, scaled by k0
        let (_, y) = TransverseMercator::utm().from_latlon(3., 84., 3.);
        assert!((y - 9_328_093.83).abs() < 1.);
    }
}
