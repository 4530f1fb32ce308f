/// Rounds `value` towards positive infinity at `scale` decimal places.
///
/// Rounding works on the shortest decimal representation of `value` (the
/// digits `Display` would print) rather than on its exact binary
/// expansion, so e.g. `0.1` rounds to `0.1` and not to `0.10000001` at
/// scale 8. The rounded decimal is then parsed back to the nearest `f64`.
pub(crate) fn round_ceiling(value: f64, scale: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let mut buf = ryu::Buffer::new();
    let repr = buf.format_finite(value);
    let Some((negative, digits, exponent)) = decompose(repr) else {
        return value;
    };

    // value = digits * 10^exponent; drop everything past 10^-scale
    let Ok(scale) = i32::try_from(scale) else {
        return value;
    };
    let shift = exponent + scale;
    if shift >= 0 {
        // Already representable at this scale
        return value;
    }

    #[allow(clippy::cast_sign_loss)]
    let dropped = (-shift) as usize;
    let (kept, tail) = digits.split_at(digits.len().saturating_sub(dropped));

    let mut units: u64 = if kept.is_empty() {
        0
    } else {
        match kept.parse() {
            Ok(units) => units,
            Err(_) => return value,
        }
    };

    if !negative && tail.bytes().any(|b| b != b'0') {
        units += 1;
    }

    // There is no negative zero at a decimal scale
    let sign = if negative && units != 0 { "-" } else { "" };

    format!("{sign}{units}e-{scale}").parse().unwrap_or(value)
}

/// Splits a `ryu` formatted number into sign, significant digits and a
/// power of ten so that `value = ±digits * 10^exponent`.
fn decompose(repr: &str) -> Option<(bool, String, i32)> {
    let (negative, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };

    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().ok()?),
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let frac_len = i32::try_from(frac_part.len()).ok()?;

    let digits = format!("{int_part}{frac_part}");
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    Some((negative, digits.to_string(), exponent - frac_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_positive_values() {
        assert_eq!(round_ceiling(59.139_585_610_604_19, 8), 59.139_585_62);
        assert_eq!(round_ceiling(9.942_634_058_160_653, 8), 9.942_634_06);
        assert_eq!(round_ceiling(1.000_000_001, 8), 1.000_000_01);
    }

    #[test]
    fn rounds_negative_values_towards_zero() {
        assert_eq!(round_ceiling(-79.387_142_869_499_39, 8), -79.387_142_86);
        assert_eq!(round_ceiling(-0.000_000_001, 8), 0.);
        assert!(round_ceiling(-0.000_000_001, 8).is_sign_positive());
    }

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(round_ceiling(0.1, 8), 0.1);
        assert_eq!(round_ceiling(43.642_561_78, 8), 43.642_561_78);
        assert_eq!(round_ceiling(-12.5, 8), -12.5);
        assert_eq!(round_ceiling(0., 8), 0.);
        assert_eq!(round_ceiling(1e20, 8), 1e20);
    }

    #[test]
    fn exponent_notation() {
        // ryu prints these with an exponent
        assert_eq!(round_ceiling(1.5e-9, 8), 1e-8);
        assert_eq!(round_ceiling(-1.5e-9, 8), 0.);
        assert_eq!(round_ceiling(2e-8, 8), 2e-8);
    }

    #[test]
    fn non_finite_passthrough() {
        assert!(round_ceiling(f64::NAN, 8).is_nan());
        assert_eq!(round_ceiling(f64::INFINITY, 8), f64::INFINITY);
    }

    #[test]
    fn decomposition() {
        assert_eq!(decompose("123.456"), Some((false, "123456".to_string(), -3)));
        assert_eq!(decompose("-0.25"), Some((true, "25".to_string(), -2)));
        assert_eq!(decompose("1.5e-9"), Some((false, "15".to_string(), -10)));
        assert_eq!(decompose("1e16"), Some((false, "1".to_string(), 16)));
    }
}
