use crate::error::{Result, SlbwError};

//=====================================================================
// A single tabulated resonance and the fixed-width numeric codec used
// by the resonance parameter files. Each field in those files encodes
// a value as an 8-character mantissa followed by a decimal exponent,
// e.g. "6.673491+0" decodes to 6.673491.
//=====================================================================

/// Width of the mantissa portion of an encoded field.
pub const MANTISSA_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonanceRecord {
    pub energy_eV: f64,
    pub neutron_width: f64,
    pub radiative_width: f64,
}

impl ResonanceRecord {
    pub fn new(energy_eV: f64, neutron_width: f64, radiative_width: f64) -> Result<Self> {
        if !(energy_eV > 0.0) || !energy_eV.is_finite() {
            return Err(SlbwError::NumericDomain {
                context: "resonance energy",
                value: energy_eV,
            });
        }
        let total = neutron_width + radiative_width;
        if !(total > 0.0) || !total.is_finite() {
            return Err(SlbwError::NumericDomain {
                context: "resonance total width",
                value: total,
            });
        }
        Ok(Self {
            energy_eV,
            neutron_width,
            radiative_width,
        })
    }

    #[inline]
    pub fn total_width(&self) -> f64 {
        self.neutron_width + self.radiative_width
    }
}

/// Decode one mantissa+exponent field. The first 8 characters hold the
/// mantissa, the remainder the exponent; the value is
/// `mantissa * 10^exponent`. Mantissas without an explicit sign are
/// accepted, as are single- and double-digit exponents of either sign.
pub fn decode_fixed_width(field: &str) -> Result<f64> {
    if field.len() <= MANTISSA_WIDTH {
        return Err(SlbwError::MalformedField {
            field: field.to_string(),
            reason: format!("field shorter than {} mantissa chars + exponent", MANTISSA_WIDTH),
        });
    }
    // split_at would panic on a multibyte character straddling the
    // mantissa boundary; such fields are malformed input, not a crash.
    let (mantissa_str, exponent_str) =
        field
            .split_at_checked(MANTISSA_WIDTH)
            .ok_or_else(|| SlbwError::MalformedField {
                field: field.to_string(),
                reason: "mantissa does not end on a character boundary".to_string(),
            })?;
    let mantissa: f64 =
        fast_float::parse(mantissa_str.trim()).map_err(|_| SlbwError::MalformedField {
            field: field.to_string(),
            reason: format!("non-numeric mantissa {:?}", mantissa_str),
        })?;
    let exponent: f64 =
        fast_float::parse(exponent_str.trim()).map_err(|_| SlbwError::MalformedField {
            field: field.to_string(),
            reason: format!("non-numeric exponent {:?}", exponent_str),
        })?;
    Ok(mantissa * 10f64.powf(exponent))
}

/// Encode a value into the fixed-width mantissa+exponent form that
/// `decode_fixed_width` accepts. Used to build test fixtures.
pub fn encode_fixed_width(value: f64) -> String {
    if value == 0.0 {
        return String::from("0.000000+0");
    }
    let mut exponent = value.abs().log10().floor() as i32;
    loop {
        let mantissa = value / 10f64.powi(exponent);
        let formatted = if value < 0.0 {
            format!("{:.5}", mantissa)
        } else {
            format!("{:.6}", mantissa)
        };
        // Rounding can push the mantissa to 10.000000; bump the
        // exponent and retry when the field overflows its 8 chars.
        if formatted.len() == MANTISSA_WIDTH {
            return format!("{}{:+}", formatted, exponent);
        }
        exponent += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_decode_unsigned_mantissa() {
        assert_relative_eq!(decode_fixed_width("6.673491+0").unwrap(), 6.673491);
        assert_relative_eq!(decode_fixed_width("1.475792-3").unwrap(), 1.475792e-3);
    }

    #[test]
    fn test_decode_signed_mantissa() {
        assert_relative_eq!(decode_fixed_width("-5.00000+0").unwrap(), -5.0);
        assert_relative_eq!(decode_fixed_width("-2.30000-2").unwrap(), -0.023);
    }

    #[test]
    fn test_decode_double_digit_exponent() {
        assert_relative_eq!(decode_fixed_width("2.000000+10").unwrap(), 2e10);
        assert_relative_eq!(decode_fixed_width("2.000000-10").unwrap(), 2e-10);
    }

    #[test]
    fn test_decode_rejects_short_field() {
        assert!(decode_fixed_width("6.67+0").is_err());
        assert!(decode_fixed_width("12345678").is_err());
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        assert!(decode_fixed_width("abcdefgh+0").is_err());
        assert!(decode_fixed_width("6.673491xx").is_err());
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        // A multibyte character straddling the mantissa boundary must
        // come back as a malformed field, not a panic.
        assert!(matches!(
            decode_fixed_width("6.67349é+0"),
            Err(SlbwError::MalformedField { .. })
        ));
        // Multibyte junk elsewhere in the field is also rejected.
        assert!(decode_fixed_width("é.673491+0").is_err());
    }

    #[test]
    fn test_round_trip() {
        for &value in &[
            6.673491, 291.0206, 1.475792e-3, 0.023, 11.2934, -5.0, 9.9999999, 2e7, 1e-5,
        ] {
            let encoded = encode_fixed_width(value);
            let decoded = decode_fixed_width(&encoded).unwrap();
            assert_relative_eq!(decoded, value, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_encode_zero() {
        assert_relative_eq!(decode_fixed_width(&encode_fixed_width(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_record_invariants() {
        let record = ResonanceRecord::new(6.674, 1.475792e-3, 0.023).unwrap();
        assert_relative_eq!(record.total_width(), 1.475792e-3 + 0.023);

        assert!(ResonanceRecord::new(-1.0, 0.01, 0.02).is_err());
        assert!(ResonanceRecord::new(10.0, 0.0, 0.0).is_err());
    }
}
