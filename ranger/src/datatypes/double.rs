//! This module defines a wrapper type [Double] for [f64] that has a total order.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    num::ParseFloatError,
    str::FromStr,
};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f64] that can be used as a range bound.
///
/// In contrast to the primitive type, [Double] is totally ordered:
/// `-0.0` sorts below `0.0` and NaN sorts above positive infinity.
/// All NaN payloads are mapped to [f64::NAN], so two NaN values
/// are equal and hash to the same value.
#[derive(Copy, Clone, Debug, Default)]
pub struct Double(f64);

impl Double {
    /// Wraps the given [f64]-`value` as a value over [Double].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Double(f64::NAN)
        } else {
            Double(value)
        }
    }

    /// Returns the wrapped [f64].
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl PartialOrd for Double {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Double {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Double {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>().map(Double::new)
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

#[cfg(test)]
impl Arbitrary for Double {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(f64::arbitrary(g))
    }
}

#[cfg(test)]
mod test {
    use super::Double;
    use std::cmp::Ordering;
    use test_log::test;

    #[test]
    fn nan_is_canonical() {
        let quiet = Double::new(f64::NAN);
        let other = Double::new(f64::from_bits(0x7ff8_0000_0000_0001));

        assert_eq!(quiet, other);
        assert_eq!(quiet.cmp(&Double::new(f64::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn signed_zero() {
        assert!(Double::new(-0.0) < Double::new(0.0));
        assert_ne!(Double::new(-0.0), Double::new(0.0));
    }

    #[test]
    fn display_parse() {
        for value in [1.5f64, -3.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1e-300] {
            let float = Double::new(value);
            assert_eq!(float.to_string().parse::<Double>(), Ok(float));
        }
    }
}
