//! This module defines a wrapper type [Float] for [f32] that has a total order.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    num::ParseFloatError,
    str::FromStr,
};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f32] that can be used as a range bound.
///
/// In contrast to the primitive type, [Float] is totally ordered:
/// `-0.0` sorts below `0.0` and NaN sorts above positive infinity.
/// All NaN payloads are mapped to [f32::NAN], so two NaN values
/// are equal and hash to the same value.
#[derive(Copy, Clone, Debug, Default)]
pub struct Float(f32);

impl Float {
    /// Wraps the given [f32]-`value` as a value over [Float].
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Float(f32::NAN)
        } else {
            Float(value)
        }
    }

    /// Returns the wrapped [f32].
    pub fn value(self) -> f32 {
        self.0
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Float {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f32>().map(Float::new)
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Float> for f32 {
    fn from(value: Float) -> Self {
        value.0
    }
}

#[cfg(test)]
impl Arbitrary for Float {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(f32::arbitrary(g))
    }
}

#[cfg(test)]
mod test {
    use super::Float;
    use std::cmp::Ordering;
    use test_log::test;

    #[test]
    fn nan_is_canonical() {
        let quiet = Float::new(f32::NAN);
        let other = Float::new(f32::from_bits(0x7fc0_0001));

        assert_eq!(quiet, other);
        assert_eq!(quiet.cmp(&Float::new(f32::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn signed_zero() {
        assert!(Float::new(-0.0) < Float::new(0.0));
        assert_ne!(Float::new(-0.0), Float::new(0.0));
    }

    #[test]
    fn display_parse() {
        for value in [1.5f32, -3.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 1e-7] {
            let float = Float::new(value);
            assert_eq!(float.to_string().parse::<Float>(), Ok(float));
        }
    }
}
