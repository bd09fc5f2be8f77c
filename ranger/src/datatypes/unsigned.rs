//! This module defines an unsigned ordering on top of the signed integer kinds.

use std::cmp::Ordering;

use super::{NumericValueRef, RangeValue};

/// Compares two values, treating the fixed-width integer kinds
/// ([Byte][super::NumericKind::Byte], [Short][super::NumericKind::Short],
/// [Integer][super::NumericKind::Integer], [Long][super::NumericKind::Long])
/// as unsigned integers of the same width.
///
/// For example, `-1i8` is interpreted as `255u8` and is therefore
/// greater than `127i8`.
///
/// All other kinds use their default ordering.
/// Values of different kinds are ordered by their kind,
/// so the result is a total order that can be passed to
/// [Range::contains_with][crate::range::Range::contains_with].
#[allow(clippy::cast_sign_loss)]
pub fn unsigned_cmp<T: RangeValue>(a: &T, b: &T) -> Ordering {
    let (a, b) = (a.as_numeric(), b.as_numeric());

    match (a, b) {
        (NumericValueRef::Byte(a), NumericValueRef::Byte(b)) => (a as u8).cmp(&(b as u8)),
        (NumericValueRef::Short(a), NumericValueRef::Short(b)) => (a as u16).cmp(&(b as u16)),
        (NumericValueRef::Integer(a), NumericValueRef::Integer(b)) => {
            (a as u32).cmp(&(b as u32))
        }
        (NumericValueRef::Long(a), NumericValueRef::Long(b)) => (a as u64).cmp(&(b as u64)),
        _ => a.compare(&b).unwrap_or_else(|_| a.kind().cmp(&b.kind())),
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use test_log::test;

    use super::unsigned_cmp;
    use crate::datatypes::{Double, NumericValueT};

    #[test]
    fn reinterprets_negative_values() {
        assert_eq!(unsigned_cmp(&-1i8, &127i8), Ordering::Greater);
        assert_eq!(unsigned_cmp(&-1i16, &0i16), Ordering::Greater);
        assert_eq!(unsigned_cmp(&i32::MIN, &i32::MAX), Ordering::Greater);
        assert_eq!(unsigned_cmp(&3i64, &4i64), Ordering::Less);
    }

    #[test]
    fn other_kinds_use_default_order() {
        assert_eq!(
            unsigned_cmp(&Double::new(-1.0), &Double::new(0.0)),
            Ordering::Less
        );
        assert_eq!(
            unsigned_cmp(&NumericValueT::Byte(1), &NumericValueT::Long(0)),
            Ordering::Less
        );
        assert_eq!(
            unsigned_cmp(&NumericValueT::Byte(-1), &NumericValueT::Byte(1)),
            Ordering::Greater
        );
    }
}
