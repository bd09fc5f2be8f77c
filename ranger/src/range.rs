//! This module defines [Range], a bounded interval over one of the supported numeric types,
//! which can be used to express threshold predicates like "reading must lie in `[2..4)`".
//!
//! ```
//! use ranger::range::Range;
//!
//! assert_eq!(Range::open(2, 4).unwrap().contains(&2), Ok(false));
//! assert_eq!(Range::closed(2, 4).unwrap().contains(&2), Ok(true));
//! assert_eq!(Range::at_least(2).contains(&2), Ok(true));
//! assert_eq!(Range::greater_than(2).contains(&2), Ok(false));
//! assert_eq!(Range::at_most(2).contains(&2), Ok(true));
//! assert_eq!(Range::less_than(2).contains(&2), Ok(false));
//!
//! let range: Range<i32> = Range::closed(2, 4).unwrap().to_string().parse().unwrap();
//! assert_eq!(range.to_string(), "[2..4]");
//! ```

use std::{cmp::Ordering, convert::Infallible};

use crate::datatypes::{NumericKind, RangeValue};

/// Module for defining [RangeError] and [ParseRangeError]
pub mod errors;
pub use errors::ParseRangeError;
pub use errors::RangeError;
/// Module implementing the canonical text form of a [Range]
pub mod codec;

/// Whether a bound value is itself part of a [Range]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// Exclusive bound; also used for unbounded sides
    Open,
    /// Inclusive bound
    Closed,
}

impl BoundType {
    /// Whether a value that compares to an upper bound as `ordering`
    /// lies within that bound.
    fn admits_below(self, ordering: Ordering) -> bool {
        match self {
            BoundType::Open => ordering == Ordering::Less,
            BoundType::Closed => ordering != Ordering::Greater,
        }
    }

    /// Whether a value that compares to a lower bound as `ordering`
    /// lies within that bound.
    fn admits_above(self, ordering: Ordering) -> bool {
        match self {
            BoundType::Open => ordering == Ordering::Greater,
            BoundType::Closed => ordering != Ordering::Less,
        }
    }
}

/// An immutable, possibly unbounded interval of values of type `T`.
///
/// `T` is one of the supported numeric types (see [RangeValue]).
/// A missing bound means that the range is unbounded on that side;
/// unbounded sides are always [BoundType::Open].
///
/// Note that the bounds are not checked for being in order:
/// `Range::closed(4, 2)` is a valid range that contains nothing.
///
/// Bounds are compared by their numeric value, also for equality and hashing.
/// In particular, [BigDecimal][bigdecimal::BigDecimal] bounds that differ only in scale,
/// like `2.0` and `2.00`, yield equal ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Option<T>,
    lower_type: BoundType,
    upper: Option<T>,
    upper_type: BoundType,
}

impl<T: RangeValue> Range<T> {
    /// Create a new [Range].
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedBoundTypes] if both bounds are present
    /// but are of different [NumericKind]s.
    pub(crate) fn new(
        lower: Option<T>,
        lower_type: BoundType,
        upper: Option<T>,
        upper_type: BoundType,
    ) -> Result<Self, RangeError> {
        if let (Some(lower), Some(upper)) = (&lower, &upper) {
            if lower.kind() != upper.kind() {
                return Err(RangeError::MismatchedBoundTypes {
                    lower: lower.kind(),
                    upper: upper.kind(),
                });
            }
        }

        Ok(Self {
            lower_type: if lower.is_some() {
                lower_type
            } else {
                BoundType::Open
            },
            upper_type: if upper.is_some() {
                upper_type
            } else {
                BoundType::Open
            },
            lower,
            upper,
        })
    }

    /// Create a [Range] with only one bound.
    fn half_bounded(
        lower: Option<T>,
        lower_type: BoundType,
        upper: Option<T>,
        upper_type: BoundType,
    ) -> Self {
        debug_assert!(lower.is_none() || upper.is_none());

        Self {
            lower,
            lower_type,
            upper,
            upper_type,
        }
    }

    /// `(lower..upper)`, both bounds exclusive.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedBoundTypes] if `lower` and `upper`
    /// are of different [NumericKind]s.
    pub fn open(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::new(Some(lower), BoundType::Open, Some(upper), BoundType::Open)
    }

    /// `[lower..upper]`, both bounds inclusive.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedBoundTypes] if `lower` and `upper`
    /// are of different [NumericKind]s.
    pub fn closed(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::new(Some(lower), BoundType::Closed, Some(upper), BoundType::Closed)
    }

    /// `(lower..upper]`, lower bound exclusive, upper bound inclusive.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedBoundTypes] if `lower` and `upper`
    /// are of different [NumericKind]s.
    pub fn open_closed(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::new(Some(lower), BoundType::Open, Some(upper), BoundType::Closed)
    }

    /// `[lower..upper)`, lower bound inclusive, upper bound exclusive.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedBoundTypes] if `lower` and `upper`
    /// are of different [NumericKind]s.
    pub fn closed_open(lower: T, upper: T) -> Result<Self, RangeError> {
        Self::new(Some(lower), BoundType::Closed, Some(upper), BoundType::Open)
    }

    /// `(value..*)`
    pub fn greater_than(value: T) -> Self {
        Self::half_bounded(Some(value), BoundType::Open, None, BoundType::Open)
    }

    /// `[value..*)`
    pub fn at_least(value: T) -> Self {
        Self::half_bounded(Some(value), BoundType::Closed, None, BoundType::Open)
    }

    /// `(*..value)`
    pub fn less_than(value: T) -> Self {
        Self::half_bounded(None, BoundType::Open, Some(value), BoundType::Open)
    }

    /// `(*..value]`
    pub fn at_most(value: T) -> Self {
        Self::half_bounded(None, BoundType::Open, Some(value), BoundType::Closed)
    }

    /// `[value..value]`, the range containing only `value`.
    pub fn singleton(value: T) -> Self {
        Self {
            lower: Some(value.clone()),
            lower_type: BoundType::Closed,
            upper: Some(value),
            upper_type: BoundType::Closed,
        }
    }

    /// `(*..*)`, the range containing every value.
    pub fn all() -> Self {
        Self::half_bounded(None, BoundType::Open, None, BoundType::Open)
    }

    /// Return the lower bound, or `None` if the range is unbounded below.
    pub fn lower(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    /// Return the upper bound, or `None` if the range is unbounded above.
    pub fn upper(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    /// Return the [BoundType] of the lower bound.
    pub fn lower_type(&self) -> BoundType {
        self.lower_type
    }

    /// Return the [BoundType] of the upper bound.
    pub fn upper_type(&self) -> BoundType {
        self.upper_type
    }

    /// Whether the lower bound is part of the range.
    pub fn lower_inclusive(&self) -> bool {
        self.lower_type == BoundType::Closed
    }

    /// Whether the upper bound is part of the range.
    pub fn upper_inclusive(&self) -> bool {
        self.upper_type == BoundType::Closed
    }

    /// Return the [NumericKind] of the bounds,
    /// or `None` if the range is unbounded on both sides.
    pub fn kind(&self) -> Option<NumericKind> {
        self.lower
            .as_ref()
            .or(self.upper.as_ref())
            .map(RangeValue::kind)
    }

    /// Determine whether the range contains `value`.
    ///
    /// The ordering is selected according to the runtime representation of `value`,
    /// e.g., IEEE total order for floating point values.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedValueType] if `value` is not of the same
    /// [NumericKind] as the bounds. This can only happen for ranges over
    /// [NumericValueT][crate::datatypes::NumericValueT].
    pub fn contains(&self, value: &T) -> Result<bool, RangeError> {
        let value = value.as_numeric();
        self.contains_by(|bound| value.compare(&bound.as_numeric()))
    }

    /// Determine whether the range contains `value`,
    /// using the ordering given by `compare` instead of the default one.
    ///
    /// This is useful if the default ordering does not suffice,
    /// e.g., for comparing bytes as unsigned values
    /// (see [unsigned_cmp][crate::datatypes::unsigned_cmp]).
    pub fn contains_with<F>(&self, value: &T, compare: F) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let result: Result<bool, Infallible> = self.contains_by(|bound| Ok(compare(value, bound)));

        match result {
            Ok(contained) => contained,
            Err(never) => match never {},
        }
    }

    /// Determine whether the range contains the numeric JSON value `reading`.
    ///
    /// The reading is converted into the type of the range first,
    /// see [RangeValue::from_reading].
    ///
    /// # Errors
    /// Returns [RangeError::UnsupportedType] if `reading` is not a number,
    /// and [RangeError::IncompatibleReading] if it is not representable
    /// in the type of the range.
    pub fn contains_reading(&self, reading: &serde_json::Value) -> Result<bool, RangeError> {
        let Some(kind) = self.kind() else {
            // Everything is contained, but the reading still has to be a number
            crate::datatypes::NumericValueT::try_from(reading)?;
            return Ok(true);
        };

        let value = T::from_reading(reading, kind)?;
        self.contains(&value)
    }

    /// Test the bounds of this range, where `compare` orders
    /// the tested value relative to a given bound.
    ///
    /// The upper bound is tested first.
    fn contains_by<E, F>(&self, mut compare: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<Ordering, E>,
    {
        if let Some(upper) = &self.upper {
            if !self.upper_type.admits_below(compare(upper)?) {
                return Ok(false);
            }
        }

        match &self.lower {
            Some(lower) => Ok(self.lower_type.admits_above(compare(lower)?)),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        collections::{hash_map::DefaultHasher, HashSet},
        hash::{Hash, Hasher},
    };

    use bigdecimal::BigDecimal;
    use num::BigInt;
    use quickcheck_macros::quickcheck;
    use serde_json::json;
    use test_log::test;

    use super::{BoundType, Range, RangeError};
    use crate::datatypes::{unsigned_cmp, Double, Float, NumericKind, NumericValueT};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn check_contains(range: &Range<i32>, expected: &[(i32, bool)]) {
        for &(value, contained) in expected {
            assert_eq!(
                range.contains(&value),
                Ok(contained),
                "{range} contains {value}"
            );
        }
    }

    #[test]
    fn contains_two_sided() {
        check_contains(
            &Range::open(2, 4).unwrap(),
            &[(1, false), (2, false), (3, true), (4, false), (5, false)],
        );
        check_contains(
            &Range::closed(2, 4).unwrap(),
            &[(1, false), (2, true), (3, true), (4, true), (5, false)],
        );
        check_contains(
            &Range::open_closed(2, 4).unwrap(),
            &[(1, false), (2, false), (3, true), (4, true), (5, false)],
        );
        check_contains(
            &Range::closed_open(2, 4).unwrap(),
            &[(1, false), (2, true), (3, true), (4, false), (5, false)],
        );
    }

    #[test]
    fn contains_one_sided() {
        check_contains(&Range::greater_than(2), &[(1, false), (2, false), (3, true)]);
        check_contains(&Range::at_least(2), &[(1, false), (2, true), (3, true)]);
        check_contains(&Range::less_than(2), &[(1, true), (2, false), (3, false)]);
        check_contains(&Range::at_most(2), &[(1, true), (2, true), (3, false)]);
        check_contains(&Range::singleton(2), &[(1, false), (2, true), (3, false)]);
        check_contains(&Range::all(), &[(i32::MIN, true), (0, true), (i32::MAX, true)]);
    }

    #[test]
    fn reversed_bounds_contain_nothing() {
        let range = Range::closed(4, 2).unwrap();
        check_contains(&range, &[(1, false), (2, false), (3, false), (4, false), (5, false)]);
    }

    #[test]
    fn contains_other_types() {
        let bytes = Range::closed(-5i8, 5i8).unwrap();
        assert_eq!(bytes.contains(&-5), Ok(true));
        assert_eq!(bytes.contains(&6), Ok(false));

        let shorts = Range::at_most(300i16);
        assert_eq!(shorts.contains(&300), Ok(true));

        let longs = Range::open(i64::MIN, i64::MAX).unwrap();
        assert_eq!(longs.contains(&0), Ok(true));
        assert_eq!(longs.contains(&i64::MAX), Ok(false));

        let floats = Range::closed_open(Float::new(0.5), Float::new(1.5)).unwrap();
        assert_eq!(floats.contains(&Float::new(0.5)), Ok(true));
        assert_eq!(floats.contains(&Float::new(1.5)), Ok(false));
        assert_eq!(floats.contains(&Float::new(f32::NAN)), Ok(false));

        let doubles = Range::at_least(Double::new(0.0));
        assert_eq!(doubles.contains(&Double::new(-0.0)), Ok(false));
        assert_eq!(doubles.contains(&Double::new(f64::INFINITY)), Ok(true));
        assert_eq!(doubles.contains(&Double::new(f64::NAN)), Ok(true));

        let huge = BigInt::from(10).pow(30);
        let bigints = Range::open(-huge.clone(), huge.clone()).unwrap();
        assert_eq!(bigints.contains(&BigInt::from(i64::MAX)), Ok(true));
        assert_eq!(bigints.contains(&huge), Ok(false));

        let low: BigDecimal = "0.1".parse().unwrap();
        let high: BigDecimal = "0.30".parse().unwrap();
        let decimals = Range::open_closed(low, high).unwrap();
        assert_eq!(decimals.contains(&"0.3".parse().unwrap()), Ok(true));
        assert_eq!(decimals.contains(&"0.10".parse().unwrap()), Ok(false));
    }

    #[test]
    fn contains_with_comparator() {
        let range = Range::closed(0i8, 127i8).unwrap();
        assert_eq!(range.contains(&-1), Ok(false));
        assert!(!range.contains_with(&-1, unsigned_cmp));
        assert!(range.contains_with(&100, unsigned_cmp));

        let unsigned = Range::at_least(-128i8);
        assert_eq!(unsigned.contains(&127), Ok(true));
        assert!(!unsigned.contains_with(&127, unsigned_cmp));
        assert!(unsigned.contains_with(&-1, unsigned_cmp));

        let reversed = Range::less_than(2);
        assert!(reversed.contains_with(&3, |a: &i32, b: &i32| b.cmp(a)));
    }

    #[test]
    fn dynamic_ranges() {
        let range = Range::closed(NumericValueT::Integer(2), NumericValueT::Integer(4)).unwrap();
        assert_eq!(range.kind(), Some(NumericKind::Integer));
        assert_eq!(range.contains(&NumericValueT::Integer(3)), Ok(true));
        assert_eq!(
            range.contains(&NumericValueT::Long(3)),
            Err(RangeError::MismatchedValueType {
                expected: NumericKind::Integer,
                found: NumericKind::Long
            })
        );

        assert_eq!(
            Range::open(NumericValueT::Integer(2), NumericValueT::Long(4)),
            Err(RangeError::MismatchedBoundTypes {
                lower: NumericKind::Integer,
                upper: NumericKind::Long
            })
        );
    }

    #[test]
    fn unsupported_values() {
        assert_eq!(
            NumericValueT::try_from(&json!("a")).and_then(|lower| {
                Range::closed(lower, NumericValueT::try_from(&json!("f"))?)
            }),
            Err(RangeError::UnsupportedType {
                type_name: "string".to_owned()
            })
        );
    }

    #[test]
    fn contains_reading() {
        let range = Range::closed(-5, 5).unwrap();
        assert_eq!(range.contains_reading(&json!(5)), Ok(true));
        assert_eq!(range.contains_reading(&json!(6)), Ok(false));
        assert_eq!(
            range.contains_reading(&json!(5.5)),
            Err(RangeError::IncompatibleReading {
                reading: "5.5".to_owned(),
                kind: NumericKind::Integer
            })
        );
        assert_eq!(
            range.contains_reading(&json!({"reading": 5})),
            Err(RangeError::UnsupportedType {
                type_name: "object".to_owned()
            })
        );

        let doubles = Range::less_than(Double::new(2.5));
        assert_eq!(doubles.contains_reading(&json!(2)), Ok(true));

        let dynamic = Range::at_least(NumericValueT::Short(10));
        assert_eq!(dynamic.contains_reading(&json!(10)), Ok(true));
        assert_eq!(dynamic.contains_reading(&json!(9)), Ok(false));

        let everything = Range::<i32>::all();
        assert_eq!(everything.contains_reading(&json!(1e300)), Ok(true));
        assert!(everything.contains_reading(&json!("1")).is_err());
    }

    #[test]
    fn equality() {
        assert_eq!(Range::closed(2, 4).unwrap(), Range::closed(2, 4).unwrap());
        assert_ne!(Range::closed(2, 4).unwrap(), Range::closed(2, 3).unwrap());
        assert_ne!(Range::closed(3, 4).unwrap(), Range::closed(2, 4).unwrap());
        assert_ne!(Range::closed(2, 4).unwrap(), Range::open(2, 4).unwrap());
        assert_eq!(Range::at_most(2), Range::at_most(2));
        assert_ne!(Range::at_most(2), Range::at_most(3));
        assert_eq!(Range::at_least(2), Range::at_least(2));
        assert_ne!(Range::at_least(2), Range::at_least(3));
        assert_ne!(Range::at_most(2), Range::at_least(2));
        assert_ne!(Range::at_most(2), Range::less_than(2));
        assert_eq!(Range::closed(2, 2).unwrap(), Range::singleton(2));

        let decimal = |text: &str| text.parse::<BigDecimal>().unwrap();
        assert_eq!(
            Range::closed(decimal("2.0"), decimal("4")).unwrap(),
            Range::closed(decimal("2.00"), decimal("4.000")).unwrap()
        );
        assert_eq!(Range::at_least(decimal("1E+2")), Range::at_least(decimal("100.0")));
        assert_ne!(Range::at_least(decimal("2.0")), Range::at_least(decimal("2.01")));
    }

    #[test]
    fn hashing() {
        assert_eq!(hash_of(&Range::at_most(2)), hash_of(&Range::at_most(2)));
        assert_ne!(hash_of(&Range::at_most(2)), hash_of(&Range::at_most(3)));
        assert_ne!(hash_of(&Range::at_least(2)), hash_of(&Range::at_most(2)));

        let decimals: HashSet<_> = ["1.0", "1.00", "1", "1E+0", "0.1E+1"]
            .into_iter()
            .map(|text| Range::singleton(text.parse::<BigDecimal>().unwrap()))
            .collect();
        assert_eq!(decimals.len(), 1);
    }

    #[test]
    fn bound_accessors() {
        let range = Range::closed_open(2, 4).unwrap();
        assert_eq!(range.lower(), Some(&2));
        assert_eq!(range.upper(), Some(&4));
        assert!(range.lower_inclusive());
        assert!(!range.upper_inclusive());

        let range = Range::at_most(2);
        assert_eq!(range.lower(), None);
        assert_eq!(range.lower_type(), BoundType::Open);
        assert_eq!(range.upper_type(), BoundType::Closed);
        assert_eq!(range.kind(), Some(NumericKind::Integer));
        assert_eq!(Range::<i32>::all().kind(), None);
    }

    #[quickcheck]
    fn singleton_is_closed(value: i64) -> bool {
        Range::closed(value, value).unwrap() == Range::singleton(value)
    }

    #[quickcheck]
    fn containment_matches_comparisons(lower: i64, upper: i64, value: i64) -> bool {
        let open = Range::open(lower, upper).unwrap().contains(&value);
        let closed = Range::closed(lower, upper).unwrap().contains(&value);
        let open_closed = Range::open_closed(lower, upper).unwrap().contains(&value);
        let closed_open = Range::closed_open(lower, upper).unwrap().contains(&value);

        open == Ok(lower < value && value < upper)
            && closed == Ok(lower <= value && value <= upper)
            && open_closed == Ok(lower < value && value <= upper)
            && closed_open == Ok(lower <= value && value < upper)
            && Range::greater_than(lower).contains(&value) == Ok(value > lower)
            && Range::at_least(lower).contains(&value) == Ok(value >= lower)
            && Range::less_than(upper).contains(&value) == Ok(value < upper)
            && Range::at_most(upper).contains(&value) == Ok(value <= upper)
    }

    #[quickcheck]
    fn default_order_agrees_with_comparator(lower: Double, upper: Double, value: Double) -> bool {
        let range = Range::closed_open(lower, upper).unwrap();
        range.contains(&value) == Ok(range.contains_with(&value, Double::cmp))
    }
}
