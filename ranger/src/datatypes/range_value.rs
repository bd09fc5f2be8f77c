use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use bigdecimal::BigDecimal;
use num::BigInt;

use crate::range::{ParseRangeError, RangeError};

use super::{Double, Float, NumericKind, NumericValueRef, NumericValueT};

mod sealed {
    pub trait Sealed {}
}

/// Types that can be used as bounds of a [Range][crate::range::Range].
///
/// This trait is sealed: it is implemented exactly for the Rust types
/// of the supported [NumericKind]s, and for [NumericValueT],
/// whose kind is only known at runtime.
pub trait RangeValue: sealed::Sealed + Clone + Debug + Display + Eq + Hash {
    /// Returns the [NumericKind] of the runtime representation of this value.
    fn kind(&self) -> NumericKind {
        self.as_numeric().kind()
    }

    /// Borrow this value as a [NumericValueRef].
    fn as_numeric(&self) -> NumericValueRef<'_>;

    /// Convert a JSON reading into a value of the given [NumericKind],
    /// which is the kind of the range that the reading is tested against.
    /// Statically typed values always use the kind of their type.
    ///
    /// Numbers are converted via their textual representation,
    /// so `3` can be read as any numeric kind, but `3.5` not as an integer.
    ///
    /// # Errors
    /// Returns [RangeError::UnsupportedType] if the reading is not a number,
    /// and [RangeError::IncompatibleReading] if the number cannot be represented.
    fn from_reading(reading: &serde_json::Value, kind: NumericKind) -> Result<Self, RangeError>;
}

/// Error for a reading that cannot be represented as `kind`.
fn incompatible_reading(reading: &serde_json::Value, kind: NumericKind) -> RangeError {
    RangeError::IncompatibleReading {
        reading: reading.to_string(),
        kind,
    }
}

/// [RangeValue]s whose [NumericKind] is fixed by their type.
pub trait TypedRangeValue: RangeValue + Sized {
    /// The kind of every value of this type
    const KIND: NumericKind;

    /// Parse `text` with the canonical parser of this type.
    ///
    /// # Errors
    /// Returns [ParseRangeError::InvalidBoundValue] if `text` is not
    /// a literal of this type.
    fn parse_bound(text: &str) -> Result<Self, ParseRangeError>;
}

macro_rules! typed_range_value {
    ($type:ty => $variant:ident, |$value:ident| $view:expr) => {
        impl sealed::Sealed for $type {}

        impl RangeValue for $type {
            fn kind(&self) -> NumericKind {
                Self::KIND
            }

            fn as_numeric(&self) -> NumericValueRef<'_> {
                let $value = self;
                $view
            }

            fn from_reading(
                reading: &serde_json::Value,
                kind: NumericKind,
            ) -> Result<Self, RangeError> {
                debug_assert_eq!(kind, Self::KIND);

                let numeric = NumericValueT::try_from(reading)?;
                Self::parse_bound(&numeric.to_string())
                    .map_err(|_| incompatible_reading(reading, Self::KIND))
            }
        }

        impl TypedRangeValue for $type {
            const KIND: NumericKind = NumericKind::$variant;

            fn parse_bound(text: &str) -> Result<Self, ParseRangeError> {
                text.parse()
                    .map_err(|_| ParseRangeError::InvalidBoundValue {
                        text: text.to_owned(),
                        kind: Self::KIND,
                    })
            }
        }
    };
}

typed_range_value!(i8 => Byte, |value| NumericValueRef::Byte(*value));
typed_range_value!(i16 => Short, |value| NumericValueRef::Short(*value));
typed_range_value!(i32 => Integer, |value| NumericValueRef::Integer(*value));
typed_range_value!(i64 => Long, |value| NumericValueRef::Long(*value));
typed_range_value!(Float => Float, |value| NumericValueRef::Float(*value));
typed_range_value!(Double => Double, |value| NumericValueRef::Double(*value));
typed_range_value!(BigInt => BigInteger, |value| NumericValueRef::BigInteger(value));
typed_range_value!(BigDecimal => BigDecimal, |value| NumericValueRef::BigDecimal(value));

impl sealed::Sealed for NumericValueT {}

impl RangeValue for NumericValueT {
    fn as_numeric(&self) -> NumericValueRef<'_> {
        match self {
            Self::Byte(value) => NumericValueRef::Byte(*value),
            Self::Short(value) => NumericValueRef::Short(*value),
            Self::Integer(value) => NumericValueRef::Integer(*value),
            Self::Long(value) => NumericValueRef::Long(*value),
            Self::Float(value) => NumericValueRef::Float(*value),
            Self::Double(value) => NumericValueRef::Double(*value),
            Self::BigInteger(value) => NumericValueRef::BigInteger(value),
            Self::BigDecimal(value) => NumericValueRef::BigDecimal(value),
        }
    }

    fn from_reading(reading: &serde_json::Value, kind: NumericKind) -> Result<Self, RangeError> {
        let numeric = NumericValueT::try_from(reading)?;

        if numeric.kind() == kind {
            Ok(numeric)
        } else {
            NumericValueT::parse(&numeric.to_string(), kind)
                .map_err(|_| incompatible_reading(reading, kind))
        }
    }
}
