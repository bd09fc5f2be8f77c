use std::{cmp::Ordering, fmt::Display};

use bigdecimal::BigDecimal;
use num::BigInt;

use crate::range::{ParseRangeError, RangeError};

use super::{Double, Float, NumericKind, RangeValue};

/// Enum for values of all supported numeric kinds.
///
/// This is the form in which values of statically unknown type
/// enter a [Range][crate::range::Range], e.g., when the type of a range
/// is only known from configuration.
///
/// There is no [Ord] implementation, since values of different kinds
/// are not comparable. Use [NumericValueRef::compare] instead.
#[allow(variant_size_differences)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericValueT {
    /// A value of kind [`NumericKind::Byte`]
    Byte(i8),
    /// A value of kind [`NumericKind::Short`]
    Short(i16),
    /// A value of kind [`NumericKind::Integer`]
    Integer(i32),
    /// A value of kind [`NumericKind::Long`]
    Long(i64),
    /// A value of kind [`NumericKind::Float`]
    Float(Float),
    /// A value of kind [`NumericKind::Double`]
    Double(Double),
    /// A value of kind [`NumericKind::BigInteger`]
    BigInteger(BigInt),
    /// A value of kind [`NumericKind::BigDecimal`]
    BigDecimal(BigDecimal),
}

/// Borrowed view on a value of one of the supported numeric kinds.
///
/// Containment tests dispatch on the variant of this type
/// to select the ordering that fits the runtime representation of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericValueRef<'a> {
    /// A value of kind [`NumericKind::Byte`]
    Byte(i8),
    /// A value of kind [`NumericKind::Short`]
    Short(i16),
    /// A value of kind [`NumericKind::Integer`]
    Integer(i32),
    /// A value of kind [`NumericKind::Long`]
    Long(i64),
    /// A value of kind [`NumericKind::Float`]
    Float(Float),
    /// A value of kind [`NumericKind::Double`]
    Double(Double),
    /// A value of kind [`NumericKind::BigInteger`]
    BigInteger(&'a BigInt),
    /// A value of kind [`NumericKind::BigDecimal`]
    BigDecimal(&'a BigDecimal),
}

impl NumericValueT {
    /// Returns the [NumericKind] of this value.
    pub fn kind(&self) -> NumericKind {
        self.as_numeric().kind()
    }

    /// Parse `text` as a value of the given [NumericKind],
    /// using the canonical parser of the corresponding type.
    ///
    /// # Errors
    /// Returns [ParseRangeError::InvalidBoundValue] if `text`
    /// is not a valid literal of `kind`.
    pub fn parse(text: &str, kind: NumericKind) -> Result<Self, ParseRangeError> {
        macro_rules! parse_as {
            ($variant:ident) => {
                text.parse().map(Self::$variant).ok()
            };
        }

        let result = match kind {
            NumericKind::Byte => parse_as!(Byte),
            NumericKind::Short => parse_as!(Short),
            NumericKind::Integer => parse_as!(Integer),
            NumericKind::Long => parse_as!(Long),
            NumericKind::Float => parse_as!(Float),
            NumericKind::Double => parse_as!(Double),
            NumericKind::BigInteger => parse_as!(BigInteger),
            NumericKind::BigDecimal => parse_as!(BigDecimal),
        };

        result.ok_or_else(|| ParseRangeError::InvalidBoundValue {
            text: text.to_owned(),
            kind,
        })
    }
}

impl<'a> NumericValueRef<'a> {
    /// Returns the [NumericKind] of this value.
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Byte(_) => NumericKind::Byte,
            Self::Short(_) => NumericKind::Short,
            Self::Integer(_) => NumericKind::Integer,
            Self::Long(_) => NumericKind::Long,
            Self::Float(_) => NumericKind::Float,
            Self::Double(_) => NumericKind::Double,
            Self::BigInteger(_) => NumericKind::BigInteger,
            Self::BigDecimal(_) => NumericKind::BigDecimal,
        }
    }

    /// Compares this value with `other`, using the ordering
    /// that belongs to the kind of `self`.
    ///
    /// # Errors
    /// Returns [RangeError::MismatchedValueType] if `other` is of a different kind.
    pub fn compare(&self, other: &NumericValueRef<'a>) -> Result<Ordering, RangeError> {
        let mismatch = || RangeError::MismatchedValueType {
            expected: other.kind(),
            found: self.kind(),
        };

        match self {
            Self::Byte(val) => i8::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::Short(val) => i16::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::Integer(val) => i32::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::Long(val) => i64::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::Float(val) => Float::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::Double(val) => Double::try_from(*other).map(|otherval| val.cmp(&otherval)),
            Self::BigInteger(val) => {
                <&BigInt>::try_from(*other).map(|otherval| (*val).cmp(otherval))
            }
            Self::BigDecimal(val) => {
                <&BigDecimal>::try_from(*other).map(|otherval| (*val).cmp(otherval))
            }
        }
        .map_err(|()| mismatch())
    }
}

macro_rules! numeric_ref_try_from {
    ($variant:ident => $dst:ty) => {
        impl<'a> TryFrom<NumericValueRef<'a>> for $dst {
            type Error = ();

            fn try_from(value: NumericValueRef<'a>) -> Result<Self, Self::Error> {
                match value {
                    NumericValueRef::$variant(val) => Ok(val),
                    _ => Err(()),
                }
            }
        }
    };
}

numeric_ref_try_from!(Byte => i8);
numeric_ref_try_from!(Short => i16);
numeric_ref_try_from!(Integer => i32);
numeric_ref_try_from!(Long => i64);
numeric_ref_try_from!(Float => Float);
numeric_ref_try_from!(Double => Double);
numeric_ref_try_from!(BigInteger => &'a BigInt);
numeric_ref_try_from!(BigDecimal => &'a BigDecimal);

macro_rules! numeric_value_from {
    ($src:ty => $variant:ident) => {
        impl From<$src> for NumericValueT {
            fn from(value: $src) -> Self {
                NumericValueT::$variant(value)
            }
        }
    };
}

numeric_value_from!(i8 => Byte);
numeric_value_from!(i16 => Short);
numeric_value_from!(i32 => Integer);
numeric_value_from!(i64 => Long);
numeric_value_from!(Float => Float);
numeric_value_from!(Double => Double);
numeric_value_from!(BigInt => BigInteger);
numeric_value_from!(BigDecimal => BigDecimal);

impl From<f32> for NumericValueT {
    fn from(value: f32) -> Self {
        NumericValueT::Float(Float::new(value))
    }
}

impl From<f64> for NumericValueT {
    fn from(value: f64) -> Self {
        NumericValueT::Double(Double::new(value))
    }
}

impl Display for NumericValueT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.as_numeric(), f)
    }
}

impl Display for NumericValueRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Byte(val) => write!(f, "{val}"),
            Self::Short(val) => write!(f, "{val}"),
            Self::Integer(val) => write!(f, "{val}"),
            Self::Long(val) => write!(f, "{val}"),
            Self::Float(val) => write!(f, "{val}"),
            Self::Double(val) => write!(f, "{val}"),
            Self::BigInteger(val) => write!(f, "{val}"),
            Self::BigDecimal(val) => write!(f, "{val}"),
        }
    }
}

/// Name of the JSON type of `value`, used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<&serde_json::Value> for NumericValueT {
    type Error = RangeError;

    /// Integers become [NumericValueT::Long], or [NumericValueT::BigInteger]
    /// if they exceed the range of [i64]. All other numbers become [NumericValueT::Double].
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Number(number) = value else {
            return Err(RangeError::UnsupportedType {
                type_name: json_type_name(value).to_owned(),
            });
        };

        if let Some(long) = number.as_i64() {
            Ok(NumericValueT::Long(long))
        } else if let Some(unsigned) = number.as_u64() {
            Ok(NumericValueT::BigInteger(BigInt::from(unsigned)))
        } else {
            number
                .as_f64()
                .map(NumericValueT::from)
                .ok_or_else(|| RangeError::UnsupportedType {
                    type_name: json_type_name(value).to_owned(),
                })
        }
    }
}
