use std::{fmt::Display, str::FromStr};

use enum_assoc::Assoc;

use crate::range::RangeError;

/// Number of supported numeric kinds
pub(crate) const NUM_NUMERIC_KINDS: usize = 8;

/// Descriptors to refer to the supported numeric representations at runtime.
///
/// This is the closed set of types over which a [Range][crate::range::Range]
/// can be defined.
#[derive(Assoc, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn rust_alias(&self) -> Option<&'static str>)]
pub enum NumericKind {
    /// Data type [`i8`]
    #[assoc(name = "Byte")]
    #[assoc(rust_alias = "i8")]
    Byte,
    /// Data type [`i16`]
    #[assoc(name = "Short")]
    #[assoc(rust_alias = "i16")]
    Short,
    /// Data type [`i32`]
    #[assoc(name = "Integer")]
    #[assoc(rust_alias = "i32")]
    Integer,
    /// Data type [`i64`]
    #[assoc(name = "Long")]
    #[assoc(rust_alias = "i64")]
    Long,
    /// Data type [`super::Float`]
    #[assoc(name = "Float")]
    #[assoc(rust_alias = "f32")]
    Float,
    /// Data type [`super::Double`]
    #[assoc(name = "Double")]
    #[assoc(rust_alias = "f64")]
    Double,
    /// Data type [`num::BigInt`]
    #[assoc(name = "BigInteger")]
    BigInteger,
    /// Data type [`bigdecimal::BigDecimal`]
    #[assoc(name = "BigDecimal")]
    BigDecimal,
}

/// A list of all [NumericKind]s,
/// in the order they appear in the enum.
pub const NUMERIC_KINDS: &[NumericKind; NUM_NUMERIC_KINDS] = &[
    NumericKind::Byte,
    NumericKind::Short,
    NumericKind::Integer,
    NumericKind::Long,
    NumericKind::Float,
    NumericKind::Double,
    NumericKind::BigInteger,
    NumericKind::BigDecimal,
];

impl NumericKind {
    /// Whether values of this kind are integers of a fixed bit width.
    pub fn is_fixed_width_integer(&self) -> bool {
        matches!(
            self,
            NumericKind::Byte | NumericKind::Short | NumericKind::Integer | NumericKind::Long
        )
    }

    /// Look up a [NumericKind] by its name or by the name of the
    /// corresponding Rust primitive type.
    ///
    /// Names are compared case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        NUMERIC_KINDS.iter().copied().find(|kind| {
            kind.name().eq_ignore_ascii_case(name)
                || kind
                    .rust_alias()
                    .is_some_and(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

impl FromStr for NumericKind {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RangeError::UnsupportedType {
            type_name: s.to_owned(),
        })
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
