//! This module defines errors that are relevant when dealing with ranges.

use thiserror::Error;

use crate::datatypes::NumericKind;

/// Potential errors encountered when constructing [Range][super::Range]s
/// or testing values for containment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Error for values whose type is not one of the supported [NumericKind]s
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// Name of the offending type
        type_name: String,
    },
    /// Error for ranges whose lower and upper bound differ in their representation
    #[error("lower bound ({lower}) and upper bound ({upper}) are not the same type")]
    MismatchedBoundTypes {
        /// Kind of the lower bound
        lower: NumericKind,
        /// Kind of the upper bound
        upper: NumericKind,
    },
    /// Error for comparing a value with a bound of a different representation
    #[error("value of type {found} cannot be compared with a bound of type {expected}")]
    MismatchedValueType {
        /// Kind of the bound
        expected: NumericKind,
        /// Kind of the tested value
        found: NumericKind,
    },
    /// Error for numeric readings that cannot be represented in the type of a range
    #[error("reading {reading} cannot be represented as {kind}")]
    IncompatibleReading {
        /// Textual form of the reading
        reading: String,
        /// Kind of the range
        kind: NumericKind,
    },
}

/// Potential errors encountered when reading a [Range][super::Range] from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError {
    /// Text does not start with `[` or `(`, or does not end with `]` or `)`
    #[error("range '{text}' is not enclosed in bound markers")]
    MalformedBounds {
        /// Text that failed to parse
        text: String,
    },
    /// Text does not consist of exactly two bound values separated by `..`
    #[error("range '{text}' does not contain exactly two bound values separated by \"..\"")]
    MalformedSeparator {
        /// Text that failed to parse
        text: String,
    },
    /// A bound value is not a literal of the target type
    #[error("bound value '{text}' is not a valid {kind}")]
    InvalidBoundValue {
        /// Bound value that failed to parse
        text: String,
        /// Kind that was expected
        kind: NumericKind,
    },
    /// The parsed bounds do not form a valid range
    #[error(transparent)]
    Range(#[from] RangeError),
}
