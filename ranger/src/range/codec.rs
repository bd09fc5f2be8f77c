//! This module implements the canonical text form of a [Range]:
//! `<lowerMarker><lowerValue>..<upperValue><upperMarker>`.
//!
//! The lower marker is `[` (inclusive) or `(` (exclusive or unbounded),
//! the upper marker is `]` (inclusive) or `)` (exclusive or unbounded).
//! An unbounded side is written as `*`, e.g., `[120..*)` is the range
//! of all values greater than or equal to 120.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::datatypes::{NumericKind, NumericValueT, RangeValue, TypedRangeValue};

use super::{BoundType, ParseRangeError, Range};

/// Separator between the two bound values
const SEPARATOR: &str = "..";
/// Bound value of an unbounded side
const UNBOUNDED: &str = "*";

impl<T: RangeValue> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(lower) if self.lower_type == BoundType::Closed => write!(f, "[{lower}")?,
            Some(lower) => write!(f, "({lower}")?,
            None => write!(f, "({UNBOUNDED}")?,
        }

        write!(f, "{SEPARATOR}")?;

        match &self.upper {
            Some(upper) if self.upper_type == BoundType::Closed => write!(f, "{upper}]"),
            Some(upper) => write!(f, "{upper})"),
            None => write!(f, "{UNBOUNDED})"),
        }
    }
}

impl<T: RangeValue> Range<T> {
    /// Return the canonical text form of this range.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Read a range from its text form,
    /// using `parse_value` to read the bound values.
    fn parse_with<F>(text: &str, parse_value: F) -> Result<Self, ParseRangeError>
    where
        F: Fn(&str) -> Result<T, ParseRangeError>,
    {
        let malformed_bounds = || ParseRangeError::MalformedBounds {
            text: text.to_owned(),
        };

        let mut chars = text.chars();
        let lower_type = match chars.next() {
            Some('[') => BoundType::Closed,
            Some('(') => BoundType::Open,
            _ => return Err(malformed_bounds()),
        };
        let upper_type = match chars.next_back() {
            Some(']') => BoundType::Closed,
            Some(')') => BoundType::Open,
            _ => return Err(malformed_bounds()),
        };

        // A bound value containing the separator cannot be represented,
        // which is fine as long as only numeric types are supported.
        let mut parts = chars.as_str().split(SEPARATOR).collect::<Vec<_>>();
        // Empty trailing parts do not count as bound values, so `[2..]` lacks the upper one
        while parts.last() == Some(&"") {
            parts.pop();
        }

        let [lower, upper] = parts[..] else {
            return Err(ParseRangeError::MalformedSeparator {
                text: text.to_owned(),
            });
        };

        let bound_value = |part: &str| {
            if part == UNBOUNDED {
                Ok(None)
            } else {
                parse_value(part).map(Some)
            }
        };

        let range = Self::new(
            bound_value(lower)?,
            lower_type,
            bound_value(upper)?,
            upper_type,
        )?;

        log::trace!("read range {range} from \"{text}\"");

        Ok(range)
    }
}

impl<T: TypedRangeValue> Range<T> {
    /// Read a range from its text form,
    /// as produced by [Range::to_text].
    ///
    /// An unbounded side is always exclusive, so `[*..4]` is read as `(*..4]`.
    ///
    /// # Errors
    /// Returns [ParseRangeError::MalformedBounds] if `text` does not start with `[` or `(`,
    /// or does not end with `]` or `)`, [ParseRangeError::MalformedSeparator] if `text` does not
    /// contain exactly two bound values separated by `..`,
    /// and [ParseRangeError::InvalidBoundValue] if a bound value is not a literal of `T`.
    pub fn from_text(text: &str) -> Result<Self, ParseRangeError> {
        Self::parse_with(text, T::parse_bound)
    }
}

impl Range<NumericValueT> {
    /// Read a range over values of the given [NumericKind] from its text form.
    ///
    /// # Errors
    /// See [Range::from_text].
    pub fn from_text_as(text: &str, kind: NumericKind) -> Result<Self, ParseRangeError> {
        Self::parse_with(text, |part| NumericValueT::parse(part, kind))
    }

    /// Read a range over values of the kind named `kind_name` from its text form.
    ///
    /// # Errors
    /// Returns [RangeError::UnsupportedType][super::RangeError::UnsupportedType]
    /// if `kind_name` does not name one of the supported [NumericKind]s.
    /// See [Range::from_text] for other errors.
    pub fn from_text_named(text: &str, kind_name: &str) -> Result<Self, ParseRangeError> {
        let kind = kind_name.parse::<NumericKind>()?;
        Self::from_text_as(text, kind)
    }
}

impl<T: TypedRangeValue> FromStr for Range<T> {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<T: RangeValue> Serialize for Range<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T: TypedRangeValue> Deserialize<'de> for Range<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(de::Error::custom)
    }
}
