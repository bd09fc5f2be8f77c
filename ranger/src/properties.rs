//! This module implements reading sensor configuration,
//! given as a list of `key=value` properties, and
//! looking up the [Range]s configured for a sensor.
//!
//! Configuration items of a sensor are named `sensorId.kind.label`,
//! e.g., `engine1.range.tempThreshold`. The sensor id is optional,
//! so `range.tempThreshold` is a valid name as well.

use std::{collections::HashMap, path::Path};

use crate::{
    datatypes::{NumericKind, NumericValueT, TypedRangeValue},
    error::Error,
    range::Range,
};

/// Kind of the configuration items holding ranges
pub const RANGE_PROPERTY_KIND: &str = "range";

/// A set of configuration properties.
///
/// The text format is that of Java properties files, read with [java_properties]:
/// * keys are separated from values by `=`, `:` or whitespace
/// * lines starting with `#` or `!` are comments
/// * a line ending in an odd number of `\` is continued on the next line
/// * escapes like `\=`, `\:` and `\uXXXX` are decoded
/// * later entries override earlier ones
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    /// Read properties from `text`.
    ///
    /// # Errors
    /// Returns [Error::InvalidProperties] if `text` is not a valid properties file,
    /// e.g., because of a malformed `\uXXXX` escape.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let values = java_properties::read(text.as_bytes())?;

        Ok(Self { values })
    }

    /// Read properties from the file at `path`.
    ///
    /// # Errors
    /// Returns [Error::IoReading] if the file cannot be read,
    /// and [Error::InvalidProperties] if its content is not a valid properties file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|error| Error::IoReading {
            error,
            filename: path.to_path_buf(),
        })?;

        let result = Self::parse(&text)?;
        log::debug!("loaded {} properties from {}", result.len(), path.display());

        Ok(result)
    }

    /// Set the property `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Return the value of property `key`, if it is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Return the number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name of the configuration item `label` of the given `kind` (e.g., "range"),
    /// which is `sensorId.kind.label`, or `kind.label` if no sensor id is given.
    pub fn sensor_property_name(sensor_id: Option<&str>, label: &str, kind: &str) -> String {
        match sensor_id {
            Some(sensor_id) if !sensor_id.is_empty() => format!("{sensor_id}.{kind}.{label}"),
            _ => format!("{kind}.{label}"),
        }
    }

    /// Value of the configuration item `label` of the given `kind`.
    ///
    /// # Errors
    /// Returns [Error::MissingProperty] if the item is not configured.
    pub fn sensor_value(
        &self,
        sensor_id: Option<&str>,
        label: &str,
        kind: &str,
    ) -> Result<&str, Error> {
        let name = Self::sensor_property_name(sensor_id, label, kind);

        self.get(&name).ok_or(Error::MissingProperty { name })
    }

    /// The [Range] configured for the sensor under `label`.
    ///
    /// # Errors
    /// Returns [Error::MissingProperty] if no such range is configured,
    /// and [Error::Parse] if the configured value is not a valid range over `T`.
    pub fn range<T: TypedRangeValue>(
        &self,
        sensor_id: Option<&str>,
        label: &str,
    ) -> Result<Range<T>, Error> {
        let text = self.sensor_value(sensor_id, label, RANGE_PROPERTY_KIND)?;
        Ok(Range::from_text(text)?)
    }

    /// The [Range] configured for the sensor under `label`,
    /// read as a range over values of the given [NumericKind].
    ///
    /// # Errors
    /// See [Properties::range].
    pub fn range_as(
        &self,
        sensor_id: Option<&str>,
        label: &str,
        kind: NumericKind,
    ) -> Result<Range<NumericValueT>, Error> {
        let text = self.sensor_value(sensor_id, label, RANGE_PROPERTY_KIND)?;
        Ok(Range::<NumericValueT>::from_text_as(text, kind)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
