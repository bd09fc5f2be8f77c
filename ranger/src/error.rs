//! Error-handling module for the crate

use std::path::PathBuf;

use thiserror::Error;

use crate::range::{ParseRangeError, RangeError};

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Errors constructing or querying ranges
    #[error(transparent)]
    Range(#[from] RangeError),
    /// Errors reading ranges from text
    #[error(transparent)]
    Parse(#[from] ParseRangeError),
    /// A configuration property that is required is not set
    #[error("Missing configuration property {name}")]
    MissingProperty {
        /// Name of the missing property
        name: String,
    },
    /// Configuration text that is not a valid properties file
    #[error(transparent)]
    InvalidProperties(#[from] java_properties::PropertiesError),
    /// Error during a Read operation
    #[error("Failed to read \"{}\": {error}", filename.display())]
    IoReading {
        /// Underlying IO error
        error: std::io::Error,
        /// Name of the file that could not be read
        filename: PathBuf,
    },
}
