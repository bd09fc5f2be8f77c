//! This module defines all the errors that can occur while executing ranger-cli.

use ranger::{
    datatypes::NumericKind,
    range::{ParseRangeError, RangeError},
};
use thiserror::Error;

/// Error that occur during execution of Ranger's CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Error if unsigned comparison was requested for a type that is not a fixed-width integer
    #[error("unsigned comparison is not supported for type {kind}")]
    UnsignedNotSupported {
        /// Type of the range
        kind: NumericKind,
    },
    /// Error originating from ranger
    #[error(transparent)]
    RangerError(#[from] ranger::error::Error),
}

impl From<RangeError> for CliError {
    fn from(error: RangeError) -> Self {
        Self::RangerError(error.into())
    }
}

impl From<ParseRangeError> for CliError {
    fn from(error: ParseRangeError) -> Self {
        Self::RangerError(error.into())
    }
}
