//! This crate defines bounded, possibly unbounded intervals over numeric types,
//! which are used to express threshold predicates on sensor readings,
//! e.g., "the temperature must lie in `[77..91]`".
//!
//! Ranges have a canonical text form (see [range::codec])
//! and can be read from sensor configuration files (see [properties]).

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod datatypes;
pub mod error;
pub mod properties;
pub mod range;
