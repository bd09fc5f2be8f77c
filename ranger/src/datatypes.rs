//! This module collects functionality specific to the supported numeric datatypes.

/// Module for defining [NumericKind]
pub mod numeric_kind;
pub use numeric_kind::NumericKind;
pub use numeric_kind::NUMERIC_KINDS;
/// Module for defining [NumericValueT] and [NumericValueRef]
pub mod numeric_value;
pub use numeric_value::NumericValueRef;
pub use numeric_value::NumericValueT;
/// Module for defining [RangeValue] and [TypedRangeValue]
pub mod range_value;
pub use range_value::RangeValue;
pub use range_value::TypedRangeValue;
/// Module for defining [Double]
pub mod double;
pub use double::Double;
/// Module for defining [Float]
pub mod float;
pub use float::Float;
/// Module for defining [unsigned_cmp]
pub mod unsigned;
pub use unsigned::unsigned_cmp;
