//! Structural query operators
//!
//! Most operators compare against the field itself, so their argument takes
//! the field's type. The operators listed here take an argument of a fixed
//! type no matter which field they are applied to.

use docquery_types::FieldType;

/// Operators whose argument type is fixed by the operator
pub static STRUCTURAL_OPERATORS: &[(&str, FieldType)] = &[
    ("$exists", FieldType::Boolean),
    ("$size", FieldType::Integer),
];

/// Argument type of a structural operator, `None` for every other key
pub fn intrinsic_type(operator: &str) -> Option<&'static FieldType> {
    STRUCTURAL_OPERATORS
        .iter()
        .find(|(name, _)| *name == operator)
        .map(|(_, ty)| ty)
}
