//! Closed editable-field descriptors
//!
//! Every editable row declares a closed descriptor set and applies edits
//! through explicit dispatch, so an edit either names a known field with
//! a value of the right kind or fails before touching the row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of value a field accepts
///
/// Descriptors are static declarations serialized out to a view layer,
/// never read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Decimal number
    Numeric,
    /// One of a fixed option list
    Select(&'static [&'static str]),
}

/// A single editable-field declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name used in edit dispatch
    pub name: &'static str,
    /// Accepted value kind
    pub kind: FieldKind,
    /// False for display-only fields (e.g. invoice number, date)
    pub editable: bool,
}

impl FieldDescriptor {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            editable: true,
        }
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric,
            editable: true,
        }
    }

    pub const fn select(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Select(options),
            editable: true,
        }
    }

    pub const fn read_only(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            editable: false,
        }
    }
}

/// A value supplied for a field edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
}

impl FieldValue {
    /// Returns the text content, or an error for a numeric value
    pub fn as_text(&self, field: &str) -> Result<&str, EditError> {
        match self {
            FieldValue::Text(s) => Ok(s),
            FieldValue::Number(_) => Err(EditError::TypeMismatch {
                field: field.to_string(),
                expected: "text",
            }),
        }
    }

    /// Returns the numeric content, or an error for a text value
    pub fn as_number(&self, field: &str) -> Result<Decimal, EditError> {
        match self {
            FieldValue::Number(n) => Ok(*n),
            FieldValue::Text(_) => Err(EditError::TypeMismatch {
                field: field.to_string(),
                expected: "number",
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Decimal> for FieldValue {
    fn from(n: Decimal) -> Self {
        FieldValue::Number(n)
    }
}

/// Errors raised by field-edit dispatch
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field is read-only: {0}")]
    ReadOnly(String),

    #[error("Type mismatch for {field}: expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid option for {field}: {value}")]
    InvalidOption { field: String, value: String },
}

/// A row whose fields can be edited through the closed descriptor set
pub trait EditableRow {
    /// Declares every field the edit surface may touch
    fn descriptors() -> &'static [FieldDescriptor];

    /// Applies one field edit, recomputing derived fields as needed
    fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), EditError>;

    /// Looks up a descriptor by name
    fn descriptor(field: &str) -> Option<&'static FieldDescriptor> {
        Self::descriptors().iter().find(|d| d.name == field)
    }
}

/// Shared dispatch guard: resolves the descriptor and rejects edits to
/// unknown or read-only fields before the row-specific match runs.
pub fn check_editable<R: EditableRow>(field: &str) -> Result<&'static FieldDescriptor, EditError> {
    let descriptor =
        R::descriptor(field).ok_or_else(|| EditError::UnknownField(field.to_string()))?;
    if !descriptor.editable {
        return Err(EditError::ReadOnly(field.to_string()));
    }
    Ok(descriptor)
}

/// Validates a select value against the descriptor's option list
pub fn check_option(
    descriptor: &FieldDescriptor,
    value: &str,
) -> Result<(), EditError> {
    if let FieldKind::Select(options) = descriptor.kind {
        if !options.contains(&value) {
            return Err(EditError::InvalidOption {
                field: descriptor.name.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Row {
        name: String,
        amount: Decimal,
    }

    impl EditableRow for Row {
        fn descriptors() -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::text("name"),
                FieldDescriptor::numeric("amount"),
                FieldDescriptor::read_only("invoice_number"),
            ];
            FIELDS
        }

        fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
            check_editable::<Self>(field)?;
            match field {
                "name" => self.name = value.as_text(field)?.to_string(),
                "amount" => self.amount = value.as_number(field)?,
                _ => unreachable!("descriptor table is the closed set"),
            }
            Ok(())
        }
    }

    #[test]
    fn test_apply_known_field() {
        let mut row = Row {
            name: "a".into(),
            amount: dec!(0),
        };
        row.apply("amount", dec!(12.5).into()).unwrap();
        assert_eq!(row.amount, dec!(12.5));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut row = Row {
            name: "a".into(),
            amount: dec!(0),
        };
        let err = row.apply("nope", "x".into()).unwrap_err();
        assert_eq!(err, EditError::UnknownField("nope".to_string()));
    }

    #[test]
    fn test_read_only_field_is_rejected() {
        let mut row = Row {
            name: "a".into(),
            amount: dec!(0),
        };
        let err = row.apply("invoice_number", "INV-2".into()).unwrap_err();
        assert_eq!(err, EditError::ReadOnly("invoice_number".to_string()));
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let mut row = Row {
            name: "a".into(),
            amount: dec!(0),
        };
        let err = row.apply("amount", "not a number".into()).unwrap_err();
        assert!(matches!(err, EditError::TypeMismatch { .. }));
    }

    #[test]
    fn test_descriptor_serializes_for_the_view_layer() {
        let descriptor = FieldDescriptor::select("mode", &["Cash", "Card"]);
        let json = serde_json::to_value(descriptor).unwrap();
        assert_eq!(json["name"], "mode");
        assert_eq!(json["kind"]["Select"][0], "Cash");
        assert_eq!(json["editable"], true);
    }

    #[test]
    fn test_check_option() {
        let descriptor = FieldDescriptor::select("mode", &["Cash", "Card"]);
        assert!(check_option(&descriptor, "Cash").is_ok());
        assert!(matches!(
            check_option(&descriptor, "Cheque"),
            Err(EditError::InvalidOption { .. })
        ));
    }
}
