//! Validation error types.

use std::fmt;

use serde::Serialize;

/// Result type for schema validation.
pub type Result<T> = std::result::Result<T, ValidationErrors>;

/// The nature of a single field violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A required field is absent.
    Missing,

    /// The value has the wrong JSON type (`null` included).
    WrongType {
        /// What was found and what was expected.
        detail: String,
    },

    /// A value outside an enumerated set, or rejected by a named rule.
    NotAllowed {
        /// The rejected value and the accepted ones.
        detail: String,
    },

    /// A numeric value lies outside its inclusive bounds.
    OutOfRange {
        /// Inclusive lower bound, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        /// Inclusive upper bound, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },

    /// The record itself is not a JSON object.
    NotAnObject,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "field required"),
            Self::WrongType { detail } | Self::NotAllowed { detail } => f.write_str(detail),
            Self::OutOfRange {
                min: Some(min),
                max: Some(max),
            } => write!(f, "must be between {min} and {max}"),
            Self::OutOfRange {
                min: Some(min),
                max: None,
            } => write!(f, "must be greater than or equal to {min}"),
            Self::OutOfRange {
                min: None,
                max: Some(max),
            } => write!(f, "must be less than or equal to {max}"),
            Self::OutOfRange {
                min: None,
                max: None,
            } => write!(f, "out of range"),
            Self::NotAnObject => write!(f, "expected a JSON object"),
        }
    }
}

/// A violation attached to the path of the offending field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `order.items[0].quantity`.
    pub field: String,

    /// What is wrong with it.
    pub violation: Violation,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// The violations found while validating one record.
///
/// Never empty: a record with no violations validates successfully.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed: {}", summary(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap a list of field errors. Returns `None` if the list is empty.
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// A single violation.
    #[must_use]
    pub fn single(field: impl Into<String>, violation: Violation) -> Self {
        Self(vec![FieldError::new(field, violation)])
    }

    /// The individual field errors, ordered by field path.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The first offending field error.
    #[must_use]
    pub fn first(&self) -> &FieldError {
        &self.0[0]
    }

    /// Whether any error concerns the given field path.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(ValidationErrors::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_every_field() {
        let errors = ValidationErrors::from_errors(vec![
            FieldError::new("price", Violation::OutOfRange { min: Some(0.0), max: None }),
            FieldError::new("slug", Violation::Missing),
        ])
        .unwrap();
        assert_eq!(
            errors.to_string(),
            "validation failed: price: must be greater than or equal to 0; slug: field required"
        );
    }

    #[test]
    fn violation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::OutOfRange {
            min: Some(1.0),
            max: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "out_of_range", "min": 1.0 }));
    }
}
