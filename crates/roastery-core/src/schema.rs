//! Schema definition primitives.
//!
//! Entities are plain serde structs: `Deserialize` does field lookup, type
//! checks and defaults, `validator::Validate` checks ranges. [`parse`] runs
//! both and turns whatever they report into [`ValidationErrors`] keyed by
//! field path. Deserialization stops at the first bad field; range checks
//! report every field that fails.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use serde_path_to_error::Segment;
use validator::{Validate, ValidationErrorsKind};

use crate::error::{FieldError, Result, ValidationErrors, Violation};
use crate::kind::EntityKind;

/// A document body: field name to JSON value.
pub type Fields = serde_json::Map<String, Value>;

/// An entity with a validated, persistable shape.
pub trait Schema: Serialize + DeserializeOwned + Validate {
    /// The entity kind, which selects the collection.
    const KIND: EntityKind;

    /// Validate a candidate record, applying defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns the violations found in the record.
    fn from_value(value: &Value) -> Result<Self> {
        parse(value)
    }

    /// Validate a stored document body.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::from_value`].
    fn from_fields(fields: &Fields) -> Result<Self> {
        parse(&Value::Object(fields.clone()))
    }

    /// The normalized document body for this record.
    fn to_fields(&self) -> Fields {
        // Entities are plain structs with string keys, which always
        // serialize to a JSON object.
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            _ => Fields::new(),
        }
    }
}

/// Deserialize and validate any record type.
///
/// # Errors
///
/// Returns [`Violation::NotAnObject`] for non-objects, the first
/// deserialization failure, or every failed range check.
pub fn parse<T: DeserializeOwned + Validate>(value: &Value) -> Result<T> {
    if !value.is_object() {
        return Err(ValidationErrors::single("", Violation::NotAnObject));
    }

    let record: T = serde_path_to_error::deserialize(value).map_err(|e| {
        let parent = join_segments(e.path().iter());
        let error = field_error(&parent, &e.inner().to_string());
        ValidationErrors::single(error.field, error.violation)
    })?;

    match record.validate() {
        Ok(()) => Ok(record),
        Err(errors) => {
            let mut found = Vec::new();
            collect(&errors, "", &mut found);
            found.sort_by(|a, b| a.field.cmp(&b.field));
            match ValidationErrors::from_errors(found) {
                Some(errors) => Err(errors),
                None => Ok(record),
            }
        }
    }
}

fn join_segments<'a>(segments: impl Iterator<Item = &'a Segment>) -> String {
    let mut path = String::new();
    for segment in segments {
        match segment {
            Segment::Seq { index } => path.push_str(&format!("[{index}]")),
            Segment::Map { key } | Segment::Enum { variant: key } => push_field(&mut path, key),
            Segment::Unknown => push_field(&mut path, "?"),
        }
    }
    path
}

fn push_field(path: &mut String, name: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(name);
}

fn join(parent: &str, name: &str) -> String {
    let mut path = parent.to_string();
    push_field(&mut path, name);
    path
}

/// Classify a serde message. A missing field is reported against the
/// enclosing object, so its name is lifted out of the message.
fn field_error(parent: &str, message: &str) -> FieldError {
    if let Some(name) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return FieldError::new(join(parent, name), Violation::Missing);
    }

    let detail = message.to_string();
    let violation = if message.starts_with("unknown variant") {
        Violation::NotAllowed { detail }
    } else {
        Violation::WrongType { detail }
    };
    FieldError::new(parent, violation)
}

fn collect(errors: &validator::ValidationErrors, parent: &str, found: &mut Vec<FieldError>) {
    for (name, kind) in errors.errors() {
        let path = join(parent, name);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                found.extend(failures.iter().map(|f| FieldError::new(&path, rule_violation(f))));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, found),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), found);
                }
            }
        }
    }
}

fn rule_violation(failure: &validator::ValidationError) -> Violation {
    if failure.code == "range" {
        let bound = |key: &str| failure.params.get(key).and_then(Value::as_f64);
        Violation::OutOfRange {
            min: bound("min"),
            max: bound("max"),
        }
    } else {
        Violation::NotAllowed {
            detail: format!("rejected by rule `{}`", failure.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Line {
        #[validate(range(min = 1))]
        n: i64,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Basket {
        #[validate(range(min = 0.0, max = 5.0))]
        ratio: f64,
        #[validate(range(min = 0))]
        count: i64,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn range_failures_are_all_reported() {
        let errors = parse::<Basket>(&json!({
            "ratio": 7.5,
            "count": -1,
            "lines": [{ "n": 2 }, { "n": 0 }],
        }))
        .unwrap_err();

        let paths: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(paths, ["count", "lines[1].n", "ratio"]);
        assert_eq!(
            errors.errors()[2].violation,
            Violation::OutOfRange {
                min: Some(0.0),
                max: Some(5.0)
            }
        );
    }

    #[test]
    fn missing_nested_field_gets_full_path() {
        let errors = parse::<Basket>(&json!({
            "ratio": 1.0,
            "count": 1,
            "lines": [{ "n": 1 }, {}],
        }))
        .unwrap_err();

        assert_eq!(errors.errors(), &[FieldError::new("lines[1].n", Violation::Missing)]);
    }

    #[test]
    fn wrong_type_names_the_field() {
        let errors = parse::<Basket>(&json!({ "ratio": "high", "count": 1, "lines": [] }))
            .unwrap_err();

        assert_eq!(errors.first().field, "ratio");
        assert!(matches!(errors.first().violation, Violation::WrongType { .. }));
    }

    #[test]
    fn non_objects_are_rejected() {
        let errors = parse::<Basket>(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.first().violation, Violation::NotAnObject);
    }
}
