//! Field filters over raw list records
//!
//! Used to resolve a human-readable key (project name, user email, CIDR) to a
//! record before it is converted to a typed model.

use serde_json::Value;

use crate::error::{ApiError, Result};

/// Look up a dotted field path (`"status.state"`) in a JSON record.
pub fn field<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |value, segment| value.get(segment))
}

/// String value of a dotted field path, if it is a string.
pub fn field_str<'a>(record: &'a Value, path: &str) -> Option<&'a str> {
    field(record, path).and_then(Value::as_str)
}

/// A `(field, expected value)` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    field: String,
    value: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the record's field equals the expected value.
    ///
    /// Strings compare verbatim; numbers and booleans compare by their JSON
    /// text. Missing and null fields never match.
    pub fn matches(&self, record: &Value) -> bool {
        match field(record, &self.field) {
            Some(Value::String(s)) => *s == self.value,
            Some(Value::Null) | None => false,
            Some(other @ (Value::Number(_) | Value::Bool(_))) => other.to_string() == self.value,
            Some(_) => false,
        }
    }

    /// First matching record in list order.
    pub fn first<'a>(&self, records: &'a [Value]) -> Option<&'a Value> {
        records.iter().find(|r| self.matches(r))
    }

    /// The only matching record, `None` when nothing matches, or
    /// `ApiError::Ambiguous` when several do.
    pub fn unique<'a>(&self, records: &'a [Value]) -> Result<Option<&'a Value>> {
        let mut matches = records.iter().filter(|r| self.matches(r));
        let found = matches.next();
        let extra = matches.count();

        if extra > 0 {
            return Err(ApiError::Ambiguous {
                field: self.field.clone(),
                value: self.value.clone(),
                count: extra + 1,
            }
            .into());
        }
        Ok(found)
    }
}
