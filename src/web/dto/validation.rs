use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::ResourceType;

/// Turns a raw request body into a checked service input.
pub trait Validate {
    type Output;

    fn resource_type() -> ResourceType;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Field name as it appears in the request body
    pub field: String,
    pub message: String,
}

/// Accumulates every field problem of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push<S: Into<String>>(&mut self, field: &str, message: S) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, "must not be null");
        }
        value
    }

    /// Present, not only whitespace, at most `max_len` characters.
    pub fn not_blank(
        &mut self,
        field: &str,
        value: Option<String>,
        max_len: usize,
    ) -> Option<String> {
        let value = self.required(field, value)?;

        if value.trim().is_empty() {
            self.push(field, "must not be blank");
            return None;
        }

        if !self.storable(field, &value) {
            return None;
        }

        if value.chars().count() > max_len {
            self.push(field, format!("must be at most {} characters", max_len));
            return None;
        }

        Some(value)
    }

    /// Optional text: blank collapses to `None`, anything else must be
    /// storable.
    pub fn optional(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value.filter(|v| !v.trim().is_empty())?;
        self.storable(field, &value).then_some(value)
    }

    // postgres text columns cannot hold NUL
    fn storable(&mut self, field: &str, value: &str) -> bool {
        if value.contains('\0') {
            self.push(field, "must not contain NUL characters");
            return false;
        }
        true
    }

    /// Present and parseable into one of `T`'s members.
    pub fn member<T>(&mut self, field: &str, value: Option<String>) -> Option<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.required(field, value)?;

        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.push(field, e.to_string());
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}
