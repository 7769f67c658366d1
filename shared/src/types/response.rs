//! API response types shared across crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of a validation failure: one message list per offending field.
///
/// Serializes to `{ "errors": { "<field>": ["<message>", ...] } }`, the
/// shape the client's form components render inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrors {
    pub errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Invalid email");
        errors.add("email", "Email is required");
        errors.add("pincode", "Pincode should be 6 digits");

        assert_eq!(errors.errors["email"].len(), 2);
        assert_eq!(errors.errors["pincode"].len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let mut errors = FieldErrors::new();
        errors.add("mobileNumber", "Must be exactly 10 digits");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json["errors"]["mobileNumber"][0],
            "Must be exactly 10 digits"
        );
    }
}
