//! Reusable draft filters
//!
//! These filters clean form text before a draft is validated and sent

/// Filter: trim whitespace from a required text field
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: trim an optional text field, turning blank input into "no value"
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
