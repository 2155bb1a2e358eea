//! Reusable field validators
//!
//! Drafts are checked in their serialized JSON form, so the same validators
//! work for every entity type.

use serde_json::Value;

/// Numeric view of a JSON value. Decimals serialize as strings.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Validator: field is required (not null, not blank)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("'{}' is required", field)),
        Value::String(s) if s.trim().is_empty() => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match as_number(value) {
        Some(num) if num <= 0.0 => Err(format!(
            "'{}' must be greater than zero (value: {})",
            field, num
        )),
        // Not a number: `required()` or the type itself reports it
        _ => Ok(()),
    }
}

/// Validator: number must not be negative
pub fn non_negative() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match as_number(value) {
        Some(num) if num < 0.0 => Err(format!(
            "'{}' must not be negative (value: {})",
            field, num
        )),
        _ => Ok(()),
    }
}

/// Validator: string must have at least `min` characters
pub fn min_length(min: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len < min {
                return Err(format!(
                    "'{}' must be at least {} characters long (currently: {})",
                    field, min, len
                ));
            }
        }
        Ok(())
    }
}

/// Cross-field check: `end` must not be before `start` (ISO dates).
///
/// Reports on the `end` field. Skipped while either date is missing.
pub fn date_order(
    start: &'static str,
    end: &'static str,
) -> impl Fn(&Value) -> Result<(), (String, String)> + Send + Sync + Clone {
    move |payload: &Value| {
        let parse = |field: &str| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        };
        match (parse(start), parse(end)) {
            (Some(s), Some(e)) if e < s => Err((
                end.to_string(),
                format!("'{}' must not be before '{}'", end, start),
            )),
            _ => Ok(()),
        }
    }
}

/// Cross-field check: `confirm` must equal `field`. Reports on `confirm`.
pub fn matches_field(
    field: &'static str,
    confirm: &'static str,
) -> impl Fn(&Value) -> Result<(), (String, String)> + Send + Sync + Clone {
    move |payload: &Value| {
        if payload.get(field) == payload.get(confirm) {
            Ok(())
        } else {
            Err((
                confirm.to_string(),
                format!("'{}' does not match '{}'", confirm, field),
            ))
        }
    }
}
