use crate::services::error::{FieldErrors, ServiceError, ServiceResult};
use crate::services::sanitize::{clean_text, strip_tags};

/// Accumulates field-level validation failures so a request reports every
/// problem in one pass.
#[derive(Debug, Default)]
pub struct Errors {
    fields: FieldErrors,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_insert(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_result(self) -> ServiceResult<()> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self.fields))
        }
    }
}

/// Required short text: stripped of tags, trimmed, non-empty, bounded length.
/// Records an error and returns an empty string when invalid.
pub fn required_text(errors: &mut Errors, field: &str, value: Option<&str>, max_len: usize) -> String {
    let cleaned = value.map(clean_text).unwrap_or_default();
    if cleaned.is_empty() {
        errors.add(field, format!("The {} field is required.", field));
        return String::new();
    }
    if max_len > 0 && cleaned.chars().count() > max_len {
        errors.add(
            field,
            format!("The {} may not be greater than {} characters.", field, max_len),
        );
    }
    cleaned
}

/// Optional short text: stripped of tags and trimmed; blank collapses to None.
pub fn optional_text(
    errors: &mut Errors,
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> Option<String> {
    let cleaned = value.map(clean_text)?;
    if cleaned.is_empty() {
        return None;
    }
    if max_len > 0 && cleaned.chars().count() > max_len {
        errors.add(
            field,
            format!("The {} may not be greater than {} characters.", field, max_len),
        );
    }
    Some(cleaned)
}

/// Required rich-text body: stored verbatim (trimmed), but must contain
/// visible text once markup is stripped.
pub fn required_rich_text(errors: &mut Errors, field: &str, value: Option<&str>) -> String {
    let raw = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if strip_tags(&raw).trim().is_empty() {
        errors.add(field, format!("The {} field is required.", field));
        return String::new();
    }
    raw
}

pub fn is_valid_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

pub fn required_date(errors: &mut Errors, field: &str, value: Option<&str>) -> String {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        errors.add(field, format!("The {} field is required.", field));
        return String::new();
    }
    if !is_valid_date(trimmed) {
        errors.add(field, format!("The {} is not a valid date.", field));
    }
    trimmed.to_string()
}

pub fn optional_date(errors: &mut Errors, field: &str, value: Option<&str>) -> Option<String> {
    let trimmed = value.map(str::trim)?;
    if trimmed.is_empty() {
        return None;
    }
    if !is_valid_date(trimmed) {
        errors.add(field, format!("The {} is not a valid date.", field));
    }
    Some(trimmed.to_string())
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

pub fn optional_email(errors: &mut Errors, field: &str, value: Option<&str>) -> Option<String> {
    let trimmed = value.map(str::trim)?;
    if trimmed.is_empty() {
        return None;
    }
    if !is_valid_email(trimmed) {
        errors.add(field, format!("The {} must be a valid email address.", field));
    }
    Some(trimmed.to_string())
}

/// Optional integer that must be zero or positive.
pub fn non_negative(errors: &mut Errors, field: &str, value: Option<i64>) -> Option<i64> {
    if let Some(v) = value {
        if v < 0 {
            errors.add(field, format!("The {} must be at least 0.", field));
        }
    }
    value
}
