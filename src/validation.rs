// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request validation helpers.
//!
//! Input structs derive `validator::Validate`; `validate` runs them and
//! converts any failure into the field→message map the API returns with
//! status 400. Field keys are camelCase to match the wire format.

use crate::error::{AppError, FieldErrors, Result};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Validate a request payload, mapping failures to `AppError::Validation`.
///
/// Only the first error per field is reported.
pub fn validate<T: Validate>(input: &T) -> Result<()> {
    input.validate().map_err(|errors| {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let Some(err) = errs.first() else { continue };
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            fields.insert(camel_case(&field), message);
        }
        AppError::Validation(fields)
    })
}

/// Convert a snake_case Rust field name to its camelCase wire name.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Check that a string parses as an ISO 8601 calendar date (YYYY-MM-DD)
/// or an RFC 3339 datetime.
pub fn iso8601_date(value: &str) -> std::result::Result<(), ValidationError> {
    let ok = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(value).is_ok();
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("iso8601"))
    }
}

/// Profile handle rules: present, 4-40 chars, no whitespace.
pub fn profile_handle(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Err(handle_error("Profile handle is required"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(handle_error("Handle cannot contain spaces"));
    }
    let len = value.chars().count();
    if !(4..=40).contains(&len) {
        return Err(handle_error(
            "Handle needs to be between 4 and 40 characters",
        ));
    }
    Ok(())
}

fn handle_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("handle");
    err.message = Some(Cow::Borrowed(message));
    err
}
