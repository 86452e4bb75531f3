use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

use crate::utils::error::{AppError, AppResult};
use crate::utils::time::{default_expire_at, parse_expire_at, EXPIRE_AT_FORMAT};

/// Validates poll creation input and resolves the expiry.
///
/// The `expire_at` field must be present; an empty string means "use the
/// default" of thirty days from `now`. A non-empty value must match the
/// wire format, so a poll never carries an expiry that cannot be compared.
pub fn validate_poll_input(
    title: &str,
    expire_at: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<DateTime<Utc>> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Poll title must not be empty".to_string(),
        ));
    }

    let raw = expire_at.ok_or_else(|| {
        AppError::InvalidInput("Missing expire_at field".to_string())
    })?;

    if raw.is_empty() {
        return Ok(default_expire_at(now));
    }

    parse_expire_at(raw).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "expire_at must match the {} format",
            EXPIRE_AT_FORMAT
        ))
    })
}

pub fn validate_choice_input(title: &str, poll_id: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Choice title must not be empty".to_string(),
        ));
    }
    if poll_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Missing poll_id field".to_string(),
        ));
    }
    Ok(())
}

/// Ids come from the store; anything that does not parse as one is caller
/// error, not a storage fault.
pub fn parse_object_id(raw: &str, what: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::InvalidInput(format!("Invalid {} id: {}", what, raw)))
}
