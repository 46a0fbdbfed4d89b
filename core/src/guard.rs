//! Precondition guards run before a request is built.
//!
//! Each guard is a plain function the client calls at the top of an
//! operation. A guard failure short-circuits the operation locally; it can
//! never surface as a network or protocol error.

use serde::Serialize;
use serde_json::Value;

use crate::error::GistError;

/// Require a configured, non-empty token. Create, update, and delete are
/// authenticated operations and call this first.
pub fn require_token(token: Option<&str>) -> Result<&str, GistError> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(GistError::AuthenticationRequired),
    }
}

/// Require a non-empty gist id, naming the offending value otherwise.
pub fn require_gist_id(gist_id: &str) -> Result<&str, GistError> {
    if gist_id.is_empty() {
        return Err(GistError::InvalidArgument(format!(
            "the given id `{gist_id}` is not valid"
        )));
    }
    Ok(gist_id)
}

/// Require the payload to serialize to a non-empty JSON object. `action` is
/// the operation name used in the message ("created" or "updated").
pub fn require_payload<D: Serialize>(data: &D, action: &str) -> Result<Value, GistError> {
    let value = serde_json::to_value(data)?;
    match &value {
        Value::Object(map) if !map.is_empty() => Ok(value),
        _ => Err(GistError::InvalidArgument(format!(
            "a gist can't be {action} without data"
        ))),
    }
}
