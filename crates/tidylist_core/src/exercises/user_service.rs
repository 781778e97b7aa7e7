//! Fetch a user through an injected API and show a greeting.
//!
//! # Invariants
//! - Argument checks fail before the API is called.
//! - API failures and malformed users never propagate; they become the
//!   target's text instead.

use super::element::TextTarget;
use async_trait::async_trait;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const INVALID_USER_DATA: &str = "Invalid user data";

/// User payload as returned by the API. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl UserRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Downstream failure reported by a `UserApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ApiError {}

/// Lookup capability a user service must provide.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<UserRecord, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    InvalidUserId,
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUserId => write!(f, "Invalid user ID"),
        }
    }
}

impl Error for UserServiceError {}

/// Fetches `user_id` and writes a greeting, or the failure, into `target`.
///
/// # Errors
/// - `UserServiceError::InvalidUserId` when `user_id` is blank. Nothing is
///   fetched and `target` is left untouched.
pub async fn fetch_and_display_user<A, T>(
    api: &A,
    user_id: &str,
    target: &mut T,
) -> Result<(), UserServiceError>
where
    A: UserApi + ?Sized,
    T: TextTarget + ?Sized,
{
    if user_id.trim().is_empty() {
        return Err(UserServiceError::InvalidUserId);
    }

    match api.get_user(user_id).await {
        Ok(user) => match user.display_name() {
            Some(name) => target.set_text_content(&format!("Hello, {name}")),
            None => {
                log::warn!(
                    "event=user_fetch module=exercises status=error error_code=invalid_user_data"
                );
                target.set_text_content(INVALID_USER_DATA);
            }
        },
        Err(err) => {
            log::warn!(
                "event=user_fetch module=exercises status=error error_code=api_failed error={err}"
            );
            target.set_text_content(err.message());
        }
    }

    Ok(())
}
