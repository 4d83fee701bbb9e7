use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::WebhookError;

/// Role every newly created user is given
pub const DEFAULT_ROLE: &str = "student";

// ========== INBOUND EVENT ==========
/// Database webhook payload sent when a user row is inserted.
/// Everything besides `record.id` is ignored.
#[derive(Debug, Deserialize)]
pub struct IncomingEvent {
    pub record: UserRecord,
}

#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub id: String,
}

impl IncomingEvent {
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookError> {
        serde_json::from_slice(body).map_err(WebhookError::InvalidEvent)
    }

    /// Id of the new user. It becomes a URL path segment, so dot segments are refused.
    pub fn user_id(&self) -> Result<&str, WebhookError> {
        match self.record.id.as_str() {
            "" | "." | ".." => Err(WebhookError::InvalidUserId(self.record.id.clone())),
            id => Ok(id),
        }
    }
}

// ========== ADMIN API ==========
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoleUpdatePayload {
    pub app_metadata: AppMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppMetadata {
    pub roles: Vec<String>,
}

impl RoleUpdatePayload {
    pub fn default_role() -> Self {
        Self {
            app_metadata: AppMetadata {
                roles: vec![DEFAULT_ROLE.to_string()],
            },
        }
    }
}

/// What the admin API answered. The body is checked to be JSON but kept as
/// the exact bytes received so it can be relayed as is.
#[derive(Debug, Clone)]
pub struct AdminResponse {
    pub status: u16,
    pub body: Box<RawValue>,
}
