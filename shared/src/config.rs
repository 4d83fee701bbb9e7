use reqwest::Url;
use std::env;
use std::fmt;

use crate::error::WebhookError;

/// Project the function was deployed against
pub const DEFAULT_SUPABASE_URL: &str = "https://blqtfxldzdxzsfmtafzi.supabase.co";

/// Admin API settings, loaded once at cold start and handed to the client
#[derive(Clone)]
pub struct Config {
    auth_base_url: Url,
    service_role_key: String,
}

impl Config {
    pub fn new(supabase_url: &str, service_role_key: impl Into<String>) -> Result<Self, WebhookError> {
        let mut auth_base_url = Url::parse(supabase_url)
            .map_err(|err| WebhookError::InvalidBaseUrl(format!("{}: {}", supabase_url, err)))?;

        // Only a path may follow the host, anything else would swallow `/auth/v1`
        if auth_base_url.cannot_be_a_base()
            || auth_base_url.query().is_some()
            || auth_base_url.fragment().is_some()
        {
            return Err(WebhookError::InvalidBaseUrl(supabase_url.to_string()));
        }

        if let Ok(mut segments) = auth_base_url.path_segments_mut() {
            segments.pop_if_empty().extend(["auth", "v1"]);
        }

        Ok(Self {
            auth_base_url,
            service_role_key: service_role_key.into(),
        })
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY`
    pub fn from_env() -> Result<Self, WebhookError> {
        Self::from_vars(
            env::var("SUPABASE_URL").ok(),
            env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
        )
    }

    fn from_vars(
        supabase_url: Option<String>,
        service_role_key: Option<String>,
    ) -> Result<Self, WebhookError> {
        let supabase_url = supabase_url.unwrap_or_else(|| DEFAULT_SUPABASE_URL.to_string());
        let service_role_key = service_role_key.unwrap_or_else(|| {
            // The admin API will reject every call; that rejection is relayed.
            tracing::warn!("SUPABASE_SERVICE_ROLE_KEY is not set, admin calls will be unauthenticated");
            String::new()
        });

        Self::new(&supabase_url, service_role_key)
    }

    pub fn auth_base_url(&self) -> &Url {
        &self.auth_base_url
    }

    pub fn service_role_key(&self) -> &str {
        &self.service_role_key
    }

    /// `{auth_base}/admin/users/{user_id}` with the id as one encoded segment
    pub fn admin_users_url(&self, user_id: &str) -> Url {
        let mut url = self.auth_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["admin", "users", user_id]);
        }
        url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_base_url", &self.auth_base_url.as_str())
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}
