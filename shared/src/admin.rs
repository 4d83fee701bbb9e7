use reqwest::header::CONTENT_TYPE;
use serde_json::value::RawValue;
use std::future::Future;

use crate::config::Config;
use crate::error::WebhookError;
use crate::types::{AdminResponse, RoleUpdatePayload};

/// Administrative user API of the identity provider
pub trait AdminApi: Send + Sync {
    /// PATCH the user's `app_metadata`, returning whatever the API answered
    fn update_app_metadata(
        &self,
        user_id: &str,
        payload: &RoleUpdatePayload,
    ) -> impl Future<Output = Result<AdminResponse, WebhookError>> + Send;
}

/// Supabase GoTrue admin client authenticated with the service-role key
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    config: Config,
}

impl AdminClient {
    pub fn new(config: Config) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    pub fn build_update_request(
        &self,
        user_id: &str,
        payload: &RoleUpdatePayload,
    ) -> Result<reqwest::Request, WebhookError> {
        let key = self.config.service_role_key();

        let request = self
            .http
            .patch(self.config.admin_users_url(user_id))
            .header(CONTENT_TYPE, "application/json")
            .header("apikey", key)
            .bearer_auth(key)
            .json(payload)
            .build()?;
        Ok(request)
    }
}

impl AdminApi for AdminClient {
    async fn update_app_metadata(
        &self,
        user_id: &str,
        payload: &RoleUpdatePayload,
    ) -> Result<AdminResponse, WebhookError> {
        let request = self.build_update_request(user_id, payload)?;
        let response = self.http.execute(request).await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Box<RawValue>>(&bytes)
            .map_err(|source| WebhookError::InvalidResponse { status, source })?;

        Ok(AdminResponse { status, body })
    }
}
