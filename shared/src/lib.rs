pub mod admin;
pub mod config;
pub mod error;
pub mod roles;
pub mod types;

#[cfg(test)]
mod test_support;

pub use admin::{AdminApi, AdminClient};
pub use config::Config;
pub use error::WebhookError;

use std::sync::Arc;

/// Shared application state
pub struct AppState<A = AdminClient> {
    pub admin: A,
}

impl<A> AppState<A> {
    pub fn new(admin: A) -> Arc<Self> {
        Arc::new(Self { admin })
    }
}
