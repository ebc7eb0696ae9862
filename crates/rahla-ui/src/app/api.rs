//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Update the session via interior mutability to avoid rebuilding clients.

use crate::core::config::UiConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client and configuration for views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
    /// Validated boot configuration.
    pub config: Rc<UiConfig>,
}

impl ApiCtx {
    /// Create a new context for the configured base URL.
    pub(crate) fn new(config: UiConfig) -> Self {
        let config = Rc::new(config);
        Self {
            client: Rc::new(ApiClient::new(Rc::clone(&config))),
            config,
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
