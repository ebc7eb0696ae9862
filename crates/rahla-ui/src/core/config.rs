//! Runtime configuration for the back-office UI.
//!
//! # Design
//! - Values come from the build environment with an optional stored override
//!   for the API base URL, so one bundle can target several backends.
//! - Validation happens once at boot; the rest of the app trusts the result.

use crate::core::query::PAGE_SIZES;

/// Base URL used when the build did not set `RAHLA_API_BASE_URL`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Debounce applied to free-text filters.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 400;
/// Lifetime of a toast before it dismisses itself.
pub const DEFAULT_TOAST_TTL_MS: u32 = 4_000;
/// Log filter used when the build did not set `RAHLA_LOG`.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const MAX_PAGE_SIZE: u32 = 100;

/// Validated UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// API root without a trailing slash.
    pub api_base_url: String,
    /// Page size used when a list view first mounts.
    pub default_page_size: u32,
    /// Debounce for text filters.
    pub search_debounce_ms: u32,
    /// Toast lifetime.
    pub toast_ttl_ms: u32,
    /// `tracing` filter directive.
    pub log_level: String,
}

/// Configuration rejected at boot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Base URL is not an absolute http(s) URL.
    #[error("api base url must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
    /// Page size outside 1..=100.
    #[error("page size must be between 1 and {MAX_PAGE_SIZE}: {0}")]
    InvalidPageSize(u32),
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_page_size: PAGE_SIZES[0],
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl UiConfig {
    /// Build from explicit sources. A non-blank stored override beats the build value.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the resolved values fail validation.
    pub fn from_sources(
        build_base_url: Option<&str>,
        stored_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        fn pick(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|value| !value.is_empty())
        }
        let base_url = pick(stored_base_url)
            .or_else(|| pick(build_base_url))
            .unwrap_or(DEFAULT_API_BASE_URL);
        let config = Self {
            api_base_url: normalize_base_url(base_url)?,
            log_level: pick(log_level).unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from compile-time environment plus an optional stored override.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the resolved values fail validation.
    pub fn from_build_env(stored_base_url: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_sources(
            option_env!("RAHLA_API_BASE_URL"),
            stored_base_url,
            option_env!("RAHLA_LOG"),
        )
    }

    /// Check invariants on an already-built config.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_base_url(&self.api_base_url)?;
        if !(1..=MAX_PAGE_SIZE).contains(&self.default_page_size) {
            return Err(ConfigError::InvalidPageSize(self.default_page_size));
        }
        Ok(())
    }

    /// Absolute URL for an API path such as `/cities?page=1`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
///
/// # Errors
/// Returns [`ConfigError::InvalidBaseUrl`] for other schemes or an empty host.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
