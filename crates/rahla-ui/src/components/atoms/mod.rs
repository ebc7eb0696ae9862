//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod error_banner;
pub(crate) mod search_input;
pub(crate) mod skeleton;

pub(crate) use empty_state::EmptyState;
pub(crate) use error_banner::ErrorBanner;
pub(crate) use search_input::SearchInput;
pub(crate) use skeleton::SkeletonRows;
