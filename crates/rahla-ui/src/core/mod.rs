//! Core, DOM-free primitives and helpers for the back-office UI.
pub mod auth;
pub mod config;
pub mod detail;
pub mod dialogs;
pub mod errors;
pub mod format;
pub mod forms;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod store;
