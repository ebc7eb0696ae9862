//! Persistence and environment helpers for the app shell.

use crate::core::auth::{Session, TokenStatus};
use crate::core::config::UiConfig;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "rahla.locale";
pub(crate) const TOKEN_KEY: &str = "rahla.token";
pub(crate) const ROLE_KEY: &str = "rahla.role";
pub(crate) const API_BASE_URL_KEY: &str = "rahla.api_base_url";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Stored session, or `None` after clearing anything expired or malformed.
pub(crate) fn load_session(now: i64) -> Option<Session> {
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
    let role = LocalStorage::get::<String>(ROLE_KEY).unwrap_or_default();
    let session = Session::new(&token, &role);
    match session.status(now) {
        TokenStatus::Valid => Some(session),
        status => {
            console::warn!("discarding stored session", format!("{status:?}"));
            clear_session();
            None
        }
    }
}

pub(crate) fn persist_session(session: &Session) {
    set_storage(TOKEN_KEY, &session.token);
    set_storage(ROLE_KEY, &session.role);
}

pub(crate) fn clear_session() {
    delete_storage(TOKEN_KEY);
    delete_storage(ROLE_KEY);
}

/// Boot configuration; a broken stored override is dropped rather than blocking boot.
pub(crate) fn load_config() -> UiConfig {
    let stored = LocalStorage::get::<String>(API_BASE_URL_KEY).ok();
    match UiConfig::from_build_env(stored.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::error!("invalid configuration", err.to_string());
            delete_storage(API_BASE_URL_KEY);
            UiConfig::from_build_env(None).unwrap_or_default()
        }
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
