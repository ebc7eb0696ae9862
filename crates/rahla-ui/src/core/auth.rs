//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep the session as plain data so callers can store/clear it without side effects.
//! - Token expiry is read from the JWT payload only; signatures are the server's job.
//! - Leave header encoding to transport clients to keep core DOM-free.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Authenticated session persisted between page loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Bearer token returned by the login endpoint.
    pub token: String,
    /// Role string reported alongside the token.
    pub role: String,
}

/// Result of inspecting a bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// Token is well formed and not past its `exp` claim.
    Valid,
    /// Token is well formed but expired.
    Expired,
    /// Token is empty or not a decodable JWT.
    Malformed,
}

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<f64>,
}

/// Current time in seconds since the Unix epoch.
#[must_use]
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Inspect a JWT against `now` (seconds since the Unix epoch).
///
/// Tokens without a readable `exp` claim never expire.
#[must_use]
pub fn inspect_token(token: &str, now: i64) -> TokenStatus {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return TokenStatus::Malformed;
    };
    if header.is_empty() {
        return TokenStatus::Malformed;
    }
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) else {
        return TokenStatus::Malformed;
    };
    let Ok(claims) = serde_json::from_slice::<Claims>(&bytes) else {
        return TokenStatus::Malformed;
    };
    match claims.exp {
        Some(exp) if is_past(exp, now) => TokenStatus::Expired,
        _ => TokenStatus::Valid,
    }
}

/// `exp` may carry a fractional part; only whole seconds count.
// Epoch seconds stay well below 2^53, where f64 is exact.
#[allow(clippy::cast_precision_loss)]
fn is_past(exp: f64, now: i64) -> bool {
    exp.floor() <= now as f64
}

impl Session {
    /// Build a session from login output, trimming whitespace.
    #[must_use]
    pub fn new(token: &str, role: &str) -> Self {
        Self {
            token: token.trim().to_string(),
            role: role.trim().to_string(),
        }
    }

    /// Token status at `now` (seconds since the Unix epoch).
    #[must_use]
    pub fn status(&self, now: i64) -> TokenStatus {
        inspect_token(&self.token, now)
    }

    /// Whether the session may be used for requests at `now`.
    #[must_use]
    pub fn is_usable(&self, now: i64) -> bool {
        self.status(now) == TokenStatus::Valid
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn unexpired_token_is_valid() {
        let token = token_with(r#"{"sub":"42","exp":2000}"#);
        assert_eq!(inspect_token(&token, 1999), TokenStatus::Valid);
        assert_eq!(inspect_token(&token, 2000), TokenStatus::Expired);
    }

    #[test]
    fn fractional_exp_is_floored() {
        let token = token_with(r#"{"sub":"42","exp":2000.75}"#);
        assert_eq!(inspect_token(&token, 1999), TokenStatus::Valid);
        assert_eq!(inspect_token(&token, 2000), TokenStatus::Expired);
    }

    #[test]
    fn token_without_exp_never_expires() {
        let token = token_with(r#"{"sub":"42"}"#);
        assert_eq!(inspect_token(&token, i64::MAX), TokenStatus::Valid);
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(inspect_token("", 0), TokenStatus::Malformed);
        assert_eq!(inspect_token("abc", 0), TokenStatus::Malformed);
        assert_eq!(inspect_token("a.b.c.d", 0), TokenStatus::Malformed);
        assert_eq!(inspect_token("a.!!!.c", 0), TokenStatus::Malformed);
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode(b"plain"));
        assert_eq!(inspect_token(&not_json, 0), TokenStatus::Malformed);
    }

    #[test]
    fn session_builds_bearer_header() {
        let session = Session::new(&format!(" {} ", token_with(r#"{"exp":10}"#)), " admin ");
        assert_eq!(session.role, "admin");
        assert!(session.bearer_header().starts_with("Bearer ey"));
        assert!(session.is_usable(5));
        assert!(!session.is_usable(10));
    }
}
