//! HTTP client wrapper over the back-office REST API.
//!
//! # Design
//! - One client per app boot; the session is swapped in place on login/logout.
//! - Every request carries the bearer token and is refused locally when the
//!   token is missing or expired.
//! - Responses are unwrapped from the envelope here so callers only see typed
//!   records or an [`ApiError`].

use crate::core::auth::{Session, unix_now};
use crate::core::config::UiConfig;
use crate::core::errors::{ApiError, UNAUTHORIZED_CODE};
use crate::core::query::ListQuery;
use gloo_net::http::{Request, Response};
use rahla_api_models::{Envelope, LoginRequest, LoginResponse, Page, Payload, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::AbortSignal;

const LOGIN_PATH: &str = "/auth/login";

pub(crate) struct ApiClient {
    config: Rc<UiConfig>,
    session: RefCell<Option<Session>>,
}

impl ApiClient {
    pub(crate) fn new(config: Rc<UiConfig>) -> Self {
        Self {
            config,
            session: RefCell::new(None),
        }
    }

    pub(crate) fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    pub(crate) async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = Request::post(&self.url(LOGIN_PATH))
            .json(credentials)
            .map_err(map_transport)?;
        required(send::<LoginResponse>(request).await?)
    }

    pub(crate) async fn list<R: Resource>(
        &self,
        query: &ListQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Page<R>, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(&query.list_path(R::PATH))))?
            .abort_signal(signal);
        let envelope = send::<Vec<R>>(request).await?;
        Ok(Page::from_envelope(envelope, u64::from(query.page_size())))
    }

    pub(crate) async fn get<R: Resource>(
        &self,
        id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<R, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(&item_path::<R>(id))))?
            .abort_signal(signal);
        required(send::<R>(request).await?)
    }

    pub(crate) async fn create<R: Resource>(&self, payload: &Payload) -> Result<R, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(R::PATH)))?
            .json(payload)
            .map_err(map_transport)?;
        required(send::<R>(request).await?)
    }

    /// `Ok(None)` when the server acknowledged without echoing the record.
    pub(crate) async fn update<R: Resource>(
        &self,
        id: &str,
        patch: &Payload,
    ) -> Result<Option<R>, ApiError> {
        let request = self
            .authorize(Request::patch(&self.url(&item_path::<R>(id))))?
            .json(patch)
            .map_err(map_transport)?;
        Ok(send::<R>(request).await?.data)
    }

    pub(crate) async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authorize(Request::delete(&self.url(&item_path::<R>(id))))?;
        send::<Value>(request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    fn authorize(&self, request: Request) -> Result<Request, ApiError> {
        let guard = self.session.borrow();
        match guard.as_ref() {
            Some(session) if session.is_usable(unix_now()) => {
                Ok(request.header("Authorization", &session.bearer_header()))
            }
            _ => {
                debug!("refusing request without a usable session");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<Envelope<T>, ApiError> {
    let response = request.send().await.map_err(map_transport)?;
    let status = i64::from(response.status());
    if status == UNAUTHORIZED_CODE {
        warn!(status, "session rejected by server");
        return Err(ApiError::Unauthorized);
    }
    match read_envelope(response).await {
        Ok(envelope) if envelope.is_success() => {
            let data = envelope
                .data
                .filter(|value| !value.is_null())
                .map(serde_json::from_value::<T>)
                .transpose()
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            Ok(Envelope {
                code: envelope.code,
                data,
                message: envelope.message,
                total_items: envelope.total_items,
                total_pages: envelope.total_pages,
            })
        }
        Ok(envelope) => {
            let err = ApiError::from_envelope(&envelope);
            warn!(code = envelope.code, status, "request rejected");
            Err(err)
        }
        Err(_) if !(200..300).contains(&status) => {
            warn!(status, "request failed without an envelope");
            Err(ApiError::from_status(status, None))
        }
        Err(err) => Err(err),
    }
}

async fn read_envelope(response: Response) -> Result<Envelope<Value>, ApiError> {
    let body = response.text().await.map_err(map_transport)?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn required<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
}

fn item_path<R: Resource>(id: &str) -> String {
    R::item_path(&urlencoding::encode(id))
}

fn map_transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
        gloo_net::Error::JsError(js) => ApiError::Transport(js.message),
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}
