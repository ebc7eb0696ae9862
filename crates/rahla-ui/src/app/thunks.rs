//! Async resource operations dispatching into the store.
//!
//! # Design
//! - Each operation opens its slice's flags, awaits the client, then settles
//!   the slice exactly once.
//! - Aborted fetches settle without an error.
//! - A rejected session signs the user out from wherever it surfaces.

use crate::core::auth::{Session, unix_now};
use crate::core::errors::ApiError;
use crate::core::query::ListQuery;
use crate::core::resource::ResourceSlice;
use crate::core::store::{AppStore, StoreResource, app_dispatch};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use rahla_api_models::{LoginRequest, Payload};
use std::rc::Rc;
use tracing::{debug, info, warn};
use web_sys::AbortSignal;
use yewdux::prelude::Dispatch;

pub(crate) async fn fetch_list<R: StoreResource>(
    client: Rc<ApiClient>,
    query: ListQuery,
    signal: Option<AbortSignal>,
) {
    let dispatch = app_dispatch();
    let mut seq = 0;
    dispatch.reduce_mut(|store| {
        seq = R::slice_mut(store).begin_list();
    });
    match client.list::<R>(&query, signal.as_ref()).await {
        Ok(page) => {
            dispatch.reduce_mut(|store| {
                R::slice_mut(store).finish_list_ok(seq, page);
            });
        }
        Err(err) if err.is_aborted() => {
            debug!(resource = R::NAME, seq, "list request aborted");
            dispatch.reduce_mut(|store| R::slice_mut(store).cancel_list(seq));
        }
        Err(err) => settle_error::<R, _>(&dispatch, &err, "list", |slice, message| {
            slice.finish_list_err(seq, message);
        }),
    }
}

pub(crate) async fn fetch_by_id<R: StoreResource>(
    client: Rc<ApiClient>,
    id: String,
    signal: Option<AbortSignal>,
) {
    let dispatch = app_dispatch();
    let mut seq = 0;
    dispatch.reduce_mut(|store| {
        seq = R::slice_mut(store).begin_fetch_by_id();
    });
    match client.get::<R>(&id, signal.as_ref()).await {
        Ok(entity) => {
            dispatch.reduce_mut(|store| {
                R::slice_mut(store).finish_fetch_by_id_ok(seq, entity);
            });
        }
        Err(err) if err.is_aborted() => {
            debug!(resource = R::NAME, id = %id, "detail request aborted");
            dispatch.reduce_mut(|store| R::slice_mut(store).cancel_fetch_by_id(seq));
        }
        Err(err) => settle_error::<R, _>(&dispatch, &err, "detail", |slice, message| {
            slice.finish_fetch_by_id_err(seq, message);
        }),
    }
}

pub(crate) async fn create<R: StoreResource>(
    client: Rc<ApiClient>,
    payload: Payload,
) -> Result<R, ApiError> {
    let dispatch = app_dispatch();
    let mut generation = 0;
    dispatch.reduce_mut(|store| {
        generation = R::slice_mut(store).begin_create();
    });
    match client.create::<R>(&payload).await {
        Ok(entity) => {
            info!(resource = R::NAME, id = entity.id(), "record created");
            let stored = entity.clone();
            dispatch.reduce_mut(move |store| {
                R::slice_mut(store).finish_create_ok(generation, stored);
            });
            Ok(entity)
        }
        Err(err) => {
            settle_error::<R, _>(&dispatch, &err, "create", |slice, message| {
                slice.finish_create_err(generation, message);
            });
            Err(err)
        }
    }
}

pub(crate) async fn update<R: StoreResource>(
    client: Rc<ApiClient>,
    id: String,
    patch: Payload,
) -> Result<R, ApiError> {
    let dispatch = app_dispatch();
    let mut generation = 0;
    dispatch.reduce_mut(|store| {
        generation = R::slice_mut(store).begin_update();
    });
    let outcome = match client.update::<R>(&id, &patch).await {
        Ok(Some(entity)) => Ok(entity),
        Ok(None) => {
            let local = R::slice(&dispatch.get()).find(&id).cloned();
            match local {
                Some(local) => local
                    .merged_with(&patch)
                    .map_err(|err| ApiError::Decode(err.to_string())),
                None => client.get::<R>(&id, None).await,
            }
        }
        Err(err) => Err(err),
    };
    match outcome {
        Ok(entity) => {
            info!(resource = R::NAME, id = %id, fields = patch.len(), "record updated");
            let stored = entity.clone();
            dispatch.reduce_mut(move |store| {
                R::slice_mut(store).finish_update_ok(generation, stored);
            });
            Ok(entity)
        }
        Err(err) => {
            settle_error::<R, _>(&dispatch, &err, "update", |slice, message| {
                slice.finish_update_err(generation, message);
            });
            Err(err)
        }
    }
}

pub(crate) async fn delete<R: StoreResource>(
    client: Rc<ApiClient>,
    id: String,
) -> Result<(), ApiError> {
    let dispatch = app_dispatch();
    let mut generation = 0;
    dispatch.reduce_mut(|store| {
        generation = R::slice_mut(store).begin_delete();
    });
    match client.delete::<R>(&id).await {
        Ok(()) => {
            info!(resource = R::NAME, id = %id, "record deleted");
            dispatch.reduce_mut(|store| {
                R::slice_mut(store).finish_delete_ok(generation, &id);
            });
            Ok(())
        }
        Err(err) => {
            settle_error::<R, _>(&dispatch, &err, "delete", |slice, message| {
                slice.finish_delete_err(generation, message);
            });
            Err(err)
        }
    }
}

pub(crate) async fn login(client: Rc<ApiClient>, email: String, password: String) {
    let dispatch = app_dispatch();
    dispatch.reduce_mut(|store| {
        store.auth.login_busy = true;
        store.auth.login_error = None;
    });
    let credentials = LoginRequest { email, password };
    let outcome = client.login(&credentials).await.and_then(|response| {
        let session = Session::new(&response.token, &response.role);
        if session.is_usable(unix_now()) {
            Ok(session)
        } else {
            Err(ApiError::Decode("login returned an unusable token".to_string()))
        }
    });
    match outcome {
        Ok(session) => {
            info!(role = %session.role, "signed in");
            dispatch.reduce_mut(|store| store.sign_in(session));
        }
        Err(err) => {
            warn!(error = %err, "sign-in failed");
            dispatch.reduce_mut(|store| {
                store.auth.login_busy = false;
                store.auth.login_error = Some(err);
            });
        }
    }
}

pub(crate) fn logout() {
    info!("signed out");
    app_dispatch().reduce_mut(AppStore::sign_out);
}

fn settle_error<R, F>(dispatch: &Dispatch<AppStore>, err: &ApiError, operation: &str, apply: F)
where
    R: StoreResource,
    F: FnOnce(&mut ResourceSlice<R>, String),
{
    warn!(resource = R::NAME, operation, error = %err, "request failed");
    let message = err.display_message();
    let expired = err.is_unauthorized();
    dispatch.reduce_mut(|store| {
        apply(R::slice_mut(store), message);
        if expired {
            store.expire_session();
        }
    });
}

pub(crate) fn toast(kind: ToastKind, message: String) {
    app_dispatch().reduce_mut(|store| {
        store.ui.push_toast(kind, message);
    });
}
