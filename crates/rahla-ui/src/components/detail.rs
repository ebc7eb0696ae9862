//! Single-record page with a read/edit toggle.
//!
//! # Design
//! - Fetch on mount and whenever the id changes; leaving the page aborts and clears the selection.
//! - A record that failed to load cannot be edited.
//! - Edits stay local until the update succeeds.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::thunks;
use crate::components::atoms::ErrorBanner;
use crate::components::form_fields::FormFields;
use crate::components::modals::DeleteModal;
use crate::core::config::UiConfig;
use crate::core::detail::{DetailEditor, DetailMode};
use crate::core::dialogs::{DeleteDialog, Submission};
use crate::core::format::field_display;
use crate::core::forms::FormError;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::view::{ResourceView, entity_message};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ResourceDetailProps {
    pub id: AttrValue,
}

#[function_component(ResourceDetail)]
pub(crate) fn resource_detail<R: ResourceView + 'static>(props: &ResourceDetailProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(UiConfig::default()));
    let t = |key: &str| bundle.text(key, "");
    let navigator = use_navigator();
    let slice = use_selector(|store: &AppStore| R::slice(store).clone());
    let editor = use_mut_ref(|| DetailEditor::new(R::FORM));
    let delete = use_mut_ref(DeleteDialog::default);
    let retry = use_state(|| 0_u32);
    let redraw = use_force_update();

    {
        let client = api.client.clone();
        let editor = editor.clone();
        use_effect_with_deps(
            move |(id, _): &(AttrValue, u32)| {
                *editor.borrow_mut() = DetailEditor::new(R::FORM);
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(AbortController::signal);
                yew::platform::spawn_local(thunks::fetch_by_id::<R>(client, id.to_string(), signal));
                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                    app_dispatch().reduce_mut(|store| R::slice_mut(store).clear_selected());
                }
            },
            (props.id.clone(), *retry),
        );
    }

    let record = slice
        .selected
        .as_ref()
        .filter(|record| record.id() == props.id.as_str());
    let heading = record.map_or_else(|| props.id.to_string(), |record| record.label(bundle.locale));

    let on_retry = {
        let retry = retry.clone();
        Callback::from(move |_| retry.set(retry.wrapping_add(1)))
    };
    let on_edit = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        let record = record.cloned();
        Callback::from(move |_| {
            if let Some(record) = &record {
                editor.borrow_mut().begin_edit(record);
                redraw.force_update();
            }
        })
    };
    let on_change = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |(key, value): (String, String)| {
            editor.borrow_mut().set_value(&key, value);
            redraw.force_update();
        })
    };
    let on_cancel = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            editor.borrow_mut().cancel();
            redraw.force_update();
        })
    };
    let on_save = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        let client = api.client.clone();
        let bundle = bundle.clone();
        let id = props.id.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let outcome = editor.borrow_mut().submit();
            redraw.force_update();
            match outcome {
                Ok(Submission::Send(patch)) => {
                    let editor = editor.clone();
                    let redraw = redraw.clone();
                    let client = client.clone();
                    let bundle = bundle.clone();
                    let id = id.clone();
                    yew::platform::spawn_local(async move {
                        match thunks::update::<R>(client, id, patch).await {
                            Ok(_) => {
                                editor.borrow_mut().on_success();
                                let message = entity_message::<R>(&bundle, "toast.updated");
                                thunks::toast(ToastKind::Success, message);
                            }
                            Err(err) => editor.borrow_mut().on_failure(err.display_message()),
                        }
                        redraw.force_update();
                    });
                }
                Ok(Submission::Unchanged) => {
                    thunks::toast(ToastKind::Info, bundle.text("toast.unchanged", ""));
                }
                Ok(Submission::Busy) => {}
                Err(invalid) => thunks::toast(ToastKind::Error, invalid.localized(&bundle)),
            }
        })
    };

    let on_request_delete = {
        let delete = delete.clone();
        let redraw = redraw.clone();
        let label = heading.clone();
        let id = props.id.to_string();
        Callback::from(move |_| {
            delete.borrow_mut().request(&id, &label);
            redraw.force_update();
        })
    };
    let on_cancel_delete = {
        let delete = delete.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            delete.borrow_mut().cancel();
            redraw.force_update();
        })
    };
    let on_confirm_delete = {
        let delete = delete.clone();
        let redraw = redraw.clone();
        let client = api.client.clone();
        let bundle = bundle.clone();
        Callback::from(move |()| {
            let Some(id) = delete.borrow_mut().confirm() else {
                return;
            };
            redraw.force_update();
            let delete = delete.clone();
            let redraw = redraw.clone();
            let client = client.clone();
            let bundle = bundle.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                match thunks::delete::<R>(client, id).await {
                    Ok(()) => {
                        delete.borrow_mut().on_success();
                        let message = entity_message::<R>(&bundle, "toast.deleted");
                        thunks::toast(ToastKind::Success, message);
                        if let Some(navigator) = navigator {
                            navigator.push(&R::list_route());
                        }
                    }
                    Err(err) => delete.borrow_mut().on_failure(err.display_message()),
                }
                redraw.force_update();
            });
        })
    };

    let body = if let Some(error) = slice.selected_error.clone().filter(|_| record.is_none()) {
        html! {
            <>
                <ErrorBanner message={error} />
                <button class="ghost" onclick={on_retry}>{t("detail.retry")}</button>
            </>
        }
    } else if let Some(record) = record {
        match editor.borrow().mode() {
            DetailMode::Reading => {
                let document = serde_json::to_value(record).unwrap_or_default();
                html! {
                    <>
                        <dl class="detail-fields">
                            {for R::DETAIL.iter().map(|field| html! {
                                <div class="detail-row">
                                    <dt>{t(field.label_key)}</dt>
                                    <dd>{field_display(field, &document, &bundle)}</dd>
                                </div>
                            })}
                        </dl>
                        <div class="actions">
                            <button class="solid" onclick={on_edit}>{t("detail.edit")}</button>
                            {if R::CAN_DELETE {
                                html! { <button class="danger" onclick={on_request_delete}>{t("common.delete")}</button> }
                            } else {
                                html! {}
                            }}
                        </div>
                    </>
                }
            }
            DetailMode::Editing(session) => {
                let message = session
                    .invalid
                    .as_ref()
                    .map(|err| err.localized(&bundle))
                    .or_else(|| session.error.clone());
                html! {
                    <form class="detail-form" onsubmit={on_save} novalidate={true}>
                        <FormFields
                            fields={R::FORM.fields}
                            values={session.draft.clone()}
                            on_change={on_change}
                            invalid_field={session.invalid.as_ref().map(FormError::field)}
                            disabled={session.saving}
                        />
                        {message.map(|text| html! { <p class="error-text" role="alert">{text}</p> }).unwrap_or_default()}
                        <div class="actions">
                            <button type="button" class="ghost" disabled={session.saving} onclick={on_cancel}>
                                {t("common.cancel")}
                            </button>
                            <button type="submit" class="solid" disabled={session.saving}>
                                {if session.saving { t("common.saving") } else { t("common.save") }}
                            </button>
                        </div>
                    </form>
                }
            }
        }
    } else {
        html! { <p class="muted" role="status" aria-busy="true">{t("detail.loading")}</p> }
    };

    let delete_modal = {
        let dialog = delete.borrow();
        dialog.target().map(|target| html! {
            <DeleteModal
                label={target.label.clone()}
                busy={dialog.buttons_disabled()}
                error={dialog.error().map(|text| AttrValue::from(text.to_string()))}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        })
    };

    html! {
        <section class="resource-detail">
            <header class="detail-header">
                <Link<Route> to={R::list_route()} classes={classes!("ghost")}>
                    {bundle.format("detail.back", "", &[("section", &t(R::TITLE_KEY))])}
                </Link<Route>>
                <h2>{heading}</h2>
            </header>
            {body}
            {delete_modal.unwrap_or_default()}
        </section>
    }
}
