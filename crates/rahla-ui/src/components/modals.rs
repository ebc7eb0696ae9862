//! Create and delete overlays.
//!
//! # Design
//! - Keep side effects out of these components; they emit intents via callbacks.
//! - Buttons are disabled while the request they started is in flight.
//! - Failures stay visible inside the overlay so input is never lost.

use crate::components::form_fields::FormFields;
use crate::core::forms::{FieldSpec, FormError, FormValues};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CreateModalProps {
    pub title: AttrValue,
    pub fields: &'static [FieldSpec],
    pub values: FormValues,
    pub submitting: bool,
    #[prop_or_default]
    pub invalid: Option<FormError>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_change: Callback<(String, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(CreateModal)]
pub(crate) fn create_modal(props: &CreateModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let message = props
        .invalid
        .as_ref()
        .map(|err| err.localized(&bundle))
        .or_else(|| props.error.as_ref().map(ToString::to_string));

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <form class="card modal" {onsubmit} novalidate={true}>
                <header>
                    <h3>{props.title.clone()}</h3>
                </header>
                <FormFields
                    fields={props.fields}
                    values={props.values.clone()}
                    on_change={props.on_change.clone()}
                    invalid_field={props.invalid.as_ref().map(FormError::field)}
                    disabled={props.submitting}
                />
                {message.map(|text| html! { <p class="error-text" role="alert">{text}</p> }).unwrap_or_default()}
                <div class="actions">
                    <button type="button" class="ghost" disabled={props.submitting} onclick={on_close}>
                        {t("common.cancel")}
                    </button>
                    <button type="submit" class="solid" disabled={props.submitting}>
                        {if props.submitting { t("common.saving") } else { t("common.create") }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DeleteModalProps {
    pub label: AttrValue,
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(DeleteModal)]
pub(crate) fn delete_modal(props: &DeleteModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let prompt = bundle.format(
        "delete.prompt",
        "Delete {label}?",
        &[("label", props.label.as_str())],
    );
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="modal-overlay" role="alertdialog" aria-modal="true">
            <div class="card modal">
                <header>
                    <h3>{t("delete.title")}</h3>
                </header>
                <p>{prompt}</p>
                <p class="muted">{t("delete.irreversible")}</p>
                {props.error.clone().map(|text| html! { <p class="error-text" role="alert">{text}</p> }).unwrap_or_default()}
                <div class="actions">
                    <button class="ghost" disabled={props.busy} onclick={cancel}>{t("common.cancel")}</button>
                    <button class="danger" disabled={props.busy} onclick={confirm}>
                        {if props.busy { t("delete.deleting") } else { t("delete.confirm") }}
                    </button>
                </div>
            </div>
        </div>
    }
}
