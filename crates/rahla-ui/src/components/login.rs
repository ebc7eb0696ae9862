//! Sign-in screen.

use crate::app::api::ApiCtx;
use crate::app::thunks;
use crate::core::config::UiConfig;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(UiConfig::default()));
    let t = |key: &str| bundle.text(key, "");
    let busy = use_selector(|store: &AppStore| store.auth.login_busy);
    let failure = use_selector(|store: &AppStore| store.auth.login_error.clone());
    let expired = use_selector(|store: &AppStore| store.auth.session_expired);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let missing = use_state(|| None as Option<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let missing = missing.clone();
        let client = api.client.clone();
        let busy = *busy;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if busy {
                return;
            }
            let address = email.trim().to_string();
            if address.is_empty() {
                missing.set(Some("fields.email"));
                return;
            }
            if password.is_empty() {
                missing.set(Some("fields.password"));
                return;
            }
            missing.set(None);
            yew::platform::spawn_local(thunks::login(
                client.clone(),
                address,
                (*password).clone(),
            ));
        })
    };

    let error = if let Some(field) = *missing {
        Some(bundle.format(
            "validation.required",
            "{field}",
            &[("field", &bundle.text(field, field))],
        ))
    } else {
        (*failure).as_ref().map(|err| {
            if err.is_unauthorized() {
                t("login.invalid_credentials")
            } else {
                err.display_message()
            }
        })
    };

    html! {
        <main class="login-page">
            <form class="card login-card" {onsubmit} novalidate={true}>
                <header>
                    <h1>{t("meta.app_name")}</h1>
                    <p class="muted">{t("login.subtitle")}</p>
                </header>
                {if *expired {
                    html! { <p class="notice" role="status">{t("login.session_expired")}</p> }
                } else {
                    html! {}
                }}
                <label class="stack">
                    <span>{t("fields.email")}</span>
                    <input
                        type="email"
                        autocomplete="username"
                        dir="ltr"
                        value={(*email).clone()}
                        disabled={*busy}
                        oninput={on_email}
                    />
                </label>
                <label class="stack">
                    <span>{t("fields.password")}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        dir="ltr"
                        value={(*password).clone()}
                        disabled={*busy}
                        oninput={on_password}
                    />
                </label>
                {error.map(|text| html! { <p class="error-text" role="alert">{text}</p> }).unwrap_or_default()}
                <div class="actions">
                    <button type="submit" class="solid" disabled={*busy}>
                        {if *busy { t("login.signing_in") } else { t("login.submit") }}
                    </button>
                </div>
            </form>
        </main>
    }
}
