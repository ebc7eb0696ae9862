//! Root component, routing, and boot sequence.
//!
//! # Design
//! - The stored session is restored before the first render so deep links survive a reload.
//! - The API client always carries the store's current session.
//! - Locale changes re-render through context and flip `dir`/`lang` in place.

use crate::app::api::ApiCtx;
use crate::components::detail::ResourceDetail;
use crate::components::login::LoginPage;
use crate::components::resource_list::ResourceList;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::auth::{Session, unix_now};
use crate::core::config::UiConfig;
use crate::core::store::{AppStore, app_dispatch};
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::document;
use rahla_api_models::{
    Ad, City, Contact, Driver, Notification, School, Subscription, Trip, TripGroup, User,
};
pub(crate) use routes::Route;
use tracing::info;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
mod preferences;
mod routes;
mod telemetry;
pub(crate) mod thunks;

#[derive(Properties, PartialEq)]
pub(crate) struct RahlaAppProps {
    pub config: UiConfig,
}

#[function_component(RahlaApp)]
pub(crate) fn rahla_app(props: &RahlaAppProps) -> Html {
    let api_ctx = {
        let config = props.config.clone();
        use_memo(move |_| ApiCtx::new(config), ())
    };
    let locale = use_state(preferences::load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |locale| TranslationBundle::new(*locale), locale)
    };
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let toasts = use_selector(|store: &AppStore| store.ui.toasts.clone());

    api_ctx.client.set_session((*session).clone());

    use_effect_with_deps(
        move |locale: &LocaleCode| {
            apply_locale(*locale);
            preferences::persist_locale(*locale);
            || ()
        },
        *locale,
    );
    use_effect_with_deps(
        move |session: &Option<Session>| {
            match session {
                Some(session) => preferences::persist_session(session),
                None => preferences::clear_session(),
            }
            || ()
        },
        (*session).clone(),
    );

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };
    let on_dismiss_toast = Callback::from(|id: u64| {
        app_dispatch().reduce_mut(|store| store.ui.dismiss_toast(id));
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <Gate locale={*locale} on_locale_change={on_locale_change} />
                </BrowserRouter>
                <ToastHost
                    toasts={(*toasts).clone()}
                    on_dismiss={on_dismiss_toast}
                    ttl_ms={props.config.toast_ttl_ms}
                />
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct GateProps {
    locale: LocaleCode,
    on_locale_change: Callback<LocaleCode>,
}

/// Routes signed-out users to the login page and everyone else into the shell.
#[function_component(Gate)]
fn gate(props: &GateProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let session = use_selector(|store: &AppStore| store.auth.session.clone());

    match ((*session).as_ref(), &route) {
        (None, Route::Login) => html! { <LoginPage /> },
        (None, _) => html! { <Redirect<Route> to={Route::Login} /> },
        (Some(_), Route::Login) => html! { <Redirect<Route> to={Route::Home} /> },
        (Some(session), _) => {
            let on_logout = Callback::from(|()| crate::app::thunks::logout());
            html! {
                <AppShell
                    active={route.clone()}
                    locale={props.locale}
                    on_locale_change={props.on_locale_change.clone()}
                    role={session.role.clone()}
                    on_logout={on_logout}
                >
                    <Switch<Route> render={switch} />
                </AppShell>
            }
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login | Route::Home => html! { <Redirect<Route> to={Route::Cities} /> },
        Route::Cities => html! { <ResourceList<City> /> },
        Route::City { id } => html! { <ResourceDetail<City> id={id} /> },
        Route::Schools => html! { <ResourceList<School> /> },
        Route::School { id } => html! { <ResourceDetail<School> id={id} /> },
        Route::Drivers => html! { <ResourceList<Driver> /> },
        Route::Driver { id } => html! { <ResourceDetail<Driver> id={id} /> },
        Route::Groups => html! { <ResourceList<TripGroup> /> },
        Route::Group { id } => html! { <ResourceDetail<TripGroup> id={id} /> },
        Route::Trips => html! { <ResourceList<Trip> /> },
        Route::Trip { id } => html! { <ResourceDetail<Trip> id={id} /> },
        Route::Ads => html! { <ResourceList<Ad> /> },
        Route::Ad { id } => html! { <ResourceDetail<Ad> id={id} /> },
        Route::Notifications => html! { <ResourceList<Notification> /> },
        Route::Notification { id } => html! { <ResourceDetail<Notification> id={id} /> },
        Route::Contacts => html! { <ResourceList<Contact> /> },
        Route::Contact { id } => html! { <ResourceDetail<Contact> id={id} /> },
        Route::Subscriptions => html! { <ResourceList<Subscription> /> },
        Route::Subscription { id } => html! { <ResourceDetail<Subscription> id={id} /> },
        Route::Users => html! { <ResourceList<User> /> },
        Route::User { id } => html! { <ResourceDetail<User> id={id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(crate::i18n::DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("not_found.title", "")}</h2>
            <p class="muted">{bundle.text("not_found.body", "")}</p>
            <Link<Route> to={Route::Cities} classes={classes!("solid")}>{bundle.text("not_found.back", "")}</Link<Route>>
        </div>
    }
}

fn apply_locale(locale: LocaleCode) {
    let Some(root) = document().document_element() else {
        console::error!("document has no root element");
        return;
    };
    for (name, value) in locale.root_attributes() {
        if let Err(err) = root.set_attribute(name, value) {
            console::error!("could not set document attribute", name, format!("{err:?}"));
        }
    }
}

/// Boot the application into `#root`, or `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = preferences::load_config();
    if let Err(err) = telemetry::init_logging(&config.log_level) {
        console::error!("logging unavailable", err.to_string());
    }
    info!(api = %config.api_base_url, "booting back office");
    if let Some(session) = preferences::load_session(unix_now()) {
        app_dispatch().reduce_mut(|store| store.sign_in(session));
    }
    let props = RahlaAppProps { config };
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<RahlaApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<RahlaApp>::with_props(props).render();
    }
}
