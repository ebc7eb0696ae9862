//! Authenticated layout: sidebar navigation, top bar, and content area.

use crate::app::Route;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Sidebar entries in display order.
const SECTIONS: [(Route, &str); 10] = [
    (Route::Cities, "nav.cities"),
    (Route::Schools, "nav.schools"),
    (Route::Drivers, "nav.drivers"),
    (Route::Groups, "nav.groups"),
    (Route::Trips, "nav.trips"),
    (Route::Subscriptions, "nav.subscriptions"),
    (Route::Users, "nav.users"),
    (Route::Ads, "nav.ads"),
    (Route::Notifications, "nav.notifications"),
    (Route::Contacts, "nav.contacts"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub locale: LocaleCode,
    pub on_locale_change: Callback<LocaleCode>,
    pub role: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let on_locale = {
        let on_locale_change = props.on_locale_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    on_locale_change.emit(locale);
                }
            }
        })
    };
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };
    let section = props.active.section();
    let role_label = bundle.text(&format!("role.{}", props.role), props.role.as_str());

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label={t("shell.close_nav")}>{"✕"}</button>
                    <strong>{t("meta.app_name")}</strong>
                    <span class="muted">{t("shell.tagline")}</span>
                </div>
                <nav>
                    {for SECTIONS.iter().map(|(route, key)| nav_item(route.clone(), t(key), &section))}
                </nav>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label={t("shell.open_nav")} onclick={toggle_nav}>{"☰"}</button>
                    <div class="top-actions">
                        <label class="locale-select">
                            <span class="sr-only">{t("shell.language")}</span>
                            <select onchange={on_locale}>
                                {for LocaleCode::all().into_iter().map(|locale| html! {
                                    <option value={locale.code()} selected={locale == props.locale}>{locale.label()}</option>
                                })}
                            </select>
                        </label>
                        <span class="pill subtle">{role_label}</span>
                        <button class="ghost" onclick={on_logout}>{t("shell.logout")}</button>
                    </div>
                </header>
                <main class="content">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: String, active: &Route) -> Html {
    let classes = if &route == active {
        classes!("nav-item", "active")
    } else {
        classes!("nav-item")
    };
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
