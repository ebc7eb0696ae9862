//! Transient notifications stacked in a corner of the shell.
//!
//! # Design
//! - Every toast expires on its own timer; re-rendering never restarts it.
//! - The host only emits dismissals; the store owns the list.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::Toast;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    #[prop_or(4000)]
    pub ttl_ms: u32,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let timers = timers.clone();
        let on_dismiss = props.on_dismiss.clone();
        let ttl_ms = props.ttl_ms;
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                timers.retain(|id, _| list.iter().any(|toast| toast.id == *id));
                for toast in list {
                    let id = toast.id;
                    let on_dismiss = on_dismiss.clone();
                    timers
                        .entry(id)
                        .or_insert_with(|| Timeout::new(ttl_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>, dismiss_label: &str) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };
    let role = if toast.kind == crate::models::ToastKind::Error {
        "alert"
    } else {
        "status"
    };

    html! {
        <div class={classes!("toast", toast.kind.class())} {role}>
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
