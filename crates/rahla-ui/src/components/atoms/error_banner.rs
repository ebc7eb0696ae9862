//! Dismissible inline error banner.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub dismiss_label: Option<AttrValue>,
    /// Omit to render a banner without a close button.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub(crate) fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner" role="alert">
            <span>{props.message.clone()}</span>
            {props.on_dismiss.clone().map(|on_dismiss| html! {
                <button
                    class="ghost"
                    aria-label={props.dismiss_label.clone()}
                    onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                    {"✕"}
                </button>
            }).unwrap_or_default()}
        </div>
    }
}
