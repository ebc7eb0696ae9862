//! Page strip with previous/next buttons and a page-size picker.

use crate::core::pagination::{PageItem, has_next, has_prev, visible_pages};
use crate::core::query::PAGE_SIZES;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let page = props.page;
    let go = |target: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(target))
    };
    let on_size = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Ok(size) = select.value().parse::<u32>() {
                    on_page_size.emit(size);
                }
            }
        })
    };
    let total = bundle.format(
        "list.total",
        "{count} records",
        &[("count", &props.total_items.to_string())],
    );

    html! {
        <nav class="pagination" aria-label={t("list.pagination")}>
            <span class="muted">{total}</span>
            <div class="pages">
                <button
                    class="ghost"
                    disabled={props.disabled || !has_prev(page)}
                    onclick={go(page.saturating_sub(1))}>
                    {t("list.previous")}
                </button>
                {for visible_pages(page, props.total_pages).into_iter().map(|item| match item {
                    PageItem::Page(number) => html! {
                        <button
                            class={classes!("page", (number == page).then_some("active"))}
                            aria-current={(number == page).then_some("page")}
                            disabled={props.disabled}
                            onclick={go(number)}>
                            {number}
                        </button>
                    },
                    PageItem::Ellipsis => html! { <span class="ellipsis">{"…"}</span> },
                })}
                <button
                    class="ghost"
                    disabled={props.disabled || !has_next(page, props.total_pages)}
                    onclick={go(page.saturating_add(1))}>
                    {t("list.next")}
                </button>
            </div>
            <label class="page-size">
                <span>{t("list.page_size")}</span>
                <select onchange={on_size}>
                    {for PAGE_SIZES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == props.page_size}>{size}</option>
                    })}
                </select>
            </label>
        </nav>
    }
}
