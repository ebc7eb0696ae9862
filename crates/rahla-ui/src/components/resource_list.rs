//! Filterable, paginated table shared by every entity.
//!
//! # Design
//! - Query state lives in a reducer so debounced callbacks never act on a stale copy.
//! - Each query change aborts the previous request; unmounting aborts the last one.
//! - The last good rows stay visible under an error banner.
//! - Dialog state sits in refs so async completions update the latest instance.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::thunks;
use crate::components::atoms::{EmptyState, ErrorBanner, SearchInput, SkeletonRows};
use crate::components::modals::{CreateModal, DeleteModal};
use crate::components::pagination::Pagination;
use crate::core::config::UiConfig;
use crate::core::dialogs::{CreateDialog, DeleteDialog, Submission};
use crate::core::forms::{FilterKind, FilterSpec};
use crate::core::query::{ListQuery, page_from_search};
use crate::core::store::{AppStore, app_dispatch};
use crate::features::view::{ResourceView, entity_message};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use std::rc::Rc;
use tracing::debug;
use web_sys::{AbortController, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Rows drawn while the first page loads.
const SKELETON_ROWS: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
struct QueryState(ListQuery);

enum QueryAction {
    Page(u32),
    PageSize(u32),
    Filter(&'static str, String),
    ClearFilters,
}

impl Reducible for QueryState {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        let changed = match action {
            QueryAction::Page(page) => next.set_page(page),
            QueryAction::PageSize(size) => next.set_page_size(size),
            QueryAction::Filter(key, value) => next.set_filter(key, value.trim()),
            QueryAction::ClearFilters => next.clear_filters(),
        };
        if changed { Rc::new(Self(next)) } else { self }
    }
}

#[function_component(ResourceList)]
pub(crate) fn resource_list<R: ResourceView + 'static>() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(UiConfig::default()));
    let t = |key: &str| bundle.text(key, "");
    let navigator = use_navigator();
    let location = use_location();
    let slice = use_selector(|store: &AppStore| R::slice(store).clone());
    let query = {
        let page_size = api.config.default_page_size;
        let page = location
            .as_ref()
            .and_then(|location| page_from_search(location.query_str()))
            .unwrap_or(1);
        use_reducer(move || {
            let mut query = ListQuery::new(page_size);
            query.set_page(page);
            QueryState(query)
        })
    };
    let refresh = use_state(|| 0_u32);
    let create = use_mut_ref(|| CreateDialog::new(R::FORM));
    let delete = use_mut_ref(DeleteDialog::default);
    let redraw = use_force_update();

    {
        let page = query.0.page();
        use_effect_with_deps(
            move |page: &u32| {
                if let Some(navigator) = navigator {
                    let route = R::list_route();
                    if let Err(err) = navigator.replace_with_query(&route, &[("page", *page)]) {
                        debug!(error = %err, "could not mirror page into the URL");
                    }
                }
                || ()
            },
            page,
        );
    }
    {
        let client = api.client.clone();
        use_effect_with_deps(
            move |(query, _): &(ListQuery, u32)| {
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(AbortController::signal);
                yew::platform::spawn_local(thunks::fetch_list::<R>(client, query.clone(), signal));
                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            (query.0.clone(), *refresh),
        );
    }

    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(refresh.wrapping_add(1)))
    };
    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| query.dispatch(QueryAction::Page(page)))
    };
    let on_page_size = {
        let query = query.clone();
        Callback::from(move |size: u32| query.dispatch(QueryAction::PageSize(size)))
    };
    let on_clear_filters = {
        let query = query.clone();
        Callback::from(move |_| query.dispatch(QueryAction::ClearFilters))
    };
    let on_dismiss_error = Callback::from(|()| {
        app_dispatch().reduce_mut(|store| R::slice_mut(store).dismiss_error());
    });

    let on_open_create = {
        let create = create.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            create.borrow_mut().open();
            redraw.force_update();
        })
    };
    let on_close_create = {
        let create = create.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            create.borrow_mut().close();
            redraw.force_update();
        })
    };
    let on_create_change = {
        let create = create.clone();
        let redraw = redraw.clone();
        Callback::from(move |(key, value): (String, String)| {
            create.borrow_mut().set_value(&key, value);
            redraw.force_update();
        })
    };
    let on_create_submit = {
        let create = create.clone();
        let redraw = redraw.clone();
        let client = api.client.clone();
        let bundle = bundle.clone();
        Callback::from(move |()| {
            let outcome = create.borrow_mut().submit();
            redraw.force_update();
            match outcome {
                Ok(Submission::Send(payload)) => {
                    let create = create.clone();
                    let redraw = redraw.clone();
                    let client = client.clone();
                    let bundle = bundle.clone();
                    yew::platform::spawn_local(async move {
                        match thunks::create::<R>(client, payload).await {
                            Ok(_) => {
                                create.borrow_mut().on_success();
                                let message = entity_message::<R>(&bundle, "toast.created");
                                thunks::toast(ToastKind::Success, message);
                            }
                            Err(err) => create.borrow_mut().on_failure(err.display_message()),
                        }
                        redraw.force_update();
                    });
                }
                Ok(Submission::Unchanged | Submission::Busy) => {}
                Err(invalid) => thunks::toast(ToastKind::Error, invalid.localized(&bundle)),
            }
        })
    };

    let on_request_delete = {
        let delete = delete.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, label): (String, String)| {
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
            yew::platform::spawn_local(async move {
                match thunks::delete::<R>(client, id).await {
                    Ok(()) => {
                        delete.borrow_mut().on_success();
                        let message = entity_message::<R>(&bundle, "toast.deleted");
                        thunks::toast(ToastKind::Success, message);
                    }
                    Err(err) => delete.borrow_mut().on_failure(err.display_message()),
                }
                redraw.force_update();
            });
        })
    };

    let columns = R::columns();
    let column_count = columns.len() + 1;
    let filters = render_filters(R::FILTERS, &query, &bundle, api.config.search_debounce_ms);
    let has_filters = query.0.has_filters();
    let rows = if slice.loading && slice.items.is_empty() {
        html! { <SkeletonRows rows={SKELETON_ROWS} columns={column_count} /> }
    } else {
        html! {
            {for slice.items.iter().map(|item| {
                let document = serde_json::to_value(item).unwrap_or_default();
                let id = item.id().to_string();
                let label = item.label(bundle.locale);
                let on_delete = {
                    let on_request_delete = on_request_delete.clone();
                    let id = id.clone();
                    Callback::from(move |_| on_request_delete.emit((id.clone(), label.clone())))
                };
                html! {
                    <tr key={id.clone()}>
                        {for columns.iter().map(|column| html! { <td>{column.cell(item, &document, &bundle)}</td> })}
                        <td class="row-actions">
                            <Link<Route> to={R::detail_route(&id)} classes={classes!("ghost")}>{t("list.view")}</Link<Route>>
                            {if R::CAN_DELETE {
                                html! { <button class="ghost danger" onclick={on_delete}>{t("common.delete")}</button> }
                            } else {
                                html! {}
                            }}
                        </td>
                    </tr>
                }
            })}
        }
    };
    let empty = (!slice.loading && slice.items.is_empty()).then(|| {
        let description = has_filters.then(|| AttrValue::from(t("list.empty_filtered")));
        html! {
            <EmptyState title={t("list.empty")} {description}>
                {if has_filters {
                    html! { <button class="ghost" onclick={on_clear_filters.clone()}>{t("list.clear_filters")}</button> }
                } else {
                    html! {}
                }}
            </EmptyState>
        }
    });
    let create_modal = {
        let dialog = create.borrow();
        dialog.is_open().then(|| {
            let title = entity_message::<R>(&bundle, "create.title");
            html! {
                <CreateModal
                    title={title}
                    fields={R::FORM.fields}
                    values={dialog.values().clone()}
                    submitting={dialog.is_submitting()}
                    invalid={dialog.invalid().cloned()}
                    error={dialog.error().map(|text| AttrValue::from(text.to_string()))}
                    on_change={on_create_change}
                    on_submit={on_create_submit}
                    on_close={on_close_create}
                />
            }
        })
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
        <section class="resource-list">
            <header class="list-header">
                <h2>{t(R::TITLE_KEY)}</h2>
                <div class="list-actions">
                    <button class="ghost" onclick={on_refresh} disabled={slice.loading}>{t("list.refresh")}</button>
                    {if R::CAN_CREATE {
                        html! {
                            <button class="solid" onclick={on_open_create}>
                                {entity_message::<R>(&bundle, "create.button")}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </header>
            <div class="filters">{filters}</div>
            {slice.error.clone().map(|message| html! {
                <ErrorBanner
                    message={message}
                    dismiss_label={t("common.dismiss")}
                    on_dismiss={Some(on_dismiss_error.clone())}
                />
            }).unwrap_or_default()}
            <table class={classes!("data-table", slice.loading.then_some("loading"))} aria-busy={slice.loading.to_string()}>
                <thead>
                    <tr>
                        {for columns.iter().map(|column| html! { <th>{t(column.label_key())}</th> })}
                        <th class="row-actions"><span class="sr-only">{t("list.actions")}</span></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {empty.unwrap_or_default()}
            {if slice.total_pages > 0 || query.0.page() > 1 {
                html! {
                    <Pagination
                        page={query.0.page()}
                        total_pages={u32::try_from(slice.total_pages).unwrap_or(u32::MAX)}
                        total_items={slice.total_items}
                        page_size={query.0.page_size()}
                        on_page={on_page}
                        on_page_size={on_page_size}
                        disabled={slice.loading}
                    />
                }
            } else {
                html! {}
            }}
            {create_modal.unwrap_or_default()}
            {delete_modal.unwrap_or_default()}
        </section>
    }
}

fn render_filters(
    filters: &'static [FilterSpec],
    query: &UseReducerHandle<QueryState>,
    bundle: &TranslationBundle,
    debounce_ms: u32,
) -> Html {
    html! {
        {for filters.iter().map(|filter| {
            let key = filter.key;
            let current = query.0.filter(key).to_string();
            let label = bundle.text(filter.label_key, key);
            match filter.kind {
                FilterKind::Search => {
                    let query = query.clone();
                    let on_search = Callback::from(move |value: String| {
                        query.dispatch(QueryAction::Filter(key, value));
                    });
                    html! {
                        <SearchInput value={current} placeholder={label} debounce_ms={debounce_ms} {on_search} />
                    }
                }
                FilterKind::Select(options) => {
                    let query = query.clone();
                    let onchange = Callback::from(move |event: Event| {
                        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                            query.dispatch(QueryAction::Filter(key, select.value()));
                        }
                    });
                    html! {
                        <label class="filter-select">
                            <span>{label}</span>
                            <select {onchange}>
                                <option value="" selected={current.is_empty()}>{bundle.text("list.filter_all", "")}</option>
                                {for options.iter().map(|option| html! {
                                    <option value={option.value} selected={current == option.value}>
                                        {bundle.text(option.label_key, option.value)}
                                    </option>
                                })}
                            </select>
                        </label>
                    }
                }
            }
        })}
    }
}
