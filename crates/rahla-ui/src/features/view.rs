//! Browser bindings for features: table columns and routes.

use crate::app::Route;
use crate::core::format::field_display;
use crate::features::Feature;
use crate::i18n::TranslationBundle;
use serde_json::Value;
use yew::prelude::*;

/// One table column.
pub(crate) enum Column<R> {
    /// Render a [`Feature::DETAIL`] field by key with its own label.
    Field(&'static str),
    /// Custom cell.
    Custom {
        /// Header translation key.
        label_key: &'static str,
        /// Cell renderer.
        render: fn(&R, &TranslationBundle) -> Html,
    },
}

impl<R: Feature> Column<R> {
    /// Header translation key.
    pub(crate) fn label_key(&self) -> &'static str {
        match self {
            Self::Field(key) => R::DETAIL
                .iter()
                .find(|field| field.key == *key)
                .map_or(*key, |field| field.label_key),
            Self::Custom { label_key, .. } => *label_key,
        }
    }

    /// Cell content for `record`, serialized once per row as `document`.
    pub(crate) fn cell(&self, record: &R, document: &Value, bundle: &TranslationBundle) -> Html {
        match self {
            Self::Field(key) => R::DETAIL
                .iter()
                .find(|field| field.key == *key)
                .map(|field| html! { {field_display(field, document, bundle)} })
                .unwrap_or_default(),
            Self::Custom { render, .. } => render(record, bundle),
        }
    }
}

/// A feature the shell can route to and tabulate.
pub(crate) trait ResourceView: Feature {
    /// Table columns in display order.
    fn columns() -> Vec<Column<Self>>;
    /// Route of the list page.
    fn list_route() -> Route;
    /// Route of one record's page.
    fn detail_route(id: &str) -> Route;
}

/// Colored badge used by status columns.
pub(crate) fn badge(label: String, tone: &'static str) -> Html {
    html! { <span class={classes!("badge", tone)}>{label}</span> }
}

/// `key` rendered with the feature's singular noun as `{entity}`.
pub(crate) fn entity_message<R: Feature>(bundle: &TranslationBundle, key: &str) -> String {
    let entity = bundle.text(R::SINGULAR_KEY, R::NAME);
    bundle.format(key, "{entity}", &[("entity", &entity)])
}
