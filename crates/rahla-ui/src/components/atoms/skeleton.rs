//! Placeholder rows shown while a table has nothing to display yet.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SkeletonRowsProps {
    pub rows: u32,
    pub columns: usize,
}

#[function_component(SkeletonRows)]
pub(crate) fn skeleton_rows(props: &SkeletonRowsProps) -> Html {
    html! {
        {for (0..props.rows).map(|_| html! {
            <tr class="skeleton-row" aria-hidden="true">
                {for (0..props.columns).map(|_| html! { <td><span class="skeleton"></span></td> })}
            </tr>
        })}
    }
}
