use dioxus::prelude::*;

use crate::client::{
    model::list_page::{ListPageState, PageStatus},
    store::LoadingContext,
};

/// Opens the create dialog of a list page; disabled while the page is busy.
#[component]
pub fn NewButton<R: Clone + PartialEq + 'static, F: Clone + PartialEq + 'static>(
    label: String,
    mut state: Signal<ListPageState<R, F>>,
) -> Element {
    let loading = use_context::<LoadingContext>();
    let busy = state.read().status(loading.is_loading()) == PageStatus::Loading;

    rsx!(
        button {
            class: "btn btn-primary",
            disabled: busy,
            onclick: move |_| state.write().open_create(),
            "{label}"
        }
    )
}
