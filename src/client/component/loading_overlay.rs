use dioxus::prelude::*;

use crate::client::store::LoadingContext;

#[component]
pub fn LoadingOverlay() -> Element {
    let loading = use_context::<LoadingContext>();

    rsx!(
        if loading.is_loading() {
            div {
                class: "fixed inset-0 z-40 flex items-center justify-center bg-base-300/60",
                span { class: "loading loading-spinner loading-lg" }
            }
        }
    )
}
