use dioxus::prelude::*;

use crate::client::router::Route;

/// Unknown paths fall back to the catalog.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::GamePage {});
    });

    rsx!()
}
