use dioxus::prelude::*;

use crate::{
    client::model::{filter::GameFilter, form::parse_id},
    model::category::CategoryDto,
};

/// Draft filter, applied only when "Filter" is pressed.
#[component]
pub fn GameFilterBar(
    categories: Vec<CategoryDto>,
    on_filter: EventHandler<GameFilter>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(GameFilter::default);
    let selected_category = draft
        .read()
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx!(form {
        class: "flex flex-col md:flex-row gap-2 mb-4",
        onsubmit: move |evt| {
            evt.prevent_default();
            on_filter.call(draft());
        },
        input {
            r#type: "text",
            class: "input input-bordered w-full md:w-1/3",
            placeholder: "Game title",
            value: "{draft.read().title}",
            oninput: move |evt| draft.write().title = evt.value(),
        }
        select {
            class: "select select-bordered w-full md:w-1/3",
            value: "{selected_category}",
            onchange: move |evt| draft.write().category_id = parse_id(&evt.value()),
            option { value: "", "All categories" }
            for category in categories {
                if let Some(id) = category.id {
                    option {
                        value: "{id}",
                        selected: Some(id) == draft.read().category_id,
                        "{category.name}"
                    }
                }
            }
        }
        div {
            class: "flex gap-2",
            button {
                r#type: "button",
                class: "btn btn-outline",
                onclick: move |_| {
                    draft.set(GameFilter::default());
                    on_clear.call(());
                },
                "Clear"
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                "Filter"
            }
        }
    })
}
