use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::form::{parse_id, GameForm},
    },
    model::{author::AuthorDto, category::CategoryDto, game::GameDto},
};

#[component]
pub fn GameModal(
    open: bool,
    initial: GameForm,
    categories: Vec<CategoryDto>,
    authors: Vec<AuthorDto>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<GameDto>,
) -> Element {
    let title = match initial.id {
        Some(_) => "Edit game",
        None => "New game",
    };

    rsx!(Modal {
        open,
        title: title.to_string(),
        prevent_close: false,
        on_close: move |_| on_cancel.call(()),
        GameFormFields { initial, categories, authors, on_cancel, on_submit }
    })
}

#[component]
fn GameFormFields(
    initial: GameForm,
    categories: Vec<CategoryDto>,
    authors: Vec<AuthorDto>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<GameDto>,
) -> Element {
    let mut fields = use_signal(|| initial.clone());

    let can_submit = fields.read().can_submit();
    let age_error = fields.read().age_error();
    let selected_category = fields
        .read()
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let submit_categories = categories.clone();
    let submit_authors = authors.clone();

    rsx!(form {
        onsubmit: move |evt| {
            evt.prevent_default();
            let game = fields.read().to_payload(&submit_categories, &submit_authors);
            if let Some(game) = game {
                on_submit.call(game);
            }
        },
        div {
            class: "flex flex-col gap-3",
            if let Some(id) = fields.read().id {
                label {
                    class: "form-control w-full",
                    span { class: "label-text", "Identifier" }
                    input {
                        class: "input input-bordered w-full",
                        value: "{id}",
                        disabled: true,
                    }
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Title *" }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    value: "{fields.read().title}",
                    oninput: move |evt| fields.write().title = evt.value(),
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Recommended age *" }
                input {
                    r#type: "number",
                    min: "0",
                    class: if age_error.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                    value: "{fields.read().age}",
                    oninput: move |evt| fields.write().age = evt.value(),
                }
                if let Some(age_error) = age_error {
                    span { class: "label-text-alt text-error mt-1", "{age_error}" }
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Category *" }
                select {
                    class: "select select-bordered w-full",
                    value: "{selected_category}",
                    onchange: move |evt| fields.write().category_id = parse_id(&evt.value()),
                    option { value: "", disabled: true, "Select a category" }
                    for category in categories {
                        if let Some(id) = category.id {
                            option {
                                value: "{id}",
                                selected: fields.read().category_id == Some(id),
                                "{category.name}"
                            }
                        }
                    }
                }
            }
            fieldset {
                class: "form-control w-full",
                legend { class: "label-text mb-1", "Authors *" }
                div {
                    class: "flex flex-wrap gap-x-4 gap-y-1 max-h-40 overflow-y-auto",
                    for author in authors {
                        if let Some(id) = author.id {
                            label {
                                class: "label cursor-pointer gap-2",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox checkbox-sm",
                                    checked: fields.read().author_ids.contains(&id),
                                    onchange: move |_| fields.write().toggle_author(id),
                                }
                                span { class: "label-text", "{author.name}" }
                            }
                        }
                    }
                }
            }
        }
        div {
            class: "modal-action",
            button {
                r#type: "button",
                class: "btn",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: !can_submit,
                "Save"
            }
        }
    })
}
