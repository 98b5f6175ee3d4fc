use dioxus::prelude::*;

use crate::client::{component::Modal, model::form::NameForm};

/// Create/edit dialog of the entities that only carry a name.
#[component]
pub fn NameModal(
    open: bool,
    title: String,
    initial: NameForm,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<NameForm>,
) -> Element {
    rsx!(Modal {
        open,
        title,
        prevent_close: false,
        on_close: move |_| on_cancel.call(()),
        NameFormFields { initial, on_cancel, on_submit }
    })
}

/// Mounted each time the dialog opens, so the fields start from `initial`.
#[component]
fn NameFormFields(
    initial: NameForm,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<NameForm>,
) -> Element {
    let mut fields = use_signal(|| initial.clone());
    let can_submit = fields.read().can_submit();

    rsx!(form {
        onsubmit: move |evt| {
            evt.prevent_default();
            if fields.read().can_submit() {
                on_submit.call(fields());
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
                span { class: "label-text", "Name *" }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    value: "{fields.read().name}",
                    oninput: move |evt| fields.write().name = evt.value(),
                    autofocus: true,
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
