use dioxus::prelude::*;

use super::Modal;

#[component]
pub fn ConfirmationModal(
    open: bool,
    title: String,
    message: Element,
    confirm_text: String,
    is_processing: bool,
    processing_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            open,
            title,
            prevent_close: is_processing,
            on_close: move |_| on_cancel.call(()),
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "{processing_text}"
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
