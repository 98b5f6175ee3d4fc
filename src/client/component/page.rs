use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 flex flex-col items-center {class}",
            div {
                class: "w-full max-w-6xl",
                {children}
            }
        }
    )
}

/// Card holding a page title, its actions and the content below.
#[component]
pub fn Section(title: String, actions: Option<Element>, children: Element) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2 mb-4",
                    h2 {
                        class: "card-title",
                        "{title}"
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "flex gap-2",
                            {actions}
                        }
                    }
                }
                {children}
            }
        }
    )
}

/// Placeholder rendered instead of an empty table.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx!(
        div {
            class: "text-center py-8 opacity-50",
            "{message}"
        }
    )
}
