use dioxus::prelude::*;

use crate::{client::constant::PAGE_SIZES, model::pagination::PageableDto};

#[derive(Clone, Copy, PartialEq)]
pub struct PaginationData {
    /// Zero-based
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    pub fn new(pageable: PageableDto, total: u64) -> Self {
        let per_page = pageable.page_size.max(1);

        Self {
            page: pageable.page_number,
            per_page,
            total,
            total_pages: total.div_ceil(per_page).max(1),
        }
    }

    /// 1-based bounds of the rows shown, `(0, 0)` when empty.
    pub fn shown_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = self.page * self.per_page + 1;
        let last = ((self.page + 1) * self.per_page).min(self.total);
        (first.min(last), last)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[component]
pub fn Pagination(
    data: PaginationData,
    on_page_change: EventHandler<u64>,
    on_per_page_change: EventHandler<u64>,
) -> Element {
    let (first, last) = data.shown_range();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{data.per_page}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_per_page_change.call(value);
                        }
                    },
                    for size in PAGE_SIZES {
                        option {
                            value: "{size}",
                            selected: size == data.per_page,
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {first} to {last} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_previous(),
                        onclick: move |_| {
                            if data.has_previous() {
                                on_page_change.call(data.page - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm no-animation",
                        "Page {data.page + 1} of {data.total_pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_next(),
                        onclick: move |_| {
                            if data.has_next() {
                                on_page_change.call(data.page + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }
    )
}
