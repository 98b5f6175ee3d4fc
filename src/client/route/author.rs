use dioxus::prelude::*;

use crate::{
    client::{
        api::{author::get_authors, Tag},
        component::{EmptyState, Page, Pagination, PaginationData, Section},
        constant::SITE_NAME,
        model::cache::Cache,
        store::use_api_query,
    },
    model::author::{AuthorDto, PaginatedAuthorsDto},
};

use super::{
    named::{use_named_mutations, NamedDialogs, NamedPageState, NamedTable},
    new_button::NewButton,
};

#[component]
pub fn AuthorPage() -> Element {
    let state = use_signal(NamedPageState::<AuthorDto>::default);

    // Only paging re-runs the query, not dialog changes
    let pageable = use_memo(move || state.read().pageable());

    let authors = use_api_query("authors", Tag::Author, move |api| {
        let pageable = pageable();
        async move { get_authors(&api, pageable).await }
    });
    let (save, delete) = use_named_mutations(state);

    let cache = Cache::from_result(authors.read().as_ref());

    rsx! {
        Title { "Authors | {SITE_NAME}" }
        Page {
            Section {
                title: "Authors".to_string(),
                actions: rsx!(
                    NewButton::<AuthorDto, ()> { label: "New author".to_string(), state }
                ),
                {match cache {
                    Cache::Fetched(page) => rsx!(
                        AuthorsPage { page, state }
                    ),
                    Cache::Error(err) => rsx!(
                        div {
                            class: "alert alert-error",
                            span { "Error loading authors: {err.message}" }
                        }
                    ),
                    _ => rsx!(),
                }}
            }
        }
        NamedDialogs::<AuthorDto> { state, save, delete }
    }
}

#[component]
fn AuthorsPage(page: PaginatedAuthorsDto, mut state: Signal<NamedPageState<AuthorDto>>) -> Element {
    let data = PaginationData::new(state.read().pageable(), page.total_elements);

    if page.content.is_empty() && !data.has_previous() {
        return rsx!(EmptyState { message: "No authors yet".to_string() });
    }

    rsx!(
        NamedTable::<AuthorDto> { rows: page.content, state }
        Pagination {
            data,
            on_page_change: move |page_number| state.write().set_page(page_number),
            on_per_page_change: move |page_size| state.write().set_page_size(page_size),
        }
    )
}
