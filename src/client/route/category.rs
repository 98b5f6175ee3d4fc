use dioxus::prelude::*;

use crate::{
    client::{
        api::{category::get_categories, Tag},
        component::{EmptyState, Page, Section},
        constant::SITE_NAME,
        model::cache::Cache,
        store::use_api_query,
    },
    model::category::CategoryDto,
};

use super::{
    named::{use_named_mutations, NamedDialogs, NamedPageState, NamedTable},
    new_button::NewButton,
};

#[component]
pub fn CategoryPage() -> Element {
    let state = use_signal(NamedPageState::<CategoryDto>::default);

    let categories = use_api_query("categories", Tag::Category, |api| async move {
        get_categories(&api).await
    });
    let (save, delete) = use_named_mutations(state);

    let cache = Cache::from_result(categories.read().as_ref());

    rsx! {
        Title { "Categories | {SITE_NAME}" }
        Page {
            Section {
                title: "Categories".to_string(),
                actions: rsx!(
                    NewButton::<CategoryDto, ()> { label: "New category".to_string(), state }
                ),
                {match cache {
                    Cache::Fetched(rows) if rows.is_empty() => rsx!(
                        EmptyState { message: "No categories yet".to_string() }
                    ),
                    Cache::Fetched(rows) => rsx!(
                        NamedTable::<CategoryDto> { rows, state }
                    ),
                    Cache::Error(err) => rsx!(
                        div {
                            class: "alert alert-error",
                            span { "Error loading categories: {err.message}" }
                        }
                    ),
                    _ => rsx!(),
                }}
            }
        }
        NamedDialogs::<CategoryDto> { state, save, delete }
    }
}
