use dioxus::prelude::*;

use crate::{
    client::{
        api::{client::get_clients, Tag},
        component::{EmptyState, Page, Section},
        constant::SITE_NAME,
        model::cache::Cache,
        store::use_api_query,
    },
    model::client::ClientDto,
};

use super::{
    named::{use_named_mutations, NamedDialogs, NamedPageState, NamedTable},
    new_button::NewButton,
};

#[component]
pub fn ClientPage() -> Element {
    let state = use_signal(NamedPageState::<ClientDto>::default);

    let clients = use_api_query("clients", Tag::Client, |api| async move {
        get_clients(&api).await
    });
    let (save, delete) = use_named_mutations(state);

    let cache = Cache::from_result(clients.read().as_ref());

    rsx! {
        Title { "Clients | {SITE_NAME}" }
        Page {
            Section {
                title: "Clients".to_string(),
                actions: rsx!(
                    NewButton::<ClientDto, ()> { label: "New client".to_string(), state }
                ),
                {match cache {
                    Cache::Fetched(rows) if rows.is_empty() => rsx!(
                        EmptyState { message: "No clients yet".to_string() }
                    ),
                    Cache::Fetched(rows) => rsx!(
                        NamedTable::<ClientDto> { rows, state }
                    ),
                    Cache::Error(err) => rsx!(
                        div {
                            class: "alert alert-error",
                            span { "Error loading clients: {err.message}" }
                        }
                    ),
                    _ => rsx!(),
                }}
            }
        }
        NamedDialogs::<ClientDto> { state, save, delete }
    }
}
