use dioxus::prelude::*;

use crate::{
    client::model::{
        filter::LoanFilter,
        form::{parse_id, parse_iso_date},
    },
    model::{client::ClientDto, game::GameDto},
};

/// Filters apply on change; "Clear" drops all of them.
#[component]
pub fn LoanFilterBar(
    filter: LoanFilter,
    games: Vec<GameDto>,
    clients: Vec<ClientDto>,
    on_change: EventHandler<LoanFilter>,
    on_clear: EventHandler<()>,
) -> Element {
    let date = filter
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let game_filter = filter.clone();
    let client_filter = filter.clone();
    let date_filter = filter.clone();

    rsx!(div {
        class: "flex flex-col md:flex-row gap-2 mb-4",
        select {
            class: "select select-bordered w-full md:w-1/4",
            onchange: move |evt| {
                on_change.call(LoanFilter {
                    game_id: parse_id(&evt.value()),
                    ..game_filter.clone()
                });
            },
            option { value: "", selected: filter.game_id.is_none(), "All games" }
            for game in games {
                if let Some(id) = game.id {
                    option {
                        value: "{id}",
                        selected: filter.game_id == Some(id),
                        "{game.title}"
                    }
                }
            }
        }
        select {
            class: "select select-bordered w-full md:w-1/4",
            onchange: move |evt| {
                on_change.call(LoanFilter {
                    client_id: parse_id(&evt.value()),
                    ..client_filter.clone()
                });
            },
            option { value: "", selected: filter.client_id.is_none(), "All clients" }
            for client in clients {
                if let Some(id) = client.id {
                    option {
                        value: "{id}",
                        selected: filter.client_id == Some(id),
                        "{client.name}"
                    }
                }
            }
        }
        input {
            r#type: "date",
            class: "input input-bordered w-full md:w-1/4",
            value: "{date}",
            onchange: move |evt| {
                on_change.call(LoanFilter {
                    date: parse_iso_date(&evt.value()),
                    ..date_filter.clone()
                });
            },
        }
        button {
            r#type: "button",
            class: "btn btn-outline",
            onclick: move |_| on_clear.call(()),
            "Clear"
        }
    })
}
