use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::form::{parse_id, parse_iso_date, LoanForm},
    },
    model::{client::ClientDto, game::GameDto, loan::LoanDto},
};

#[component]
pub fn LoanModal(
    open: bool,
    games: Vec<GameDto>,
    clients: Vec<ClientDto>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<LoanDto>,
) -> Element {
    rsx!(Modal {
        open,
        title: "New loan".to_string(),
        prevent_close: false,
        on_close: move |_| on_cancel.call(()),
        LoanFormFields { games, clients, on_cancel, on_submit }
    })
}

fn iso_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
fn LoanFormFields(
    games: Vec<GameDto>,
    clients: Vec<ClientDto>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<LoanDto>,
) -> Element {
    let mut fields = use_signal(LoanForm::default);

    let can_submit = fields.read().can_submit();
    let date_error = fields.read().date_error();
    let start_value = iso_value(fields.read().start_date());
    let end_value = iso_value(fields.read().end_date());
    let date_input_class = if date_error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(form {
        onsubmit: move |evt| {
            evt.prevent_default();
            let loan = fields.read().to_payload();
            if let Some(loan) = loan {
                on_submit.call(loan);
            }
        },
        div {
            class: "flex flex-col gap-3",
            label {
                class: "form-control w-full",
                span { class: "label-text", "Game *" }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| fields.write().game_id = parse_id(&evt.value()),
                    option { value: "", selected: fields.read().game_id.is_none(), disabled: true, "Select a game" }
                    for game in games {
                        if let Some(id) = game.id {
                            option {
                                value: "{id}",
                                selected: fields.read().game_id == Some(id),
                                "{game.title}"
                            }
                        }
                    }
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Client *" }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| fields.write().client_id = parse_id(&evt.value()),
                    option { value: "", selected: fields.read().client_id.is_none(), disabled: true, "Select a client" }
                    for client in clients {
                        if let Some(id) = client.id {
                            option {
                                value: "{id}",
                                selected: fields.read().client_id == Some(id),
                                "{client.name}"
                            }
                        }
                    }
                }
            }
            div {
                class: "flex flex-col sm:flex-row gap-3",
                label {
                    class: "form-control w-full",
                    span { class: "label-text", "Loan date *" }
                    input {
                        r#type: "date",
                        class: date_input_class,
                        value: start_value,
                        oninput: move |evt| fields.write().set_start_date(parse_iso_date(&evt.value())),
                    }
                }
                label {
                    class: "form-control w-full",
                    span { class: "label-text", "Return date *" }
                    input {
                        r#type: "date",
                        class: date_input_class,
                        value: end_value,
                        oninput: move |evt| fields.write().set_end_date(parse_iso_date(&evt.value())),
                    }
                }
            }
            if let Some(date_error) = date_error {
                div {
                    class: "alert alert-error py-2 text-sm",
                    span { "{date_error}" }
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
