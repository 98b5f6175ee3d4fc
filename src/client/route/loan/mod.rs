mod loan_filter;
mod loan_modal;

use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            client::get_clients,
            game::get_games,
            loan::{create_loan, delete_loan, get_loans},
            Tag,
        },
        component::{ConfirmationModal, EmptyState, Page, Pagination, PaginationData, Section},
        constant::SITE_NAME,
        model::{
            cache::Cache,
            filter::LoanFilter,
            list_page::{Dialog, ListPageState},
            message::Operation,
        },
        store::{use_api_query, use_mutation, NotificationContext},
    },
    model::{
        game::GameFilterDto,
        loan::{LoanDto, PaginatedLoansDto},
    },
};

use super::new_button::NewButton;

use loan_filter::LoanFilterBar;
use loan_modal::LoanModal;

type LoanPageState = ListPageState<LoanDto, LoanFilter>;

#[component]
pub fn LoanPage() -> Element {
    let mut state = use_signal(LoanPageState::default);
    let mut notifications = use_context::<NotificationContext>();

    let search = use_memo(move || {
        let state = state.read();
        state.filter().to_search(state.pageable())
    });

    let loans = use_api_query("loans", Tag::Loan, move |api| {
        let search = search();
        async move { get_loans(&api, &search).await }
    });
    let games = use_api_query("loan-games", Tag::Game, |api| async move {
        get_games(&api, &GameFilterDto::default()).await
    });
    let clients = use_api_query("loan-clients", Tag::Client, |api| async move {
        get_clients(&api).await
    });

    let mut create = use_mutation(
        "create-loan",
        |api, loan: LoanDto| async move { create_loan(&api, &loan).await },
        move |_, result| notifications.outcome(Operation::Create, "loan", &result),
    );

    let mut delete = use_mutation(
        "delete-loan",
        |api, loan_id: i64| async move { delete_loan(&api, loan_id).await },
        move |_, result| {
            state.write().finish_delete();
            notifications.outcome(Operation::Delete, "loan", &result);
        },
    );

    let cache = Cache::from_result(loans.read().as_ref());
    let games = Cache::from_result(games.read().as_ref())
        .data()
        .cloned()
        .unwrap_or_default();
    let clients = Cache::from_result(clients.read().as_ref())
        .data()
        .cloned()
        .unwrap_or_default();
    let dialog = state.read().dialog().clone();
    let filter = state.read().filter().clone();

    rsx! {
        Title { "Loans | {SITE_NAME}" }
        Page {
            Section {
                title: "Loans".to_string(),
                actions: rsx!(
                    NewButton::<LoanDto, LoanFilter> { label: "New loan".to_string(), state }
                ),
                LoanFilterBar {
                    filter,
                    games: games.clone(),
                    clients: clients.clone(),
                    on_change: move |filter: LoanFilter| state.write().set_filter(filter),
                    on_clear: move |_| state.write().clear_filter(),
                }
                {match cache {
                    Cache::Fetched(page) => rsx!(
                        LoansTable { page, state }
                    ),
                    Cache::Error(err) => rsx!(
                        div {
                            class: "alert alert-error",
                            span { "Error loading loans: {err.message}" }
                        }
                    ),
                    _ => rsx!(),
                }}
            }
        }

        LoanModal {
            open: matches!(dialog, Dialog::Create),
            games,
            clients,
            on_cancel: move |_| state.write().close_dialog(),
            on_submit: move |loan: LoanDto| {
                state.write().close_dialog();
                create.run(loan);
            },
        }

        ConfirmationModal {
            open: matches!(dialog, Dialog::ConfirmDelete(_)),
            title: "Delete loan".to_string(),
            message: rsx!(
                p {
                    class: "py-4",
                    "Are you sure you want to delete this loan? This action cannot be undone."
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: state.read().is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                let loan_id = state.write().confirm_delete();
                if let Some(loan_id) = loan_id {
                    delete.run(loan_id);
                }
            },
            on_cancel: move |_| state.write().cancel_delete(),
        }
    }
}

#[component]
fn LoansTable(page: PaginatedLoansDto, mut state: Signal<LoanPageState>) -> Element {
    let data = PaginationData::new(state.read().pageable(), page.total_elements);

    if page.content.is_empty() && !data.has_previous() {
        return rsx!(EmptyState { message: "No loans match the filter".to_string() });
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Identifier" }
                        th { "Game" }
                        th { "Client" }
                        th { "Loan date" }
                        th { "Return date" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for loan in page.content {
                        {
                            let id = loan.id.unwrap_or_default();
                            let game = loan.game_title().to_string();
                            let client = loan.client_name().to_string();
                            let start = loan.start_date.format("%d/%m/%Y").to_string();
                            let end = loan.end_date.format("%d/%m/%Y").to_string();
                            rsx! {
                                tr {
                                    key: "{id}",
                                    td { "{id}" }
                                    td { "{game}" }
                                    td { "{client}" }
                                    td { "{start}" }
                                    td { "{end}" }
                                    td {
                                        div {
                                            class: "flex justify-end",
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| state.write().request_delete(id),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Pagination {
            data,
            on_page_change: move |page_number| state.write().set_page(page_number),
            on_per_page_change: move |page_size| state.write().set_page_size(page_size),
        }
    )
}
