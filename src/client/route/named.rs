//! List page pieces shared by the entities that only carry a name:
//! categories, authors and clients.

use dioxus::prelude::*;
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::{
    client::{
        api::{author, category, client, ApiClient},
        component::ConfirmationModal,
        model::{
            error::ApiError,
            form::NameForm,
            list_page::{Dialog, ListPageState},
            message::Operation,
        },
        store::{use_mutation, MutationHandle, NotificationContext},
    },
    model::{author::AuthorDto, category::CategoryDto, client::ClientDto},
};

use super::name_modal::NameModal;

type Api = ApiClient;

pub trait NamedEntity: Clone + PartialEq + 'static {
    /// Lowercase singular used in messages and loading flags
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;
    fn name(&self) -> &str;
    fn from_form(form: &NameForm) -> Option<Self>;
    fn save(api: Api, record: Self) -> LocalBoxFuture<'static, Result<(), ApiError>>;
    fn delete(api: Api, id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>>;
}

impl NamedEntity for CategoryDto {
    const NAME: &'static str = "category";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_form(form: &NameForm) -> Option<Self> {
        form.to_category()
    }

    fn save(api: Api, record: Self) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { category::save_category(&api, &record).await }.boxed_local()
    }

    fn delete(api: Api, id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { category::delete_category(&api, id).await }.boxed_local()
    }
}

impl NamedEntity for AuthorDto {
    const NAME: &'static str = "author";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_form(form: &NameForm) -> Option<Self> {
        form.to_author()
    }

    fn save(api: Api, record: Self) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { author::save_author(&api, &record).await }.boxed_local()
    }

    fn delete(api: Api, id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { author::delete_author(&api, id).await }.boxed_local()
    }
}

impl NamedEntity for ClientDto {
    const NAME: &'static str = "client";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_form(form: &NameForm) -> Option<Self> {
        form.to_client()
    }

    fn save(api: Api, record: Self) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { client::save_client(&api, &record).await }.boxed_local()
    }

    fn delete(api: Api, id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { client::delete_client(&api, id).await }.boxed_local()
    }
}

pub type NamedPageState<E> = ListPageState<E, ()>;

/// Save and delete mutations of a named-entity page, reporting their outcome
/// as notifications.
pub fn use_named_mutations<E: NamedEntity>(
    mut state: Signal<NamedPageState<E>>,
) -> (MutationHandle<E>, MutationHandle<i64>) {
    let mut notifications = use_context::<NotificationContext>();

    let save = use_mutation(
        format!("save-{}", E::NAME),
        |api, record: E| E::save(api, record),
        move |record, result| {
            let operation = match record.id() {
                Some(_) => Operation::Update,
                None => Operation::Create,
            };
            notifications.outcome(operation, E::NAME, &result);
        },
    );

    let delete = use_mutation(
        format!("delete-{}", E::NAME),
        |api, id: i64| E::delete(api, id),
        move |_, result| {
            state.write().finish_delete();
            notifications.outcome(Operation::Delete, E::NAME, &result);
        },
    );

    (save, delete)
}

#[component]
pub fn NamedTable<E: NamedEntity>(rows: Vec<E>, mut state: Signal<NamedPageState<E>>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Identifier" }
                        th { "Name" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for record in rows {
                        {
                            let id = record.id().unwrap_or_default();
                            let name = record.name().to_string();
                            rsx! {
                                tr {
                                    key: "{id}",
                                    td { "{id}" }
                                    td { "{name}" }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm btn-primary",
                                                onclick: move |_| state.write().open_edit(record.clone()),
                                                "Edit"
                                            }
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
    )
}

/// Create/edit form and delete confirmation of a named-entity page.
#[component]
pub fn NamedDialogs<E: NamedEntity>(
    mut state: Signal<NamedPageState<E>>,
    mut save: MutationHandle<E>,
    mut delete: MutationHandle<i64>,
) -> Element {
    let dialog = state.read().dialog().clone();
    let initial = state
        .read()
        .editing()
        .map(|record| NameForm::new(record.id(), record.name()))
        .unwrap_or_default();
    let entity = E::NAME;
    let form_title = match initial.id {
        Some(_) => format!("Edit {}", entity),
        None => format!("New {}", entity),
    };

    rsx!(
        NameModal {
            open: matches!(dialog, Dialog::Create | Dialog::Edit(_)),
            title: form_title,
            initial,
            on_cancel: move |_| state.write().close_dialog(),
            on_submit: move |form: NameForm| {
                if let Some(record) = E::from_form(&form) {
                    state.write().close_dialog();
                    save.run(record);
                }
            },
        }

        ConfirmationModal {
            open: matches!(dialog, Dialog::ConfirmDelete(_)),
            title: format!("Delete {}", entity),
            message: rsx!(
                p {
                    class: "py-4",
                    "Are you sure you want to delete this {entity}? This action cannot be undone."
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: state.read().is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                let id = state.write().confirm_delete();
                if let Some(id) = id {
                    delete.run(id);
                }
            },
            on_cancel: move |_| state.write().cancel_delete(),
        }
    )
}
