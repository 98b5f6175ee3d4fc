mod game_filter;
mod game_modal;

use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            author::get_all_authors,
            category::get_categories,
            game::{get_games, save_game},
            Tag,
        },
        component::{EmptyState, Page, Section},
        constant::SITE_NAME,
        model::{
            cache::Cache,
            filter::GameFilter,
            form::GameForm,
            list_page::{Dialog, ListPageState},
            message::Operation,
        },
        store::{use_api_query, use_mutation, NotificationContext},
    },
    model::game::GameDto,
};

use super::new_button::NewButton;

use game_filter::GameFilterBar;
use game_modal::GameModal;

type GamePageState = ListPageState<GameDto, GameFilter>;

#[component]
pub fn GamePage() -> Element {
    let mut state = use_signal(GamePageState::default);
    let mut notifications = use_context::<NotificationContext>();

    let filter = use_memo(move || state.read().filter().to_dto());

    let games = use_api_query("games", Tag::Game, move |api| {
        let filter = filter();
        async move { get_games(&api, &filter).await }
    });
    let categories = use_api_query("game-categories", Tag::Category, |api| async move {
        get_categories(&api).await
    });
    let authors = use_api_query("game-authors", Tag::Author, |api| async move {
        get_all_authors(&api).await
    });

    let mut save = use_mutation(
        "save-game",
        |api, game: GameDto| async move { save_game(&api, &game).await },
        move |game, result| {
            let operation = match game.id {
                Some(_) => Operation::Update,
                None => Operation::Create,
            };
            notifications.outcome(operation, "game", &result);
        },
    );

    let cache = Cache::from_result(games.read().as_ref());
    let categories = Cache::from_result(categories.read().as_ref())
        .data()
        .cloned()
        .unwrap_or_default();
    let authors = Cache::from_result(authors.read().as_ref())
        .data()
        .cloned()
        .unwrap_or_default();
    let dialog = state.read().dialog().clone();
    let initial = state.read().editing().map(GameForm::from).unwrap_or_default();

    rsx! {
        Title { "Catalog | {SITE_NAME}" }
        Page {
            Section {
                title: "Catalog".to_string(),
                actions: rsx!(
                    NewButton::<GameDto, GameFilter> { label: "New game".to_string(), state }
                ),
                GameFilterBar {
                    categories: categories.clone(),
                    on_filter: move |filter: GameFilter| state.write().set_filter(filter),
                    on_clear: move |_| state.write().clear_filter(),
                }
                {match cache {
                    Cache::Fetched(games) => rsx!(
                        if games.is_empty() {
                            EmptyState { message: "No games match the filter".to_string() }
                        } else {
                            div {
                                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                for game in games {
                                    GameCard {
                                        key: "{game.id.unwrap_or_default()}",
                                        game: game.clone(),
                                        on_select: move |game: GameDto| state.write().open_edit(game),
                                    }
                                }
                            }
                        }
                    ),
                    Cache::Error(err) => rsx!(
                        div {
                            class: "alert alert-error",
                            span { "Error loading games: {err.message}" }
                        }
                    ),
                    _ => rsx!(),
                }}
            }
        }

        GameModal {
            open: matches!(dialog, Dialog::Create | Dialog::Edit(_)),
            initial,
            categories,
            authors,
            on_cancel: move |_| state.write().close_dialog(),
            on_submit: move |game: GameDto| {
                state.write().close_dialog();
                save.run(game);
            },
        }
    }
}

#[component]
fn GameCard(game: GameDto, on_select: EventHandler<GameDto>) -> Element {
    let category = game
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let authors = game.author_names();
    let selected = game.clone();

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm cursor-pointer hover:shadow-md",
            onclick: move |_| on_select.call(selected.clone()),
            div {
                class: "card-body p-4",
                h3 { class: "card-title text-base", "{game.title}" }
                p { class: "text-sm", span { class: "opacity-70", "Age: " } "+{game.age}" }
                p { class: "text-sm", span { class: "opacity-70", "Category: " } "{category}" }
                p { class: "text-sm", span { class: "opacity-70", "Authors: " } "{authors}" }
            }
        }
    )
}
