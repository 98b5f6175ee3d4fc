use crate::{
    client::model::error::ApiError,
    model::game::{GameDto, GameFilterDto},
};

use super::{
    query::{Mutation, Query, QueryClient, Tag},
    transport::{ApiRequest, Transport},
};

/// Get games matching the optional title and category filters
pub async fn get_games<T: Transport + 'static>(
    client: &QueryClient<T>,
    filter: &GameFilterDto,
) -> Result<Vec<GameDto>, ApiError> {
    let query = Query::new(
        "getGames",
        Tag::Game,
        filter,
        ApiRequest::get("game").query(filter.query_pairs()),
    )?;

    client.query(query).await
}

/// Create a game, or update it when it already has an id
pub async fn save_game<T: Transport + 'static>(
    client: &QueryClient<T>,
    game: &GameDto,
) -> Result<(), ApiError> {
    let request = match game.id {
        Some(id) => ApiRequest::put(format!("game/{}", id)),
        None => ApiRequest::put("game"),
    }
    .json(game)?;

    client
        .mutate(Mutation::new(request, &[Tag::Game]))
        .await
        .map(|_| ())
}
