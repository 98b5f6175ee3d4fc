use crate::{
    client::model::error::ApiError,
    model::{
        author::{AuthorDto, PaginatedAuthorsDto},
        pagination::{PageableDto, PageableRequestDto},
    },
};

use super::{
    query::{Mutation, Query, QueryClient, Tag},
    transport::{ApiRequest, Transport},
};

/// Games embed their authors, so author writes also invalidate games
const AUTHOR_WRITE_TAGS: &[Tag] = &[Tag::Author, Tag::Game];

/// Get every author, unpaginated (used by selectors)
pub async fn get_all_authors<T: Transport + 'static>(
    client: &QueryClient<T>,
) -> Result<Vec<AuthorDto>, ApiError> {
    let query = Query::new("getAllAuthors", Tag::Author, &(), ApiRequest::get("author"))?;

    client.query(query).await
}

/// Get one page of authors
pub async fn get_authors<T: Transport + 'static>(
    client: &QueryClient<T>,
    pageable: PageableDto,
) -> Result<PaginatedAuthorsDto, ApiError> {
    let body = PageableRequestDto { pageable };
    let query = Query::new(
        "getAuthors",
        Tag::Author,
        &body,
        ApiRequest::post("author").json(&body)?,
    )?;

    client.query(query).await
}

/// Create an author, or update it when it already has an id
pub async fn save_author<T: Transport + 'static>(
    client: &QueryClient<T>,
    author: &AuthorDto,
) -> Result<(), ApiError> {
    let request = match author.id {
        Some(id) => ApiRequest::put(format!("author/{}", id)),
        None => ApiRequest::put("author"),
    }
    .json(author)?;

    client
        .mutate(Mutation::new(request, AUTHOR_WRITE_TAGS))
        .await
        .map(|_| ())
}

/// Delete an author
pub async fn delete_author<T: Transport + 'static>(
    client: &QueryClient<T>,
    author_id: i64,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(format!("author/{}", author_id));

    client
        .mutate(Mutation::new(request, AUTHOR_WRITE_TAGS))
        .await
        .map(|_| ())
}
