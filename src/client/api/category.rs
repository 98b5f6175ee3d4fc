use crate::{client::model::error::ApiError, model::category::CategoryDto};

use super::{
    query::{Mutation, Query, QueryClient, Tag},
    transport::{ApiRequest, Transport},
};

/// Get every category
pub async fn get_categories<T: Transport + 'static>(
    client: &QueryClient<T>,
) -> Result<Vec<CategoryDto>, ApiError> {
    let query = Query::new(
        "getCategories",
        Tag::Category,
        &(),
        ApiRequest::get("category"),
    )?;

    client.query(query).await
}

/// Create a category, or update it when it already has an id
pub async fn save_category<T: Transport + 'static>(
    client: &QueryClient<T>,
    category: &CategoryDto,
) -> Result<(), ApiError> {
    let request = match category.id {
        Some(id) => ApiRequest::put(format!("category/{}", id)),
        None => ApiRequest::put("category"),
    }
    .json(category)?;

    client
        .mutate(Mutation::new(request, &[Tag::Category]))
        .await
        .map(|_| ())
}

/// Delete a category
pub async fn delete_category<T: Transport + 'static>(
    client: &QueryClient<T>,
    category_id: i64,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(format!("category/{}", category_id));

    client
        .mutate(Mutation::new(request, &[Tag::Category]))
        .await
        .map(|_| ())
}
