use crate::{client::model::error::ApiError, model::client::ClientDto};

use super::{
    query::{Mutation, Query, QueryClient, Tag},
    transport::{ApiRequest, Transport},
};

/// Loans embed the client name, so client writes also invalidate loans
const CLIENT_WRITE_TAGS: &[Tag] = &[Tag::Client, Tag::Loan];

/// Get every client
pub async fn get_clients<T: Transport + 'static>(
    client: &QueryClient<T>,
) -> Result<Vec<ClientDto>, ApiError> {
    let query = Query::new("getClients", Tag::Client, &(), ApiRequest::get("client"))?;

    client.query(query).await
}

/// Create a client, or update it when it already has an id
pub async fn save_client<T: Transport + 'static>(
    client: &QueryClient<T>,
    record: &ClientDto,
) -> Result<(), ApiError> {
    let request = match record.id {
        Some(id) => ApiRequest::put(format!("client/{}", id)),
        None => ApiRequest::put("client"),
    }
    .json(record)?;

    client
        .mutate(Mutation::new(request, CLIENT_WRITE_TAGS))
        .await
        .map(|_| ())
}

/// Delete a client
pub async fn delete_client<T: Transport + 'static>(
    client: &QueryClient<T>,
    client_id: i64,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(format!("client/{}", client_id));

    client
        .mutate(Mutation::new(request, CLIENT_WRITE_TAGS))
        .await
        .map(|_| ())
}
