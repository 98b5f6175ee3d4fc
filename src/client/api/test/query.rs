use super::*;

use crate::model::loan::PaginatedLoansDto;

/// Tests identical concurrent queries sharing one request.
///
/// Verifies that two reads of the same key issued while the first is still
/// in flight produce a single HTTP call and both callers get the same page.
///
/// Expected: one request, equal results
#[tokio::test]
async fn dedups_identical_in_flight_queries() {
    let client = QueryClient::new(MockTransport::new().respond_after(2, page_body(&[1, 2])));

    let (first, second) = futures_util::join!(
        client.query::<PaginatedLoansDto>(loans_query(0)),
        client.query::<PaginatedLoansDto>(loans_query(0)),
    );

    assert_eq!(client.transport().request_count(), 1);
    let first = first.unwrap();
    assert_eq!(first, second.unwrap());
    assert_eq!(first.content.len(), 2);
}

/// Tests serving a fresh cache entry without I/O.
///
/// Expected: second read issues no request
#[tokio::test]
async fn serves_fresh_entry_from_cache() {
    let client = QueryClient::new(MockTransport::new().respond(page_body(&[1])));

    let first: PaginatedLoansDto = client.query(loans_query(0)).await.unwrap();
    let second: PaginatedLoansDto = client.query(loans_query(0)).await.unwrap();

    assert_eq!(client.transport().request_count(), 1);
    assert_eq!(first, second);
}

/// Tests that different parameters are cached under different keys.
///
/// Expected: one request per page
#[tokio::test]
async fn caches_each_parameter_set_separately() {
    let client = QueryClient::new(
        MockTransport::new()
            .respond(page_body(&[1]))
            .respond(page_body(&[6])),
    );

    let page_0: PaginatedLoansDto = client.query(loans_query(0)).await.unwrap();
    let page_1: PaginatedLoansDto = client.query(loans_query(1)).await.unwrap();

    assert_eq!(client.transport().request_count(), 2);
    assert_eq!(page_0.content[0].id, Some(1));
    assert_eq!(page_1.content[0].id, Some(6));
}

/// Tests that failed queries are not cached.
///
/// Verifies that a read after a failed one goes back to the backend.
///
/// Expected: Err then Ok, two requests
#[tokio::test]
async fn does_not_cache_errors() {
    let client = QueryClient::new(
        MockTransport::new()
            .fail(ApiError::from_status(500, ""))
            .respond(json!([{ "id": 1, "name": "Ana" }])),
    );

    let failed = client
        .query::<Vec<crate::model::client::ClientDto>>(clients_query())
        .await;
    assert!(failed.is_err());
    assert!(client.cached::<Value>(&clients_query().key).is_none());
    assert!(!client.is_in_flight(&clients_query().key));

    let clients: Vec<crate::model::client::ClientDto> =
        client.query(clients_query()).await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(client.transport().request_count(), 2);
}

/// Tests discarding a superseded response that completes last.
///
/// A slow request is detached by an invalidation, a newer request for the same
/// key completes first, and then the slow one resolves.
///
/// Expected: the cache keeps the newer response
#[tokio::test]
async fn discards_stale_completion() {
    let client = QueryClient::new(
        MockTransport::new()
            .respond_after(5, page_body(&[1]))
            .respond_empty()
            .respond(page_body(&[1, 2])),
    );

    let (slow, newer) = futures_util::join!(
        client.query::<PaginatedLoansDto>(loans_query(0)),
        async {
            client
                .mutate(crate::client::api::query::Mutation::new(
                    ApiRequest::delete("loan/9"),
                    &[Tag::Loan],
                ))
                .await
                .unwrap();
            client.query::<PaginatedLoansDto>(loans_query(0)).await
        },
    );

    assert_eq!(client.transport().request_count(), 3);
    assert_eq!(slow.unwrap().content.len(), 1);
    assert_eq!(newer.unwrap().content.len(), 2);

    let cached: PaginatedLoansDto = client.cached(&loans_query(0).key).unwrap();
    assert_eq!(cached.content.len(), 2);
    assert_eq!(client.is_stale(&loans_query(0).key), Some(false));
}

/// Tests that a response issued before an invalidation is stored stale.
///
/// Expected: entry is cached but marked stale, next read refetches
#[tokio::test]
async fn stores_pre_invalidation_response_as_stale() {
    let client = QueryClient::new(
        MockTransport::new()
            .respond_after(3, page_body(&[1]))
            .respond(page_body(&[1, 2])),
    );

    let (first, _) = futures_util::join!(
        client.query::<PaginatedLoansDto>(loans_query(0)),
        async { client.invalidate(&[Tag::Loan]) },
    );

    assert!(first.is_ok());
    assert_eq!(client.is_stale(&loans_query(0).key), Some(true));

    let refreshed: PaginatedLoansDto = client.query(loans_query(0)).await.unwrap();
    assert_eq!(refreshed.content.len(), 2);
    assert_eq!(client.transport().request_count(), 2);
}
