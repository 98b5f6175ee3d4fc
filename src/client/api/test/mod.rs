use serde_json::{json, Value};

use crate::client::{
    api::{
        query::{Query, QueryClient, Tag},
        transport::{ApiRequest, Method},
    },
    model::error::ApiError,
    test_utils::MockTransport,
};

mod helper;
mod query;

fn loans_query(page_number: u64) -> Query {
    let body = json!({ "pageable": { "pageNumber": page_number, "pageSize": 5 } });
    Query::new(
        "getLoans",
        Tag::Loan,
        &body,
        ApiRequest::post("loan").json(&body).unwrap(),
    )
    .unwrap()
}

fn clients_query() -> Query {
    Query::new("getClients", Tag::Client, &(), ApiRequest::get("client")).unwrap()
}

fn page_body(ids: &[i64]) -> Value {
    let content: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "game": { "id": 1, "title": "Catan" },
                "client": { "id": 2, "name": "Ana" },
                "startDate": "2024-01-01",
                "endDate": "2024-01-05"
            })
        })
        .collect();
    json!({ "content": content, "totalElements": ids.len() })
}
