//! HTTP boundary of the API layer.
//!
//! Endpoint functions describe requests as plain [`ApiRequest`] values and hand
//! them to a [`Transport`]. The browser build sends them with `reqwasm`; tests
//! substitute a recording mock.

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::model::error::ApiError;

use super::helper::serialize_json;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", method)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the backend origin, e.g. `loan/3`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        self.body = Some(serialize_json(payload)?);
        Ok(self)
    }
}

/// Sends one request and yields the decoded JSON body, `None` for empty bodies.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        (**self).send(request).await
    }
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(feature = "web")]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        use reqwasm::http::Request;

        use super::helper::{build_url, parse_response};

        let url = build_url(&self.base_url, &request);
        let http_request = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let http_request = match &request.body {
            Some(body) => http_request
                .header("Content-Type", "application/json; charset=UTF-8")
                .body(body.to_string()),
            None => http_request,
        };

        let response = http_request.send().await.map_err(|e| {
            ApiError::transport(format!("Failed to send request: {}", e))
        })?;

        let status = response.status() as u64;
        let text = response.text().await.unwrap_or_default();

        parse_response(status, &text)
    }
}

#[cfg(not(feature = "web"))]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        Err(ApiError::transport(format!(
            "No HTTP transport available for {} {} without the `web` feature",
            request.method, request.path
        )))
    }
}
