use crate::client::model::error::ApiError;

/// View-side state of one query, as rendered by a page.
#[derive(Clone, Default, Debug, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T: Clone> Cache<T> {
    /// Builds the state from the output of a resource: `None` while the
    /// first request is pending.
    pub fn from_result(result: Option<&Result<T, ApiError>>) -> Self {
        match result {
            None => Cache::Loading,
            Some(Ok(data)) => Cache::Fetched(data.clone()),
            Some(Err(err)) => Cache::Error(err.clone()),
        }
    }
}

impl<T> Cache<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}
