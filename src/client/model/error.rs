use crate::model::api::ErrorDto;

/// Where in the request pipeline an [`ApiError`] originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (network failure, CORS, ...).
    Transport,
    /// The backend answered with a non-2xx status.
    Status,
    /// A request or response body could not be (de)serialized.
    Decode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    pub kind: ApiErrorKind,
    /// `msg` of the structured backend error body, if one was returned
    pub backend_msg: Option<String>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            kind: ApiErrorKind::Transport,
            backend_msg: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            kind: ApiErrorKind::Decode,
            backend_msg: None,
        }
    }

    /// Builds the error for a non-2xx response from its raw body text.
    ///
    /// A body of the form `{ "msg": "..." }` is treated as structured and its
    /// message kept verbatim; anything else becomes the plain message.
    pub fn from_status(status: u64, body: &str) -> Self {
        match serde_json::from_str::<ErrorDto>(body) {
            Ok(error_dto) => Self {
                status,
                message: error_dto.msg.clone(),
                kind: ApiErrorKind::Status,
                backend_msg: Some(error_dto.msg),
            },
            Err(_) => Self {
                status,
                message: if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.to_string()
                },
                kind: ApiErrorKind::Status,
                backend_msg: None,
            },
        }
    }

    /// Message to show the user: the backend's own message when it sent a
    /// structured body, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_msg
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
