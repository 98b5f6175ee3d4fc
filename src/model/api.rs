use serde::{Deserialize, Serialize};

/// Structured error body returned by the backend on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub msg: String,
}
