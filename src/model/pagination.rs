use serde::{Deserialize, Serialize};

/// Zero-based page request understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableDto {
    pub page_number: u64,
    pub page_size: u64,
}

impl Default for PageableDto {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: 5,
        }
    }
}

/// Body of the paginated `POST` list endpoints that take no filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageableRequestDto {
    pub pageable: PageableDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
}

impl<T> Default for PageDto<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
        }
    }
}
