use serde::{Deserialize, Serialize};

use super::pagination::PageDto;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

pub type PaginatedAuthorsDto = PageDto<AuthorDto>;
