use serde::{Deserialize, Serialize};

use super::{author::AuthorDto, category::CategoryDto};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub age: i32,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub authors: Vec<AuthorDto>,
}

impl GameDto {
    /// Comma separated author names for table cells.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Query-string filter for `GET /game`.
///
/// Unset filters are left out of the query string entirely so the backend
/// applies no restriction on that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFilterDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_category: Option<i64>,
}

impl GameFilterDto {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("title".to_string(), title.to_string()));
        }
        if let Some(id_category) = self.id_category {
            pairs.push(("idCategory".to_string(), id_category.to_string()));
        }
        pairs
    }
}
