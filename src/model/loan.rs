use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pagination::{PageDto, PageableDto};

/// Game reference embedded in a loan, with the denormalized title for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanGameDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

/// Client reference embedded in a loan, with the denormalized name for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanClientDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub game: Option<LoanGameDto>,
    #[serde(default)]
    pub client: Option<LoanClientDto>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LoanDto {
    pub fn game_title(&self) -> &str {
        self.game.as_ref().map(|g| g.title.as_str()).unwrap_or_default()
    }

    pub fn client_name(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or_default()
    }
}

/// Body of `POST /loan`.
///
/// Filters that are not set are omitted from the JSON body, never sent as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSearchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_game: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_client: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub pageable: PageableDto,
}

pub type PaginatedLoansDto = PageDto<LoanDto>;
