//! Filter state of the filterable list pages and its mapping to request
//! parameters. Unset filters map to `None` and are never sent.

use chrono::NaiveDate;

use crate::model::{game::GameFilterDto, loan::LoanSearchDto, pagination::PageableDto};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameFilter {
    pub title: String,
    pub category_id: Option<i64>,
}

impl GameFilter {
    pub fn to_dto(&self) -> GameFilterDto {
        let title = self.title.trim();
        GameFilterDto {
            title: (!title.is_empty()).then(|| title.to_string()),
            id_category: self.category_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanFilter {
    pub game_id: Option<i64>,
    pub client_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

impl LoanFilter {
    pub fn to_search(&self, pageable: PageableDto) -> LoanSearchDto {
        LoanSearchDto {
            id_game: self.game_id,
            id_client: self.client_id,
            date: self.date,
            pageable,
        }
    }
}
