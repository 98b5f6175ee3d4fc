//! Create/edit dialog state and validation.
//!
//! Forms hold raw user input and produce a normalized payload only once every
//! required field is filled in and no validation error is set. They never talk
//! to the network; the page submits the payload.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{
    author::AuthorDto,
    category::CategoryDto,
    client::ClientDto,
    game::GameDto,
    loan::{LoanClientDto, LoanDto, LoanGameDto},
};

/// Longest loan allowed, in days between start and return date.
pub const MAX_LOAN_DAYS: i64 = 14;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanPeriodError {
    #[error("return date cannot precede start date")]
    EndBeforeStart,
    #[error("period exceeds 14 days")]
    TooLong,
}

/// Checks a loan period; `None` when either date is not chosen yet.
pub fn validate_loan_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<LoanPeriodError> {
    let (start, end) = (start?, end?);

    if end < start {
        Some(LoanPeriodError::EndBeforeStart)
    } else if (end - start).num_days() > MAX_LOAN_DAYS {
        Some(LoanPeriodError::TooLong)
    } else {
        None
    }
}

/// Parses the value of an `<input type="date">`, empty meaning unset.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses the value of a `<select>` holding an id, empty meaning unset.
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Form of the single-field entities: categories, authors and clients.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameForm {
    pub id: Option<i64>,
    pub name: String,
}

impl NameForm {
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_category(&self) -> Option<CategoryDto> {
        self.can_submit().then(|| CategoryDto {
            id: self.id,
            name: self.name.trim().to_string(),
        })
    }

    pub fn to_author(&self) -> Option<AuthorDto> {
        self.can_submit().then(|| AuthorDto {
            id: self.id,
            name: self.name.trim().to_string(),
        })
    }

    pub fn to_client(&self) -> Option<ClientDto> {
        self.can_submit().then(|| ClientDto {
            id: self.id,
            name: self.name.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameForm {
    pub id: Option<i64>,
    pub title: String,
    /// Raw text of the age input
    pub age: String,
    pub category_id: Option<i64>,
    pub author_ids: Vec<i64>,
}

impl GameForm {
    pub fn age_error(&self) -> Option<&'static str> {
        let age = self.age.trim();
        if age.is_empty() {
            return None;
        }
        match age.parse::<i32>() {
            Ok(value) if value >= 0 => None,
            _ => Some("Age must be a whole number"),
        }
    }

    pub fn toggle_author(&mut self, author_id: i64) {
        if let Some(pos) = self.author_ids.iter().position(|id| *id == author_id) {
            self.author_ids.remove(pos);
        } else {
            self.author_ids.push(author_id);
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.age.trim().is_empty()
            && self.age_error().is_none()
            && self.category_id.is_some()
            && !self.author_ids.is_empty()
    }

    /// Builds the game to save. Names of the referenced category and authors
    /// are looked up in `categories` and `authors` when available.
    pub fn to_payload(&self, categories: &[CategoryDto], authors: &[AuthorDto]) -> Option<GameDto> {
        if !self.can_submit() {
            return None;
        }
        let category_id = self.category_id?;
        let age = self.age.trim().parse::<i32>().ok()?;

        let category = categories
            .iter()
            .find(|c| c.id == Some(category_id))
            .cloned()
            .unwrap_or(CategoryDto {
                id: Some(category_id),
                name: String::new(),
            });
        let authors = self
            .author_ids
            .iter()
            .map(|author_id| {
                authors
                    .iter()
                    .find(|a| a.id == Some(*author_id))
                    .cloned()
                    .unwrap_or(AuthorDto {
                        id: Some(*author_id),
                        name: String::new(),
                    })
            })
            .collect();

        Some(GameDto {
            id: self.id,
            title: self.title.trim().to_string(),
            age,
            category: Some(category),
            authors,
        })
    }
}

impl From<&GameDto> for GameForm {
    fn from(game: &GameDto) -> Self {
        Self {
            id: game.id,
            title: game.title.clone(),
            age: game.age.to_string(),
            category_id: game.category.as_ref().and_then(|c| c.id),
            author_ids: game.authors.iter().filter_map(|a| a.id).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanForm {
    pub game_id: Option<i64>,
    pub client_id: Option<i64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    date_error: Option<LoanPeriodError>,
}

impl LoanForm {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn date_error(&self) -> Option<LoanPeriodError> {
        self.date_error
    }

    /// Both setters re-check the full current pair of dates.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        self.date_error = validate_loan_period(self.start_date, self.end_date);
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
        self.date_error = validate_loan_period(self.start_date, self.end_date);
    }

    pub fn can_submit(&self) -> bool {
        self.game_id.is_some()
            && self.client_id.is_some()
            && self.start_date.is_some()
            && self.end_date.is_some()
            && self.date_error.is_none()
    }

    /// Loan to create: referenced game and client by id only, ISO dates.
    pub fn to_payload(&self) -> Option<LoanDto> {
        if !self.can_submit() {
            return None;
        }

        Some(LoanDto {
            id: None,
            game: Some(LoanGameDto {
                id: self.game_id?,
                title: String::new(),
            }),
            client: Some(LoanClientDto {
                id: self.client_id?,
                name: String::new(),
            }),
            start_date: self.start_date?,
            end_date: self.end_date?,
        })
    }
}
