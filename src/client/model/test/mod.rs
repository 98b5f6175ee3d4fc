use chrono::NaiveDate;

use crate::{
    client::model::{
        cache::Cache,
        error::ApiError,
        filter::{GameFilter, LoanFilter},
        form::{validate_loan_period, GameForm, LoanForm, LoanPeriodError, NameForm},
        list_page::{Dialog, ListPageState, PageStatus},
        message::Operation,
    },
    model::client::ClientDto,
};

mod list_page;
mod loan_form;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn client(id: i64, name: &str) -> ClientDto {
    ClientDto {
        id: Some(id),
        name: name.to_string(),
    }
}
