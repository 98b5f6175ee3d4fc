use crate::{
    client::model::error::ApiError,
    model::loan::{LoanDto, LoanSearchDto, PaginatedLoansDto},
};

use super::{
    query::{Mutation, Query, QueryClient, Tag},
    transport::{ApiRequest, Transport},
};

/// Get every loan, unpaginated
pub async fn get_all_loans<T: Transport + 'static>(
    client: &QueryClient<T>,
) -> Result<Vec<LoanDto>, ApiError> {
    let query = Query::new("getAllLoans", Tag::Loan, &(), ApiRequest::get("loan"))?;

    client.query(query).await
}

/// Get one page of loans matching the game, client and date filters that are set
pub async fn get_loans<T: Transport + 'static>(
    client: &QueryClient<T>,
    search: &LoanSearchDto,
) -> Result<PaginatedLoansDto, ApiError> {
    let query = Query::new(
        "getLoans",
        Tag::Loan,
        search,
        ApiRequest::post("loan").json(search)?,
    )?;

    client.query(query).await
}

/// Create a loan
pub async fn create_loan<T: Transport + 'static>(
    client: &QueryClient<T>,
    loan: &LoanDto,
) -> Result<(), ApiError> {
    let request = ApiRequest::put("loan").json(loan)?;

    client
        .mutate(Mutation::new(request, &[Tag::Loan]))
        .await
        .map(|_| ())
}

/// Delete a loan
pub async fn delete_loan<T: Transport + 'static>(
    client: &QueryClient<T>,
    loan_id: i64,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(format!("loan/{}", loan_id));

    client
        .mutate(Mutation::new(request, &[Tag::Loan]))
        .await
        .map(|_| ())
}
