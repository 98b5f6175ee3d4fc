use super::*;

/// Tests a return date before the start date.
///
/// Expected: blocking EndBeforeStart error
#[test]
fn rejects_end_before_start() {
    let error = validate_loan_period(Some(date(2024, 1, 1)), Some(date(2023, 12, 31)));

    assert_eq!(error, Some(LoanPeriodError::EndBeforeStart));
    assert_eq!(
        error.unwrap().to_string(),
        "return date cannot precede start date"
    );
}

/// Tests a period longer than fourteen days.
///
/// Expected: blocking TooLong error for 19 days
#[test]
fn rejects_period_over_fourteen_days() {
    let error = validate_loan_period(Some(date(2024, 1, 1)), Some(date(2024, 1, 20)));

    assert_eq!(error, Some(LoanPeriodError::TooLong));
    assert_eq!(error.unwrap().to_string(), "period exceeds 14 days");
}

/// Tests the period boundaries.
///
/// Expected: same day and exactly 14 days are valid, 15 is not
#[test]
fn accepts_period_boundaries() {
    assert_eq!(validate_loan_period(Some(date(2024, 1, 1)), Some(date(2024, 1, 1))), None);
    assert_eq!(validate_loan_period(Some(date(2024, 1, 1)), Some(date(2024, 1, 15))), None);
    assert_eq!(
        validate_loan_period(Some(date(2024, 1, 1)), Some(date(2024, 1, 16))),
        Some(LoanPeriodError::TooLong)
    );
}

/// Tests a valid period with game and client chosen.
///
/// Verifies that submit stays disabled until game and client are selected and
/// is enabled afterwards for a 9 day loan.
///
/// Expected: no error, submit enabled, ISO payload
#[test]
fn enables_submit_for_valid_loan() {
    let mut form = LoanForm::default();
    form.set_start_date(Some(date(2024, 1, 1)));
    form.set_end_date(Some(date(2024, 1, 10)));

    assert_eq!(form.date_error(), None);
    assert!(!form.can_submit());

    form.game_id = Some(1);
    form.client_id = Some(2);
    assert!(form.can_submit());

    let payload = form.to_payload().unwrap();
    assert_eq!(payload.id, None);
    assert_eq!(payload.game.unwrap().id, 1);
    assert_eq!(payload.client.unwrap().id, 2);
    assert_eq!(payload.start_date.to_string(), "2024-01-01");
    assert_eq!(payload.end_date.to_string(), "2024-01-10");
}

/// Tests that changing either date re-checks the whole pair.
///
/// Verifies that an error set by the end date is cleared by moving the start
/// date, and set again by moving the end date.
///
/// Expected: error follows the current pair
#[test]
fn rechecks_on_either_date_change() {
    let mut form = LoanForm::default();
    form.game_id = Some(1);
    form.client_id = Some(2);

    form.set_end_date(Some(date(2024, 1, 20)));
    assert_eq!(form.date_error(), None);

    form.set_start_date(Some(date(2024, 1, 1)));
    assert_eq!(form.date_error(), Some(LoanPeriodError::TooLong));
    assert!(!form.can_submit());
    assert!(form.to_payload().is_none());

    form.set_start_date(Some(date(2024, 1, 10)));
    assert_eq!(form.date_error(), None);
    assert!(form.can_submit());

    form.set_end_date(Some(date(2024, 1, 9)));
    assert_eq!(form.date_error(), Some(LoanPeriodError::EndBeforeStart));

    form.set_end_date(None);
    assert_eq!(form.date_error(), None);
    assert!(!form.can_submit());
    assert_eq!(form.start_date(), Some(date(2024, 1, 10)));
    assert_eq!(form.end_date(), None);
}
