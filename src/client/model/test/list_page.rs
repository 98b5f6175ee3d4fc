use super::*;

/// Tests confirming a pending delete.
///
/// Verifies that the selected id is yielded exactly once even if confirm is
/// pressed again while the delete runs, and that finishing clears it.
///
/// Expected: one id, then idle list
#[test]
fn confirm_delete_yields_id_once() {
    let mut state = ListPageState::<ClientDto, ()>::default();
    state.request_delete(7);

    assert_eq!(state.status(false), PageStatus::DeleteConfirmPending);
    assert_eq!(state.pending_delete(), Some(7));

    assert_eq!(state.confirm_delete(), Some(7));
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.status(false), PageStatus::Loading);

    state.finish_delete();
    assert_eq!(state.pending_delete(), None);
    assert_eq!(state.status(false), PageStatus::IdleList);
}

/// Tests cancelling a pending delete.
///
/// Expected: no id to delete, pending id cleared
#[test]
fn cancel_delete_discards_id() {
    let mut state = ListPageState::<ClientDto, ()>::default();
    state.request_delete(7);

    state.cancel_delete();

    assert_eq!(state.pending_delete(), None);
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(*state.dialog(), Dialog::Closed);
}

/// Tests opening the edit dialog with the selected row.
///
/// Expected: EditOpen pre-seeded with the record, closes back to idle
#[test]
fn edit_dialog_holds_selected_record() {
    let mut state = ListPageState::<ClientDto, ()>::default();
    state.open_edit(client(3, "Ana"));

    assert_eq!(state.status(false), PageStatus::EditOpen);
    assert_eq!(state.editing(), Some(&client(3, "Ana")));
    assert_eq!(state.editing().map(|c| c.name.as_str()), Some("Ana"));

    state.close_dialog();
    assert_eq!(state.status(false), PageStatus::IdleList);
}

/// Tests that only the idle list opens dialogs.
///
/// Expected: create ignored while a delete is pending
#[test]
fn dialogs_open_from_idle_only() {
    let mut state = ListPageState::<ClientDto, ()>::default();
    state.request_delete(1);
    state.open_create();

    assert_eq!(state.status(false), PageStatus::DeleteConfirmPending);

    state.cancel_delete();
    state.open_create();
    assert_eq!(state.status(false), PageStatus::CreateOpen);
    assert_eq!(state.status(true), PageStatus::Loading);
}

/// Tests that filter changes restart at the first page.
///
/// Verifies game, client and date filters each reset the page index and that
/// unset filters are left out of the search body.
///
/// Expected: page 0 after every change
#[test]
fn filter_change_resets_page() {
    let mut state = ListPageState::<ClientDto, LoanFilter>::new(5);
    let mut filter = LoanFilter::default();

    state.set_page(3);
    filter.game_id = Some(1);
    state.set_filter(filter.clone());
    assert_eq!(state.pageable().page_number, 0);

    state.set_page(2);
    filter.client_id = Some(4);
    state.set_filter(filter.clone());
    assert_eq!(state.pageable().page_number, 0);

    state.set_page(1);
    filter.date = Some(date(2024, 1, 3));
    state.set_filter(filter.clone());
    assert_eq!(state.pageable().page_number, 0);

    filter.game_id = None;
    filter.date = None;
    state.set_filter(filter);
    let body = serde_json::to_value(state.filter().to_search(state.pageable())).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "idClient": 4,
            "pageable": { "pageNumber": 0, "pageSize": 5 }
        })
    );
}

/// Tests clearing filters and changing the page size.
///
/// Expected: default filter, page 0, new size kept
#[test]
fn clear_filter_and_page_size_reset_page() {
    let mut state = ListPageState::<ClientDto, LoanFilter>::new(5);
    state.set_filter(LoanFilter {
        client_id: Some(4),
        ..LoanFilter::default()
    });
    state.set_page(2);

    state.clear_filter();
    assert_eq!(*state.filter(), LoanFilter::default());
    assert_eq!(state.pageable().page_number, 0);

    state.set_page(4);
    state.set_page_size(25);
    assert_eq!(state.pageable().page_number, 0);
    assert_eq!(state.pageable().page_size, 25);
}

/// Tests mapping the game filter to query parameters.
///
/// Expected: blank title dropped, category kept
#[test]
fn game_filter_drops_blank_title() {
    let filter = GameFilter {
        title: "   ".to_string(),
        category_id: Some(2),
    };

    let dto = filter.to_dto();
    assert_eq!(dto.title, None);
    assert_eq!(dto.id_category, Some(2));
    assert_eq!(
        dto.query_pairs(),
        vec![("idCategory".to_string(), "2".to_string())]
    );
}
