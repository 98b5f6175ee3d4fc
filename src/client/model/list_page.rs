//! Behaviour shared by every entity list page.
//!
//! A page owns one [`ListPageState`]: which dialog is open, the current filter
//! and the requested page. Views render from it and feed user actions back as
//! the transitions below; network calls stay in the page component.

use crate::model::pagination::PageableDto;

/// Dialog currently shown on top of the list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog<R> {
    #[default]
    Closed,
    Create,
    /// Edit form pre-filled with the selected record
    Edit(R),
    /// Delete confirmation holding the id of the selected record
    ConfirmDelete(i64),
}

/// What the page is doing, as seen by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    IdleList,
    Loading,
    CreateOpen,
    EditOpen,
    DeleteConfirmPending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListPageState<R, F> {
    dialog: Dialog<R>,
    filter: F,
    pageable: PageableDto,
    deleting: bool,
}

impl<R, F: Default> Default for ListPageState<R, F> {
    fn default() -> Self {
        Self::new(PageableDto::default().page_size)
    }
}

impl<R, F: Default> ListPageState<R, F> {
    pub fn new(page_size: u64) -> Self {
        Self {
            dialog: Dialog::Closed,
            filter: F::default(),
            pageable: PageableDto {
                page_number: 0,
                page_size,
            },
            deleting: false,
        }
    }

    /// Drops every filter; the list restarts at the first page.
    pub fn clear_filter(&mut self) {
        self.set_filter(F::default());
    }
}

impl<R, F> ListPageState<R, F> {
    pub fn dialog(&self) -> &Dialog<R> {
        &self.dialog
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn pageable(&self) -> PageableDto {
        self.pageable
    }

    /// Derived status; `in_flight` is true while any query or mutation of the
    /// page is running.
    pub fn status(&self, in_flight: bool) -> PageStatus {
        if in_flight || self.deleting {
            return PageStatus::Loading;
        }
        match self.dialog {
            Dialog::Closed => PageStatus::IdleList,
            Dialog::Create => PageStatus::CreateOpen,
            Dialog::Edit(_) => PageStatus::EditOpen,
            Dialog::ConfirmDelete(_) => PageStatus::DeleteConfirmPending,
        }
    }

    pub fn open_create(&mut self) {
        if matches!(self.dialog, Dialog::Closed) {
            self.dialog = Dialog::Create;
        }
    }

    pub fn open_edit(&mut self, record: R) {
        if matches!(self.dialog, Dialog::Closed) {
            self.dialog = Dialog::Edit(record);
        }
    }

    /// Record being edited, if the edit dialog is open.
    pub fn editing(&self) -> Option<&R> {
        match &self.dialog {
            Dialog::Edit(record) => Some(record),
            _ => None,
        }
    }

    /// Closes the create or edit dialog, on cancel as well as on submit.
    pub fn close_dialog(&mut self) {
        if matches!(self.dialog, Dialog::Create | Dialog::Edit(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        if matches!(self.dialog, Dialog::Closed) {
            self.dialog = Dialog::ConfirmDelete(id);
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match self.dialog {
            Dialog::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Yields the id to delete, once per confirmation; repeated confirms while
    /// the delete is running yield nothing.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        match self.dialog {
            Dialog::ConfirmDelete(id) if !self.deleting => {
                self.deleting = true;
                Some(id)
            }
            _ => None,
        }
    }

    /// Discards the pending id without deleting anything.
    pub fn cancel_delete(&mut self) {
        if !self.deleting && matches!(self.dialog, Dialog::ConfirmDelete(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    /// Called once the delete call settled, whatever its outcome.
    pub fn finish_delete(&mut self) {
        self.deleting = false;
        if matches!(self.dialog, Dialog::ConfirmDelete(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.pageable.page_number = 0;
    }

    pub fn set_page(&mut self, page_number: u64) {
        self.pageable.page_number = page_number;
    }

    pub fn set_page_size(&mut self, page_size: u64) {
        self.pageable.page_size = page_size;
        self.pageable.page_number = 0;
    }
}
