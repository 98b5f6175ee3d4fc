use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::model::{error::ApiError, message::Operation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Ok,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub kind: NotificationKind,
}

/// Single notification slot: a new message replaces the one on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    current: Option<Notification>,
    last_id: u64,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Shows `text`, returning the id to dismiss it with.
    pub fn notify(&mut self, text: impl Into<String>, kind: NotificationKind) -> u64 {
        self.last_id += 1;
        self.current = Some(Notification {
            id: self.last_id,
            text: text.into(),
            kind,
        });
        self.last_id
    }

    /// Clears the slot only if message `id` is still the one shown, so the
    /// timer of a replaced message cannot hide its successor.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NotificationContext {
    inner: Signal<NotificationState>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(NotificationState::default()),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.inner.read().current().cloned()
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.inner.write().notify(text, NotificationKind::Ok)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.inner.write().notify(text, NotificationKind::Error)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.inner.write().dismiss(id);
    }

    /// Reports a settled mutation, see [`outcome_message`].
    pub fn outcome(&mut self, operation: Operation, entity: &str, result: &Result<(), ApiError>) {
        if let Err(err) = result {
            tracing::error!("Failed {:?} of {}: {}", operation, entity, err);
        }
        let (text, kind) = outcome_message(operation, entity, result);
        self.inner.write().notify(text, kind);
    }
}

/// Text of a settled mutation: the success text, or the backend message with
/// the per-operation failure text as fallback.
pub fn outcome_message(
    operation: Operation,
    entity: &str,
    result: &Result<(), ApiError>,
) -> (String, NotificationKind) {
    match result {
        Ok(()) => (operation.success(entity), NotificationKind::Ok),
        Err(err) => (
            err.user_message(&operation.failure(entity)),
            NotificationKind::Error,
        ),
    }
}
