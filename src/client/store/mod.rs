//! App-wide reactive state shared through context.

pub mod api;
pub mod loading;
pub mod notification;

#[cfg(test)]
mod test;

pub use api::{use_api_query, use_mutation, ApiContext, MutationHandle};
pub use loading::{LoadingContext, LoadingState};
pub use notification::{NotificationContext, NotificationKind, NotificationState};
