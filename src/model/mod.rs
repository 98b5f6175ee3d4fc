//! Wire types exchanged with the ludoteca backend.
//!
//! Every DTO mirrors the backend JSON shape (camelCase field names). Ids are
//! optional on records the client builds itself, since the backend assigns
//! them on creation.

pub mod api;
pub mod author;
pub mod category;
pub mod client;
pub mod game;
pub mod loan;
pub mod pagination;
