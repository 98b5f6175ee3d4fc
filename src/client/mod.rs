pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use app::App;
