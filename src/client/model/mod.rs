pub mod cache;
pub mod error;
pub mod filter;
pub mod form;
pub mod list_page;
pub mod message;

#[cfg(test)]
mod test;
