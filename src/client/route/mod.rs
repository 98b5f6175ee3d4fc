pub mod author;
pub mod category;
pub mod client;
pub mod game;
pub mod loan;
mod name_modal;
mod named;
mod new_button;
pub mod not_found;


pub use author::AuthorPage;
pub use category::CategoryPage;
pub use client::ClientPage;
pub use game::GamePage;
pub use loan::LoanPage;
pub use not_found::NotFound;
