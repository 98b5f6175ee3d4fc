pub mod author;
pub mod category;
pub mod client;
pub mod game;
pub mod helper;
pub mod loan;
pub mod query;
pub mod transport;

#[cfg(test)]
mod test;

use std::rc::Rc;

pub use query::{QueryClient, Tag, TagRevisions};
pub use transport::{HttpTransport, Transport};

/// Query cache over whichever transport the app was started with.
pub type ApiClient = QueryClient<Rc<dyn Transport>>;
