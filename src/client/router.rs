use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{AuthorPage, CategoryPage, ClientPage, GamePage, LoanPage, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[redirect("/", || Route::GamePage {})]
    #[route("/games")]
    GamePage {},

    #[route("/categories")]
    CategoryPage {},

    #[route("/authors")]
    AuthorPage {},

    #[route("/clients")]
    ClientPage {},

    #[route("/loans")]
    LoanPage {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
