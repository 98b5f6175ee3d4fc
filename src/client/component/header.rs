use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaDice, FaFeather, FaHandshake, FaTags, FaUsers},
    Icon, IconShape,
};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::GamePage {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaDice
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        nav {
            class: "flex items-center gap-1 sm:gap-2",
            NavLink { to: Route::GamePage {}, label: "Catalog", icon: FaDice }
            NavLink { to: Route::CategoryPage {}, label: "Categories", icon: FaTags }
            NavLink { to: Route::AuthorPage {}, label: "Authors", icon: FaFeather }
            NavLink { to: Route::ClientPage {}, label: "Clients", icon: FaUsers }
            NavLink { to: Route::LoanPage {}, label: "Loans", icon: FaHandshake }
        }
    })
}

#[component]
fn NavLink<I: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    label: &'static str,
    icon: I,
) -> Element {
    let current = use_route::<Route>();
    let class = if current == to {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-ghost"
    };

    rsx!(Link {
        to,
        class,
        div {
            class: "flex gap-2 items-center",
            Icon {
                width: 16,
                height: 16,
                icon
            }
            span {
                class: "hidden md:inline",
                "{label}"
            }
        }
    })
}
