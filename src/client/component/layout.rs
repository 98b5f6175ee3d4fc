use dioxus::prelude::*;

use crate::client::{
    component::{Header, LoadingOverlay, Toast},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        Outlet::<Route> {}
        Toast {  }
        LoadingOverlay {  }
    })
}
