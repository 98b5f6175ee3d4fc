use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::Config,
    constant::SITE_NAME,
    router::Route,
    store::{ApiContext, LoadingContext, NotificationContext},
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        let config = Config::from_env();
        tracing::info!("Using backend at {}", config.api_url);
        config
    });
    use_context_provider(|| ApiContext::new(&config));
    use_context_provider(NotificationContext::new);
    use_context_provider(LoadingContext::new);

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Board game library: catalog, authors, clients and loans"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
