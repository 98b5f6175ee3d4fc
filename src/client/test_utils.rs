//! Shared fixtures for the client tests: a recording transport and a
//! headless component tree wired with the app contexts.

use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

use async_trait::async_trait;
use dioxus::prelude::*;
use serde_json::Value;

use crate::client::{
    api::{transport::ApiRequest, ApiClient, Transport},
    model::error::ApiError,
    store::{notification::Notification, ApiContext, LoadingContext, NotificationContext},
};

/// Canned reply of the mock transport.
struct MockResponse {
    /// Number of times the request yields to the executor before resolving
    yields: usize,
    result: Result<Option<Value>, ApiError>,
}

/// Transport that records every request and answers from a queue of canned
/// responses, in the order requests are sent.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<MockResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.respond_after(0, body)
    }

    pub fn respond_after(self, yields: usize, body: Value) -> Self {
        self.responses.borrow_mut().push_back(MockResponse {
            yields,
            result: Ok(Some(body)),
        });
        self
    }

    pub fn respond_empty(self) -> Self {
        self.responses.borrow_mut().push_back(MockResponse {
            yields: 0,
            result: Ok(None),
        });
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(MockResponse {
            yields: 0,
            result: Err(error),
        });
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        self.requests.borrow_mut().push(request);
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(MockResponse {
                yields: 0,
                result: Err(ApiError::transport("No response queued")),
            });

        for _ in 0..response.yields {
            tokio::task::yield_now().await;
        }

        response.result
    }
}

/// Append-only record shared between a test and the components it mounts.
pub struct Log<T>(Rc<RefCell<Vec<T>>>);

impl<T> Clone for Log<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Log<T> {
    fn default() -> Self {
        Self(Rc::default())
    }
}

impl<T: Clone> Log<T> {
    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn entries(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.0.borrow().last().cloned()
    }
}

/// What the mounted tree showed: every distinct notification, every change
/// of the global loading flag, and whatever the test components record.
#[derive(Clone, Default)]
pub struct Observed {
    pub notifications: Log<Notification>,
    pub loading: Log<bool>,
    pub events: Log<String>,
}

/// Provides the app contexts over the root [`ApiClient`] and records what
/// they show into the root [`Observed`].
#[component]
pub fn AppContexts(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    use_context_provider(|| ApiContext::from_client(client));
    use_context_provider(NotificationContext::new);
    use_context_provider(LoadingContext::new);

    rsx!(
        Observer {}
        {children}
    )
}

#[component]
fn Observer() -> Element {
    let observed = use_context::<Observed>();
    let notifications = use_context::<NotificationContext>();
    let loading = use_context::<LoadingContext>();

    let shown = observed.notifications.clone();
    use_effect(move || {
        let Some(current) = notifications.current() else {
            return;
        };
        if shown.last().map(|n| n.id) != Some(current.id) {
            shown.push(current);
        }
    });

    let flags = observed.loading.clone();
    use_effect(move || {
        let value = loading.is_loading();
        if flags.last() != Some(value) {
            flags.push(value);
        }
    });

    rsx!()
}

/// Mounts `root` over `transport` and returns the dom with what it observed.
pub fn mount(
    root: fn() -> Element,
    transport: MockTransport,
) -> (VirtualDom, Rc<MockTransport>, Observed) {
    let transport = Rc::new(transport);
    let shared: Rc<dyn Transport> = transport.clone();
    let client = ApiClient::new(shared);
    let observed = Observed::default();

    let dom = VirtualDom::new(root)
        .with_root_context(client)
        .with_root_context(observed.clone());

    (dom, transport, observed)
}

/// Renders `dom` and keeps running its tasks and effects until it goes idle.
pub async fn run_to_idle(dom: &mut VirtualDom) {
    dom.rebuild_in_place();
    for _ in 0..200 {
        let work = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}
