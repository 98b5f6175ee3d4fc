//! Hooks tying the query cache to the component tree.

use std::{collections::VecDeque, future::Future, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, HttpTransport, Tag, TagRevisions, Transport},
    config::Config,
    model::{error::ApiError, message::GENERIC_ERROR},
};

use super::{loading::use_loading_flag, notification::NotificationContext};

/// Query cache plus the per-tag revisions that mounted queries subscribe to.
#[derive(Clone, PartialEq)]
pub struct ApiContext {
    pub client: ApiClient,
    revisions: Signal<TagRevisions>,
}

impl ApiContext {
    pub fn new(config: &Config) -> Self {
        let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new(config.api_url.clone()));
        Self::from_client(ApiClient::new(transport))
    }

    pub fn from_client(client: ApiClient) -> Self {
        let mut revisions = Signal::new(TagRevisions::default());

        client.on_invalidate(move |tags| revisions.write().bump(tags));

        Self { client, revisions }
    }

    /// Current revision of `tag`; reading it subscribes the caller.
    pub fn revision(&self, tag: Tag) -> u64 {
        self.revisions.read().get(tag)
    }
}

/// Runs `fetch` through the shared cache and re-runs it whenever `tag` is
/// invalidated or a signal read by `fetch` changes.
///
/// While a request is pending the loading flag `source` is set; a failed
/// request raises the generic error notification.
pub fn use_api_query<R, F, Fut>(
    source: impl Into<String>,
    tag: Tag,
    mut fetch: F,
) -> Resource<Result<R, ApiError>>
where
    R: 'static,
    F: FnMut(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
{
    let api = use_context::<ApiContext>();
    let mut notifications = use_context::<NotificationContext>();
    let source = use_hook(|| source.into());

    let resource = use_resource(move || {
        let _ = api.revision(tag);
        fetch(api.client.clone())
    });

    use_loading_flag(source.clone(), move || {
        matches!(*resource.state().read(), UseResourceState::Pending)
    });

    use_effect(move || {
        if let Some(Err(err)) = &*resource.read_unchecked() {
            tracing::error!("Failed to fetch {}: {}", source, err);
            notifications.error(GENERIC_ERROR);
        }
    });

    resource
}

/// Trigger of a mutation created by [`use_mutation`].
pub struct MutationHandle<A: 'static> {
    queue: Signal<VecDeque<(u64, A)>>,
    issued: Signal<u64>,
}

impl<A: 'static> Clone for MutationHandle<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for MutationHandle<A> {}

impl<A: 'static> PartialEq for MutationHandle<A> {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue
    }
}

impl<A: Clone + 'static> MutationHandle<A> {
    /// Queues the mutation for `action`; calls are sent one at a time, in
    /// the order they were queued.
    pub fn run(&mut self, action: A) {
        let seq = *self.issued.peek() + 1;
        self.issued.set(seq);
        self.queue.write().push_back((seq, action));
    }

    pub fn is_pending(&self) -> bool {
        !self.queue.read().is_empty()
    }
}

/// Mutation driven by a queue signal: [`MutationHandle::run`] queues an
/// action, the front of the queue is sent and `on_settled` receives the
/// action and its result once the call returns. The loading flag `source` is
/// set while any call is queued.
pub fn use_mutation<A, F, Fut, S>(
    source: impl Into<String>,
    mut send: F,
    mut on_settled: S,
) -> MutationHandle<A>
where
    A: Clone + PartialEq + 'static,
    F: FnMut(ApiClient, A) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    S: FnMut(A, Result<(), ApiError>) + 'static,
{
    let api = use_context::<ApiContext>();
    let mut queue = use_signal(VecDeque::<(u64, A)>::new);
    let issued = use_signal(|| 0u64);

    // Queueing behind a pending call must not restart it
    let front = use_memo(move || queue.read().front().cloned());

    let future = use_resource(move || {
        let call = front().map(|(seq, action)| (seq, send(api.client.clone(), action)));
        async move {
            match call {
                Some((seq, call)) => Some((seq, call.await)),
                None => None,
            }
        }
    });

    use_effect(move || {
        let Some(Some((seq, result))) = future.read_unchecked().as_ref().cloned() else {
            return;
        };
        // Settle each queued call once, with the result sent for it
        if queue.peek().front().map(|(pending, _)| *pending) != Some(seq) {
            return;
        }
        let Some((_, action)) = queue.write().pop_front() else {
            return;
        };
        on_settled(action, result);
    });

    let handle = MutationHandle { queue, issued };
    use_loading_flag(source, move || handle.is_pending());

    handle
}
