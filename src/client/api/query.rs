//! Tagged response cache shared by every page.
//!
//! Queries are cached under their exact `(endpoint, parameters)` key and labeled
//! with the [`Tag`] of the entity they read. A successful mutation marks every
//! entry carrying one of its tags as stale, so the next read refetches it. Any
//! write to entity type `T` invalidates all cached reads of `T`, which may
//! refetch more than strictly needed but never serves pre-write data.
//!
//! Identical queries issued while one is in flight join that request instead of
//! sending another. Every request gets a monotonic sequence number and a
//! completion older than what is already cached for its key is dropped, so a
//! slow superseded response cannot overwrite a newer one.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus_logger::tracing;
use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::client::model::error::ApiError;

use super::{
    helper::{deserialize_json, serialize_json},
    transport::{ApiRequest, Transport},
};

/// Entity label attached to cached queries and to mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Category,
    Author,
    Game,
    Client,
    Loan,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub endpoint: &'static str,
    /// Canonical JSON of the parameter object
    pub params: String,
}

impl QueryKey {
    pub fn new<P: Serialize>(endpoint: &'static str, params: &P) -> Result<Self, ApiError> {
        Ok(Self {
            endpoint,
            params: serialize_json(params)?.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub key: QueryKey,
    pub tag: Tag,
    pub request: ApiRequest,
}

impl Query {
    pub fn new<P: Serialize>(
        endpoint: &'static str,
        tag: Tag,
        params: &P,
        request: ApiRequest,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            key: QueryKey::new(endpoint, params)?,
            tag,
            request,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mutation {
    pub request: ApiRequest,
    pub invalidates: Vec<Tag>,
}

impl Mutation {
    pub fn new(request: ApiRequest, invalidates: &[Tag]) -> Self {
        Self {
            request,
            invalidates: invalidates.to_vec(),
        }
    }
}

type SharedResponse = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;

struct Entry {
    tag: Tag,
    seq: u64,
    value: Value,
    stale: bool,
}

struct InFlight {
    tag: Tag,
    seq: u64,
    response: SharedResponse,
}

#[derive(Default)]
struct QueryState {
    entries: HashMap<QueryKey, Entry>,
    in_flight: HashMap<QueryKey, InFlight>,
    last_seq: u64,
    /// Last sequence number issued before each tag was invalidated
    invalidated_at: HashMap<Tag, u64>,
}

type InvalidationListener = Box<dyn FnMut(&[Tag])>;

/// Response cache in front of a [`Transport`].
///
/// Cheap to clone; clones share the same cache. Not `Send`: it lives on the UI
/// thread.
pub struct QueryClient<T> {
    transport: Rc<T>,
    state: Rc<RefCell<QueryState>>,
    listener: Rc<RefCell<Option<InvalidationListener>>>,
}

impl<T> Clone for QueryClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            state: self.state.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<T> PartialEq for QueryClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: Transport + 'static> QueryClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
            state: Rc::new(RefCell::new(QueryState::default())),
            listener: Rc::new(RefCell::new(None)),
        }
    }

    /// Registers the callback told about every invalidation, replacing any
    /// previous one. The component tree uses it to re-run mounted queries.
    pub fn on_invalidate(&self, listener: impl FnMut(&[Tag]) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads a query through the cache.
    pub async fn query<R: DeserializeOwned>(&self, query: Query) -> Result<R, ApiError> {
        let value = self.query_value(query).await?;
        deserialize_json(value)
    }

    async fn query_value(&self, query: Query) -> Result<Value, ApiError> {
        let (seq, response) = {
            let mut state = self.state.borrow_mut();

            if let Some(entry) = state.entries.get(&query.key) {
                if !entry.stale {
                    tracing::trace!("Cache hit for {} {}", query.key.endpoint, query.key.params);
                    return Ok(entry.value.clone());
                }
            }

            if let Some(in_flight) = state.in_flight.get(&query.key) {
                tracing::debug!(
                    "Joining in-flight request for {} {}",
                    query.key.endpoint,
                    query.key.params
                );
                (in_flight.seq, in_flight.response.clone())
            } else {
                state.last_seq += 1;
                let seq = state.last_seq;
                let transport = self.transport.clone();
                let request = query.request.clone();
                let response = async move {
                    transport
                        .send(request)
                        .await
                        .map(|body| body.unwrap_or(Value::Null))
                }
                .boxed_local()
                .shared();

                state.in_flight.insert(
                    query.key.clone(),
                    InFlight {
                        tag: query.tag,
                        seq,
                        response: response.clone(),
                    },
                );
                (seq, response)
            }
        };

        let result = response.await;
        self.complete(&query.key, query.tag, seq, &result);
        result
    }

    /// Records the outcome of request `seq`. Every caller awaiting the shared
    /// response runs this; only the first one for a given `seq` has an effect.
    fn complete(&self, key: &QueryKey, tag: Tag, seq: u64, result: &Result<Value, ApiError>) {
        let mut state = self.state.borrow_mut();

        if state.in_flight.get(key).is_some_and(|f| f.seq == seq) {
            state.in_flight.remove(key);
        }

        // Errors are never cached
        let Ok(value) = result else {
            return;
        };

        if let Some(entry) = state.entries.get(key) {
            if entry.seq >= seq {
                if entry.seq > seq {
                    tracing::debug!(
                        "Discarding stale response #{} for {} {}",
                        seq,
                        key.endpoint,
                        key.params
                    );
                }
                return;
            }
        }

        let stale = state
            .invalidated_at
            .get(&tag)
            .is_some_and(|&invalidated_at| seq <= invalidated_at);

        state.entries.insert(
            key.clone(),
            Entry {
                tag,
                seq,
                value: value.clone(),
                stale,
            },
        );
    }

    /// Sends a mutation; on success every query tagged with one of its tags is
    /// invalidated.
    pub async fn mutate(&self, mutation: Mutation) -> Result<Option<Value>, ApiError> {
        let result = self.transport.send(mutation.request).await;
        if result.is_ok() {
            self.invalidate(&mutation.invalidates);
        }
        result
    }

    /// Marks every cached entry with one of `tags` as stale and detaches the
    /// matching in-flight requests so later reads issue fresh ones.
    pub fn invalidate(&self, tags: &[Tag]) {
        {
            let mut state = self.state.borrow_mut();
            let last_seq = state.last_seq;

            for tag in tags {
                state.invalidated_at.insert(*tag, last_seq);
            }
            for entry in state.entries.values_mut() {
                if tags.contains(&entry.tag) {
                    entry.stale = true;
                }
            }
            state.in_flight.retain(|_, f| !tags.contains(&f.tag));
        }

        tracing::debug!("Invalidated {:?}", tags);

        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(tags);
        }
    }

    /// Cached value for `key`, fresh or stale, without any I/O.
    pub fn cached<R: DeserializeOwned>(&self, key: &QueryKey) -> Option<R> {
        let state = self.state.borrow();
        let entry = state.entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// `Some(true)` if `key` is cached but must be refetched before it is read.
    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.state.borrow().entries.get(key).map(|e| e.stale)
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.state.borrow().in_flight.contains_key(key)
    }
}

/// Per-tag revision counters.
///
/// Kept in a signal by the component tree: queries subscribe to the revision of
/// their tag and re-run once a mutation bumps it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagRevisions {
    revisions: HashMap<Tag, u64>,
}

impl TagRevisions {
    pub fn get(&self, tag: Tag) -> u64 {
        self.revisions.get(&tag).copied().unwrap_or_default()
    }

    pub fn bump(&mut self, tags: &[Tag]) {
        for tag in tags {
            *self.revisions.entry(*tag).or_default() += 1;
        }
    }
}
