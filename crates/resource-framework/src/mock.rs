//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running store. Code that wraps a client can then be
//! tested without spawning a [`ResourceActor`](crate::ResourceActor).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant | Fast (spawns a task) |
//! | **State** | None (scripted answers) | Real store and pagination |
//! | **Use Case** | Logic *around* the client | The actor itself, or the full system |
//! | **Error Injection** | Easy (`return_err`) | Only `NotFound` and closed channels |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_framework::mock::MockClient;
//! use resource_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     type Create = ItemCreate;
//!     type Update = ItemUpdate;
//!     type Context = ();
//!     type Error = ItemError;
//!     const KIND: &'static str = "Item";
//!
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Item { id: 1 });
//!     mock.expect_get(2).return_err(FrameworkError::not_found("Item", 2));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Item { id: 1 });
//!     assert!(client.get(2).await.unwrap_err().is_not_found());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] returns a client plus the receiving end of its channel. Tests pull
//! requests off with [`expect_create`], [`expect_get`], [`expect_list`], [`expect_update`] or
//! [`expect_delete`], assert on the payload, and answer through the returned responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use crate::page::{Page, PageRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    List {
        page: Option<PageRequest>,
        response: Result<Page<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<bool, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn operation(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Get { .. } => "get",
            Self::List { .. } => "list",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

fn request_operation<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

// A panicking test thread must not hide the mock's own report.
fn lock<T: ActorEntity>(state: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id<T: ActorEntity>(
    state: &Shared<T>,
    operation: &str,
    expected: &T::Id,
    actual: &T::Id,
) {
    if expected != actual {
        lock(state)
            .failures
            .push(format!("{operation}: expected id {expected}, got {actual}"));
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were registered. A request
/// for the wrong operation is dropped unanswered, so the caller sees
/// [`FrameworkError::ActorDropped`]. A request for the right operation with a different id
/// is still answered. Both kinds of mismatch are reported by [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&task_state, "get", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { page, respond_to },
                        Some(Expectation::List {
                            page: expected,
                            response,
                        }),
                    ) => {
                        if let Some(expected) = expected.filter(|expected| *expected != page) {
                            lock(&task_state)
                                .failures
                                .push(format!("list: expected {expected:?}, got {page:?}"));
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&task_state, "update", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&task_state, "delete", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation
                            .as_ref()
                            .map(Expectation::operation)
                            .unwrap_or("nothing");
                        lock(&task_state).failures.push(format!(
                            "unexpected {} request (expected {expected})",
                            request_operation(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation with any page request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Page<T>> {
        self.builder(|response| Expectation::List {
            page: None,
            response,
        })
    }

    /// Expects a `list` operation with exactly `page`.
    pub fn expect_list_page(&mut self, page: PageRequest) -> ExpectationBuilder<T, Page<T>> {
        self.builder(move |response| Expectation::List {
            page: Some(page),
            response,
        })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Panics if an expectation is still pending or a request did not match.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.failures.is_empty() {
            panic!("Mock expectations violated: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Completes an expectation registered on a [`MockClient`].
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: Shared<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests act as the actor: they read the next request, assert on it, and answer through the
/// responder. Delays and failures can be simulated by answering late or dropping it.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a List.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(PageRequest, Response<Page<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { page, respond_to }) => Some((page, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Delete.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{paginate, PageBounds};
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct WidgetCreate {
        label: String,
    }

    #[derive(Debug)]
    struct WidgetUpdate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Widget error")]
    struct WidgetError;

    #[async_trait]
    impl ActorEntity for Widget {
        type Id = u32;
        type Create = WidgetCreate;
        type Update = WidgetUpdate;
        type Context = ();
        type Error = WidgetError;
        const KIND: &'static str = "Widget";

        fn from_create_params(id: u32, params: WidgetCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(
            &mut self,
            update: WidgetUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            self.label = update.label;
            Ok(())
        }
    }

    fn widget(id: u32, label: &str) -> Widget {
        Widget {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Widget>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(WidgetCreate {
                    label: "gear".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "gear");
        responder.send(Ok(widget(1, "gear"))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(w) if w.id == 1));
    }

    #[tokio::test]
    async fn test_channel_helpers_for_list_update_delete() {
        let (client, mut receiver) = create_mock_client::<Widget>(10);

        let task = tokio::spawn(async move {
            let page = client.list(PageRequest::new(2, 3)).await?;
            let updated = client
                .update(
                    7,
                    WidgetUpdate {
                        label: "new".to_string(),
                    },
                )
                .await?;
            let deleted = client.delete(7).await?;
            Ok::<_, FrameworkError>((page, updated, deleted))
        });

        let (page, responder) = expect_list(&mut receiver).await.expect("List");
        assert_eq!(page, PageRequest::new(2, 3));
        responder
            .send(Ok(paginate(Vec::new(), 0, page.normalize())))
            .unwrap();

        let (id, update, responder) = expect_update(&mut receiver).await.expect("Update");
        assert_eq!(id, 7);
        assert_eq!(update.label, "new");
        responder.send(Ok(widget(7, "new"))).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.expect("Delete");
        assert_eq!(id, 7);
        responder.send(Ok(true)).unwrap();

        let (page, updated, deleted) = task.await.unwrap().unwrap();
        assert_eq!(page.total_elements, 0);
        assert_eq!(updated.label, "new");
        assert!(deleted);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Widget>::new();

        mock.expect_create().return_ok(widget(1, "gear"));
        mock.expect_get(1).return_ok(widget(1, "gear"));
        mock.expect_list_page(PageRequest::new(1, 10)).return_ok(paginate(
            vec![widget(1, "gear")],
            1,
            PageBounds {
                start_page: 1,
                page_size: 10,
            },
        ));
        mock.expect_update(1).return_ok(widget(1, "cog"));
        mock.expect_delete(1).return_ok(true);

        let client = mock.client();

        let created = client
            .create(WidgetCreate {
                label: "gear".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.get(1).await.unwrap().label, "gear");
        assert_eq!(
            client.list(PageRequest::default()).await.unwrap().items.len(),
            1
        );
        let updated = client
            .update(
                1,
                WidgetUpdate {
                    label: "cog".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.label, "cog");
        assert!(client.delete(1).await.unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_delete(3)
            .return_err(FrameworkError::not_found("Widget", 3));
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let err = client.delete(3).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Widget not found: 3");
        assert!(matches!(
            client.list(PageRequest::default()).await,
            Err(FrameworkError::ActorClosed)
        ));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "get: expected id 1, got 2")]
    async fn test_verify_reports_id_mismatch() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_get(1).return_ok(widget(1, "gear"));

        let fetched = mock.client().get(2).await.unwrap();
        assert_eq!(fetched.id, 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_operation_is_dropped() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_get(1).return_ok(widget(1, "gear"));

        let result = mock.client().delete(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_delete(1).return_ok(true);
        mock.verify();
    }
}
