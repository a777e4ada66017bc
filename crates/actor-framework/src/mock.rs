//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Components that consume a
//! client can then be tested deterministically, including failures that are hard to
//! provoke against a real actor (a closed channel, a store that refuses writes).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted responses, FIFO | Subject to scheduler |
//! | **State** | None (expectations only) | Real document store |
//! | **Use Case** | Logic *around* a client | The actor itself or the full system |
//! | **Error Injection** | `return_err` | Requires provoking the real failure |
//!
//! Expectations are consumed strictly in order. A request that does not match the next
//! expectation (or arrives when none is left) makes the mock's background task panic,
//! which drops the response channel: the caller observes `FrameworkError::ActorDropped`
//! and [`MockClient::verify`] tells you which expectations were left over.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32, price: f64 }
//! #[derive(Debug)] enum DishPatch {}
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Patch = DishPatch; type Action = DishAction;
//!     type ActionResult = (); type Context = (); type Error = DishError;
//!     fn id(&self) -> u32 { self.id }
//!     async fn on_patch(&mut self, p: DishPatch, _: &()) -> Result<(), DishError> { match p {} }
//!     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), DishError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_get(1).return_ok(Some(Dish { id: 1, price: 12.5 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().price, 12.5);
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For assertions on the request payload itself, use the channel-level helpers
//! ([`create_mock_client`], [`expect_insert`], [`expect_get`], [`expect_patch`],
//! [`expect_action`]) and answer through the returned responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted answer to it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Insert {
        response: Result<T, FrameworkError>,
    },
    Patch {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the answering task is spawned here.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Patch { id, respond_to, .. },
                        Some(Expectation::Patch {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Patch for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Action for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `patch` operation.
    pub fn expect_patch(&mut self, id: T::Id) -> PatchExpectationBuilder<T> {
        PatchExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> InsertExpectationBuilder<T> {
    /// Answers with `stored` as the document the actor kept.
    pub fn return_ok(self, stored: T) {
        self.push(Ok(stored));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert { response });
    }
}

/// Builder for `patch` expectations.
pub struct PatchExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> PatchExpectationBuilder<T> {
    pub fn return_ok(self, patched: T) {
        self.push(Ok(patched));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Patch {
            id: self.id,
            response,
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull the next request with one of the `expect_*` helpers,
/// assert on its payload, and answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is an Insert request.
pub async fn expect_insert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Patch request.
pub async fn expect_patch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Patch {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
