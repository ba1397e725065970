//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Use it to
//! test a domain client, or an actor whose `Context` holds other clients,
//! without starting those other actors.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, canned replies | real registry |
//! | Error injection | `return_err` | needs specific state |
//! | Use | logic *around* a client | the actor itself, full system |
//!
//! ```rust
//! use food_delivery::framework::mock::MockClient;
//! use food_delivery::model::{Customer, CustomerId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Customer>::new();
//!     mock.expect_get(CustomerId(1))
//!         .return_ok(Some(Customer::new(CustomerId(1), "Asha")));
//!
//!     let client = mock.client();
//!     let customer = client.get(CustomerId(1)).await.unwrap().unwrap();
//!     assert_eq!(customer.name, "Asha");
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control, [`create_mock_client`] returns the raw receiver and
//! the `expect_*` helpers pull one request off it.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    GetOrCreate {
        response: Result<(T::Id, bool), FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("get({id})"),
            Expectation::Create { .. } => "create".to_string(),
            Expectation::GetOrCreate { .. } => "get_or_create".to_string(),
            Expectation::List { .. } => "list".to_string(),
            Expectation::Delete { id, .. } => format!("delete({id})"),
            Expectation::Action { id, .. } => format!("action({id})"),
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { .. } => "create".to_string(),
        ResourceRequest::GetOrCreate { .. } => "get_or_create".to_string(),
        ResourceRequest::Get { id, .. } => format!("get({id})"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Update { id, .. } => format!("update({id})"),
        ResourceRequest::Delete { id, .. } => format!("delete({id})"),
        ResourceRequest::Action { id, .. } => format!("action({id})"),
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched in order. A request that does not match the next
/// expectation is recorded and its reply channel dropped, so the caller sees
/// [`FrameworkError::ActorDropped`]; [`MockClient::verify`] then fails the test.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::GetOrCreate { respond_to, .. },
                        Some(Expectation::GetOrCreate { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let wanted = expectation
                            .map(|e| e.describe())
                            .unwrap_or_else(|| "nothing".to_string());
                        seen.lock().unwrap().push(format!(
                            "got {}, expected {}",
                            describe_request(&request),
                            wanted
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_or_create` operation.
    pub fn expect_get_or_create(&mut self) -> GetOrCreateExpectationBuilder<T> {
        GetOrCreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed and no request went unmatched.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response,
            });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `get_or_create` expectations.
pub struct GetOrCreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetOrCreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id, created: bool) {
        self.push(Ok((id, created)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(T::Id, bool), FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::GetOrCreate { response });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response,
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response,
            });
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and hands back the receiving end of its channel.
///
/// The test plays the actor: pull requests with the `expect_*` helpers, assert on
/// their payloads, answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message as a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message as a GetOrCreate request.
pub async fn expect_get_or_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    oneshot::Sender<Result<(T::Id, bool), FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetOrCreate { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message as a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message as an Action request.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, CustomerCreate, CustomerId};

    #[tokio::test]
    async fn raw_receiver_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CustomerCreate {
                    name: "Asha".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Asha");
        responder.send(Ok(CustomerId(7))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), CustomerId(7));
    }

    #[tokio::test]
    async fn expectations_answer_in_order() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create().return_ok(CustomerId(1));
        mock.expect_get(CustomerId(1))
            .return_ok(Some(Customer::new(CustomerId(1), "Asha")));

        let client = mock.client();
        let id = client
            .create(CustomerCreate {
                name: "Asha".to_string(),
            })
            .await
            .unwrap();
        let fetched = client.get(id).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Asha");

        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_request_is_reported() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(1)).return_ok(None);

        let client = mock.client();
        let result = client.get(CustomerId(2)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(outcome.is_err());
    }
}
