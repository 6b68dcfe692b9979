//! # Scripted Router
//!
//! In-memory [`RouterClient`] for unit tests: dequeue responses are
//! scripted, enqueues are recorded, and each endpoint can be told to
//! fail its next N calls with a transient status error.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bc_01_transport::{PairResponse, RegisterResponse, RouterAuth, RouterClient, RouterError};
use parking_lot::Mutex;
use shared_types::RelayMessage;

/// Scriptable in-memory router.
#[derive(Default)]
pub struct ScriptedRouter {
    dequeues: Mutex<VecDeque<Result<RelayMessage, RouterError>>>,
    sent: Mutex<Vec<(String, RelayMessage)>>,
    pair_addresses: Mutex<VecDeque<String>>,
    dequeue_calls: AtomicUsize,
    enqueue_calls: AtomicUsize,
    register_calls: AtomicUsize,
    pair_calls: AtomicUsize,
    enqueue_failures: AtomicUsize,
    register_failures: AtomicUsize,
    pair_failures: AtomicUsize,
}

fn transient(path: &str) -> RouterError {
    RouterError::Status {
        path: path.to_string(),
        status: 503,
    }
}

fn take_failure(counter: &AtomicUsize) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

impl ScriptedRouter {
    /// Create a router with no scripted responses. Unscripted dequeues
    /// report an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next dequeue outcome.
    pub fn script_dequeue(&self, outcome: Result<RelayMessage, RouterError>) {
        self.dequeues.lock().push_back(outcome);
    }

    /// Queue the next partner address handed out by `/pair`.
    pub fn script_partner(&self, address: impl Into<String>) {
        self.pair_addresses.lock().push_back(address.into());
    }

    /// Fail the next `count` enqueue calls.
    pub fn fail_enqueues(&self, count: usize) {
        self.enqueue_failures.store(count, Ordering::SeqCst);
    }

    /// Fail the next `count` register calls.
    pub fn fail_registers(&self, count: usize) {
        self.register_failures.store(count, Ordering::SeqCst);
    }

    /// Fail the next `count` pair calls.
    pub fn fail_pairs(&self, count: usize) {
        self.pair_failures.store(count, Ordering::SeqCst);
    }

    /// Messages accepted by `/enqueue`, as (recipient, message) pairs.
    pub fn sent_messages(&self) -> Vec<(String, RelayMessage)> {
        self.sent.lock().clone()
    }

    /// Number of dequeue attempts (including empty-queue outcomes).
    pub fn dequeue_calls(&self) -> usize {
        self.dequeue_calls.load(Ordering::SeqCst)
    }

    /// Number of enqueue attempts (including failed ones).
    pub fn enqueue_calls(&self) -> usize {
        self.enqueue_calls.load(Ordering::SeqCst)
    }

    /// Number of register attempts.
    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    /// Number of pair attempts.
    pub fn pair_calls(&self) -> usize {
        self.pair_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouterClient for ScriptedRouter {
    async fn register(&self) -> Result<RegisterResponse, RouterError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.register_failures) {
            return Err(transient("/register"));
        }
        Ok(RegisterResponse {
            identity: "node-test".to_string(),
            epoch: 1,
        })
    }

    async fn pair(&self, _auth: &RouterAuth) -> Result<PairResponse, RouterError> {
        self.pair_calls.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.pair_failures) {
            return Err(transient("/pair"));
        }
        let address = self
            .pair_addresses
            .lock()
            .pop_front()
            .unwrap_or_else(|| "partner-1".to_string());
        Ok(PairResponse { address })
    }

    async fn enqueue(
        &self,
        _auth: &RouterAuth,
        recipient: &str,
        message: &RelayMessage,
    ) -> Result<(), RouterError> {
        self.enqueue_calls.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.enqueue_failures) {
            return Err(transient("/enqueue"));
        }
        self.sent
            .lock()
            .push((recipient.to_string(), message.clone()));
        Ok(())
    }

    async fn dequeue(&self, _auth: &RouterAuth) -> Result<RelayMessage, RouterError> {
        self.dequeue_calls.fetch_add(1, Ordering::SeqCst);
        self.dequeues
            .lock()
            .pop_front()
            .unwrap_or(Err(RouterError::EmptyQueue))
    }
}
