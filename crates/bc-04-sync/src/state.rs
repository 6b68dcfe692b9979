//! # Node State
//!
//! The explicit node record every operation works through: the chain,
//! the blocks-received marker the pairing negotiator's partner deadline
//! checks, and the single-flight gate serializing message handling. No
//! ambient globals; all mutation goes through the sync engine, the
//! block author, and the chain store they wrap.

use std::sync::Arc;

use bc_03_chain_store::ChainStore;
use parking_lot::{Mutex, MutexGuard};
use tokio::sync::{Semaphore, SemaphorePermit};

/// Mutable per-node state.
#[derive(Debug, Default)]
pub struct NodeState {
    /// The local bookchain.
    pub chain: ChainStore,
    /// Set once a `RESPOND_BLOCKS` batch has been processed (fully or
    /// truncated at a bad link). Checked by the partner deadline.
    pub received_blocks: bool,
}

/// Shared handle to a node's state and its single-flight gate.
///
/// The gate is a one-permit semaphore: whoever holds the permit is the
/// node's only active operation, whether that is the sync engine
/// dispatching a dequeued message or the block author submitting.
/// Checking and claiming are one atomic step, so a claimant can never
/// slip in between another's check and its claim.
#[derive(Debug)]
pub struct NodeHandle {
    state: Mutex<NodeState>,
    gate: Semaphore,
}

impl NodeHandle {
    /// Create a handle around a fresh node state.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NodeState::default()),
            gate: Semaphore::new(1),
        }
    }

    /// Lock the mutable state.
    pub fn lock(&self) -> MutexGuard<'_, NodeState> {
        self.state.lock()
    }

    /// Whether some operation currently holds the gate.
    pub fn busy(&self) -> bool {
        self.gate.available_permits() == 0
    }

    /// Claim the gate without waiting. Returns `None` while another
    /// operation is in flight; poll ticks skip rather than queue up.
    /// The gate releases when the permit drops, on every exit path.
    pub fn try_claim(&self) -> Option<SemaphorePermit<'_>> {
        self.gate.try_acquire().ok()
    }
}

impl Default for NodeHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Node state shared between the sync engine, block author, and
/// pairing negotiator.
pub type SharedNode = Arc<NodeHandle>;

/// Create a fresh shared node state.
pub fn shared_node() -> SharedNode {
    Arc::new(NodeHandle::new())
}
