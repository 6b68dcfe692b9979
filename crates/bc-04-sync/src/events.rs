//! # Node Events Port
//!
//! Inbound callback port for collaborators (e.g. a UI) that want to be
//! told when a block lands in the local chain. Notifications are
//! synchronous fire-and-forget; the core neither awaits nor inspects
//! the collaborator's reaction.

/// Collaborator callbacks for chain events.
pub trait NodeEvents: Send + Sync {
    /// Invoked after every successful block append.
    fn on_new_block(&self);
}

/// Events sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl NodeEvents for NullEvents {
    fn on_new_block(&self) {}
}

/// Collaborator callback for bootstrap/sync milestones.
///
/// `fraction` is a coarse 0..1 progress value; `message` is a
/// human-readable description of the milestone. This is the only
/// coupling the core has to any presentation surface.
pub trait ProgressSink: Send + Sync {
    /// Report a milestone.
    fn on_progress(&self, fraction: f64, message: &str);
}

/// Progress sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_progress(&self, _fraction: f64, _message: &str) {}
}
