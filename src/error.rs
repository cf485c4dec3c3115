//! Error types.
//!
//! The layout core has no error taxonomy of its own: malformed or extreme
//! inputs are valid inputs resolved arithmetically. The only diagnosable
//! condition is a violation of the node-identity contract between the two
//! passes of a frame.

use thiserror::Error;

/// Failures of the node-identity contract.
///
/// Recoverable by design: an immediate-mode UI must stay resilient to
/// transient structural changes between passes (conditional branches that
/// add or remove nodes), so callers typically recreate the node and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A lookup by identifier found nothing in the current frame's tree.
    #[error("node not found: {id}")]
    NodeNotFound { id: String },
}
