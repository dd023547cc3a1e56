//! Error types for editor operations.

use stanza_primitives::BlockId;
use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// These are configuration and contract errors; transient failures inside
/// inline engines are reported as [`InlineError`](crate::registry::InlineError)
/// and absorbed by the best-effort paths that trigger them.
#[derive(Debug, Error)]
pub enum EditorError {
	/// An inline-editor lookup named neither a block id nor a position.
	#[error("inline editor lookup requires a block id or a position")]
	InvalidQuery,

	/// No block matched the given id or position.
	#[error("no block found for {0}")]
	BlockNotFound(String),

	/// A standard block has no backing inline editor registered.
	///
	/// Every block whose type does not declare a custom editor must have an
	/// inline editor mounted. A missing one is a setup defect upstream, not
	/// a recoverable condition.
	#[error("no inline editor registered for standard block {0}")]
	MissingInlineEditor(BlockId),
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
