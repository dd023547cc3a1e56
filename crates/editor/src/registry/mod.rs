//! Inline editor capability and registry.
//!
//! Every block whose type does not declare a custom editor is backed by a
//! live inline editing engine instance, registered when the block mounts
//! and removed when it unmounts. Controllers never hold instances: they
//! resolve through the registry on demand, because instances are recreated
//! across structural mutation.

use std::fmt;

use rustc_hash::FxHashMap;
use stanza_primitives::{BlockId, BoxFutureLocal};
use thiserror::Error;

use crate::document::Document;
use crate::error::EditorError;

#[cfg(test)]
mod tests;

/// Errors surfaced by an inline editing engine.
///
/// Best-effort callers absorb these; only configuration errors
/// ([`EditorError`]) propagate out of the core.
#[derive(Debug, Error)]
pub enum InlineError {
	/// The instance does not support the requested operation.
	#[error("operation not supported by this inline editor")]
	Unsupported,

	/// The engine failed internally (detached view, dead backend).
	#[error("inline editor failure: {0}")]
	Backend(String),
}

/// Options for an inline focus request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusOptions {
	/// Wait for the engine to finish applying focus before resolving.
	pub wait_execution: bool,
}

/// Where to collapse an inline selection to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseTarget {
	/// The start of the block content.
	Start,
	/// The end of the block content.
	End,
}

/// Capability surface of a block's inline editing engine.
///
/// The engine itself is a black box; the core only drives focus, blur, and
/// selection collapse through this seam. Any operation may fail on an
/// engine that does not support it.
pub trait InlineEditor {
	/// Moves input focus into the engine.
	///
	/// The returned future resolves once the engine has applied focus
	/// (immediately when `wait_execution` is false). There is no
	/// cancellation primitive; a pending focus is allowed to complete.
	fn focus(
		&mut self,
		options: FocusOptions,
	) -> BoxFutureLocal<'static, Result<(), InlineError>>;

	/// Removes input focus from the engine.
	fn blur(&mut self) -> Result<(), InlineError>;

	/// Clears the engine's inline selection.
	fn deselect(&mut self) -> Result<(), InlineError>;

	/// Collapses the inline selection to `target`.
	fn collapse_selection(&mut self, target: CollapseTarget) -> Result<(), InlineError>;

	/// True if the engine currently has a non-collapsed selection.
	fn has_expanded_selection(&self) -> bool;
}

/// Per-type declaration the core consults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockType {
	/// The type supplies its own editing surface and is exempt from the
	/// inline-editor registry requirement.
	pub has_custom_editor: bool,
}

/// Registry of block type declarations, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct BlockTypeRegistry {
	types: FxHashMap<String, BlockType>,
}

impl BlockTypeRegistry {
	/// Creates an empty type registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a block type.
	pub fn register(&mut self, name: impl Into<String>, block_type: BlockType) {
		self.types.insert(name.into(), block_type);
	}

	/// True if `name` declares a custom editing surface.
	///
	/// Unknown types are treated as standard.
	pub fn has_custom_editor(&self, name: &str) -> bool {
		self.types.get(name).is_some_and(|t| t.has_custom_editor)
	}
}

/// Lookup parameters for an inline editor, by id and/or position.
///
/// Mirrors the two lookup keys the document exposes. A query naming
/// neither is a caller contract violation and fails immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineQuery {
	/// Stable block id to resolve. Preferred over `at` when both are set.
	pub id: Option<BlockId>,
	/// Display position to resolve.
	pub at: Option<usize>,
}

impl InlineQuery {
	/// Query by block id.
	pub fn by_id(id: BlockId) -> Self {
		Self { id: Some(id), at: None }
	}

	/// Query by display position.
	pub fn at(position: usize) -> Self {
		Self { id: None, at: Some(position) }
	}
}

impl fmt::Display for InlineQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.id, self.at) {
			(Some(id), _) => write!(f, "id {id}"),
			(None, Some(at)) => write!(f, "position {at}"),
			(None, None) => write!(f, "empty query"),
		}
	}
}

/// Maps block ids to their live inline editor instances.
#[derive(Default)]
pub struct InlineEditorRegistry {
	instances: FxHashMap<BlockId, Box<dyn InlineEditor>>,
}

impl InlineEditorRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the instance backing a freshly mounted block.
	///
	/// A remount replaces the previous instance.
	pub fn register(&mut self, id: BlockId, instance: Box<dyn InlineEditor>) {
		self.instances.insert(id, instance);
	}

	/// Drops the instance for an unmounted block.
	///
	/// Returns false if no instance was registered.
	pub fn unregister(&mut self, id: BlockId) -> bool {
		self.instances.remove(&id).is_some()
	}

	/// Number of live instances.
	pub fn len(&self) -> usize {
		self.instances.len()
	}

	/// True if no instances are registered.
	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}

	/// Resolves the inline editor for a block.
	///
	/// Returns `Ok(None)` when the block's type declares a custom editor:
	/// that is a valid terminal state, not a failure. A standard block
	/// without a registered instance is a fatal configuration error.
	/// Position lookups scan for a matching `meta.order`.
	pub fn resolve_mut(
		&mut self,
		document: &Document,
		types: &BlockTypeRegistry,
		query: InlineQuery,
	) -> Result<Option<&mut dyn InlineEditor>, EditorError> {
		let id = Self::block_id_for(document, query)?;
		// The id is known to resolve after block_id_for.
		let block = document
			.by_id(id)
			.ok_or_else(|| EditorError::BlockNotFound(query.to_string()))?;
		if types.has_custom_editor(&block.block_type) {
			return Ok(None);
		}
		match self.instances.get_mut(&id) {
			Some(instance) => Ok(Some(instance.as_mut())),
			None => Err(EditorError::MissingInlineEditor(id)),
		}
	}

	/// Starts a focus request, returning the engine's completion future.
	///
	/// `Ok(None)` means the block has a custom editor and there is nothing
	/// to drive.
	pub fn request_focus(
		&mut self,
		document: &Document,
		types: &BlockTypeRegistry,
		query: InlineQuery,
		options: FocusOptions,
	) -> Result<Option<BoxFutureLocal<'static, Result<(), InlineError>>>, EditorError> {
		Ok(self
			.resolve_mut(document, types, query)?
			.map(|instance| instance.focus(options)))
	}

	fn block_id_for(document: &Document, query: InlineQuery) -> Result<BlockId, EditorError> {
		if let Some(id) = query.id {
			if document.by_id(id).is_none() {
				return Err(EditorError::BlockNotFound(query.to_string()));
			}
			return Ok(id);
		}
		if let Some(at) = query.at {
			return document
				.by_position(at)
				.map(|block| block.id)
				.ok_or_else(|| EditorError::BlockNotFound(query.to_string()));
		}
		Err(EditorError::InvalidQuery)
	}
}

impl fmt::Debug for dyn InlineEditor + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("dyn InlineEditor")
	}
}

impl fmt::Debug for InlineEditorRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InlineEditorRegistry")
			.field("instances", &self.instances.keys().collect::<Vec<_>>())
			.finish()
	}
}
