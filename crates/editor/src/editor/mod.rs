//! The shared editor container.
//!
//! [`Editor`] owns the document, the path state, and the registries the
//! coordination layer works through. It is single-threaded by design: all
//! mutation happens on the UI thread in response to discrete input events
//! or programmatic calls, and only the active gesture or focus call writes
//! the shared state at any moment.
//!
//! Implementation is split across focused modules:
//!
//! - `focus` - Initial focus transition onto the first block

mod focus;


use stanza_primitives::BlockId;
use tracing::trace;

use crate::document::Document;
use crate::error::EditorError;
use crate::events::{Event, Subscriber};
use crate::paths::Path;
use crate::registry::{BlockTypeRegistry, InlineEditor, InlineEditorRegistry, InlineQuery};

/// The shared editor instance coordinating blocks, paths, and focus.
pub struct Editor {
	document: Document,
	block_types: BlockTypeRegistry,
	inline_editors: InlineEditorRegistry,
	path: Path,
	read_only: bool,
	focused: bool,
	batch_depth: usize,
	path_dirty: bool,
	subscribers: Vec<Subscriber>,
}

impl Default for Editor {
	/// An editable editor over the default one-paragraph document.
	fn default() -> Self {
		Self::new(Document::default(), BlockTypeRegistry::new())
	}
}

impl Editor {
	/// Creates an editor over a document and its block-type registry.
	pub fn new(document: Document, block_types: BlockTypeRegistry) -> Self {
		Self {
			document,
			block_types,
			inline_editors: InlineEditorRegistry::new(),
			path: Path::empty(),
			read_only: false,
			focused: false,
			batch_depth: 0,
			path_dirty: false,
			subscribers: Vec::new(),
		}
	}

	/// Read-only editors ignore interactive mutation and focus requests.
	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	/// True if interactive mutation is disabled.
	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	/// True if this editor instance holds focus.
	///
	/// Set only by a completed [`focus`](Self::focus) transition; cleared
	/// on blur or teardown.
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub(crate) fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
	}

	/// The block collection.
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Mutable block collection access for structural edits.
	///
	/// Positions held in path state are stale after any structural edit;
	/// callers re-derive them by id and commit a fresh path.
	pub fn document_mut(&mut self) -> &mut Document {
		&mut self.document
	}

	/// The block-type registry.
	pub fn block_types(&self) -> &BlockTypeRegistry {
		&self.block_types
	}

	/// Mutable block-type registry access.
	pub fn block_types_mut(&mut self) -> &mut BlockTypeRegistry {
		&mut self.block_types
	}

	/// The inline-editor registry.
	pub fn inline_editors(&self) -> &InlineEditorRegistry {
		&self.inline_editors
	}

	/// Mutable registry access, used by block mount and unmount.
	pub fn inline_editors_mut(&mut self) -> &mut InlineEditorRegistry {
		&mut self.inline_editors
	}

	/// Current path state.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Position of the block owning input focus, if any.
	pub fn get_path(&self) -> Option<usize> {
		self.path.current
	}

	/// Multi-selected positions, in interaction order.
	pub fn get_selected_paths(&self) -> &[usize] {
		&self.path.selected
	}

	/// True iff no block is current and nothing is selected.
	pub fn is_path_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Display position for a block id.
	pub fn path_of(&self, id: BlockId) -> Option<usize> {
		self.document.position_of(id)
	}

	/// Resolves the inline editor behind a query.
	///
	/// See [`InlineEditorRegistry::resolve_mut`] for the contract.
	pub fn resolve_inline_mut(
		&mut self,
		query: InlineQuery,
	) -> std::result::Result<Option<&mut dyn InlineEditor>, EditorError> {
		self.inline_editors
			.resolve_mut(&self.document, &self.block_types, query)
	}

	/// Replaces the path state.
	///
	/// Inside a [`batch`](Self::batch) scope the change applies
	/// immediately to readers, but observers see one `PathChanged` when
	/// the outermost scope commits. Outside a batch the notification
	/// fires at once.
	pub fn set_path(&mut self, path: Path) {
		trace!(current = ?path.current, selected = ?path.selected, "set path");
		self.path = path;
		if self.batch_depth == 0 {
			self.notify_path();
		} else {
			self.path_dirty = true;
		}
	}

	/// Runs `f` with path notifications deferred until the scope exits.
	///
	/// Multiple path mutations inside one scope commit as a single
	/// observable update. Nested scopes share the outermost commit; a
	/// scope that changed nothing commits nothing.
	pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
		self.batch_depth += 1;
		let out = f(self);
		self.batch_depth -= 1;
		if self.batch_depth == 0 && self.path_dirty {
			self.path_dirty = false;
			self.notify_path();
		}
		out
	}

	/// Subscribes to editor events.
	pub fn on(&mut self, subscriber: impl Fn(&Event) + 'static) {
		self.subscribers.push(Box::new(subscriber));
	}

	pub(crate) fn emit(&self, event: Event) {
		for subscriber in &self.subscribers {
			subscriber(&event);
		}
	}

	fn notify_path(&self) {
		self.emit(Event::PathChanged {
			current: self.path.current,
			selected: self.path.selected.to_vec(),
		});
	}
}
