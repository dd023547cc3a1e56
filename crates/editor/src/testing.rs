//! Shared test fixtures: a fake inline engine and a row-based hit test.

use std::cell::Cell;
use std::rc::Rc;

use stanza_primitives::{Block, BlockId, BoxFutureLocal, Point};

use crate::document::Document;
use crate::editor::Editor;
use crate::registry::{BlockTypeRegistry, CollapseTarget, FocusOptions, InlineEditor, InlineError};
use crate::selection::HitTest;

/// Height of one block row in the fake layout.
pub const ROW_HEIGHT: f64 = 24.0;

/// Observable state of a [`FakeInline`] instance.
#[derive(Default)]
pub struct InlineState {
	pub focused: Cell<bool>,
	pub expanded: Cell<bool>,
	pub collapse_calls: Cell<usize>,
	pub blur_calls: Cell<usize>,
	pub deselect_calls: Cell<usize>,
	pub fail_collapse: Cell<bool>,
}

/// Inline engine double that records every call on shared state.
pub struct FakeInline {
	state: Rc<InlineState>,
}

impl FakeInline {
	pub fn new(state: Rc<InlineState>) -> Self {
		Self { state }
	}
}

impl InlineEditor for FakeInline {
	fn focus(&mut self, _options: FocusOptions) -> BoxFutureLocal<'static, Result<(), InlineError>> {
		let state = Rc::clone(&self.state);
		// The flag flips only when the completion future is driven,
		// mirroring an engine that applies focus asynchronously.
		Box::pin(async move {
			state.focused.set(true);
			Ok(())
		})
	}

	fn blur(&mut self) -> Result<(), InlineError> {
		self.state.blur_calls.set(self.state.blur_calls.get() + 1);
		self.state.focused.set(false);
		Ok(())
	}

	fn deselect(&mut self) -> Result<(), InlineError> {
		self.state.deselect_calls.set(self.state.deselect_calls.get() + 1);
		self.state.expanded.set(false);
		Ok(())
	}

	fn collapse_selection(&mut self, _target: CollapseTarget) -> Result<(), InlineError> {
		if self.state.fail_collapse.get() {
			return Err(InlineError::Backend("collapse refused".into()));
		}
		self.state.collapse_calls.set(self.state.collapse_calls.get() + 1);
		Ok(())
	}

	fn has_expanded_selection(&self) -> bool {
		self.state.expanded.get()
	}
}

/// Hit test laying blocks out as fixed-height rows, top to bottom.
pub struct RowHit {
	rows: Vec<BlockId>,
}

impl HitTest for RowHit {
	fn block_at(&self, point: Point) -> Option<BlockId> {
		if point.y < 0.0 {
			return None;
		}
		self.rows.get((point.y / ROW_HEIGHT) as usize).copied()
	}
}

/// A point inside the row of the block at `position`.
pub fn point_in_block(position: usize) -> Point {
	Point::new(4.0, position as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0)
}

/// Editor over `n` paragraph blocks with fake inline engines mounted.
pub fn fixture(n: usize) -> (Editor, RowHit, Vec<Rc<InlineState>>) {
	let mut doc = Document::empty();
	let mut rows = Vec::new();
	for _ in 0..n {
		rows.push(doc.insert(Block::paragraph()));
	}
	let mut editor = Editor::new(doc, BlockTypeRegistry::new());
	let mut states = Vec::new();
	for &id in &rows {
		let state = Rc::new(InlineState::default());
		editor
			.inline_editors_mut()
			.register(id, Box::new(FakeInline::new(Rc::clone(&state))));
		states.push(state);
	}
	(editor, RowHit { rows }, states)
}
