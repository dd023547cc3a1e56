//! Mouse-driven multi-block selection gestures.
//!
//! A gesture runs from pointer-down to pointer-up and may extend the
//! selection across block boundaries. Moves are hit-tested at the
//! pointer's screen coordinates rather than the press target, since a fast
//! drag can skip elements entirely. While no gesture is active the move
//! handler does nothing, which models the document-level listeners being
//! detached outside a gesture.
//!
//! All path updates for one input event commit inside a single
//! [`Editor::batch`] scope, so observers never see a half-updated path.

use stanza_primitives::{BlockId, Point, PointerButton, PointerEvent};
use tracing::{debug, warn};

use crate::editor::Editor;
use crate::paths::{Path, SelectedPaths};
use crate::registry::{CollapseTarget, InlineQuery};


/// Resolves a screen point to the block rendered under it.
///
/// Implemented by the frontend over its layout; the controller never looks
/// at event targets directly.
pub trait HitTest {
	/// Id of the block at `point`, if any.
	fn block_at(&self, point: Point) -> Option<BlockId>;
}

/// Outcome of a best-effort inline selection collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseOutcome {
	/// The inline selection was collapsed (or there was none to begin
	/// with).
	Collapsed,
	/// Nothing to collapse: no current block, or the block type supplies
	/// a custom editor.
	Unsupported,
	/// The engine rejected the operation. Logged and otherwise ignored.
	Failed,
}

/// Gesture progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
	/// No pointer is down.
	#[default]
	Idle,
	/// Pointer down on a block; the drag has not left it yet.
	Started { start: usize, current: usize },
	/// The drag has crossed into a different block.
	InProgress { start: usize, current: usize },
}

/// Pointer-driven single- and multi-block selection controller.
///
/// Owns only gesture state; path state lives on the [`Editor`] and inline
/// editor instances stay in the registry, looked up on demand.
#[derive(Debug, Default)]
pub struct MultiSelect {
	gesture: Gesture,
}

impl MultiSelect {
	/// Creates an idle controller.
	pub fn new() -> Self {
		Self::default()
	}

	/// True while a pointer gesture is active.
	pub fn is_active(&self) -> bool {
		!matches!(self.gesture, Gesture::Idle)
	}

	/// Handles a pointer press over the editor surface.
	///
	/// Read-only editors ignore the press entirely. A plain press (no
	/// shift, no alt) drops any live multi-selection before the new
	/// gesture starts, committed atomically with the rest of the update.
	pub fn on_pointer_down(&mut self, editor: &mut Editor, event: &PointerEvent, hit: &dyn HitTest) {
		if editor.is_read_only() {
			return;
		}
		editor.batch(|editor| {
			if !editor.get_selected_paths().is_empty()
				&& !event.modifiers.shift
				&& !event.modifiers.alt
			{
				editor.set_path(Path::empty());
			}

			if event.button != PointerButton::Primary {
				return;
			}
			let Some(id) = hit.block_at(event.position) else {
				return;
			};
			let Some(order) = editor.path_of(id) else {
				return;
			};

			self.gesture = Gesture::Started { start: order, current: order };
			debug!(order, "block press");

			if event.modifiers.shift
				&& !editor.is_path_empty()
				&& Some(order) != editor.get_path()
			{
				extend_from_current(editor, order);
				// Shift extension never arms drag tracking.
				self.gesture = Gesture::Idle;
				return;
			}

			if Some(order) != editor.get_path() {
				editor.set_path(Path::at(order));
			}
		});
	}

	/// Handles pointer movement during an active gesture.
	///
	/// No-op while idle or read-only. Hit-tests at the pointer position,
	/// extends the selection to the contiguous range between the gesture's
	/// start block and the block under the pointer, and narrows back to
	/// the start block alone when the drag returns to it.
	pub fn on_pointer_move(&mut self, editor: &mut Editor, event: &PointerEvent, hit: &dyn HitTest) {
		if editor.is_read_only() {
			return;
		}
		let (start, tracked) = match self.gesture {
			Gesture::Idle => return,
			Gesture::Started { start, current } | Gesture::InProgress { start, current } => {
				(start, current)
			}
		};
		let Some(id) = hit.block_at(event.position) else {
			return;
		};
		let Some(order) = editor.path_of(id) else {
			return;
		};

		editor.batch(|editor| {
			// The drag came back to its start block: narrow to that single
			// position.
			if matches!(self.gesture, Gesture::InProgress { .. }) && order == start {
				self.gesture = Gesture::InProgress { start, current: order };
				editor.set_path(Path::with_selected(order, [order]));
				return;
			}

			if order != tracked {
				self.gesture = Gesture::InProgress { start, current: order };
				debug!(start, current = order, "extending block selection");

				// A live inline caret must not survive into a block range
				// selection.
				blur_inline_selection(editor);

				let lo = start.min(order);
				let hi = start.max(order);
				editor.set_path(Path::with_selected(order, lo..=hi));
			}
		});
	}

	/// Handles pointer release; ends any active gesture.
	///
	/// After this, moves are ignored until the next press.
	pub fn on_pointer_up(&mut self) {
		if self.is_active() {
			debug!("multi-select gesture ended");
		}
		self.gesture = Gesture::Idle;
	}
}

/// Collapses and blurs the current block's inline selection.
///
/// Best-effort by contract: a missing current block, a custom editor, a
/// missing instance, or an engine failure leaves the path state untouched
/// and never interrupts the calling gesture. Calling this twice in a row
/// is observationally the same as calling it once.
pub fn blur_inline_selection(editor: &mut Editor) -> CollapseOutcome {
	let Some(current) = editor.get_path() else {
		return CollapseOutcome::Unsupported;
	};

	let inline = match editor.resolve_inline_mut(InlineQuery::at(current)) {
		Ok(Some(inline)) => inline,
		Ok(None) => return CollapseOutcome::Unsupported,
		Err(err) => {
			warn!(position = current, %err, "inline collapse skipped");
			return CollapseOutcome::Failed;
		}
	};

	if let Err(err) = inline.collapse_selection(CollapseTarget::Start) {
		warn!(position = current, %err, "inline collapse failed");
		return CollapseOutcome::Failed;
	}
	if inline.has_expanded_selection() {
		if let Err(err) = inline.blur() {
			warn!(position = current, %err, "inline blur failed");
			return CollapseOutcome::Failed;
		}
		if let Err(err) = inline.deselect() {
			warn!(position = current, %err, "inline deselect failed");
			return CollapseOutcome::Failed;
		}
	}
	CollapseOutcome::Collapsed
}

/// Extends the selection from the current position to `target` on a
/// shift-click.
///
/// The selected set is the inclusive range between the two, walked away
/// from the old current position, with the old current appended last;
/// `current` moves to `target`.
fn extend_from_current(editor: &mut Editor, target: usize) {
	blur_inline_selection(editor);

	let Some(current) = editor.get_path() else {
		return;
	};

	let mut selected = SelectedPaths::new();
	if target > current {
		selected.extend(current + 1..=target);
	} else {
		selected.extend((target..current).rev());
	}
	selected.push(current);

	editor.set_path(Path { current: Some(target), selected });
}
