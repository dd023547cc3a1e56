//! Initial focus transition onto the first block.

use tracing::warn;

use super::Editor;
use crate::error::Result;
use crate::events::Event;
use crate::registry::{FocusOptions, InlineQuery};

impl Editor {
	/// Moves focus onto the first block's inline editor.
	///
	/// No-op for read-only editors and for empty documents (an empty
	/// document cannot be focused). Otherwise the focus flag is set, the
	/// engine's focus operation is driven to completion, and a
	/// [`Event::Focus`] notification is emitted.
	///
	/// This is the sole entry point for programmatic initial focus. Blur
	/// is driven separately by the multi-select collapse path. The pending
	/// focus wait has no cancellation or timeout; callers that need the
	/// post-focus state must await this method rather than assuming
	/// synchronous completion.
	///
	/// # Errors
	///
	/// Propagates the fatal configuration error of a standard first block
	/// with no registered inline editor. Engine-level focus failures are
	/// absorbed: the editor-level flag and notification stand.
	pub async fn focus(&mut self) -> Result<()> {
		if self.read_only {
			return Ok(());
		}
		let Some(first) = self.document.by_position(0) else {
			return Ok(());
		};
		let id = first.id;

		self.set_focused(true);

		let pending = self.inline_editors.request_focus(
			&self.document,
			&self.block_types,
			InlineQuery::by_id(id),
			FocusOptions { wait_execution: true },
		)?;
		// None means the first block has a custom editor; the editor-level
		// transition still counts.
		if let Some(pending) = pending {
			if let Err(err) = pending.await {
				warn!(%id, %err, "inline focus did not complete");
			}
		}

		self.emit(Event::Focus(true));
		Ok(())
	}
}
