//! Path state and resolution.
//!
//! `current` and `selected` are display positions, never ids. Positions are
//! recomputed on every structural edit, so path state must be re-derived
//! through the document after any insert, delete, or reorder. `current =
//! None` with an empty `selected` is the canonical "nothing selected"
//! state.
//!
//! All reads here are pure; the only mutation entry point is
//! [`Editor::set_path`](crate::Editor::set_path), which commits through the
//! batched-operation scope.

use smallvec::SmallVec;


/// Inline buffer for selected positions before spilling to the heap.
pub type SelectedPaths = SmallVec<[usize; 8]>;

/// Selection state: the focused position plus any multi-selected set.
///
/// Invariant: when `selected` is non-empty, `current` is a member of it or
/// the most recently interacted position. The gesture and shift-click code
/// maintain this by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
	/// Position of the block owning input focus, if any.
	pub current: Option<usize>,
	/// Multi-selected positions, in interaction order.
	pub selected: SelectedPaths,
}

impl Path {
	/// The canonical empty path: no current block, nothing selected.
	pub fn empty() -> Self {
		Self::default()
	}

	/// A path focused on a single position with no multi-selection.
	pub fn at(position: usize) -> Self {
		Self {
			current: Some(position),
			selected: SelectedPaths::new(),
		}
	}

	/// A path with both a current position and a selected set.
	pub fn with_selected(position: usize, selected: impl IntoIterator<Item = usize>) -> Self {
		Self {
			current: Some(position),
			selected: selected.into_iter().collect(),
		}
	}

	/// True iff no block is current and nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.current.is_none() && self.selected.is_empty()
	}

	/// True if `position` is part of the multi-selected set.
	pub fn is_selected(&self, position: usize) -> bool {
		self.selected.contains(&position)
	}

	/// Position after `current`, if a current position exists.
	///
	/// Callers bound-check against the document; the path state does not
	/// know how many blocks exist.
	pub fn next(&self) -> Option<usize> {
		self.current.map(|current| current + 1)
	}

	/// Position before `current`, if one exists and is not the first.
	pub fn previous(&self) -> Option<usize> {
		self.current.and_then(|current| current.checked_sub(1))
	}
}
