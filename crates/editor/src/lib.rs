//! Editor coordination core for block-based rich-text documents.
//!
//! A document is an ordered collection of typed [`Block`]s, each backed by a
//! black-box inline editing engine. The [`Editor`] owns the state those
//! engines and the content plugins share, split across focused modules:
//!
//! - [`document`] - Ordered block collection with order recomputation
//! - [`paths`] - Position-based selection state and pure resolvers
//! - [`registry`] - Block-to-inline-editor resolution
//! - [`selection`] - Mouse-driven multi-block selection gestures
//! - [`editor`] - The shared container, batching, and the focus lifecycle
//!
//! Positions (`meta.order` values) are not stable identities: the document
//! recomputes them on every structural edit, and anything holding a position
//! across an edit must re-derive it from a [`BlockId`].

/// Ordered block collection.
pub mod document;
/// The shared editor container and focus lifecycle.
pub mod editor;
/// Error types for editor operations.
pub mod error;
/// Editor event types and subscription.
pub mod events;
/// Path state and resolution.
pub mod paths;
/// Inline editor capability and registry.
pub mod registry;
/// Mouse-driven multi-block selection gestures.
pub mod selection;

#[cfg(test)]
pub(crate) mod testing;

pub use document::Document;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use events::Event;
pub use paths::{Path, SelectedPaths};
pub use registry::{
	BlockType, BlockTypeRegistry, CollapseTarget, FocusOptions, InlineEditor,
	InlineEditorRegistry, InlineError, InlineQuery,
};
pub use selection::{CollapseOutcome, HitTest, MultiSelect, blur_inline_selection};
pub use stanza_primitives::{
	Block, BlockId, BlockMeta, Modifiers, Point, PointerButton, PointerEvent,
};
