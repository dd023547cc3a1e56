//! Block data and metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::BlockId;

#[cfg(test)]
mod tests;

/// Block type used when none is specified.
pub const DEFAULT_BLOCK_TYPE: &str = "Paragraph";

/// Position and nesting metadata for a block.
///
/// `order` is unique among siblings and defines display sequence. It is
/// recomputed by the owning collection whenever siblings are inserted,
/// removed, or moved, so it must never be treated as a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockMeta {
	/// Display position among siblings.
	pub order: usize,
	/// Nesting level.
	pub depth: usize,
}

/// A single typed unit of document content.
///
/// The `value` payload belongs to the owning plugin and is opaque to the
/// coordination core; only `id` and `meta` participate in selection and
/// focus handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
	/// Stable identity, immutable for the block's lifetime.
	pub id: BlockId,
	/// Plugin-defined type name.
	#[serde(rename = "type")]
	pub block_type: String,
	/// Plugin-specific inline content.
	pub value: Value,
	/// Order and depth.
	pub meta: BlockMeta,
}

impl Block {
	/// Creates a block of the given type with a fresh id and default meta.
	pub fn build(block_type: impl Into<String>) -> Self {
		Self {
			id: BlockId::new(),
			block_type: block_type.into(),
			value: Value::Array(Vec::new()),
			meta: BlockMeta::default(),
		}
	}

	/// Creates an empty paragraph block.
	pub fn paragraph() -> Self {
		Self::build(DEFAULT_BLOCK_TYPE)
	}

	/// Returns this block with the given value payload.
	pub fn with_value(mut self, value: Value) -> Self {
		self.value = value;
		self
	}
}
