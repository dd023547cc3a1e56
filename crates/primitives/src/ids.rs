//! Identifier types for editor entities.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;


/// Stable, globally unique block identity.
///
/// A `BlockId` is assigned when the block is created and never changes for
/// the block's lifetime. Display order lives separately in block metadata
/// and is recomputed across structural edits; the id is the only handle
/// that survives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
	/// Generates a fresh unique id.
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}
}

impl Default for BlockId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for BlockId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}
