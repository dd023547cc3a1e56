//! Ordered block collection.
//!
//! Blocks are keyed by stable [`BlockId`]; display order lives in
//! `meta.order` and is recomputed after every structural edit, so order
//! values must never be held across one. Position lookups scan for a
//! matching order, which is linear in block count and acceptable at
//! document scale.

use rustc_hash::FxHashMap;
use stanza_primitives::{Block, BlockId};

#[cfg(test)]
mod tests;

/// An ordered collection of blocks.
#[derive(Debug, Clone)]
pub struct Document {
	blocks: FxHashMap<BlockId, Block>,
}

impl Default for Document {
	/// A document holding a single empty paragraph.
	fn default() -> Self {
		let mut doc = Self::empty();
		doc.insert(Block::paragraph());
		doc
	}
}

impl Document {
	/// Creates a document with no blocks.
	pub fn empty() -> Self {
		Self { blocks: FxHashMap::default() }
	}

	/// Number of blocks.
	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	/// True if the document holds no blocks.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}

	/// Appends a block at the end, assigning the next order.
	///
	/// Returns the id of the inserted block.
	pub fn insert(&mut self, mut block: Block) -> BlockId {
		block.meta.order = self.blocks.len();
		let id = block.id;
		self.blocks.insert(id, block);
		id
	}

	/// Inserts a block at `position`, shifting later siblings down.
	///
	/// A position past the end appends. Returns the id of the inserted
	/// block.
	pub fn insert_at(&mut self, position: usize, mut block: Block) -> BlockId {
		let position = position.min(self.blocks.len());
		for other in self.blocks.values_mut() {
			if other.meta.order >= position {
				other.meta.order += 1;
			}
		}
		block.meta.order = position;
		let id = block.id;
		self.blocks.insert(id, block);
		id
	}

	/// Removes a block and closes the order gap.
	///
	/// Returns the removed block, or `None` if the id is unknown. What
	/// happens to descendants is plugin policy and not handled here.
	pub fn remove(&mut self, id: BlockId) -> Option<Block> {
		let removed = self.blocks.remove(&id)?;
		for other in self.blocks.values_mut() {
			if other.meta.order > removed.meta.order {
				other.meta.order -= 1;
			}
		}
		Some(removed)
	}

	/// Moves a block to `position`, recomputing sibling orders.
	///
	/// Returns false if the id is unknown.
	pub fn move_block(&mut self, id: BlockId, position: usize) -> bool {
		let Some(mut block) = self.blocks.remove(&id) else {
			return false;
		};
		for other in self.blocks.values_mut() {
			if other.meta.order > block.meta.order {
				other.meta.order -= 1;
			}
		}
		let position = position.min(self.blocks.len());
		for other in self.blocks.values_mut() {
			if other.meta.order >= position {
				other.meta.order += 1;
			}
		}
		block.meta.order = position;
		self.blocks.insert(id, block);
		true
	}

	/// Looks up a block by id.
	pub fn by_id(&self, id: BlockId) -> Option<&Block> {
		self.blocks.get(&id)
	}

	/// Looks up a block by display position.
	pub fn by_position(&self, position: usize) -> Option<&Block> {
		self.blocks.values().find(|block| block.meta.order == position)
	}

	/// Display position of the block with the given id.
	pub fn position_of(&self, id: BlockId) -> Option<usize> {
		self.blocks.get(&id).map(|block| block.meta.order)
	}

	/// Mutable access to a block's plugin payload.
	pub fn by_id_mut(&mut self, id: BlockId) -> Option<&mut Block> {
		self.blocks.get_mut(&id)
	}

	/// Blocks in display order.
	pub fn ordered(&self) -> Vec<&Block> {
		let mut blocks: Vec<&Block> = self.blocks.values().collect();
		blocks.sort_by_key(|block| block.meta.order);
		blocks
	}
}
