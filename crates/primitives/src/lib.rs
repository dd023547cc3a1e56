//! Core types for the block editor: identity, block data, and pointer input.

/// Block data and metadata.
pub mod block;
/// Async future aliases.
pub mod future;
/// Identifier types for editor entities.
pub mod ids;
/// Pointer event types.
pub mod pointer;

pub use block::{Block, BlockMeta, DEFAULT_BLOCK_TYPE};
pub use future::BoxFutureLocal;
pub use ids::BlockId;
pub use pointer::{Modifiers, Point, PointerButton, PointerEvent};
