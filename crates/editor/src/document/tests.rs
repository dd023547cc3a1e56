use stanza_primitives::DEFAULT_BLOCK_TYPE;

use super::*;

#[test]
fn default_document_holds_one_paragraph() {
	let doc = Document::default();
	assert_eq!(doc.len(), 1);
	let first = doc.by_position(0).unwrap();
	assert_eq!(first.block_type, DEFAULT_BLOCK_TYPE);
}

#[test]
fn insert_appends_in_order() {
	let mut doc = Document::empty();
	let a = doc.insert(Block::build("Heading"));
	let b = doc.insert(Block::paragraph());
	assert_eq!(doc.position_of(a), Some(0));
	assert_eq!(doc.position_of(b), Some(1));
}

#[test]
fn insert_at_shifts_later_siblings() {
	let mut doc = Document::empty();
	let a = doc.insert(Block::paragraph());
	let b = doc.insert(Block::paragraph());
	let mid = doc.insert_at(1, Block::build("Callout"));
	assert_eq!(doc.position_of(a), Some(0));
	assert_eq!(doc.position_of(mid), Some(1));
	assert_eq!(doc.position_of(b), Some(2));
}

#[test]
fn insert_at_past_end_appends() {
	let mut doc = Document::empty();
	doc.insert(Block::paragraph());
	let tail = doc.insert_at(99, Block::paragraph());
	assert_eq!(doc.position_of(tail), Some(1));
}

#[test]
fn remove_closes_the_order_gap() {
	let mut doc = Document::empty();
	let a = doc.insert(Block::paragraph());
	let b = doc.insert(Block::paragraph());
	let c = doc.insert(Block::paragraph());
	assert!(doc.remove(b).is_some());
	assert_eq!(doc.position_of(a), Some(0));
	assert_eq!(doc.position_of(c), Some(1));
	assert!(doc.remove(b).is_none());
}

#[test]
fn move_block_recomputes_orders() {
	let mut doc = Document::empty();
	let a = doc.insert(Block::paragraph());
	let b = doc.insert(Block::paragraph());
	let c = doc.insert(Block::paragraph());
	assert!(doc.move_block(c, 0));
	assert_eq!(doc.position_of(c), Some(0));
	assert_eq!(doc.position_of(a), Some(1));
	assert_eq!(doc.position_of(b), Some(2));
}

#[test]
fn ordered_iterates_by_display_order() {
	let mut doc = Document::empty();
	let a = doc.insert(Block::paragraph());
	let b = doc.insert(Block::paragraph());
	doc.move_block(b, 0);
	let ids: Vec<_> = doc.ordered().iter().map(|block| block.id).collect();
	assert_eq!(ids, vec![b, a]);
}

#[test]
fn by_position_misses_out_of_range() {
	let doc = Document::default();
	assert!(doc.by_position(5).is_none());
}
