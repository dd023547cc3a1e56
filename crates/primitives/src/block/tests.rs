use serde_json::json;

use super::*;

#[test]
fn build_assigns_fresh_id_and_default_meta() {
	let a = Block::build("Callout");
	let b = Block::build("Callout");
	assert_ne!(a.id, b.id);
	assert_eq!(a.block_type, "Callout");
	assert_eq!(a.meta, BlockMeta::default());
}

#[test]
fn paragraph_uses_default_type() {
	let block = Block::paragraph();
	assert_eq!(block.block_type, DEFAULT_BLOCK_TYPE);
	assert_eq!(block.value, json!([]));
}

#[test]
fn with_value_replaces_payload() {
	let block = Block::paragraph().with_value(json!([{ "text": "hi" }]));
	assert_eq!(block.value[0]["text"], "hi");
}
