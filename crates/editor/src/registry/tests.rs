use std::rc::Rc;

use futures::executor::block_on;
use stanza_primitives::Block;

use super::*;
use crate::testing::{FakeInline, InlineState};

fn standard_setup() -> (Document, BlockTypeRegistry, InlineEditorRegistry, Rc<InlineState>) {
	let mut doc = Document::empty();
	let id = doc.insert(Block::paragraph());
	let state = Rc::new(InlineState::default());
	let mut registry = InlineEditorRegistry::new();
	registry.register(id, Box::new(FakeInline::new(Rc::clone(&state))));
	(doc, BlockTypeRegistry::new(), registry, state)
}

#[test]
fn resolves_by_id() {
	let (doc, types, mut registry, _) = standard_setup();
	let id = doc.by_position(0).unwrap().id;
	let inline = registry.resolve_mut(&doc, &types, InlineQuery::by_id(id)).unwrap();
	assert!(inline.is_some());
}

#[test]
fn resolves_by_position_through_order_scan() {
	let (mut doc, types, mut registry, _) = standard_setup();
	let second = doc.insert(Block::paragraph());
	registry.register(second, Box::new(FakeInline::new(Rc::new(InlineState::default()))));

	let inline = registry.resolve_mut(&doc, &types, InlineQuery::at(1));
	assert!(inline.unwrap().is_some());
}

#[test]
fn empty_query_is_a_contract_violation() {
	let (doc, types, mut registry, _) = standard_setup();
	let err = registry.resolve_mut(&doc, &types, InlineQuery::default()).unwrap_err();
	assert!(matches!(err, EditorError::InvalidQuery));
}

#[test]
fn unknown_position_is_an_error() {
	let (doc, types, mut registry, _) = standard_setup();
	let err = registry.resolve_mut(&doc, &types, InlineQuery::at(7)).unwrap_err();
	assert!(matches!(err, EditorError::BlockNotFound(_)));
}

#[test]
fn standard_block_without_instance_is_fatal() {
	let mut doc = Document::empty();
	let id = doc.insert(Block::paragraph());
	let types = BlockTypeRegistry::new();
	let mut registry = InlineEditorRegistry::new();

	let err = registry.resolve_mut(&doc, &types, InlineQuery::by_id(id)).unwrap_err();
	assert!(matches!(err, EditorError::MissingInlineEditor(found) if found == id));
}

#[test]
fn custom_editor_blocks_resolve_to_none() {
	let mut doc = Document::empty();
	let id = doc.insert(Block::build("Embed"));
	let mut types = BlockTypeRegistry::new();
	types.register("Embed", BlockType { has_custom_editor: true });
	let mut registry = InlineEditorRegistry::new();

	// No instance registered, and that is fine for a custom editor.
	let inline = registry.resolve_mut(&doc, &types, InlineQuery::by_id(id)).unwrap();
	assert!(inline.is_none());
}

#[test]
fn unregister_drops_the_instance() {
	let (doc, types, mut registry, _) = standard_setup();
	let id = doc.by_position(0).unwrap().id;
	assert!(registry.unregister(id));
	assert!(!registry.unregister(id));
	assert!(registry.is_empty());

	let err = registry.resolve_mut(&doc, &types, InlineQuery::by_id(id)).unwrap_err();
	assert!(matches!(err, EditorError::MissingInlineEditor(_)));
}

#[test]
fn focus_request_completes_through_the_future() {
	let (doc, types, mut registry, state) = standard_setup();
	let id = doc.by_position(0).unwrap().id;

	let pending = registry
		.request_focus(&doc, &types, InlineQuery::by_id(id), FocusOptions { wait_execution: true })
		.unwrap()
		.expect("standard block has an inline editor");

	// Focus applies only once the completion future is driven.
	assert!(!state.focused.get());
	block_on(pending).unwrap();
	assert!(state.focused.get());
}

#[test]
fn query_display_names_the_lookup_key() {
	assert_eq!(InlineQuery::at(3).to_string(), "position 3");
	assert_eq!(InlineQuery::default().to_string(), "empty query");
}
