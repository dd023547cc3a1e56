//! Editor event types and subscription.

/// Notifications emitted by the editor to plugins and UI bindings.
///
/// Subscribers must re-derive display state from the editor when handling
/// an event rather than caching positions across gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// The editor completed a focus transition.
	Focus(bool),
	/// The path state committed a new value.
	///
	/// Emitted once per committed batch, never per intermediate mutation.
	PathChanged {
		/// Position of the block owning input focus, if any.
		current: Option<usize>,
		/// Multi-selected positions, in interaction order.
		selected: Vec<usize>,
	},
}

pub(crate) type Subscriber = Box<dyn Fn(&Event)>;
