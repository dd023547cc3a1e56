//! Pointer event types.
//!
//! These are UI-toolkit agnostic: the frontend translates its native mouse
//! events into [`PointerEvent`]s in screen coordinates and feeds them to
//! the selection controller.

/// Pointer modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	/// Horizontal offset in screen coordinates.
	pub x: f64,
	/// Vertical offset in screen coordinates.
	pub y: f64,
}

impl Point {
	/// Creates a point from screen coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
	/// The primary button (usually left).
	Primary,
	/// The secondary button (usually right).
	Secondary,
	/// The middle button or wheel press.
	Middle,
	/// Any additional button, by platform index.
	Other(u16),
}

/// A pointer press, move, or release over the editor surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
	/// Pointer position in screen coordinates.
	pub position: Point,
	/// Button driving the event. Move events carry the pressed button.
	pub button: PointerButton,
	/// Modifier keys held during the event.
	pub modifiers: Modifiers,
}

impl PointerEvent {
	/// A primary-button event at `position` with no modifiers.
	pub fn primary(position: Point) -> Self {
		Self {
			position,
			button: PointerButton::Primary,
			modifiers: Modifiers::NONE,
		}
	}

	/// Returns this event with the given modifiers.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Returns this event with the given button.
	pub fn with_button(mut self, button: PointerButton) -> Self {
		self.button = button;
		self
	}
}
