//! Selection and stacking policies.
//!
//! Both are plain values so they can be configured from the page and tested
//! without any pointer events.

use serde::Deserialize;

/// Keyboard modifiers held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Modifiers {
	/// Shift key.
	pub shift: bool,
	/// Control key.
	pub ctrl: bool,
	/// Alt (Option) key.
	pub alt: bool,
	/// Meta (Command, Windows) key.
	pub meta: bool,
}

impl Modifiers {
	/// No modifier held.
	pub const NONE: Modifiers = Modifiers {
		shift: false,
		ctrl: false,
		alt: false,
		meta: false,
	};

	/// Only shift held.
	pub const SHIFT: Modifiers = Modifiers {
		shift: true,
		..Modifiers::NONE
	};

	/// Whether any modifier is held.
	pub fn any(self) -> bool {
		self.shift || self.ctrl || self.alt || self.meta
	}
}

/// Which modifier turns a click into "add to selection".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectKey {
	/// Shift extends the selection.
	#[default]
	Shift,
	/// Control extends the selection.
	Control,
	/// Meta extends the selection.
	Meta,
	/// Any modifier extends the selection.
	AnyModifier,
	/// Every click replaces the selection.
	Disabled,
}

impl MultiSelectKey {
	/// Whether a click with `modifiers` extends the selection instead of replacing it.
	pub fn accepts(self, modifiers: Modifiers) -> bool {
		match self {
			MultiSelectKey::Shift => modifiers.shift,
			MultiSelectKey::Control => modifiers.ctrl,
			MultiSelectKey::Meta => modifiers.meta,
			MultiSelectKey::AnyModifier => modifiers.any(),
			MultiSelectKey::Disabled => false,
		}
	}
}

/// Where nodes end up in the paint order once they have been selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaisePolicy {
	/// Selected nodes paint last; deselected ones fall back to view order.
	#[default]
	SelectedOnTop,
	/// Nodes stay on top after deselection, most recently selected last.
	KeepRaised,
}

/// Interaction knobs of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InteractionPolicy {
	/// Modifier that adds to the selection.
	pub multi_select: MultiSelectKey,
	/// Paint order after selection.
	pub raise: RaisePolicy,
}
