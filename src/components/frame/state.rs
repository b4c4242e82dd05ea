//! Transient interaction state of a frame.
//!
//! Nothing here is persisted. The state is rebuilt from scratch on every
//! mount and only ever changes through [`reduce`](super::reducer::reduce).

use super::policy::RaisePolicy;
use super::types::{ItemId, Point, View};

/// What the pointer is currently doing.
///
/// Item drags and link drags cannot overlap: a frame is in exactly one of
/// these at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	/// No button held, or a press that started nothing.
	#[default]
	Idle,
	/// Moving nodes (or links) by the pointer delta. Never empty.
	DraggingItems(Vec<ItemId>),
	/// Moving the free target end of a link.
	DraggingLink(ItemId),
}

/// Everything the frame remembers between two pointer events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	pub(crate) gesture: Gesture,
	pub(crate) selected: Vec<ItemId>,
	pub(crate) pointer: Option<Point>,
	/// Where the create-node selector is open, in canvas space.
	pub(crate) selector: Option<Point>,
	pub(crate) offset: Option<Point>,
	/// Ids in the order they were last selected, oldest first.
	pub(crate) raised: Vec<ItemId>,
}

impl InteractionState {
	/// The running gesture.
	pub fn gesture(&self) -> &Gesture {
		&self.gesture
	}

	/// Id of the link whose target end follows the pointer.
	pub fn dragged_link_id(&self) -> Option<&str> {
		match &self.gesture {
			Gesture::DraggingLink(id) => Some(id),
			_ => None,
		}
	}

	/// Items moved by the running drag; empty unless dragging items.
	pub fn dragged_items(&self) -> &[ItemId] {
		match &self.gesture {
			Gesture::DraggingItems(ids) => ids,
			_ => &[],
		}
	}

	/// Selected ids in selection order.
	pub fn selected_items(&self) -> &[ItemId] {
		&self.selected
	}

	/// Whether `id` is part of the selection.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.iter().any(|s| s == id)
	}

	/// Whether `id` moves with the running drag.
	pub fn is_dragged(&self, id: &str) -> bool {
		self.dragged_items().iter().any(|s| s == id)
	}

	/// Last canvas-local pointer position.
	pub fn pointer(&self) -> Option<Point> {
		self.pointer
	}

	/// Whether the create-node selector is open.
	pub fn show_selector(&self) -> bool {
		self.selector.is_some()
	}

	/// Canvas position the selector was opened at. Pointer moves leave it
	/// where it is.
	pub fn selector_anchor(&self) -> Option<Point> {
		self.selector
	}

	/// Page offset of the container, once measured.
	pub fn offset(&self) -> Option<Point> {
		self.offset
	}

	/// Items handed to the inspector: the selection followed by dragged
	/// items that are not selected.
	pub fn inspected_items(&self) -> Vec<ItemId> {
		let mut items = self.selected.clone();
		for id in self.dragged_items() {
			if !items.contains(id) {
				items.push(id.clone());
			}
		}
		items
	}

	/// Translate a page coordinate into canvas space. `None` until the
	/// container offset is known.
	pub fn to_canvas(&self, client: Point) -> Option<Point> {
		self.offset.map(|offset| client - offset)
	}

	/// Drop every id that `view` no longer contains. Returns whether anything
	/// was removed.
	pub fn prune(&mut self, view: &View) -> bool {
		let before = (self.selected.len(), self.raised.len());
		self.selected.retain(|id| view.contains(id));
		self.raised.retain(|id| view.contains(id));
		let mut changed = before != (self.selected.len(), self.raised.len());

		match &mut self.gesture {
			Gesture::DraggingItems(ids) => {
				let len = ids.len();
				ids.retain(|id| view.contains(id));
				if ids.len() != len {
					changed = true;
				}
				if ids.is_empty() {
					self.gesture = Gesture::Idle;
				}
			}
			Gesture::DraggingLink(id) if !view.link.contains_key(id.as_str()) => {
				self.gesture = Gesture::Idle;
				changed = true;
			}
			_ => {}
		}
		changed
	}

	/// Node ids in paint order.
	///
	/// Two stable passes over the view order: nodes that stay in the
	/// background first, then the raised ones.
	pub fn node_render_order(&self, view: &View, raise: RaisePolicy) -> Vec<ItemId> {
		match raise {
			RaisePolicy::SelectedOnTop => {
				let (top, bottom): (Vec<&ItemId>, Vec<&ItemId>) =
					view.node.keys().partition(|id| self.is_selected(id));
				bottom.into_iter().chain(top).cloned().collect()
			}
			RaisePolicy::KeepRaised => {
				let mut order: Vec<ItemId> = view
					.node
					.keys()
					.filter(|id| !self.raised.contains(id))
					.cloned()
					.collect();
				order.extend(
					self.raised
						.iter()
						.filter(|id| view.node.contains_key(id.as_str()))
						.cloned(),
				);
				order
			}
		}
	}

	pub(crate) fn raise(&mut self, id: &str) {
		self.raised.retain(|r| r != id);
		self.raised.push(id.to_string());
	}

	/// Forget `id` everywhere, as after it was deleted.
	pub(crate) fn forget(&mut self, id: &str) {
		self.selected.retain(|s| s != id);
		self.raised.retain(|r| r != id);
		match &mut self.gesture {
			Gesture::DraggingItems(ids) => {
				ids.retain(|d| d != id);
				if ids.is_empty() {
					self.gesture = Gesture::Idle;
				}
			}
			Gesture::DraggingLink(link) if *link == id => self.gesture = Gesture::Idle,
			_ => {}
		}
	}
}
