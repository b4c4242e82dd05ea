//! The interaction state machine.
//!
//! [`reduce`] is a pure function: given the current state and one event it
//! returns the next state plus the commands the host has to apply. Executor
//! results come back in as follow-up events ([`FrameEvent::LinkCreated`],
//! [`FrameEvent::NodeCreated`]).

use log::{debug, warn};

use super::command::Command;
use super::policy::{InteractionPolicy, Modifiers};
use super::state::{Gesture, InteractionState};
use super::types::{Endpoint, ItemId, LinkPatch, NodeDescriptor, Point};

/// Input to the state machine.
///
/// Pointer events carry page coordinates; the reducer translates them with
/// the measured container offset.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
	/// The container offset was measured after mount.
	Mounted {
		/// Page position of the container.
		offset: Point,
	},
	/// Click anywhere on the canvas.
	Click,
	/// Double-click on the empty canvas.
	DoubleClick {
		/// Page position of the click.
		client: Point,
	},
	/// Mouse-down on the empty canvas.
	MouseDown,
	/// Pointer moved over the canvas.
	MouseMove {
		/// Page position of the pointer.
		client: Point,
	},
	/// Button released over the canvas.
	MouseUp,
	/// Pointer left the canvas.
	MouseLeave,
	/// Click on a node or link.
	SelectItem {
		/// Clicked item.
		id: ItemId,
		/// Keys held during the click.
		modifiers: Modifiers,
	},
	/// Mouse-down on a node body.
	BeginDragItem {
		/// Pressed item.
		id: ItemId,
		/// Keys held during the press.
		modifiers: Modifiers,
	},
	/// Mouse-down on an output pin.
	CreateLink {
		/// The pressed pin.
		from: Endpoint,
	},
	/// The executor created the link requested by [`FrameEvent::CreateLink`].
	LinkCreated {
		/// Id of the new link.
		id: ItemId,
	},
	/// Mouse-down on the target end of an existing link.
	StartDraggingLink {
		/// Grabbed link.
		id: ItemId,
	},
	/// A pin asks to change the ends of a link, usually the dragged one.
	UpdateLink {
		/// Link to change.
		id: ItemId,
		/// Ends to change.
		patch: LinkPatch,
	},
	/// The selector confirmed a node to create.
	CreateNode(NodeDescriptor),
	/// The executor created the node requested by [`FrameEvent::CreateNode`].
	NodeCreated {
		/// Id of the new node.
		id: ItemId,
	},
	/// A request from the inspector, passed through to the executor.
	Inspector(Command),
}

/// Result of one reduction step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
	/// State after the event.
	pub state: InteractionState,
	/// Commands for the executor, in order.
	pub commands: Vec<Command>,
}

/// Compute the state following `event`.
pub fn reduce(
	state: &InteractionState,
	event: FrameEvent,
	policy: &InteractionPolicy,
) -> Transition {
	let mut next = state.clone();
	let mut commands = Vec::new();

	match event {
		FrameEvent::Mounted { offset } => {
			if next.offset.is_none() {
				next.offset = Some(offset);
			}
		}

		FrameEvent::Click => next.selector = None,

		FrameEvent::DoubleClick { client } => match next.to_canvas(client) {
			Some(pointer) => {
				next.pointer = Some(pointer);
				next.selector = Some(pointer);
			}
			None => warn!("node-frame: double click before mount, ignored"),
		},

		FrameEvent::MouseDown => {
			next.selected.clear();
			if matches!(next.gesture, Gesture::DraggingItems(_)) {
				next.gesture = Gesture::Idle;
			}
		}

		FrameEvent::MouseMove { client } => {
			let Some(pointer) = next.to_canvas(client) else {
				return Transition {
					state: next,
					commands,
				};
			};
			let delta = state
				.pointer
				.map_or(Point::default(), |previous| pointer - previous);
			next.pointer = Some(pointer);
			if let Gesture::DraggingItems(ids) = &next.gesture {
				commands.push(Command::DragItems {
					delta,
					ids: ids.clone(),
				});
			}
		}

		FrameEvent::MouseUp => {
			if let Some(id) = next.dragged_link_id() {
				commands.push(Command::DeleteLink(id.to_string()));
			} else {
				next.selected.clear();
			}
			next.gesture = Gesture::Idle;
			next.pointer = None;
		}

		FrameEvent::MouseLeave => {
			if let Some(id) = next.dragged_link_id() {
				commands.push(Command::DeleteLink(id.to_string()));
			}
			next.gesture = Gesture::Idle;
			next.pointer = None;
			next.selector = None;
		}

		FrameEvent::SelectItem { id, modifiers } => {
			if let Some(link) = next.dragged_link_id() {
				// Releasing a dragged link over an item drops the link.
				commands.push(Command::DeleteLink(link.to_string()));
				next.gesture = Gesture::Idle;
			} else {
				if let Some(index) = next.selected.iter().position(|s| *s == id) {
					next.selected.remove(index);
				} else if policy.multi_select.accepts(modifiers) {
					next.selected.push(id.clone());
				} else {
					next.selected = vec![id.clone()];
				}
				next.gesture = Gesture::Idle;
				next.raise(&id);
			}
		}

		FrameEvent::BeginDragItem { id, modifiers } => match &mut next.gesture {
			Gesture::DraggingLink(_) => {
				debug!("node-frame: item drag while dragging a link, ignored");
			}
			Gesture::DraggingItems(ids) => {
				if !ids.contains(&id) {
					if policy.multi_select.accepts(modifiers) {
						ids.push(id);
					} else {
						*ids = vec![id];
					}
				}
				next.selected.clear();
			}
			Gesture::Idle => {
				next.gesture = Gesture::DraggingItems(vec![id]);
				next.selected.clear();
			}
		},

		FrameEvent::CreateLink { from } => {
			if !matches!(next.gesture, Gesture::DraggingLink(_)) {
				next.gesture = Gesture::Idle;
			}
			commands.push(Command::CreateLink { from });
		}

		FrameEvent::LinkCreated { id } => next.gesture = Gesture::DraggingLink(id),

		FrameEvent::StartDraggingLink { id } => {
			commands.push(Command::UpdateLink {
				id: id.clone(),
				patch: LinkPatch::disconnect(),
			});
			next.gesture = Gesture::DraggingLink(id);
		}

		FrameEvent::UpdateLink { id, patch } => {
			if patch.is_disconnecting() {
				next.gesture = Gesture::DraggingLink(id.clone());
			} else if next.dragged_link_id().is_some() {
				next.gesture = Gesture::Idle;
			}
			commands.push(Command::UpdateLink { id, patch });
		}

		FrameEvent::CreateNode(descriptor) => commands.push(Command::CreateNode(descriptor)),

		FrameEvent::NodeCreated { id } => {
			next.selected = vec![id.clone()];
			next.selector = None;
			next.raise(&id);
		}

		FrameEvent::Inspector(command) => {
			if let Some(id) = command.deletes() {
				next.forget(id);
			}
			commands.push(command);
		}
	}

	Transition {
		state: next,
		commands,
	}
}
