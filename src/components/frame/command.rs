//! Mutation intents emitted by the interaction core.
//!
//! The frame never touches the [`View`](super::types::View) itself. It hands
//! [`Command`] values to whatever [`CommandExecutor`] the host injects.

use super::types::{Endpoint, ItemId, LinkPatch, NodeDescriptor, Point};

/// A requested change to the host's graph model.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	/// Add a node. The executor answers with the new node id.
	CreateNode(NodeDescriptor),
	/// Remove a node and every link touching it.
	DeleteNode(ItemId),
	/// Append an input pin to a node.
	CreateInputPin(ItemId),
	/// Append an output pin to a node.
	CreateOutputPin(ItemId),
	/// Remove input pin `index` of `node`.
	DeleteInputPin {
		/// Node id.
		node: ItemId,
		/// Pin index.
		index: usize,
	},
	/// Remove output pin `index` of `node`.
	DeleteOutputPin {
		/// Node id.
		node: ItemId,
		/// Pin index.
		index: usize,
	},
	/// Add a dangling link leaving `from`. The executor answers with the new link id.
	CreateLink {
		/// Output pin the link leaves from.
		from: Endpoint,
	},
	/// Change the ends of a link.
	UpdateLink {
		/// Link id.
		id: ItemId,
		/// Ends to change.
		patch: LinkPatch,
	},
	/// Remove a link.
	DeleteLink(ItemId),
	/// Move every listed item by `delta`.
	DragItems {
		/// Displacement since the last pointer move.
		delta: Point,
		/// Items to move.
		ids: Vec<ItemId>,
	},
	/// Change the label of a node.
	RenameNode {
		/// Node id.
		id: ItemId,
		/// New label.
		text: String,
	},
}

/// Kind of item a command brings into existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Created {
	/// A node id.
	Node,
	/// A link id.
	Link,
}

impl Command {
	/// Which kind of id the executor is expected to return, if any.
	pub fn creates(&self) -> Option<Created> {
		match self {
			Command::CreateNode(_) => Some(Created::Node),
			Command::CreateLink { .. } => Some(Created::Link),
			_ => None,
		}
	}

	/// Id of the item this command removes, if any.
	pub fn deletes(&self) -> Option<&str> {
		match self {
			Command::DeleteNode(id) | Command::DeleteLink(id) => Some(id.as_str()),
			_ => None,
		}
	}
}

/// Host side of the frame: applies commands to the authoritative model.
pub trait CommandExecutor {
	/// Apply `command`. Returns the new id for [`Command::CreateNode`] and
	/// [`Command::CreateLink`], `None` for everything else.
	fn execute(&mut self, command: Command) -> Option<ItemId>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
	fn execute(&mut self, command: Command) -> Option<ItemId> {
		(**self).execute(command)
	}
}
