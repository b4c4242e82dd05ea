//! In-memory graph model.
//!
//! [`View`] doubles as a reference [`CommandExecutor`], which is what the demo
//! app and the tests drive. Hosts with their own storage implement the trait
//! on their own type instead.

use leptos::prelude::*;
use log::debug;

use super::command::{Command, CommandExecutor};
use super::types::{ItemId, Link, Node, Pin, View};

impl View {
	/// First free id of the form `{prefix}{n}`.
	pub fn next_id(&self, prefix: &str) -> ItemId {
		let mut n = 0usize;
		loop {
			let id = format!("{prefix}{n}");
			if !self.contains(&id) {
				return id;
			}
			n += 1;
		}
	}

	fn remove_node(&mut self, id: &str) {
		if self.node.remove(id).is_none() {
			return;
		}
		self.link.retain(|_, link| !link.touches(id));
	}

	fn remove_pin(&mut self, node_id: &str, index: usize, input: bool) {
		let Some(node) = self.node.get_mut(node_id) else {
			return;
		};
		let pins = if input { &mut node.ins } else { &mut node.outs };
		if index >= pins.len() {
			return;
		}
		pins.remove(index);

		self.link
			.retain(|_, link| pin_end(link, node_id, input).is_none_or(|pin| *pin != index));
		for link in self.link.values_mut() {
			if let Some(pin) = pin_end(link, node_id, input) {
				if *pin > index {
					*pin -= 1;
				}
			}
		}
	}
}

/// Pin index of the end of `link` that sits on `node_id`, on the input or output side.
fn pin_end<'a>(link: &'a mut Link, node_id: &str, input: bool) -> Option<&'a mut usize> {
	let end = if input { link.to.as_mut() } else { link.from.as_mut() };
	end.filter(|e| e.0 == node_id).map(|e| &mut e.1)
}

impl CommandExecutor for View {
	fn execute(&mut self, command: Command) -> Option<ItemId> {
		debug!("node-frame: model applies {:?}", command);
		match command {
			Command::CreateNode(descriptor) => {
				let id = self.next_id("n");
				self.node.insert(
					id.clone(),
					Node {
						x: descriptor.x,
						y: descriptor.y,
						width: descriptor.width,
						height: descriptor.height,
						text: descriptor.text,
						..Default::default()
					},
				);
				return Some(id);
			}
			Command::DeleteNode(id) => self.remove_node(&id),
			Command::CreateInputPin(id) => {
				if let Some(node) = self.node.get_mut(&id) {
					node.ins.push(Pin::default());
				}
			}
			Command::CreateOutputPin(id) => {
				if let Some(node) = self.node.get_mut(&id) {
					node.outs.push(Pin::default());
				}
			}
			Command::DeleteInputPin { node, index } => self.remove_pin(&node, index, true),
			Command::DeleteOutputPin { node, index } => self.remove_pin(&node, index, false),
			Command::CreateLink { from } => {
				let id = self.next_id("l");
				self.link.insert(
					id.clone(),
					Link {
						from: Some(from),
						to: None,
					},
				);
				return Some(id);
			}
			Command::UpdateLink { id, patch } => {
				if let Some(link) = self.link.get_mut(&id) {
					patch.apply(link);
				}
			}
			Command::DeleteLink(id) => {
				self.link.remove(&id);
			}
			Command::DragItems { delta, ids } => {
				for id in &ids {
					if let Some(node) = self.node.get_mut(id) {
						node.x += delta.x;
						node.y += delta.y;
					}
				}
			}
			Command::RenameNode { id, text } => {
				if let Some(node) = self.node.get_mut(&id) {
					node.text = text;
				}
			}
		}
		None
	}
}

/// Lets a reactive view signal serve as the executor, so every command
/// re-renders whatever reads the signal.
impl CommandExecutor for RwSignal<View> {
	fn execute(&mut self, command: Command) -> Option<ItemId> {
		let mut created = None;
		self.update(|view| created = view.execute(command));
		created
	}
}
