//! Common test utilities for integration tests.

#![allow(dead_code)]

use node_frame::components::frame::{
	Command, CommandExecutor, FrameEvent, InteractionSurface, ItemId, Modifiers, Point, View,
};

/// Applies commands to an in-memory [`View`] and remembers every one of them.
#[derive(Default)]
pub struct RecordingExecutor {
	pub view: View,
	pub commands: Vec<Command>,
}

impl RecordingExecutor {
	pub fn new(view: View) -> Self {
		Self {
			view,
			commands: Vec::new(),
		}
	}

	/// Commands matching `pred`, in execution order.
	pub fn matching(&self, pred: impl Fn(&Command) -> bool) -> Vec<&Command> {
		self.commands.iter().filter(|c| pred(*c)).collect()
	}
}

impl CommandExecutor for RecordingExecutor {
	fn execute(&mut self, command: Command) -> Option<ItemId> {
		self.commands.push(command.clone());
		self.view.execute(command)
	}
}

pub type Surface = InteractionSurface<RecordingExecutor>;

/// A surface over `view`, already mounted at `offset`.
pub fn mounted(view: View, offset: Point) -> Surface {
	let mut surface = InteractionSurface::new(RecordingExecutor::new(view));
	surface.dispatch(FrameEvent::Mounted { offset });
	surface
}

/// Re-sync the surface with the executor's current view, as the component
/// does after every view change.
pub fn sync(surface: &mut Surface) {
	let view = surface.executor().view.clone();
	surface.sync_view(&view);
}

pub fn click(id: &str) -> FrameEvent {
	FrameEvent::SelectItem {
		id: id.into(),
		modifiers: Modifiers::NONE,
	}
}

pub fn shift_click(id: &str) -> FrameEvent {
	FrameEvent::SelectItem {
		id: id.into(),
		modifiers: Modifiers::SHIFT,
	}
}

pub fn grab(id: &str) -> FrameEvent {
	FrameEvent::BeginDragItem {
		id: id.into(),
		modifiers: Modifiers::NONE,
	}
}

pub fn move_to(x: f64, y: f64) -> FrameEvent {
	FrameEvent::MouseMove {
		client: Point::new(x, y),
	}
}
