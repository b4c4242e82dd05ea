//! Level 4: Create-Node Popup Tests
//!
//! Tests the double-click selector, node creation and the inspector requests.

mod common;

use common::{click, mounted, move_to};
use node_frame::components::frame::{Command, FrameEvent, NodeDescriptor, Point, View};

fn open_at(surface: &mut common::Surface, x: f64, y: f64) {
	surface.dispatch(FrameEvent::DoubleClick {
		client: Point::new(x, y),
	});
}

#[test]
fn test_double_click_opens_popup_at_pointer() {
	let mut surface = mounted(View::default(), Point::default());

	open_at(&mut surface, 40.0, 40.0);
	assert!(surface.state().show_selector());
	assert_eq!(surface.state().pointer(), Some(Point::new(40.0, 40.0)));
}

#[test]
fn test_confirm_creates_and_selects_node() {
	let mut surface = mounted(View::default(), Point::default());
	surface.dispatch(click("stale"));

	open_at(&mut surface, 40.0, 40.0);
	let anchor = surface.state().selector_anchor().unwrap();
	surface.dispatch(FrameEvent::CreateNode(NodeDescriptor::at(anchor, "sum")));

	let executor = surface.executor();
	assert_eq!(
		executor.matching(|c| matches!(c, Command::CreateNode(_))).len(),
		1
	);
	let (id, node) = executor.view.node.iter().next().unwrap();
	assert_eq!((node.x, node.y), (40.0, 40.0));
	assert_eq!(node.text, "sum");

	assert_eq!(surface.state().selected_items(), [id.clone()]);
	assert!(!surface.state().show_selector());
}

#[test]
fn test_popup_stays_where_it_was_opened() {
	let mut surface = mounted(View::default(), Point::default());

	open_at(&mut surface, 40.0, 40.0);
	surface.dispatch(move_to(60.0, 67.0));
	assert!(surface.state().show_selector());
	assert_eq!(surface.state().pointer(), Some(Point::new(60.0, 67.0)));
	assert_eq!(surface.state().selector_anchor(), Some(Point::new(40.0, 40.0)));

	let anchor = surface.state().selector_anchor().unwrap();
	surface.dispatch(FrameEvent::CreateNode(NodeDescriptor::at(anchor, "sum")));
	let node = surface.executor().view.node.values().next().unwrap();
	assert_eq!((node.x, node.y), (40.0, 40.0));
}

#[test]
fn test_popup_respects_container_offset() {
	let mut surface = mounted(View::default(), Point::new(10.0, 30.0));

	open_at(&mut surface, 50.0, 50.0);
	assert_eq!(surface.state().selector_anchor(), Some(Point::new(40.0, 20.0)));
}

#[test]
fn test_click_and_leave_close_popup() {
	let mut surface = mounted(View::default(), Point::default());

	open_at(&mut surface, 1.0, 1.0);
	surface.dispatch(FrameEvent::Click);
	assert!(!surface.state().show_selector());

	open_at(&mut surface, 1.0, 1.0);
	surface.dispatch(FrameEvent::MouseLeave);
	assert!(!surface.state().show_selector());
	assert!(surface.executor().commands.is_empty());
}

#[test]
fn test_popup_needs_mount() {
	let mut surface =
		node_frame::InteractionSurface::new(common::RecordingExecutor::new(View::default()));

	open_at(&mut surface, 40.0, 40.0);
	assert!(!surface.state().show_selector());
}

// ============================================================================
// Inspector
// ============================================================================

#[test]
fn test_inspector_edits_pins_and_text() {
	let mut surface = mounted(View::default(), Point::default());
	open_at(&mut surface, 0.0, 0.0);
	surface.dispatch(FrameEvent::CreateNode(NodeDescriptor::at(
		Point::default(),
		"node",
	)));
	let id = surface.state().selected_items()[0].clone();

	for command in [
		Command::CreateInputPin(id.clone()),
		Command::CreateInputPin(id.clone()),
		Command::CreateOutputPin(id.clone()),
		Command::DeleteInputPin {
			node: id.clone(),
			index: 1,
		},
		Command::RenameNode {
			id: id.clone(),
			text: "renamed".into(),
		},
	] {
		surface.dispatch(FrameEvent::Inspector(command));
	}

	let node = &surface.executor().view.node[&id];
	assert_eq!(node.ins.len(), 1);
	assert_eq!(node.outs.len(), 1);
	assert_eq!(node.text, "renamed");
	assert_eq!(surface.state().inspected_items(), vec![id.clone()]);

	surface.dispatch(FrameEvent::Inspector(Command::DeleteNode(id.clone())));
	assert!(surface.executor().view.node.is_empty());
	assert!(surface.state().inspected_items().is_empty());
}
