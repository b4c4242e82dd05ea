//! Level 1: Selection Tests
//!
//! Tests click selection, toggling, multi-select policies and paint order.

mod common;

use common::{click, mounted, shift_click, sync};
use node_frame::components::frame::render::{node_keeps_release, node_press};
use node_frame::components::frame::{
	Command, FrameEvent, Gesture, InteractionPolicy, InteractionSurface, Modifiers,
	MultiSelectKey, Node, Point, RaisePolicy, View,
};

fn three_nodes() -> View {
	let mut view = View::default();
	view.node.insert("a".into(), Node::new("a", 0.0, 0.0));
	view.node.insert("b".into(), Node::new("b", 50.0, 0.0));
	view.node.insert("c".into(), Node::new("c", 100.0, 0.0));
	view
}

#[test]
fn test_click_selects_exactly_one() {
	let mut surface = mounted(three_nodes(), Point::default());

	surface.dispatch(click("a"));
	assert_eq!(surface.state().selected_items(), ["a".to_string()]);

	surface.dispatch(click("b"));
	assert_eq!(surface.state().selected_items(), ["b".to_string()]);
}

#[test]
fn test_clicking_selected_item_clears_selection() {
	let mut surface = mounted(three_nodes(), Point::default());

	surface.dispatch(click("a"));
	surface.dispatch(click("a"));
	assert!(surface.state().selected_items().is_empty());
}

#[test]
fn test_shift_click_extends_and_toggles() {
	let mut surface = mounted(three_nodes(), Point::default());

	surface.dispatch(click("a"));
	surface.dispatch(shift_click("b"));
	surface.dispatch(shift_click("c"));
	assert_eq!(surface.state().selected_items().len(), 3);

	surface.dispatch(shift_click("b"));
	assert_eq!(
		surface.state().selected_items(),
		["a".to_string(), "c".to_string()]
	);
}

/// One click on a node body as the default node renderer delivers it:
/// mouse-down, mouse-up (unless the node keeps it), then click.
fn body_click(surface: &mut common::Surface, id: &str, modifiers: Modifiers) {
	let key = surface.policy().multi_select;
	if let Some(event) = node_press(id, modifiers, key) {
		surface.dispatch(event);
	}
	let gesture_active = *surface.state().gesture() != Gesture::Idle;
	if !node_keeps_release(modifiers, key, gesture_active) {
		surface.dispatch(FrameEvent::MouseUp);
	}
	surface.dispatch(FrameEvent::SelectItem {
		id: id.into(),
		modifiers,
	});
}

#[test]
fn test_shift_click_on_node_bodies_extends_selection() {
	let mut surface = mounted(three_nodes(), Point::default());

	body_click(&mut surface, "a", Modifiers::NONE);
	assert_eq!(surface.state().selected_items(), ["a".to_string()]);

	body_click(&mut surface, "b", Modifiers::SHIFT);
	assert_eq!(
		surface.state().selected_items(),
		["a".to_string(), "b".to_string()]
	);

	body_click(&mut surface, "a", Modifiers::SHIFT);
	assert_eq!(surface.state().selected_items(), ["b".to_string()]);

	body_click(&mut surface, "c", Modifiers::NONE);
	assert_eq!(surface.state().selected_items(), ["c".to_string()]);
	assert_eq!(*surface.state().gesture(), Gesture::Idle);
	assert!(surface.executor().commands.is_empty());
}

#[test]
fn test_plain_body_click_still_drags_first() {
	let mut surface = mounted(three_nodes(), Point::default());

	let key = surface.policy().multi_select;
	surface.dispatch(node_press("a", Modifiers::NONE, key).unwrap());
	assert_eq!(surface.state().dragged_items(), ["a".to_string()]);
	surface.dispatch(common::move_to(5.0, 5.0));
	surface.dispatch(common::move_to(9.0, 8.0));
	surface.dispatch(FrameEvent::MouseUp);

	let node = &surface.executor().view.node["a"];
	assert_eq!((node.x, node.y), (4.0, 3.0));
}

#[test]
fn test_control_policy_ignores_shift() {
	let policy = InteractionPolicy {
		multi_select: MultiSelectKey::Control,
		..Default::default()
	};
	let mut surface =
		InteractionSurface::with_policy(common::RecordingExecutor::new(three_nodes()), policy);

	surface.dispatch(click("a"));
	surface.dispatch(shift_click("b"));
	assert_eq!(surface.state().selected_items(), ["b".to_string()]);

	surface.dispatch(FrameEvent::SelectItem {
		id: "c".into(),
		modifiers: Modifiers {
			ctrl: true,
			..Modifiers::NONE
		},
	});
	assert_eq!(
		surface.state().selected_items(),
		["b".to_string(), "c".to_string()]
	);
}

#[test]
fn test_canvas_mouse_down_and_up_clear_selection() {
	let mut surface = mounted(three_nodes(), Point::default());

	surface.dispatch(click("a"));
	surface.dispatch(FrameEvent::MouseDown);
	assert!(surface.state().selected_items().is_empty());

	surface.dispatch(click("a"));
	surface.dispatch(FrameEvent::MouseUp);
	assert!(surface.state().selected_items().is_empty());
}

#[test]
fn test_selection_never_touches_the_model() {
	let mut surface = mounted(three_nodes(), Point::default());

	surface.dispatch(click("a"));
	surface.dispatch(shift_click("b"));
	assert!(surface.executor().commands.is_empty());
}

// ============================================================================
// Paint order
// ============================================================================

#[test]
fn test_selected_nodes_paint_last() {
	let mut surface = mounted(three_nodes(), Point::default());
	surface.dispatch(click("a"));

	let view = surface.executor().view.clone();
	let order = surface
		.state()
		.node_render_order(&view, RaisePolicy::SelectedOnTop);
	assert_eq!(order, vec!["b", "c", "a"]);

	surface.dispatch(click("a"));
	let order = surface
		.state()
		.node_render_order(&view, RaisePolicy::SelectedOnTop);
	assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn test_keep_raised_survives_deselection() {
	let policy = InteractionPolicy {
		raise: RaisePolicy::KeepRaised,
		..Default::default()
	};
	let mut surface =
		InteractionSurface::with_policy(common::RecordingExecutor::new(three_nodes()), policy);
	surface.dispatch(click("a"));
	surface.dispatch(click("a"));

	let view = surface.executor().view.clone();
	let order = surface
		.state()
		.node_render_order(&view, RaisePolicy::KeepRaised);
	assert_eq!(order, vec!["b", "c", "a"]);
}

// ============================================================================
// Stale ids
// ============================================================================

#[test]
fn test_deleted_node_leaves_selection() {
	let mut surface = mounted(three_nodes(), Point::default());
	surface.dispatch(click("a"));
	surface.dispatch(shift_click("b"));

	surface.dispatch(FrameEvent::Inspector(Command::DeleteNode("a".into())));
	assert_eq!(surface.state().selected_items(), ["b".to_string()]);
	assert!(!surface.executor().view.node.contains_key("a"));
}

#[test]
fn test_external_removal_is_pruned_on_sync() {
	let mut surface = mounted(three_nodes(), Point::default());
	surface.dispatch(click("c"));

	surface.executor_mut().view.node.remove("c");
	sync(&mut surface);
	assert!(surface.state().selected_items().is_empty());
}
