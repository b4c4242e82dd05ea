//! Default SVG renderers.
//!
//! Each renderer is a plain function from a props struct to an [`AnyView`].
//! Hosts swap any of them through [`Renderers`]; node renderers are picked by
//! the type name `type_of_node` returns.

use std::collections::HashMap;

use leptos::prelude::*;
use log::warn;
use web_sys::MouseEvent;

use super::command::Command;
use super::geometry::{LinkGeometry, x_of_pin};
use super::policy::{Modifiers, MultiSelectKey};
use super::reducer::FrameEvent;
use super::theme::FrameConfig;
use super::types::{Endpoint, ItemId, Link, LinkPatch, Node, NodeDescriptor, Point, View};

/// Type name under which [`default_node`] is registered.
pub const DEFAULT_NODE: &str = "DefaultNode";

/// Input of a node renderer.
#[derive(Clone)]
pub struct NodeProps {
	/// Key of the node in the view.
	pub id: ItemId,
	/// The node to draw.
	pub node: Node,
	/// Width from the frame's sizing function.
	pub width: f64,
	/// Metrics and palette.
	pub config: FrameConfig,
	/// Whether the node is part of the selection.
	pub selected: bool,
	/// Whether the node moves with the running drag.
	pub dragged: bool,
	/// Link whose target end is being dragged, if any.
	pub dragged_link_id: Option<ItemId>,
	/// True while any drag is running.
	pub gesture_active: bool,
	/// Modifier that turns a click into "add to selection".
	pub multi_select: MultiSelectKey,
	/// Sends events back to the frame.
	pub dispatch: Callback<FrameEvent>,
}

/// Input of a link renderer. Only links whose ends resolve get rendered.
#[derive(Clone)]
pub struct LinkProps {
	/// Key of the link in the view.
	pub id: ItemId,
	/// The link to draw.
	pub link: Link,
	/// Resolved end positions.
	pub geometry: LinkGeometry,
	/// Metrics and palette.
	pub config: FrameConfig,
	/// Whether the link is part of the selection.
	pub selected: bool,
	/// Link whose target end is being dragged, if any.
	pub dragged_link_id: Option<ItemId>,
	/// Sends events back to the frame.
	pub dispatch: Callback<FrameEvent>,
}

/// Input of the inspector renderer.
#[derive(Clone)]
pub struct InspectorProps {
	/// Selected items followed by dragged ones.
	pub items: Vec<ItemId>,
	/// Current graph, to look the items up.
	pub view: View,
	/// Metrics and palette.
	pub config: FrameConfig,
	/// Sends events back to the frame.
	pub dispatch: Callback<FrameEvent>,
}

/// Input of the create-node selector. Only rendered while it is open.
#[derive(Clone)]
pub struct SelectorProps {
	/// Where the user double-clicked, in canvas space.
	pub anchor: Point,
	/// Labels offered for new nodes.
	pub catalog: Vec<String>,
	/// Metrics and palette.
	pub config: FrameConfig,
	/// Sends events back to the frame.
	pub dispatch: Callback<FrameEvent>,
}

/// Draws one node.
pub type NodeRenderer = fn(NodeProps) -> AnyView;
/// Draws one link.
pub type LinkRenderer = fn(LinkProps) -> AnyView;
/// Draws the actions for the inspected items.
pub type InspectorRenderer = fn(InspectorProps) -> AnyView;
/// Draws the create-node selector.
pub type SelectorRenderer = fn(SelectorProps) -> AnyView;

/// The pluggable parts of a frame.
#[derive(Clone)]
pub struct Renderers {
	/// Node renderers keyed by the names `type_of_node` returns.
	pub node: HashMap<String, NodeRenderer>,
	/// Link renderer.
	pub link: LinkRenderer,
	/// Inspector renderer.
	pub inspector: InspectorRenderer,
	/// Selector renderer.
	pub selector: SelectorRenderer,
	/// Classifies a node into one of the keys of `node`.
	pub type_of_node: fn(&Node) -> String,
}

impl Default for Renderers {
	fn default() -> Self {
		Self {
			node: HashMap::from([(DEFAULT_NODE.to_string(), default_node as NodeRenderer)]),
			link: default_link,
			inspector: default_inspector,
			selector: default_selector,
			type_of_node: |_| DEFAULT_NODE.to_string(),
		}
	}
}

impl Renderers {
	/// Renderer for `node`, falling back to [`default_node`] for unknown types.
	pub fn node_renderer(&self, node: &Node) -> NodeRenderer {
		let kind = (self.type_of_node)(node);
		match self.node.get(&kind) {
			Some(render) => *render,
			None => {
				warn!("node-frame: no renderer for node type {:?}", kind);
				default_node
			}
		}
	}
}

pub(crate) fn modifiers_of(ev: &MouseEvent) -> Modifiers {
	Modifiers {
		shift: ev.shift_key(),
		ctrl: ev.ctrl_key(),
		alt: ev.alt_key(),
		meta: ev.meta_key(),
	}
}

fn swallow(ev: &MouseEvent) {
	ev.prevent_default();
	ev.stop_propagation();
}

/// Event a mouse-down on a node body dispatches.
///
/// With the multi-select key held the press starts no drag, so the selection
/// is still intact when the click arrives.
pub fn node_press(id: &str, modifiers: Modifiers, key: MultiSelectKey) -> Option<FrameEvent> {
	if key.accepts(modifiers) {
		return None;
	}
	Some(FrameEvent::BeginDragItem {
		id: id.to_string(),
		modifiers,
	})
}

/// Whether the mouse-up after a press on a node stays on the node instead of
/// reaching the canvas, where it would clear the selection.
pub fn node_keeps_release(modifiers: Modifiers, key: MultiSelectKey, gesture_active: bool) -> bool {
	!gesture_active && key.accepts(modifiers)
}

/// Event a mouse-up on the grip of `link` dispatches.
///
/// The grip of a connected link covers its input pin, so a link dragged onto
/// it attaches to that same pin.
pub fn link_grip_release(grip: &str, link: &Link, dragged_link_id: Option<&str>) -> Option<FrameEvent> {
	let dragged = dragged_link_id.filter(|d| *d != grip)?;
	let to = link.to.clone()?;
	Some(FrameEvent::UpdateLink {
		id: dragged.to_string(),
		patch: LinkPatch::connect(to),
	})
}

/// A box with a row of input pins on top and output pins below.
pub fn default_node(props: NodeProps) -> AnyView {
	let NodeProps {
		id,
		node,
		width,
		config,
		selected,
		dragged,
		dragged_link_id,
		gesture_active,
		multi_select,
		dispatch,
	} = props;
	let pin = config.pin_size;
	let body = config.node_body_height;
	let palette = &config.palette;
	let stroke = if selected || dragged {
		palette.highlight
	} else {
		palette.node_stroke
	}
	.to_css();
	let pin_fill = palette.pin.to_css();

	let ins = node.ins.len();
	let inputs = (0..ins)
		.map(|i| {
			let (id, link) = (id.clone(), dragged_link_id.clone());
			view! {
				<rect
					x=x_of_pin(pin, width, ins, i).to_string()
					y="0"
					width=pin.to_string()
					height=pin.to_string()
					fill=pin_fill.clone()
					on:mouseup=move |ev: MouseEvent| {
						let Some(link) = link.clone() else {
							return;
						};
						swallow(&ev);
						dispatch.run(FrameEvent::UpdateLink {
							id: link,
							patch: LinkPatch::connect(Endpoint::new(id.clone(), i)),
						});
					}
				/>
			}
		})
		.collect_view();

	let outs = node.outs.len();
	let outputs = (0..outs)
		.map(|i| {
			let id = id.clone();
			view! {
				<rect
					x=x_of_pin(pin, width, outs, i).to_string()
					y=(pin + body).to_string()
					width=pin.to_string()
					height=pin.to_string()
					fill=pin_fill.clone()
					on:mousedown=move |ev: MouseEvent| {
						swallow(&ev);
						dispatch.run(FrameEvent::CreateLink {
							from: Endpoint::new(id.clone(), i),
						});
					}
				/>
			}
		})
		.collect_view();

	let (drag_id, select_id) = (id.clone(), id);
	view! {
		<g
			transform=format!("translate({},{})", node.x, node.y)
			on:mouseup=move |ev: MouseEvent| {
				if node_keeps_release(modifiers_of(&ev), multi_select, gesture_active) {
					swallow(&ev);
				}
			}
			on:click=move |ev: MouseEvent| {
				swallow(&ev);
				dispatch.run(FrameEvent::SelectItem {
					id: select_id.clone(),
					modifiers: modifiers_of(&ev),
				});
			}
		>
			{inputs}
			<rect
				x="0"
				y=pin.to_string()
				width=width.to_string()
				height=body.to_string()
				fill=palette.node_fill.to_css()
				stroke=stroke
				on:mousedown=move |ev: MouseEvent| {
					swallow(&ev);
					if let Some(event) = node_press(&drag_id, modifiers_of(&ev), multi_select) {
						dispatch.run(event);
					}
				}
			/>
			<text
				x=pin.to_string()
				y=(pin + body * 0.8).to_string()
				fill=palette.text.to_css()
				style="pointer-events: none; user-select: none"
			>
				{node.text.clone()}
			</text>
			{outputs}
		</g>
	}
	.into_any()
}

/// A straight line between the pins, with a grip on the target end.
pub fn default_link(props: LinkProps) -> AnyView {
	let LinkProps {
		id,
		link,
		geometry,
		config,
		selected,
		dragged_link_id,
		dispatch,
	} = props;
	let pin = config.pin_size;
	let (start, end) = geometry.segment(pin);
	let color = if selected {
		config.palette.highlight
	} else {
		config.palette.link
	}
	.to_css();
	// A dangling link must not catch the mouse-up meant for an input pin.
	let pointer_events = if link.is_dangling() { "none" } else { "auto" };
	let (select_id, grab_id) = (id.clone(), id.clone());
	let release = link_grip_release(&id, &link, dragged_link_id.as_deref());

	view! {
		<g style=format!("pointer-events: {pointer_events}")>
			<line
				x1=start.x.to_string()
				y1=start.y.to_string()
				x2=end.x.to_string()
				y2=end.y.to_string()
				stroke=color.clone()
				stroke-width=config.line_width.to_string()
				on:click=move |ev: MouseEvent| {
					swallow(&ev);
					dispatch.run(FrameEvent::SelectItem {
						id: select_id.clone(),
						modifiers: modifiers_of(&ev),
					});
				}
			/>
			<rect
				x=geometry.target.x.to_string()
				y=geometry.target.y.to_string()
				width=pin.to_string()
				height=pin.to_string()
				fill=color
				style="cursor: grab"
				on:mousedown=move |ev: MouseEvent| {
					swallow(&ev);
					dispatch.run(FrameEvent::StartDraggingLink { id: grab_id.clone() });
				}
				on:mouseup=move |ev: MouseEvent| {
					if let Some(event) = release.clone() {
						swallow(&ev);
						dispatch.run(event);
					}
				}
			/>
		</g>
	}
	.into_any()
}

fn prompt(message: &str, default: &str) -> Option<String> {
	web_sys::window()?
		.prompt_with_message_and_default(message, default)
		.ok()
		.flatten()
}

/// A line of actions for the first inspected item.
pub fn default_inspector(props: InspectorProps) -> AnyView {
	let InspectorProps {
		items,
		view,
		config,
		dispatch,
	} = props;
	let Some(id) = items.first().cloned() else {
		return ().into_any();
	};

	let mut actions: Vec<(&'static str, Command)> = Vec::new();
	let label = if let Some(node) = view.node.get(&id) {
		actions.push(("+in", Command::CreateInputPin(id.clone())));
		if !node.ins.is_empty() {
			actions.push((
				"-in",
				Command::DeleteInputPin {
					node: id.clone(),
					index: node.ins.len() - 1,
				},
			));
		}
		actions.push(("+out", Command::CreateOutputPin(id.clone())));
		if !node.outs.is_empty() {
			actions.push((
				"-out",
				Command::DeleteOutputPin {
					node: id.clone(),
					index: node.outs.len() - 1,
				},
			));
		}
		actions.push(("delete", Command::DeleteNode(id.clone())));
		format!("node {id}: {}", node.text)
	} else if view.link.contains_key(&id) {
		actions.push(("delete", Command::DeleteLink(id.clone())));
		format!("link {id}")
	} else {
		return ().into_any();
	};

	let line = config.font_size + 4.0;
	let step = config.font_size * 0.64 * 7.0;
	let color = config.palette.highlight.to_css();
	let rename = view.node.get(&id).map(|node| {
		let (id, text) = (id.clone(), node.text.clone());
		view! {
			<text
				x=(actions.len() as f64 * step).to_string()
				y=(2.0 * line).to_string()
				fill=color.clone()
				style="cursor: pointer"
				on:click=move |_: MouseEvent| {
					if let Some(text) = prompt("Rename node", &text) {
						dispatch.run(FrameEvent::Inspector(Command::RenameNode {
							id: id.clone(),
							text,
						}));
					}
				}
			>
				"rename"
			</text>
		}
	});
	let buttons = actions
		.into_iter()
		.enumerate()
		.map(|(i, (name, command))| {
			view! {
				<text
					x=(i as f64 * step).to_string()
					y=(2.0 * line).to_string()
					fill=color.clone()
					style="cursor: pointer"
					on:click=move |_: MouseEvent| dispatch.run(FrameEvent::Inspector(command.clone()))
				>
					{name}
				</text>
			}
		})
		.collect_view();

	view! {
		<g
			transform="translate(4,0)"
			on:mousedown=|ev: MouseEvent| ev.stop_propagation()
			on:mouseup=|ev: MouseEvent| ev.stop_propagation()
			on:click=|ev: MouseEvent| ev.stop_propagation()
			on:dblclick=|ev: MouseEvent| ev.stop_propagation()
		>
			<text y=line.to_string() fill=config.palette.text.to_css()>
				{label}
			</text>
			{buttons}
			{rename}
		</g>
	}
	.into_any()
}

/// A list of node labels where the user double-clicked. Without a catalog it offers a
/// single entry that asks for the label.
pub fn default_selector(props: SelectorProps) -> AnyView {
	let SelectorProps {
		anchor,
		catalog,
		config,
		dispatch,
	} = props;
	let line = config.font_size + 4.0;
	let entries: Vec<Option<String>> = if catalog.is_empty() {
		vec![None]
	} else {
		catalog.into_iter().map(Some).collect()
	};
	let longest = entries
		.iter()
		.map(|e| e.as_deref().map_or(8, |t| t.chars().count()))
		.max()
		.unwrap_or(0);
	let width = config.font_size * 0.64 * longest as f64 + 2.0 * config.pin_size;
	let height = line * entries.len() as f64 + config.pin_size;
	let text_color = config.palette.text.to_css();

	let rows = entries
		.into_iter()
		.enumerate()
		.map(|(i, entry)| {
			let caption = entry.clone().unwrap_or_else(|| "new node".to_string());
			view! {
				<text
					x=config.pin_size.to_string()
					y=(line * (i + 1) as f64).to_string()
					fill=text_color.clone()
					style="cursor: pointer"
					on:click=move |ev: MouseEvent| {
						swallow(&ev);
						let text = match entry.clone() {
							Some(text) => text,
							None => match prompt("Node label", "") {
								Some(text) => text,
								None => return,
							},
						};
						dispatch.run(FrameEvent::CreateNode(NodeDescriptor::at(anchor, text)));
					}
				>
					{caption}
				</text>
			}
		})
		.collect_view();

	view! {
		<g
			transform=format!("translate({},{})", anchor.x, anchor.y)
			on:mousedown=|ev: MouseEvent| ev.stop_propagation()
			on:mouseup=|ev: MouseEvent| ev.stop_propagation()
			on:dblclick=|ev: MouseEvent| ev.stop_propagation()
		>
			<rect
				width=width.to_string()
				height=height.to_string()
				fill=config.palette.node_fill.to_css()
				stroke=config.palette.node_stroke.to_css()
			/>
			{rows}
		</g>
	}
	.into_any()
}
