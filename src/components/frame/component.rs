//! Leptos component wrapping the interaction surface.
//!
//! The component mounts an `<svg>`, measures its container once the element
//! exists, and turns DOM mouse events into [`FrameEvent`]s. The surface state
//! is mirrored into a signal through a subscription, so every dispatch that
//! changes something re-renders the graph.

use std::sync::Arc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::command::CommandExecutor;
use super::geometry::{DefaultSizing, NodeSizing, resolve_link};
use super::policy::InteractionPolicy;
use super::reducer::FrameEvent;
use super::render::{InspectorProps, LinkProps, NodeProps, Renderers, SelectorProps};
use super::state::{Gesture, InteractionState};
use super::surface::InteractionSurface;
use super::theme::FrameConfig;
use super::types::{Point, View};

fn client_point(ev: &MouseEvent) -> Point {
	Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Renders an editable node graph.
///
/// `view` is read only; every edit is sent to `executor` as a command. When
/// the executor writes back into the same signal (as `RwSignal<View>` does),
/// the frame follows along.
#[component]
pub fn Frame(
	/// Graph to draw.
	#[prop(into)]
	view: Signal<View>,
	/// Applies the edits.
	executor: Box<dyn CommandExecutor>,
	/// Metrics and palette.
	#[prop(optional)]
	config: FrameConfig,
	/// Selection and stacking behavior.
	#[prop(optional)]
	policy: InteractionPolicy,
	/// Replacement renderers; the defaults otherwise.
	#[prop(optional)]
	renderers: Option<Renderers>,
	/// Node width function; [`DefaultSizing`] otherwise.
	#[prop(optional)]
	sizing: Option<Arc<dyn NodeSizing>>,
	/// Labels the create-node selector offers.
	#[prop(optional)]
	catalog: Vec<String>,
) -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let state = RwSignal::new(InteractionState::default());

	let mut surface = InteractionSurface::with_policy(executor, policy);
	surface.subscribe(move |next| state.set(next.clone()));
	let surface = StoredValue::new_local(surface);
	let dispatch = Callback::new(move |event: FrameEvent| {
		surface.update_value(|s| s.dispatch(event));
	});

	Effect::new(move |_| {
		let Some(svg) = svg_ref.get() else {
			return;
		};
		let svg: web_sys::Element = svg.unchecked_into();
		let Some(container) = svg
			.parent_element()
			.and_then(|p| p.dyn_into::<HtmlElement>().ok())
		else {
			return;
		};
		let offset = Point::new(
			container.offset_left() as f64,
			container.offset_top() as f64,
		);
		info!("node-frame: mounted at {:?}", offset);
		dispatch.run(FrameEvent::Mounted { offset });
	});

	Effect::new(move |_| {
		view.with(|v| surface.update_value(|s| s.sync_view(v)));
	});

	let config = StoredValue::new(config);
	let renderers = StoredValue::new(renderers.unwrap_or_default());
	let sizing = StoredValue::new(sizing.unwrap_or_else(|| Arc::new(DefaultSizing)));
	let catalog = StoredValue::new(catalog);

	let nodes = move || {
		let state = state.get();
		let config = config.get_value();
		let sizing = sizing.get_value();
		let renderers = renderers.get_value();
		view.with(|v| {
			state
				.node_render_order(v, policy.raise)
				.into_iter()
				.filter_map(|id| {
					let node = v.node.get(&id)?.clone();
					let render = renderers.node_renderer(&node);
					Some(render(NodeProps {
						width: sizing.width(&node, &config),
						selected: state.is_selected(&id),
						dragged: state.is_dragged(&id),
						dragged_link_id: state.dragged_link_id().map(str::to_string),
						gesture_active: *state.gesture() != Gesture::Idle,
						multi_select: policy.multi_select,
						config: config.clone(),
						id,
						node,
						dispatch,
					}))
				})
				.collect_view()
		})
	};

	let links = move || {
		let state = state.get();
		let config = config.get_value();
		let sizing = sizing.get_value();
		let render = renderers.with_value(|r| r.link);
		view.with(|v| {
			v.link
				.iter()
				.filter_map(|(id, link)| {
					let geometry = resolve_link(v, link, state.pointer(), &config, sizing.as_ref())?;
					Some(render(LinkProps {
						id: id.clone(),
						link: link.clone(),
						geometry,
						config: config.clone(),
						selected: state.is_selected(id),
						dragged_link_id: state.dragged_link_id().map(str::to_string),
						dispatch,
					}))
				})
				.collect_view()
		})
	};

	let inspector = move || {
		let render = renderers.with_value(|r| r.inspector);
		render(InspectorProps {
			items: state.with(|s| s.inspected_items()),
			view: view.get(),
			config: config.get_value(),
			dispatch,
		})
	};

	let selector = move || {
		let anchor = state.with(|s| s.selector_anchor())?;
		let render = renderers.with_value(|r| r.selector);
		Some(render(SelectorProps {
			anchor,
			catalog: catalog.get_value(),
			config: config.get_value(),
			dispatch,
		}))
	};

	let (font_family, font_size, style, background) = config.with_value(|c| {
		(
			c.font_family.clone(),
			c.font_size.to_string(),
			c.style.clone(),
			c.palette.background.to_css(),
		)
	});

	view! {
		<svg
			node_ref=svg_ref
			class="node-frame"
			width=move || view.with(|v| v.width.to_string())
			height=move || view.with(|v| v.height.to_string())
			font-family=font_family
			font-size=font_size
			text-anchor="start"
			style=style
			on:click=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::Click);
			}
			on:dblclick=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::DoubleClick { client: client_point(&ev) });
			}
			on:mousedown=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::MouseDown);
			}
			on:mousemove=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::MouseMove { client: client_point(&ev) });
			}
			on:mouseup=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::MouseUp);
			}
			on:mouseleave=move |ev: MouseEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				dispatch.run(FrameEvent::MouseLeave);
			}
		>
			<rect width="100%" height="100%" fill=background />
			{nodes}
			{links}
			{inspector}
			{selector}
		</svg>
	}
}
