//! node-frame: Interactive SVG node-graph editor canvas.
//!
//! This crate provides a WASM-based editor component that renders a graph of
//! nodes with input/output pins and the links between them, and turns mouse
//! gestures into edit commands for the host's model.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
mod error;

pub use components::frame::{
	Command, CommandExecutor, Endpoint, Frame, FrameConfig, FrameEvent, InteractionPolicy,
	InteractionState, InteractionSurface, Link, Node, Renderers, View,
};
pub use error::{LoadError, LoadResult};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("node-frame: logging initialized");
}

/// Parse the JSON text of the `<script>` element with the given id.
pub fn read_script_json<T: DeserializeOwned>(id: &str) -> LoadResult<T> {
	let window: Window = web_sys::window().ok_or(LoadError::NoDocument)?;
	let document = window.document().ok_or(LoadError::NoDocument)?;
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| LoadError::MissingElement(id.to_string()))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| LoadError::NotAScript(id.to_string()))?;
	let json_text = script
		.text()
		.map_err(|_| LoadError::Unreadable(id.to_string()))?;

	Ok(serde_json::from_str(&json_text)?)
}

/// Like [`read_script_json`], but logs the failure and falls back to `fallback`.
fn load_or<T: DeserializeOwned>(id: &str, fallback: impl FnOnce() -> T) -> T {
	match read_script_json(id) {
		Ok(value) => {
			info!("node-frame: loaded #{}", id);
			value
		}
		Err(e) => {
			warn!("node-frame: using defaults for #{}: {}", id, e);
			fallback()
		}
	}
}

/// A small graph shown when the page embeds none.
pub fn demo_view() -> View {
	let mut view = View {
		width: 800.0,
		height: 500.0,
		..Default::default()
	};
	view.node.insert(
		"a".into(),
		Node::new("numbers", 60.0, 60.0).with_pins(0, 2),
	);
	view.node
		.insert("b".into(), Node::new("sum", 80.0, 200.0).with_pins(2, 1));
	view.node
		.insert("c".into(), Node::new("console.log", 120.0, 340.0).with_pins(1, 0));
	view.link.insert(
		"l0".into(),
		Link::new(Endpoint::new("a", 0), Endpoint::new("b", 0)),
	);
	view.link.insert(
		"l1".into(),
		Link::new(Endpoint::new("b", 0), Endpoint::new("c", 0)),
	);
	view
}

/// Main application component.
/// Loads the graph and its settings from the DOM and renders the editor.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let view = RwSignal::new(load_or("frame-view", demo_view));
	let config: FrameConfig = load_or("frame-config", FrameConfig::default);
	let policy: InteractionPolicy = load_or("frame-policy", InteractionPolicy::default);
	let catalog: Vec<String> = load_or("frame-catalog", || {
		["sum", "product", "console.log", "Math.cos", "Math.sin"]
			.map(String::from)
			.to_vec()
	});
	let executor: Box<dyn CommandExecutor> = Box::new(view);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="node-frame" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="frame-container">
			<Frame
				view=view
				executor=executor
				config=config
				policy=policy
				catalog=catalog
			/>
			<p class="subtitle">
				"Double-click to add a node. Shift-click to select several. Drag from an output pin to an input pin to link them."
			</p>
		</div>
	}
}
