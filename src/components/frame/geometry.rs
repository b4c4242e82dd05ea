//! Node sizing and link endpoint positions.
//!
//! Recomputed on every render from the current [`View`]; nothing here is
//! cached between frames.

use super::theme::FrameConfig;
use super::types::{Link, Node, Point, View};

/// Decides how wide a node is drawn.
pub trait NodeSizing: Send + Sync {
	/// Drawn width of `node`.
	fn width(&self, node: &Node, config: &FrameConfig) -> f64;
}

/// Fits the label and the pin rows; see [`compute_node_width`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSizing;

impl NodeSizing for DefaultSizing {
	fn width(&self, node: &Node, config: &FrameConfig) -> f64 {
		compute_node_width(node, config)
	}
}

/// Widest of the preferred width, the room the pins need, and the room the
/// label needs.
pub fn compute_node_width(node: &Node, config: &FrameConfig) -> f64 {
	let pin = config.pin_size;
	let preferred = if node.width > 0.0 {
		node.width
	} else {
		config.node_body_height + 2.0 * pin
	};
	let pins = node.ins.len().max(node.outs.len()) as f64;
	let for_pins = pin * (2.0 * pins + 1.0);
	let for_text = config.font_size * node.text.chars().count() as f64 * 0.64 + pin;

	preferred.max(for_pins).max(for_text)
}

/// Horizontal offset of pin `index` in a row of `count` pins spread over
/// `width`.
pub fn x_of_pin(pin_size: f64, width: f64, count: usize, index: usize) -> f64 {
	if index == 0 || count <= 1 {
		0.0
	} else {
		index as f64 * (width - pin_size) / (count - 1) as f64
	}
}

/// Where the two ends of a link are drawn. Both points are the top-left
/// corner of the pin the end sits on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkGeometry {
	/// Corner of the output pin.
	pub source: Point,
	/// Corner of the input pin, or of the pointer while dangling.
	pub target: Point,
}

impl LinkGeometry {
	/// Segment between the pin centers: bottom of the output pin to top of
	/// the input pin.
	pub fn segment(&self, pin_size: f64) -> (Point, Point) {
		(
			Point::new(self.source.x + pin_size / 2.0, self.source.y + pin_size),
			Point::new(self.target.x + pin_size / 2.0, self.target.y),
		)
	}
}

/// Position of output pin `pin` on `node`.
pub fn source_point(node: &Node, pin: usize, config: &FrameConfig, sizing: &dyn NodeSizing) -> Point {
	let width = sizing.width(node, config);
	Point::new(
		node.x + x_of_pin(config.pin_size, width, node.outs.len(), pin),
		node.y + config.pin_size + config.node_body_height,
	)
}

/// Position of input pin `pin` on `node`.
pub fn target_point(node: &Node, pin: usize, config: &FrameConfig, sizing: &dyn NodeSizing) -> Point {
	let width = sizing.width(node, config);
	Point::new(
		node.x + x_of_pin(config.pin_size, width, node.ins.len(), pin),
		node.y,
	)
}

/// Resolve both ends of `link` against `view`.
///
/// A missing target follows the pointer, or collapses onto the source while
/// the pointer is unknown. `None` when an end names a node that is not in the
/// view, or the link has no source.
pub fn resolve_link(
	view: &View,
	link: &Link,
	pointer: Option<Point>,
	config: &FrameConfig,
	sizing: &dyn NodeSizing,
) -> Option<LinkGeometry> {
	let from = link.from.as_ref()?;
	let source = source_point(view.node.get(from.node())?, from.pin(), config, sizing);

	let target = match &link.to {
		Some(to) => target_point(view.node.get(to.node())?, to.pin(), config, sizing),
		None => pointer.map_or(source, |p| {
			Point::new(p.x - config.pin_size / 2.0, p.y - config.pin_size)
		}),
	};

	Some(LinkGeometry { source, target })
}
