//! Graph data structures rendered by the frame.
//!
//! The [`View`] is owned by the host. The frame only reads it; every change
//! goes through a [`Command`](super::command::Command).

use std::collections::BTreeMap;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Key of a node or link in the [`View`] maps.
pub type ItemId = String;

/// A 2D coordinate or displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal component, growing to the right.
	pub x: f64,
	/// Vertical component, growing downwards.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// One end of a link: a node id and the index of a pin on that node.
///
/// Serialized as a two element array (`["a", 0]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint(pub ItemId, pub usize);

impl Endpoint {
	/// Pin `pin` of `node`.
	pub fn new(node: impl Into<ItemId>, pin: usize) -> Self {
		Self(node.into(), pin)
	}

	/// Node id.
	pub fn node(&self) -> &str {
		&self.0
	}

	/// Pin index on the node.
	pub fn pin(&self) -> usize {
		self.1
	}
}

/// An input or output pin. Pins are addressed by their index on the node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
	/// Optional label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

/// A node in the graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
	/// Left edge in canvas space.
	pub x: f64,
	/// Top edge in canvas space.
	pub y: f64,
	/// Preferred width; `0.0` lets the sizing function decide.
	pub width: f64,
	/// Preferred height; informational only.
	pub height: f64,
	/// Label.
	pub text: String,
	/// Input pins, drawn along the top edge.
	pub ins: Vec<Pin>,
	/// Output pins, drawn along the bottom edge.
	pub outs: Vec<Pin>,
}

impl Node {
	/// Node labelled `text` at `(x, y)`, without pins.
	pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			text: text.into(),
			..Default::default()
		}
	}

	/// Replace the pins with `ins` inputs and `outs` outputs.
	pub fn with_pins(mut self, ins: usize, outs: usize) -> Self {
		self.ins = vec![Pin::default(); ins];
		self.outs = vec![Pin::default(); outs];
		self
	}

	/// Set the preferred size.
	pub fn with_size(mut self, width: f64, height: f64) -> Self {
		self.width = width;
		self.height = height;
		self
	}
}

/// A directed link from an output pin to an input pin.
///
/// Either end may be missing while the user is dragging the link around.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
	/// Output pin the link leaves from.
	pub from: Option<Endpoint>,
	/// Input pin the link arrives at.
	pub to: Option<Endpoint>,
}

impl Link {
	/// Link connected at both ends.
	pub fn new(from: Endpoint, to: Endpoint) -> Self {
		Self {
			from: Some(from),
			to: Some(to),
		}
	}

	/// True while one of the ends is not attached to a pin.
	pub fn is_dangling(&self) -> bool {
		self.from.is_none() || self.to.is_none()
	}

	/// True if either end is attached to `node`.
	pub fn touches(&self, node: &str) -> bool {
		self.from.as_ref().is_some_and(|e| e.node() == node)
			|| self.to.as_ref().is_some_and(|e| e.node() == node)
	}
}

/// Renderable snapshot of the whole graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
	/// Nodes by id, in paint order.
	pub node: BTreeMap<ItemId, Node>,
	/// Links by id.
	pub link: BTreeMap<ItemId, Link>,
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
}

impl Default for View {
	fn default() -> Self {
		Self {
			node: BTreeMap::new(),
			link: BTreeMap::new(),
			width: 400.0,
			height: 400.0,
		}
	}
}

impl View {
	/// True if `id` names a node or a link of this view.
	pub fn contains(&self, id: &str) -> bool {
		self.node.contains_key(id) || self.link.contains_key(id)
	}
}

/// What the create-node selector hands over to the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDescriptor {
	/// Left edge of the new node.
	pub x: f64,
	/// Top edge of the new node.
	pub y: f64,
	/// Preferred width, `0.0` for automatic.
	pub width: f64,
	/// Preferred height.
	pub height: f64,
	/// Label.
	pub text: String,
}

impl NodeDescriptor {
	/// Descriptor for a node labelled `text` at `position`.
	pub fn at(position: Point, text: impl Into<String>) -> Self {
		Self {
			x: position.x,
			y: position.y,
			text: text.into(),
			..Default::default()
		}
	}
}

/// Partial update of a link's endpoints.
///
/// `from: None` leaves the source untouched. `to` has three states:
/// `None` keeps it, `Some(None)` detaches it, `Some(Some(e))` attaches it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkPatch {
	/// New source, if it changes.
	pub from: Option<Endpoint>,
	/// New target state, if it changes.
	pub to: Option<Option<Endpoint>>,
}

impl LinkPatch {
	/// Attach the target end to `to`.
	pub fn connect(to: Endpoint) -> Self {
		Self {
			from: None,
			to: Some(Some(to)),
		}
	}

	/// Detach the target end.
	pub fn disconnect() -> Self {
		Self {
			from: None,
			to: Some(None),
		}
	}

	/// Whether this patch detaches the target end.
	pub fn is_disconnecting(&self) -> bool {
		matches!(self.to, Some(None))
	}

	/// Apply this patch to `link` in place.
	pub fn apply(&self, link: &mut Link) {
		if let Some(from) = &self.from {
			link.from = Some(from.clone());
		}
		if let Some(to) = &self.to {
			link.to = to.clone();
		}
	}
}
