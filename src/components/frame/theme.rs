//! Visual configuration for the frame.
//!
//! Provides the color palette and the metric constants (font, pin size, node
//! body height) the renderers and the link geometry share.

use serde::Deserialize;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

/// A color string that is not `#rrggbb`.
#[derive(Debug, Error, PartialEq)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct ParseColorError(String);

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color value: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = ParseColorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let hex = value
			.strip_prefix('#')
			.filter(|h| h.len() == 6 && h.is_ascii())
			.ok_or_else(|| ParseColorError(value.clone()))?;
		let channel = |i: usize| {
			u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(value.clone()))
		};
		Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
	}
}

/// Colors used by the default renderers.
///
/// In JSON a palette is either a preset name (`"slate"`) or an object whose
/// optional `base` preset is overridden field by field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "PaletteSource")]
pub struct FramePalette {
	/// Canvas fill.
	pub background: Color,
	/// Node body fill.
	pub node_fill: Color,
	/// Node body outline.
	pub node_stroke: Color,
	/// Stroke of selected nodes and links.
	pub highlight: Color,
	/// Pin fill.
	pub pin: Color,
	/// Link stroke.
	pub link: Color,
	/// Label color.
	pub text: Color,
}

/// A palette name that matches no preset.
#[derive(Debug, Error, PartialEq)]
#[error("unknown palette {0:?}, expected \"paper\" or \"slate\"")]
pub struct UnknownPaletteError(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteSource {
	Named(String),
	Custom(PaletteOverrides),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PaletteOverrides {
	base: Option<String>,
	background: Option<Color>,
	node_fill: Option<Color>,
	node_stroke: Option<Color>,
	highlight: Option<Color>,
	pin: Option<Color>,
	link: Option<Color>,
	text: Option<Color>,
}

impl TryFrom<PaletteSource> for FramePalette {
	type Error = UnknownPaletteError;

	fn try_from(source: PaletteSource) -> Result<Self, Self::Error> {
		let overrides = match source {
			PaletteSource::Named(name) => {
				return FramePalette::named(&name).ok_or(UnknownPaletteError(name));
			}
			PaletteSource::Custom(overrides) => overrides,
		};
		let base = match &overrides.base {
			Some(name) => {
				FramePalette::named(name).ok_or_else(|| UnknownPaletteError(name.clone()))?
			}
			None => FramePalette::default(),
		};
		Ok(FramePalette {
			background: overrides.background.unwrap_or(base.background),
			node_fill: overrides.node_fill.unwrap_or(base.node_fill),
			node_stroke: overrides.node_stroke.unwrap_or(base.node_stroke),
			highlight: overrides.highlight.unwrap_or(base.highlight),
			pin: overrides.pin.unwrap_or(base.pin),
			link: overrides.link.unwrap_or(base.link),
			text: overrides.text.unwrap_or(base.text),
		})
	}
}

impl FramePalette {
	/// Preset by name: `paper` or `slate`.
	pub fn named(name: &str) -> Option<Self> {
		match name {
			"paper" => Some(Self::paper()),
			"slate" => Some(Self::slate()),
			_ => None,
		}
	}

	/// Black strokes on white, the look of a plain sketch.
	pub fn paper() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			node_fill: Color::rgb(245, 245, 245),
			node_stroke: Color::rgb(51, 51, 51),
			highlight: Color::rgb(230, 120, 20),
			pin: Color::rgb(51, 51, 51),
			link: Color::rgb(51, 51, 51),
			text: Color::rgb(0, 0, 0),
		}
	}

	/// Muted slate tones on a dark canvas.
	pub fn slate() -> Self {
		Self {
			background: Color::rgb(22, 27, 34),
			node_fill: Color::rgb(45, 55, 72),
			node_stroke: Color::rgb(140, 160, 180),
			highlight: Color::rgb(100, 181, 246),
			pin: Color::rgb(160, 174, 192),
			link: Color::rgb(140, 160, 180).with_alpha(0.8),
			text: Color::rgb(226, 232, 240),
		}
	}
}

impl Default for FramePalette {
	fn default() -> Self {
		Self::paper()
	}
}

/// Everything that shapes how a frame is drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
	/// Font of node labels and the selector.
	pub font_family: String,
	/// Font size in pixels.
	pub font_size: f64,
	/// Stroke width of links.
	pub line_width: f64,
	/// Side of the square pins; also the height of a pin row.
	pub pin_size: f64,
	/// Height of a node body between its pin rows.
	pub node_body_height: f64,
	/// Inline CSS of the `<svg>` element.
	pub style: String,
	/// Colors; a preset name or per-field overrides.
	pub palette: FramePalette,
}

impl Default for FrameConfig {
	fn default() -> Self {
		Self {
			font_family: "Courier".to_string(),
			font_size: 17.0,
			line_width: 3.0,
			pin_size: 10.0,
			node_body_height: 20.0,
			style: "border: 1px solid black".to_string(),
			palette: FramePalette::default(),
		}
	}
}
