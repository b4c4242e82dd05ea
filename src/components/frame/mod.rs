//! Node-graph editor canvas.
//!
//! Renders a [`View`] of nodes and links as SVG and turns mouse input into
//! edits:
//! - Click to select, shift-click to extend or toggle the selection
//! - Drag node bodies to move them
//! - Drag from an output pin to an input pin to link them
//! - Drag the end of a link away to detach it
//! - Double-click the canvas to create a node
//!
//! The interaction logic is a pure reducer ([`reduce`]) driven by an
//! [`InteractionSurface`]; the [`Frame`] component is a thin DOM adapter on
//! top. Edits never touch the view directly, they go to the host's
//! [`CommandExecutor`].
//!
//! # Example
//!
//! ```ignore
//! use node_frame::{Frame, CommandExecutor, View};
//!
//! let view = RwSignal::new(View::default());
//! let executor: Box<dyn CommandExecutor> = Box::new(view);
//!
//! view! { <Frame view=view executor=executor /> }
//! ```

mod command;
mod component;
pub mod geometry;
mod model;
pub mod policy;
mod reducer;
pub mod render;
mod state;
mod surface;
pub mod theme;
mod types;

pub use command::{Command, CommandExecutor, Created};
pub use component::Frame;
pub use geometry::{DefaultSizing, NodeSizing};
pub use policy::{InteractionPolicy, Modifiers, MultiSelectKey, RaisePolicy};
pub use reducer::{FrameEvent, Transition, reduce};
pub use render::Renderers;
pub use state::{Gesture, InteractionState};
pub use surface::{InteractionSurface, SubscriptionId};
pub use theme::FrameConfig;
pub use types::{Endpoint, ItemId, Link, LinkPatch, Node, NodeDescriptor, Pin, Point, View};
