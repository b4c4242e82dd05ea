//! UI components.

pub mod frame;
