//! Picklist Core Library
//!
//! Host-agnostic collection and selection logic for the picklist widget.
//! The egui binding lives in the `picklist-egui` crate.

pub mod collection;
pub mod input;
pub mod select;

pub use collection::{ItemId, ListItemCollection};
pub use input::{Modifiers, MouseButton};
pub use select::apply_click;
