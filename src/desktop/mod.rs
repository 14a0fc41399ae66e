//! # Desktop Module
//!
//! The window/folder entity model and the process-wide [`Registry`] that
//! holds them. Entities have a flat lifecycle: they are inserted (by seeding
//! or a spawn request) and optionally removed; nothing else mutates them.
//! Dragging, focus and minimizing all happen client-side.

mod entity;
mod ids;
pub mod presets;
mod registry;

pub use entity::{Entity, EntityKind, Folder, Frame, Window};
pub use ids::IdGenerator;
pub use registry::{Registry, DEFAULT_Z_INDEX_BASE, MAX_HINT_JUMP, MAX_Z_INDEX};
