//! Entity type definitions

pub mod item;
pub mod workstream;

pub use item::{Item, ItemType};
pub use workstream::Workstream;
