//! Core module - fundamental types and utilities

pub mod config;
pub mod entity;
pub mod identity;
pub mod indicator;
pub mod project;
pub mod shortid;

pub use config::Config;
pub use entity::{Entity, Priority};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use indicator::{
    calculate_indicator, calculate_indicators_batch, indicator_severity, Indicator,
    COMPLETED_RECENTLY_DAYS, SOON_THRESHOLD_DAYS,
};
pub use project::{Manifest, Project, ProjectError};
pub use shortid::ShortIdIndex;
