//! Entity file generation

pub mod template;

pub use template::{TemplateError, TemplateGenerator};
