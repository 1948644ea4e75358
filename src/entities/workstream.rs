//! Workstream entity type - project-local grouping of items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::EntityId;

/// A workstream entity - a named grouping items can be assigned to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workstream {
    /// Unique identifier (WS-ULID)
    pub id: EntityId,

    /// Workstream name
    pub name: String,

    /// Display order (0-based)
    #[serde(default)]
    pub sort_order: u32,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Author (who created this workstream)
    pub author: String,
}

impl Entity for Workstream {
    const PREFIX: &'static str = "WS";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl Workstream {
    /// Create a new workstream
    pub fn new(name: String, sort_order: u32, author: String) -> Self {
        Self {
            id: EntityId::new(crate::core::EntityPrefix::Ws),
            name,
            sort_order,
            created: Utc::now(),
            author,
        }
    }

    /// Filename for this workstream under `workstreams/`
    pub fn file_name(&self) -> String {
        format!("{}.braid.yaml", self.id)
    }
}
