//! Short ID system for easier entity selection
//!
//! Provides session-local aliases that map to full entity IDs.
//! Supports two formats:
//! - Entity-prefixed: `ITEM@1`, `WS@2` (cross-entity safe)
//! - Simple: `@1`, `@2` (works within the most recent listing)
//!
//! These are persisted in .braid/shortids.json and regenerated when entities
//! are listed.

use std::collections::HashMap;
use std::fs;

use crate::core::project::Project;

/// Index file location within a project
const INDEX_FILE: &str = ".braid/shortids.json";

/// A mapping of short IDs to full entity IDs
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShortIdIndex {
    /// Maps "PREFIX@N" to full entity ID string (e.g., "ITEM@1" -> "ITEM-01ABC...")
    entries: HashMap<String, String>,
    /// Maps full entity ID to prefixed short ID (reverse lookup)
    #[serde(skip)]
    reverse: HashMap<String, String>,
    /// Next available short ID per prefix
    next_ids: HashMap<String, u32>,
    /// Simple @N to full ID (session-local, current listing only)
    #[serde(skip)]
    simple_entries: HashMap<u32, String>,
    /// Next simple ID
    #[serde(skip)]
    simple_next_id: u32,
}

impl ShortIdIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            reverse: HashMap::new(),
            next_ids: HashMap::new(),
            simple_entries: HashMap::new(),
            simple_next_id: 1,
        }
    }

    /// Load the index from a project, or create empty if not found
    pub fn load(project: &Project) -> Self {
        let path = project.root().join(INDEX_FILE);
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(mut index) = serde_json::from_str::<ShortIdIndex>(&content) {
                index.reverse = index
                    .entries
                    .iter()
                    .map(|(k, v)| (v.clone(), k.clone()))
                    .collect();
                index.simple_next_id = 1;
                return index;
            }
        }
        Self::new()
    }

    /// Save the index to a project
    pub fn save(&self, project: &Project) -> std::io::Result<()> {
        let path = project.root().join(INDEX_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }

    /// Rebuild the simple @N aliases for a fresh listing, keeping the
    /// persistent prefixed aliases stable
    pub fn rebuild(&mut self, entity_ids: impl IntoIterator<Item = String>) {
        self.simple_entries.clear();
        self.simple_next_id = 1;

        for id in entity_ids {
            self.add(id);
        }
    }

    /// Extract the prefix from an entity ID (e.g., "ITEM" from "ITEM-01ABC...")
    fn extract_prefix(entity_id: &str) -> Option<&str> {
        entity_id.split('-').next()
    }

    /// Add an entity ID, assigning both a simple and a prefixed alias
    pub fn add(&mut self, entity_id: String) -> u32 {
        let simple_id = self.simple_next_id;
        self.simple_next_id += 1;
        self.simple_entries.insert(simple_id, entity_id.clone());

        if let Some(prefix) = Self::extract_prefix(&entity_id) {
            if !self.reverse.contains_key(&entity_id) {
                let next = self.next_ids.entry(prefix.to_string()).or_insert(1);
                let prefixed_key = format!("{}@{}", prefix, next);
                *next += 1;
                self.entries.insert(prefixed_key.clone(), entity_id.clone());
                self.reverse.insert(entity_id, prefixed_key);
            }
        }

        simple_id
    }

    /// Resolve a short ID (`ITEM@1` or `@1`) to a full entity ID
    pub fn resolve(&self, short_id: &str) -> Option<&str> {
        if let Some(num) = short_id.strip_prefix('@') {
            let num: u32 = num.parse().ok()?;
            return self.simple_entries.get(&num).map(|s| s.as_str());
        }
        self.entries
            .get(&short_id.to_uppercase())
            .map(|s| s.as_str())
    }

    /// Get the prefixed alias assigned to a full entity ID, if any
    pub fn short_id_for(&self, entity_id: &str) -> Option<&str> {
        self.reverse.get(entity_id).map(|s| s.as_str())
    }
}
