//! Entity identity - prefixed ULID identifiers
//!
//! Every entity file is named after its ID, e.g. `ITEM-01KDGJC92W6EBFGZ5SJW6MFGW6.braid.yaml`.
//! IDs are lexicographically sortable by creation time (ULID property).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Entity type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityPrefix {
    /// RAID log item
    Item,
    /// Workstream grouping
    Ws,
}

impl EntityPrefix {
    /// All known prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[EntityPrefix::Item, EntityPrefix::Ws]
    }

    /// The string form used in IDs and filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Item => "ITEM",
            EntityPrefix::Ws => "WS",
        }
    }

    /// Determine the prefix from an entity filename (e.g. "ITEM-01ABC....braid.yaml")
    pub fn from_filename(name: &str) -> Option<EntityPrefix> {
        let stem = name.split('-').next()?;
        stem.parse().ok()
    }
}

impl std::fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ITEM" => Ok(EntityPrefix::Item),
            "WS" => Ok(EntityPrefix::Ws),
            other => Err(IdParseError::UnknownPrefix(other.to_string())),
        }
    }
}

/// Errors from parsing entity ID strings
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("Unknown entity prefix: {0}")]
    UnknownPrefix(String),

    #[error("Malformed entity ID: {0}")]
    Malformed(String),

    #[error("Invalid ULID in entity ID: {0}")]
    InvalidUlid(String),
}

/// A prefixed entity identifier, e.g. `ITEM-01KDGJC92W6EBFGZ5SJW6MFGW6`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    prefix: EntityPrefix,
    ulid: Ulid,
}

impl EntityId {
    /// Generate a fresh ID for the given entity type
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    /// The entity type prefix
    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    /// Check whether a full ID string starts with the given fragment
    /// (case-insensitive, used for prefix matching in `show`/`set`)
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        self.to_string()
            .to_uppercase()
            .starts_with(&fragment.to_uppercase())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::Malformed(s.to_string()))?;
        let prefix: EntityPrefix = prefix.parse()?;
        let ulid =
            Ulid::from_string(ulid).map_err(|_| IdParseError::InvalidUlid(s.to_string()))?;
        Ok(Self { prefix, ulid })
    }
}

impl Serialize for EntityId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
