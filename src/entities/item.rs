//! Item entity type - a RAID log entry
//!
//! An item is a single tracked unit of work: Risk, Action Item, Issue,
//! Decision, Deliverable, Plan Item, or Budget entry. Items carry planned
//! dates, a completion percentage, and the last calculated status indicator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::entity::{Entity, Priority};
use crate::core::identity::EntityId;
use crate::core::indicator::Indicator;

/// Item type - the seven RAID+ item types.
///
/// The wire strings are display-friendly names with spaces; they are the
/// persisted enum values and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum ItemType {
    #[serde(rename = "Budget")]
    Budget,
    #[serde(rename = "Risk")]
    Risk,
    #[default]
    #[serde(rename = "Action Item")]
    ActionItem,
    #[serde(rename = "Issue")]
    Issue,
    #[serde(rename = "Decision")]
    Decision,
    #[serde(rename = "Deliverable")]
    Deliverable,
    #[serde(rename = "Plan Item")]
    PlanItem,
}

impl ItemType {
    /// All item types
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Budget,
            ItemType::Risk,
            ItemType::ActionItem,
            ItemType::Issue,
            ItemType::Decision,
            ItemType::Deliverable,
            ItemType::PlanItem,
        ]
    }

    /// The persisted wire string for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Budget => "Budget",
            ItemType::Risk => "Risk",
            ItemType::ActionItem => "Action Item",
            ItemType::Issue => "Issue",
            ItemType::Decision => "Decision",
            ItemType::Deliverable => "Deliverable",
            ItemType::PlanItem => "Plan Item",
        }
    }

    /// Storage directory for this type under `items/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            ItemType::Budget => "budget",
            ItemType::Risk => "risks",
            ItemType::ActionItem => "actions",
            ItemType::Issue => "issues",
            ItemType::Decision => "decisions",
            ItemType::Deliverable => "deliverables",
            ItemType::PlanItem => "plan",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "budget" => Ok(ItemType::Budget),
            "risk" => Ok(ItemType::Risk),
            "action" | "action item" => Ok(ItemType::ActionItem),
            "issue" => Ok(ItemType::Issue),
            "decision" => Ok(ItemType::Decision),
            "deliverable" => Ok(ItemType::Deliverable),
            "plan" | "plan item" => Ok(ItemType::PlanItem),
            _ => Err(format!("Unknown item type: {}", s)),
        }
    }
}

/// An item entity - one RAID log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (ITEM-ULID)
    pub id: EntityId,

    /// Human-readable number, unique per project
    #[serde(default)]
    pub item_num: u32,

    /// Item type
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Short title
    pub title: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workstream this item belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workstream: Option<EntityId>,

    /// Assignee name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    /// Planned start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Planned finish date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<NaiveDate>,

    /// Estimated duration in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,

    /// Hard deadline date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Draft items are excluded from indicators and reports
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    /// Whether the item appears in client-facing reports
    #[serde(default = "default_client_visible")]
    pub client_visible: bool,

    /// Completion percentage (nominally 0-100)
    #[serde(default)]
    pub percent_complete: i32,

    /// Last calculated status indicator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Indicator>,

    /// Priority level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Tags for filtering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Budget amount, for Budget items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<f64>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Author (who created this item)
    pub author: String,
}

fn default_client_visible() -> bool {
    true
}

impl Entity for Item {
    const PREFIX: &'static str = "ITEM";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl Item {
    /// Create a new item with the given parameters
    pub fn new(item_type: ItemType, title: String, author: String) -> Self {
        Self {
            id: EntityId::new(crate::core::EntityPrefix::Item),
            item_num: 0,
            item_type,
            title,
            description: None,
            workstream: None,
            assigned_to: None,
            start_date: None,
            finish_date: None,
            duration_days: None,
            deadline: None,
            draft: false,
            client_visible: true,
            percent_complete: 0,
            indicator: None,
            priority: None,
            tags: Vec::new(),
            budget_amount: None,
            created: Utc::now(),
            updated: None,
            author,
        }
    }

    /// Assign the project-local item number
    pub fn with_num(mut self, item_num: u32) -> Self {
        self.item_num = item_num;
        self
    }

    /// Both start and finish dates are defined
    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() && self.finish_date.is_some()
    }

    /// Item is 100% complete (or more)
    pub fn is_complete(&self) -> bool {
        self.percent_complete >= 100
    }

    /// Filename for this item within its type directory
    pub fn file_name(&self) -> String {
        format!("{}.braid.yaml", self.id)
    }
}
