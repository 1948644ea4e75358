//! Unified filter enums for CLI commands
//!
//! This module consolidates filter types used across item commands,
//! eliminating duplication and ensuring consistent behavior.

use clap::ValueEnum;

use crate::core::entity::Priority;
use crate::core::indicator::Indicator;
use crate::entities::item::ItemType;

/// Item type filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Budget entries only
    Budget,
    /// Risks only
    Risk,
    /// Action items only
    Action,
    /// Issues only
    Issue,
    /// Decisions only
    Decision,
    /// Deliverables only
    Deliverable,
    /// Plan items only
    Plan,
    /// All item types - default
    #[default]
    All,
}

impl TypeFilter {
    /// Check if an ItemType matches this filter
    pub fn matches(&self, item_type: ItemType) -> bool {
        match self {
            TypeFilter::Budget => item_type == ItemType::Budget,
            TypeFilter::Risk => item_type == ItemType::Risk,
            TypeFilter::Action => item_type == ItemType::ActionItem,
            TypeFilter::Issue => item_type == ItemType::Issue,
            TypeFilter::Decision => item_type == ItemType::Decision,
            TypeFilter::Deliverable => item_type == ItemType::Deliverable,
            TypeFilter::Plan => item_type == ItemType::PlanItem,
            TypeFilter::All => true,
        }
    }
}

/// Draft filter for list commands
///
/// Draft items are provisional; most views exclude them by default.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum DraftFilter {
    /// Draft items only
    Draft,
    /// Non-draft items only - default
    #[default]
    Active,
    /// All items including drafts
    All,
}

impl DraftFilter {
    /// Check if an item's draft flag matches this filter
    pub fn matches(&self, draft: bool) -> bool {
        match self {
            DraftFilter::Draft => draft,
            DraftFilter::Active => !draft,
            DraftFilter::All => true,
        }
    }
}

/// Indicator filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum IndicatorFilter {
    /// No indicator assigned
    None,
    /// Completed
    Completed,
    /// Completed Recently
    CompletedRecently,
    /// Not Started
    NotStarted,
    /// Starting Soon!
    StartingSoon,
    /// In Progress
    InProgress,
    /// Finishing Soon!
    FinishingSoon,
    /// Trending Late!
    TrendingLate,
    /// Late Start!!
    LateStart,
    /// Late Finish!!
    LateFinish,
    /// Beyond Deadline!!!
    BeyondDeadline,
    /// Any of the late family (trending late or worse)
    Late,
    /// All indicators - default
    #[default]
    All,
}

impl IndicatorFilter {
    /// Check if a calculated indicator matches this filter
    pub fn matches(&self, indicator: Option<Indicator>) -> bool {
        match self {
            IndicatorFilter::None => indicator.is_none(),
            IndicatorFilter::Completed => indicator == Some(Indicator::Completed),
            IndicatorFilter::CompletedRecently => indicator == Some(Indicator::CompletedRecently),
            IndicatorFilter::NotStarted => indicator == Some(Indicator::NotStarted),
            IndicatorFilter::StartingSoon => indicator == Some(Indicator::StartingSoon),
            IndicatorFilter::InProgress => indicator == Some(Indicator::InProgress),
            IndicatorFilter::FinishingSoon => indicator == Some(Indicator::FinishingSoon),
            IndicatorFilter::TrendingLate => indicator == Some(Indicator::TrendingLate),
            IndicatorFilter::LateStart => indicator == Some(Indicator::LateStart),
            IndicatorFilter::LateFinish => indicator == Some(Indicator::LateFinish),
            IndicatorFilter::BeyondDeadline => indicator == Some(Indicator::BeyondDeadline),
            IndicatorFilter::Late => {
                indicator.is_some_and(|i| i.severity() >= Indicator::TrendingLate.severity())
            }
            IndicatorFilter::All => true,
        }
    }
}

/// Priority filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Low priority only
    Low,
    /// Medium priority only
    Medium,
    /// High priority only
    High,
    /// Critical priority only
    Critical,
    /// High and critical only
    Urgent,
    /// All priorities - default
    #[default]
    All,
}

impl PriorityFilter {
    /// Check if an optional Priority matches this filter
    pub fn matches(&self, priority: Option<Priority>) -> bool {
        match (self, priority) {
            (PriorityFilter::All, _) => true,
            (_, None) => false,
            (PriorityFilter::Low, Some(p)) => p == Priority::Low,
            (PriorityFilter::Medium, Some(p)) => p == Priority::Medium,
            (PriorityFilter::High, Some(p)) => p == Priority::High,
            (PriorityFilter::Critical, Some(p)) => p == Priority::Critical,
            (PriorityFilter::Urgent, Some(p)) => p == Priority::High || p == Priority::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_matches() {
        assert!(TypeFilter::Risk.matches(ItemType::Risk));
        assert!(!TypeFilter::Risk.matches(ItemType::Issue));
        assert!(TypeFilter::Action.matches(ItemType::ActionItem));
        assert!(TypeFilter::All.matches(ItemType::Budget));
    }

    #[test]
    fn test_draft_filter_matches() {
        assert!(DraftFilter::Draft.matches(true));
        assert!(!DraftFilter::Draft.matches(false));
        assert!(DraftFilter::Active.matches(false));
        assert!(!DraftFilter::Active.matches(true));
        assert!(DraftFilter::All.matches(true));
        assert!(DraftFilter::All.matches(false));
    }

    #[test]
    fn test_indicator_filter_matches() {
        assert!(IndicatorFilter::None.matches(None));
        assert!(!IndicatorFilter::None.matches(Some(Indicator::Completed)));
        assert!(IndicatorFilter::BeyondDeadline.matches(Some(Indicator::BeyondDeadline)));
        assert!(IndicatorFilter::All.matches(None));
    }

    #[test]
    fn test_late_family_filter() {
        assert!(IndicatorFilter::Late.matches(Some(Indicator::TrendingLate)));
        assert!(IndicatorFilter::Late.matches(Some(Indicator::LateStart)));
        assert!(IndicatorFilter::Late.matches(Some(Indicator::LateFinish)));
        assert!(IndicatorFilter::Late.matches(Some(Indicator::BeyondDeadline)));
        assert!(!IndicatorFilter::Late.matches(Some(Indicator::FinishingSoon)));
        assert!(!IndicatorFilter::Late.matches(None));
    }

    #[test]
    fn test_priority_filter_matches() {
        assert!(PriorityFilter::High.matches(Some(Priority::High)));
        assert!(!PriorityFilter::High.matches(Some(Priority::Low)));
        assert!(!PriorityFilter::High.matches(None));
        assert!(PriorityFilter::Urgent.matches(Some(Priority::Critical)));
        assert!(!PriorityFilter::Urgent.matches(Some(Priority::Medium)));
        assert!(PriorityFilter::All.matches(None));
    }
}
