//! Status indicator engine
//!
//! Computes the schedule-health indicator for an item from its dates and
//! completion percentage. The calculation is a fixed precedence chain of ten
//! rules (first match wins) and is a total function: every input resolves to
//! an indicator or to `None`, never an error.
//!
//! The reference date is always supplied by the caller so that evaluation
//! stays deterministic. Nothing here reads the clock or touches disk.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::identity::EntityId;
use crate::entities::item::Item;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Number of days to consider "soon" for starting/finishing
pub const SOON_THRESHOLD_DAYS: i64 = 14;

/// Number of days after completion to show "Completed Recently"
pub const COMPLETED_RECENTLY_DAYS: i64 = 14;

/// Grace margin (percentage points) before an item counts as trending late
pub const TRENDING_LATE_BUFFER: f64 = 5.0;

/// Calculated status indicators, least to most severe.
///
/// The wire strings are the persisted values and must stay stable; files
/// written by earlier releases carry them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Completed Recently")]
    CompletedRecently,
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "Starting Soon!")]
    StartingSoon,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Finishing Soon!")]
    FinishingSoon,
    #[serde(rename = "Trending Late!")]
    TrendingLate,
    #[serde(rename = "Late Start!!")]
    LateStart,
    #[serde(rename = "Late Finish!!")]
    LateFinish,
    #[serde(rename = "Beyond Deadline!!!")]
    BeyondDeadline,
}

impl Indicator {
    /// The persisted wire string for this indicator
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Completed => "Completed",
            Indicator::CompletedRecently => "Completed Recently",
            Indicator::NotStarted => "Not Started",
            Indicator::StartingSoon => "Starting Soon!",
            Indicator::InProgress => "In Progress",
            Indicator::FinishingSoon => "Finishing Soon!",
            Indicator::TrendingLate => "Trending Late!",
            Indicator::LateStart => "Late Start!!",
            Indicator::LateFinish => "Late Finish!!",
            Indicator::BeyondDeadline => "Beyond Deadline!!!",
        }
    }

    /// Severity level for sorting, 1 (Completed) through 10 (Beyond Deadline)
    pub fn severity(&self) -> u8 {
        match self {
            Indicator::Completed => 1,
            Indicator::CompletedRecently => 2,
            Indicator::NotStarted => 3,
            Indicator::StartingSoon => 4,
            Indicator::InProgress => 5,
            Indicator::FinishingSoon => 6,
            Indicator::TrendingLate => 7,
            Indicator::LateStart => 8,
            Indicator::LateFinish => 9,
            Indicator::BeyondDeadline => 10,
        }
    }

    /// All indicators, least to most severe
    pub fn all() -> &'static [Indicator] {
        &[
            Indicator::Completed,
            Indicator::CompletedRecently,
            Indicator::NotStarted,
            Indicator::StartingSoon,
            Indicator::InProgress,
            Indicator::FinishingSoon,
            Indicator::TrendingLate,
            Indicator::LateStart,
            Indicator::LateFinish,
            Indicator::BeyondDeadline,
        ]
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the wire string, or a relaxed lowercase form without punctuation
        let relaxed = s.trim().trim_end_matches('!').to_lowercase().replace('-', " ");
        match relaxed.as_str() {
            "completed" => Ok(Indicator::Completed),
            "completed recently" => Ok(Indicator::CompletedRecently),
            "not started" => Ok(Indicator::NotStarted),
            "starting soon" => Ok(Indicator::StartingSoon),
            "in progress" => Ok(Indicator::InProgress),
            "finishing soon" => Ok(Indicator::FinishingSoon),
            "trending late" => Ok(Indicator::TrendingLate),
            "late start" => Ok(Indicator::LateStart),
            "late finish" => Ok(Indicator::LateFinish),
            "beyond deadline" => Ok(Indicator::BeyondDeadline),
            _ => Err(format!("Unknown indicator: {}", s)),
        }
    }
}

/// Severity of an optional indicator - `None` ranks below everything (0)
pub fn indicator_severity(indicator: Option<Indicator>) -> u8 {
    indicator.map_or(0, |i| i.severity())
}

// =============================================================================
// INDICATOR CALCULATION
// =============================================================================

/// Calculate the status indicator for an item.
///
/// Precedence (highest to lowest, first match wins):
/// 1. Draft items -> no indicator
/// 2. 100% complete -> Completed Recently or Completed
/// 3. Deadline passed -> Beyond Deadline!!!
/// 4. Finish date passed, <100% -> Late Finish!!
/// 5. Start date passed, 0% -> Late Start!!
/// 6. Progress behind elapsed time -> Trending Late!
/// 7. Finish date within 14 days -> Finishing Soon!
/// 8. Start date within 14 days, 0% -> Starting Soon!
/// 9. 1-99% complete -> In Progress
/// 10. Has dates, 0% complete -> Not Started
///
/// `today` is the reference date; callers resolve it once (from the clock or
/// `--as-of`) and pass it down.
pub fn calculate_indicator(item: &Item, today: NaiveDate) -> Option<Indicator> {
    // Rule 1: draft items have no indicator, whatever else is set
    if item.draft {
        return None;
    }

    // Rule 2: completed items (>= tolerates over-range values)
    if item.percent_complete >= 100 {
        if let Some(updated) = item.updated {
            let days_since = (today - updated.date_naive()).num_days();
            if days_since <= COMPLETED_RECENTLY_DAYS {
                return Some(Indicator::CompletedRecently);
            }
        }
        return Some(Indicator::Completed);
    }

    // Rule 3: beyond deadline overrides all other active states
    if let Some(deadline) = item.deadline {
        if deadline < today {
            return Some(Indicator::BeyondDeadline);
        }
    }

    // Rule 4: finish date passed, not complete (wins over a passed start date)
    if let Some(finish) = item.finish_date {
        if finish < today {
            return Some(Indicator::LateFinish);
        }
    }

    // Rule 5: start date passed, still at 0%
    if let Some(start) = item.start_date {
        if start < today && item.percent_complete == 0 {
            return Some(Indicator::LateStart);
        }
    }

    // Rule 6: progress lags the linear schedule
    if is_trending_late(item, today) {
        return Some(Indicator::TrendingLate);
    }

    // Rule 7: finish date within threshold (today counts)
    if let Some(finish) = item.finish_date {
        let days_until = (finish - today).num_days();
        if (0..=SOON_THRESHOLD_DAYS).contains(&days_until) {
            return Some(Indicator::FinishingSoon);
        }
    }

    // Rule 8: start date within threshold, still at 0%
    if item.percent_complete == 0 {
        if let Some(start) = item.start_date {
            let days_until = (start - today).num_days();
            if (0..=SOON_THRESHOLD_DAYS).contains(&days_until) {
                return Some(Indicator::StartingSoon);
            }
        }
    }

    // Rule 9: in progress (1-99%)
    if item.percent_complete > 0 && item.percent_complete < 100 {
        return Some(Indicator::InProgress);
    }

    // Rule 10: fully dated but untouched
    if item.has_dates() && item.percent_complete == 0 {
        return Some(Indicator::NotStarted);
    }

    // No dates and no progress (or out-of-range negative percent)
    None
}

/// Trending-late sub-rule: actual progress behind time-based expected progress.
///
/// Models a linear schedule: an item spanning `total` days is expected to be
/// `elapsed/total` done. Degenerate spans (zero-length or inverted) never
/// trigger.
fn is_trending_late(item: &Item, today: NaiveDate) -> bool {
    let (Some(start), Some(finish)) = (item.start_date, item.finish_date) else {
        return false;
    };

    // Must have started
    if start > today {
        return false;
    }

    // Must not be complete
    if item.percent_complete >= 100 {
        return false;
    }

    let total_days = (finish - start).num_days();
    if total_days <= 0 {
        return false;
    }

    let elapsed_days = (today - start).num_days().max(0);
    let expected_progress = (elapsed_days as f64 / total_days as f64) * 100.0;

    (item.percent_complete as f64) < expected_progress - TRENDING_LATE_BUFFER
}

// =============================================================================
// BATCH OPERATIONS
// =============================================================================

/// Calculate indicators for a batch of items.
///
/// Returns one `(id, indicator)` pair per input item, in input order. Diffing
/// against the stored indicator (and persisting the deltas) is the caller's
/// job; this stays a pure mapping.
pub fn calculate_indicators_batch(
    items: &[Item],
    today: NaiveDate,
) -> Vec<(EntityId, Option<Indicator>)> {
    items
        .iter()
        .map(|item| (item.id.clone(), calculate_indicator(item, today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::item::ItemType;
    use chrono::{DateTime, Duration, NaiveTime, Utc};

    /// Fixed reference date so tests never depend on the wall clock
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Offset from the reference date in days
    fn day(offset: i64) -> NaiveDate {
        today() + Duration::days(offset)
    }

    /// Timestamp at midnight UTC on the given offset day
    fn stamp(offset: i64) -> DateTime<Utc> {
        day(offset)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    fn item() -> Item {
        Item::new(
            ItemType::ActionItem,
            "Test Item".to_string(),
            "test".to_string(),
        )
    }

    // ========== Rule 1: draft ==========

    #[test]
    fn test_draft_has_no_indicator() {
        let mut it = item();
        it.draft = true;
        it.start_date = Some(day(-30));
        it.finish_date = Some(day(-15));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), None);
    }

    #[test]
    fn test_draft_overrides_deadline_and_completion() {
        let mut it = item();
        it.draft = true;
        it.deadline = Some(day(-10));
        it.percent_complete = 100;
        assert_eq!(calculate_indicator(&it, today()), None);
    }

    // ========== Rule 2: completed ==========

    #[test]
    fn test_completed_recently() {
        let mut it = item();
        it.percent_complete = 100;
        it.updated = Some(stamp(-5));
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::CompletedRecently)
        );
    }

    #[test]
    fn test_completed_recently_at_boundary() {
        let mut it = item();
        it.percent_complete = 100;
        it.updated = Some(stamp(-COMPLETED_RECENTLY_DAYS));
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::CompletedRecently)
        );
    }

    #[test]
    fn test_completed_beyond_boundary() {
        let mut it = item();
        it.percent_complete = 100;
        it.updated = Some(stamp(-(COMPLETED_RECENTLY_DAYS + 1)));
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::Completed));
    }

    #[test]
    fn test_completed_without_updated_timestamp() {
        let mut it = item();
        it.percent_complete = 100;
        it.updated = None;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::Completed));
    }

    #[test]
    fn test_over_range_percent_counts_as_completed() {
        let mut it = item();
        it.percent_complete = 150;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::Completed));
    }

    #[test]
    fn test_completed_wins_over_passed_deadline() {
        let mut it = item();
        it.percent_complete = 100;
        it.deadline = Some(day(-20));
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::Completed));
    }

    // ========== Rule 3: beyond deadline ==========

    #[test]
    fn test_deadline_passed() {
        let mut it = item();
        it.deadline = Some(day(-1));
        it.percent_complete = 50;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::BeyondDeadline)
        );
    }

    #[test]
    fn test_deadline_today_is_not_beyond() {
        let mut it = item();
        it.deadline = Some(today());
        it.percent_complete = 50;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::InProgress));
    }

    #[test]
    fn test_beyond_deadline_wins_over_late_finish() {
        let mut it = item();
        it.deadline = Some(day(-1));
        it.finish_date = Some(day(-5));
        it.percent_complete = 50;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::BeyondDeadline)
        );
    }

    // ========== Rule 4: late finish ==========

    #[test]
    fn test_finish_date_passed() {
        let mut it = item();
        it.finish_date = Some(day(-1));
        it.percent_complete = 75;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::LateFinish));
    }

    #[test]
    fn test_late_finish_wins_over_late_start_at_zero_percent() {
        let mut it = item();
        it.start_date = Some(day(-10));
        it.finish_date = Some(day(-1));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::LateFinish));
    }

    // ========== Rule 5: late start ==========

    #[test]
    fn test_start_date_passed_at_zero_percent() {
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(10));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::LateStart));
    }

    #[test]
    fn test_late_start_wins_over_trending_late() {
        let mut it = item();
        it.start_date = Some(day(-10));
        it.finish_date = Some(day(10));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::LateStart));
    }

    #[test]
    fn test_started_item_with_progress_is_not_late_start() {
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(30));
        it.percent_complete = 10;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::LateStart)
        );
    }

    // ========== Rule 6: trending late ==========

    #[test]
    fn test_behind_schedule_is_trending_late() {
        // 10-day span, 5 elapsed, expected 50%, actual 20% (20 < 45)
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(5));
        it.percent_complete = 20;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    #[test]
    fn test_on_schedule_is_not_trending_late() {
        // Expected 50%, actual 50%; falls through to Finishing Soon
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(5));
        it.percent_complete = 50;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    #[test]
    fn test_ahead_of_schedule_is_not_trending_late() {
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(5));
        it.percent_complete = 75;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    #[test]
    fn test_buffer_boundary_is_not_trending_late() {
        // Expected 50%, buffer 5: 45 < 45 is false
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(5));
        it.percent_complete = 45;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    #[test]
    fn test_trending_late_wins_over_finishing_soon() {
        // 20-day span, 18 elapsed, expected 90%, actual 40%
        let mut it = item();
        it.start_date = Some(day(-18));
        it.finish_date = Some(day(2));
        it.percent_complete = 40;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    #[test]
    fn test_zero_length_span_never_trends_late() {
        let mut it = item();
        it.start_date = Some(today());
        it.finish_date = Some(today());
        it.percent_complete = 10;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    #[test]
    fn test_inverted_span_never_trends_late() {
        let mut it = item();
        it.start_date = Some(day(-2));
        it.finish_date = Some(day(-5));
        it.percent_complete = 10;
        // Finish date already passed, so Late Finish wins anyway
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::LateFinish));
    }

    #[test]
    fn test_future_start_never_trends_late() {
        let mut it = item();
        it.start_date = Some(day(5));
        it.finish_date = Some(day(15));
        it.percent_complete = 0;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::TrendingLate)
        );
    }

    // ========== Rule 7: finishing soon ==========

    #[test]
    fn test_finish_within_threshold() {
        let mut it = item();
        it.start_date = Some(day(-30));
        it.finish_date = Some(day(7));
        it.percent_complete = 80;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    #[test]
    fn test_finish_today() {
        let mut it = item();
        it.finish_date = Some(today());
        it.percent_complete = 90;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    #[test]
    fn test_finish_at_threshold_boundary() {
        let mut it = item();
        it.finish_date = Some(day(SOON_THRESHOLD_DAYS));
        it.percent_complete = 80;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    #[test]
    fn test_finish_beyond_threshold() {
        let mut it = item();
        it.start_date = Some(day(-1));
        it.finish_date = Some(day(SOON_THRESHOLD_DAYS + 1));
        it.percent_complete = 10;
        assert_ne!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    // ========== Rule 8: starting soon ==========

    #[test]
    fn test_start_within_threshold_at_zero_percent() {
        let mut it = item();
        it.start_date = Some(day(5));
        it.finish_date = Some(day(20));
        it.percent_complete = 0;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::StartingSoon)
        );
    }

    #[test]
    fn test_finishing_soon_wins_when_dates_coincide() {
        // Start and finish both 5 days out: rule 7 is checked first
        let mut it = item();
        it.start_date = Some(day(5));
        it.finish_date = Some(day(5));
        it.percent_complete = 0;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::FinishingSoon)
        );
    }

    #[test]
    fn test_start_today() {
        let mut it = item();
        it.start_date = Some(today());
        it.finish_date = Some(day(30));
        it.percent_complete = 0;
        assert_eq!(
            calculate_indicator(&it, today()),
            Some(Indicator::StartingSoon)
        );
    }

    #[test]
    fn test_start_soon_with_progress_is_in_progress() {
        let mut it = item();
        it.start_date = Some(day(5));
        it.finish_date = Some(day(20));
        it.percent_complete = 10;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::InProgress));
    }

    #[test]
    fn test_start_beyond_threshold() {
        let mut it = item();
        it.start_date = Some(day(SOON_THRESHOLD_DAYS + 1));
        it.finish_date = Some(day(40));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::NotStarted));
    }

    // ========== Rules 9-10 and the fallthrough ==========

    #[test]
    fn test_partial_progress_without_dates() {
        let mut it = item();
        it.percent_complete = 50;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::InProgress));
    }

    #[test]
    fn test_one_and_ninety_nine_percent() {
        let mut it = item();
        it.percent_complete = 1;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::InProgress));
        it.percent_complete = 99;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::InProgress));
    }

    #[test]
    fn test_dated_untouched_item_is_not_started() {
        let mut it = item();
        it.start_date = Some(day(30));
        it.finish_date = Some(day(60));
        it.percent_complete = 0;
        assert_eq!(calculate_indicator(&it, today()), Some(Indicator::NotStarted));
    }

    #[test]
    fn test_no_dates_no_progress_has_no_indicator() {
        let it = item();
        assert_eq!(calculate_indicator(&it, today()), None);
    }

    #[test]
    fn test_negative_percent_without_dates_has_no_indicator() {
        let mut it = item();
        it.percent_complete = -10;
        assert_eq!(calculate_indicator(&it, today()), None);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut it = item();
        it.start_date = Some(day(-5));
        it.finish_date = Some(day(5));
        it.percent_complete = 20;
        let first = calculate_indicator(&it, today());
        let second = calculate_indicator(&it, today());
        assert_eq!(first, second);
    }

    // ========== Batch ==========

    #[test]
    fn test_batch_is_one_to_one_and_ordered() {
        let mut draft = item();
        draft.draft = true;
        let mut done = item();
        done.percent_complete = 100;
        let mut half = item();
        half.percent_complete = 50;

        let items = vec![draft, done, half];
        let results = calculate_indicators_batch(&items, today());

        assert_eq!(results.len(), 3);
        for (i, (id, indicator)) in results.iter().enumerate() {
            assert_eq!(id, &items[i].id);
            assert_eq!(*indicator, calculate_indicator(&items[i], today()));
        }
        assert_eq!(results[0].1, None);
        assert_eq!(results[1].1, Some(Indicator::Completed));
        assert_eq!(results[2].1, Some(Indicator::InProgress));
    }

    // ========== Severity ==========

    #[test]
    fn test_severity_endpoints() {
        assert_eq!(indicator_severity(None), 0);
        assert_eq!(indicator_severity(Some(Indicator::BeyondDeadline)), 10);
    }

    #[test]
    fn test_severity_is_strictly_increasing() {
        let severities: Vec<u8> = Indicator::all().iter().map(|i| i.severity()).collect();
        for pair in severities.windows(2) {
            assert!(pair[0] < pair[1], "severity order broken at {:?}", pair);
        }
        assert_eq!(severities.first(), Some(&1));
        assert_eq!(severities.last(), Some(&10));
    }

    // ========== Wire format ==========

    #[test]
    fn test_wire_strings_are_stable() {
        assert_eq!(Indicator::BeyondDeadline.as_str(), "Beyond Deadline!!!");
        assert_eq!(Indicator::LateFinish.as_str(), "Late Finish!!");
        assert_eq!(Indicator::LateStart.as_str(), "Late Start!!");
        assert_eq!(Indicator::TrendingLate.as_str(), "Trending Late!");
        assert_eq!(Indicator::FinishingSoon.as_str(), "Finishing Soon!");
        assert_eq!(Indicator::StartingSoon.as_str(), "Starting Soon!");
        assert_eq!(Indicator::InProgress.as_str(), "In Progress");
        assert_eq!(Indicator::NotStarted.as_str(), "Not Started");
        assert_eq!(Indicator::CompletedRecently.as_str(), "Completed Recently");
        assert_eq!(Indicator::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_indicator_serde_uses_wire_strings() {
        for indicator in Indicator::all() {
            let yaml = serde_yml::to_string(indicator).unwrap();
            assert!(yaml.contains(indicator.as_str()), "got {:?}", yaml);
            let back: Indicator = serde_yml::from_str(&yaml).unwrap();
            assert_eq!(back, *indicator);
        }
    }

    #[test]
    fn test_indicator_from_str_relaxed() {
        assert_eq!(
            "Beyond Deadline!!!".parse::<Indicator>().unwrap(),
            Indicator::BeyondDeadline
        );
        assert_eq!(
            "beyond-deadline".parse::<Indicator>().unwrap(),
            Indicator::BeyondDeadline
        );
        assert_eq!(
            "trending late".parse::<Indicator>().unwrap(),
            Indicator::TrendingLate
        );
        assert!("bogus".parse::<Indicator>().is_err());
    }
}
