/// Arc validation — structural checks over an assembled arc.
///
/// Findings are data for the caller (typically surfaced as setup-UI
/// warnings), never errors; validation neither mutates nor regenerates.
use thiserror::Error;

use crate::schema::arc::{StoryArc, StoryPhase};

/// A structural defect found in an arc. `thiserror` only supplies the
/// `Display` text; issues are returned in a report, not thrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("arc has no introduction beat")]
    MissingIntroduction,
    #[error("arc has {0} climax beats, expected exactly one")]
    WrongClimaxCount(usize),
    #[error("climax intensity is {0}, expected 9 or 10")]
    WeakClimax(u8),
    #[error("arc has neither a resolution nor a celebration beat")]
    MissingResolution,
    #[error("beat '{id}' runs through week {end_week}, past the {total_weeks}-week campaign")]
    BeatPastEnd {
        id: String,
        end_week: u32,
        total_weeks: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Check the structural invariants of an assembled arc.
pub fn validate(arc: &StoryArc) -> ValidationReport {
    let mut issues = Vec::new();

    if arc.events_in_phase(StoryPhase::Introduction).next().is_none() {
        issues.push(ValidationIssue::MissingIntroduction);
    }

    let climaxes: Vec<_> = arc.events_in_phase(StoryPhase::Climax).collect();
    if climaxes.len() != 1 {
        issues.push(ValidationIssue::WrongClimaxCount(climaxes.len()));
    } else if !(9..=10).contains(&climaxes[0].intensity) {
        issues.push(ValidationIssue::WeakClimax(climaxes[0].intensity));
    }

    let has_ending = arc.events_in_phase(StoryPhase::Resolution).next().is_some()
        || arc.events_in_phase(StoryPhase::Celebration).next().is_some();
    if !has_ending {
        issues.push(ValidationIssue::MissingResolution);
    }

    for event in &arc.events {
        if event.end_week() > arc.total_weeks {
            issues.push(ValidationIssue::BeatPastEnd {
                id: event.id.clone(),
                end_week: event.end_week(),
                total_weeks: arc.total_weeks,
            });
        }
    }

    ValidationReport {
        valid: issues.is_empty(),
        issues,
    }
}
