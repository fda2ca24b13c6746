/// Arc assembly — merges phase outputs into the final ordered arc and
/// derives the pacing descriptor.
use crate::schema::arc::{PacingDescriptor, StoryArc, StoryEvent};
use crate::schema::config::{EventDensity, IntensityProfile, PacingConfiguration};

/// Concatenate phase outputs and stable-sort ascending by week. Ties keep
/// their emission order, so within a week the structural order of the
/// phase generators is preserved.
pub fn assemble(
    campaign_id: &str,
    theme: &str,
    difficulty: &str,
    config: &PacingConfiguration,
    climax_week: u32,
    phase_outputs: Vec<Vec<StoryEvent>>,
) -> StoryArc {
    let mut events: Vec<StoryEvent> = phase_outputs.into_iter().flatten().collect();
    events.sort_by_key(|e| e.week);

    StoryArc {
        campaign_id: campaign_id.to_string(),
        total_weeks: config.campaign_duration_weeks,
        climax_week,
        events,
        pacing: pacing_descriptor(config.event_density, config.intensity_profile),
        theme: theme.to_string(),
        difficulty: difficulty.to_string(),
    }
}

/// First-matching rule; the order is semantic. Dense or Steep reads as
/// fast even when paired with Sparse-or-Plateau settings.
pub fn pacing_descriptor(
    density: EventDensity,
    profile: IntensityProfile,
) -> PacingDescriptor {
    if density == EventDensity::Dense || profile == IntensityProfile::Steep {
        PacingDescriptor::Fast
    } else if density == EventDensity::Sparse || profile == IntensityProfile::Plateau {
        PacingDescriptor::Slow
    } else {
        PacingDescriptor::Medium
    }
}
