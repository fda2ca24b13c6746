/// Phase synthesizers — the three structural beat generators plus the
/// climax beat. Each is a pure function of the climax week, the curve,
/// and the configuration; only rising action consumes the random source.
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::content::TemplateLibrary;
use crate::core::curve::IntensityCurve;
use crate::schema::arc::{StoryEvent, StoryPhase};
use crate::schema::config::{EventDensity, PacingConfiguration, VillainPresence};

/// Number of weeks reserved for the introduction: the first fifth of the
/// campaign, floored.
pub fn introduction_window(total_weeks: u32) -> u32 {
    total_weeks / 5
}

/// Introduction beats. The opening always lands on week 1; world-building
/// and character-introduction beats only fit windows of at least 2 and 3
/// weeks respectively, clamped to the last introduction week.
pub fn introduction_events(
    total_weeks: u32,
    library: &TemplateLibrary,
    theme: &str,
) -> Vec<StoryEvent> {
    let window = introduction_window(total_weeks).max(1);
    let mut events = vec![intro_beat("opening", 1, 3, false, library, theme)];

    if window >= 2 {
        events.push(intro_beat(
            "world_building",
            window.min(2),
            2,
            true,
            library,
            theme,
        ));
    }
    if window >= 3 {
        events.push(intro_beat(
            "character_intro",
            window.min(3),
            3,
            true,
            library,
            theme,
        ));
    }
    events
}

fn intro_beat(
    id: &str,
    week: u32,
    intensity: u8,
    player_choice: bool,
    library: &TemplateLibrary,
    theme: &str,
) -> StoryEvent {
    StoryEvent {
        id: id.to_string(),
        phase: StoryPhase::Introduction,
        intensity,
        week,
        duration_weeks: 1,
        villain_involvement: false,
        player_choice_required: player_choice,
        content: library.content_for(theme, StoryPhase::Introduction, week),
    }
}

/// Rising-action beats over the window between the introduction and the
/// climax, placed at proportionally spaced weeks (never random positions).
/// Each beat samples the curve at its week; high-intensity beats may flip
/// to plot twists on a random draw.
pub fn rising_action_events(
    config: &PacingConfiguration,
    climax_week: u32,
    curve: &IntensityCurve,
    library: &TemplateLibrary,
    theme: &str,
    rng: &mut StdRng,
) -> Vec<StoryEvent> {
    let start = introduction_window(config.campaign_duration_weeks) + 1;
    let end = match climax_week.checked_sub(1) {
        Some(end) if end >= start => end,
        _ => return Vec::new(),
    };
    let len = end - start + 1;

    let base = len / 2 + 1;
    let count = match config.event_density {
        EventDensity::Sparse => (base / 2).max(1),
        EventDensity::Moderate => base,
        EventDensity::Dense => (base * 2).min(len),
    };

    (0..count)
        .map(|i| {
            let week = start + (i * len) / count;
            let intensity = curve.sample(week);

            let twist_roll: f64 = rng.gen();
            let choice_roll: f64 = rng.gen();

            let phase = if intensity > 7 && twist_roll > 0.6 {
                StoryPhase::PlotTwist
            } else {
                StoryPhase::RisingAction
            };

            StoryEvent {
                id: format!("rising_{}", i + 1),
                phase,
                intensity,
                week,
                duration_weeks: 1,
                villain_involvement: config.villain_presence != VillainPresence::Minimal
                    && intensity > 5,
                player_choice_required: config.allow_player_choice && choice_roll > 0.4,
                content: library.content_for(theme, phase, week),
            }
        })
        .collect()
}

/// The single climax beat: intensity 10, both flags set, spanning two
/// weeks. When the climax sits on the final week the span drops to one so
/// the beat never overruns the campaign.
pub fn climax_beat(
    climax_week: u32,
    total_weeks: u32,
    library: &TemplateLibrary,
    theme: &str,
) -> StoryEvent {
    let duration = if climax_week < total_weeks { 2 } else { 1 };
    StoryEvent {
        id: "climax".to_string(),
        phase: StoryPhase::Climax,
        intensity: 10,
        week: climax_week,
        duration_weeks: duration,
        villain_involvement: true,
        player_choice_required: true,
        content: library.content_for(theme, StoryPhase::Climax, climax_week),
    }
}

/// Post-climax beats: aftermath, conclusion, and (when a celebration tail
/// is reserved) the celebration itself.
pub fn resolution_events(
    climax_week: u32,
    total_weeks: u32,
    celebration_weeks: u32,
    library: &TemplateLibrary,
    theme: &str,
) -> Vec<StoryEvent> {
    let aftermath_week = (climax_week + 1).min(total_weeks);
    let conclusion_week = (climax_week + 3).min(total_weeks - celebration_weeks);

    let mut events = vec![
        StoryEvent {
            id: "aftermath".to_string(),
            phase: StoryPhase::FallingAction,
            intensity: 6,
            week: aftermath_week,
            duration_weeks: 1,
            villain_involvement: false,
            player_choice_required: true,
            content: library.content_for(theme, StoryPhase::FallingAction, aftermath_week),
        },
        StoryEvent {
            id: "conclusion".to_string(),
            phase: StoryPhase::Resolution,
            intensity: 4,
            week: conclusion_week,
            duration_weeks: 1,
            villain_involvement: false,
            player_choice_required: false,
            content: library.content_for(theme, StoryPhase::Resolution, conclusion_week),
        },
    ];

    if celebration_weeks > 0 {
        let week = total_weeks - celebration_weeks + 1;
        events.push(StoryEvent {
            id: "celebration".to_string(),
            phase: StoryPhase::Celebration,
            intensity: 7,
            week,
            duration_weeks: celebration_weeks,
            villain_involvement: false,
            player_choice_required: false,
            content: library.content_for(theme, StoryPhase::Celebration, week),
        });
    }

    events
}
