use serde::{Deserialize, Serialize};

/// The structural role a beat plays in the arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryPhase {
    Introduction,
    RisingAction,
    PlotTwist,
    Climax,
    FallingAction,
    Resolution,
    Celebration,
}

impl StoryPhase {
    /// Returns the key string for this phase (e.g., "rising_action"),
    /// used to look up content templates.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::RisingAction => "rising_action",
            Self::PlotTwist => "plot_twist",
            Self::Climax => "climax",
            Self::FallingAction => "falling_action",
            Self::Resolution => "resolution",
            Self::Celebration => "celebration",
        }
    }
}

/// Title and description attached to a beat. Supplied by the template
/// library; the engine treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContent {
    pub title: String,
    pub description: String,
}

/// A single placed narrative beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEvent {
    /// Stable identifier, unique within an arc.
    pub id: String,
    pub phase: StoryPhase,
    /// Dramatic tension, 1..=10.
    pub intensity: u8,
    /// First week of the beat, 1-based.
    pub week: u32,
    pub duration_weeks: u32,
    pub villain_involvement: bool,
    pub player_choice_required: bool,
    pub content: EventContent,
}

impl StoryEvent {
    /// Last week the beat occupies.
    pub fn end_week(&self) -> u32 {
        self.week + self.duration_weeks - 1
    }
}

/// Coarse pacing summary derived from density and profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacingDescriptor {
    Slow,
    Medium,
    Fast,
}

impl PacingDescriptor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

/// A fully assembled campaign arc. Built once per generate call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryArc {
    pub campaign_id: String,
    pub total_weeks: u32,
    pub climax_week: u32,
    /// Beats ordered ascending by week.
    pub events: Vec<StoryEvent>,
    pub pacing: PacingDescriptor,
    pub theme: String,
    pub difficulty: String,
}

impl StoryArc {
    /// Beats carrying the given structural role.
    pub fn events_in_phase(&self, phase: StoryPhase) -> impl Iterator<Item = &StoryEvent> {
        self.events.iter().filter(move |e| e.phase == phase)
    }

    pub fn climax_event(&self) -> Option<&StoryEvent> {
        self.events_in_phase(StoryPhase::Climax).next()
    }
}
