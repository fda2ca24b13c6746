use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("campaign duration must be at least 1 week")]
    ZeroDuration,
    #[error("celebration ({celebration} weeks) must be shorter than the campaign ({duration} weeks)")]
    CelebrationTooLong { celebration: u32, duration: u32 },
    #[error("custom climax position requires custom_climax_week")]
    MissingCustomClimaxWeek,
    #[error("no week left for a climax: {duration} campaign weeks minus {celebration} celebration weeks")]
    NoClimaxWeek { duration: u32, celebration: u32 },
}

/// Where in the campaign the climax lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimaxPosition {
    Early,
    Middle,
    Late,
    Custom,
}

impl ClimaxPosition {
    /// Position of the climax as a percentage of the campaign duration.
    /// `Custom` has no ratio; it reads `custom_climax_week` instead.
    pub fn percent(&self) -> Option<u32> {
        match self {
            Self::Early => Some(60),
            Self::Middle => Some(75),
            Self::Late => Some(85),
            Self::Custom => None,
        }
    }
}

/// The shape of the per-week dramatic tension curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityProfile {
    Gradual,
    Steep,
    Plateau,
    MultiplePeaks,
}

impl IntensityProfile {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gradual => "gradual",
            Self::Steep => "steep",
            Self::Plateau => "plateau",
            Self::MultiplePeaks => "multiple peaks",
        }
    }
}

/// How many rising-action beats the campaign gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventDensity {
    Sparse,
    Moderate,
    Dense,
}

impl EventDensity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Moderate => "moderate",
            Self::Dense => "dense",
        }
    }
}

/// How prominently the villain features in rising-action beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VillainPresence {
    Minimal,
    Moderate,
    Heavy,
}

/// Caller-supplied pacing settings. Immutable once handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfiguration {
    pub campaign_duration_weeks: u32,
    pub climax_position: ClimaxPosition,
    #[serde(default)]
    pub custom_climax_week: Option<u32>,
    pub intensity_profile: IntensityProfile,
    #[serde(default)]
    pub celebration_duration_weeks: u32,
    pub event_density: EventDensity,
    #[serde(default)]
    pub allow_player_choice: bool,
    pub villain_presence: VillainPresence,
}

impl PacingConfiguration {
    /// Check the cross-field invariants. Always a caller-input defect when
    /// this fails; the engine never retries.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.campaign_duration_weeks == 0 {
            return Err(ConfigurationError::ZeroDuration);
        }
        if self.celebration_duration_weeks >= self.campaign_duration_weeks {
            return Err(ConfigurationError::CelebrationTooLong {
                celebration: self.celebration_duration_weeks,
                duration: self.campaign_duration_weeks,
            });
        }
        if self.climax_position == ClimaxPosition::Custom && self.custom_climax_week.is_none() {
            return Err(ConfigurationError::MissingCustomClimaxWeek);
        }
        Ok(())
    }

    /// Last week still available for a climax beat.
    pub fn last_climax_week(&self) -> u32 {
        self.campaign_duration_weeks
            .saturating_sub(self.celebration_duration_weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> PacingConfiguration {
        PacingConfiguration {
            campaign_duration_weeks: 20,
            climax_position: ClimaxPosition::Middle,
            custom_climax_week: None,
            intensity_profile: IntensityProfile::Gradual,
            celebration_duration_weeks: 2,
            event_density: EventDensity::Moderate,
            allow_player_choice: true,
            villain_presence: VillainPresence::Moderate,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let mut config = base_config();
        config.campaign_duration_weeks = 0;
        config.celebration_duration_weeks = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::ZeroDuration)
        ));
    }

    #[test]
    fn celebration_as_long_as_campaign_rejected() {
        let mut config = base_config();
        config.celebration_duration_weeks = 20;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::CelebrationTooLong { .. })
        ));
    }

    #[test]
    fn custom_position_requires_week() {
        let mut config = base_config();
        config.climax_position = ClimaxPosition::Custom;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingCustomClimaxWeek)
        ));

        config.custom_climax_week = Some(12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn position_percentages() {
        assert_eq!(ClimaxPosition::Early.percent(), Some(60));
        assert_eq!(ClimaxPosition::Middle.percent(), Some(75));
        assert_eq!(ClimaxPosition::Late.percent(), Some(85));
        assert_eq!(ClimaxPosition::Custom.percent(), None);
    }

    #[test]
    fn last_climax_week_reserves_celebration() {
        let config = base_config();
        assert_eq!(config.last_climax_week(), 18);
    }
}
