/// Climax positioning — resolves the climax week from configuration.
use crate::schema::config::{ConfigurationError, PacingConfiguration};

/// Resolve the week of the climax beat.
///
/// Named positions take a fixed percentage of the duration (floored);
/// `Custom` reads `custom_climax_week`. Every policy, Custom included, is
/// clamped into `[1, duration - celebration]` so the celebration tail stays
/// reserved.
pub fn resolve_climax_week(config: &PacingConfiguration) -> Result<u32, ConfigurationError> {
    let last = config.last_climax_week();
    if last < 1 {
        return Err(ConfigurationError::NoClimaxWeek {
            duration: config.campaign_duration_weeks,
            celebration: config.celebration_duration_weeks,
        });
    }

    let candidate = match config.climax_position.percent() {
        // Integer arithmetic keeps floor(duration * ratio) exact.
        Some(percent) => config.campaign_duration_weeks * percent / 100,
        None => config
            .custom_climax_week
            .ok_or(ConfigurationError::MissingCustomClimaxWeek)?,
    };

    Ok(candidate.clamp(1, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::config::{
        ClimaxPosition, EventDensity, IntensityProfile, VillainPresence,
    };

    fn config(duration: u32, position: ClimaxPosition, celebration: u32) -> PacingConfiguration {
        PacingConfiguration {
            campaign_duration_weeks: duration,
            climax_position: position,
            custom_climax_week: None,
            intensity_profile: IntensityProfile::Gradual,
            celebration_duration_weeks: celebration,
            event_density: EventDensity::Moderate,
            allow_player_choice: false,
            villain_presence: VillainPresence::Minimal,
        }
    }

    #[test]
    fn middle_position_twenty_weeks() {
        let c = config(20, ClimaxPosition::Middle, 2);
        assert_eq!(resolve_climax_week(&c).unwrap(), 15);
    }

    #[test]
    fn early_and_late_positions() {
        assert_eq!(
            resolve_climax_week(&config(20, ClimaxPosition::Early, 0)).unwrap(),
            12
        );
        assert_eq!(
            resolve_climax_week(&config(20, ClimaxPosition::Late, 0)).unwrap(),
            17
        );
    }

    #[test]
    fn custom_week_clamped_to_celebration_tail() {
        let mut c = config(10, ClimaxPosition::Custom, 3);
        c.custom_climax_week = Some(9);
        assert_eq!(resolve_climax_week(&c).unwrap(), 7);
    }

    #[test]
    fn named_position_clamped_too() {
        // Late on 10 weeks would be week 8; celebration of 4 pulls it to 6.
        let c = config(10, ClimaxPosition::Late, 4);
        assert_eq!(resolve_climax_week(&c).unwrap(), 6);
    }

    #[test]
    fn climax_never_before_week_one() {
        let c = config(1, ClimaxPosition::Early, 0);
        assert_eq!(resolve_climax_week(&c).unwrap(), 1);
    }

    #[test]
    fn no_week_available_errors() {
        let c = config(5, ClimaxPosition::Middle, 5);
        assert!(matches!(
            resolve_climax_week(&c),
            Err(ConfigurationError::NoClimaxWeek { .. })
        ));
    }

    #[test]
    fn custom_without_week_errors() {
        let c = config(10, ClimaxPosition::Custom, 0);
        assert!(matches!(
            resolve_climax_week(&c),
            Err(ConfigurationError::MissingCustomClimaxWeek)
        ));
    }
}
