/// Arc integration tests — end-to-end configuration-to-arc generation.
use pacing_engine::core::engine::{preview_summary, GenerationRequest, PacingEngine, PacingError};
use pacing_engine::core::validator::validate;
use pacing_engine::schema::arc::{PacingDescriptor, StoryPhase};
use pacing_engine::schema::config::{
    ClimaxPosition, ConfigurationError, EventDensity, IntensityProfile, PacingConfiguration,
    VillainPresence,
};

fn config(
    duration: u32,
    position: ClimaxPosition,
    profile: IntensityProfile,
    celebration: u32,
    density: EventDensity,
) -> PacingConfiguration {
    PacingConfiguration {
        campaign_duration_weeks: duration,
        climax_position: position,
        custom_climax_week: None,
        intensity_profile: profile,
        celebration_duration_weeks: celebration,
        event_density: density,
        allow_player_choice: true,
        villain_presence: VillainPresence::Moderate,
    }
}

fn request(config: PacingConfiguration) -> GenerationRequest {
    GenerationRequest {
        campaign_id: "camp_1".to_string(),
        theme: "default".to_string(),
        difficulty: "intermediate".to_string(),
        config,
    }
}

fn generate(config: PacingConfiguration) -> pacing_engine::schema::arc::StoryArc {
    PacingEngine::builder()
        .seed(42)
        .build()
        .unwrap()
        .generate(&request(config))
        .unwrap()
}

#[test]
fn twenty_week_middle_campaign() {
    let arc = generate(config(
        20,
        ClimaxPosition::Middle,
        IntensityProfile::Gradual,
        2,
        EventDensity::Moderate,
    ));

    assert_eq!(arc.climax_week, 15);

    let climax = arc.climax_event().unwrap();
    assert_eq!(climax.week, 15);
    assert_eq!(climax.end_week(), 16);

    let opening = arc
        .events_in_phase(StoryPhase::Introduction)
        .next()
        .unwrap();
    assert_eq!(opening.week, 1);

    let celebration = arc
        .events_in_phase(StoryPhase::Celebration)
        .next()
        .unwrap();
    assert_eq!(celebration.week, 19);
    assert_eq!(celebration.duration_weeks, 2);
}

#[test]
fn custom_climax_clamped_by_celebration() {
    let mut cfg = config(
        10,
        ClimaxPosition::Custom,
        IntensityProfile::Gradual,
        3,
        EventDensity::Moderate,
    );
    cfg.custom_climax_week = Some(9);

    let arc = generate(cfg);
    assert_eq!(arc.climax_week, 7);
}

#[test]
fn short_campaign_gets_only_the_opening_introduction() {
    let arc = generate(config(
        8,
        ClimaxPosition::Early,
        IntensityProfile::Plateau,
        0,
        EventDensity::Sparse,
    ));

    let intro: Vec<_> = arc.events_in_phase(StoryPhase::Introduction).collect();
    assert_eq!(intro.len(), 1);
    assert_eq!(intro[0].week, 1);
}

#[test]
fn dense_steep_reads_fast() {
    let arc = generate(config(
        52,
        ClimaxPosition::Middle,
        IntensityProfile::Steep,
        0,
        EventDensity::Dense,
    ));
    assert_eq!(arc.pacing, PacingDescriptor::Fast);
}

#[test]
fn celebration_swallowing_the_campaign_is_rejected() {
    let cfg = config(
        10,
        ClimaxPosition::Middle,
        IntensityProfile::Gradual,
        10,
        EventDensity::Moderate,
    );
    let mut engine = PacingEngine::builder().seed(42).build().unwrap();
    let result = engine.generate(&request(cfg));
    assert!(matches!(
        result,
        Err(PacingError::Configuration(
            ConfigurationError::CelebrationTooLong { .. }
        ))
    ));
}

#[test]
fn identical_seed_and_config_yield_identical_arcs() {
    let cfg = config(
        30,
        ClimaxPosition::Late,
        IntensityProfile::MultiplePeaks,
        3,
        EventDensity::Dense,
    );
    let arc1 = generate(cfg.clone());
    let arc2 = generate(cfg);
    assert_eq!(arc1, arc2);
}

#[test]
fn different_seeds_can_differ() {
    let cfg = config(
        30,
        ClimaxPosition::Late,
        IntensityProfile::MultiplePeaks,
        3,
        EventDensity::Dense,
    );
    let req = request(cfg);
    let arc1 = PacingEngine::builder()
        .seed(1)
        .build()
        .unwrap()
        .generate(&req)
        .unwrap();

    let mut found_different = false;
    for seed in 2..50 {
        let arc2 = PacingEngine::builder()
            .seed(seed)
            .build()
            .unwrap()
            .generate(&req)
            .unwrap();
        if arc1 != arc2 {
            found_different = true;
            break;
        }
    }
    assert!(found_different, "expected some seed to change the arc");
}

#[test]
fn every_valid_configuration_yields_a_validator_clean_arc() {
    let positions = [
        ClimaxPosition::Early,
        ClimaxPosition::Middle,
        ClimaxPosition::Late,
    ];
    let profiles = [
        IntensityProfile::Gradual,
        IntensityProfile::Steep,
        IntensityProfile::Plateau,
        IntensityProfile::MultiplePeaks,
    ];
    let densities = [
        EventDensity::Sparse,
        EventDensity::Moderate,
        EventDensity::Dense,
    ];

    for duration in [5, 8, 12, 20, 52] {
        for &position in &positions {
            for &profile in &profiles {
                for &density in &densities {
                    for celebration in [0, 2] {
                        if celebration >= duration {
                            continue;
                        }
                        let cfg = config(duration, position, profile, celebration, density);
                        let arc = generate(cfg);

                        assert!(arc.climax_week >= 1);
                        assert!(arc.climax_week <= duration - celebration);

                        let climaxes: Vec<_> =
                            arc.events_in_phase(StoryPhase::Climax).collect();
                        assert_eq!(climaxes.len(), 1);
                        assert!(climaxes[0].intensity >= 9);
                        assert_eq!(climaxes[0].week, arc.climax_week);

                        for event in &arc.events {
                            assert!(event.week >= 1);
                            assert!(
                                event.end_week() <= duration,
                                "{} runs to week {} in a {}-week campaign",
                                event.id,
                                event.end_week(),
                                duration
                            );
                            assert!((1..=10).contains(&event.intensity));
                        }

                        let report = validate(&arc);
                        assert!(
                            report.valid,
                            "{}w {:?} {:?} {:?} celebration {}: {:?}",
                            duration, position, profile, density, celebration, report.issues
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn custom_climax_on_the_final_week_stays_in_bounds() {
    let mut cfg = config(
        12,
        ClimaxPosition::Custom,
        IntensityProfile::Gradual,
        0,
        EventDensity::Moderate,
    );
    cfg.custom_climax_week = Some(12);

    let arc = generate(cfg);
    assert_eq!(arc.climax_week, 12);
    assert!(validate(&arc).valid);
    assert!(arc.events.iter().all(|e| e.end_week() <= 12));
}

#[test]
fn event_ids_unique_within_an_arc() {
    let arc = generate(config(
        52,
        ClimaxPosition::Middle,
        IntensityProfile::MultiplePeaks,
        4,
        EventDensity::Dense,
    ));
    let mut ids: Vec<&str> = arc.events.iter().map(|e| e.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn summary_paragraph_reads_back_the_settings() {
    let cfg = config(
        20,
        ClimaxPosition::Middle,
        IntensityProfile::Plateau,
        2,
        EventDensity::Sparse,
    );
    let arc = generate(cfg.clone());
    let summary = preview_summary(&arc, &cfg);

    assert!(summary.contains("slow-paced"));
    assert!(summary.contains("sparse"));
    assert!(summary.contains("plateau"));
    assert!(summary.contains(&format!("week {}", arc.climax_week)));
}
