/// The pacing engine: Configuration → StoryArc orchestration.
///
/// Wires together climax positioning, curve generation, the three phase
/// synthesizers, assembly, and validation.
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;

use crate::core::assembler::assemble;
use crate::core::climax::resolve_climax_week;
use crate::core::content::{ContentError, TemplateLibrary};
use crate::core::curve::IntensityCurve;
use crate::core::phases::{
    climax_beat, introduction_events, resolution_events, rising_action_events,
};
use crate::core::validator::{validate, ValidationReport};
use crate::schema::arc::StoryArc;
use crate::schema::config::{ConfigurationError, PacingConfiguration};

#[derive(Debug, Error)]
pub enum PacingError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One generation request: the pacing settings plus opaque identifiers
/// passed through into the arc unchanged.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct GenerationRequest {
    pub campaign_id: String,
    pub theme: String,
    pub difficulty: String,
    pub config: PacingConfiguration,
}

/// The top-level pacing engine. Built via `PacingEngine::builder()`.
///
/// Holds only the template library, the seed, and a per-call counter;
/// every `generate` call produces a fresh immutable arc. Rebuilding the
/// engine with the same seed replays the same sequence of arcs.
pub struct PacingEngine {
    templates: TemplateLibrary,
    seed: u64,
    generation_count: u64,
}

/// Builder for constructing a `PacingEngine`.
pub struct PacingEngineBuilder {
    templates_dir: Option<String>,
    seed: u64,
    /// Directly provided templates (for testing without files).
    templates: Option<TemplateLibrary>,
}

impl PacingEngine {
    pub fn builder() -> PacingEngineBuilder {
        PacingEngineBuilder {
            templates_dir: None,
            seed: 0,
            templates: None,
        }
    }

    /// Synthesize a story arc for one campaign.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<StoryArc, PacingError> {
        let config = &request.config;
        config.validate()?;

        let climax_week = resolve_climax_week(config)?;
        let total_weeks = config.campaign_duration_weeks;

        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));

        let curve = IntensityCurve::generate(
            config.intensity_profile,
            climax_week,
            total_weeks,
            &mut rng,
        );

        let theme = request.theme.as_str();
        let intro = introduction_events(total_weeks, &self.templates, theme);
        let rising = rising_action_events(
            config,
            climax_week,
            &curve,
            &self.templates,
            theme,
            &mut rng,
        );
        let climax = climax_beat(climax_week, total_weeks, &self.templates, theme);
        let resolution = resolution_events(
            climax_week,
            total_weeks,
            config.celebration_duration_weeks,
            &self.templates,
            theme,
        );

        let arc = assemble(
            &request.campaign_id,
            theme,
            &request.difficulty,
            config,
            climax_week,
            vec![intro, rising, vec![climax], resolution],
        );

        self.generation_count += 1;
        Ok(arc)
    }

    /// Structural check of an assembled arc. Findings are data; callers
    /// decide whether to regenerate or accept.
    pub fn validate(&self, arc: &StoryArc) -> ValidationReport {
        validate(arc)
    }
}

/// One-paragraph human-readable summary of an arc, for setup previews.
pub fn preview_summary(arc: &StoryArc, config: &PacingConfiguration) -> String {
    let celebration = if config.celebration_duration_weeks > 0 {
        format!(
            " and closes with a {}-week celebration",
            config.celebration_duration_weeks
        )
    } else {
        String::new()
    };
    format!(
        "A {}-paced campaign over {} weeks: {} beats with {} event density on a {} intensity curve. \
         The story builds to its climax in week {}{}.",
        arc.pacing.label(),
        arc.total_weeks,
        arc.events.len(),
        config.event_density.label(),
        config.intensity_profile.label(),
        arc.climax_week,
        celebration,
    )
}

impl PacingEngineBuilder {
    /// Directory of per-theme RON template files (theme = file stem).
    pub fn templates_dir(mut self, path: &str) -> Self {
        self.templates_dir = Some(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Provide templates directly (for testing without files).
    pub fn with_templates(mut self, templates: TemplateLibrary) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn build(self) -> Result<PacingEngine, PacingError> {
        let mut templates = self.templates.unwrap_or_default();

        if let Some(ref dir) = self.templates_dir {
            if Path::new(dir).exists() {
                for entry in std::fs::read_dir(dir)? {
                    let path = entry?.path();
                    if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                        templates.load_theme_from_ron(&path)?;
                    }
                }
            }
        }

        Ok(PacingEngine {
            templates,
            seed: self.seed,
            generation_count: 0,
        })
    }
}
