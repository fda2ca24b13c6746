//! WASM bindings for pacing-engine — powers the campaign setup wizard.

use wasm_bindgen::prelude::*;

use pacing_engine::core::engine::{preview_summary, GenerationRequest, PacingEngine};
use pacing_engine::core::validator::validate;
use pacing_engine::schema::arc::StoryArc;
use pacing_engine::schema::config::{
    ClimaxPosition, EventDensity, IntensityProfile, PacingConfiguration, VillainPresence,
};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
struct ConfigInput {
    campaign_duration_weeks: u32,
    climax_position: String,
    custom_climax_week: Option<u32>,
    intensity_profile: String,
    #[serde(default)]
    celebration_duration_weeks: u32,
    event_density: String,
    #[serde(default)]
    allow_player_choice: bool,
    villain_presence: String,
    #[serde(default)]
    campaign_id: Option<String>,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

#[derive(serde::Serialize)]
struct ArcOutput {
    arc: StoryArc,
    valid: bool,
    issues: Vec<String>,
    summary: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_climax_position(s: &str) -> ClimaxPosition {
    match s.to_lowercase().as_str() {
        "early" => ClimaxPosition::Early,
        "late" => ClimaxPosition::Late,
        "custom" => ClimaxPosition::Custom,
        _ => ClimaxPosition::Middle,
    }
}

fn parse_intensity_profile(s: &str) -> IntensityProfile {
    match s.to_lowercase().as_str() {
        "steep" => IntensityProfile::Steep,
        "plateau" => IntensityProfile::Plateau,
        "multiple_peaks" => IntensityProfile::MultiplePeaks,
        _ => IntensityProfile::Gradual,
    }
}

fn parse_event_density(s: &str) -> EventDensity {
    match s.to_lowercase().as_str() {
        "sparse" => EventDensity::Sparse,
        "dense" => EventDensity::Dense,
        _ => EventDensity::Moderate,
    }
}

fn parse_villain_presence(s: &str) -> VillainPresence {
    match s.to_lowercase().as_str() {
        "minimal" => VillainPresence::Minimal,
        "heavy" => VillainPresence::Heavy,
        _ => VillainPresence::Moderate,
    }
}

fn to_request(input: ConfigInput) -> GenerationRequest {
    GenerationRequest {
        campaign_id: input.campaign_id.unwrap_or_else(|| "wizard".to_string()),
        theme: input.theme.unwrap_or_else(|| "default".to_string()),
        difficulty: input
            .difficulty
            .unwrap_or_else(|| "intermediate".to_string()),
        config: PacingConfiguration {
            campaign_duration_weeks: input.campaign_duration_weeks,
            climax_position: parse_climax_position(&input.climax_position),
            custom_climax_week: input.custom_climax_week,
            intensity_profile: parse_intensity_profile(&input.intensity_profile),
            celebration_duration_weeks: input.celebration_duration_weeks,
            event_density: parse_event_density(&input.event_density),
            allow_player_choice: input.allow_player_choice,
            villain_presence: parse_villain_presence(&input.villain_presence),
        },
    }
}

// ---------------------------------------------------------------------------
// Exported API
// ---------------------------------------------------------------------------

/// Generate an arc from a JSON configuration. Returns a JSON object with
/// the arc, the validation findings, and the preview summary paragraph.
#[wasm_bindgen]
pub fn generate_arc(config_json: &str, seed: u64) -> Result<String, JsValue> {
    let input: ConfigInput = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("bad configuration: {}", e)))?;
    let request = to_request(input);

    let mut engine = PacingEngine::builder()
        .seed(seed)
        .build()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let arc = engine
        .generate(&request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let report = validate(&arc);
    let summary = preview_summary(&arc, &request.config);

    let output = ArcOutput {
        valid: report.valid,
        issues: report.issues.iter().map(|i| i.to_string()).collect(),
        summary,
        arc,
    };

    serde_json::to_string(&output).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The wizard's starting configuration, as JSON.
#[wasm_bindgen]
pub fn default_config() -> String {
    serde_json::json!({
        "campaign_duration_weeks": 20,
        "climax_position": "middle",
        "intensity_profile": "gradual",
        "celebration_duration_weeks": 2,
        "event_density": "moderate",
        "allow_player_choice": true,
        "villain_presence": "moderate",
    })
    .to_string()
}
