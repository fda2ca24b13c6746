/// Content templates — titles and descriptions for beats, keyed by
/// theme and phase. Opaque to the placement logic.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::arc::{EventContent, StoryPhase};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A title/description pair. `{week}` in either field is replaced with the
/// beat's start week at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTemplate {
    pub title: String,
    pub description: String,
}

impl ContentTemplate {
    fn render(&self, week: u32) -> EventContent {
        let week = week.to_string();
        EventContent {
            title: self.title.replace("{week}", &week),
            description: self.description.replace("{week}", &week),
        }
    }
}

/// Templates for every phase of one theme, loaded from a RON map of
/// phase key → template.
type ThemeTemplates = FxHashMap<String, ContentTemplate>;

/// Registry of themes. Always carries a built-in default theme, so the
/// engine produces content without any assets on disk; unknown themes and
/// missing phases fall back to the default.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    themes: FxHashMap<String, ThemeTemplates>,
}

pub const DEFAULT_THEME: &str = "default";

impl Default for TemplateLibrary {
    fn default() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert(DEFAULT_THEME.to_string(), builtin_default_theme());
        Self { themes }
    }
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one theme from a RON file. The theme name is the file stem.
    pub fn load_theme_from_ron(&mut self, path: &Path) -> Result<(), ContentError> {
        let contents = std::fs::read_to_string(path)?;
        let theme = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        self.parse_theme_ron(&theme, &contents)
    }

    /// Parse one theme from a RON string: a map of phase key → template.
    pub fn parse_theme_ron(&mut self, theme: &str, input: &str) -> Result<(), ContentError> {
        let templates: ThemeTemplates = ron::from_str(input)?;
        self.themes
            .entry(theme.to_string())
            .or_default()
            .extend(templates);
        Ok(())
    }

    /// Register a single template directly (for testing without files).
    pub fn register(&mut self, theme: &str, phase: StoryPhase, template: ContentTemplate) {
        self.themes
            .entry(theme.to_string())
            .or_default()
            .insert(phase.key().to_string(), template);
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.contains_key(theme)
    }

    /// Content for a beat. Falls back to the default theme for unknown
    /// themes or phases the theme does not cover.
    pub fn content_for(&self, theme: &str, phase: StoryPhase, week: u32) -> EventContent {
        let key = phase.key();
        self.themes
            .get(theme)
            .and_then(|t| t.get(key))
            .or_else(|| self.themes.get(DEFAULT_THEME).and_then(|t| t.get(key)))
            .map(|template| template.render(week))
            .unwrap_or_else(|| EventContent {
                title: key.to_string(),
                description: format!("{} beat in week {}", key, week),
            })
    }
}

fn builtin_default_theme() -> ThemeTemplates {
    let entries = [
        (
            StoryPhase::Introduction,
            "The Stage Is Set",
            "The campaign opens in week {week}: the world, its factions, and the first stakes come into view.",
        ),
        (
            StoryPhase::RisingAction,
            "A Growing Challenge",
            "In week {week} a new obstacle tests the players and tightens the pressure.",
        ),
        (
            StoryPhase::PlotTwist,
            "Nothing Is What It Seemed",
            "Week {week} upends an assumption the players have relied on since the start.",
        ),
        (
            StoryPhase::Climax,
            "The Decisive Hour",
            "Every thread converges in week {week}; the campaign's fate is settled here.",
        ),
        (
            StoryPhase::FallingAction,
            "The Dust Settles",
            "Week {week} counts the costs and consequences of the confrontation.",
        ),
        (
            StoryPhase::Resolution,
            "Loose Ends",
            "Remaining questions find their answers in week {week}.",
        ),
        (
            StoryPhase::Celebration,
            "A Well-Earned Feast",
            "From week {week} on, the survivors celebrate what they accomplished.",
        ),
    ];

    let mut templates = ThemeTemplates::default();
    for (phase, title, description) in entries {
        templates.insert(
            phase.key().to_string(),
            ContentTemplate {
                title: title.to_string(),
                description: description.to_string(),
            },
        );
    }
    templates
}
