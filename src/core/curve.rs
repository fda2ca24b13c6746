/// Intensity curve generation — per-week dramatic tension in [1, 10].
///
/// Four shaping strategies, all anchored so the climax week carries the
/// maximum of the curve (MultiplePeaks may tie it elsewhere by design).
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::PI;

use crate::schema::config::IntensityProfile;

/// One tension value per week, week 1 first. Values are non-integral;
/// consumers round as needed via [`IntensityCurve::sample`].
#[derive(Debug, Clone)]
pub struct IntensityCurve {
    values: Vec<f64>,
}

impl IntensityCurve {
    /// Build the curve for a campaign. Only `MultiplePeaks` consumes the
    /// random source (for non-climax peak heights); the other profiles are
    /// pure functions of `(week, climax_week, total_weeks)`.
    pub fn generate(
        profile: IntensityProfile,
        climax_week: u32,
        total_weeks: u32,
        rng: &mut StdRng,
    ) -> IntensityCurve {
        let values = match profile {
            IntensityProfile::Gradual => per_week(total_weeks, |w| gradual(w, climax_week, total_weeks)),
            IntensityProfile::Steep => per_week(total_weeks, |w| steep(w, climax_week, total_weeks)),
            IntensityProfile::Plateau => per_week(total_weeks, |w| plateau(w, climax_week, total_weeks)),
            IntensityProfile::MultiplePeaks => multiple_peaks(climax_week, total_weeks, rng),
        };
        IntensityCurve { values }
    }

    /// Raw value at a week (1-based).
    pub fn at(&self, week: u32) -> f64 {
        self.values[(week - 1) as usize]
    }

    /// Value at a week rounded into the 1..=10 integer scale.
    pub fn sample(&self, week: u32) -> u8 {
        self.at(week).round().clamp(1.0, 10.0) as u8
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn per_week(total_weeks: u32, f: impl Fn(u32) -> f64) -> Vec<f64> {
    (1..=total_weeks).map(f).collect()
}

/// Linear ramp 2→10 into the climax, linear falloff toward 1 after it.
fn gradual(week: u32, climax_week: u32, total_weeks: u32) -> f64 {
    if week <= climax_week {
        let progress = week as f64 / climax_week as f64;
        (2.0 + progress * 8.0).min(10.0)
    } else {
        // Falloff spans a third of the post-climax tail.
        let falloff = (total_weeks - climax_week) as f64 / 3.0;
        (10.0 - ((week - climax_week) as f64 / falloff) * 7.0).max(1.0)
    }
}

/// Quadratic acceleration into the climax, square-root decay after it.
/// Reaches the floor of 1 faster than the gradual falloff.
fn steep(week: u32, climax_week: u32, total_weeks: u32) -> f64 {
    if week <= climax_week {
        let progress = week as f64 / climax_week as f64;
        2.0 + progress * progress * 8.0
    } else {
        // Same third-of-tail span as the gradual falloff, but square-root
        // shaped: drops harder immediately and bottoms out sooner.
        let falloff = (total_weeks - climax_week) as f64 / 3.0;
        let decay = (week - climax_week) as f64 / falloff;
        (10.0 - decay.sqrt() * 9.0).max(1.0)
    }
}

/// Linear rise 2→6, sinusoidal plateau oscillating 6–10 with its crest on
/// the climax week, then linear decay 6→1 over the remaining tail.
fn plateau(week: u32, climax_week: u32, total_weeks: u32) -> f64 {
    // Integer arithmetic keeps the segment boundaries exact.
    let plateau_start = (climax_week * 7 / 10).max(1);
    let plateau_end = climax_week + (total_weeks - climax_week) * 3 / 10;

    if week < plateau_start {
        2.0 + (week as f64 / plateau_start as f64) * 4.0
    } else if week <= plateau_end {
        // Cosine of the signed distance from the climax, normalized per
        // side, so the crest lands exactly on the climax week.
        let side = if week <= climax_week {
            (climax_week - plateau_start).max(1) as f64
        } else {
            (plateau_end - climax_week).max(1) as f64
        };
        let frac = (week as f64 - climax_week as f64).abs() / side;
        8.0 + 2.0 * (PI * frac).cos()
    } else {
        let tail = (total_weeks - plateau_end) as f64;
        (6.0 - ((week - plateau_end) as f64 / tail) * 5.0).max(1.0)
    }
}

/// Superposed triangular tents spaced roughly every `total/8 + 1` weeks.
/// The tent centered on the climax has height 10; the others draw their
/// height in [4, 7] from the injected seeded source, so the roller-coaster
/// shape is reproducible for a given seed. Local maxima away from the
/// climax are the point of this profile.
fn multiple_peaks(climax_week: u32, total_weeks: u32, rng: &mut StdRng) -> Vec<f64> {
    let spacing = total_weeks / 8 + 1;

    let mut centers: Vec<u32> = (1..=total_weeks / spacing).map(|i| i * spacing).collect();
    if !centers.contains(&climax_week) {
        centers.push(climax_week);
        centers.sort_unstable();
    }

    // Tents decay 0.8 per week of distance from their center.
    let tents: Vec<(u32, f64)> = centers
        .into_iter()
        .map(|center| {
            let height = if center == climax_week {
                10.0
            } else {
                rng.gen_range(4.0..=7.0)
            };
            (center, height)
        })
        .collect();

    (1..=total_weeks)
        .map(|week| {
            tents
                .iter()
                .map(|&(center, height)| {
                    let distance = (week as i64 - center as i64).unsigned_abs() as f64;
                    height - distance * 0.8
                })
                .fold(f64::MIN, f64::max)
                .clamp(2.0, 10.0)
        })
        .collect()
}
