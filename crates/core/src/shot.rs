//! Frame-quality heuristic ("good shot" detection).
//!
//! Scores a captured frame on lighting, edge detail, color variety, and
//! center composition, then adds a fixed stability bonus and a small random
//! jitter. The result drives the shot-lock hint in the recording UI, so the
//! thresholds are deliberate UI-feel tunables, not image-quality ground
//! truth; all of them live on [`ShotConfig`].

use rand::Rng;
use serde::Serialize;

use crate::frame::{FrameBuffer, BYTES_PER_PIXEL};

// ---------------------------------------------------------------------------
// Reason labels
// ---------------------------------------------------------------------------

/// Average brightness in the acceptable range.
pub const REASON_GOOD_LIGHTING: &str = "Good lighting";
/// Average brightness at or below the dark limit.
pub const REASON_LOW_LIGHT: &str = "Low light";
/// Average brightness at or above the bright limit.
pub const REASON_BRIGHT_SCENE: &str = "Bright scene";
/// Edge ratio above the detail floor.
pub const REASON_GOOD_DETAIL: &str = "Good detail";
/// Edge ratio at or below the detail floor.
pub const REASON_SIMPLE_SCENE: &str = "Simple scene";
/// Color variance above the variety floor.
pub const REASON_COLOR_VARIETY: &str = "Color variety";
/// Color variance at or below the variety floor.
pub const REASON_MINIMAL_COLORS: &str = "Minimal colors";
/// Center brightness deviates from the frame average.
pub const REASON_CENTER_FOCUS: &str = "Center focus";
/// Center brightness tracks the frame average.
pub const REASON_EVEN_COMPOSITION: &str = "Even composition";
/// Fixed stability bonus (motion detection is out of scope).
pub const REASON_STABLE_FRAME: &str = "Stable frame";

/// Maximum number of reasons reported per analysis.
pub const MAX_REASONS: usize = 3;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunable constants for the good-shot heuristic.
///
/// Defaults are the empirically chosen production values. Tests override
/// `jitter` to zero for deterministic scores.
#[derive(Debug, Clone)]
pub struct ShotConfig {
    /// Sample every Nth pixel of the frame.
    pub sample_stride: usize,
    /// Center region radius is `min(width, height) / center_radius_divisor`.
    pub center_radius_divisor: f64,
    /// Luminance delta between horizontal neighbors that counts as an edge.
    pub edge_threshold: f64,
    /// Edge ratio above which the frame counts as detailed.
    pub min_edge_ratio: f64,
    /// Average color variance above which the frame counts as colorful.
    pub min_color_variance: f64,
    /// Center-vs-average brightness delta that counts as a focal point.
    pub composition_delta: f64,
    /// Brightness at or below this scores as low light.
    pub dark_limit: f64,
    /// Brightness at or above this scores as a bright scene.
    pub bright_limit: f64,
    /// Lower bound of the ideal brightness band.
    pub ideal_brightness_min: f64,
    /// Upper bound of the ideal brightness band.
    pub ideal_brightness_max: f64,
    /// Fixed bonus applied to every frame.
    pub stability_bonus: f64,
    /// Uniform random jitter amplitude added to the final score.
    pub jitter: f64,
    /// Confidence at or above which a frame is a good shot.
    pub good_shot_threshold: f64,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            sample_stride: 4,
            center_radius_divisor: 6.0,
            edge_threshold: 30.0,
            min_edge_ratio: 0.05,
            min_color_variance: 8.0,
            composition_delta: 10.0,
            dark_limit: 40.0,
            bright_limit: 220.0,
            ideal_brightness_min: 80.0,
            ideal_brightness_max: 180.0,
            stability_bonus: 15.0,
            jitter: 5.0,
            good_shot_threshold: 65.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Outcome of scoring a single frame.
///
/// Recomputed on every analysis tick; consumers only ever see the most
/// recent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotAnalysis {
    /// Whether the frame clears the good-shot threshold.
    pub is_good_shot: bool,
    /// Heuristic confidence, clamped to `[0, 100]`.
    pub confidence: f64,
    /// Up to [`MAX_REASONS`] labels in fixed evaluation order
    /// (lighting, detail, color, composition, stability).
    pub reasons: Vec<&'static str>,
}

impl ShotAnalysis {
    /// The zero result published before any frame has been analyzed.
    pub fn idle() -> Self {
        Self {
            is_good_shot: false,
            confidence: 0.0,
            reasons: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pixel statistics
// ---------------------------------------------------------------------------

/// Aggregated statistics over the sampled pixels of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameStats {
    avg_brightness: f64,
    avg_center_brightness: f64,
    edge_ratio: f64,
    avg_color_variance: f64,
}

/// Rec. 601 luminance of an RGB triple.
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Walk the frame at the configured stride and accumulate brightness,
/// center brightness, edge count, and color variance.
fn measure(frame: &FrameBuffer, config: &ShotConfig) -> FrameStats {
    let width = frame.width() as usize;
    let data = frame.data();

    let center_x = frame.width() as f64 / 2.0;
    let center_y = frame.height() as f64 / 2.0;
    let radius = f64::from(frame.width().min(frame.height())) / config.center_radius_divisor;
    let radius_sq = radius * radius;

    let mut samples = 0usize;
    let mut total_luminance = 0.0;
    let mut center_luminance = 0.0;
    let mut center_samples = 0usize;
    let mut edges = 0usize;
    let mut total_color_variance = 0.0;

    let stride = config.sample_stride.max(1);
    let mut pixel = 0usize;
    while pixel < frame.pixel_count() {
        let i = pixel * BYTES_PER_PIXEL;
        let (r, g, b) = (data[i], data[i + 1], data[i + 2]);
        let lum = luminance(r, g, b);

        samples += 1;
        total_luminance += lum;

        let x = (pixel % width) as f64;
        let y = (pixel / width) as f64;
        let (dx, dy) = (x - center_x, y - center_y);
        if dx * dx + dy * dy <= radius_sq {
            center_luminance += lum;
            center_samples += 1;
        }

        // Edge check against the immediate horizontal neighbor, same row only.
        if pixel % width + 1 < width {
            let j = i + BYTES_PER_PIXEL;
            let neighbor = luminance(data[j], data[j + 1], data[j + 2]);
            if (lum - neighbor).abs() > config.edge_threshold {
                edges += 1;
            }
        }

        total_color_variance += (f64::from(r) - lum).abs()
            + (f64::from(g) - lum).abs()
            + (f64::from(b) - lum).abs();

        pixel += stride;
    }

    let n = samples as f64;
    let avg_brightness = total_luminance / n;
    let avg_center_brightness = if center_samples > 0 {
        center_luminance / center_samples as f64
    } else {
        // Frame too small for the center circle to catch a sampled pixel.
        avg_brightness
    };

    FrameStats {
        avg_brightness,
        avg_center_brightness,
        edge_ratio: edges as f64 / n,
        avg_color_variance: total_color_variance / n,
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score one frame against the good-shot heuristic.
///
/// The point breakdown (before jitter and clamping):
///
/// | Category    | Condition                              | Points |
/// |-------------|----------------------------------------|--------|
/// | Lighting    | ideal band / acceptable / dark / bright| 30/20/10/5 |
/// | Detail      | edge ratio above floor                 | min(25, ratio*500), else 5 |
/// | Color       | variance above floor                   | min(25, variance/2), else 10 |
/// | Composition | center deviates from average           | 15, else 5 |
/// | Stability   | always                                 | +15 |
///
/// A uniform jitter of `±config.jitter` is added, the total is clamped to
/// `[0, 100]`, and the frame is a good shot when the clamped confidence
/// reaches `config.good_shot_threshold`.
pub fn score_frame(frame: &FrameBuffer, config: &ShotConfig, rng: &mut impl Rng) -> ShotAnalysis {
    let stats = measure(frame, config);

    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Lighting.
    let b = stats.avg_brightness;
    if b <= config.dark_limit {
        score += 10.0;
        reasons.push(REASON_LOW_LIGHT);
    } else if b >= config.bright_limit {
        score += 5.0;
        reasons.push(REASON_BRIGHT_SCENE);
    } else {
        score += if b > config.ideal_brightness_min && b < config.ideal_brightness_max {
            30.0
        } else {
            20.0
        };
        reasons.push(REASON_GOOD_LIGHTING);
    }

    // Detail.
    if stats.edge_ratio > config.min_edge_ratio {
        score += (stats.edge_ratio * 500.0).min(25.0);
        reasons.push(REASON_GOOD_DETAIL);
    } else {
        score += 5.0;
        reasons.push(REASON_SIMPLE_SCENE);
    }

    // Color variety.
    if stats.avg_color_variance > config.min_color_variance {
        score += (stats.avg_color_variance / 2.0).min(25.0);
        reasons.push(REASON_COLOR_VARIETY);
    } else {
        score += 10.0;
        reasons.push(REASON_MINIMAL_COLORS);
    }

    // Composition.
    if (stats.avg_center_brightness - stats.avg_brightness).abs() > config.composition_delta {
        score += 15.0;
        reasons.push(REASON_CENTER_FOCUS);
    } else {
        score += 5.0;
        reasons.push(REASON_EVEN_COMPOSITION);
    }

    // Stability bonus. Motion detection would need frame history.
    score += config.stability_bonus;
    reasons.push(REASON_STABLE_FRAME);

    if config.jitter > 0.0 {
        score += rng.random_range(-config.jitter..=config.jitter);
    }

    let confidence = score.clamp(0.0, 100.0);
    reasons.truncate(MAX_REASONS);

    ShotAnalysis {
        is_good_shot: confidence >= config.good_shot_threshold,
        confidence,
        reasons,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
