//! Tunables for wizard pacing and the decorative overlays.
//!
//! Launchers provide a [`WizardConfig`] through Dioxus context; views fall
//! back to [`WizardConfig::default`] when none is provided.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct WizardConfig {
    /// Delay between accepting an image and showing the pin prompt.
    pub pin_prompt_delay_ms: u64,
    /// Delay between the final choice and leaving the questionnaire.
    pub completion_delay_ms: u64,
    /// How long a clicked yes/no button shows as selected before submitting.
    pub choice_click_delay_ms: u64,
    /// Duration of the rejection shake.
    pub shake_ms: u64,
    /// Delay before focusing the text input of a new prompt.
    pub input_focus_delay_ms: u64,
    /// Intro phase durations: drop, impact, settle, fade-out.
    pub intro_phases_ms: [u64; 4],
    pub heatmap: HeatmapTuning,
    pub route: RouteTuning,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            pin_prompt_delay_ms: 500,
            completion_delay_ms: 300,
            choice_click_delay_ms: 100,
            shake_ms: 500,
            input_focus_delay_ms: 300,
            intro_phases_ms: [700, 500, 400, 600],
            heatmap: HeatmapTuning::default(),
            route: RouteTuning::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapTuning {
    /// Target number of columns across the image width.
    pub target_columns: f64,
    pub min_cell_px: f64,
    pub max_cell_px: f64,
    /// Randomly placed clusters in addition to the pin cluster.
    pub extra_clusters: (usize, usize),
    /// Influence radius as a fraction of the shorter image side.
    pub radius_fraction: (f64, f64),
    /// Share of the heat value that comes from plain noise.
    pub noise_weight: f64,
}

impl Default for HeatmapTuning {
    fn default() -> Self {
        Self {
            target_columns: 25.0,
            min_cell_px: 20.0,
            max_cell_px: 40.0,
            extra_clusters: (2, 4),
            radius_fraction: (0.15, 0.35),
            noise_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTuning {
    /// Max perpendicular offset of smooth turning points, relative to route length.
    pub bend_fraction: f64,
    pub squiggle_segments: (usize, usize),
    /// Max perpendicular jitter of squiggle vertices, relative to route length.
    pub squiggle_jitter: f64,
    pub branches: (usize, usize),
    /// Portion of each branch that is drawn before it fades.
    pub branch_reveal: (f64, f64),
}

impl Default for RouteTuning {
    fn default() -> Self {
        Self {
            bend_fraction: 0.25,
            squiggle_segments: (8, 14),
            squiggle_jitter: 0.08,
            branches: (2, 5),
            branch_reveal: (0.3, 0.8),
        }
    }
}

/// Read the configuration from context, or the defaults.
pub fn use_wizard_config() -> WizardConfig {
    try_use_context::<WizardConfig>().unwrap_or_default()
}
