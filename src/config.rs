//! Tunable constants for palette generation.
//!
//! The defaults are the values every published palette was produced with;
//! changing any of them changes the colors.

use crate::pipeline::gamut::DEFAULT_TOLERANCE;
use crate::pipeline::hue::DEFAULT_MIN_SEPARATION;

pub const DEFAULT_LIGHTNESS_CYCLE: [f64; 3] = [0.72, 0.65, 0.58];

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    /// OKLCH lightness per position, repeated cyclically.
    pub lightness_cycle: Vec<f64>,
    /// First chroma tried for every color.
    pub base_chroma: f64,
    /// Multiplier applied on each sequential chroma reduction.
    pub chroma_decay: f64,
    /// Chromas a sequential color may try, the base chroma included,
    /// before going gray.
    pub max_attempts: u32,
    /// Reductions stop once chroma is at or below this.
    pub min_chroma: f64,
    /// Second chroma tried for a named color.
    pub named_fallback_chroma: f64,
    /// Largest per-channel clip accepted as a soft clip.
    pub clip_tolerance: f64,
    /// Minimum degrees between consecutive sequential hues.
    pub min_hue_separation: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            lightness_cycle: DEFAULT_LIGHTNESS_CYCLE.to_vec(),
            base_chroma: 0.12,
            chroma_decay: 0.85,
            max_attempts: 10,
            min_chroma: 0.02,
            named_fallback_chroma: 0.05,
            clip_tolerance: DEFAULT_TOLERANCE,
            min_hue_separation: DEFAULT_MIN_SEPARATION,
        }
    }
}

impl PaletteConfig {
    /// Lightness for palette position `index`.
    pub fn lightness(&self, index: usize) -> f64 {
        let cycle: &[f64] = if self.lightness_cycle.is_empty() {
            &DEFAULT_LIGHTNESS_CYCLE
        } else {
            &self.lightness_cycle
        };
        cycle[index % cycle.len()]
    }
}
