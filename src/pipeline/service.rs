use tracing::{debug, warn};

use super::degrade::{DegradationChain, Outcome, Resolved, Strategy};
use super::gamut::GamutMapper;
use super::hue::{hue_for_name, SequentialState};
use super::oklab::OklabConverter;
use crate::color::Color;
use crate::config::PaletteConfig;

/// What kind of color a caller wants.
///
/// Both kinds share the lightness cycle and gamut handling; they differ in
/// where the hue comes from and which degradation chain applies.
#[derive(Debug)]
pub enum ColorRequest<'a> {
    /// Next color of a golden-angle walk. Advances `state`.
    Sequential {
        index: usize,
        state: &'a mut SequentialState,
    },
    /// Color derived from a name hash.
    Named { name: &'a str, index: usize },
}

/// Turns color requests into sRGB colors.
///
/// Holds no mutable state, so one service can serve any number of threads.
#[derive(Debug, Clone)]
pub struct PaletteService {
    config: PaletteConfig,
    converter: OklabConverter,
    sequential: DegradationChain,
    named: DegradationChain,
}

impl Default for PaletteService {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl PaletteService {
    pub fn new(config: PaletteConfig) -> Self {
        let converter = OklabConverter::new(GamutMapper::new(config.clip_tolerance));
        let sequential = DegradationChain::new(vec![Strategy::ReduceChroma {
            start: config.base_chroma,
            factor: config.chroma_decay,
            floor: config.min_chroma,
            max_attempts: config.max_attempts,
        }]);
        let named = DegradationChain::new(vec![
            Strategy::Fixed(config.base_chroma),
            Strategy::Fixed(config.named_fallback_chroma),
        ]);
        Self {
            config,
            converter,
            sequential,
            named,
        }
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// A fresh hue cursor, seeded from `seed_hue` or randomly.
    pub fn sequential_state(&self, seed_hue: Option<f64>) -> SequentialState {
        seed_hue
            .map_or_else(SequentialState::random, SequentialState::new)
            .with_min_separation(self.config.min_hue_separation)
    }

    pub fn resolve(&self, request: ColorRequest<'_>) -> Resolved {
        match request {
            ColorRequest::Sequential { index, state } => {
                let hue = state.advance().hue;
                let l = self.config.lightness(index);
                self.sequential.resolve(&self.converter, l, hue)
            }
            ColorRequest::Named { name, index } => {
                let hue = hue_for_name(name);
                let l = self.config.lightness(index);
                let resolved = self.named.resolve(&self.converter, l, hue);
                if resolved.outcome == Outcome::Grayscale {
                    warn!(name, l, hue, "named color needed the gray fallback");
                }
                resolved
            }
        }
    }

    /// `n` colors walking the hue circle by the golden angle.
    ///
    /// The same `seed_hue` always gives the same palette; `None` starts
    /// from a random hue.
    pub fn generate_sequence(&self, n: usize, seed_hue: Option<f64>) -> Vec<Color> {
        let mut state = self.sequential_state(seed_hue);
        debug!(n, start = state.last_hue(), "generating sequential palette");
        (0..n)
            .map(|index| {
                self.resolve(ColorRequest::Sequential {
                    index,
                    state: &mut state,
                })
                .color
            })
            .collect()
    }

    /// Stable color for `name` at lightness position `index`.
    pub fn color_for_name(&self, name: &str, index: usize) -> Color {
        self.resolve(ColorRequest::Named { name, index }).color
    }
}
