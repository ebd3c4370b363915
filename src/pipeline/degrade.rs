//! Ordered fallbacks for colors the gamut mapper refuses.
//!
//! A chain tries its strategies in order and, when all of them fail, ends
//! in zero chroma, which every lightness in [0, 1] can represent.

use tracing::{debug, warn};

use super::oklab::OklabConverter;
use crate::color::Color;

/// One way of finding a representable chroma for a fixed lightness and hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Try `start`, then keep multiplying by `factor` while the chroma is
    /// above `floor`. At most `max_attempts` chromas are tried, `start`
    /// included.
    ReduceChroma {
        start: f64,
        factor: f64,
        floor: f64,
        max_attempts: u32,
    },
    /// Try exactly this chroma.
    Fixed(f64),
}

impl Strategy {
    /// The color and the chroma that produced it, or `None` if every
    /// chroma this strategy allows is out of gamut.
    pub fn attempt(&self, converter: &OklabConverter, l: f64, hue: f64) -> Option<(Color, f64)> {
        match *self {
            Strategy::ReduceChroma {
                start,
                factor,
                floor,
                max_attempts,
            } => {
                if max_attempts == 0 {
                    return None;
                }
                let mut chroma = start;
                let mut color = converter.to_srgb(l, chroma, hue);
                let mut attempts = 1;
                while color.is_none() && chroma > floor && attempts < max_attempts {
                    chroma *= factor;
                    attempts += 1;
                    debug!(l, hue, chroma, attempts, "out of gamut, reducing chroma");
                    color = converter.to_srgb(l, chroma, hue);
                }
                color.map(|c| (c, chroma))
            }
            Strategy::Fixed(chroma) => converter.to_srgb(l, chroma, hue).map(|c| (c, chroma)),
        }
    }
}

/// Which step of a chain produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Index into the chain's strategies.
    Strategy(usize),
    /// Every strategy failed and the color is gray.
    Grayscale,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub color: Color,
    pub chroma: f64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DegradationChain {
    strategies: Vec<Strategy>,
}

impl DegradationChain {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn resolve(&self, converter: &OklabConverter, l: f64, hue: f64) -> Resolved {
        for (i, strategy) in self.strategies.iter().enumerate() {
            if let Some((color, chroma)) = strategy.attempt(converter, l, hue) {
                return Resolved {
                    color,
                    chroma,
                    outcome: Outcome::Strategy(i),
                };
            }
        }

        debug!(l, hue, "all strategies failed, falling back to gray");
        Resolved {
            color: grayscale(converter, l, hue),
            chroma: 0.0,
            outcome: Outcome::Grayscale,
        }
    }
}

/// Zero-chroma color at lightness `l`.
pub fn grayscale(converter: &OklabConverter, l: f64, hue: f64) -> Color {
    converter.to_srgb(l, 0.0, hue).unwrap_or_else(|| {
        // gray overshoots blue by at most ~0.0084, so this needs a
        // tolerance below that or a lightness outside [0, 1]
        warn!(l, "gray rejected by gamut mapper, hard clipping");
        converter.to_srgb_clamped(l, 0.0, hue)
    })
}
