use palette::LinSrgb;
use thiserror::Error;

/// Largest per-channel clip accepted as a soft clip.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// A linear triple that would need more than the tolerated clipping.
///
/// Carries the hard-clipped triple so a caller that has no better option
/// can still use it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("color out of sRGB gamut: a channel would clip by {excess:.4}")]
pub struct GamutRejected {
    pub excess: f64,
    pub clipped: LinSrgb<f64>,
}

/// Decides whether a linear sRGB triple is representable in [0, 1]^3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapper {
    tolerance: f64,
}

impl Default for GamutMapper {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl GamutMapper {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Pass in-gamut triples through, soft-clip small excursions, reject
    /// large ones.
    pub fn accept(&self, rgb: LinSrgb<f64>) -> Result<LinSrgb<f64>, GamutRejected> {
        if in_gamut(rgb) {
            return Ok(rgb);
        }

        let clipped = clamp(rgb);
        let excess = (rgb.red - clipped.red)
            .abs()
            .max((rgb.green - clipped.green).abs())
            .max((rgb.blue - clipped.blue).abs());

        if excess > self.tolerance {
            Err(GamutRejected { excess, clipped })
        } else {
            Ok(clipped)
        }
    }
}

pub fn in_gamut(rgb: LinSrgb<f64>) -> bool {
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (0.0..=1.0).contains(c))
}

/// Hard-clip every channel into [0, 1].
pub fn clamp(rgb: LinSrgb<f64>) -> LinSrgb<f64> {
    LinSrgb::new(
        rgb.red.clamp(0.0, 1.0),
        rgb.green.clamp(0.0, 1.0),
        rgb.blue.clamp(0.0, 1.0),
    )
}
