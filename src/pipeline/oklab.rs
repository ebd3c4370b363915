use palette::{LinSrgb, Oklch};

use super::gamma;
use super::gamut::GamutMapper;
use crate::color::Color;

/// Project an OKLCH color to linear sRGB with Ottosson's OKLab matrices.
///
/// The result is not gamut-checked and may leave [0, 1].
pub fn oklch_to_linear(oklch: Oklch<f64>) -> LinSrgb<f64> {
    let (sin, cos) = oklch.hue.into_raw_degrees().to_radians().sin_cos();
    let l = oklch.l;
    let a = oklch.chroma * cos;
    let b = oklch.chroma * sin;

    // OKLab -> nonlinear LMS
    let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l - 0.089_484_177_5 * a - 1.291_485_548 * b;

    let l = l_.powi(3);
    let m = m_.powi(3);
    let s = s_.powi(3);

    // LMS -> linear sRGB
    LinSrgb::new(
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701 * s,
    )
}

/// OKLCH to 8-bit sRGB, refusing colors the gamut mapper rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OklabConverter {
    gamut: GamutMapper,
}

impl OklabConverter {
    pub fn new(gamut: GamutMapper) -> Self {
        Self { gamut }
    }

    /// Convert `(l, chroma, hue_deg)` to an sRGB color.
    ///
    /// Returns `None` when the color would need more clipping than the
    /// gamut tolerance allows; the caller should retry with less chroma.
    /// Zero chroma is always representable for `l` in [0, 1].
    pub fn to_srgb(&self, l: f64, chroma: f64, hue_deg: f64) -> Option<Color> {
        let linear = oklch_to_linear(Oklch::new(l, chroma, hue_deg));
        let accepted = self.gamut.accept(linear).ok()?;
        Some(Color::from_encoded(gamma::encode(accepted)))
    }

    /// Like [`OklabConverter::to_srgb`] but hard-clips instead of rejecting.
    pub fn to_srgb_clamped(&self, l: f64, chroma: f64, hue_deg: f64) -> Color {
        let linear = oklch_to_linear(Oklch::new(l, chroma, hue_deg));
        let accepted = self
            .gamut
            .accept(linear)
            .unwrap_or_else(|rejected| rejected.clipped);
        Color::from_encoded(gamma::encode(accepted))
    }
}

/// Hex form of [`OklabConverter::to_srgb`] with the default tolerance.
pub fn oklch_to_hex(l: f64, chroma: f64, hue_deg: f64) -> Option<String> {
    OklabConverter::default()
        .to_srgb(l, chroma, hue_deg)
        .map(Color::to_hex)
}
