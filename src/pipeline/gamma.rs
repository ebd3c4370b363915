use palette::{LinSrgb, Srgb};

const LINEAR_THRESHOLD: f64 = 0.003_130_8;
const ENCODED_THRESHOLD: f64 = 0.040_45;
const SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;
const SCALE: f64 = 1.055;
const OFFSET: f64 = 0.055;

/// sRGB transfer function: linear light to gamma-encoded value.
pub fn linear_to_gamma(u: f64) -> f64 {
    if u <= LINEAR_THRESHOLD {
        SLOPE * u
    } else {
        SCALE * u.powf(1.0 / GAMMA) - OFFSET
    }
}

/// Inverse of [`linear_to_gamma`].
pub fn gamma_to_linear(v: f64) -> f64 {
    if v <= ENCODED_THRESHOLD {
        v / SLOPE
    } else {
        ((v + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Gamma-encode every channel of a linear triple.
pub fn encode(linear: LinSrgb<f64>) -> Srgb<f64> {
    Srgb::new(
        linear_to_gamma(linear.red),
        linear_to_gamma(linear.green),
        linear_to_gamma(linear.blue),
    )
}
