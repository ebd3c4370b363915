//! Deterministic, perceptually spaced colors for categorical map regions.
//!
//! Colors are chosen in OKLCH, checked against the sRGB gamut, and handed
//! back as `#rrggbb`. Two modes are offered: a golden-angle walk that keeps
//! consecutive hues apart, and a per-name hue that never changes between
//! runs.

pub mod cli;
pub mod color;
pub mod config;
pub mod pipeline;
pub mod preview;

pub use color::{decode_hex, Color, HexError};
pub use config::PaletteConfig;
pub use pipeline::service::{ColorRequest, PaletteService};

/// `n` hex colors from a golden-angle walk starting after `seed_hue`
/// (random when `None`), with the default configuration.
pub fn generate_sequence(n: usize, seed_hue: Option<f64>) -> Vec<String> {
    PaletteService::default()
        .generate_sequence(n, seed_hue)
        .into_iter()
        .map(Color::to_hex)
        .collect()
}

/// Hex color for `name` at lightness position `index`, with the default
/// configuration.
pub fn color_for_name(name: &str, index: usize) -> String {
    PaletteService::default()
        .color_for_name(name, index)
        .to_hex()
}
