use tracing::trace;

/// Golden angle in degrees. Repeated steps around the hue circle never
/// fall into a short cycle.
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Default minimum distance between consecutive sequential hues.
pub const DEFAULT_MIN_SEPARATION: f64 = 20.0;

/// Shortest distance between two hues on the circle, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// One hue produced by [`SequentialState::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueStep {
    pub hue: f64,
    /// The first candidate landed too close to the previous hue and the
    /// walker stepped once more.
    pub extra_step: bool,
}

/// Cursor for the golden-angle walk. Each palette owns its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialState {
    last_hue: f64,
    min_separation: f64,
}

impl SequentialState {
    /// Start the walk just after `seed_hue` (degrees, wrapped into [0, 360)).
    pub fn new(seed_hue: f64) -> Self {
        Self {
            last_hue: seed_hue.rem_euclid(360.0),
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    /// Start from a random hue, so unseeded runs differ.
    pub fn random() -> Self {
        Self::new(rand::random::<f64>() * 360.0)
    }

    pub fn with_min_separation(mut self, degrees: f64) -> Self {
        self.min_separation = degrees;
        self
    }

    pub fn last_hue(&self) -> f64 {
        self.last_hue
    }

    pub fn advance(&mut self) -> HueStep {
        let mut hue = (self.last_hue + GOLDEN_ANGLE) % 360.0;
        let extra_step = angular_distance(hue, self.last_hue) < self.min_separation;
        if extra_step {
            hue = (hue + GOLDEN_ANGLE) % 360.0;
        }
        trace!(from = self.last_hue, to = hue, extra_step, "hue step");
        self.last_hue = hue;
        HueStep { hue, extra_step }
    }
}

/// Order-sensitive rolling hash (`h = h * 31 + unit`, wrapping at 2^32)
/// over the UTF-16 code units of `name`.
pub fn name_hash(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Stable hue for a name: the hash scaled by the golden angle.
pub fn hue_for_name(name: &str) -> f64 {
    (name_hash(name) as f64 * GOLDEN_ANGLE) % 360.0
}
