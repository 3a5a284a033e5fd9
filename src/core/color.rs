use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque display tag carried by each body. The core never interprets it;
/// the host renderer formats it as a CSS `hsl(...)` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Color {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Random hue at fixed saturation/lightness, the palette the sandbox
    /// uses for freshly spawned bodies.
    pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0.0..360.0), 50.0, 50.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 50.0, 50.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
