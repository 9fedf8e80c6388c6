use crate::error::{KochError, Result};

/// Deepest recursion level a render request may ask for.
pub const MAX_DEPTH: u8 = 5;

/// Timing and layout parameters shared by the scheduler and the geometry.
///
/// All durations are in seconds so they can be compared directly with the
/// host frame clock (egui reports `f64` seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// How long the loading indication stays up before any drawing.
    pub loading_delay: f64,
    /// Reveal duration for the closed hexagon.
    pub reveal_duration_hexagon: f64,
    /// Reveal duration for the single-edge baseline.
    pub reveal_duration_single_edge: f64,

    /// Hexagon circumradius as a fraction of the surface size.
    pub radius_factor: f32,
    /// Single-edge start, as a fraction of the surface width.
    pub edge_start_factor: f32,
    /// Single-edge end, as a fraction of the surface width.
    pub edge_end_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loading_delay: 1.0,
            reveal_duration_hexagon: 5.0,
            reveal_duration_single_edge: 3.0,
            radius_factor: 0.40,
            edge_start_factor: 0.05,
            edge_end_factor: 0.95,
        }
    }
}

impl Config {
    /// Reveal duration for the given shape mode.
    pub fn reveal_duration(&self, single_edge: bool) -> f64 {
        if single_edge {
            self.reveal_duration_single_edge
        } else {
            self.reveal_duration_hexagon
        }
    }
}

/// One render request: depth, bump direction and shape mode.
///
/// Together with a [`crate::geometry::Surface`] this fully determines the
/// generated point sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    depth: u8,
    pub outward: bool,
    pub single_edge: bool,
}

impl RenderConfig {
    /// Builds a request, rejecting depths above [`MAX_DEPTH`].
    pub fn new(depth: u8, outward: bool, single_edge: bool) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(KochError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(Self {
            depth,
            outward,
            single_edge,
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}
