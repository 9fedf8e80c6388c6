use crate::{
    animation::RevealSink,
    types::{Point, PointSequence},
};

/// The drawing surface: every polyline stroked since the last clear.
///
/// Immediate-mode hosts repaint all strokes each frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    strokes: Vec<PointSequence>,
    line_width: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            line_width: Self::line_width_for_depth(0),
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke width used for a given depth. Finer curves get thinner lines.
    pub fn line_width_for_depth(depth: u8) -> f32 {
        match depth {
            0 | 1 => 2.0,
            2 | 3 => 1.5,
            4 | 5 => 0.7,
            _ => 2.0,
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn strokes(&self) -> &[PointSequence] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Draws a whole sequence in one stroke. Sequences shorter than two
    /// points draw nothing.
    pub fn stroke(&mut self, points: &[Point]) {
        if points.len() >= 2 {
            self.strokes.push(points.to_vec());
        }
    }

    /// Total number of line segments currently on the surface.
    pub fn segment_count(&self) -> usize {
        self.strokes.iter().map(|s| s.len() - 1).sum()
    }
}

impl RevealSink for Canvas {
    fn segment(&mut self, points: &[Point]) {
        self.stroke(points);
    }
}
