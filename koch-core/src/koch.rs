//! Recursive Koch subdivision of a single segment.

use glam::Vec2;
use tracing::warn;

use crate::{
    config::MAX_DEPTH,
    types::{Point, PointSequence},
};

/// `sin(60°)`, the height of an equilateral triangle with unit side.
const SIN_60: f32 = 0.866_025_4;

/// Sign applied to the apex offset: `+1` erects the bump inward, `-1` outward.
#[inline]
pub fn height_direction(outward: bool) -> f32 {
    if outward { -1.0 } else { 1.0 }
}

/// Apex of the equilateral triangle erected on `p1 → p3`.
///
/// The vector `p3 - p1` is rotated by ±60° around `p1`; `height_dir`
/// selects the side.
#[inline]
pub fn apex(p1: Point, p3: Point, height_dir: f32) -> Point {
    let d = p3 - p1;
    Vec2::new(
        p1.x + d.x * 0.5 - d.y * SIN_60 * height_dir,
        p1.y + d.y * 0.5 + d.x * SIN_60 * height_dir,
    )
}

/// Expands `start → end` into a Koch curve of the given depth.
///
/// The result starts at `start`, ends at `end` and holds `4^depth + 1`
/// points. Depth 0 returns the segment itself. Depths above
/// [`MAX_DEPTH`] are clamped.
///
/// ### Parameters
/// - `start`, `end` - Endpoints of the segment; both appear unchanged in the output.
/// - `depth` - Recursion level.
/// - `outward` - Which side of the segment the triangular bumps point to.
///
/// ### Returns
/// The ordered polyline, with no vertex repeated at sub-segment joints.
pub fn subdivide(start: Point, end: Point, depth: u8, outward: bool) -> PointSequence {
    let depth = if depth > MAX_DEPTH {
        warn!(depth, max = MAX_DEPTH, "clamping Koch depth");
        MAX_DEPTH
    } else {
        depth
    };

    let mut out = Vec::with_capacity(4usize.pow(depth as u32) + 1);
    push_open(start, end, depth, height_direction(outward), &mut out);
    out.push(end);
    out
}

/// Appends the curve for `start → end` without its final point.
///
/// Leaving off `end` is what lets the four sub-curves share their joints.
fn push_open(start: Point, end: Point, depth: u8, height_dir: f32, out: &mut PointSequence) {
    if depth == 0 {
        out.push(start);
        return;
    }

    let d = end - start;
    let p1 = start + d / 3.0;
    let p3 = start + d * 2.0 / 3.0;
    let p2 = apex(p1, p3, height_dir);

    push_open(start, p1, depth - 1, height_dir, out);
    push_open(p1, p2, depth - 1, height_dir, out);
    push_open(p2, p3, depth - 1, height_dir, out);
    push_open(p3, end, depth - 1, height_dir, out);
}
