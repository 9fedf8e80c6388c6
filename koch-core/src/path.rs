//! Stitching subdivided base edges into one drawable path.

use tracing::debug;

use crate::{
    config::{Config, RenderConfig},
    geometry::{Surface, base_shape},
    koch::subdivide,
    types::{PointSequence, Segment},
};

/// Subdivides every base segment and joins the results in order.
///
/// The last point of each edge's curve is dropped except for the final
/// edge, so every joint appears exactly once. For the hexagon the last
/// edge ends on vertex 0 and the path closes on itself.
///
/// ### Parameters
/// - `segments` - Base edges, each one starting where the previous ended.
/// - `depth` - Koch recursion level applied to every edge.
/// - `outward` - Bump direction, shared by all edges.
///
/// ### Returns
/// One continuous point sequence; empty if `segments` is empty.
pub fn assemble(segments: &[Segment], depth: u8, outward: bool) -> PointSequence {
    let mut points = PointSequence::new();
    for &(start, end) in segments {
        let edge = subdivide(start, end, depth, outward);
        points.pop();
        points.extend(edge);
    }
    points
}

/// Full pipeline: base shape for the request, then [`assemble`].
pub fn generate_points(render: &RenderConfig, surface: &Surface, cfg: &Config) -> PointSequence {
    let segments = base_shape(render, surface, cfg);
    let points = assemble(&segments, render.depth(), render.outward);
    debug!(
        depth = render.depth(),
        outward = render.outward,
        single_edge = render.single_edge,
        points = points.len(),
        "generated Koch path"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DEPTH;
    use glam::Vec2;

    fn surface() -> Surface {
        Surface::square(480.0, &Config::default())
    }

    #[test]
    fn hexagon_path_is_closed_for_every_depth_and_direction() {
        let cfg = Config::default();
        for depth in 0..=MAX_DEPTH {
            for outward in [false, true] {
                let render = RenderConfig::new(depth, outward, false).unwrap();
                let pts = generate_points(&render, &surface(), &cfg);
                assert_eq!(pts.first(), pts.last());
                assert_eq!(pts.len(), 6 * 4usize.pow(depth as u32) + 1);
            }
        }
    }

    #[test]
    fn depth_one_hexagon_has_25_points() {
        let cfg = Config::default();
        let render = RenderConfig::new(1, false, false).unwrap();
        let pts = generate_points(&render, &surface(), &cfg);

        assert_eq!(pts.len(), 25);
        assert_eq!(pts[0], pts[24]);

        // 24 distinct vertices before returning to the start.
        for i in 0..24 {
            for j in (i + 1)..24 {
                assert_ne!(pts[i], pts[j], "duplicate vertex at {i} and {j}");
            }
        }
    }

    #[test]
    fn single_edge_endpoints_are_exact_for_every_depth() {
        let cfg = Config::default();
        let s = surface();
        let start = Vec2::new(s.width * 0.05, s.center.y);
        let end = Vec2::new(s.width * 0.95, s.center.y);

        for depth in 0..=MAX_DEPTH {
            let render = RenderConfig::new(depth, depth % 2 == 0, true).unwrap();
            let pts = generate_points(&render, &s, &cfg);
            assert_eq!(pts.len(), 4usize.pow(depth as u32) + 1);
            assert_eq!(pts[0], start);
            assert_eq!(*pts.last().unwrap(), end);
        }
    }

    #[test]
    fn depth_zero_single_edge_is_the_baseline() {
        let cfg = Config::default();
        let s = surface();
        let render = RenderConfig::new(0, false, true).unwrap();
        let pts = generate_points(&render, &s, &cfg);
        assert_eq!(
            pts,
            vec![
                Vec2::new(s.width * 0.05, s.center.y),
                Vec2::new(s.width * 0.95, s.center.y),
            ]
        );
    }

    #[test]
    fn joints_are_not_duplicated() {
        let cfg = Config::default();
        let render = RenderConfig::new(3, true, false).unwrap();
        let pts = generate_points(&render, &surface(), &cfg);
        assert!(pts.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn assemble_of_nothing_is_empty() {
        assert!(assemble(&[], 2, false).is_empty());
    }
}
