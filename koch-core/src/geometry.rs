//! Base shapes and drawing-surface geometry.
//!
//! The hexagon starts at the top vertex (−90°) and steps +60° per vertex.
//! With y growing downwards this walks the polygon clockwise on screen.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use glam::Vec2;
use tracing::debug;

use crate::{
    config::{Config, RenderConfig},
    types::{Point, Segment},
};

/// Vertical space reserved for the surrounding controls.
const RESERVED_HEIGHT: f32 = 300.0;
/// Windows wider than this use the desktop sizing rule.
const DESKTOP_MIN_WIDTH: f32 = 768.0;
const DESKTOP_MAX_SIZE: f32 = 600.0;
const DESKTOP_MARGIN: f32 = 100.0;
const MOBILE_MARGIN: f32 = 60.0;
const MIN_SIZE: f32 = 300.0;

/// Geometry of the drawing surface the curve is laid out on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub center: Point,
    pub base_radius: f32,
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// A square surface of side `size`, centered, with the hexagon radius
    /// taken from [`Config::radius_factor`].
    pub fn square(size: f32, cfg: &Config) -> Self {
        Self {
            center: Vec2::splat(size / 2.0),
            base_radius: size * cfg.radius_factor,
            width: size,
            height: size,
        }
    }

    /// Square surface sized to fit a host window.
    pub fn fit_window(window_width: f32, window_height: f32, cfg: &Config) -> Self {
        Self::square(fit_size(window_width, window_height), cfg)
    }
}

/// Side length of the square surface for a window of the given size.
///
/// Wide windows are capped at 600 px; narrow ones only keep a margin.
/// The result never drops below 300 px.
pub fn fit_size(window_width: f32, window_height: f32) -> f32 {
    let available_height = window_height - RESERVED_HEIGHT;
    let max_size = if window_width > DESKTOP_MIN_WIDTH {
        DESKTOP_MAX_SIZE
            .min(window_width - DESKTOP_MARGIN)
            .min(available_height)
    } else {
        available_height.min(window_width - MOBILE_MARGIN)
    };
    max_size.max(MIN_SIZE)
}

/// The six hexagon vertices on a circle of `radius` around `center`.
pub fn hexagon_vertices(center: Point, radius: f32) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = FRAC_PI_3 * i as f32 - FRAC_PI_2;
        Vec2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

/// Base edges for a render request.
///
/// Hexagon mode yields the six edges `0→1, …, 5→0`; single-edge mode yields
/// one horizontal baseline through the surface center.
pub fn base_shape(render: &RenderConfig, surface: &Surface, cfg: &Config) -> Vec<Segment> {
    if render.single_edge {
        let start = Vec2::new(surface.width * cfg.edge_start_factor, surface.center.y);
        let end = Vec2::new(surface.width * cfg.edge_end_factor, surface.center.y);
        debug!(?start, ?end, "single-edge base shape");
        return vec![(start, end)];
    }

    let v = hexagon_vertices(surface.center, surface.base_radius);
    let edges: Vec<Segment> = (0..v.len()).map(|i| (v[i], v[(i + 1) % v.len()])).collect();
    debug!(radius = surface.base_radius, "hexagon base shape");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hexagon_starts_at_top_and_steps_sixty_degrees() {
        let center = Vec2::new(100.0, 100.0);
        let v = hexagon_vertices(center, 50.0);

        assert_relative_eq!(v[0].x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(v[0].y, 50.0, epsilon = 1e-4);

        // Every vertex sits on the circle, and neighbours are one radius apart.
        for i in 0..6 {
            assert_relative_eq!((v[i] - center).length(), 50.0, epsilon = 1e-3);
            let next = v[(i + 1) % 6];
            assert_relative_eq!((next - v[i]).length(), 50.0, epsilon = 1e-3);
        }

        // Second vertex is to the right of the top one (clockwise on screen).
        assert!(v[1].x > v[0].x);
    }

    #[test]
    fn hexagon_base_shape_wraps_around() {
        let cfg = Config::default();
        let surface = Surface::square(400.0, &cfg);
        let render = RenderConfig::new(0, false, false).unwrap();

        let edges = base_shape(&render, &surface, &cfg);
        assert_eq!(edges.len(), 6);
        for i in 0..6 {
            assert_eq!(edges[i].1, edges[(i + 1) % 6].0);
        }
    }

    #[test]
    fn single_edge_spans_ninety_percent_of_width() {
        let cfg = Config::default();
        let surface = Surface::square(500.0, &cfg);
        let render = RenderConfig::new(3, true, true).unwrap();

        let edges = base_shape(&render, &surface, &cfg);
        assert_eq!(edges.len(), 1);
        let (start, end) = edges[0];
        assert_eq!(start, Vec2::new(500.0 * 0.05, 250.0));
        assert_eq!(end, Vec2::new(500.0 * 0.95, 250.0));
    }

    #[test]
    fn square_surface_is_centered() {
        let surface = Surface::square(600.0, &Config::default());
        assert_eq!(surface.center, Vec2::new(300.0, 300.0));
        assert_relative_eq!(surface.base_radius, 240.0);
        assert_eq!(surface.width, surface.height);
    }

    #[test]
    fn fit_size_follows_desktop_and_mobile_rules() {
        // Desktop, plenty of room: capped at 600.
        assert_eq!(fit_size(1920.0, 1080.0), 600.0);
        // Desktop, short window: limited by available height.
        assert_eq!(fit_size(1200.0, 800.0), 500.0);
        // Mobile: width minus margin.
        assert_eq!(fit_size(400.0, 1000.0), 340.0);
        // Never below the floor.
        assert_eq!(fit_size(320.0, 480.0), 300.0);
    }
}
