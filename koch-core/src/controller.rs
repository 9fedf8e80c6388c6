//! Per-surface render state: the current selection, the drawing surface and
//! at most one live animation.
//!
//! Every request made while an animation is loading or revealing is
//! rejected with [`KochError::Busy`] and leaves the controller untouched.

use tracing::{debug, info};

use crate::{
    animation::{Animation, Phase, RevealSink, Signal},
    canvas::Canvas,
    config::{Config, RenderConfig},
    error::{KochError, Result},
    geometry::Surface,
    path::generate_points,
    types::Point,
};

/// Owns everything one drawing surface needs between frames.
///
/// ### Fields
/// - `cfg` - Timing and layout parameters.
/// - `surface` - Current surface geometry.
/// - `canvas` - Strokes drawn so far.
/// - `outward` - Bump direction for the next render.
/// - `single_edge` - Shape mode for the next render.
/// - `level` - Depth of the drawing on the canvas, if any.
/// - `animation` - The live reveal, if one is running.
/// - `signals` - Lifecycle signals not yet taken by the host.
#[derive(Debug)]
pub struct Controller {
    cfg: Config,
    surface: Surface,
    canvas: Canvas,
    outward: bool,
    single_edge: bool,
    level: Option<u8>,
    animation: Option<Animation>,
    signals: Vec<Signal>,
}

/// Routes scheduler output to the canvas and the pending signal queue.
struct FrameSink<'a> {
    canvas: &'a mut Canvas,
    signals: &'a mut Vec<Signal>,
}

impl RevealSink for FrameSink<'_> {
    fn segment(&mut self, points: &[Point]) {
        self.canvas.stroke(points);
    }

    fn signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}

impl Controller {
    /// Creates an idle controller with nothing drawn, inward hexagon mode.
    pub fn new(surface: Surface, cfg: Config) -> Self {
        Self {
            cfg,
            surface,
            canvas: Canvas::new(),
            outward: false,
            single_edge: false,
            level: None,
            animation: None,
            signals: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn outward(&self) -> bool {
        self.outward
    }

    pub fn single_edge(&self) -> bool {
        self.single_edge
    }

    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// `true` while an animation is loading or revealing.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(Animation::is_active)
    }

    pub fn phase(&self) -> Phase {
        self.animation.as_ref().map_or(Phase::Idle, Animation::phase)
    }

    /// The request the canvas currently shows, if a level is selected.
    pub fn render_config(&self) -> Option<RenderConfig> {
        self.level
            .and_then(|depth| RenderConfig::new(depth, self.outward, self.single_edge).ok())
    }

    /// Drains lifecycle signals emitted since the last call.
    pub fn take_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_animating() {
            debug!(phase = ?self.phase(), "request rejected while busy");
            return Err(KochError::Busy);
        }
        Ok(())
    }

    /// Selects a depth and starts an animated render at host time `now`.
    ///
    /// The canvas is cleared before the new animation starts loading.
    ///
    /// ### Errors
    /// - [`KochError::Busy`] while an animation is live.
    /// - [`KochError::InvalidDepth`] for depths above 5.
    pub fn select_level(&mut self, level: u8, now: f64) -> Result<()> {
        self.ensure_idle()?;
        let render = RenderConfig::new(level, self.outward, self.single_edge)?;

        info!(level, outward = self.outward, single_edge = self.single_edge, "level selected");
        self.level = Some(level);
        self.canvas.clear();
        self.canvas.set_line_width(Canvas::line_width_for_depth(level));

        let points = generate_points(&render, &self.surface, &self.cfg);
        let mut sink = FrameSink {
            canvas: &mut self.canvas,
            signals: &mut self.signals,
        };
        self.animation = Some(Animation::start(
            points,
            self.single_edge,
            &self.cfg,
            now,
            &mut sink,
        ));
        Ok(())
    }

    /// Flips inward/outward and drops the current drawing.
    pub fn toggle_direction(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.outward = !self.outward;
        info!(outward = self.outward, "direction toggled");
        self.reset_selection();
        Ok(())
    }

    /// Switches between hexagon and single-edge mode and drops the current drawing.
    pub fn set_single_edge(&mut self, single_edge: bool) -> Result<()> {
        self.ensure_idle()?;
        self.single_edge = single_edge;
        info!(single_edge, "shape mode changed");
        self.reset_selection();
        Ok(())
    }

    fn reset_selection(&mut self) {
        self.level = None;
        self.canvas.clear();
    }

    /// Adopts a new surface geometry.
    ///
    /// A live animation is cancelled. If a level is selected the curve is
    /// redrawn at once for the new surface, without animation.
    pub fn resize(&mut self, surface: Surface, now: f64) {
        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
            let mut sink = FrameSink {
                canvas: &mut self.canvas,
                signals: &mut self.signals,
            };
            animation.tick(now, &mut sink);
        }

        self.surface = surface;
        self.canvas.clear();
        if let Some(render) = self.render_config() {
            self.draw_static(&render);
        }
    }

    fn draw_static(&mut self, render: &RenderConfig) {
        let points = generate_points(render, &self.surface, &self.cfg);
        self.canvas
            .set_line_width(Canvas::line_width_for_depth(render.depth()));
        self.canvas.stroke(&points);
        debug!(points = points.len(), "static redraw");
    }

    /// Advances the live animation to host time `now`.
    ///
    /// ### Returns
    /// The phase after the tick; [`Phase::Idle`] when nothing is running.
    pub fn tick(&mut self, now: f64) -> Phase {
        let Some(animation) = self.animation.as_mut() else {
            return Phase::Idle;
        };

        let mut sink = FrameSink {
            canvas: &mut self.canvas,
            signals: &mut self.signals,
        };
        let phase = animation.tick(now, &mut sink);
        if phase == Phase::Idle {
            self.animation = None;
        }
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        let cfg = Config::default();
        Controller::new(Surface::square(400.0, &cfg), cfg)
    }

    fn run_to_idle(ctl: &mut Controller, mut now: f64) -> f64 {
        while ctl.is_animating() {
            now += 1.0 / 30.0;
            ctl.tick(now);
        }
        now
    }

    #[test]
    fn select_level_starts_loading() {
        let mut ctl = controller();
        ctl.select_level(2, 0.0).unwrap();

        assert!(ctl.is_animating());
        assert_eq!(ctl.phase(), Phase::Loading);
        assert_eq!(ctl.level(), Some(2));
        assert_eq!(ctl.canvas().line_width(), 1.5);
        assert_eq!(ctl.take_signals(), vec![Signal::LoadingStarted]);
        assert!(ctl.canvas().is_empty());
    }

    #[test]
    fn requests_while_animating_are_busy_and_change_nothing() {
        let mut ctl = controller();
        ctl.select_level(1, 0.0).unwrap();
        ctl.tick(1.0);
        ctl.tick(2.0);

        let phase = ctl.phase();
        let strokes = ctl.canvas().strokes().to_vec();

        assert_eq!(ctl.select_level(3, 2.1), Err(KochError::Busy));
        assert_eq!(ctl.toggle_direction(), Err(KochError::Busy));
        assert_eq!(ctl.set_single_edge(true), Err(KochError::Busy));

        assert_eq!(ctl.phase(), phase);
        assert_eq!(ctl.level(), Some(1));
        assert!(!ctl.outward());
        assert!(!ctl.single_edge());
        assert_eq!(ctl.canvas().strokes(), strokes.as_slice());
    }

    #[test]
    fn invalid_depth_is_rejected_before_any_change() {
        let mut ctl = controller();
        assert_eq!(
            ctl.select_level(6, 0.0),
            Err(KochError::InvalidDepth { depth: 6, max: 5 })
        );
        assert_eq!(ctl.level(), None);
        assert!(!ctl.is_animating());
    }

    #[test]
    fn full_animation_draws_whole_path() {
        let mut ctl = controller();
        ctl.select_level(1, 0.0).unwrap();
        run_to_idle(&mut ctl, 0.0);

        assert_eq!(ctl.phase(), Phase::Idle);
        // 25-point closed hexagon = 24 segments.
        assert_eq!(ctl.canvas().segment_count(), 24);
        assert_eq!(
            ctl.take_signals(),
            vec![Signal::LoadingStarted, Signal::RevealStarted, Signal::Done]
        );

        // Idle again: new selections are accepted.
        ctl.select_level(0, 10.0).unwrap();
        assert!(ctl.canvas().is_empty());
    }

    #[test]
    fn toggles_clear_level_and_canvas() {
        let mut ctl = controller();
        ctl.select_level(0, 0.0).unwrap();
        run_to_idle(&mut ctl, 0.0);
        assert!(!ctl.canvas().is_empty());

        ctl.toggle_direction().unwrap();
        assert!(ctl.outward());
        assert_eq!(ctl.level(), None);
        assert!(ctl.canvas().is_empty());

        ctl.set_single_edge(true).unwrap();
        assert!(ctl.single_edge());
        assert_eq!(ctl.render_config(), None);
    }

    #[test]
    fn resize_cancels_and_redraws_statically() {
        let mut ctl = controller();
        ctl.set_single_edge(true).unwrap();
        ctl.select_level(2, 0.0).unwrap();
        ctl.tick(1.0);
        ctl.tick(2.0);
        ctl.take_signals();

        let cfg = Config::default();
        ctl.resize(Surface::square(600.0, &cfg), 2.1);

        assert!(!ctl.is_animating());
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.take_signals(), vec![Signal::Cancelled]);

        // One stroke holding the whole 17-point curve on the new surface.
        let strokes = ctl.canvas().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].len(), 17);
        assert_eq!(strokes[0][0].x, 600.0 * 0.05);
        assert_eq!(strokes[0][16].x, 600.0 * 0.95);
    }

    #[test]
    fn resize_without_level_leaves_canvas_empty() {
        let mut ctl = controller();
        let cfg = Config::default();
        ctl.resize(Surface::square(320.0, &cfg), 0.0);
        assert!(ctl.canvas().is_empty());
        assert_eq!(ctl.surface().width, 320.0);
    }
}
