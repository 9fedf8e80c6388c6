//! Interactive Koch hexagon viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Controller`] and implements
//! [`eframe::App`] to wire level buttons, the direction toggle and the
//! single-edge checkbox to it, and to paint the controller's canvas.

use eframe::App;
use koch_core::{
    animation::{Phase, Signal},
    config::{Config, MAX_DEPTH},
    controller::Controller,
    error::{KochError, Result},
    geometry::Surface,
    types::Point,
};
use tracing::{debug, warn};

const BUSY_MESSAGE: &str = "Drawing in progress. Please wait...";
const LEVEL_PROMPT: &str = "Press a level button (0-5)";
/// Seconds a toast stays on screen.
const TOAST_DURATION: f64 = 3.0;
/// Delay before the first level prompt after start-up.
const STARTUP_PROMPT_DELAY: f64 = 1.0;

const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);

/// A transient notification shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq)]
struct Toast {
    message: String,
    until: f64,
}

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `controller` - Render state: selection, canvas and live animation.
/// - `toast` - Notification currently shown, if any.
/// - `prompt_at` - Time at which the start-up level prompt is due.
/// - `last_signal` - Most recent lifecycle signal (for the status bar).
/// - `window_size` - Window size the surface was last fitted to.
pub struct Viewer {
    controller: Controller,
    toast: Option<Toast>,
    prompt_at: Option<f64>,
    last_signal: Option<Signal>,
    window_size: Option<egui::Vec2>,
}

impl Viewer {
    /// Creates a viewer with an empty canvas and the start-up prompt pending.
    pub fn new() -> Self {
        let cfg = Config::default();
        let surface = Surface::square(600.0, &cfg);
        Self {
            controller: Controller::new(surface, cfg),
            toast: None,
            prompt_at: Some(STARTUP_PROMPT_DELAY),
            last_signal: None,
            window_size: None,
        }
    }

    fn show_toast(&mut self, message: &str, now: f64) {
        self.toast = Some(Toast {
            message: message.to_owned(),
            until: now + TOAST_DURATION,
        });
    }

    /// Turns a controller answer into user feedback.
    ///
    /// Busy rejections show the busy toast; accepted selection changes
    /// prompt for a level when `prompt` is set.
    fn handle(&mut self, result: Result<()>, prompt: bool, now: f64) {
        match result {
            Ok(()) if prompt => self.show_toast(LEVEL_PROMPT, now),
            Ok(()) => {}
            Err(KochError::Busy) => self.show_toast(BUSY_MESSAGE, now),
            Err(e) => warn!("request rejected: {e}"),
        }
    }

    fn select_level(&mut self, level: u8, now: f64) {
        let result = self.controller.select_level(level, now);
        self.handle(result, false, now);
    }

    fn toggle_direction(&mut self, now: f64) {
        let result = self.controller.toggle_direction();
        self.handle(result, true, now);
    }

    fn set_single_edge(&mut self, single_edge: bool, now: f64) {
        let result = self.controller.set_single_edge(single_edge);
        self.handle(result, true, now);
    }

    /// Advances timers and the animation to `now`.
    fn advance(&mut self, now: f64) {
        if self.prompt_at.is_some_and(|t| now >= t) {
            self.prompt_at = None;
            self.show_toast(LEVEL_PROMPT, now);
        }
        if self.toast.as_ref().is_some_and(|t| now >= t.until) {
            self.toast = None;
        }

        self.controller.tick(now);
        for signal in self.controller.take_signals() {
            debug!(?signal, "animation signal");
            self.last_signal = Some(signal);
        }
    }

    /// Refits the surface when the window size changed.
    fn fit_to_window(&mut self, window: egui::Vec2, now: f64) {
        if self.window_size == Some(window) {
            return;
        }
        self.window_size = Some(window);
        let surface = Surface::fit_window(window.x, window.y, self.controller.config());
        if surface != *self.controller.surface() {
            self.controller.resize(surface, now);
        }
    }

    /// Screen rectangle the surface occupies, centered in `rect`.
    fn surface_rect(&self, rect: egui::Rect) -> egui::Rect {
        let surface = self.controller.surface();
        egui::Rect::from_center_size(rect.center(), egui::vec2(surface.width, surface.height))
    }

    /// Converts a surface-space point to screen-space.
    ///
    /// Both spaces have y growing downwards, so this is a translation that
    /// puts the surface origin at the top-left corner of [`Viewer::surface_rect`].
    fn surface_to_screen(&self, p: Point, rect: egui::Rect) -> egui::Pos2 {
        let origin = self.surface_rect(rect).min;
        egui::pos2(origin.x + p.x, origin.y + p.y)
    }

    /// Builds the top panel (level buttons, direction toggle, mode checkbox).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Level:");
                for level in 0..=MAX_DEPTH {
                    let active = self.controller.level() == Some(level);
                    if ui.selectable_label(active, level.to_string()).clicked() {
                        self.select_level(level, now);
                    }
                }

                ui.separator();
                let label = if self.controller.outward() {
                    "Outward"
                } else {
                    "Inward"
                };
                if ui.button(label).clicked() {
                    self.toggle_direction(now);
                }

                let mut single_edge = self.controller.single_edge();
                if ui.checkbox(&mut single_edge, "Single edge").changed() {
                    self.set_single_edge(single_edge, now);
                }
            });
        });
    }

    /// Builds the bottom status bar (phase, level, segments drawn).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("phase = {:?}", self.controller.phase()));
                if let Some(signal) = self.last_signal {
                    ui.label(format!("last = {signal:?}"));
                }
                ui.separator();
                ui.label(format!(
                    "segments = {}",
                    self.controller.canvas().segment_count()
                ));
                match self.controller.level() {
                    Some(level) => ui.label(format!("level = {level}")),
                    None => ui.label("level = -"),
                };
            });
        });
    }

    /// Shows the current toast, if any, near the bottom of the window.
    fn ui_toast(&self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };

        egui::Area::new("toast".into())
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 200))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(egui::CornerRadius::same(4))
                    .show(ui, |ui| {
                        ui.colored_label(egui::Color32::WHITE, &toast.message);
                    });
            });
    }

    /// Builds the central panel where the canvas is painted.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            let surface_rect = self.surface_rect(rect);

            painter.rect_filled(surface_rect, 0.0, egui::Color32::WHITE);

            let canvas = self.controller.canvas();
            let stroke = egui::Stroke::new(canvas.line_width(), CURVE_COLOR);
            for points in canvas.strokes() {
                let screen: Vec<egui::Pos2> = points
                    .iter()
                    .map(|&p| self.surface_to_screen(p, rect))
                    .collect();
                painter.add(egui::Shape::line(screen, stroke));
            }

            // Loading overlay.
            if self.controller.phase() == Phase::Loading {
                painter.rect_filled(
                    surface_rect,
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                );
                painter.text(
                    surface_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Loading...",
                    egui::FontId::proportional(20.0),
                    CURVE_COLOR,
                );
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that advances the animation and builds all UI panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let window = ctx
            .input(|i| i.viewport().inner_rect)
            .map_or_else(|| ctx.available_rect().size(), |r| r.size());

        self.fit_to_window(window, now);
        self.advance(now);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_toast(ctx);

        if self.controller.is_animating() || self.toast.is_some() || self.prompt_at.is_some() {
            ctx.request_repaint();
        }
    }
}
