//! Progressive reveal of a precomputed path, driven by the host frame clock.
//!
//! An [`Animation`] moves through `Loading → Revealing → Idle`, or through
//! `Cancelled → Idle` when cancelled. The host calls [`Animation::tick`] once
//! per frame with the current time in seconds; each call hands the newly
//! exposed part of the path to a [`RevealSink`]. Nothing here blocks or
//! sleeps: between ticks the animation is plain data.

use tracing::{debug, info};

use crate::{
    config::Config,
    types::{Point, PointSequence},
};

/// Scheduler phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Revealing,
    Cancelled,
}

/// Lifecycle notifications delivered alongside segment draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    LoadingStarted,
    RevealStarted,
    Done,
    Cancelled,
}

/// Receiver for what the scheduler produces.
pub trait RevealSink {
    /// Draws one newly exposed sub-polyline (at least two points).
    fn segment(&mut self, points: &[Point]);

    /// Lifecycle notification; ignored by default.
    fn signal(&mut self, _signal: Signal) {}
}

/// Index of the last point that should be visible after `elapsed` seconds.
///
/// `floor(min(elapsed / duration, 1) * (point_count - 1))`; a non-positive
/// duration counts as already finished.
pub fn target_index(elapsed: f64, duration: f64, point_count: usize) -> usize {
    let progress = progress(elapsed, duration);
    let last = point_count.saturating_sub(1);
    ((progress * last as f64).floor() as usize).min(last)
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed.max(0.0) / duration).min(1.0)
}

/// One in-flight progressive reveal. Also serves as its own cancel handle.
///
/// ### Fields
/// - `points` - The full path being revealed.
/// - `phase` - Current scheduler phase.
/// - `started_at` - Host time at which loading began.
/// - `loading_delay` - Seconds spent in `Loading` before drawing.
/// - `duration` - Seconds the reveal takes once drawing starts.
/// - `reveal_start` - Host time at which `Revealing` began.
/// - `last_drawn` - Index of the last point already handed to the sink.
/// - `cancelled` - Set by [`Animation::cancel`], observed on the next tick.
#[derive(Debug)]
pub struct Animation {
    points: PointSequence,
    phase: Phase,
    started_at: f64,
    loading_delay: f64,
    duration: f64,
    reveal_start: Option<f64>,
    last_drawn: usize,
    cancelled: bool,
}

impl Animation {
    /// Starts a reveal of `points` at host time `now`.
    ///
    /// The animation enters `Loading` and emits [`Signal::LoadingStarted`].
    /// The reveal duration is picked from `cfg` by shape mode.
    pub fn start(
        points: PointSequence,
        single_edge: bool,
        cfg: &Config,
        now: f64,
        sink: &mut impl RevealSink,
    ) -> Self {
        let duration = cfg.reveal_duration(single_edge);
        info!(points = points.len(), duration, "animation loading");
        sink.signal(Signal::LoadingStarted);

        Self {
            points,
            phase: Phase::Loading,
            started_at: now,
            loading_delay: cfg.loading_delay,
            duration,
            reveal_start: None,
            last_drawn: 0,
            cancelled: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` while loading or revealing.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Revealing)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_drawn(&self) -> usize {
        self.last_drawn
    }

    /// Requests cancellation; it takes effect at the next tick.
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.cancelled = true;
            self.phase = Phase::Cancelled;
        }
    }

    /// Advances the animation to host time `now`.
    ///
    /// ### Parameters
    /// - `now` - Current host time in seconds, on the same clock as `start`.
    /// - `sink` - Receives new segments and lifecycle signals.
    ///
    /// ### Returns
    /// The phase after this tick.
    pub fn tick(&mut self, now: f64, sink: &mut impl RevealSink) -> Phase {
        if self.cancelled {
            self.cancelled = false;
            self.phase = Phase::Idle;
            info!(last_drawn = self.last_drawn, "animation cancelled");
            sink.signal(Signal::Cancelled);
            return self.phase;
        }

        if self.phase == Phase::Loading {
            if now - self.started_at < self.loading_delay {
                return self.phase;
            }
            self.phase = Phase::Revealing;
            self.reveal_start = Some(now);
            info!("animation revealing");
            sink.signal(Signal::RevealStarted);
        }

        if self.phase != Phase::Revealing {
            return self.phase;
        }

        if self.points.len() < 2 {
            return self.finish(sink);
        }

        let elapsed = now - self.reveal_start.unwrap_or(now);
        let target = target_index(elapsed, self.duration, self.points.len());
        if target > self.last_drawn {
            debug!(from = self.last_drawn, to = target, "reveal segment");
            sink.segment(&self.points[self.last_drawn..=target]);
            self.last_drawn = target;
        }

        if progress(elapsed, self.duration) >= 1.0 {
            return self.finish(sink);
        }
        self.phase
    }

    fn finish(&mut self, sink: &mut impl RevealSink) -> Phase {
        self.phase = Phase::Idle;
        info!("animation done");
        sink.signal(Signal::Done);
        self.phase
    }
}
