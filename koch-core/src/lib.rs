//! Koch-curve generation and progressive reveal for a 2-D drawing surface.
//!
//! Main components:
//! - [`geometry`] — surface geometry and base shapes (hexagon or single edge).
//! - [`koch`] — recursive Koch subdivision of one segment.
//! - [`path`] — joins subdivided edges into one drawable point sequence.
//! - [`animation`] — frame-driven scheduler that reveals a path over time.
//! - [`canvas`] — the drawing surface the scheduler strokes onto.
//! - [`controller`] — per-surface state: selection, busy flag, live animation.
//! - [`config`] — timing/layout parameters and render requests.
//! - [`error`] — error type shared by the crate.
//! - [`types`] — point and segment aliases.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod koch;
pub mod path;
pub mod types;
