//! Interactive World brush/board interaction engine
//!
//! This crate decides, per simulation tick, which moving brushes may paint
//! which drawing boards, and turns brush movement into continuous strokes:
//! - [`pose`] - Brush poses and the current/previous/last-drawn pose tracker
//! - [`board`] - Drawing boards and their world-to-canvas mapping
//! - [`zone`] - Interact volumes gating which boards a brush may paint
//! - [`brush`] - Zone membership, draw eligibility and stroke interpolation
//! - [`wheel`] - Wheel/track UV mapping and the tire track behavior
//! - [`canvas`] - Boundary with the renderer (opaque draw command sink)
//! - [`world`] - World-scoped registry and per-tick driver
//!
//! Rendering, overlap detection and the host's entity lifecycle stay outside
//! this crate; the host forwards their events to [`world::InteractiveWorld`].

pub mod board;
pub mod brush;
pub mod canvas;
pub mod constants;
pub mod pose;
pub mod registry;
pub mod types;
pub mod wheel;
pub mod world;
pub mod zone;

pub use board::*;
pub use brush::*;
pub use canvas::*;
pub use constants::*;
pub use pose::*;
pub use registry::*;
pub use types::*;
pub use wheel::*;
pub use world::*;
pub use zone::*;

pub use interact_config::{BoardClass, BrushConfig, ConfigError, MovementTolerance};
