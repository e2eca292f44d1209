//! # helixterm
//!
//! A terminal screensaver that renders an animated DNA double helix.
//!
//! The strand glyph adapts to the host Linux distribution and to the time of
//! day (dimmer glyphs at night), and the screen is periodically cleared to
//! keep long runs tidy. The frame generator itself is a pure function of the
//! frame index and the strand glyph.
//!
//! ## Example
//!
//! ```rust
//! use helixterm::prelude::*;
//!
//! let rows = generate_frame(0, '●');
//! assert_eq!(rows.len(), FRAME_HEIGHT);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod app;
pub mod brightness;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod platform;
pub mod render;
pub mod seed;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::HelixApp;
    pub use crate::brightness::Brightness;
    pub use crate::config::{RunConfig, RunConfigBuilder};
    pub use crate::error::{HelixError, HelixResult};
    pub use crate::frame::{generate_frame, BOND_CHAR, FRAME_HEIGHT, FRAME_WIDTH};
    pub use crate::platform::Distro;
    pub use crate::render::{ConsoleSink, FrameSink};
}

/// Re-export for public API.
pub use error::{HelixError, HelixResult};
