//! Animation application state.
//!
//! Terminal I/O lives in the binary; all state management and per-tick logic
//! lives here, so the whole animation can be driven and asserted on in tests.

use crossterm::event::KeyCode;

use crate::brightness::Brightness;
use crate::config::RunConfig;
use crate::frame::generate_frame;
use crate::platform::Distro;
use crate::seed::{hardware_seed, starting_frame};

/// One tick's worth of output, ready for a frame sink.
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Status line shown above the grid.
    pub status: String,
    /// The frame rows.
    pub rows: Vec<String>,
    /// Whether the clear cadence fired this tick.
    pub clear_due: bool,
}

/// Application state for the helix animation.
#[derive(Debug)]
pub struct HelixApp {
    config: RunConfig,
    distro: Distro,
    seed: u64,
    start_frame: u64,
    /// Current animation phase.
    pub frame_index: u64,
    /// Ticks since start, drives the clear cadence.
    pub cycle_count: u64,
    /// Whether the animation is paused.
    pub paused: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl HelixApp {
    /// Create an app, resolving the environment (distro, seed) once.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let distro = Distro::detect();
        Self::with_environment(config, distro)
    }

    /// Create an app with an explicit distro, for tests and previews.
    #[must_use]
    pub fn with_environment(config: RunConfig, distro: Distro) -> Self {
        let seed = config.seed.unwrap_or_else(hardware_seed);
        let start_frame = starting_frame(seed);
        Self {
            config,
            distro,
            seed,
            start_frame,
            frame_index: start_frame,
            cycle_count: 0,
            paused: false,
            should_quit: false,
        }
    }

    /// The resolved seed (override or hardware-derived).
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The detected distribution.
    #[must_use]
    pub const fn distro(&self) -> Distro {
        self.distro
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Strand glyph for the given brightness, honoring the config override.
    #[must_use]
    pub fn strand_glyph(&self, brightness: Brightness) -> char {
        self.config
            .strand
            .unwrap_or_else(|| brightness.strand_glyph(self.distro.glyph()))
    }

    /// Produce one tick of output and advance the animation.
    ///
    /// When paused, the current frame is re-rendered and nothing advances.
    pub fn tick(&mut self, brightness: Brightness) -> TickOutput {
        let glyph = self.strand_glyph(brightness);
        let rows = generate_frame(self.frame_index, glyph);
        let status = format!(
            "Brightness: {:3}% | Frame: {:4} | OS: {}{}",
            brightness.percent(),
            self.frame_index,
            self.distro.name(),
            if self.paused { " | [PAUSED]" } else { "" },
        );

        let mut clear_due = false;
        if !self.paused {
            self.frame_index += 1;
            self.cycle_count += 1;
            clear_due = self.cycle_count % self.config.clear_interval == 0;
        }

        TickOutput {
            status,
            rows,
            clear_due,
        }
    }

    /// Reset the animation to its starting phase.
    pub fn reset(&mut self) {
        self.frame_index = self.start_frame;
        self.cycle_count = 0;
        self.paused = false;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }
}
