//! Time-of-day brightness control.
//!
//! The animation dims at night: the hour of day maps to a brightness band,
//! and the band decides whether the distro's own glyph or a dimmer generic
//! one is used for the strands. The hour-to-band mapping is pure; only
//! [`Brightness::current`] touches the clock.

use chrono::{Local, Timelike};

/// Strand glyph used at medium brightness.
const MEDIUM_GLYPH: char = '○';

/// Strand glyph used at low brightness.
const DIM_GLYPH: char = '·';

/// Time-of-day brightness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    /// 06:00..12:00 — 80%.
    Morning,
    /// 12:00..18:00 — 100%, the brightest band.
    Afternoon,
    /// 18:00..22:00 — 60%.
    Evening,
    /// 22:00..06:00 — 30%.
    Night,
}

impl Brightness {
    /// Band for a given hour of day (0..=23).
    ///
    /// Hours of 24 or more fall through to [`Brightness::Night`].
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Band for the current local time.
    #[must_use]
    pub fn current() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Brightness level in `[0.0, 1.0]`.
    #[must_use]
    pub const fn level(self) -> f64 {
        match self {
            Self::Morning => 0.8,
            Self::Afternoon => 1.0,
            Self::Evening => 0.6,
            Self::Night => 0.3,
        }
    }

    /// Brightness as a whole percentage, for the status line.
    #[must_use]
    pub const fn percent(self) -> u32 {
        match self {
            Self::Morning => 80,
            Self::Afternoon => 100,
            Self::Evening => 60,
            Self::Night => 30,
        }
    }

    /// Pick the strand glyph for this band.
    ///
    /// Full brightness uses the distro glyph; medium and low brightness fall
    /// back to dimmer generic glyphs.
    #[must_use]
    pub fn strand_glyph(self, distro_glyph: char) -> char {
        let level = self.level();
        if level >= 0.9 {
            distro_glyph
        } else if level >= 0.6 {
            MEDIUM_GLYPH
        } else {
            DIM_GLYPH
        }
    }
}
