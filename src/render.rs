//! Frame presentation.
//!
//! The animation loop hands finished frames to a [`FrameSink`]; the sink owns
//! every terminal side effect (cursor-home redraw, screen clearing). Keeping
//! the seam here lets tests drive the loop against an in-memory writer.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

use crate::error::HelixResult;

/// Footer shown under every frame.
const FOOTER: &str = "Controls: [Space] Pause  [R] Reset  [Q] Quit";

/// Destination for rendered frames.
pub trait FrameSink {
    /// Present one frame: a status line followed by the grid rows.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying output fails.
    fn present(&mut self, status: &str, rows: &[String]) -> HelixResult<()>;

    /// Clear the output surface.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying output fails.
    fn clear(&mut self) -> HelixResult<()>;
}

/// Console sink: redraws in place with a cursor-home escape rather than
/// reprinting scrollback, so the animation updates without flicker.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to an arbitrary writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for ConsoleSink<W> {
    fn present(&mut self, status: &str, rows: &[String]) -> HelixResult<()> {
        // Raw mode needs explicit carriage returns.
        queue!(self.out, MoveTo(0, 0), Print(status), Print("\r\n\r\n"))?;
        for row in rows {
            queue!(self.out, Print(row), Print("\r\n"))?;
        }
        queue!(self.out, Print("\r\n"), Print(FOOTER), Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> HelixResult<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}
