//! helixterm binary: the display loop.
//!
//! Raw-mode terminal loop around [`HelixApp`]: one tick per `tick_ms`, with
//! key handling multiplexed into the frame delay via event polling. The
//! screen is cleared on start, on exit, and every `clear_interval` frames.

#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use helixterm::app::HelixApp;
use helixterm::brightness::Brightness;
use helixterm::cli::{Args, Command};
use helixterm::config::RunConfig;
use helixterm::render::{ConsoleSink, FrameSink};
use helixterm::HelixResult;

fn main() -> ExitCode {
    match Args::parse().command {
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("helixterm v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Run {
            config_path,
            seed_override,
        } => match run(config_path, seed_override) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("helixterm: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn print_help() {
    println!("helixterm v{}", env!("CARGO_PKG_VERSION"));
    println!("Animated DNA double helix for your terminal");
    println!();
    println!("Usage: helixterm [--config <file.yaml>] [--seed <n>]");
    println!();
    println!("Keys: [Space] pause, [R] reset, [Q]/[Esc]/Ctrl-C quit");
}

fn run(config_path: Option<PathBuf>, seed_override: Option<u64>) -> HelixResult<()> {
    let mut config = match config_path {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    let mut app = HelixApp::new(config);

    enable_raw_mode()?;
    let result = event_loop(&mut app);
    disable_raw_mode()?;
    result
}

fn event_loop(app: &mut HelixApp) -> HelixResult<()> {
    let mut sink = ConsoleSink::stdout();
    sink.clear()?;

    let tick_rate = Duration::from_millis(app.config().tick_ms);

    loop {
        let start = Instant::now();

        let output = app.tick(Brightness::current());
        if output.clear_due {
            sink.clear()?;
        }
        sink.present(&output.status, &output.rows)?;

        let timeout = tick_rate.saturating_sub(start.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    sink.clear()?;
    Ok(())
}
