mod animations;
mod app;
mod board;
mod layout;
mod render;
mod theme;

use app::{App, AppAction, AppOptions};
use bubble_core::{PuzzleConfig, DEFAULT_SIZE};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use theme::ThemeName;
use tracing_subscriber::EnvFilter;

/// Reproduce bubble sort one swap at a time
#[derive(Debug, Parser)]
#[command(name = "bubble-sort", version, about)]
struct Args {
    /// Number of boxes to sort
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    size: i64,

    /// Seed for the shuffle, for a reproducible row
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeName::Dark)]
    theme: ThemeName,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log {
        init_logging(path)?;
    }

    let config = PuzzleConfig::from_raw_size(args.size)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let app = App::new(AppOptions {
        config,
        seed: args.seed,
        theme: args.theme,
    })
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &mut app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == AppAction::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
