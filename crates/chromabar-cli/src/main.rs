//! chromabar CLI - drive colorized progress bars in the terminal.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::cast_precision_loss,
    clippy::doc_markdown
)]

use anyhow::{Context, Result};
use chromabar_core::{
    ColorSequence, ColorSpace, DisplayColor, Gradient, Palette, PaletteMode, Srgb,
};
use chromabar_terminal::{BarConfig, DriverOptions, FrameDriver};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "chromabar")]
#[command(about = "Animated, colorized terminal progress bars")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the built-in demo bars
    Demo {
        /// Which bar to show (default: all)
        #[arg(short, long, value_enum, default_value = "all")]
        style: DemoStyle,

        /// Progress steps per bar
        #[arg(short, long, default_value = "100")]
        iterations: usize,

        /// Cells per bar
        #[arg(long, default_value = "50")]
        size: usize,

        /// Delay between frames in milliseconds
        #[arg(short, long, default_value = "10")]
        delay: u64,
    },

    /// Drive a bar described by a TOML file
    Run {
        /// Path to the bar configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Delay between frames in milliseconds
        #[arg(short, long, default_value = "0")]
        delay: u64,
    },

    /// Time full traversals with and without statistics
    Bench {
        /// Progress steps per traversal
        #[arg(short, long, default_value = "1000")]
        iterations: usize,

        /// Traversals per measurement
        #[arg(short, long, default_value = "100")]
        rounds: usize,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoStyle {
    All,
    Gradient,
    Constant,
    Palette,
    Repeat,
}

fn srgb(r: u8, g: u8, b: u8) -> ColorSpace {
    ColorSpace::from(Srgb::rgb(r, g, b))
}

fn pair(fg: (u8, u8, u8), bg: Option<(u8, u8, u8)>) -> Result<DisplayColor> {
    let fg = srgb(fg.0, fg.1, fg.2);
    let bg = bg.map(|(r, g, b)| srgb(r, g, b));
    Ok(DisplayColor::from_spaces(&fg, bg.as_ref())?)
}

fn demo_sequences(style: DemoStyle, size: usize) -> Result<Vec<(&'static str, ColorSequence)>> {
    let red_on_black = pair((255, 0, 0), Some((0, 0, 0)))?;
    let green_on_white = pair((0, 255, 0), Some((255, 255, 255)))?;
    let black_on_white = pair((0, 0, 0), Some((255, 255, 255)))?;
    let magenta = pair((255, 0, 255), None)?;
    let cyan = pair((0, 255, 255), None)?;
    let white = pair((255, 255, 255), None)?;

    let palette = || Palette::new(vec![black_on_white, red_on_black, green_on_white]);

    let mut bars = Vec::new();
    if matches!(style, DemoStyle::All | DemoStyle::Gradient) {
        bars.push((
            "gradient",
            ColorSequence::gradient(Gradient::two(magenta, cyan), size)?,
        ));
        bars.push((
            "gradient-bg",
            ColorSequence::gradient(Gradient::two(red_on_black, green_on_white), size)?
                .without_background(),
        ));
    }
    if matches!(style, DemoStyle::All | DemoStyle::Constant) {
        bars.push(("constant", ColorSequence::constant(white, size)?));
    }
    if matches!(style, DemoStyle::All | DemoStyle::Palette) {
        bars.push((
            "palette",
            ColorSequence::palette(palette()?, PaletteMode::Spread, size)?.without_background(),
        ));
    }
    if matches!(style, DemoStyle::All | DemoStyle::Repeat) {
        bars.push((
            "palette-repeat",
            ColorSequence::palette(palette()?, PaletteMode::Repeat, size)?.without_background(),
        ));
    }
    Ok(bars)
}

fn play<I>(frames: I, delay: Duration) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut out = io::stdout().lock();
    for frame in frames {
        queue!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(frame)
        )?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(out)?;
    Ok(())
}

fn cmd_demo(style: DemoStyle, iterations: usize, size: usize, delay: u64) -> Result<()> {
    let delay = Duration::from_millis(delay);
    for (name, sequence) in demo_sequences(style, size)? {
        tracing::info!(bar = name, "demo");
        let mut driver = FrameDriver::new(iterations, &sequence, DriverOptions::default())?;
        play(&mut driver, delay)?;
    }
    Ok(())
}

fn cmd_run(config: PathBuf, delay: u64) -> Result<()> {
    let bar = BarConfig::load(&config)
        .with_context(|| format!("failed to load {}", config.display()))?;
    let mut driver = bar.build().context("invalid bar configuration")?;
    play(&mut driver, Duration::from_millis(delay))
}

fn time_rounds<F: FnMut()>(rounds: usize, mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..rounds {
        f();
    }
    start.elapsed()
}

fn cmd_bench(iterations: usize, rounds: usize) -> Result<()> {
    let magenta = pair((255, 0, 255), Some((0, 0, 0)))?;
    let cyan = pair((0, 255, 255), Some((255, 255, 255)))?;
    let sequence = ColorSequence::gradient(Gradient::two(magenta, cyan), 50)?;

    let mut with_stats = FrameDriver::new(iterations, &sequence, DriverOptions::default())?;
    let mut bare = FrameDriver::new(iterations, &sequence, DriverOptions::bare())?;

    let stats_time = time_rounds(rounds, || {
        std::hint::black_box(with_stats.frames().map(|f| f.len()).sum::<usize>());
    });
    let bare_time = time_rounds(rounds, || {
        std::hint::black_box(bare.frames().map(|f| f.len()).sum::<usize>());
    });
    let baseline = time_rounds(rounds, || {
        for i in 0..=iterations {
            std::hint::black_box(i);
        }
    });

    println!("Bar with stats:    {:.6}s", stats_time.as_secs_f64());
    println!("Bar without stats: {:.6}s", bare_time.as_secs_f64());
    println!("Empty loop:        {:.6}s", baseline.as_secs_f64());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("CHROMABAR_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            style,
            iterations,
            size,
            delay,
        } => cmd_demo(style, iterations, size, delay),
        Commands::Run { config, delay } => cmd_run(config, delay),
        Commands::Bench { iterations, rounds } => cmd_bench(iterations, rounds),
    }
}
