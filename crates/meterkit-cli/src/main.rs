//! meterkit CLI - run, check and render progress screens.

use clap::{Parser, Subcommand};
use meterkit::{
    Constraints, DisplayMetrics, DrawCommand, ParseError, ProgressIndicator, ProgressScreen,
    Rect, RecordingCanvas, ScreenManifest, Widget,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Pixel width of the virtual viewport the terminal bar is scaled from.
const VIEWPORT_WIDTH: f32 = 320.0;
const VIEWPORT_HEIGHT: f32 = 48.0;

#[derive(Parser)]
#[command(name = "meterkit")]
#[command(about = "Animated progress indicator runner")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the progress screen as a text bar
    Run {
        /// Screen manifest (defaults apply when omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Bar width in terminal columns
        #[arg(short, long, default_value = "40")]
        width: usize,

        /// Playback speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f64,
    },

    /// Check YAML manifest validity
    Check {
        /// Path to manifest file
        manifest: PathBuf,
    },

    /// Print one frame's draw commands as JSON
    Render {
        /// Progress value to render
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..=100))]
        progress: i32,

        /// Frame width in pixels
        #[arg(long, default_value = "320")]
        width: f32,

        /// Frame height in pixels
        #[arg(long, default_value = "48")]
        height: f32,

        /// Screen manifest (defaults apply when omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

fn main() {
    initialize_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            manifest,
            width,
            speed,
        } => {
            run(manifest.as_deref(), width, speed);
        }
        Commands::Check { manifest } => {
            check_manifest(&manifest);
        }
        Commands::Render {
            progress,
            width,
            height,
            manifest,
        } => {
            render(progress, width, height, manifest.as_deref());
        }
    }
}

fn initialize_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_manifest(path: Option<&Path>) -> Result<ScreenManifest, ParseError> {
    path.map_or_else(|| Ok(ScreenManifest::default()), ScreenManifest::from_path)
}

fn load_or_exit(path: Option<&Path>) -> ScreenManifest {
    match load_manifest(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Failed to load manifest: {e}");
            std::process::exit(1);
        }
    }
}

fn run(path: Option<&Path>, columns: usize, speed: f64) {
    if !(speed.is_finite() && speed > 0.0) {
        eprintln!("Speed must be a positive number, got {speed}");
        std::process::exit(1);
    }

    let manifest = load_or_exit(path);
    tracing::debug!(?path, columns, speed, "running progress screen");
    let metrics = DisplayMetrics::from(manifest.display);
    let mut screen = ProgressScreen::on_create(&manifest, &metrics);
    let viewport = Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let period_ms = manifest.animation.period_ms;
    let frame = match frame_duration(period_ms, speed) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut stdout = std::io::stdout();
    let mut elapsed_ms = 0;

    let mut draw = |screen: &mut ProgressScreen| {
        let mut canvas = RecordingCanvas::new();
        screen.render(&mut canvas, viewport);
        let line = bar_line(canvas.commands(), VIEWPORT_WIDTH, columns);
        // Terminal output is best-effort.
        let _ = write!(stdout, "\r{line}");
        let _ = stdout.flush();
    };

    screen.advance(0);
    draw(&mut screen);
    while !screen.is_stopped() && elapsed_ms < manifest.animation.span_ms {
        std::thread::sleep(frame);
        screen.advance(period_ms);
        elapsed_ms += period_ms;
        if screen.needs_redraw() {
            draw(&mut screen);
        }
    }

    screen.on_destroy();
    println!();
}

/// Wall-clock sleep between frames for `period_ms` played at `speed`.
fn frame_duration(period_ms: u64, speed: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(period_ms as f64 / 1000.0 / speed)
        .map_err(|e| format!("Invalid frame duration at speed {speed}: {e}"))
}

fn check_manifest(path: &Path) {
    println!("Checking manifest: {}", path.display());

    match ScreenManifest::from_path(path) {
        Ok(manifest) => {
            let animation = manifest.animation;
            println!("Manifest valid!");
            println!(
                "  Display: density {} / scaled {}",
                manifest.display.density, manifest.display.scaled_density
            );
            println!(
                "  Animation: {}% -> {}% by {} every {} ms ({} ticks max)",
                animation.initial_progress,
                animation.threshold,
                animation.step,
                animation.period_ms,
                animation.tick_count()
            );
        }
        Err(e) => {
            eprintln!("Manifest invalid: {e}");
            std::process::exit(1);
        }
    }
}

fn render(progress: i32, width: f32, height: f32, path: Option<&Path>) {
    let manifest = load_or_exit(path);
    let commands = render_frame(&manifest, progress, width, height);

    match serde_json::to_string_pretty(&commands) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize frame: {e}");
            std::process::exit(1);
        }
    }
}

/// Paint a single frame at `progress` into a `width` x `height` box.
fn render_frame(manifest: &ScreenManifest, progress: i32, width: f32, height: f32) -> Vec<DrawCommand> {
    let metrics = DisplayMetrics::from(manifest.display);
    let mut indicator = ProgressIndicator::from_attributes(&manifest.indicator, &metrics)
        .padding(manifest.padding.into());
    indicator.set_progress(progress);

    let size = indicator.measure(Constraints::tight(meterkit::Size::new(width, height)));
    indicator.layout(Rect::new(0.0, 0.0, size.width, size.height));

    let mut canvas = RecordingCanvas::new();
    indicator.paint(&mut canvas);
    canvas.take_commands()
}

/// Draw a frame as `[####------] 42%`.
///
/// Relies on the indicator's paint order: when two rectangles are present
/// the first is the fill.
fn bar_line(commands: &[DrawCommand], width_px: f32, columns: usize) -> String {
    let mut cells = vec![' '; columns];
    let mut label = "";
    let rect_count = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { .. }))
        .count();

    let scale = if width_px > 0.0 {
        columns as f32 / width_px
    } else {
        0.0
    };
    let mut rect_index = 0;
    for command in commands {
        match command {
            DrawCommand::Rect { bounds, .. } => {
                let glyph = if rect_count > 1 && rect_index == 0 { '#' } else { '-' };
                rect_index += 1;
                let start = (bounds.left() * scale).round().max(0.0) as usize;
                let end = ((bounds.right() * scale).round().max(0.0) as usize).min(columns);
                for cell in cells.iter_mut().take(end).skip(start) {
                    *cell = glyph;
                }
            }
            DrawCommand::Text { content, .. } => label = content.as_str(),
        }
    }

    let bar: String = cells.into_iter().collect();
    format!("[{bar}] {label:>4}")
}
