use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cellscan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Capture a fixed-rate sequence: PNG directory, or MP4 when the output
    /// path ends in `.mp4` (requires `ffmpeg` on PATH).
    Capture(CaptureArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Settings JSON; defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Frame index (0-based); the session is stepped this far.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CaptureArgs {
    /// Settings JSON; defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output directory for PNG frames, or an `.mp4` file path.
    #[arg(long)]
    out: PathBuf,

    /// Override the capture rate from settings.
    #[arg(long)]
    fps: Option<u32>,

    /// Override the capture duration (seconds) from settings.
    #[arg(long)]
    duration: Option<f32>,

    /// Disable static-frame elision.
    #[arg(long, default_value_t = false)]
    no_elision: bool,

    /// Overwrite MP4 output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Capture(args) => cmd_capture(args),
    }
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<cellscan::Settings> {
    match path {
        Some(p) => Ok(cellscan::Settings::from_path(p)?),
        None => Ok(cellscan::Settings::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_ref())?;
    let mut session = cellscan::SceneSession::new(settings)?;

    let mut frame = session.advance_frame(None)?;
    for _ in 0..args.frame {
        frame = session.advance_frame(None)?;
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_capture(args: CaptureArgs) -> anyhow::Result<()> {
    let mut settings = load_settings(args.settings.as_ref())?;
    if let Some(fps) = args.fps {
        settings.capture.fps = fps;
    }
    if let Some(duration) = args.duration {
        settings.capture.duration_secs = duration;
    }

    let mut opts = cellscan::CaptureOpts::from_settings(&settings.capture)?;
    opts.static_frame_elision = !args.no_elision;

    let mut session = cellscan::SceneSession::new(settings)?;
    let capture = cellscan::CaptureSession::new(opts);

    let stats = if args.out.extension().is_some_and(|e| e == "mp4") {
        let mut sink = cellscan::FfmpegSink::new(cellscan::FfmpegSinkOpts {
            out_path: args.out.clone(),
            overwrite: args.overwrite,
        });
        capture.run(&mut session, &mut sink, |_| None)?
    } else {
        let mut sink = cellscan::PngSequenceSink::new(&args.out, "frame");
        capture.run(&mut session, &mut sink, |_| None)?
    };

    eprintln!(
        "wrote {} ({} frames, {} rendered, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}
