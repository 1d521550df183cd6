use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng as _;

use chernoff::{
    AnimationDriver, ChernoffConfig, ChernoffError, ExportOptions, FaceDescriptor, FacePainter,
    Fps, PixmapSurface, TargetRect,
};

#[derive(Parser, Debug)]
#[command(name = "chernoff", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config with `animation`, `layout` and `style` sections.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single face as a PNG.
    Frame(FrameArgs),
    /// Print the draw commands for a single face as JSON.
    Commands(CommandsArgs),
    /// Render a transition between two faces as a PNG sequence.
    Export(ExportArgs),
    /// Play a transition in real time, printing one JSON draw list per frame.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct FaceArgs {
    /// Ten comma separated values in [0, 1].
    #[arg(long, conflicts_with = "random")]
    params: Option<FaceDescriptor>,

    /// Draw a random face instead.
    #[arg(long)]
    random: bool,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

impl FaceArgs {
    fn descriptor(&self) -> FaceDescriptor {
        match (&self.params, self.random, self.seed) {
            (Some(face), _, _) => *face,
            (None, true, Some(seed)) => {
                FaceDescriptor::random_with(&mut rand::rngs::StdRng::seed_from_u64(seed))
            }
            (None, true, None) => FaceDescriptor::random(),
            (None, false, _) => FaceDescriptor::neutral(),
        }
    }
}

#[derive(Args, Debug)]
struct SizeArgs {
    #[arg(long, default_value_t = 200)]
    width: u32,

    #[arg(long, default_value_t = 200)]
    height: u32,
}

impl SizeArgs {
    fn rect(&self) -> anyhow::Result<TargetRect> {
        let w = i32::try_from(self.width).context("width too large")?;
        let h = i32::try_from(self.height).context("height too large")?;
        Ok(TargetRect::sized(w, h)?)
    }
}

#[derive(Args, Debug)]
struct TransitionArgs {
    /// Starting face, ten comma separated values.
    #[arg(long)]
    from: FaceDescriptor,

    /// Final face, ten comma separated values.
    #[arg(long)]
    to: FaceDescriptor,

    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Override the configured frame rate.
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    face: FaceArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CommandsArgs {
    #[command(flatten)]
    face: FaceArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Print on a single line.
    #[arg(long)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    #[command(flatten)]
    size: SizeArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ChernoffConfig::load(path)?,
        None => ChernoffConfig::default(),
    };

    match cli.cmd {
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Commands(args) => cmd_commands(&config, args),
        Command::Export(args) => cmd_export(&config, args),
        Command::Play(args) => cmd_play(&config, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn fps_for(config: &ChernoffConfig, args: &TransitionArgs) -> anyhow::Result<Fps> {
    match args.fps {
        Some(fps) => Ok(Fps::new(fps)?),
        None => Ok(config.animation.fps),
    }
}

fn write_png(path: &Path, frame: &chernoff::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(config: &ChernoffConfig, args: FrameArgs) -> anyhow::Result<()> {
    let painter = config.painter()?;
    let rect = args.size.rect()?;
    let face = args.face.descriptor();

    let mut surface = PixmapSurface::new(args.size.width, args.size.height, &config.style)?;
    painter.draw(&mut surface, &face, rect)?;
    write_png(&args.out, &surface.finish())?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_commands(config: &ChernoffConfig, args: CommandsArgs) -> anyhow::Result<()> {
    let painter = config.painter()?;
    let list = painter.commands(&args.face.descriptor(), args.size.rect()?)?;
    let json = match args.compact {
        true => serde_json::to_string(&list),
        false => serde_json::to_string_pretty(&list),
    };
    let json = json.context("serialize draw list")?;
    println!("{json}");
    Ok(())
}

fn cmd_export(config: &ChernoffConfig, args: ExportArgs) -> anyhow::Result<()> {
    let painter = config.painter()?;
    let options = ExportOptions {
        fps: fps_for(config, &args.transition)?,
        width: args.size.width,
        height: args.size.height,
        threads: args.threads,
    };
    let frames = chernoff::export_frames(
        &painter,
        &config.style,
        &args.transition.from,
        &args.transition.to,
        Duration::from_millis(args.transition.duration_ms),
        &options,
    )?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        write_png(&args.out_dir.join(format!("frame_{i:04}.png")), frame)?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

fn cmd_play(config: &ChernoffConfig, args: PlayArgs) -> anyhow::Result<()> {
    let painter: FacePainter = config.painter()?;
    let rect = args.size.rect()?;
    let mut settings = config.animation;
    settings.fps = fps_for(config, &args.transition)?;

    let stdout = std::io::stdout();
    let driver = AnimationDriver::with_settings(
        move |face: &FaceDescriptor| -> chernoff::ChernoffResult<()> {
            let list = painter.commands(face, rect)?;
            let line =
                serde_json::to_string(&list).map_err(|e| ChernoffError::serde(e.to_string()))?;
            writeln!(stdout.lock(), "{line}").map_err(anyhow::Error::from)?;
            Ok(())
        },
        settings,
    );

    let report = driver.run_sync(
        &args.transition.from,
        &args.transition.to,
        Duration::from_millis(args.transition.duration_ms),
    )?;
    eprintln!(
        "played {} frames in {} ms",
        report.frames,
        report.elapsed.as_millis()
    );
    Ok(())
}
