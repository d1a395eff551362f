use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "penumbra", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one cycle as an animated SVG document.
    Svg(SvgArgs),
    /// Render a single instant of a cycle as a PNG.
    Frame(FrameArgs),
    /// Dump consecutive cycles as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Configuration JSON; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the phase generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Use the single-shot preset instead of the looping one (ignored with --config).
    #[arg(long)]
    single_shot: bool,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Cycle to write (0-based); earlier cycles are generated and discarded.
    #[arg(long, default_value_t = 0)]
    cycle: u64,

    /// Paint an opaque background.
    #[arg(long)]
    background: Option<String>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Cycle to render (0-based).
    #[arg(long, default_value_t = 0)]
    cycle: u64,

    /// Seconds since the cycle became visible.
    #[arg(long)]
    time: f64,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of consecutive cycles.
    #[arg(long, default_value_t = 1)]
    cycles: u64,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<penumbra::PenumbraConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    let config = penumbra::PenumbraConfig::from_json_str(&text)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(config)
}

fn load_config(common: &CommonArgs) -> anyhow::Result<penumbra::PenumbraConfig> {
    match &common.config {
        Some(path) => read_config_json(path),
        None if common.single_shot => Ok(penumbra::PenumbraConfig::single_shot()),
        None => Ok(penumbra::PenumbraConfig::default()),
    }
}

fn session_at(
    common: &CommonArgs,
    cycle: u64,
) -> anyhow::Result<penumbra::PenumbraSession<penumbra::Rng64>> {
    let config = load_config(common)?;
    let mut session = penumbra::PenumbraSession::new(config, penumbra::Rng64::new(common.seed))?;
    while session.cycle_index() < cycle {
        if !session.advance_cycle()? {
            anyhow::bail!("cycle {cycle} requested but the configuration does not repeat");
        }
    }
    Ok(session)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let session = session_at(&args.common, args.cycle)?;
    let style = penumbra::render::SvgStyle {
        background: args.background,
        ..penumbra::render::SvgStyle::default()
    };
    let svg = penumbra::render::cycle_to_svg(
        session.current_cycle()?,
        session.config(),
        &style,
    );

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, svg).with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = session_at(&args.common, args.cycle)?;
    let snapshot = session.snapshot(args.time)?;

    let style = penumbra::render::SvgStyle {
        width: args.width,
        height: args.height,
        background: Some("black".to_string()),
        ..penumbra::render::SvgStyle::default()
    };
    let frame = penumbra::render::render_snapshot(
        &snapshot,
        &style,
        args.width,
        args.height,
    )?;
    penumbra::render::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    if args.cycles == 0 {
        anyhow::bail!("--cycles must be >= 1");
    }
    let mut session = session_at(&args.common, 0)?;
    let mut cycles = Vec::with_capacity(args.cycles as usize);
    cycles.push(session.current_cycle()?.clone());
    for _ in 1..args.cycles {
        if !session.advance_cycle()? {
            break;
        }
        cycles.push(session.current_cycle()?.clone());
    }

    ensure_parent(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create json '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(f, &cycles).with_context(|| "serialize cycles")?;

    eprintln!("wrote {} cycle(s) to {}", cycles.len(), args.out.display());
    Ok(())
}
