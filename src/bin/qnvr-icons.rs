use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "qnvr-icons", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write every launcher icon (5 densities x square/round) into an Android res/ directory.
    Generate(GenerateArgs),
    /// Render a single icon size as a PNG.
    Render(RenderArgs),
    /// Print the output plan as JSON without rendering anything.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON config file (res_dir, font candidate lists).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for the "AI" badge. Repeat to build a fallback chain.
    #[arg(long = "ai-font")]
    ai_fonts: Vec<PathBuf>,

    /// Font file for the CJK label. Repeat to build a fallback chain.
    #[arg(long = "label-font")]
    label_fonts: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Android resource directory receiving the mipmap-* folders.
    #[arg(long)]
    res_dir: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    /// Render the density buckets concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count when --parallel is set.
    #[arg(long)]
    threads: Option<usize>,

    /// Print which font each slot resolved to (path + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Icon edge length in pixels.
    #[arg(long)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    source: SourceArgs,

    /// Print which font each slot resolved to (path + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Android resource directory receiving the mipmap-* folders.
    #[arg(long)]
    res_dir: Option<PathBuf>,

    /// JSON config file (res_dir, font candidate lists).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("qnvr_icons=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn load_config(
    config: Option<&PathBuf>,
    res_dir: Option<PathBuf>,
    source: Option<&SourceArgs>,
) -> anyhow::Result<qnvr_icons::IconSetConfig> {
    let base = match config {
        Some(path) => qnvr_icons::IconSetConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => qnvr_icons::IconSetConfig::default(),
    };
    let (ai, label) = source
        .map(|s| (s.ai_fonts.clone(), s.label_fonts.clone()))
        .unwrap_or_default();
    Ok(base.with_overrides(res_dir, ai, label))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.source.config.as_ref(), args.res_dir, Some(&args.source))?;
    let renderer = qnvr_icons::IconRenderer::new(&cfg.fonts);
    if args.dump_fonts {
        dump_font_diagnostics(&renderer);
    }

    let plan = qnvr_icons::OutputPlan::android(&cfg.res_dir);
    let threading = qnvr_icons::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let mut sink = qnvr_icons::PngFileSink::new();
    let stats = qnvr_icons::generate_icon_set(&plan, &renderer, &mut sink, &threading)
        .with_context(|| format!("generate icons into '{}'", cfg.res_dir.display()))?;

    for path in sink.written() {
        eprintln!("wrote {}", path.display());
    }
    eprintln!(
        "all icons generated: {} files from {} sizes",
        stats.icons_written, stats.sizes_rendered
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.source.config.as_ref(), None, Some(&args.source))?;
    let renderer = qnvr_icons::IconRenderer::new(&cfg.fonts);
    if args.dump_fonts {
        dump_font_diagnostics(&renderer);
    }

    let icon = renderer
        .render(args.size)
        .with_context(|| format!("render {}px icon", args.size))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = icon.encode_png()?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref(), args.res_dir, None)?;
    let plan = qnvr_icons::OutputPlan::android(&cfg.res_dir);
    let json = serde_json::to_string_pretty(&plan).context("serialize output plan")?;
    println!("{json}");
    Ok(())
}

fn dump_font_diagnostics(renderer: &qnvr_icons::IconRenderer) {
    eprintln!("font diagnostics:");
    for (slot, font) in renderer.resolve_fonts() {
        eprintln!("  {}:", slot.name());
        eprintln!("    source:  {}", font.source);
        eprintln!("    family:  {}", font.family);
        match &font.bytes {
            Some(bytes) => eprintln!("    sha256:  {}", sha256_hex(bytes)),
            None => eprintln!("    sha256:  -"),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
