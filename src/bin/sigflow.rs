use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sigflow::{
    LayoutWatcher, OverlayConfig, RegionTracker, RouteComposer, RouteKind, StaticPage, SvgOverlay,
    scroll_progress,
};

#[derive(Parser, Debug)]
#[command(name = "sigflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composed control points with their motifs as JSON.
    Route(PageArgs),
    /// Write the overlay as an SVG document at a scroll offset.
    Svg(SvgArgs),
    /// Rasterize the overlay at a scroll offset to PNG.
    Frame(FrameArgs),
    /// Print scroll offset, progress and visible length over the page.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Page description JSON (metrics, scroll offset, regions).
    #[arg(long)]
    page: PathBuf,

    /// Overlay config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset in pixels; the page's own offset when omitted.
    #[arg(long)]
    scroll: Option<f64>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset in pixels; the page's own offset when omitted.
    #[arg(long)]
    scroll: Option<f64>,

    /// Raster scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Paint a white background instead of leaving it transparent.
    #[arg(long)]
    opaque: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Number of evenly spaced scroll samples.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Route(args) => cmd_route(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn load(args: &PageArgs) -> anyhow::Result<(StaticPage, OverlayConfig)> {
    let s = std::fs::read_to_string(&args.page)
        .with_context(|| format!("open page '{}'", args.page.display()))?;
    let page = StaticPage::from_json_str(&s)
        .with_context(|| format!("parse page '{}'", args.page.display()))?;
    let config = match &args.config {
        Some(path) => OverlayConfig::from_json_file(path)?,
        None => OverlayConfig::default(),
    };
    Ok((page, config))
}

/// Mount a watcher on the page, scroll it and hand back the painted overlay.
fn overlay_at(
    mut page: StaticPage,
    config: &OverlayConfig,
    scroll: Option<f64>,
) -> SvgOverlay {
    if let Some(offset) = scroll {
        page.scroll_to(offset);
    }
    let mut overlay = SvgOverlay::new(config.style.clone());
    {
        let mut watcher = LayoutWatcher::new(&mut page, &mut overlay, config);
        watcher.mount();
    }
    overlay
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_route(args: PageArgs) -> anyhow::Result<()> {
    let (page, config) = load(&args)?;
    if config.kind == RouteKind::Meander {
        anyhow::bail!("route output needs the signature route kind (meander has no control points)");
    }
    let regions = RegionTracker::new().measure(&page);
    let route = RouteComposer::new(config.route).compose(&regions, &page.metrics);
    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let (page, config) = load(&args.page)?;
    let overlay = overlay_at(page, &config, args.scroll);

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, overlay.to_svg_document())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (page, config) = load(&args.page)?;
    let overlay = overlay_at(page, &config, args.scroll);

    let background = args.opaque.then_some([255, 255, 255, 255]);
    let frame = sigflow::rasterize_svg(&overlay.to_svg_document(), args.scale, background)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let (mut page, config) = load(&args.page)?;
    let steps = args.steps.max(1);
    let range = page.metrics.scrollable_range();

    let mut overlay = SvgOverlay::new(config.style.clone());
    let mut watcher = LayoutWatcher::new(&mut page, &mut overlay, &config);
    watcher.mount();

    let total = watcher.curve().total_length();
    println!("total_length\t{total:.3}");
    println!("scroll\tprogress\tvisible_length");
    for i in 0..=steps {
        let offset = range * f64::from(i) / f64::from(steps);
        watcher.host_mut().scroll_to(offset);
        let visible = watcher.on_scroll();
        let m = watcher.host().metrics;
        let p = scroll_progress(offset, m.page_height, m.viewport_height);
        println!("{offset:.1}\t{p:.4}\t{visible:.3}");
    }
    watcher.teardown();
    Ok(())
}
