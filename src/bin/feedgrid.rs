use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use feedgrid::{
    DEFAULT_SKELETON_COUNT, DEFAULT_SKELETON_WIDTH_PX, Feed, FeedFilter, MeasureOpts, RowLimit,
    apply_measurements, classify_dimensions, measure_media, pack, pack_skeleton,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "feedgrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pack a feed JSON into a layout JSON.
    Pack(PackArgs),
    /// Print the tile shape for a media size.
    Classify(ClassifyArgs),
    /// Pack a placeholder feed.
    Skeleton(SkeletonArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input feed JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,

    /// Gap between cells in pixels (overrides the feed's layout section).
    #[arg(long)]
    gap: Option<f64>,

    /// Number of grid columns (overrides the feed's layout section).
    #[arg(long)]
    columns: Option<u32>,

    /// Fixed occupancy grid height in rows.
    #[arg(long, conflicts_with = "auto_rows")]
    max_rows: Option<u32>,

    /// Size the occupancy grid to the feed so no fitting item is dropped.
    #[arg(long, default_value_t = false)]
    auto_rows: bool,

    /// Keep only items in this album ("all" keeps every album).
    #[arg(long)]
    album: Option<String>,

    /// Keep only items carrying this tag.
    #[arg(long)]
    tag: Option<String>,

    /// Measure item media relative to this directory before packing.
    #[arg(long)]
    media_root: Option<PathBuf>,

    /// Measurement worker threads.
    #[arg(long, requires = "media_root")]
    threads: Option<usize>,

    /// Output layout JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Media width in pixels.
    #[arg(long)]
    width: u32,

    /// Media height in pixels.
    #[arg(long)]
    height: u32,
}

#[derive(Parser, Debug)]
struct SkeletonArgs {
    /// Number of placeholder tiles.
    #[arg(long, default_value_t = DEFAULT_SKELETON_COUNT)]
    count: usize,

    /// Container width in pixels.
    #[arg(long, default_value_t = DEFAULT_SKELETON_WIDTH_PX)]
    width: f64,

    /// Output layout JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
        Command::Classify(args) => cmd_classify(args),
        Command::Skeleton(args) => cmd_skeleton(args),
    }
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let mut feed = Feed::from_path(&args.in_path)?;
    feed.validate()?;

    let mut opts = feed.pack_opts();
    if let Some(gap) = args.gap {
        opts.gap_px = gap;
    }
    if let Some(columns) = args.columns {
        opts.columns = columns;
    }
    if let Some(rows) = args.max_rows {
        opts.row_limit = RowLimit::Fixed(rows);
    }
    if args.auto_rows {
        opts.row_limit = RowLimit::Auto;
    }
    opts.validate()?;

    if let Some(root) = &args.media_root {
        let measure_opts = MeasureOpts {
            threads: args.threads,
        };
        let measured = measure_media(root, &feed.items, &measure_opts)?;
        apply_measurements(&mut feed.items, &measured);
    }

    let filter = FeedFilter {
        album: args.album,
        tag: args.tag,
    };
    let items = filter.apply(&feed.items);
    let layout = pack(&items, args.width, &opts);

    write_json(args.out.as_deref(), &layout)
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    println!("{}", classify_dimensions(args.width, args.height));
    Ok(())
}

fn cmd_skeleton(args: SkeletonArgs) -> anyhow::Result<()> {
    let layout = pack_skeleton(args.count, args.width);
    write_json(args.out.as_deref(), &layout)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create layout JSON '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).context("serialize layout")?;
            w.flush().context("flush layout JSON")?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).context("serialize layout")?;
            writeln!(w).context("write stdout")?;
        }
    }
    Ok(())
}
