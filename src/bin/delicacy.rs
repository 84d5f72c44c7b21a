use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use delicacy::{Collection, CreateOpts, ImageGenerator, PaletteGenerator, Registry};

#[derive(Parser, Debug)]
#[command(name = "delicacy", version, about = "Deterministic phrase-to-avatar generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render character over background as PNG.
    Create(CreateArgs),
    /// Render only the pattern background, as SVG or PNG.
    Background(BackgroundArgs),
    /// Print the colours of a palette.
    Palette(PaletteArgs),
    /// List registered makers and palettes.
    Makers,
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 320)]
    height: u32,

    /// Number of palette colours the maker may use.
    #[arg(long, default_value_t = 4)]
    n_colors: usize,

    /// Background: `dark`, `light`, `#rrggbb` or `none`.
    #[arg(long, default_value = "dark")]
    background: String,
}

impl OutputArgs {
    fn opts(&self, blend_factor: f64) -> anyhow::Result<CreateOpts> {
        Ok(CreateOpts {
            width: self.width,
            height: self.height,
            n_colors: self.n_colors,
            blend_factor,
            background: delicacy::parse_background(&self.background)?,
        })
    }
}

#[derive(Parser, Debug)]
struct CreateArgs {
    /// Phrases to render. With more than one, `--out` names a directory.
    #[arg(required = true)]
    phrases: Vec<String>,

    /// Collection name (a subdirectory of the collection root).
    #[arg(long, default_value = "robot")]
    collection: String,

    /// Directory holding collections.
    #[arg(long, env = "DELICACY_COLLECTION_DIR", default_value = "collections")]
    collection_dir: PathBuf,

    /// Pattern maker for the background.
    #[arg(long, default_value = "dione")]
    maker: String,

    /// Character size relative to the frame.
    #[arg(long, default_value_t = 0.8)]
    blend_factor: f64,

    #[command(flatten)]
    output: OutputArgs,

    /// Output PNG path, or directory for several phrases.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
struct BackgroundArgs {
    /// Phrase to seed from.
    phrase: String,

    /// Pattern maker.
    #[arg(long, default_value = "dione")]
    maker: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    #[command(flatten)]
    output: OutputArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Registered palette name.
    name: String,

    /// Phrase to seed from; a random seed is used when absent.
    #[arg(long)]
    phrase: Option<String>,

    /// Number of colours.
    #[arg(long, default_value_t = 4)]
    count: usize,

    /// Print JSON instead of one hex colour per line.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PaletteReport<'a> {
    palette: &'a str,
    seed: String,
    colors: Vec<String>,
    hsv: Vec<delicacy::HsvColor>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::builtin();
    match cli.cmd {
        Command::Create(args) => cmd_create(&registry, args),
        Command::Background(args) => cmd_background(&registry, args),
        Command::Palette(args) => cmd_palette(&registry, args),
        Command::Makers => cmd_makers(&registry),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_create(registry: &Registry, args: CreateArgs) -> anyhow::Result<()> {
    let opts = args.output.opts(args.blend_factor)?;
    let root = args.collection_dir.join(&args.collection);
    let generator = ImageGenerator::new(Collection::discover(&args.collection, root)?);

    if let [phrase] = args.phrases.as_slice() {
        let img = delicacy::create(registry, &generator, phrase, &args.maker, &opts)?;
        write_file(&args.out, &delicacy::encode_png(&img)?)?;
        eprintln!("wrote {}", args.out.display());
        return Ok(());
    }

    let results = delicacy::create_many(registry, &generator, &args.phrases, &args.maker, &opts);
    for (i, (phrase, result)) in args.phrases.iter().zip(results).enumerate() {
        let img = result.with_context(|| format!("create '{phrase}'"))?;
        let (digest, _) = delicacy::derive_seed(phrase)?;
        let mut name = digest.to_hex();
        name.truncate(12);
        let path = args.out.join(format!("{i:03}-{name}.png"));
        write_file(&path, &delicacy::encode_png(&img)?)?;
        println!("{}\t{phrase}", path.display());
    }
    Ok(())
}

fn cmd_background(registry: &Registry, args: BackgroundArgs) -> anyhow::Result<()> {
    let opts = args.output.opts(CreateOpts::default().blend_factor)?;
    let bytes = match args.format {
        Format::Svg => delicacy::background_scene(registry, &args.phrase, &args.maker, &opts)?
            .to_markup()
            .into_bytes(),
        Format::Png => delicacy::encode_png(&delicacy::make_background(
            registry,
            &args.phrase,
            &args.maker,
            &opts,
        )?)?,
    };
    write_file(&args.out, &bytes)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_palette(registry: &Registry, args: PaletteArgs) -> anyhow::Result<()> {
    let seed = match &args.phrase {
        Some(p) => Some(delicacy::derive_seed(p)?.1),
        None => None,
    };
    let palette_gen = PaletteGenerator::new(registry.palettes(), &args.name, seed)?;
    let hsv = palette_gen.generate(args.count)?;
    let colors: Vec<String> = hsv.iter().map(|c| c.to_hex()).collect();

    if args.json {
        let report = PaletteReport {
            palette: palette_gen.palette().name(),
            seed: palette_gen.seed().to_string(),
            colors,
            hsv,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for c in colors {
            println!("{c}");
        }
    }
    Ok(())
}

fn cmd_makers(registry: &Registry) -> anyhow::Result<()> {
    println!("makers:");
    for name in registry.makers().names() {
        println!("  {name}");
    }
    let preferred: Vec<&str> = registry.palettes().preferred().iter().map(|p| p.name()).collect();
    println!("palettes:");
    for name in registry.palettes().names() {
        let mark = if preferred.contains(&name) { " *" } else { "" };
        println!("  {name}{mark}");
    }
    Ok(())
}
