use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use stitchkit::{
    import_dst, init_logging, inspect_dst, to_hex_string, validate_dst, validate_dst_stitches,
    ExportFormat, ExportService, SettingsManager, StitchModel, BUILD_DATE, VERSION,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Convert, inspect and validate embroidery designs
struct Cli {
    /// Configuration file (JSON or TOML); defaults to the platform config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-encode a DST design as DST, EXP, SVG or G-code
    Convert {
        /// Input DST file
        input: PathBuf,
        /// Output format (dst, exp, svg, gcode)
        #[arg(short, long)]
        format: Option<String>,
        /// Output path; defaults to <name>.<ext> next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Design name written into headers
        #[arg(short, long)]
        name: Option<String>,
        /// Optimize jump paths before encoding
        #[arg(long)]
        optimize: bool,
    },
    /// Show DST header metadata and stitch statistics
    Info {
        /// Input DST file
        input: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Also print a hex dump of the file
        #[arg(long)]
        hex: bool,
    },
    /// Check DST file structure
    Validate {
        /// Input DST file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::debug!("stitchkit {} (built {})", VERSION, BUILD_DATE);

    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            input,
            format,
            output,
            name,
            optimize,
        } => convert(&input, format, output, name, optimize, cli.config.as_deref()),
        Command::Info { input, json, hex } => info(&input, json, hex),
        Command::Validate { input } => validate(&input),
    }
}

fn convert(
    input: &Path,
    format: Option<String>,
    output: Option<PathBuf>,
    name: Option<String>,
    optimize: bool,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = SettingsManager::load(config_path).context("Failed to load configuration")?;
    if optimize {
        config.optimizer.enabled = true;
    }

    let format = match format {
        Some(f) => f.parse::<ExportFormat>()?,
        None => config.export.default_format,
    };
    let name = name
        .or_else(|| input.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| config.export.design_name.clone());
    let output = output.unwrap_or_else(|| input.with_file_name(format.file_name(&name)));

    let model: StitchModel =
        import_dst(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let service = ExportService::new(config).with_timestamp(chrono::Utc::now());
    let artifact = service
        .export_to_file(&model, format, &name, &output)
        .with_context(|| format!("{} export failed", format.extension().to_uppercase()))?;

    println!(
        "Wrote {} ({} bytes, {})",
        output.display(),
        artifact.bytes.len(),
        artifact.content_type
    );
    Ok(())
}

fn info(input: &Path, json: bool, hex: bool) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let report = inspect_dst(&bytes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.metadata {
            Some(metadata) => {
                println!("Name:           {}", metadata.name);
                println!("Stitch count:   {}", metadata.stitch_count);
                println!("Extents (max):  {} x {}", metadata.max_x, metadata.max_y);
            }
            None => println!("Header:         not in numeric layout"),
        }
        println!("{}", report.stats);
    }

    if hex {
        println!("{}", to_hex_string(&bytes));
    }
    Ok(())
}

fn validate(input: &Path) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    validate_dst(&bytes)?;
    validate_dst_stitches(&bytes)?;
    println!("{}: valid DST ({} bytes)", input.display(), bytes.len());
    Ok(())
}
