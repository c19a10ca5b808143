//! pagefmt - Page and space formatting helpers
//!
//! Command-line access to the formatting helpers, mostly for scripting and
//! checking how a value will be displayed.
//!
//! # Usage
//!
//! ```bash
//! pagefmt members 3                         # "3 members"
//! pagefmt slug-id meeting-notes-9f8a7b6c    # "9f8a7b6c"
//! pagefmt space-slug "Engineering Team"     # "ET"
//! pagefmt bytes 1048576 --precision 1       # "1.0 MB"
//! pagefmt svg-to-file logo.svg brand.svg    # Copy markup into the output dir
//! pagefmt decode-svg "data:image/svg+xml;base64,PHN2Zy8+"
//! pagefmt encode-svg logo.svg               # Print a data URI
//! pagefmt capitalize "hello"                # "Hello"
//! pagefmt icon --size 24                    # Placeholder icon as JSON
//! pagefmt config --init                     # Write default config.json
//! ```

use clap::{Parser, Subcommand};
use pagefmt::config::{self, FormatConfig};
use pagefmt::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pagefmt")]
#[command(about = "Formatting helpers for wiki pages, spaces and SVG assets", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a space member count
    Members {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Extract the page id from a URL slug
    SlugId {
        /// Slug to inspect (prints nothing when absent or empty)
        slug: Option<String>,
    },
    /// Compute the short code for a space name
    SpaceSlug { name: String },
    /// Format a byte count in human units
    Bytes {
        #[arg(allow_negative_numbers = true)]
        bytes: f64,
        /// Decimal places (default from config, usually 2)
        #[arg(short, long, allow_negative_numbers = true)]
        precision: Option<i32>,
    },
    /// Save SVG markup from a file under a new name
    SvgToFile {
        /// File containing SVG markup
        input: PathBuf,
        /// Name of the saved file
        name: String,
        /// Output directory (default from config, usually the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Decode a base64 SVG payload or data URI
    DecodeSvg { data: String },
    /// Encode an SVG file as a data URI
    EncodeSvg { input: PathBuf },
    /// Upper-case the first character of some text
    Capitalize { text: String },
    /// Resolve a page icon, printing the result as JSON
    Icon {
        /// Icon supplied by the page (placeholder when absent or empty)
        icon: Option<String>,
        /// Placeholder size in pixels (default from config, usually 18)
        #[arg(short, long)]
        size: Option<u32>,
    },
    /// Show the active configuration
    Config {
        /// Write the default configuration to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(handle_cli(cli.command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("  {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_cli(command: Commands) -> Result<(), Error> {
    let config = config::load_config().await;

    match command {
        Commands::Members { count } => {
            println!("{}", pagefmt::format_member_count(count));
        }
        Commands::SlugId { slug } => {
            if let Some(id) = pagefmt::extract_page_slug_id(slug.as_deref()) {
                println!("{id}");
            }
        }
        Commands::SpaceSlug { name } => {
            println!("{}", pagefmt::compute_space_slug(&name));
        }
        Commands::Bytes { bytes, precision } => {
            let precision = precision.unwrap_or(config.byte_precision);
            println!(
                "{}",
                pagefmt::format_bytes_with_precision(bytes, precision)
            );
        }
        Commands::SvgToFile {
            input,
            name,
            output,
        } => {
            let svg = tokio::fs::read_to_string(&input).await?;
            let file = pagefmt::svg_string_to_file(&svg, &name);
            let dir = output.unwrap_or_else(|| config.output_dir());
            let path = file.save_to(&dir).await?;
            println!(
                "✓ Saved {} ({}, {})",
                path.display(),
                file.mime_type(),
                pagefmt::format_bytes(file.size() as f64)
            );
        }
        Commands::DecodeSvg { data } => {
            println!("{}", pagefmt::decode_base64_to_svg_string(&data)?);
        }
        Commands::EncodeSvg { input } => {
            let svg = tokio::fs::read_to_string(&input).await?;
            println!("{}", pagefmt::encode_svg_to_base64(&svg));
        }
        Commands::Capitalize { text } => {
            println!("{}", pagefmt::capitalize_first_char(&text));
        }
        Commands::Icon { icon, size } => {
            let size = size.unwrap_or(config.icon_size);
            let resolved = pagefmt::resolve_page_icon_text(icon.as_deref(), Some(size));
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Commands::Config { init } => {
            if init {
                pagefmt::utils::ensure_dirs()?;
                config::save_config(&FormatConfig::default()).await?;
                if let Some(path) = config::config_path() {
                    println!("✓ Wrote {}", path.display());
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }
    Ok(())
}
