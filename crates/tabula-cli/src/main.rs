//! Tabula CLI - convert tables between CSV, TSV, JSON, HTML and SQL

mod config;
mod errors;
mod logging;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use config::Config;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tabula::{Format, Orchestrator, Registry, Surface};

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Convert tabular data between CSV, TSV, JSON, HTML and SQL", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/tabula/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available adapters and surfaces
    List,

    /// Convert a table
    Convert {
        /// Input file ("-" for stdin)
        #[arg(default_value = "-")]
        input: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Explicit source format (overrides detection)
        #[arg(long)]
        from: Option<String>,
        /// Explicit target format (overrides detection)
        #[arg(long)]
        to: Option<String>,
        /// Table name for SQL output
        #[arg(long)]
        table: Option<String>,
        /// Surface limiting the allowed formats (data, table)
        #[arg(long)]
        surface: Option<String>,
    },

    /// Show the format pair after swapping input and output
    Swap {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Surface limiting the allowed formats (data, table)
        #[arg(long)]
        surface: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(Some(path)),
        None => Config::load(),
    };
    logging::init(cli.verbose || config.defaults.verbose);

    let registry = tabula_formats::default_registry();

    match cli.command {
        Commands::List => cmd_list(&registry),
        Commands::Convert {
            input,
            output,
            from,
            to,
            table,
            surface,
        } => {
            let request = ConvertRequest {
                input,
                output,
                from,
                to,
                table,
                surface,
            };
            cmd_convert(registry, &config, request)
        }
        Commands::Swap { from, to, surface } => cmd_swap(&config, &from, &to, surface),
    }
}

fn cmd_list(registry: &Registry) -> Result<()> {
    println!("Readers:\n");
    for decl in registry.readers() {
        println!("  {}", decl.id);
        if !decl.description.is_empty() {
            println!("    {}", decl.description);
        }
    }

    println!("\nWriters:\n");
    for decl in registry.writers() {
        println!("  {}", decl.id);
        if !decl.description.is_empty() {
            println!("    {}", decl.description);
        }
    }

    println!("\nSurfaces:\n");
    for surface in Surface::ALL {
        println!("  {}", surface.name);
        println!("    inputs:  {}", names(surface.inputs));
        println!("    outputs: {}", names(surface.outputs));
    }

    println!();
    println!("Total: {} adapters", registry.len());
    Ok(())
}

struct ConvertRequest {
    input: String,
    output: Option<PathBuf>,
    from: Option<String>,
    to: Option<String>,
    table: Option<String>,
    surface: Option<String>,
}

fn cmd_convert(
    registry: std::sync::Arc<Registry>,
    config: &Config,
    request: ConvertRequest,
) -> Result<()> {
    let surface = resolve_surface(request.surface.or(config.defaults.surface.clone()))?;
    let from_stdin = request.input == "-";

    let source_format = resolve_format(
        request.from.as_deref(),
        (!from_stdin).then_some(request.input.as_str()),
        config.defaults.from,
        surface.default_input,
        true,
    )?;
    let target_format = resolve_format(
        request.to.as_deref(),
        request.output.as_deref().and_then(Path::to_str),
        config.defaults.to,
        surface.default_output,
        false,
    )?;

    let mut options = config.defaults.options.clone();
    if let Some(name) = request.table {
        options = options.table_name(name);
    }

    let mut orchestrator = Orchestrator::new(registry, surface).with_options(options);
    orchestrator
        .select_input(source_format)
        .map_err(|_| anyhow!(errors::surface_format_error(&surface, source_format, true)))?;
    orchestrator
        .select_output(target_format)
        .map_err(|_| anyhow!(errors::surface_format_error(&surface, target_format, false)))?;

    let text = read_input(&request.input)?;
    tracing::info!(
        surface = orchestrator.surface().name,
        from = %orchestrator.input(),
        to = %orchestrator.output(),
        table = %orchestrator.options().table_name,
        bytes = text.len(),
        "converting"
    );

    // Nothing is written unless the conversion succeeds
    let converted = orchestrator
        .convert(&text)
        .with_context(|| format!("Conversion {} -> {} failed", source_format, target_format))?;

    match request.output {
        Some(path) => {
            std::fs::write(&path, &converted).context("Failed to write output file")?;
            eprintln!(
                "Converted {} -> {} ({} bytes)",
                if from_stdin { "stdin" } else { request.input.as_str() },
                path.display(),
                converted.len()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", converted).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn cmd_swap(config: &Config, from: &str, to: &str, surface: Option<String>) -> Result<()> {
    let surface = resolve_surface(surface.or(config.defaults.surface.clone()))?;
    let input = parse_format(from)?;
    let output = parse_format(to)?;

    if !surface.accepts_input(input) {
        return Err(anyhow!(errors::surface_format_error(&surface, input, true)));
    }
    if !surface.accepts_output(output) {
        return Err(anyhow!(errors::surface_format_error(&surface, output, false)));
    }

    let (new_input, new_output) = tabula::swap(&surface, input, output);
    println!("{} -> {}", new_input, new_output);
    Ok(())
}

fn resolve_surface(name: Option<String>) -> Result<Surface> {
    match name {
        Some(name) => {
            Surface::by_name(&name).ok_or_else(|| anyhow!(errors::unknown_surface_error(&name)))
        }
        None => Ok(Surface::default()),
    }
}

/// Pick a format: explicit flag, then file extension, then config, then surface default.
fn resolve_format(
    explicit: Option<&str>,
    path: Option<&str>,
    configured: Option<Format>,
    surface_default: Format,
    is_source: bool,
) -> Result<Format> {
    if let Some(name) = explicit {
        return parse_format(name);
    }
    if let Some(format) = path.and_then(Format::from_path) {
        return Ok(format);
    }
    match (configured, path) {
        (Some(format), _) => Ok(format),
        (None, Some(path)) => Err(anyhow!(errors::format_detection_error(path, is_source))),
        (None, None) => Ok(surface_default),
    }
}

fn parse_format(name: &str) -> Result<Format> {
    name.parse::<Format>()
        .map_err(|_| anyhow!(errors::unknown_format_error(name)))
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).map_err(|e| anyhow!(errors::file_read_error(input, &e)))
}

fn names(formats: &[Format]) -> String {
    formats
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}
