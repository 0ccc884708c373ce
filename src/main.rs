use anyhow::Context;
use clap::Parser;
use drip_core::config::{Config, SourceFormat};
use drip_core::pipeline;
use drip_sources::{CsvSource, JsonlSource};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drip", about = "drip — sensor reading ETL")]
struct Cli {
    /// Input file to extract readings from. Defaults to the configured
    /// source path.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Source format (csv or jsonl). Defaults to the file extension, then
    /// the configured format.
    #[arg(long)]
    format: Option<String>,

    /// Pretty-print records instead of emitting one JSON object per line.
    #[arg(long)]
    pretty: bool,

    /// Emit at most N records.
    #[arg(long)]
    limit: Option<usize>,

    /// Write debug logs to /tmp/drip-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/drip-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("drip debug log started — tail -f /tmp/drip-debug.log");
    }

    let config = Config::load()?;
    let input = cli.input.unwrap_or_else(|| config.source.path.clone());
    let format = match cli.format.as_deref() {
        Some(raw) => raw
            .parse::<SourceFormat>()
            .map_err(|reason| anyhow::anyhow!(reason))?,
        None => SourceFormat::from_path(&input).unwrap_or(config.source.format),
    };

    let records = match format {
        SourceFormat::Csv => pipeline::run(&CsvSource::new(&input)),
        SourceFormat::Jsonl => pipeline::run(&JsonlSource::new(&input)),
    }
    .with_context(|| format!("extracting {} from {}", format, input.display()))?;

    let pretty = cli.pretty || config.output.pretty;
    let limit = cli.limit.unwrap_or(usize::MAX);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in records.iter().take(limit) {
        if pretty {
            serde_json::to_writer_pretty(&mut out, record)?;
        } else {
            serde_json::to_writer(&mut out, record)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
