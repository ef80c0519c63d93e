use std::{
    fs::File,
    io::{self, BufWriter, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use folio_app::modules::books::export;
use folio_generator::{generate_parallel, GenerationRequest, LocaleRegistry};
use folio_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "folio-cli", version, about = "Deterministic synthetic book generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a range of books
    Generate(GenerateArgs),
    /// List the registered locales
    Locales,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Locale tag; unknown tags use the fallback locale
    #[arg(long)]
    locale: Option<String>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 5.0, value_parser = parse_rate)]
    average_likes: f64,
    #[arg(long, default_value_t = 3.0, value_parser = parse_rate)]
    average_reviews: f64,
    /// 0-based index of the first record
    #[arg(long, default_value_t = 0)]
    start: u64,
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Worker threads; defaults to the available parallelism
    #[arg(long)]
    workers: Option<NonZeroUsize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if !rate.is_finite() || rate < 0.0 {
        return Err("must be a finite, non-negative number".to_string());
    }
    Ok(rate)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().context("failed to load Folio settings")?;
    folio_telemetry::init_stderr(&settings.telemetry)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings),
        Command::Locales => {
            let mut stdout = io::stdout().lock();
            for tag in LocaleRegistry::builtin().tags() {
                writeln!(stdout, "{tag}")?;
            }
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> anyhow::Result<()> {
    if args.start.checked_add(u64::from(args.count)).is_none() {
        bail!("--start {} + --count {} exceeds the index space", args.start, args.count);
    }

    let request = GenerationRequest {
        locale: args
            .locale
            .unwrap_or_else(|| settings.generation.default_locale.clone()),
        seed: args.seed,
        average_likes: args.average_likes,
        average_reviews: args.average_reviews,
        start: args.start,
        count: args.count,
    };

    if !LocaleRegistry::builtin().contains(&request.locale) {
        tracing::warn!(
            locale = %request.locale,
            fallback = LocaleRegistry::builtin().fallback_tag(),
            "unknown locale; using fallback templates"
        );
    }

    let workers = args
        .workers
        .or_else(|| std::thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get);

    tracing::info!(
        locale = %request.locale,
        seed = request.seed,
        start = request.start,
        count = request.count,
        workers,
        "generating books"
    );
    let books = generate_parallel(&request, workers);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, &books).context("failed to write JSON")?;
            writeln!(writer)?;
        }
        Format::Csv => export::write_csv(&mut writer, &books).context("failed to write CSV")?,
    }
    writer.flush().context("failed to flush output")?;

    tracing::info!(rows = books.len(), "done");
    Ok(())
}
