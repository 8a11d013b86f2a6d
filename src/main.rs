use anyhow::{Context, Result};
use clap::Parser;
use song_formatter::error::Error;
use song_formatter::formatter::SongFormatter;
use song_formatter::mapping::ArtistMapping;
use song_formatter::models::FormattedBatch;
use song_formatter::script::{ScriptPolicy, DEFAULT_ENGLISH_THRESHOLD};
use song_formatter::{logging, output, safety};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "song-formatter")]
#[command(about = "Reformat a 'Title - Artist' song list into a sorted 'Artist - Title' list")]
struct Args {
    #[arg(default_value = "paste.txt")]
    input: PathBuf,

    #[arg(default_value = "formatted_songs.txt")]
    output: PathBuf,

    /// Extra artist names as a JSON object {"source": "Display"}
    #[arg(long, env = "SONG_FORMATTER_MAPPING")]
    mapping: Option<PathBuf>,

    /// Use only the --mapping file, ignoring the built-in table
    #[arg(long, requires = "mapping")]
    replace_mapping: bool,

    /// Share of ASCII characters above which a name is left as-is
    #[arg(long, env = "SONG_FORMATTER_THRESHOLD", default_value_t = DEFAULT_ENGLISH_THRESHOLD, value_parser = parse_threshold)]
    english_threshold: f64,

    /// Write line counters as JSON
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Also print the formatted list to stdout
    #[arg(long)]
    print: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", value))
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}

fn load_mapping(args: &Args) -> Result<ArtistMapping> {
    let Some(path) = &args.mapping else {
        return Ok(ArtistMapping::builtin());
    };

    let extra = ArtistMapping::from_json_file(path)?;
    log::info!("Loaded {} artist names from {}", extra.len(), path.display());

    if args.replace_mapping {
        return Ok(extra);
    }
    let mut mapping = ArtistMapping::builtin();
    mapping.extend(extra);
    Ok(mapping)
}

fn write_stats(path: &Path, batch: &FormattedBatch) -> Result<()> {
    let json = serde_json::to_string_pretty(&batch.stats)?;
    output::write_atomic(path, &json)
        .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();

    let mapping = load_mapping(args).context("Failed to load artist mapping")?;
    let policy = ScriptPolicy::new(args.english_threshold);

    let text = output::read_input(&args.input)?;
    safety::validate_output_path(&args.output, &[args.input.as_path()])?;

    let batch = SongFormatter::new(&mapping, policy).format_text(&text);
    let contents = batch.to_text();

    output::write_atomic(&args.output, &contents).context("Failed to write output file")?;
    log::info!("Formatted songs have been saved to '{}'", args.output.display());

    if let Some(stats_path) = &args.stats {
        write_stats(stats_path, &batch)?;
    }

    if args.print && !contents.is_empty() {
        println!("{}", contents);
    }

    let stats = &batch.stats;
    log::info!("{:=<60}", "");
    log::info!("Formatting complete!");
    log::info!("  Songs: {}", stats.formatted);
    log::info!(
        "  Skipped: {} (blank {}, malformed {}, failed {})",
        stats.skipped(),
        stats.blank,
        stats.malformed,
        stats.failed
    );
    log::info!("  Elapsed: {}", format_duration(start.elapsed()));
    log::info!("{:=<60}", "");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(logging::level_for(args.verbose, args.quiet)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(Error::MissingInput { path }) => {
                log::error!("Input file '{}' not found.", path.display());
                ExitCode::from(2)
            }
            _ => {
                log::error!("An unexpected error occurred: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
