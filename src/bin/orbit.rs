use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gwspace_detectors::export::{orbit, summary, writer_for_path};
use gwspace_detectors::orbits::{arm_lengths, sample_positions};
use gwspace_detectors::scenario;
use gwspace_detectors::units::days_to_seconds;

/// Upper bound on the number of sampled instants in one run.
const MAX_SAMPLES: usize = 10_000_000;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sample spacecraft positions of a detector constellation as CSV"
)]
struct Cli {
    /// Detector name (case-insensitive), looked up in the catalog then the presets
    #[arg(long, default_value = "LISA")]
    detector: String,

    /// Optional detector catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Start time in seconds since the model epoch
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Span to sample in days
    #[arg(long, default_value_t = 365.0)]
    days: f64,

    /// Sampling step in seconds
    #[arg(long, default_value_t = 86_400.0)]
    step: f64,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Also write a `<stem>_summary.json` arm-length digest next to the output
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let count = sample_count(cli.days, cli.step)?;
    if cli.summary && cli.output == PathBuf::from("-") {
        anyhow::bail!("--summary needs a file --output");
    }

    let detector = scenario::resolve_detector(cli.catalog.as_deref(), &cli.detector)?;
    log::info!(
        "sampling {} ({} orbit) at {} instants",
        detector.name(),
        detector.orbit_model(),
        count
    );

    let samples = sample_positions(&detector.config().orbit, cli.start, cli.step, count);
    let arms: Vec<(f64, [f64; 3])> = samples
        .iter()
        .map(|s| (s.time_s, arm_lengths(&s.positions)))
        .collect();

    let mut writer = writer_for_path(&cli.output)?;
    orbit::write_header(writer.as_mut())?;
    for (sample, (_, arms_m)) in samples.iter().zip(&arms) {
        orbit::Record {
            time_s: sample.time_s,
            positions: sample.positions,
            arm_lengths: *arms_m,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if cli.summary {
        let meta = summary::Metadata {
            detector: detector.name(),
            model: detector.orbit_model(),
            start_s: cli.start,
            step_s: cli.step,
        };
        let path = summary::write_orbit_summary(&cli.output, &meta, &arms)?;
        log::info!("wrote summary {}", path.display());
    }
    Ok(())
}

/// Number of instants covering `days` at `step_s` spacing, both endpoints included.
fn sample_count(days: f64, step_s: f64) -> anyhow::Result<usize> {
    if !(step_s.is_finite() && step_s > 0.0) {
        anyhow::bail!("step must be finite and positive (got {step_s})");
    }
    if !(days.is_finite() && days >= 0.0) {
        anyhow::bail!("days must be finite and non-negative (got {days})");
    }
    let steps = (days_to_seconds(days) / step_s).floor();
    if steps >= MAX_SAMPLES as f64 {
        anyhow::bail!(
            "{days} days at {step_s} s steps exceeds the limit of {MAX_SAMPLES} samples"
        );
    }
    (steps as usize)
        .checked_add(1)
        .ok_or_else(|| anyhow::anyhow!("sample count overflow"))
}
