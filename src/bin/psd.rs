use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gwspace_detectors::export::{psd, writer_for_path};
use gwspace_detectors::noise::{log_spaced_frequencies, psd_curve};
use gwspace_detectors::scenario;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write the analytic instrument noise PSD of a detector as CSV"
)]
struct Cli {
    /// Detector name (case-insensitive), looked up in the catalog then the presets
    #[arg(long, default_value = "LISA")]
    detector: String,

    /// Optional detector catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Lowest frequency in Hz
    #[arg(long, default_value_t = 1.0e-5)]
    fmin: f64,

    /// Highest frequency in Hz
    #[arg(long, default_value_t = 1.0)]
    fmax: f64,

    /// Number of log-spaced frequency bins
    #[arg(long, default_value_t = 1000)]
    points: usize,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !(cli.fmin > 0.0 && cli.fmax > cli.fmin) {
        anyhow::bail!(
            "frequency range must satisfy 0 < fmin < fmax (got {} .. {})",
            cli.fmin,
            cli.fmax
        );
    }

    let detector = scenario::resolve_detector(cli.catalog.as_deref(), &cli.detector)?;
    log::info!(
        "evaluating {} PSD over {} bins in [{:e}, {:e}] Hz",
        detector.name(),
        cli.points,
        cli.fmin,
        cli.fmax
    );

    let freqs = log_spaced_frequencies(cli.fmin, cli.fmax, cli.points);
    let curve = psd_curve(&detector.config().noise, &freqs);

    let mut writer = writer_for_path(&cli.output)?;
    psd::write_header(writer.as_mut())?;
    for sample in &curve {
        psd::Record {
            frequency_hz: sample.frequency_hz,
            ae: sample.ae,
            xyz: sample.xyz,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;
    Ok(())
}
