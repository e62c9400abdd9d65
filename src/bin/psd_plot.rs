use clap::{Parser, ValueEnum};
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a log-log noise curve from a PSD CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/psd.png")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = Channel::Both)]
    channel: Channel,
    /// Plot the amplitude spectral density sqrt(PSD) instead of the PSD
    #[arg(long, default_value_t = false)]
    asd: bool,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    #[arg(long, default_value = "Instrument noise")]
    title: String,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq)]
enum Channel {
    Ae,
    Xyz,
    Both,
}

#[derive(Debug, Clone, Copy)]
struct Row {
    frequency_hz: f64,
    ae: f64,
    xyz: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let rows = read_rows(&cli.input)?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!(
            "No positive PSD samples in the provided CSV"
        ));
    }

    let transform = |v: f64| if cli.asd { v.sqrt() } else { v };
    let mut series: Vec<(&str, RGBColor, Vec<(f64, f64)>)> = Vec::new();
    if cli.channel != Channel::Xyz {
        series.push((
            "AE",
            RGBColor(20, 90, 200),
            rows.iter().map(|r| (r.frequency_hz, transform(r.ae))).collect(),
        ));
    }
    if cli.channel != Channel::Ae {
        series.push((
            "XYZ",
            RGBColor(210, 100, 20),
            rows.iter().map(|r| (r.frequency_hz, transform(r.xyz))).collect(),
        ));
    }

    let (f_min, f_max) = bounds(rows.iter().map(|r| r.frequency_hz));
    let (y_min, y_max) = bounds(series.iter().flat_map(|(_, _, pts)| pts.iter().map(|p| p.1)));
    let (f_min, f_max) = widen(f_min, f_max);
    let (y_min, y_max) = widen(y_min, y_max);
    log::debug!(
        "plotting {} rows, f in [{f_min:e}, {f_max:e}], y in [{y_min:e}, {y_max:e}]",
        rows.len()
    );

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(cli.title.clone(), caption_font)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d((f_min..f_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc(if cli.asd { "ASD (1/√Hz)" } else { "PSD (1/Hz)" })
        .label_style(label_font.clone())
        .x_label_formatter(&|v| format!("{v:.0e}"))
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .draw()?;

    for (label, color, points) in series {
        chart
            .draw_series(LineSeries::new(
                points,
                ShapeStyle::from(&color).stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(label_font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_rows(path: &str) -> anyhow::Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let freq_idx = column("frequency_hz")?;
    let ae_idx = column("psd_ae")?;
    let xyz_idx = column("psd_xyz")?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let parse = |idx: usize| -> f64 { r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN) };
        let row = Row {
            frequency_hz: parse(freq_idx),
            ae: parse(ae_idx),
            xyz: parse(xyz_idx),
        };
        // Log axes need strictly positive values.
        if [row.frequency_hz, row.ae, row.xyz]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
        {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Pad a positive range by a factor of two on each side so flat or single-point data
/// still yields a drawable log axis.
fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo * 1.000_001 {
        (lo, hi)
    } else {
        (lo * 0.5, hi * 2.0)
    }
}
