//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod psd {
    use std::io::{self, Write};

    pub const HEADER: &str = "frequency_hz,psd_ae,psd_xyz";

    /// Write the PSD CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the PSD exporter.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub frequency_hz: f64,
        pub ae: f64,
        pub xyz: f64,
    }

    impl Record {
        /// Serialize the record to CSV in scientific notation, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.9e},{:.9e},{:.9e}",
                self.frequency_hz, self.ae, self.xyz
            )
        }
    }
}

pub mod orbit {
    use std::io::{self, Write};

    pub const HEADER: &str = "time_s,sc0_x_m,sc0_y_m,sc0_z_m,sc1_x_m,sc1_y_m,sc1_z_m,sc2_x_m,sc2_y_m,sc2_z_m,arm0_m,arm1_m,arm2_m";

    /// Write the orbit CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the orbit exporter.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub time_s: f64,
        pub positions: [[f64; 3]; 3],
        pub arm_lengths: [f64; 3],
    }

    impl Record {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let [a, b, c] = self.positions;
            let [l0, l1, l2] = self.arm_lengths;
            writeln!(
                writer,
                "{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
                self.time_s, a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2], l0, l1, l2,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::{Path, PathBuf};

    /// Arm-length extremes for one time bucket.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct ArmDigest {
        pub day_index: usize,
        pub min_arm_m: f64,
        pub max_arm_m: f64,
    }

    /// Metadata describing an orbit sampling run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub detector: &'a str,
        pub model: &'a str,
        pub start_s: f64,
        pub step_s: f64,
    }

    #[derive(Serialize)]
    struct OrbitSidecar<'a> {
        detector: &'a str,
        model: &'a str,
        start_s: f64,
        step_s: f64,
        sample_count: usize,
        min_arm_m: f64,
        max_arm_m: f64,
        daily: Vec<ArmDigest>,
    }

    /// Sidecar path next to `output`: `<stem>_summary.json`.
    pub fn sidecar_path(output: &Path) -> PathBuf {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("orbit");
        parent.join(format!("{}_summary.json", stem))
    }

    /// Write a JSON summary of the arm lengths seen in an orbit run. `samples` holds
    /// `(time_s, arm_lengths)` pairs in time order.
    pub fn write_orbit_summary(
        output: &Path,
        meta: &Metadata<'_>,
        samples: &[(f64, [f64; 3])],
    ) -> io::Result<PathBuf> {
        let path = sidecar_path(output);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let daily = aggregate_daily(meta.start_s, samples);
        let min_arm_m = daily.iter().map(|d| d.min_arm_m).fold(f64::INFINITY, f64::min);
        let max_arm_m = daily
            .iter()
            .map(|d| d.max_arm_m)
            .fold(f64::NEG_INFINITY, f64::max);

        let sidecar = OrbitSidecar {
            detector: meta.detector,
            model: meta.model,
            start_s: meta.start_s,
            step_s: meta.step_s,
            sample_count: samples.len(),
            min_arm_m,
            max_arm_m,
            daily,
        };
        to_writer_pretty(File::create(&path)?, &sidecar)?;
        Ok(path)
    }

    /// Bucket samples by day since `start_s`, keeping arm-length extremes per day.
    pub fn aggregate_daily(start_s: f64, samples: &[(f64, [f64; 3])]) -> Vec<ArmDigest> {
        let seconds_per_day = 86_400.0;
        let mut daily: Vec<ArmDigest> = Vec::new();
        for (time_s, arms) in samples {
            let day_index = ((time_s - start_s) / seconds_per_day).floor().max(0.0) as usize;
            let lo = arms.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = arms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            match daily.last_mut() {
                Some(last) if last.day_index == day_index => {
                    last.min_arm_m = last.min_arm_m.min(lo);
                    last.max_arm_m = last.max_arm_m.max(hi);
                }
                _ => daily.push(ArmDigest {
                    day_index,
                    min_arm_m: lo,
                    max_arm_m: hi,
                }),
            }
        }
        daily
    }
}
