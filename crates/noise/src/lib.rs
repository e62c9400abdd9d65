//! Analytic instrument noise power spectral densities.
//!
//! The PSD is given in two channel bases: the `AE` pair of orthogonal TDI
//! combinations and the `XYZ` Michelson-like combinations. Frequencies are in Hz and
//! must be strictly positive; nothing here checks that.

use std::f64::consts::PI;

use gws_config::{NoiseConfig, RedNoiseConfig};
use serde::Serialize;

/// PSD of one frequency bin in both channel bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PsdPair {
    pub ae: f64,
    pub xyz: f64,
}

/// A PSD evaluation tagged with its frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PsdSample {
    pub frequency_hz: f64,
    pub ae: f64,
    pub xyz: f64,
}

/// Low-frequency growth factor of the acceleration noise,
/// `scale·((f₁/f)^10 + (f₂/f)^2)`.
#[inline]
pub fn red_noise_correction(red: &RedNoiseConfig, frequency_hz: f64) -> f64 {
    let steep = red.steep_knee_hz / frequency_hz;
    let shallow = red.knee_hz / frequency_hz;
    red.scale * (steep.powi(10) + shallow * shallow)
}

/// Single-link transfer response `sin²(f / f*)`.
#[inline]
pub fn single_link_transfer(frequency_hz: f64, transfer_frequency_hz: f64) -> f64 {
    let s = (frequency_hz / transfer_frequency_hz).sin();
    s * s
}

/// Half the local noise plus the red-corrected acceleration noise converted to
/// displacement, `S_loc/2 + S_acc/(2πf)^4·(1 + red)`.
#[inline]
pub fn acceleration_term(config: &NoiseConfig, frequency_hz: f64) -> f64 {
    let omega = 2.0 * PI * frequency_hz;
    let red = red_noise_correction(&config.red_noise, frequency_hz);
    config.local_noise / 2.0 + config.acceleration_noise / omega.powi(4) * (1.0 + red)
}

/// Instrument noise PSD at `frequency_hz` in the `AE` and `XYZ` channel bases.
pub fn instrument_noise(config: &NoiseConfig, frequency_hz: f64) -> PsdPair {
    let x = frequency_hz / config.transfer_frequency_hz;
    let (sin_x, cos_x) = x.sin_cos();
    let trans = sin_x * sin_x;
    let position = config.position_noise + config.local_noise;
    let acceleration = acceleration_term(config, frequency_hz);
    let arm_norm = (2.0 * config.arm_length_m).powi(2);

    let ae = 16.0 / 3.0
        * trans
        * ((2.0 + cos_x) * position
            + 2.0 * (3.0 + 2.0 * cos_x + (2.0 * x).cos()) * acceleration)
        / arm_norm;

    let xyz = 4.0 * trans * (4.0 * position + 8.0 * (1.0 + cos_x * cos_x) * acceleration) / arm_norm;

    PsdPair { ae, xyz }
}

/// `count` frequencies spaced evenly in log between `min_hz` and `max_hz` inclusive.
pub fn log_spaced_frequencies(min_hz: f64, max_hz: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min_hz],
        _ => {
            let lo = min_hz.ln();
            let step = (max_hz.ln() - lo) / (count - 1) as f64;
            (0..count)
                .map(|i| match i {
                    0 => min_hz,
                    i if i == count - 1 => max_hz,
                    _ => (lo + step * i as f64).exp(),
                })
                .collect()
        }
    }
}

/// Evaluate the PSD on a frequency grid. Non-positive or non-finite frequencies are
/// dropped from the output.
pub fn psd_curve(config: &NoiseConfig, frequencies_hz: &[f64]) -> Vec<PsdSample> {
    let mut dropped = 0usize;
    let samples: Vec<PsdSample> = frequencies_hz
        .iter()
        .filter(|&&f| {
            let keep = f.is_finite() && f > 0.0;
            if !keep {
                dropped += 1;
            }
            keep
        })
        .map(|&f| {
            let PsdPair { ae, xyz } = instrument_noise(config, f);
            PsdSample {
                frequency_hz: f,
                ae,
                xyz,
            }
        })
        .collect();
    if dropped > 0 {
        log::warn!("dropped {dropped} non-positive frequencies from PSD grid");
    }
    samples
}
