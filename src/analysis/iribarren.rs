/// Surf similarity (Iribarren number) and beach-state classification.
///
/// ε = β / sqrt(H / λ₀) with λ₀ = g·T²/(2π) the deep-water wavelength.
/// All functions here are pure and validate their own domain, returning
/// `InvalidArgument` rather than producing NaN or infinity.

use std::f64::consts::PI;

use crate::error::{Result, RunupError};
use crate::model::{BeachType, RunupRecord, GRAVITY};

/// Deep-water wavelength λ₀ = g·T²/(2π) in metres for a period in seconds.
pub fn deepwater_wavelength(period: f64) -> Result<f64> {
    require_positive("period", period)?;
    finite("deep-water wavelength", GRAVITY * period * period / (2.0 * PI))
}

/// Iribarren number for a wave period (s), wave height (m) and beach slope.
pub fn iribarren(period: f64, wave_height: f64, slope: f64) -> Result<f64> {
    require_positive("wave height", wave_height)?;
    require_non_negative("slope", slope)?;
    let wavelength = deepwater_wavelength(period)?;
    finite("iribarren number", slope / (wave_height / wavelength).sqrt())
}

/// Ratio of observed run-up to significant wave height, r2 / hs.
pub fn normalized_runup(record: &RunupRecord) -> Result<f64> {
    require_positive("hs", record.hs)?;
    require_non_negative("r2", record.r2)?;
    finite("normalized run-up", record.r2 / record.hs)
}

/// Iribarren breakpoints between beach types.
///
/// Lower bounds are closed and upper bounds open: a value exactly at
/// `dissipative_below` is intermediate, exactly at `reflective_from` is
/// reflective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeachThresholds {
    pub dissipative_below: f64,
    pub reflective_from: f64,
}

impl Default for BeachThresholds {
    fn default() -> Self {
        Self {
            dissipative_below: 0.5,
            reflective_from: 1.5,
        }
    }
}

impl BeachThresholds {
    pub fn classify(&self, iribarren: f64) -> BeachType {
        if iribarren < self.dissipative_below {
            BeachType::Dissipative
        } else if iribarren < self.reflective_from {
            BeachType::Intermediate
        } else {
            BeachType::Reflective
        }
    }
}

impl BeachType {
    /// Classify with the standard 0.5 / 1.5 breakpoints.
    pub fn from_iribarren(iribarren: f64) -> Self {
        BeachThresholds::default().classify(iribarren)
    }
}

/// Checks every numeric field of a record against its physical domain.
pub fn validate_record(record: &RunupRecord) -> Result<()> {
    require_positive("hs", record.hs)?;
    require_positive("tp", record.tp)?;
    require_non_negative("beta", record.beta)?;
    require_non_negative("d50", record.d50)?;
    require_non_negative("r2", record.r2)?;
    if !record.roughness.is_finite() {
        return Err(RunupError::invalid(format!(
            "roughness must be finite, got {}",
            record.roughness
        )));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RunupError::invalid(format!("{} must be > 0, got {}", name, value)))
    }
}

/// Rejects results that overflowed or collapsed to 0/0.
fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RunupError::invalid(format!("{} is not finite ({})", name, value)))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RunupError::invalid(format!("{} must be >= 0, got {}", name, value)))
    }
}
