/// Empirical run-up relationships.
///
/// Two uses: fit a straight line to R2/Hs against ε across the observed
/// records, and score published run-up formulas against the observations.
///
/// # Formulas
///
/// - Hunt (1959): R2 = C·ε·Hs
/// - Stockdon et al. (2006), with H₀ = Hs and L₀ the deep-water wavelength:
///   - ε < 0.3 (dissipative): R2 = 0.043·sqrt(H₀L₀)
///   - otherwise: R2 = 1.1·(0.35·β·sqrt(H₀L₀) + sqrt(H₀L₀·(0.563β² + 0.004))/2)

use serde::Serialize;

use crate::analysis::iribarren::deepwater_wavelength;
use crate::error::{Result, RunupError};
use crate::model::AnalyzedRecord;

/// Below this ε Stockdon switches to the dissipative-only expression.
const STOCKDON_DISSIPATIVE_LIMIT: f64 = 0.3;

/// Least-squares line y = slope·x + intercept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares of normalized run-up (R2/Hs) on ε.
pub fn fit_normalized_runup(records: &[AnalyzedRecord]) -> Result<LinearFit> {
    if records.len() < 2 {
        return Err(RunupError::InsufficientData(format!(
            "linear fit needs at least 2 records, got {}",
            records.len()
        )));
    }

    let n = records.len() as f64;
    let mean_x = records.iter().map(|r| r.iribarren).sum::<f64>() / n;
    let mean_y = records.iter().map(|r| r.normalized_runup).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for r in records {
        let dx = r.iribarren - mean_x;
        let dy = r.normalized_runup - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(RunupError::InsufficientData(
            "all records share the same Iribarren number".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // A perfectly flat response is fully explained by the line.
    let r_squared = if syy == 0.0 { 1.0 } else { sxy * sxy / (sxx * syy) };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
        n: records.len(),
    })
}

/// Published run-up parameterisations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunupModel {
    Hunt { coefficient: f64 },
    Stockdon,
}

impl RunupModel {
    pub fn name(&self) -> &'static str {
        match self {
            RunupModel::Hunt { .. } => "hunt1959",
            RunupModel::Stockdon => "stockdon2006",
        }
    }

    /// Predicted R2 (m) for an analyzed record.
    pub fn predict(&self, analyzed: &AnalyzedRecord) -> Result<f64> {
        let record = &analyzed.record;
        match *self {
            RunupModel::Hunt { coefficient } => Ok(coefficient * analyzed.iribarren * record.hs),
            RunupModel::Stockdon => {
                let l0 = deepwater_wavelength(record.tp)?;
                let h0l0 = (record.hs * l0).sqrt();
                if analyzed.iribarren < STOCKDON_DISSIPATIVE_LIMIT {
                    return Ok(0.043 * h0l0);
                }
                let setup = 0.35 * record.beta * h0l0;
                let swash = (record.hs * l0 * (0.563 * record.beta.powi(2) + 0.004)).sqrt() / 2.0;
                Ok(1.1 * (setup + swash))
            }
        }
    }
}

/// Skill of a model against observed R2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSkill {
    pub model: String,
    pub n: usize,
    /// Mean of predicted − observed (m).
    pub bias: f64,
    pub rmse: f64,
}

pub fn evaluate_model(model: &RunupModel, records: &[AnalyzedRecord]) -> Result<ModelSkill> {
    if records.is_empty() {
        return Err(RunupError::InsufficientData(format!(
            "no records to evaluate {}",
            model.name()
        )));
    }

    let mut sum_err = 0.0;
    let mut sum_sq = 0.0;
    for r in records {
        let err = model.predict(r)? - r.record.r2;
        sum_err += err;
        sum_sq += err * err;
    }

    let n = records.len() as f64;
    Ok(ModelSkill {
        model: model.name().to_string(),
        n: records.len(),
        bias: sum_err / n,
        rmse: (sum_sq / n).sqrt(),
    })
}
