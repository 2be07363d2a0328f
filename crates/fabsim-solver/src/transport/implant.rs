//! As-implanted Gaussian ion profile.

use std::f64::consts::PI;

use fabsim_core::constants::IMPLANT_UM_TO_CM_SCALE;
use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};

use super::evaluate;

/// Gaussian implant profile before any anneal:
/// `C(x) = dose / (sqrt(2π)·ΔR) · exp(−½·((x − Rp)/ΔR)²) · 1e4`.
///
/// `dose` is in atoms/cm², `rp_um` (projected range), `dr_um` (straggle) and
/// the depths are in μm. Normalising by ΔR in μm gives an areal dose density
/// per micrometre of implant axis; the factor
/// [`IMPLANT_UM_TO_CM_SCALE`] converts it to atoms/cm³ assuming a unit
/// cross-sectional area in the perpendicular dimensions. The peak sits at
/// `x = Rp` and integrating over depth in cm returns the dose.
///
/// Precondition: `dr_um > 0`.
pub fn implant_gaussian(dose: f64, rp_um: f64, dr_um: f64, axis: &DepthAxis) -> ConcentrationProfile {
    let peak = dose / ((2.0 * PI).sqrt() * dr_um) * IMPLANT_UM_TO_CM_SCALE;
    evaluate(axis, |x_um| {
        let u = (x_um - rp_um) / dr_um;
        peak * (-0.5 * u * u).exp()
    })
}

/// Implant conditions defining the as-implanted profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplantParameters {
    /// Implanted dose (atoms/cm²).
    pub dose: f64,
    /// Projected range Rp (μm).
    pub projected_range_um: f64,
    /// Straggle ΔR (μm).
    pub straggle_um: f64,
}

impl ImplantParameters {
    pub fn new(dose: f64, projected_range_um: f64, straggle_um: f64) -> Result<Self> {
        Ok(Self {
            dose: validate::non_negative("dose", dose)?,
            projected_range_um: validate::non_negative("projected_range", projected_range_um)?,
            straggle_um: validate::positive("straggle", straggle_um)?,
        })
    }

    /// Peak concentration (atoms/cm³) at the projected range.
    pub fn peak_concentration(&self) -> f64 {
        self.dose / ((2.0 * PI).sqrt() * self.straggle_um) * IMPLANT_UM_TO_CM_SCALE
    }

    pub fn profile(&self, axis: &DepthAxis) -> ConcentrationProfile {
        implant_gaussian(self.dose, self.projected_range_um, self.straggle_um, axis)
    }
}
