//! Limited-source (drive-in) diffusion.

use std::f64::consts::PI;

use fabsim_core::units::um_to_cm;
use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};

use super::evaluate;

/// Profile of a fixed dose `q` (atoms/cm²) spreading from a thin surface
/// layer that is not replenished:
/// `C(x) = Q / sqrt(π·D·t) · exp(−x² / (4·D·t))`.
///
/// `d` is in cm²/s, `t_s` in s, depths are converted from μm to cm.
/// Precondition: `D·t > 0` (the profile is a delta function at `D·t = 0`).
pub fn limited_source_gaussian(q: f64, d: f64, t_s: f64, axis: &DepthAxis) -> ConcentrationProfile {
    let dt = d * t_s;
    let peak = q / (PI * dt).sqrt();
    let four_dt = 4.0 * dt;
    evaluate(axis, |x_um| {
        let x_cm = um_to_cm(x_um);
        peak * (-(x_cm * x_cm) / four_dt).exp()
    })
}

/// Validated limited-source diffusion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitedSource {
    /// Total dose Q (atoms/cm²).
    pub dose: f64,
    /// Diffusivity (cm²/s).
    pub diffusivity: f64,
    /// Diffusion time (s).
    pub time_s: f64,
}

impl LimitedSource {
    /// Dose may be zero; diffusivity and time must be positive.
    pub fn new(dose: f64, diffusivity: f64, time_s: f64) -> Result<Self> {
        Ok(Self {
            dose: validate::non_negative("dose", dose)?,
            diffusivity: validate::positive("diffusivity", diffusivity)?,
            time_s: validate::positive("diffusion_time", time_s)?,
        })
    }

    /// Surface (peak) concentration `Q / sqrt(π·D·t)` (atoms/cm³).
    pub fn surface_concentration(&self) -> f64 {
        self.dose / (PI * self.diffusivity * self.time_s).sqrt()
    }

    pub fn profile(&self, axis: &DepthAxis) -> ConcentrationProfile {
        limited_source_gaussian(self.dose, self.diffusivity, self.time_s, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::retained_dose;

    const Q: f64 = 1e13;
    const D: f64 = 1e-14;
    const T: f64 = 3600.0;

    #[test]
    fn test_peak_at_surface() {
        let axis = DepthAxis::linspace(0.0, 2.0, 2001).unwrap();
        let src = LimitedSource::new(Q, D, T).unwrap();
        let p = src.profile(&axis);
        let expected = Q / (PI * D * T).sqrt();
        assert!((p[0] - expected).abs() <= 1e-12 * expected);
        assert_eq!(p.argmax().map(|(i, _)| i), Some(0));
        assert_eq!(src.surface_concentration(), expected);
    }

    #[test]
    fn test_half_space_integral_matches_dose() {
        let axis = DepthAxis::linspace(0.0, 2.0, 2001).unwrap();
        let p = limited_source_gaussian(Q, D, T, &axis);
        let dose = retained_dose(&axis, &p).unwrap();
        assert!((dose - Q).abs() / Q < 0.02, "integrated dose {:e}", dose);
    }

    #[test]
    fn test_zero_dose_is_flat_zero() {
        let axis = DepthAxis::linspace(0.0, 1.0, 101).unwrap();
        let p = LimitedSource::new(0.0, D, T).unwrap().profile(&axis);
        assert!(p.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_rejects_zero_diffusion() {
        assert!(LimitedSource::new(Q, 0.0, T).is_err());
        assert!(LimitedSource::new(Q, D, 0.0).is_err());
        assert!(LimitedSource::new(-Q, D, T).is_err());
    }
}
