//! Constant-source (pre-deposition) diffusion.

use fabsim_core::units::um_to_cm;
use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};

use super::evaluate;

/// Profile from a source that holds the surface at `cs` for the whole step:
/// `C(x) = Cs · erfc(x / (2·sqrt(D·t)))`.
///
/// `d` is the diffusivity (cm²/s) and `t_s` the time (s); depths are converted
/// from μm to cm. `erfc` is evaluated directly (not as `1 − erf`) so the deep
/// tail keeps its relative accuracy. With `D·t = 0` nothing has diffused yet
/// and the result is the step `Cs` at `x ≤ 0`, zero beyond.
pub fn constant_source_erfc(cs: f64, d: f64, t_s: f64, axis: &DepthAxis) -> ConcentrationProfile {
    let dt = d * t_s;
    if dt == 0.0 {
        return evaluate(axis, |x_um| if x_um <= 0.0 { cs } else { 0.0 });
    }
    let two_sqrt_dt = 2.0 * dt.sqrt();
    evaluate(axis, |x_um| cs * libm::erfc(um_to_cm(x_um) / two_sqrt_dt))
}

/// Validated constant-source diffusion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource {
    /// Surface concentration Cs (atoms/cm³).
    pub surface_concentration: f64,
    /// Diffusivity (cm²/s).
    pub diffusivity: f64,
    /// Diffusion time (s).
    pub time_s: f64,
}

impl ConstantSource {
    pub fn new(surface_concentration: f64, diffusivity: f64, time_s: f64) -> Result<Self> {
        Ok(Self {
            surface_concentration: validate::non_negative(
                "surface_concentration",
                surface_concentration,
            )?,
            diffusivity: validate::non_negative("diffusivity", diffusivity)?,
            time_s: validate::non_negative("diffusion_time", time_s)?,
        })
    }

    /// Characteristic diffusion length `2·sqrt(D·t)` (cm).
    pub fn diffusion_length_cm(&self) -> f64 {
        2.0 * (self.diffusivity * self.time_s).sqrt()
    }

    pub fn profile(&self, axis: &DepthAxis) -> ConcentrationProfile {
        constant_source_erfc(self.surface_concentration, self.diffusivity, self.time_s, axis)
    }
}
