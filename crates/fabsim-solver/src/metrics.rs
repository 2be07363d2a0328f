//! Scalar metrics derived from profiles.
//!
//! These are the values handed to reporting: peak concentration and its depth,
//! retained dose, and metal sheet resistance.

use fabsim_core::units::um_to_cm;
use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};

/// Maximum of a profile and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index of the maximum.
    pub index: usize,
    /// Depth of the maximum (μm).
    pub depth_um: f64,
    /// Peak concentration (atoms/cm³).
    pub concentration: f64,
}

/// Peak concentration and its depth (argmax, first maximum on ties).
///
/// Returns `Ok(None)` only when every sample is NaN.
pub fn peak(axis: &DepthAxis, profile: &ConcentrationProfile) -> Result<Option<Peak>> {
    validate::same_len(axis.len(), profile.len())?;
    Ok(profile.argmax().map(|(index, concentration)| Peak {
        index,
        depth_um: axis.as_slice()[index],
        concentration,
    }))
}

/// Dose retained in the profile (atoms/cm²): trapezoidal integral of the
/// concentration over depth in cm.
pub fn retained_dose(axis: &DepthAxis, profile: &ConcentrationProfile) -> Result<f64> {
    validate::same_len(axis.len(), profile.len())?;
    let x = axis.as_slice();
    let c = profile.as_slice();
    let sum = x
        .windows(2)
        .zip(c.windows(2))
        .map(|(xw, cw)| 0.5 * (cw[0] + cw[1]) * um_to_cm(xw[1] - xw[0]))
        .sum();
    Ok(sum)
}

/// Sheet resistance (Ω/□) of a film with bulk resistivity `resistivity_ohm_m`
/// (Ω·m) and thickness `thickness_m` (m).
pub fn sheet_resistance(resistivity_ohm_m: f64, thickness_m: f64) -> f64 {
    resistivity_ohm_m / thickness_m
}
