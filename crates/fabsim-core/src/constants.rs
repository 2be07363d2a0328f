//! Physical and numerical constants.

/// Boltzmann constant (eV/K).
pub const BOLTZMANN_EV_PER_K: f64 = 8.617e-5;

/// 0 °C expressed in kelvin.
pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Centimetres per micrometre.
pub const CM_PER_UM: f64 = 1e-4;

/// Micrometres per nanometre.
pub const UM_PER_NM: f64 = 1e-3;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Lower bound applied to the Deal–Grove linear rate constant B/A.
///
/// Keeps `A = B / (B/A)` finite when the linear rate is zero or negligible.
/// This is a numerical clamp, not a physical regime.
pub const DEAL_GROVE_LINEAR_RATE_FLOOR: f64 = 1e-12;

/// Scale applied to the implant Gaussian.
///
/// The implant profile is normalised per micrometre of implant axis while the
/// dose is areal (cm⁻²). Multiplying by 1e4 (μm per cm) converts the areal dose
/// density per micrometre into a volume concentration in cm⁻³, assuming a unit
/// cross-sectional area in the perpendicular dimensions.
pub const IMPLANT_UM_TO_CM_SCALE: f64 = 1e4;
