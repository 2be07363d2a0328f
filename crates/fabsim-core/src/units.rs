//! Unit conversions.
//!
//! Every conversion names its input and output unit. The process models mix
//! micrometres (depth axis), centimetres (diffusion physics), nanometres (oxide
//! thickness), minutes (oxidation rate constants) and seconds (diffusion time).

use crate::constants::{CM_PER_UM, SECONDS_PER_MINUTE, UM_PER_NM, ZERO_CELSIUS_IN_KELVIN};

/// Micrometres to centimetres.
#[inline]
pub fn um_to_cm(um: f64) -> f64 {
    um * CM_PER_UM
}

/// Centimetres to micrometres.
#[inline]
pub fn cm_to_um(cm: f64) -> f64 {
    cm / CM_PER_UM
}

/// Nanometres to micrometres.
#[inline]
pub fn nm_to_um(nm: f64) -> f64 {
    nm * UM_PER_NM
}

/// Micrometres to nanometres.
#[inline]
pub fn um_to_nm(um: f64) -> f64 {
    um / UM_PER_NM
}

/// Minutes to seconds.
#[inline]
pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * SECONDS_PER_MINUTE
}

/// Seconds to minutes.
#[inline]
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    seconds / SECONDS_PER_MINUTE
}

/// Degrees Celsius to kelvin.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + ZERO_CELSIUS_IN_KELVIN
}

/// Kelvin to degrees Celsius.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS_IN_KELVIN
}
