//! Parameter validation helpers.
//!
//! The numeric kernels never validate their inputs. These helpers back the
//! checked constructors that wrap them.

use crate::constants::ZERO_CELSIUS_IN_KELVIN;
use crate::error::{Error, Result};

/// Require a finite value `>= 0`.
pub fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

/// Require a finite value `> 0`.
pub fn positive(name: &'static str, value: f64) -> Result<f64> {
    non_negative(name, value)?;
    if value == 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Require a finite temperature above absolute zero (°C).
pub fn above_absolute_zero(name: &'static str, celsius: f64) -> Result<f64> {
    if !celsius.is_finite() || celsius <= -ZERO_CELSIUS_IN_KELVIN {
        return Err(Error::InvalidParameter {
            name,
            value: celsius,
            reason: "must be above absolute zero",
        });
    }
    Ok(celsius)
}

/// Require two sequences to have the same length.
pub fn same_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}
