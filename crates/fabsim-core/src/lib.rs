//! Core data types for fabsim.
//!
//! This crate provides:
//! - Physical constants used by the process models
//! - Named unit conversions (nm, μm, cm, minutes, seconds, °C, K)
//! - [`DepthAxis`]: validated, strictly increasing depth samples (μm)
//! - [`ConcentrationProfile`]: dopant concentration per depth sample (atoms/cm³)
//! - The shared [`Error`] type and parameter validation helpers

pub mod axis;
pub mod constants;
pub mod error;
pub mod profile;
pub mod units;
pub mod validate;

pub use axis::DepthAxis;
pub use error::{Error, Result};
pub use profile::ConcentrationProfile;
