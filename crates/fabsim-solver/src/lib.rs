//! Process models for fabsim.
//!
//! This crate provides:
//! - Deal–Grove thermal oxide growth
//! - Arrhenius diffusion coefficients
//! - Dopant profile generators (constant-source erfc, limited-source Gaussian,
//!   as-implanted Gaussian)
//! - Anneal broadening by FFT convolution with a Gaussian kernel
//! - Profile combination with a solid-solubility ceiling
//! - Junction depth extraction and profile metrics
//!
//! Every function is pure: inputs are borrowed, outputs are new values.

pub mod anneal;
pub mod combine;
pub mod diffusivity;
pub mod junction;
pub mod metrics;
pub mod oxidation;
pub mod transport;

pub use anneal::{GaussianKernel, anneal_broaden, anneal_sigma_cm};
pub use combine::combine;
pub use diffusivity::{Arrhenius, Dopant, diffusion_coefficient};
pub use fabsim_core::{ConcentrationProfile, DepthAxis, Error, Result};
pub use junction::{junction_depth, junction_index};
pub use metrics::{Peak, peak, retained_dose, sheet_resistance};
pub use oxidation::{RateConstants, deal_grove_thickness, growth_time};
pub use transport::{
    ConstantSource, ImplantParameters, LimitedSource, constant_source_erfc, implant_gaussian,
    limited_source_gaussian,
};
