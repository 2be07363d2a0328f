//! Dopant profile generators.
//!
//! Each generator maps a [`DepthAxis`] (μm) to a [`ConcentrationProfile`]
//! (atoms/cm³). Samples are evaluated independently; with the `parallel`
//! feature they are evaluated on the rayon thread pool with identical results.
//!
//! The free functions are the unchecked numeric kernels. The parameter structs
//! ([`ConstantSource`], [`LimitedSource`], [`ImplantParameters`]) validate
//! their inputs on construction and then call the kernels.

mod constant_source;
mod implant;
mod limited_source;

pub use constant_source::{ConstantSource, constant_source_erfc};
pub use implant::{ImplantParameters, implant_gaussian};
pub use limited_source::{LimitedSource, limited_source_gaussian};

use fabsim_core::{ConcentrationProfile, DepthAxis};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `f(depth_um)` at every axis sample.
pub(crate) fn evaluate<F>(axis: &DepthAxis, f: F) -> ConcentrationProfile
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let values: Vec<f64> = axis.as_slice().par_iter().map(|&x| f(x)).collect();
    #[cfg(not(feature = "parallel"))]
    let values: Vec<f64> = axis.as_slice().iter().map(|&x| f(x)).collect();

    log::trace!("evaluated profile over {} depth samples", values.len());
    ConcentrationProfile::from_vec(values)
}
