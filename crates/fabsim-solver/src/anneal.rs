//! Anneal broadening of an existing dopant profile.
//!
//! A thermal step of duration `t` at diffusivity `D` spreads a profile by
//! convolution with a Gaussian of standard deviation `σ = sqrt(2·D·t)`. The
//! convolution is done in the frequency domain (O(n log n)) on the profile's own
//! samples, which makes it **circular**: dopant that diffuses past one edge of
//! the depth axis re-enters from the other edge.
//!
//! Results are only meaningful when the axis spans well beyond the profile
//! (at least ~6σ of clearance) and the profile is negligible near both edges.
//! This is not checked; size the axis accordingly.
//!
//! The kernel is sampled on the axis spacing, centred on sample `n/2` and
//! normalised to unit area. It is rotated so that its centre sits at index 0
//! before transforming, so the broadened profile stays in place rather than
//! being shifted by half the domain.

use std::sync::Arc;

use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Diffusion length of an anneal, `sqrt(2·D·t)` (cm).
pub fn anneal_sigma_cm(d: f64, t_s: f64) -> f64 {
    (2.0 * d * t_s).sqrt()
}

/// Gaussian kernel weights in centred layout (centre at index `n/2`).
///
/// Weights sum to one, i.e. the sampled density integrates to unit area when
/// multiplied by the spacing.
fn centered_weights(n: usize, dx_cm: f64, sigma_cm: f64) -> Vec<f64> {
    let center = (n / 2) as f64;
    let mut weights: Vec<f64> = (0..n)
        .map(|k| {
            let u = (k as f64 - center) * dx_cm / sigma_cm;
            (-0.5 * u * u).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Precomputed Gaussian broadening kernel for one axis and one σ.
///
/// Holds the FFT plans and the kernel spectrum so several profiles on the same
/// axis can be annealed without re-planning.
pub struct GaussianKernel {
    sigma_cm: f64,
    len: usize,
    /// `None` for σ = 0, where broadening is the identity.
    spectrum: Option<Vec<Complex<f64>>>,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl std::fmt::Debug for GaussianKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaussianKernel")
            .field("sigma_cm", &self.sigma_cm)
            .field("len", &self.len)
            .field("identity", &self.spectrum.is_none())
            .finish()
    }
}

impl GaussianKernel {
    /// Build the kernel for `axis` (must be uniformly spaced) and `sigma_cm`.
    pub fn new(axis: &DepthAxis, sigma_cm: f64) -> Result<Self> {
        validate::non_negative("sigma", sigma_cm)?;
        axis.require_uniform()?;

        let n = axis.len();
        let dx_cm = axis.spacing_cm();

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);

        log::debug!(
            "anneal kernel: n={}, dx={:e} cm, sigma={:e} cm, span/sigma={:.1}",
            n,
            dx_cm,
            sigma_cm,
            axis.spacing_cm() * (n - 1) as f64 / sigma_cm
        );

        let spectrum = if sigma_cm == 0.0 {
            None
        } else {
            let mut weights = centered_weights(n, dx_cm, sigma_cm);
            weights.rotate_left(n / 2);
            let mut buf: Vec<Complex<f64>> =
                weights.iter().map(|&w| Complex::new(w, 0.0)).collect();
            forward.process(&mut buf);
            Some(buf)
        };

        Ok(Self {
            sigma_cm,
            len: n,
            spectrum,
            forward,
            inverse,
        })
    }

    /// Kernel standard deviation (cm).
    pub fn sigma_cm(&self) -> f64 {
        self.sigma_cm
    }

    /// Number of samples the kernel was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Circularly convolve `profile` with the kernel.
    pub fn apply(&self, profile: &ConcentrationProfile) -> Result<ConcentrationProfile> {
        validate::same_len(self.len, profile.len())?;

        let Some(spectrum) = &self.spectrum else {
            return Ok(profile.clone());
        };

        let mut buf: Vec<Complex<f64>> = profile.iter().map(|&c| Complex::new(c, 0.0)).collect();
        self.forward.process(&mut buf);
        for (b, k) in buf.iter_mut().zip(spectrum) {
            *b *= *k;
        }
        self.inverse.process(&mut buf);

        // rustfft leaves the inverse unnormalised.
        let scale = 1.0 / self.len as f64;
        Ok(buf.iter().map(|z| z.re * scale).collect())
    }
}

/// Broaden `profile` by an anneal at diffusivity `d` (cm²/s) for `t_s`
/// seconds on a uniformly spaced `axis`.
///
/// Total dose is conserved (circular convolution with a unit-area kernel) and
/// the second moment grows by `2·D·t`. `D·t = 0` returns the profile unchanged.
/// Small negative residues from floating-point round-off are not clamped.
pub fn anneal_broaden(
    profile: &ConcentrationProfile,
    d: f64,
    t_s: f64,
    axis: &DepthAxis,
) -> Result<ConcentrationProfile> {
    validate::same_len(axis.len(), profile.len())?;
    validate::non_negative("diffusivity", d)?;
    validate::non_negative("anneal_time", t_s)?;

    GaussianKernel::new(axis, anneal_sigma_cm(d, t_s))?.apply(profile)
}
