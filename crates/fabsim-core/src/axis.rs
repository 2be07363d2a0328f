//! Depth axis into the substrate.

use crate::error::{Error, Result};
use crate::units::um_to_cm;

/// Relative tolerance used by [`DepthAxis::is_uniform`] and
/// [`DepthAxis::require_uniform`].
pub const UNIFORM_SPACING_RTOL: f64 = 1e-6;

/// Ordered depth samples in micrometres, measured from the wafer surface.
///
/// Always holds at least two finite, strictly increasing samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthAxis {
    samples: Vec<f64>,
}

impl DepthAxis {
    /// Create `n` evenly spaced samples from `start_um` to `stop_um` inclusive.
    pub fn linspace(start_um: f64, stop_um: f64, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::AxisTooShort { len: n });
        }
        if !start_um.is_finite() {
            return Err(Error::InvalidParameter {
                name: "start_um",
                value: start_um,
                reason: "must be finite",
            });
        }
        if !stop_um.is_finite() || stop_um <= start_um {
            return Err(Error::InvalidParameter {
                name: "stop_um",
                value: stop_um,
                reason: "must be finite and greater than start_um",
            });
        }

        let step = (stop_um - start_um) / (n - 1) as f64;
        let mut samples: Vec<f64> = (0..n).map(|i| start_um + i as f64 * step).collect();
        // Pin the endpoint so the axis spans exactly [start, stop].
        samples[n - 1] = stop_um;

        Self::from_samples(samples)
    }

    /// Wrap existing samples, checking length, finiteness and ordering.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self> {
        if samples.len() < 2 {
            return Err(Error::AxisTooShort { len: samples.len() });
        }
        if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "depth_um",
                value: samples[index],
                reason: "must be finite",
            });
        }
        if let Some(i) = samples.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::NonMonotonicAxis { index: i + 1 });
        }
        Ok(Self { samples })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Depth samples in micrometres.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Depth of sample `index` in micrometres.
    pub fn depth(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    /// First sample (μm).
    pub fn start_um(&self) -> f64 {
        self.samples[0]
    }

    /// Last sample (μm).
    pub fn stop_um(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Total extent of the axis (μm).
    pub fn span_um(&self) -> f64 {
        self.stop_um() - self.start_um()
    }

    /// Mean sample spacing (μm). Equals the spacing of a uniform axis.
    pub fn spacing_um(&self) -> f64 {
        self.span_um() / (self.samples.len() - 1) as f64
    }

    /// Mean sample spacing (cm).
    pub fn spacing_cm(&self) -> f64 {
        um_to_cm(self.spacing_um())
    }

    /// Depth samples converted to centimetres.
    pub fn to_cm(&self) -> Vec<f64> {
        self.samples.iter().map(|&x| um_to_cm(x)).collect()
    }

    /// Whether every interval matches the mean spacing within
    /// [`UNIFORM_SPACING_RTOL`].
    pub fn is_uniform(&self) -> bool {
        self.require_uniform().is_ok()
    }

    /// Fail with [`Error::NonUniformAxis`] at the first interval that deviates
    /// from the mean spacing.
    pub fn require_uniform(&self) -> Result<()> {
        let dx = self.spacing_um();
        let tol = dx * UNIFORM_SPACING_RTOL;
        match self
            .samples
            .windows(2)
            .position(|w| ((w[1] - w[0]) - dx).abs() > tol)
        {
            Some(i) => Err(Error::NonUniformAxis { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Index of the sample closest to `depth_um`.
    pub fn nearest_index(&self, depth_um: f64) -> usize {
        match self
            .samples
            .binary_search_by(|x| x.partial_cmp(&depth_um).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) if i >= self.samples.len() => self.samples.len() - 1,
            Err(i) => {
                if depth_um - self.samples[i - 1] <= self.samples[i] - depth_um {
                    i - 1
                } else {
                    i
                }
            }
        }
    }
}
