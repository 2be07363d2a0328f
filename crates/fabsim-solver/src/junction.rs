//! Metallurgical junction extraction.

use fabsim_core::{ConcentrationProfile, DepthAxis, Result, validate};

/// Index of the first sample, in increasing depth, where `competing` has fallen
/// to or below `reference` (`competing[i] <= reference[i]`).
///
/// Returns `Ok(None)` when the profiles never cross. NaN samples never count as
/// a crossing.
pub fn junction_index(
    reference: &ConcentrationProfile,
    competing: &ConcentrationProfile,
) -> Result<Option<usize>> {
    validate::same_len(reference.len(), competing.len())?;
    Ok(reference
        .iter()
        .zip(competing.iter())
        .position(|(&a, &b)| b <= a))
}

/// Junction depth (μm): the depth of [`junction_index`].
///
/// `Ok(None)` is the "undefined" result for profiles that never cross; callers
/// must handle it before using the depth.
pub fn junction_depth(
    axis: &DepthAxis,
    reference: &ConcentrationProfile,
    competing: &ConcentrationProfile,
) -> Result<Option<f64>> {
    validate::same_len(axis.len(), reference.len())?;
    Ok(junction_index(reference, competing)?.map(|i| axis.as_slice()[i]))
}
