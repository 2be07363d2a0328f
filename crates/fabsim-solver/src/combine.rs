//! Combining background and implanted dopant.

use fabsim_core::{ConcentrationProfile, Result, validate};

/// Elementwise `min(background + implant, ceiling)`.
///
/// `ceiling` is the solid-solubility limit (atoms/cm³). Only the upper bound is
/// applied; small negative residues from an FFT anneal pass through.
pub fn combine(
    background: &ConcentrationProfile,
    implant: &ConcentrationProfile,
    ceiling: f64,
) -> Result<ConcentrationProfile> {
    validate::same_len(background.len(), implant.len())?;
    Ok(background
        .iter()
        .zip(implant.iter())
        .map(|(&b, &i)| (b + i).min(ceiling))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabsim_core::Error;

    #[test]
    fn test_sum_and_clamp() {
        let bg = ConcentrationProfile::uniform(4, 1e15);
        let imp = ConcentrationProfile::from_vec(vec![0.0, 1e18, 5e21, 2e21]);
        let c = combine(&bg, &imp, 1e21).unwrap();
        assert_eq!(c.as_slice(), &[1e15, 1e18 + 1e15, 1e21, 1e21]);
    }

    #[test]
    fn test_negative_residue_not_clamped() {
        let bg = ConcentrationProfile::uniform(2, 0.0);
        let imp = ConcentrationProfile::from_vec(vec![-1e-3, 1.0]);
        let c = combine(&bg, &imp, 1e21).unwrap();
        assert_eq!(c[0], -1e-3);
    }

    #[test]
    fn test_length_mismatch() {
        let bg = ConcentrationProfile::uniform(3, 1e15);
        let imp = ConcentrationProfile::uniform(2, 1e15);
        assert_eq!(
            combine(&bg, &imp, 1e21),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
