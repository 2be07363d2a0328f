//! Dopant concentration profiles.

/// Dopant concentration (atoms/cm³), one value per [`DepthAxis`](crate::DepthAxis)
/// sample.
///
/// Values produced by the closed-form generators are non-negative. Profiles
/// that went through the FFT anneal may carry tiny negative round-off residues;
/// these are kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConcentrationProfile {
    values: Vec<f64>,
}

impl ConcentrationProfile {
    /// Wrap concentration values (atoms/cm³).
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// A flat profile, e.g. uniform substrate background doping.
    pub fn uniform(len: usize, concentration: f64) -> Self {
        Self {
            values: vec![concentration; len],
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Concentrations in atoms/cm³.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Concentration at sample `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Index and value of the maximum concentration.
    ///
    /// The first maximum wins on ties. NaN samples are skipped. Returns `None`
    /// for an empty or all-NaN profile.
    pub fn argmax(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best
    }
}

impl From<Vec<f64>> for ConcentrationProfile {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl FromIterator<f64> for ConcentrationProfile {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for ConcentrationProfile {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
