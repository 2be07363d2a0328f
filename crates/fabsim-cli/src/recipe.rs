//! Process recipe configuration.
//!
//! The default recipe reproduces the reference cross-section: field, gate and
//! intermediate oxides, a phosphorus pre-deposition at 1000 °C and a boron
//! implant annealed at 1000 °C, on a lightly doped p-type wafer. Any subset of
//! fields can be overridden from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use fabsim_solver::Dopant;
use serde::{Deserialize, Serialize};

/// Dopant species selectable in a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DopantName {
    Phosphorus,
    Boron,
}

impl From<DopantName> for Dopant {
    fn from(name: DopantName) -> Self {
        match name {
            DopantName::Phosphorus => Dopant::Phosphorus,
            DopantName::Boron => Dopant::Boron,
        }
    }
}

/// Depth axis sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisRecipe {
    pub start_um: f64,
    pub stop_um: f64,
    pub samples: usize,
}

impl Default for AxisRecipe {
    fn default() -> Self {
        Self {
            start_um: 0.0,
            stop_um: 2.0,
            samples: 2001,
        }
    }
}

/// One thermally grown oxide layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OxideLayer {
    pub label: String,
    /// Parabolic rate constant B (nm²/min).
    pub parabolic_nm2_per_min: f64,
    /// Linear rate constant B/A (nm/min).
    pub linear_nm_per_min: f64,
    pub time_min: f64,
}

impl OxideLayer {
    fn new(label: &str, parabolic: f64, linear: f64, time_min: f64) -> Self {
        Self {
            label: label.to_string(),
            parabolic_nm2_per_min: parabolic,
            linear_nm_per_min: linear,
            time_min,
        }
    }
}

/// Constant-source pre-deposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredepositionRecipe {
    pub dopant: DopantName,
    /// Surface concentration (atoms/cm³).
    pub surface_concentration: f64,
    pub temperature_c: f64,
    pub time_min: f64,
}

impl Default for PredepositionRecipe {
    fn default() -> Self {
        Self {
            dopant: DopantName::Phosphorus,
            surface_concentration: 1e21,
            temperature_c: 1000.0,
            time_min: 20.0,
        }
    }
}

/// Ion implant followed by an anneal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplantRecipe {
    pub dopant: DopantName,
    /// Dose (atoms/cm²).
    pub dose_cm2: f64,
    pub projected_range_um: f64,
    pub straggle_um: f64,
    pub anneal_temperature_c: f64,
    pub anneal_time_min: f64,
}

impl Default for ImplantRecipe {
    fn default() -> Self {
        Self {
            dopant: DopantName::Boron,
            dose_cm2: 5e13,
            projected_range_um: 0.05,
            straggle_um: 0.02,
            anneal_temperature_c: 1000.0,
            anneal_time_min: 30.0,
        }
    }
}

/// Metallisation layer for the sheet-resistance estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetalRecipe {
    pub name: String,
    pub resistivity_ohm_m: f64,
    pub thickness_nm: f64,
}

impl Default for MetalRecipe {
    fn default() -> Self {
        Self {
            name: "Aluminum".to_string(),
            resistivity_ohm_m: 2.65e-8,
            thickness_nm: 100.0,
        }
    }
}

/// Complete process recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub axis: AxisRecipe,
    pub oxides: Vec<OxideLayer>,
    /// Uniform wafer background doping (atoms/cm³), same type as the implant.
    pub background_concentration: f64,
    /// Solid-solubility ceiling applied to the implanted profile (atoms/cm³).
    pub solid_solubility: f64,
    pub predeposition: PredepositionRecipe,
    pub implant: ImplantRecipe,
    pub metal: MetalRecipe,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            axis: AxisRecipe::default(),
            oxides: vec![
                OxideLayer::new("Field oxide", 1.6e5, 60.0, 100.0),
                OxideLayer::new("Gate oxide", 5.0e4, 3.8, 50.0),
                OxideLayer::new("Intermediate oxide", 3.0e4, 2.5, 40.0),
            ],
            background_concentration: 1e15,
            solid_solubility: 1e21,
            predeposition: PredepositionRecipe::default(),
            implant: ImplantRecipe::default(),
            metal: MetalRecipe::default(),
        }
    }
}

impl Recipe {
    /// Parse a recipe from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid recipe JSON")
    }

    /// Load a recipe from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading recipe {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing recipe")
    }
}
