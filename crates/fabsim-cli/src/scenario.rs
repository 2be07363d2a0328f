//! Reference process scenario.
//!
//! Grows the recipe's oxide layers, diffuses the pre-deposition dopant from a
//! constant source, implants and anneals the second dopant on top of the wafer
//! background, and extracts the metrics handed to reporting.

use anyhow::{Context, Result};
use fabsim_core::units::{cm_to_um, minutes_to_seconds};
use fabsim_solver::{
    ConcentrationProfile, ConstantSource, DepthAxis, Dopant, ImplantParameters, RateConstants,
    anneal_broaden, anneal_sigma_cm, combine, junction_depth, peak, sheet_resistance,
};
use serde::Serialize;

use crate::recipe::Recipe;

/// Clearance, in units of the annealed implant spread `sqrt(ΔRp² + σ²)`, the
/// depth axis should leave on both sides of `Rp` before circular wrap-around
/// becomes visible.
pub const ANNEAL_CLEARANCE_SIGMAS: f64 = 6.0;

/// Thickness of one grown oxide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxideResult {
    pub label: String,
    pub thickness_nm: f64,
}

/// Peak concentration and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakReport {
    /// atoms/cm³
    pub concentration: f64,
    pub depth_um: f64,
}

/// Scalar results of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub oxides: Vec<OxideResult>,
    pub predeposition_dopant: String,
    pub implant_dopant: String,
    /// Diffusivity during pre-deposition (cm²/s).
    pub predeposition_diffusivity: f64,
    /// Diffusivity during the implant anneal (cm²/s).
    pub anneal_diffusivity: f64,
    pub implant_peak: Option<PeakReport>,
    pub predeposition_peak: Option<PeakReport>,
    /// `None` when the pre-deposited profile never falls to the background.
    pub junction_depth_um: Option<f64>,
    pub metal_name: String,
    /// Ω/□
    pub sheet_resistance: f64,
    pub warnings: Vec<String>,
}

/// Profiles and report of a scenario run.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub axis: DepthAxis,
    /// Background plus annealed implant, clamped at solid solubility.
    pub implant_profile: ConcentrationProfile,
    /// Constant-source pre-deposition profile.
    pub predeposition_profile: ConcentrationProfile,
    pub report: Report,
}

fn peak_report(axis: &DepthAxis, profile: &ConcentrationProfile) -> Result<Option<PeakReport>> {
    Ok(peak(axis, profile)?.map(|p| PeakReport {
        concentration: p.concentration,
        depth_um: p.depth_um,
    }))
}

/// Warn when the annealed implant is not negligible near both ends of the
/// axis. The FFT anneal is circular, so dopant past one edge re-enters at the
/// other.
fn wraparound_warning(
    axis: &DepthAxis,
    implant: &ImplantParameters,
    sigma_um: f64,
) -> Option<String> {
    let spread_um = implant.straggle_um.hypot(sigma_um);
    let clearance_um = ANNEAL_CLEARANCE_SIGMAS * spread_um;
    let low = implant.projected_range_um - clearance_um;
    let high = implant.projected_range_um + clearance_um;
    if low >= axis.start_um() && high <= axis.stop_um() {
        return None;
    }
    Some(format!(
        "annealed implant spans {:.3}..{:.3} um ({}x spread of {:.3} um) but the depth axis is {:.3}..{:.3} um; dopant past an edge wraps around to the other",
        low,
        high,
        ANNEAL_CLEARANCE_SIGMAS,
        spread_um,
        axis.start_um(),
        axis.stop_um()
    ))
}

/// Run the recipe.
pub fn run_scenario(recipe: &Recipe) -> Result<Simulation> {
    let mut warnings = Vec::new();

    let oxides = recipe
        .oxides
        .iter()
        .map(|layer| -> Result<OxideResult> {
            let rates = RateConstants::new(
                layer.parabolic_nm2_per_min,
                layer.linear_nm_per_min,
                layer.time_min,
            )
            .with_context(|| format!("oxide layer '{}'", layer.label))?;
            Ok(OxideResult {
                label: layer.label.clone(),
                thickness_nm: rates.thickness(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let axis = DepthAxis::linspace(recipe.axis.start_um, recipe.axis.stop_um, recipe.axis.samples)
        .context("depth axis")?;
    let background = ConcentrationProfile::uniform(axis.len(), recipe.background_concentration);

    // Pre-deposition
    let predep = &recipe.predeposition;
    let predep_dopant = Dopant::from(predep.dopant);
    let d_predep = predep_dopant
        .arrhenius()
        .try_at(predep.temperature_c)
        .context("pre-deposition temperature")?;
    let source = ConstantSource::new(
        predep.surface_concentration,
        d_predep,
        minutes_to_seconds(predep.time_min),
    )
    .context("pre-deposition")?;
    let predeposition_profile = source.profile(&axis);

    // Implant and anneal
    let imp = &recipe.implant;
    let implant_dopant = Dopant::from(imp.dopant);
    let implant = ImplantParameters::new(imp.dose_cm2, imp.projected_range_um, imp.straggle_um)
        .context("implant")?;
    let d_anneal = implant_dopant
        .arrhenius()
        .try_at(imp.anneal_temperature_c)
        .context("anneal temperature")?;
    let anneal_s = minutes_to_seconds(imp.anneal_time_min);

    let sigma_um = cm_to_um(anneal_sigma_cm(d_anneal, anneal_s));
    if let Some(message) = wraparound_warning(&axis, &implant, sigma_um) {
        warnings.push(message);
    }

    let as_implanted = implant.profile(&axis);
    let annealed = anneal_broaden(&as_implanted, d_anneal, anneal_s, &axis).context("anneal")?;
    let implant_profile = combine(&background, &annealed, recipe.solid_solubility)?;

    let junction = junction_depth(&axis, &background, &predeposition_profile)?;
    if junction.is_none() {
        warnings.push(format!(
            "{} profile stays above the background across the depth axis; junction depth undefined",
            predep_dopant
        ));
    }

    let metal = &recipe.metal;
    let rs = sheet_resistance(metal.resistivity_ohm_m, metal.thickness_nm * 1e-9);

    log::debug!(
        "scenario: D_{}={:e} cm2/s, D_{}={:e} cm2/s, xj={:?} um",
        predep_dopant,
        d_predep,
        implant_dopant,
        d_anneal,
        junction
    );

    let report = Report {
        oxides,
        predeposition_dopant: predep_dopant.to_string(),
        implant_dopant: implant_dopant.to_string(),
        predeposition_diffusivity: d_predep,
        anneal_diffusivity: d_anneal,
        implant_peak: peak_report(&axis, &implant_profile)?,
        predeposition_peak: peak_report(&axis, &predeposition_profile)?,
        junction_depth_um: junction,
        metal_name: metal.name.clone(),
        sheet_resistance: rs,
        warnings,
    };

    Ok(Simulation {
        axis,
        implant_profile,
        predeposition_profile,
        report,
    })
}
