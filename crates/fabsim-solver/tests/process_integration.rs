//! End-to-end checks of the process models on the reference scenario:
//! phosphorus pre-deposition into a p-type wafer and a boron implant + anneal.

use fabsim_solver::{
    ConcentrationProfile, DepthAxis, Dopant, ImplantParameters, anneal_broaden, combine,
    constant_source_erfc, deal_grove_thickness, diffusion_coefficient, junction_depth, peak,
    retained_dose,
};

const BACKGROUND: f64 = 1e15;
const SOLUBILITY: f64 = 1e21;

fn reference_axis() -> DepthAxis {
    DepthAxis::linspace(0.0, 2.0, 2001).unwrap()
}

#[test]
fn test_oxide_layers_are_ordered() {
    let field = deal_grove_thickness(1.6e5, 60.0, 100.0);
    let gate = deal_grove_thickness(5.0e4, 3.8, 50.0);
    let inter = deal_grove_thickness(3.0e4, 2.5, 40.0);

    assert!(field > gate, "field {} gate {}", field, gate);
    assert!(gate > inter, "gate {} inter {}", gate, inter);
    assert!(inter > 0.0);
}

#[test]
fn test_arrhenius_matches_formula_at_1000c() {
    let d = diffusion_coefficient(10.5, 3.69, 1000.0);
    let expected = 10.5 * (-3.69_f64 / (8.617e-5 * 1273.15)).exp();
    assert!((d - expected).abs() <= 1e-12 * expected);
    assert_eq!(d, Dopant::Phosphorus.arrhenius().at(1000.0));
}

#[test]
fn test_phosphorus_junction_against_background() {
    let axis = reference_axis();
    let background = ConcentrationProfile::uniform(axis.len(), BACKGROUND);

    let d_p = Dopant::Phosphorus.arrhenius().at(1000.0);
    let phosphorus = constant_source_erfc(1e21, d_p, 20.0 * 60.0, &axis);

    let xj = junction_depth(&axis, &background, &phosphorus)
        .unwrap()
        .expect("phosphorus should cross the background inside 2 μm");

    // erfc(z) = 1e-6 at z ≈ 3.46, i.e. xj ≈ 6.9·sqrt(Dt)
    let sqrt_dt_um = (d_p * 1200.0).sqrt() * 1e4;
    assert!(xj > 6.0 * sqrt_dt_um && xj < 8.0 * sqrt_dt_um, "xj = {}", xj);

    let i = axis.nearest_index(xj);
    assert!(phosphorus[i] <= BACKGROUND);
    assert!(phosphorus[i - 1] > BACKGROUND);
}

#[test]
fn test_surface_crossing_and_undefined_junction() {
    let axis = reference_axis();
    let background = ConcentrationProfile::uniform(axis.len(), BACKGROUND);
    let weak = constant_source_erfc(1e14, 1e-14, 600.0, &axis);
    let low_reference = ConcentrationProfile::uniform(axis.len(), 1e13);

    // A source below the background crosses at the surface.
    assert_eq!(junction_depth(&axis, &background, &weak).unwrap(), Some(0.0));
    // A flat competing profile above a flat reference never crosses.
    assert_eq!(
        junction_depth(&axis, &low_reference, &background).unwrap(),
        None
    );
}

#[test]
fn test_boron_implant_anneal_and_combine() {
    let axis = reference_axis();
    let background = ConcentrationProfile::uniform(axis.len(), BACKGROUND);

    let implant = ImplantParameters::new(5e13, 0.5, 0.02).unwrap();
    let as_implanted = implant.profile(&axis);

    let d_b = Dopant::Boron.arrhenius().at(1000.0);
    let annealed = anneal_broaden(&as_implanted, d_b, 30.0 * 60.0, &axis).unwrap();

    // Dose is conserved by the anneal.
    let before = retained_dose(&axis, &as_implanted).unwrap();
    let after = retained_dose(&axis, &annealed).unwrap();
    assert!((after - before).abs() / before < 0.01);

    let boron = combine(&background, &annealed, SOLUBILITY).unwrap();
    assert!(boron.iter().all(|&c| c <= SOLUBILITY));

    let pk = peak(&axis, &boron).unwrap().unwrap();
    assert!((pk.depth_um - 0.5).abs() <= 2.0 * axis.spacing_um());
    assert!(pk.concentration < implant.peak_concentration());
    assert!(pk.concentration > BACKGROUND);

    // Far from the implant only the background remains.
    assert!((boron[axis.len() - 1] - BACKGROUND).abs() < 1e-3 * BACKGROUND);
}
