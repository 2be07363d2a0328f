//! Deal–Grove thermal oxidation.
//!
//! The growth rate obeys `dx/dt = B / (2x + A)`. With no initial oxide this
//! integrates to `x² + A·x − B·t = 0`, solved for the non-negative root:
//!
//! ```text
//! A = B / max(B/A, ε)
//! x = (−A + sqrt(A² + 4·B·t)) / 2 = 2·B·t / (A + sqrt(A² + 4·B·t))
//! ```
//!
//! The second form is the one evaluated. It avoids cancellation when
//! `A² ≫ 4·B·t` (short times or a floored `B/A`).
//!
//! Units follow the caller. The reference process uses nm²/min for `B`,
//! nm/min for `B/A` and minutes for `t`, giving `x` in nm.

use fabsim_core::Result;
use fabsim_core::constants::DEAL_GROVE_LINEAR_RATE_FLOOR;
use fabsim_core::validate;

/// Oxide thickness after time `t` from bare silicon.
///
/// `b` is the parabolic rate constant (length²/time), `b_over_a` the linear
/// rate constant (length/time). Never fails: `b_over_a` is floored at
/// [`DEAL_GROVE_LINEAR_RATE_FLOOR`] and `b = 0` yields zero thickness. Inputs
/// are expected to be non-negative; see [`RateConstants::new`] for a checked
/// entry point.
pub fn deal_grove_thickness(b: f64, b_over_a: f64, t: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    let a = b / b_over_a.max(DEAL_GROVE_LINEAR_RATE_FLOOR);
    let bt4 = 4.0 * b * t;
    bt4 / (2.0 * (a + (a * a + bt4).sqrt()))
}

/// Time needed to grow `thickness` from bare silicon.
///
/// Closed-form inverse of [`deal_grove_thickness`]: `t = (x² + A·x) / B`.
/// Returns `+inf` when `b = 0` and `thickness > 0`, and zero for zero
/// thickness.
pub fn growth_time(b: f64, b_over_a: f64, thickness: f64) -> f64 {
    if thickness == 0.0 {
        return 0.0;
    }
    if b == 0.0 {
        return f64::INFINITY;
    }
    let a = b / b_over_a.max(DEAL_GROVE_LINEAR_RATE_FLOOR);
    (thickness * thickness + a * thickness) / b
}

/// Rate constants and oxidation time for one oxide layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConstants {
    /// Parabolic rate constant B (nm²/min).
    pub parabolic: f64,
    /// Linear rate constant B/A (nm/min).
    pub linear: f64,
    /// Oxidation time (min).
    pub time: f64,
}

impl RateConstants {
    /// Create validated rate constants. All inputs must be finite and
    /// non-negative.
    pub fn new(parabolic: f64, linear: f64, time: f64) -> Result<Self> {
        Ok(Self {
            parabolic: validate::non_negative("parabolic_rate", parabolic)?,
            linear: validate::non_negative("linear_rate", linear)?,
            time: validate::non_negative("oxidation_time", time)?,
        })
    }

    /// The A coefficient (nm), `B / max(B/A, ε)`.
    pub fn a(&self) -> f64 {
        self.parabolic / self.linear.max(DEAL_GROVE_LINEAR_RATE_FLOOR)
    }

    /// Oxide thickness (nm).
    pub fn thickness(&self) -> f64 {
        deal_grove_thickness(self.parabolic, self.linear, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(b: f64, b_over_a: f64, t: f64, x: f64) -> f64 {
        let a = b / b_over_a.max(DEAL_GROVE_LINEAR_RATE_FLOOR);
        x * x + a * x - b * t
    }

    #[test]
    fn test_zero_time_gives_zero_thickness() {
        assert_eq!(deal_grove_thickness(4600.0, 20.354, 0.0), 0.0);
        assert_eq!(deal_grove_thickness(1.6e5, 60.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_parabolic_rate_gives_zero() {
        assert_eq!(deal_grove_thickness(0.0, 20.0, 100.0), 0.0);
        assert_eq!(deal_grove_thickness(0.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_zero_linear_rate_is_finite() {
        let x = deal_grove_thickness(4600.0, 0.0, 100.0);
        assert!(x.is_finite());
        assert!(x >= 0.0);
    }

    #[test]
    fn test_reference_value_matches_closed_form() {
        let (b, ba, t): (f64, f64, f64) = (4600.0, 20.354, 100.0);
        let a = b / ba;
        let expected = (-a + (a * a + 4.0 * b * t).sqrt()) / 2.0;
        let x = deal_grove_thickness(b, ba, t);
        assert!((x - expected).abs() < 1e-9 * expected);
        // ~574.6 nm
        assert!(x > 570.0 && x < 580.0, "x = {}", x);
    }

    #[test]
    fn test_root_satisfies_quadratic() {
        for &(b, ba, t) in &[
            (4600.0, 20.354, 100.0),
            (1.6e5, 60.0, 100.0),
            (5.0e4, 3.8, 50.0),
            (3.0e4, 2.5, 40.0),
        ] {
            let x = deal_grove_thickness(b, ba, t);
            let scale = b * t;
            assert!(
                residual(b, ba, t, x).abs() < 1e-9 * scale,
                "residual too large for ({}, {}, {})",
                b,
                ba,
                t
            );
        }
    }

    #[test]
    fn test_root_is_accurate_when_linear_term_dominates() {
        for &(b, ba, t) in &[(4600.0, 1e-6, 100.0), (5.0e4, 3.8, 1e-9), (4600.0, 0.0, 100.0)] {
            let x = deal_grove_thickness(b, ba, t);
            assert!(x > 0.0, "no growth for ({}, {}, {})", b, ba, t);
            let a = b / f64::max(ba, DEAL_GROVE_LINEAR_RATE_FLOOR);
            let rel = residual(b, ba, t, x) / (a * x);
            assert!(rel.abs() < 1e-12, "relative residual {:e} for ({}, {}, {})", rel, b, ba, t);
        }
        // x ≈ (B/A)·t in the linear regime
        let x = deal_grove_thickness(4600.0, 1e-6, 100.0);
        assert!((x - 1e-4).abs() < 1e-12 * 1e-4 + 1e-15, "x = {:e}", x);
        let x = deal_grove_thickness(4600.0, 0.0, 100.0);
        assert!((x - 1e-10).abs() < 1e-6 * 1e-10, "x = {:e}", x);
    }

    #[test]
    fn test_monotonic_in_time() {
        let mut prev = 0.0;
        for i in 0..=200 {
            let x = deal_grove_thickness(5.0e4, 3.8, i as f64);
            assert!(x >= prev);
            prev = x;
        }
    }

    #[test]
    fn test_linear_and_parabolic_limits() {
        // Short times: x ≈ (B/A)·t
        let x = deal_grove_thickness(5.0e4, 3.8, 1e-3);
        assert!((x - 3.8e-3).abs() / 3.8e-3 < 1e-3);
        // Long times: x ≈ sqrt(B·t)
        let t = 1e11;
        let x = deal_grove_thickness(5.0e4, 3.8, t);
        assert!((x - (5.0e4 * t).sqrt()).abs() / x < 1e-3);
    }

    #[test]
    fn test_growth_time_inverts_thickness() {
        let x = deal_grove_thickness(5.0e4, 3.8, 50.0);
        let t = growth_time(5.0e4, 3.8, x);
        assert!((t - 50.0).abs() < 1e-9 * 50.0);
        assert_eq!(growth_time(5.0e4, 3.8, 0.0), 0.0);
        assert!(growth_time(0.0, 3.8, 10.0).is_infinite());
    }

    #[test]
    fn test_rate_constants_validation() {
        assert!(RateConstants::new(-1.0, 1.0, 1.0).is_err());
        assert!(RateConstants::new(1.0, -1.0, 1.0).is_err());
        assert!(RateConstants::new(1.0, 1.0, -1.0).is_err());
        assert!(RateConstants::new(1.0, 1.0, f64::NAN).is_err());

        let rc = RateConstants::new(1.6e5, 60.0, 100.0).unwrap();
        assert_eq!(rc.thickness(), deal_grove_thickness(1.6e5, 60.0, 100.0));
        assert!((rc.a() - 1.6e5 / 60.0).abs() < 1e-9);
    }
}
