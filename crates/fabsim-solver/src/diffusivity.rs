//! Arrhenius temperature dependence of dopant diffusivity.

use fabsim_core::Result;
use fabsim_core::constants::BOLTZMANN_EV_PER_K;
use fabsim_core::units::celsius_to_kelvin;
use fabsim_core::validate;

/// Diffusion coefficient `D = D0 · exp(−Ea / (k_B · T))` in the units of `d0`
/// (cm²/s for the built-in dopants).
///
/// `ea` is the activation energy in eV and `t_celsius` the process temperature.
/// Precondition: `t_celsius > −273.15`. At or below absolute zero the result is
/// meaningless (zero, infinite or NaN); use [`Arrhenius::try_at`] to reject it.
pub fn diffusion_coefficient(d0: f64, ea: f64, t_celsius: f64) -> f64 {
    let t_kelvin = celsius_to_kelvin(t_celsius);
    d0 * (-ea / (BOLTZMANN_EV_PER_K * t_kelvin)).exp()
}

/// Arrhenius parameters of a dopant in silicon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    /// Pre-exponential factor (cm²/s).
    pub d0: f64,
    /// Activation energy (eV).
    pub ea: f64,
}

impl Arrhenius {
    pub const fn new(d0: f64, ea: f64) -> Self {
        Self { d0, ea }
    }

    /// Diffusivity (cm²/s) at `t_celsius`, unchecked.
    pub fn at(&self, t_celsius: f64) -> f64 {
        diffusion_coefficient(self.d0, self.ea, t_celsius)
    }

    /// Diffusivity (cm²/s) at `t_celsius`, rejecting negative parameters and
    /// temperatures at or below absolute zero.
    pub fn try_at(&self, t_celsius: f64) -> Result<f64> {
        validate::non_negative("d0", self.d0)?;
        validate::non_negative("activation_energy", self.ea)?;
        validate::above_absolute_zero("temperature", t_celsius)?;
        Ok(self.at(t_celsius))
    }
}

/// Dopants with built-in Arrhenius parameters (intrinsic diffusion in Si).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dopant {
    /// n-type; D0 = 10.5 cm²/s, Ea = 3.69 eV.
    Phosphorus,
    /// p-type; D0 = 0.76 cm²/s, Ea = 3.46 eV.
    Boron,
}

impl Dopant {
    pub fn arrhenius(self) -> Arrhenius {
        match self {
            Dopant::Phosphorus => Arrhenius::new(10.5, 3.69),
            Dopant::Boron => Arrhenius::new(0.76, 3.46),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dopant::Phosphorus => "phosphorus",
            Dopant::Boron => "boron",
        }
    }
}

impl std::fmt::Display for Dopant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Dopant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p" | "phosphorus" => Ok(Dopant::Phosphorus),
            "b" | "boron" => Ok(Dopant::Boron),
            other => Err(format!("unknown dopant: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_arrhenius() {
        let d = diffusion_coefficient(10.5, 3.69, 1000.0);
        let expected = 10.5 * (-3.69 / (8.617e-5 * 1273.15_f64)).exp();
        assert!((d - expected).abs() <= 1e-12 * expected);
        // ~2.6e-14 cm²/s
        assert!(d > 1e-14 && d < 1e-13, "D = {:e}", d);
    }

    #[test]
    fn test_increases_with_temperature() {
        let boron = Dopant::Boron.arrhenius();
        assert!(boron.at(1100.0) > boron.at(1000.0));
        assert!(boron.at(1000.0) > boron.at(900.0));
    }

    #[test]
    fn test_zero_activation_energy_returns_d0() {
        assert_eq!(diffusion_coefficient(0.76, 0.0, 950.0), 0.76);
    }

    #[test]
    fn test_try_at_rejects_absolute_zero() {
        let p = Dopant::Phosphorus.arrhenius();
        assert!(p.try_at(-273.15).is_err());
        assert!(p.try_at(-500.0).is_err());
        assert!(Arrhenius::new(-1.0, 3.0).try_at(1000.0).is_err());
        assert_eq!(p.try_at(1000.0).unwrap(), p.at(1000.0));
    }

    #[test]
    fn test_dopant_parsing() {
        assert_eq!("Boron".parse::<Dopant>(), Ok(Dopant::Boron));
        assert_eq!("p".parse::<Dopant>(), Ok(Dopant::Phosphorus));
        assert!("arsenic".parse::<Dopant>().is_err());
        assert_eq!(Dopant::Boron.to_string(), "boron");
    }
}
