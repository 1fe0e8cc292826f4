//! Conversion of differential Raman cross-sections to total cross-sections.
//!
//! Integrating the differential cross-section over the full solid angle brings in the
//! angular distribution of the band, which the depolarization ratio ρ fixes:
//! `σ = (8π/3) · (1 + 2ρ) / (1 + ρ) · dσ/dΩ`.
//!
//! References: Trulson & Mathies, J. Chem. Phys. 84, 2068 (1986); Hess, Hacker, Schrötter &
//! Brandmüller, Z. Angew. Phys. 27, 233 (1969).

use crate::math::constants::PI_REFERENCE;

/// Converts a differential Raman cross-section to the corresponding total cross-section.
///
/// # Arguments
///
/// * `dep_ratio` - Depolarization ratio of the band, physically in `[0, 1]`.
/// * `diff_rcs` - Differential cross-section, in any unit per steradian.
///
/// # Returns
///
/// The total cross-section in the unit of `diff_rcs` times steradians. `dep_ratio == -1`
/// yields a non-finite value.
#[inline]
pub fn differential_to_total(dep_ratio: f64, diff_rcs: f64) -> f64 {
    (8.0 * PI_REFERENCE / 3.0) * ((1.0 + 2.0 * dep_ratio) / (1.0 + dep_ratio)) * diff_rcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fully_polarized_band() {
        assert_relative_eq!(
            differential_to_total(0.0, 1.0),
            8.0 * PI_REFERENCE / 3.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            differential_to_total(0.0, 2.5e-30),
            8.377580409572774 * 2.5e-30,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_fully_depolarized_band_is_four_pi() {
        assert_relative_eq!(
            differential_to_total(1.0, 1.0),
            4.0 * PI_REFERENCE,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(
            differential_to_total(0.1, 1.0),
            9.139178628624844,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            differential_to_total(0.75, 2.5e-30),
            2.991993003418848e-29,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_uses_reference_pi_not_std_pi() {
        let total = differential_to_total(0.0, 1.0);
        assert_eq!(total, 8.0 * 3.14159265358979 / 3.0);
        assert_ne!(total, 8.0 * std::f64::consts::PI / 3.0);
    }

    #[test]
    fn test_negative_unit_ratio_is_not_finite() {
        assert!(!differential_to_total(-1.0, 1.0).is_finite());
    }
}
