//! Local-field correction for Raman scattering in a condensed medium.
//!
//! A molecule embedded in a dielectric feels a Lorentz local field that differs from the
//! applied field at both the excitation and the scattered wavelength. The combined correction is
//! `L = (n_sc² + 2)² (n_exc² + 2)² / 81 · (n_sc / n_exc)`, which equals one in vacuum.
//!
//! References: Nestor & Lippincott, J. Raman Spectrosc. 1, 305 (1973); Eckhardt & Wagner,
//! J. Mol. Spectrosc. 19, 407 (1966); Abe, Wakayama & Ito, J. Raman Spectrosc. 6, 38 (1977).

use crate::math::constants::LOCAL_FIELD_NORMALIZATION;

/// Computes the local-field correction factor for the given refractive indices.
///
/// # Arguments
///
/// * `n_exc` - Refractive index of the medium at the excitation wavelength, for example 1.33.
/// * `n_sc` - Refractive index of the medium at the scattered wavelength, for example 1.4.
///
/// # Returns
///
/// The dimensionless correction factor. `n_exc == 0` yields a non-finite value.
///
/// # Examples
///
/// ```
/// use raman_rcs::local_field_correction;
///
/// assert_eq!(local_field_correction(1.0, 1.0), 1.0);
/// ```
#[inline]
pub fn local_field_correction(n_exc: f64, n_sc: f64) -> f64 {
    let val_exc = n_exc.powi(2) + 2.0;
    let val_sc = n_sc.powi(2) + 2.0;
    val_sc.powi(2) * val_exc.powi(2) * (n_sc / n_exc) * (1.0 / LOCAL_FIELD_NORMALIZATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vacuum_has_no_correction() {
        assert_eq!(local_field_correction(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_equal_indices_reduce_to_fourth_power() {
        assert_relative_eq!(
            local_field_correction(1.33, 1.33),
            2.490998345560297,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            local_field_correction(1.5, 1.5),
            4.02782600308642,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_dispersive_medium_reference_value() {
        assert_relative_eq!(
            local_field_correction(1.33, 1.4),
            2.8947494272168424,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_swapping_indices_changes_only_the_ratio_term() {
        let forward = local_field_correction(1.33, 1.4);
        let backward = local_field_correction(1.4, 1.33);
        assert_relative_eq!(forward / backward, (1.4 / 1.33_f64).powi(2), max_relative = 1e-14);
    }

    #[test]
    fn test_zero_excitation_index_is_not_finite() {
        assert!(!local_field_correction(0.0, 1.33).is_finite());
        assert!(local_field_correction(0.0, 0.0).is_nan());
    }
}
