//! Closed-form scaling and unit conversions for Raman scattering cross-sections.
//!
//! The library collects the handful of formulas needed to compare Raman cross-sections across
//! experiments and calculations:
//!
//! - [`interpolate_to_wavelength`] moves a cross-section to a different excitation wavelength,
//! - [`local_field_correction`] accounts for the refractive index of the surrounding medium,
//! - [`differential_to_total`] integrates a differential cross-section over all solid angles,
//! - [`au_to_cm6`], [`au_to_si`] and [`au_to_angstrom6`] convert atomic-unit results into
//!   reporting units.
//!
//! Each formula is an independent pure function of `f64` values, so the caller decides which to
//! apply and in what order. Invalid inputs are not rejected: division by zero and similar
//! degeneracies propagate as IEEE-754 infinities and NaNs.

pub mod error;
pub mod math;
pub mod scaling;
pub mod settings;
pub mod types;
pub mod units;

pub use error::RamanError;
pub use scaling::{differential_to_total, interpolate_to_wavelength, local_field_correction};
pub use settings::{ExcitationSettings, MediumSettings, ReportSettings, Settings};
pub use types::{Medium, RamanBand, RefractiveIndex, Wavelength, Wavenumber};
pub use units::{CrossSectionUnit, au_to_angstrom6, au_to_cm6, au_to_si, convert_from_atomic_units};

use std::sync::OnceLock;

static DEFAULT_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Returns the built-in default settings, parsed once from the embedded `defaults.toml`.
pub fn get_default_settings() -> &'static Settings {
    DEFAULT_SETTINGS.get_or_init(|| {
        const DEFAULT_SETTINGS_TOML: &str = include_str!("../resources/defaults.toml");
        Settings::load_from_str(DEFAULT_SETTINGS_TOML)
            .expect("Failed to parse embedded default settings. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_settings() {
        let settings1 = get_default_settings();
        assert_eq!(settings1.excitation.original_nm, 532.0);
        assert_eq!(settings1.report.unit, CrossSectionUnit::Cm6);

        let settings2 = get_default_settings();
        assert_eq!(
            settings1 as *const _, settings2 as *const _,
            "Subsequent calls should return a cached reference"
        );
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        assert_eq!(*get_default_settings(), Settings::default());
    }
}
