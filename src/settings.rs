//! This module provides default experimental conditions and loads them from TOML files.
//!
//! The `Settings` struct groups the excitation wavelengths, the refractive indices of the medium,
//! and reporting preferences that a caller would otherwise pass to every formula. The scaling
//! functions never read settings themselves; they are consumed by front ends such as the
//! `raman-rcs` command-line tool.
//!
//! Every section and key is optional. Missing values fall back to [`Settings::default`], which
//! matches the embedded `resources/defaults.toml`.

use crate::error::RamanError;
use crate::units::CrossSectionUnit;
use serde::Deserialize;
use std::path::Path;

/// The largest number of decimal places a report may request.
///
/// Seventeen significant digits already round-trip any `f64`.
pub const MAX_PRECISION: usize = 17;

/// Excitation wavelengths used when interpolating cross-sections.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExcitationSettings {
    /// Wavelength in nanometres at which cross-sections were measured or computed.
    pub original_nm: f64,
    /// Wavelength in nanometres to interpolate cross-sections to.
    pub target_nm: f64,
}

impl Default for ExcitationSettings {
    fn default() -> Self {
        Self {
            original_nm: 532.0,
            target_nm: 785.0,
        }
    }
}

/// Refractive indices of the medium for the local-field correction.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MediumSettings {
    /// Refractive index at the excitation wavelength.
    pub n_exc: f64,
    /// Refractive index at the scattered wavelength.
    pub n_sc: f64,
}

impl Default for MediumSettings {
    fn default() -> Self {
        Self {
            n_exc: 1.333,
            n_sc: 1.333,
        }
    }
}

/// Preferences for reporting results.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Unit system that atomic-unit cross-sections are converted to.
    pub unit: CrossSectionUnit,
    /// Number of decimal places used when printing values.
    pub precision: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            unit: CrossSectionUnit::Cm6,
            precision: 6,
        }
    }
}

/// Default experimental conditions and report options.
///
/// # Examples
///
/// ```
/// use raman_rcs::{CrossSectionUnit, Settings};
///
/// let settings = Settings::load_from_str(r#"
/// [excitation]
/// target_nm = 633.0
///
/// [report]
/// unit = "angstrom6"
/// "#).unwrap();
///
/// assert_eq!(settings.excitation.original_nm, 532.0);
/// assert_eq!(settings.excitation.target_nm, 633.0);
/// assert_eq!(settings.report.unit, CrossSectionUnit::Angstrom6);
/// ```
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Excitation wavelengths.
    pub excitation: ExcitationSettings,
    /// Refractive indices of the medium.
    pub medium: MediumSettings,
    /// Reporting preferences.
    pub report: ReportSettings,
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the TOML settings file.
    ///
    /// # Errors
    ///
    /// Returns a `RamanError::IoError` if the file cannot be read, a
    /// `RamanError::DeserializationError` if the TOML is malformed or contains unknown keys, or
    /// a `RamanError::InvalidValue` if a value cannot describe an experiment.
    pub fn load_from_file(path: &Path) -> Result<Self, RamanError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| RamanError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `RamanError::DeserializationError` if the TOML is malformed or contains unknown
    /// keys, or a `RamanError::InvalidValue` if a value cannot describe an experiment.
    pub fn load_from_str(toml_str: &str) -> Result<Self, RamanError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the settings describe a physically meaningful experiment.
    ///
    /// Wavelengths must be finite and positive, refractive indices finite and non-zero, and the
    /// report precision at most [`MAX_PRECISION`].
    /// This only guards configuration; the formulas accept any input.
    pub fn validate(&self) -> Result<(), RamanError> {
        check_positive("excitation.original_nm", self.excitation.original_nm)?;
        check_positive("excitation.target_nm", self.excitation.target_nm)?;
        check_nonzero("medium.n_exc", self.medium.n_exc)?;
        check_nonzero("medium.n_sc", self.medium.n_sc)?;
        if self.report.precision > MAX_PRECISION {
            return Err(RamanError::InvalidValue {
                field: "report.precision",
                reason: format!(
                    "expected at most {} decimal places, got {}",
                    MAX_PRECISION, self.report.precision
                ),
            });
        }
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), RamanError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RamanError::InvalidValue {
            field,
            reason: format!("expected a finite positive number, got {}", value),
        })
    }
}

fn check_nonzero(field: &'static str, value: f64) -> Result<(), RamanError> {
    if value.is_finite() && value != 0.0 {
        Ok(())
    } else {
        Err(RamanError::InvalidValue {
            field,
            reason: format!("expected a finite non-zero number, got {}", value),
        })
    }
}
