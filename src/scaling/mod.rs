//! This module provides the closed-form scaling formulas for Raman cross-sections.
//!
//! It covers moving a measured cross-section to a different excitation wavelength, the
//! refractive-index local-field correction, and the conversion from differential to total
//! cross-sections. Every function is pure and works on plain `f64` values; degenerate inputs
//! propagate IEEE-754 infinities and NaNs instead of raising errors.

pub mod depolarization;
pub mod local_field;
pub mod wavelength;

pub use depolarization::differential_to_total;
pub use local_field::local_field_correction;
pub use wavelength::{frequency_factor, interpolate_to_wavelength, scaling_factor, wavenumber};
