//! This module provides the physical constants shared by the raman-rcs formulas.

/// Physical and numerical constants used throughout the library.
///
/// This module defines the atomic-unit conversion factors for the supported cross-section unit
/// systems, the wavelength-to-wavenumber factor, and the reference value of π used by the
/// differential-to-total conversion.
pub mod constants;
