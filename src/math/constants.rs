//! This module defines the physical and numerical constants used by the raman-rcs library.
//!
//! The atomic-unit conversion factors are the IUPAC Green Book values. They are kept as exact
//! literals so that results match reference calculations digit for digit.

/// Conversion factor from an atomic polarizability volume (bohr^3) to cm^3.
///
/// Squared, it converts a cross-section expressed in atomic units squared into cm^6.
pub const AU_VOLUME_TO_CM3: f64 = 1.481847096e-25;

/// Conversion factor from an atomic polarizability volume to SI units (C^2 m^2 J^-1).
///
/// Squared, it converts a cross-section expressed in atomic units squared into SI units.
pub const AU_POLARIZABILITY_TO_SI: f64 = 1.648777254e-41;

/// Conversion factor from an atomic polarizability volume (bohr^3) to Å^3.
///
/// Squared, it converts a cross-section expressed in atomic units squared into Angstrom^6.
pub const AU_VOLUME_TO_ANGSTROM3: f64 = 1.481847096e-1;

/// Number of reciprocal centimetres per reciprocal nanometre.
///
/// A wavelength `λ` in nanometres corresponds to the wavenumber `NM_TO_WAVENUMBER / λ` in cm^-1.
pub const NM_TO_WAVENUMBER: f64 = 1.0e7;

/// The value of π used for the solid-angle integration of differential cross-sections.
///
/// This is the 15-significant-digit literal used by reference tabulations, not
/// `std::f64::consts::PI`.
pub const PI_REFERENCE: f64 = 3.14159265358979;

/// Normalization of the local-field factor, `3^4`, so that vacuum (n = 1) gives exactly one.
pub const LOCAL_FIELD_NORMALIZATION: f64 = 81.0;
