//! Excitation-wavelength interpolation of Raman cross-sections.
//!
//! A cross-section measured with one laser line is rescaled to another by the ratio of
//! frequency factors `ν̃_L · (ν̃_L - ν̃_vib)^3`, where `ν̃_L` is the laser wavenumber and
//! `ν̃_vib` the vibrational shift of the band.
//!
//! The laser wavenumber enters as a linear pre-factor next to the cubed scattered wavenumber,
//! not as the scattered wavenumber to the fourth power.

use crate::math::constants::NM_TO_WAVENUMBER;
use tracing::debug;

/// Converts a wavelength in nanometres to a wavenumber in cm^-1.
#[inline]
pub fn wavenumber(lambda_nm: f64) -> f64 {
    NM_TO_WAVENUMBER / lambda_nm
}

/// Computes the frequency factor of a band excited at `lambda_nm`.
///
/// # Arguments
///
/// * `freq` - Vibrational shift of the band in cm^-1.
/// * `lambda_nm` - Excitation wavelength in nanometres.
///
/// # Returns
///
/// `ν̃_L · (ν̃_L - freq)^3`, in cm^-4.
#[inline]
pub fn frequency_factor(freq: f64, lambda_nm: f64) -> f64 {
    let wavenum_laser = wavenumber(lambda_nm);
    let wavenum_scattered = wavenum_laser - freq;
    // Cubed through libm `pow`, the rounding the tabulated reference values carry.
    wavenum_laser * wavenum_scattered.powf(3.0)
}

/// Returns the ratio by which a cross-section changes when the excitation moves from
/// `lambda_org` to `lambda_interp`.
///
/// A zero scattered wavenumber at `lambda_org` makes the ratio infinite or NaN.
#[inline]
pub fn scaling_factor(freq: f64, lambda_org: f64, lambda_interp: f64) -> f64 {
    (1.0 / frequency_factor(freq, lambda_org)) * frequency_factor(freq, lambda_interp)
}

/// Approximates the cross-section of a band at a different excitation wavelength.
///
/// The scaling factor is emitted as a `debug` event for diagnostics. It is not part of the
/// return value; use [`scaling_factor`] to obtain it programmatically.
///
/// # Arguments
///
/// * `rcs` - Cross-section measured at `lambda_org`, in any consistent unit or scale.
/// * `freq` - Vibrational shift of the band in cm^-1, for example 992.3.
/// * `lambda_org` - Wavelength of the original excitation laser in nanometres.
/// * `lambda_interp` - Wavelength of the target excitation laser in nanometres.
///
/// # Returns
///
/// The estimated cross-section at `lambda_interp`, in the unit of `rcs`.
///
/// # Examples
///
/// ```
/// use raman_rcs::interpolate_to_wavelength;
///
/// let rcs_532 = interpolate_to_wavelength(1.0, 992.3, 488.0, 532.0);
/// assert!((rcs_532 - 0.6982982848759305).abs() < 1e-12);
/// ```
pub fn interpolate_to_wavelength(rcs: f64, freq: f64, lambda_org: f64, lambda_interp: f64) -> f64 {
    let factor_org = frequency_factor(freq, lambda_org);
    let factor_interp = frequency_factor(freq, lambda_interp);
    debug!(
        target: "raman_rcs::scaling",
        freq,
        lambda_org,
        lambda_interp,
        "Scaling factor: {}",
        (1.0 / factor_org) * factor_interp
    );
    // Left to right, so `rcs` is scaled by `1 / factor_org` before `factor_interp`.
    rcs * (1.0 / factor_org) * factor_interp
}
