//! This module defines lightweight typed wrappers for the quantities used in Raman scaling.
//!
//! The free functions in [`crate::scaling`] take plain `f64` values. The wrappers here give
//! wavelengths, wavenumbers, refractive indices, and bands distinct types, so that a wavelength
//! cannot be passed where a wavenumber is expected. They perform no validation and forward
//! directly to the free functions, so results are bit-for-bit identical.

use crate::math::constants::NM_TO_WAVENUMBER;
use crate::scaling;

/// An excitation or scattering wavelength in nanometres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Wavelength(pub f64);

impl Wavelength {
    /// Returns the corresponding wavenumber in cm^-1.
    #[inline]
    pub fn wavenumber(self) -> Wavenumber {
        Wavenumber(scaling::wavenumber(self.0))
    }
}

/// A wavenumber or wavenumber shift in cm^-1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Wavenumber(pub f64);

impl Wavenumber {
    /// Returns the corresponding wavelength in nanometres.
    #[inline]
    pub fn wavelength(self) -> Wavelength {
        Wavelength(NM_TO_WAVENUMBER / self.0)
    }
}

/// A refractive index of the scattering medium.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RefractiveIndex(pub f64);

/// The optical properties of the medium surrounding the scattering molecules.
///
/// The refractive index generally differs between the excitation and the Raman-shifted
/// wavelength, which is what makes the local-field correction asymmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// Refractive index at the excitation wavelength.
    pub excitation: RefractiveIndex,
    /// Refractive index at the scattered wavelength.
    pub scattering: RefractiveIndex,
}

impl Medium {
    /// Creates a medium with the same refractive index at both wavelengths.
    pub fn non_dispersive(n: RefractiveIndex) -> Self {
        Self {
            excitation: n,
            scattering: n,
        }
    }

    /// Computes the local-field correction factor for this medium.
    ///
    /// See [`scaling::local_field_correction`].
    #[inline]
    pub fn local_field_factor(&self) -> f64 {
        scaling::local_field_correction(self.excitation.0, self.scattering.0)
    }
}

/// A single vibrational Raman band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RamanBand {
    /// Vibrational shift of the band.
    pub frequency: Wavenumber,
    /// Depolarization ratio of the band, physically in `[0, 1]`.
    pub depolarization_ratio: f64,
}

impl RamanBand {
    /// Approximates the band's cross-section under a different excitation wavelength.
    ///
    /// See [`scaling::interpolate_to_wavelength`].
    #[inline]
    pub fn interpolate(&self, rcs: f64, from: Wavelength, to: Wavelength) -> f64 {
        scaling::interpolate_to_wavelength(rcs, self.frequency.0, from.0, to.0)
    }

    /// Converts a differential cross-section of this band into a total cross-section.
    ///
    /// See [`scaling::differential_to_total`].
    #[inline]
    pub fn total_cross_section(&self, diff_rcs: f64) -> f64 {
        scaling::differential_to_total(self.depolarization_ratio, diff_rcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wavelength_wavenumber_round_trip() {
        let green = Wavelength(532.0);
        assert_relative_eq!(green.wavenumber().0, 18_796.992481203008, epsilon = 1e-9);
        assert_relative_eq!(green.wavenumber().wavelength().0, 532.0, max_relative = 1e-15);
    }

    #[test]
    fn test_medium_forwards_to_local_field_correction() {
        let water = Medium {
            excitation: RefractiveIndex(1.33),
            scattering: RefractiveIndex(1.4),
        };
        assert_eq!(
            water.local_field_factor(),
            scaling::local_field_correction(1.33, 1.4)
        );

        let vacuum = Medium::non_dispersive(RefractiveIndex(1.0));
        assert_eq!(vacuum.local_field_factor(), 1.0);
    }

    #[test]
    fn test_band_forwards_to_scaling_functions() {
        let ring_breathing = RamanBand {
            frequency: Wavenumber(992.3),
            depolarization_ratio: 0.1,
        };

        assert_eq!(
            ring_breathing.interpolate(1.0, Wavelength(488.0), Wavelength(532.0)),
            scaling::interpolate_to_wavelength(1.0, 992.3, 488.0, 532.0)
        );
        assert_eq!(
            ring_breathing.total_cross_section(1.0),
            scaling::differential_to_total(0.1, 1.0)
        );
    }
}
