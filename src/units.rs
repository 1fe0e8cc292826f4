//! This module converts Raman cross-sections from atomic units to reporting unit systems.
//!
//! Quantum-chemical codes produce polarizability derivatives, and hence cross-sections, in
//! atomic units squared. Published values are usually given in cm^6, in SI units
//! (C^2 m^2 J^-1, squared), or in Angstrom^6. Each conversion multiplies by the square of a fixed
//! IUPAC Green Book factor from [`crate::math::constants`].

use crate::math::constants::{AU_POLARIZABILITY_TO_SI, AU_VOLUME_TO_ANGSTROM3, AU_VOLUME_TO_CM3};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Converts a cross-section from atomic units squared to cm^6.
#[inline]
pub fn au_to_cm6(rcs: f64) -> f64 {
    rcs * AU_VOLUME_TO_CM3.powi(2)
}

/// Converts a cross-section from atomic units squared to SI units.
#[inline]
pub fn au_to_si(rcs: f64) -> f64 {
    rcs * AU_POLARIZABILITY_TO_SI.powi(2)
}

/// Converts a cross-section from atomic units squared to Angstrom^6.
#[inline]
pub fn au_to_angstrom6(rcs: f64) -> f64 {
    rcs * AU_VOLUME_TO_ANGSTROM3.powi(2)
}

/// The unit systems a cross-section can be reported in.
///
/// In configuration files and on the command line, units are written as `au`, `cm6`, `si`, or
/// `angstrom6`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CrossSectionUnit {
    /// Atomic units squared, as produced by quantum-chemical calculations.
    #[serde(rename = "au")]
    AtomicUnits,
    /// Centimetres to the sixth power.
    #[default]
    Cm6,
    /// SI polarizability units, squared.
    Si,
    /// Angstroms to the sixth power.
    Angstrom6,
}

impl CrossSectionUnit {
    /// All supported units, in display order.
    pub const ALL: [CrossSectionUnit; 4] = [
        CrossSectionUnit::AtomicUnits,
        CrossSectionUnit::Cm6,
        CrossSectionUnit::Si,
        CrossSectionUnit::Angstrom6,
    ];

    /// The short name used in settings files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CrossSectionUnit::AtomicUnits => "au",
            CrossSectionUnit::Cm6 => "cm6",
            CrossSectionUnit::Si => "si",
            CrossSectionUnit::Angstrom6 => "angstrom6",
        }
    }
}

impl fmt::Display for CrossSectionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrossSectionUnit::AtomicUnits => "a.u.²",
            CrossSectionUnit::Cm6 => "cm⁶",
            CrossSectionUnit::Si => "C²·m²·J⁻¹ (squared)",
            CrossSectionUnit::Angstrom6 => "Å⁶",
        };
        f.write_str(label)
    }
}

impl FromStr for CrossSectionUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrossSectionUnit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown cross-section unit '{}', expected one of: au, cm6, si, angstrom6",
                    s
                )
            })
    }
}

/// Converts a cross-section in atomic units squared to the requested unit system.
///
/// `CrossSectionUnit::AtomicUnits` returns the value unchanged.
///
/// # Examples
///
/// ```
/// use raman_rcs::{CrossSectionUnit, au_to_cm6, convert_from_atomic_units};
///
/// assert_eq!(convert_from_atomic_units(2.0, CrossSectionUnit::Cm6), au_to_cm6(2.0));
/// assert_eq!(convert_from_atomic_units(2.0, CrossSectionUnit::AtomicUnits), 2.0);
/// ```
pub fn convert_from_atomic_units(rcs: f64, unit: CrossSectionUnit) -> f64 {
    match unit {
        CrossSectionUnit::AtomicUnits => rcs,
        CrossSectionUnit::Cm6 => au_to_cm6(rcs),
        CrossSectionUnit::Si => au_to_si(rcs),
        CrossSectionUnit::Angstrom6 => au_to_angstrom6(rcs),
    }
}
