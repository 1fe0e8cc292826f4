use std::path::PathBuf;
use thiserror::Error;

/// The error type for the fallible operations of the `raman_rcs` library.
///
/// The scaling and conversion formulas never fail: degenerate inputs surface as IEEE-754
/// infinities or NaNs. Errors only arise when loading [`Settings`](crate::Settings), from I/O
/// problems, malformed TOML, or values that cannot describe an experiment.
#[derive(Error, Debug)]
pub enum RamanError {
    /// An I/O error that occurred while attempting to read a settings file.
    ///
    /// The path to the file and the underlying I/O error are provided for context.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a settings file, typically indicating invalid
    /// TOML, an unknown key, or an unrecognized cross-section unit.
    #[error("Failed to deserialize TOML settings: {0}")]
    DeserializationError(#[from] toml::de::Error),

    /// A settings value that parsed correctly but cannot be used, such as a negative
    /// wavelength.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The dotted path of the offending key, for example `excitation.target_nm`.
        field: &'static str,
        /// A description of what is wrong with the value.
        reason: String,
    },
}
