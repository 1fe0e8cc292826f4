#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the raman-rcs library, such as an unreadable settings file.
    #[error("Settings error: {0}")]
    Settings(#[from] raman_rcs::RamanError),

    /// General I/O errors while writing results.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// A target unit name that is not recognized.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}
