use clap::{Args, Parser, Subcommand, ValueEnum};
use raman_rcs::settings::MAX_PRECISION;
use std::path::PathBuf;

const ABOUT: &str = "Scale and convert Raman scattering cross-sections.";
const LONG_ABOUT: &str = "\
Scale and convert Raman scattering cross-sections.

Each command applies a single closed-form formula. Chain commands in whatever order your
experimental workflow requires, for example correcting for the local field before or after
moving to a new excitation wavelength.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(
    version,
    about = ABOUT,
    long_about = LONG_ABOUT,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Settings file in TOML format.
    ///
    /// Provides default wavelengths, refractive indices, and report options. If not specified,
    /// built-in defaults are used.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// The formula to apply.
#[derive(Subcommand)]
pub enum Command {
    /// Approximate a cross-section at a different excitation wavelength.
    Interpolate(InterpolateArgs),
    /// Compute the local-field correction factor of a medium.
    LocalField(LocalFieldArgs),
    /// Convert a differential cross-section to a total cross-section.
    Total(TotalArgs),
    /// Convert a cross-section from atomic units to a reporting unit.
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct InterpolateArgs {
    /// Cross-section measured at the original wavelength.
    #[arg(long, allow_negative_numbers = true)]
    pub rcs: f64,

    /// Vibrational shift of the band in cm^-1.
    #[arg(long, allow_negative_numbers = true)]
    pub freq: f64,

    /// Original excitation wavelength in nm [default: excitation.original_nm].
    #[arg(long = "from", value_name = "NM")]
    pub lambda_org: Option<f64>,

    /// Target excitation wavelength in nm [default: excitation.target_nm].
    #[arg(long = "to", value_name = "NM")]
    pub lambda_interp: Option<f64>,
}

#[derive(Args)]
pub struct LocalFieldArgs {
    /// Refractive index at the excitation wavelength [default: medium.n_exc].
    #[arg(long)]
    pub n_exc: Option<f64>,

    /// Refractive index at the scattered wavelength [default: medium.n_sc].
    #[arg(long)]
    pub n_sc: Option<f64>,
}

#[derive(Args)]
pub struct TotalArgs {
    /// Depolarization ratio of the band.
    #[arg(long, allow_negative_numbers = true)]
    pub dep_ratio: f64,

    /// Differential cross-section.
    #[arg(long, allow_negative_numbers = true)]
    pub diff: f64,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Cross-section in atomic units squared.
    #[arg(long, allow_negative_numbers = true)]
    pub rcs: f64,

    /// Target unit: au, cm6, si, or angstrom6 [default: report.unit].
    #[arg(long, value_name = "UNIT")]
    pub to: Option<String>,
}

/// Options for controlling the output format.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output format for the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    pub format: OutputFormat,

    /// Number of decimal places to display, at most 17 [default: report.precision].
    #[arg(short, long, global = true, value_parser = parse_precision)]
    pub precision: Option<usize>,
}

/// Output format for a computed result.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Table listing the operation, its inputs, and the result.
    Pretty,
    /// The bare result value on a single line.
    Plain,
    /// JSON object with the operation, inputs, and result.
    Json,
}

fn parse_precision(value: &str) -> Result<usize, String> {
    let precision: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", value))?;
    if precision > MAX_PRECISION {
        return Err(format!("at most {} decimal places are supported", MAX_PRECISION));
    }
    Ok(precision)
}
