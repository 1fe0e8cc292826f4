use super::cli::{Cli, Command, ConvertArgs, InterpolateArgs, LocalFieldArgs, TotalArgs};
use super::error::CliError;
use super::io::{self, Quantity, Report};
use raman_rcs::{
    CrossSectionUnit, Settings, convert_from_atomic_units, differential_to_total,
    get_default_settings, interpolate_to_wavelength, local_field_correction, scaling,
};
use tracing::{debug, info, warn};

pub fn run(args: Cli) -> Result<(), CliError> {
    let settings = match &args.config {
        Some(path) => {
            info!("Loading settings from '{}'", path.display());
            Settings::load_from_file(path)?
        }
        None => *get_default_settings(),
    };
    debug!(?settings, "Resolved settings");

    let report = match &args.command {
        Command::Interpolate(cmd) => interpolate(cmd, &settings),
        Command::LocalField(cmd) => local_field(cmd, &settings),
        Command::Total(cmd) => total(cmd),
        Command::Convert(cmd) => convert(cmd, &settings)?,
    };

    if !report.result.value.is_finite() {
        warn!(
            operation = report.operation,
            "Result is not finite; check for degenerate inputs"
        );
    }

    let precision = args.output.precision.unwrap_or(settings.report.precision);
    let mut writer = std::io::stdout().lock();
    io::write_report(&mut writer, &report, &args.output.format, precision)?;

    Ok(())
}

fn interpolate(cmd: &InterpolateArgs, settings: &Settings) -> Report {
    let lambda_org = cmd.lambda_org.unwrap_or(settings.excitation.original_nm);
    let lambda_interp = cmd.lambda_interp.unwrap_or(settings.excitation.target_nm);

    let rcs = interpolate_to_wavelength(cmd.rcs, cmd.freq, lambda_org, lambda_interp);

    Report {
        operation: "Wavelength Interpolation",
        inputs: vec![
            Quantity::new("rcs", cmd.rcs),
            Quantity::with_unit("freq", cmd.freq, "cm⁻¹"),
            Quantity::with_unit("lambda_org", lambda_org, "nm"),
            Quantity::with_unit("lambda_interp", lambda_interp, "nm"),
        ],
        derived: vec![Quantity::new(
            "scaling_factor",
            scaling::scaling_factor(cmd.freq, lambda_org, lambda_interp),
        )],
        result: Quantity::new("rcs_interp", rcs),
    }
}

fn local_field(cmd: &LocalFieldArgs, settings: &Settings) -> Report {
    let n_exc = cmd.n_exc.unwrap_or(settings.medium.n_exc);
    let n_sc = cmd.n_sc.unwrap_or(settings.medium.n_sc);

    Report {
        operation: "Local-Field Correction",
        inputs: vec![Quantity::new("n_exc", n_exc), Quantity::new("n_sc", n_sc)],
        derived: Vec::new(),
        result: Quantity::new("correction", local_field_correction(n_exc, n_sc)),
    }
}

fn total(cmd: &TotalArgs) -> Report {
    Report {
        operation: "Differential to Total Cross-Section",
        inputs: vec![
            Quantity::new("dep_ratio", cmd.dep_ratio),
            Quantity::new("diff_rcs", cmd.diff),
        ],
        derived: Vec::new(),
        result: Quantity::new("total_rcs", differential_to_total(cmd.dep_ratio, cmd.diff)),
    }
}

fn convert(cmd: &ConvertArgs, settings: &Settings) -> Result<Report, CliError> {
    let unit = match &cmd.to {
        Some(name) => name
            .parse::<CrossSectionUnit>()
            .map_err(CliError::InvalidUnit)?,
        None => settings.report.unit,
    };

    Ok(Report {
        operation: "Atomic Unit Conversion",
        inputs: vec![Quantity::with_unit(
            "rcs",
            cmd.rcs,
            CrossSectionUnit::AtomicUnits.to_string(),
        )],
        derived: Vec::new(),
        result: Quantity::with_unit(
            "rcs",
            convert_from_atomic_units(cmd.rcs, unit),
            unit.to_string(),
        ),
    })
}
