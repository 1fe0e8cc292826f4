use super::cli::OutputFormat;
use super::error::CliError;
use prettytable::*;
use raman_rcs::settings::MAX_PRECISION;
use std::io::Write;

/// A named value shown in a report, with an optional unit label.
pub struct Quantity {
    pub name: &'static str,
    pub value: f64,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            unit: None,
        }
    }

    pub fn with_unit(name: &'static str, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name,
            value,
            unit: Some(unit.into()),
        }
    }
}

/// The outcome of one command: the formula applied, what went in, and what came out.
pub struct Report {
    pub operation: &'static str,
    pub inputs: Vec<Quantity>,
    pub derived: Vec<Quantity>,
    pub result: Quantity,
}

pub fn write_report(
    writer: &mut dyn Write,
    report: &Report,
    format: &OutputFormat,
    precision: usize,
) -> Result<(), CliError> {
    let precision = precision.min(MAX_PRECISION);
    match format {
        OutputFormat::Pretty => write_pretty(writer, report, precision),
        OutputFormat::Plain => write_plain(writer, report, precision),
        OutputFormat::Json => write_json(writer, report, precision),
    }
}

fn write_pretty(writer: &mut dyn Write, report: &Report, precision: usize) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    let operation = report.operation;
    title_table.add_row(row![bc->operation]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(row![bc->"Role", bc->"Quantity", bc->"Value", bc->"Unit"]);

    let sections = [("input", &report.inputs), ("derived", &report.derived)];
    for (role, quantities) in sections {
        for quantity in quantities.iter() {
            data_table.add_row(quantity_row(role, quantity, precision));
        }
    }
    data_table.add_row(quantity_row("result", &report.result, precision));

    data_table.print(writer)?;

    Ok(())
}

fn quantity_row(role: &str, quantity: &Quantity, precision: usize) -> Row {
    let value = format_value(quantity.value, precision);
    let unit = quantity.unit.as_deref().unwrap_or("");
    row![l->role, l->quantity.name, r->value, l->unit]
}

fn write_plain(writer: &mut dyn Write, report: &Report, precision: usize) -> Result<(), CliError> {
    writeln!(writer, "{}", format_value(report.result.value, precision))?;
    Ok(())
}

fn write_json(writer: &mut dyn Write, report: &Report, precision: usize) -> Result<(), CliError> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"operation\": \"{}\",", report.operation)?;
    write_json_object(writer, "inputs", &report.inputs, precision)?;
    if !report.derived.is_empty() {
        write_json_object(writer, "derived", &report.derived, precision)?;
    }
    if let Some(unit) = &report.result.unit {
        writeln!(writer, "  \"unit\": \"{}\",", unit)?;
    }
    writeln!(
        writer,
        "  \"result\": {}",
        json_number(report.result.value, precision)
    )?;
    writeln!(writer, "}}")?;
    Ok(())
}

fn write_json_object(
    writer: &mut dyn Write,
    key: &str,
    quantities: &[Quantity],
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "  \"{}\": {{", key)?;
    for (i, quantity) in quantities.iter().enumerate() {
        let comma = if i + 1 < quantities.len() { "," } else { "" };
        writeln!(
            writer,
            "    \"{}\": {}{}",
            quantity.name,
            json_number(quantity.value, precision),
            comma
        )?;
    }
    writeln!(writer, "  }},")?;
    Ok(())
}

/// Formats a value in scientific notation, since cross-sections span dozens of decades.
fn format_value(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*e}", precision, value)
    } else {
        value.to_string()
    }
}

fn json_number(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format_value(value, precision)
    } else {
        "null".to_string()
    }
}
