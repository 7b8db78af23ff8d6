//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// A named numeric result.
#[derive(Debug, Clone)]
pub struct Metric {
    /// Display name, including the unit.
    pub name: String,
    /// Raw value.
    pub value: f64,
    /// Decimal places in table output.
    pub precision: usize,
}

impl Metric {
    /// Creates a metric shown with six decimals.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            precision: 6,
        }
    }

    /// Creates a money amount shown with two decimals.
    pub fn money(name: impl Into<String>, value: f64) -> Self {
        Self {
            precision: 2,
            ..Self::new(name, value)
        }
    }
}

/// Prints metrics; the first one is the primary result.
///
/// Minimal output prints only the primary value. JSON keeps full precision
/// and writes undefined values as `null`.
pub fn print_metrics(
    title: &str,
    metrics: &[Metric],
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(title);
            }
            let rows: Vec<KeyValue> = metrics
                .iter()
                .map(|m| KeyValue::new(&m.name, format!("{:.prec$}", m.value, prec = m.precision)))
                .collect();
            print_table(&rows)
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = metrics
                .iter()
                .map(|m| (m.name.clone(), serde_json::Value::from(m.value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
            Ok(())
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["metric", "value"])?;
            for m in metrics {
                wtr.write_record([m.name.clone(), m.value.to_string()])?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Minimal => {
            if let Some(first) = metrics.first() {
                println!("{}", first.value);
            }
            Ok(())
        }
    }
}

/// Prints a section header unless output is quiet or machine-readable.
pub fn print_section(title: &str, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Table && !quiet {
        print_header(title);
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Formats a value with two decimals for table cells.
pub fn display_money(value: &f64) -> String {
    format!("{value:.2}")
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
