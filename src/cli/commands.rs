use crate::core::{sorted_view, SortColumn, SortDirection, SortState};
use crate::error::{GrouperError, GrouperResult};
use crate::excel::SpreadsheetExporter;
use crate::pipeline::{process_file, ProcessOutcome};
use crate::types::{Group, HeaderLabels, Language};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Print the missing-headers notice, if any
fn report_missing_headers(outcome: &ProcessOutcome) {
    if let Some(notice) = outcome.notice() {
        eprintln!("{} {}", "⚠️ ".yellow(), notice.yellow().bold());
    }
}

fn load(file: &Path, labels: &HeaderLabels, verbose: bool) -> GrouperResult<ProcessOutcome> {
    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }
    let outcome = process_file(file, labels)?;
    report_missing_headers(&outcome);
    if verbose {
        println!(
            "   Found {} groups, {} orders\n",
            outcome.summary.data.len(),
            outcome.summary.orders.len()
        );
    }
    Ok(outcome)
}

/// Execute the group command
pub fn group(
    file: PathBuf,
    language: Language,
    sort: Option<SortColumn>,
    descending: bool,
    verbose: bool,
) -> GrouperResult<()> {
    let labels = language.labels();
    println!("{}", "🧪 Sample Grouper - Groups".bold().green());
    println!("   File: {}\n", file.display());

    let outcome = load(&file, &labels, verbose)?;
    let summary = &outcome.summary;

    let sort_state = match sort {
        Some(column) => SortState::by(
            column,
            if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        ),
        None => SortState::default(),
    };

    for group in summary.data.iter() {
        print_group(group, &labels, &sort_state);
    }

    println!(
        "{} {}",
        "Total samples:".bold(),
        summary.total.to_string().bold().green()
    );
    println!("{} {}", "Unique orders:".bold(), summary.orders.len());
    Ok(())
}

fn print_group(group: &Group, labels: &HeaderLabels, sort: &SortState) {
    println!(
        "   📦 {} ({}: {})",
        group.label.bright_blue().bold(),
        labels.count_label,
        group.len()
    );
    let [date, location, address, order] = labels.export_headers;
    println!(
        "      {:>4}  {:<12} {:<32} {:<28} {}",
        "#", date, location, address, order
    );
    for (idx, entry) in sorted_view(&group.entries, sort).into_iter().enumerate() {
        println!(
            "      {:>4}  {:<12} {:<32} {:<28} {}",
            idx + 1,
            entry.rounding_date,
            entry.location,
            entry.street,
            entry.order_key.cyan()
        );
    }
    println!();
}

/// Execute the orders command
pub fn orders(file: PathBuf, language: Language, output: Option<PathBuf>) -> GrouperResult<()> {
    let labels = language.labels();
    let outcome = load(&file, &labels, false)?;
    let joined = outcome.summary.orders_joined();

    match output {
        Some(path) => match fs::write(&path, &joined) {
            Ok(()) => {
                println!(
                    "{} {} order numbers written to {}",
                    "✅".green(),
                    outcome.summary.orders.len(),
                    path.display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{} Failed to copy order numbers: {}", "❌".red(), e);
                Err(GrouperError::Io(e))
            }
        },
        None => {
            println!("{}", joined);
            Ok(())
        }
    }
}

/// Execute the export command
pub fn export(
    file: PathBuf,
    language: Language,
    output: Option<PathBuf>,
    verbose: bool,
) -> GrouperResult<()> {
    let labels = language.labels();
    let output = output.unwrap_or_else(|| PathBuf::from(labels.export_filename));
    println!("{}", "🧪 Sample Grouper - Excel Export".bold().green());
    println!("   Input:  {}", file.display());
    println!("   Output: {}\n", output.display());

    let outcome = load(&file, &labels, verbose)?;

    if verbose {
        println!("{}", "📊 Exporting to Excel...".cyan());
    }

    let exporter = SpreadsheetExporter::new(&outcome.summary.data, labels);
    if let Err(e) = exporter.export(&output) {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        return Err(e);
    }

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Excel file: {}", output.display());
    println!("   Sheets:     {}\n", outcome.summary.data.len());
    Ok(())
}
