use clap::{Parser, Subcommand};
use sample_grouper::cli;
use sample_grouper::core::SortColumn;
use sample_grouper::error::GrouperResult;
use sample_grouper::types::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sample-grouper")]
#[command(about = "Group delivery task exports by sample description.")]
#[command(long_about = "Sample Grouper - group delivery task exports per sample

Reads the first worksheet of a task export (.xlsx), checks the required
columns, splits each task's collo description into samples and groups the
tasks per sample, largest group first.

REQUIRED COLUMNS (--labels en):
  Order key, Rounding-to-date of first task, Name of first task,
  Street of first task, Place of first task, Collo description of first task,
  Excl. VAT

COMMANDS:
  group    - Show every sample group as a table
  orders   - List the unique order numbers (comma separated)
  export   - Write one worksheet per sample group (.xlsx)

EXAMPLES:
  sample-grouper group tasks.xlsx --sort date --desc
  sample-grouper orders tasks.xlsx -o orders.txt
  sample-grouper export tasks.xlsx --labels nl")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every sample group as a table
    Group {
        /// Path to the task export (.xlsx)
        file: PathBuf,

        /// Header label set of the export: en or nl
        #[arg(short, long, default_value = "en")]
        labels: Language,

        /// Sort each group by column: date, location, address or order
        #[arg(short, long)]
        sort: Option<SortColumn>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the unique order numbers, comma separated
    Orders {
        /// Path to the task export (.xlsx)
        file: PathBuf,

        /// Header label set of the export: en or nl
        #[arg(short, long, default_value = "en")]
        labels: Language,

        /// Write the list to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Export the sample groups to Excel.

Each group becomes a worksheet named after the sample (shortened to 31
characters and made unique where Excel requires it) with the columns
Date, Location, Address and Order number.

Without --output the file is written to the current directory as
Samples_Export.xlsx (Monsters_Export.xlsx with --labels nl).

Nothing is written when the export contains no groups.")]
    /// Export one worksheet per sample group (.xlsx)
    Export {
        /// Path to the task export (.xlsx)
        file: PathBuf,

        /// Header label set of the export: en or nl
        #[arg(short, long, default_value = "en")]
        labels: Language,

        /// Output Excel file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> GrouperResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Group {
            file,
            labels,
            sort,
            desc,
            verbose,
        } => cli::group(file, labels, sort, desc, verbose),

        Commands::Orders {
            file,
            labels,
            output,
        } => cli::orders(file, labels, output),

        Commands::Export {
            file,
            labels,
            output,
            verbose,
        } => cli::export(file, labels, output, verbose),
    }
}
