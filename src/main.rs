use clap::{Parser, Subcommand};
use colored::Colorize;
use sheet2csv::cli;
use sheet2csv::config::{WebConfig, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheet2csv")]
#[command(about = "Convert spreadsheets to CSV, merge English headers, or serve an upload form.")]
#[command(long_about = "sheet2csv - spreadsheet to CSV conversion

COMMANDS:
  convert  - Write the first sheet of a workbook as CSV
  format   - Merge the 'English' header cell through column BU
  web      - Serve an upload form that returns CSV downloads

EXAMPLES:
  sheet2csv convert report.xlsx report.csv
  sheet2csv report.xlsx report.csv          # same as convert
  sheet2csv format report.xlsx              # writes report_merged.xlsx
  PORT=8000 sheet2csv web")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input spreadsheet (shorthand for `convert <INPUT> <OUTPUT>`)
    input: Option<PathBuf>,

    /// Output CSV file
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert the first sheet of a workbook to CSV.

Every used row and column is written, starting at cell A1. No header row
and no index column are added. Supports .xlsx, .xlsm, .xlsb, .xls, .ods.

EXAMPLE:
  sheet2csv convert quarterly.xlsx quarterly.csv")]
    /// Convert a spreadsheet to CSV
    Convert {
        /// Input spreadsheet
        input: PathBuf,

        /// Output CSV file
        output: PathBuf,

        /// Show verbose conversion details
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Merge the 'English' header of a workbook.

Scans rows 1-5 of the active sheet for a cell reading 'English' (any case,
surrounding whitespace ignored). The first match is merged through column BU
on the same row, relabelled 'English', and centered.

The result is saved to <input>_merged.xlsx unless --output is given.
If no header is found, nothing is written.

EXAMPLE:
  sheet2csv format glossary.xlsx            # writes glossary_merged.xlsx")]
    /// Merge the 'English' header cell range
    Format {
        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Output workbook (default: <input>_merged.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Serve a one-page upload form.

  GET  /        - upload form
  POST /        - multipart field 'file', returns <name>.csv as an attachment
  GET  /health  - health check

Stop with Ctrl+C.")]
    /// Start the upload web form
    Web {
        /// Host address to bind to
        #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "SHEET2CSV_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
        port: u16,

        /// Largest accepted upload in MiB
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB, env = "SHEET2CSV_MAX_UPLOAD_MB")]
        max_upload_mb: usize,
    },
}

fn main() -> ExitCode {
    let args = cli::normalize_command_case(std::env::args_os().collect());
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if !e.use_stderr() {
                // --help / --version
                return ExitCode::SUCCESS;
            }
            eprintln!("\n{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    let command = match (cli.command, cli.input, cli.output) {
        (Some(command), _, _) => command,
        (None, Some(input), Some(output)) => Commands::Convert {
            input,
            output,
            verbose: false,
        },
        _ => {
            eprintln!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Commands::Convert {
            input,
            output,
            verbose,
        } => cli::convert(input, output, verbose),

        Commands::Format { input, output } => cli::format_header(input, output),

        Commands::Web {
            host,
            port,
            max_upload_mb,
        } => cli::web(WebConfig::new(host, port, max_upload_mb)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
