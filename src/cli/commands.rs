use crate::config::WebConfig;
use crate::error::{SheetError, SheetResult};
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;

const COMMAND_NAMES: [&str; 3] = ["convert", "format", "web"];

/// Usage text printed on argument errors
pub fn usage() -> &'static str {
    "Usage: sheet2csv convert input.xlsx output.csv\n\
     Or   : sheet2csv input.xlsx output.csv\n\
     Or   : sheet2csv web\n\
     Or   : sheet2csv format input.xlsx"
}

/// Lowercase the command word so `WEB` and `Format` select their subcommands.
///
/// Only the first argument after the program name is touched, and only when
/// it names a command; anything else (including shorthand input paths) is
/// passed through unchanged.
pub fn normalize_command_case(mut args: Vec<OsString>) -> Vec<OsString> {
    if let Some(arg) = args.get_mut(1) {
        let lowered = arg.to_str().map(str::to_ascii_lowercase);
        if let Some(name) = lowered.filter(|name| COMMAND_NAMES.contains(&name.as_str())) {
            *arg = OsString::from(name);
        }
    }
    args
}

/// Execute the convert command
pub fn convert(input: PathBuf, output: PathBuf, verbose: bool) -> SheetResult<()> {
    if verbose {
        println!("{}", "Converting spreadsheet".bold().green());
        println!("   Input:  {}", input.display());
        println!("   Output: {}", output.display());
    }

    let grid = crate::convert_file(&input, &output)?;

    if verbose {
        println!("   {} rows, {} columns", grid.height(), grid.width());
    }
    println!("{}", "Conversion complete.".green());
    Ok(())
}

/// Execute the format command
#[cfg(feature = "format")]
pub fn format_header(input: PathBuf, output: Option<PathBuf>) -> SheetResult<()> {
    use crate::excel::{format_english_header, HeaderOutcome};

    match format_english_header(&input, output.as_deref())? {
        HeaderOutcome::Merged { output, range, .. } => {
            if let Some(range) = range {
                println!("   Merged {}", range.bright_blue());
            }
            println!(
                "{} {}",
                "Saved formatted workbook to".green(),
                output.display()
            );
        }
        HeaderOutcome::NotFound => {
            println!("{}", "Could not find an 'English' header to format.".yellow());
        }
    }
    Ok(())
}

/// Execute the format command
#[cfg(not(feature = "format"))]
pub fn format_header(_input: PathBuf, _output: Option<PathBuf>) -> SheetResult<()> {
    Err(SheetError::FeatureDisabled("format"))
}

/// Execute the web command (blocks until shutdown)
#[cfg(feature = "web")]
pub fn web(config: WebConfig) -> SheetResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(crate::api::run_web_server(config))
        .map_err(|e| SheetError::Server(e.to_string()))
}

/// Execute the web command (blocks until shutdown)
#[cfg(not(feature = "web"))]
pub fn web(_config: WebConfig) -> SheetResult<()> {
    Err(SheetError::FeatureDisabled("web"))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
