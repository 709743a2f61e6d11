//! CLI command handlers

pub mod commands;

pub use commands::{convert, format_header, normalize_command_case, usage, web};
