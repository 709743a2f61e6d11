//! Web form module
//!
//! One-page upload form that converts a workbook to CSV in memory.
//! Run with `sheet2csv web` or `sheet2csv-server`.

pub mod handlers;
mod page;
pub mod server;

pub use page::FormPage;
pub use crate::config::WebConfig;
pub use server::{router, run_web_server};
