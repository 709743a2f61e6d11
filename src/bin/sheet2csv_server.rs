//! sheet2csv web form binary
//!
//! Standalone server for the upload form; same as `sheet2csv web`.

use clap::Parser;
use sheet2csv::api::run_web_server;
use sheet2csv::config::{WebConfig, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "sheet2csv-server")]
#[command(version)]
#[command(about = "sheet2csv web form - upload a spreadsheet, download CSV")]
#[command(long_about = r#"
sheet2csv web form

Endpoints:
  - GET  /        - Upload form
  - POST /        - Multipart upload (field 'file'), returns <name>.csv
  - GET  /health  - Health check

Features:
  - Graceful shutdown on SIGINT/SIGTERM
  - Request tracing (RUST_LOG=sheet2csv=debug,tower_http=debug)

Example usage:
  sheet2csv-server                       # Start on 0.0.0.0:5000
  PORT=8000 sheet2csv-server --host 127.0.0.1

  curl -F file=@report.xlsx -OJ http://localhost:5000/
"#)]
struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "SHEET2CSV_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Largest accepted upload in MiB
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB, env = "SHEET2CSV_MAX_UPLOAD_MB")]
    max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run_web_server(WebConfig::new(args.host, args.port, args.max_upload_mb)).await
}
