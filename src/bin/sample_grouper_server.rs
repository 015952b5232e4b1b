//! Sample Grouper API Server binary
//!
//! HTTP API for uploading task exports and downloading the grouped workbook.

use clap::Parser;
use sample_grouper::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "sample-grouper-server")]
#[command(version)]
#[command(about = "Sample Grouper API Server - upload task exports, download grouped workbooks")]
#[command(long_about = r#"
Sample Grouper API Server

Endpoints:
  - POST /api/v1/upload               - Upload a spreadsheet (raw request body)
                                        ?labels=en|nl selects the header set
  - GET  /api/v1/groups               - Groups of the current upload with counts
  - GET  /api/v1/groups/:label        - Entries of one group
                                        ?sort=date|location|address|order&direction=asc|desc
  - GET  /api/v1/orders               - Unique order numbers, comma separated
  - GET  /api/v1/export               - Grouped workbook download

Additional endpoints:
  - GET  /health                      - Health check
  - GET  /version                     - Server version info
  - GET  /                            - API documentation

A newer upload always wins: an older upload that finishes later is discarded.

Example usage:
  sample-grouper-server                           # Start on localhost:8080
  sample-grouper-server --host 0.0.0.0 --port 3000

  curl -X POST --data-binary @tasks.xlsx http://localhost:8080/api/v1/upload
  curl -o Samples_Export.xlsx http://localhost:8080/api/v1/export
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "GROUPER_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "GROUPER_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config).await
}
