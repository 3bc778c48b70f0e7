use clap::Parser;
use gcp_vpc_ip_summary::args::Cli;
use gcp_vpc_ip_summary::gcp::{access_token, GcpClient};
use gcp_vpc_ip_summary::logging::init_logging;
use gcp_vpc_ip_summary::output::FileSink;
use gcp_vpc_ip_summary::{run, BoxError};
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    init_logging(&cli.log_config)?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main() host_project={}", cli.host_project);
    let start = Instant::now();

    let client = GcpClient::new(access_token()?)?;
    let mut sink = FileSink::new(&cli.output_dir)?;

    let written = run(Arc::new(client), &cli.host_project, &mut sink)
        .await
        .map_err(|e| {
            log::error!("Run failed: {e}");
            e
        })?;

    log::info!(
        "Wrote {written} reports to {}, took {:.2} seconds",
        cli.output_dir.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
