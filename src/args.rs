//! Command line arguments.

use crate::config;
use clap::Parser;
use std::path::PathBuf;

/// Write one Markdown table of used IPs per subnet of a Shared VPC.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Shared VPC host project id.
    pub host_project: String,

    /// Directory for the `<subnet>.md` reports.
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// log4rs YAML config; stderr logging is used if it can't be read.
    #[arg(long, default_value = config::DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_project_only() {
        let cli = Cli::try_parse_from(["gcp-vpc-ip-summary", "host-net"]).unwrap();
        assert_eq!(cli.host_project, "host-net");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_output_dir() {
        let cli =
            Cli::try_parse_from(["gcp-vpc-ip-summary", "host-net", "-o", "reports"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_missing_host_project_is_error() {
        assert!(Cli::try_parse_from(["gcp-vpc-ip-summary"]).is_err());
    }
}
