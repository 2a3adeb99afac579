//! CLI argument definitions using clap
//!
//! Commands:
//! - motorpool serve [--host <host>] [--port <port>] [--log-level <level>]

use clap::{Parser, Subcommand};

/// motorpool - a small vehicle record-management REST service
#[derive(Parser, Debug)]
#[command(name = "motorpool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        log_level: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["motorpool", "serve"]).unwrap();
        let Command::Serve { host, port, log_level } = cli.command;
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 8080);
        assert_eq!(log_level, "info");
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["motorpool", "serve", "--port", "9090", "--log-level", "debug"])
                .unwrap();
        let Command::Serve { port, log_level, .. } = cli.command;
        assert_eq!(port, 9090);
        assert_eq!(log_level, "debug");
    }
}
