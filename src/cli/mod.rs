//! CLI module for the Users API
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP server

pub mod serve;

use clap::{Parser, Subcommand};

/// Users API - registration and token issuance
#[derive(Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from(["users-api", "serve", "--host", "127.0.0.1", "--port", "8081"]);

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8081));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["users-api", "serve"]);

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }
}
