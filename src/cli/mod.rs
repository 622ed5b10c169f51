//! CLI module for the IPL fan store API
//!
//! Provides the `serve` subcommand that runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// IPL Fan Store - backend for user accounts, team assignment, products and carts
#[derive(Parser)]
#[command(name = "ipl-fanstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
