//! CLI module for the Prediction Model Gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Prediction Model Gateway - registry and dynamic dispatch for prediction models
#[derive(Parser)]
#[command(name = "prediction-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
