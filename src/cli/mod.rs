//! CLI module - Command-line interface for calboard

mod commands;

use clap::{Parser, Subcommand};

/// calboard - shared household calendar
#[derive(Parser)]
#[command(name = "calboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List stored events
    #[command(alias = "ls")]
    Events,

    /// List registered users
    Users,
}

pub use commands::*;
