//! Command-line interface for the Kiln compiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kilnc")]
#[command(about = "Kiln programming language compiler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve modules to source files and report the ones that are missing
    Resolve {
        /// Module names, such as `std::io`
        #[arg(required = true)]
        modules: Vec<String>,

        /// Additional source directory, searched after the current directory
        #[arg(short = 'I', long = "include")]
        include: Vec<PathBuf>,

        /// Source file extension
        #[arg(long, default_value = "kiln")]
        extension: String,

        /// Color diagnostics with ANSI escape codes
        #[arg(long)]
        color: bool,
    },
}
