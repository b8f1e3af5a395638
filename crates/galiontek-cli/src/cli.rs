//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// galiontek - meeting summaries and exports for teaching orders
#[derive(Debug, Parser)]
#[command(name = "galiontek")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "GALIONTEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file
    #[arg(long, env = "GALIONTEK_DATA")]
    pub data: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create or update an order row in the data file
    Order {
        /// The order id
        id: String,

        /// Order title
        #[arg(long)]
        title: Option<String>,

        /// Client display name
        #[arg(long)]
        client: Option<String>,

        /// Agreed/contracted total units
        #[arg(long)]
        hours: Option<f64>,
    },

    /// Import meetings for an order from an xlsx workbook
    Import {
        /// Workbook path
        file: PathBuf,

        /// The owning order id
        #[arg(long)]
        order: String,
    },

    /// Print the meeting summary and monthly breakdown for an order
    Summary {
        /// The order id
        #[arg(long)]
        order: String,

        /// Count in 45-minute teaching units instead of academic hours
        #[arg(long)]
        teaching_units: bool,
    },

    /// Export the meeting list of an order
    Export {
        /// The order id
        #[arg(long)]
        order: String,

        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Count in 45-minute teaching units instead of academic hours
        #[arg(long)]
        teaching_units: bool,

        /// Directory to write the PDF file into (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Open the generated file or link
        #[arg(long)]
        open: bool,
    },
}

/// The export renderer to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Landscape RTL PDF table.
    Pdf,
    /// WhatsApp share deep link.
    Whatsapp,
    /// mailto: deep link with HTML table body.
    Email,
}
