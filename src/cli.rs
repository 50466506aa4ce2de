use crate::export::ChartFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Visualizer API base URL (overrides VISUALIZER_API_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the measured properties available for charting
    Properties,

    /// Print the parent sequence and the sequence with all mutations applied
    Sequence {
        /// Write FASTA instead of plain lines
        #[arg(long)]
        fasta: bool,

        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,
    },

    /// Emit chart rows for one property
    Chart {
        /// Property to chart (default: first property of the first variant)
        #[arg(short, long)]
        property: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ChartFormat,

        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,
    },

    /// Show or update the saved configuration
    Config {
        /// New API base URL to store
        #[arg(long)]
        api_base_url: Option<String>,

        /// New request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}
