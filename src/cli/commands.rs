//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wayfare")]
#[command(about = "Terminal travel planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a trip and export it as an HTML page
    Plan {
        /// Starting city
        #[arg(long = "from", value_name = "CITY", default_value = "")]
        from: String,

        /// Destination city
        #[arg(long = "to", value_name = "CITY", default_value = "")]
        destination: String,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", default_value = "")]
        start: String,

        /// Last day of the trip (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", default_value = "")]
        end: String,

        /// Free-form interests (e.g., "beaches, food")
        #[arg(short, long, default_value = "")]
        interests: String,

        /// Output file (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a saved itinerary markdown file without contacting the planner
    Render {
        /// Itinerary markdown file
        input: PathBuf,

        /// Output file (default: input with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a .wayfare config directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
