use clap::{Parser, Subcommand};
use place_ai_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "place-ai")]
#[command(about = "Identify tourist places from AI vision output", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom gazetteer JSON file (overrides the configured one)
    #[arg(long, global = true)]
    pub gazetteer: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify a place from saved vision model responses
    Identify {
        /// Pass-1 response file (detailed identification)
        #[arg(required = true)]
        response: PathBuf,

        /// Pass-2 response file (landmark scan)
        #[arg(short, long)]
        landmarks: Option<PathBuf>,

        /// Output report JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a place name against the gazetteer
    Resolve {
        /// Recognized place name
        #[arg(required = true)]
        name: String,

        /// Description text from the recognition
        #[arg(short, long)]
        description: Option<String>,

        /// Keyword hint (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Print the raw match result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest places for a partial name
    Suggest {
        /// Partial place name
        #[arg(required = true)]
        partial: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List gazetteer places
    Places {
        /// Filter by category (temple/hill_station/religious/wildlife/nature/adventure/city)
        #[arg(short, long)]
        category: Option<Category>,

        /// Filter by district (substring match)
        #[arg(short, long)]
        district: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit configuration
    Config {
        /// Set the default gazetteer file
        #[arg(long)]
        set_gazetteer: Option<PathBuf>,

        /// Show configuration
        #[arg(long)]
        show: bool,
    },
}
