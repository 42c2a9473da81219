use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebook", version)]
#[command(about = "Keep, search and edit your recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes and config (overrides RECIPEBOOK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Only show recipes whose name contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a recipe
    #[command(alias = "a")]
    Add {
        /// Name of the recipe
        name: String,

        /// Ingredients, comma separated
        ingredients: String,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },

    /// Change fields of an existing recipe
    #[command(alias = "u")]
    Update {
        /// Id of the recipe
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        ingredients: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the recipes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Show a recipe in full
    #[command(alias = "v")]
    View { id: u64 },

    /// Interactive session (type `help` once inside)
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, pretty-json)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the recipe data file
    Path,
}
