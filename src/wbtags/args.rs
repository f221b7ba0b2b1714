use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "wbtags", bin_name = "wbtags", version = get_version())]
#[command(about = "Tag and filter world books", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tag settings file (JSON)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Directory holding world-book files
    #[arg(short, long, global = true)]
    pub worlds: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tags of a world book
    Show {
        /// World book name
        world: String,
    },

    /// Replace the tags of a world book
    Set {
        /// World book name
        world: String,

        /// Tags, comma separated or as separate arguments (none clears)
        #[arg(num_args = 0..)]
        tags: Vec<String>,
    },

    /// Remove all tags from a world book
    Clear {
        /// World book name
        world: String,
    },

    /// List every tag in use
    All,

    /// List world books, narrowed by the active filter
    #[command(alias = "ls")]
    List {
        /// Filter by these tags instead of the active filter
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Candidate world books (defaults to the worlds directory)
        #[arg(long = "world", id = "world_names", value_name = "WORLDS")]
        worlds: Vec<String>,
    },

    /// Manage the active filter
    Filter {
        #[command(subcommand)]
        action: Option<FilterAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterAction {
    /// Show the selected tags
    Show,

    /// Select tags
    Add {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Deselect tags
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Deselect everything
    Clear,

    /// Drop selected tags no world book uses any more
    Prune,
}
