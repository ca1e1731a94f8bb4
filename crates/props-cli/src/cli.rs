//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Property Manager - Resolve layered project properties
#[derive(Parser, Debug)]
#[command(name = "props")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory to resolve
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Environment name selecting gradle-<NAME>.properties overrides
    #[arg(short, long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Project property override (repeatable, always wins)
    #[arg(short = 'P', long = "project-prop", value_name = "KEY=VALUE")]
    pub project_props: Vec<String>,

    /// System property definition seeded before resolution (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// Override the home directory searched for global property files
    #[arg(long, value_name = "DIR", env = "PROPS_HOME_DIR")]
    pub home_dir: Option<PathBuf>,

    /// Print filter tokens instead of resolved properties
    #[arg(long)]
    pub tokens: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Fail unless this property resolved (repeatable)
    #[arg(long, value_name = "KEY")]
    pub require: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
