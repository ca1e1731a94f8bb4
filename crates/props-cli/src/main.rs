//! Property Manager CLI
//!
//! Resolves the layered properties of a project directory and prints
//! them, standing in for a host build tool's configuration phase.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{Error, Result};
use props_core::{ProjectNode, PropertyResolver, system_properties};
use std::collections::HashMap;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // -D definitions become system properties before anything resolves
    system_properties::seed(parse_pairs(&cli.defines)?);

    let overrides: HashMap<String, String> = parse_pairs(&cli.project_props)?.into_iter().collect();

    let mut resolver = PropertyResolver::new().with_overrides(overrides);
    if let Some(home_dir) = &cli.home_dir {
        resolver = resolver.with_home_dir(home_dir);
    }

    let mut node = ProjectNode::new(&cli.dir);
    if let Some(environment) = &cli.environment {
        node = node.with_environment(environment);
    }

    let resolved = resolver.resolve(&node)?;

    for key in &cli.require {
        resolved.require(key)?;
    }

    if cli.tokens {
        let tokens = resolved.filter_tokens();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            for (key, value) in &tokens {
                println!("{key}={value}");
            }
        }
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        for (key, value) in resolved.iter() {
            println!("{key}={value}");
        }
    }

    Ok(())
}

/// Split repeated KEY=VALUE arguments into pairs.
fn parse_pairs(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| Error::InvalidPair { arg: arg.clone() })
        })
        .collect()
}
