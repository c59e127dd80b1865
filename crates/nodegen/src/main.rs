use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use nodegen::compiler::EsbuildCompiler;
use nodegen::{output, resolver};

#[derive(Parser)]
#[command(name = "nodegen")]
#[command(about = "Generate node config artifacts and input type declarations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve node.config.ts and write dist/node.config.json
    Config {
        /// Directory containing node.config.ts (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Resolve node.config.ts and regenerate src/generated/inputTypes.ts
    Types {
        /// Directory containing node.config.ts (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let compiler = EsbuildCompiler;

    match cli.command {
        Commands::Config { dir } => {
            let dir = working_dir(dir)?;
            println!("Generating config...");
            let resolved = resolver::resolve(&dir, &compiler)?;
            let path = output::write_config(&resolved.raw, &dir)?;
            println!("{}", format!("Config written to {}", path.display()).green());
        }
        Commands::Types { dir } => {
            let dir = working_dir(dir)?;
            println!("Generating types...");
            let resolved = resolver::resolve(&dir, &compiler)?;
            let path = output::write_types(&resolved.config, &dir)?;
            println!("{}", format!("Types written to {}", path.display()).green());
        }
    }

    Ok(())
}

fn working_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}
