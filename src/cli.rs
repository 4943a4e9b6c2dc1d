use clap::{Parser, Subcommand};
use polyzone_settings::Config;
use std::path::PathBuf;

use crate::replay::{replay, GestureScript};

/// Polyzone region editor command line interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a gesture script and print the resulting regions as JSON
    Replay {
        /// Path to a JSON gesture script
        script: PathBuf,

        /// Configuration file (TOML or JSON); defaults to the user config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the number of grid columns
        #[arg(long)]
        columns: Option<i32>,

        /// Override the grid cell width
        #[arg(long)]
        cell_width: Option<i32>,

        /// Override the grid cell height
        #[arg(long)]
        cell_height: Option<i32>,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Show configuration
    Config {
        /// Print the built-in defaults as TOML
        #[arg(long, default_value_t = false)]
        print_default: bool,

        /// Print the path of the user configuration file
        #[arg(long, default_value_t = false)]
        path: bool,
    },
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Runs the selected subcommand, writing its output to stdout.
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Replay {
                script,
                config,
                columns,
                cell_width,
                cell_height,
                pretty,
            } => {
                let config = match config {
                    Some(path) => Config::load(path)?,
                    None => Config::load_or_default()?,
                };
                let mut grid = config.grid;
                if let Some(columns) = columns {
                    grid.columns = *columns;
                }
                if let Some(width) = cell_width {
                    grid.cell_width = *width;
                }
                if let Some(height) = cell_height {
                    grid.cell_height = *height;
                }

                let script = GestureScript::load(script)?;
                let report = replay(&script, &config, &grid)?;
                let output = if *pretty {
                    serde_json::to_string_pretty(&report)?
                } else {
                    serde_json::to_string(&report)?
                };
                println!("{}", output);
            }
            Command::Config {
                print_default,
                path,
            } => {
                if *path {
                    println!("{}", Config::default_path()?.display());
                } else if *print_default {
                    print!("{}", Config::default().to_toml_string()?);
                } else {
                    print!("{}", Config::load_or_default()?.to_toml_string()?);
                }
            }
        }
        Ok(())
    }
}
