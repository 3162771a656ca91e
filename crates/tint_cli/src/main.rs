//! Tint CLI
//!
//! Command-line front end for the tint theme engine:
//! - `themes`: list the built-in palettes
//! - `css` / `vars`: print generated stylesheets
//! - `mode` / `color`: read or change a saved preference file

mod commands;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tint_theme::ColorScheme;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::commands::Preferences;

#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(about = "Inspect tint themes, emit stylesheets, and manage saved preferences")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Theme configuration file (tint.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in themes
    Themes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the stylesheet for a theme
    Css {
        /// Theme id (warm, cool, pink, green, blue); defaults to the configured theme
        theme: Option<String>,

        /// Emit every registered theme
        #[arg(long, conflicts_with = "theme")]
        all: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print one block of a theme as `name: value` lines
    Vars {
        /// Theme id
        theme: String,

        #[arg(long, value_enum, default_value_t = SchemeArg::Light)]
        mode: SchemeArg,
    },

    /// Read or change the saved mode
    Mode {
        #[command(subcommand)]
        action: ModeAction,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Read or change the saved color theme
    Color {
        #[command(subcommand)]
        action: ColorAction,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ModeAction {
    /// Show the saved mode and whether it resolves to dark
    Get {
        #[arg(long)]
        json: bool,
    },
    /// Save a mode (light, dark, system)
    Set { mode: String },
    /// Light becomes dark; dark and system become light
    Toggle,
}

#[derive(Subcommand, Debug)]
enum ColorAction {
    /// Show the saved color theme
    Get {
        #[arg(long)]
        json: bool,
    },
    /// Save a color theme
    Set { theme: String },
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// Preference file
    #[arg(long, global = true, default_value = "tint-prefs.toml")]
    store: PathBuf,

    /// Treat the system as preferring dark when resolving `system` mode
    #[arg(long, global = true)]
    prefers_dark: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => ColorScheme::Light,
            SchemeArg::Dark => ColorScheme::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Themes { json } => {
            let registry = commands::registry(&config);
            if json {
                println!("{}", commands::themes_json(&registry)?);
            } else {
                print!("{}", commands::themes_table(&registry));
            }
        }
        Commands::Css { theme, all, out } => {
            let css = commands::css(&config, theme.as_deref(), all)?;
            match out {
                Some(path) => {
                    fs::write(&path, &css)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote stylesheet to {}", path.display());
                }
                None => println!("{}", css),
            }
        }
        Commands::Vars { theme, mode } => {
            print!("{}", commands::vars(&config, &theme, mode.into())?);
        }
        Commands::Mode { action, store } => {
            let prefs = Preferences::open(&store.store, config, store.prefers_dark)?;
            match action {
                ModeAction::Get { json } => print_state(&prefs, json)?,
                ModeAction::Set { mode } => {
                    prefs.set_mode(&mode)?;
                    print_state(&prefs, false)?;
                }
                ModeAction::Toggle => {
                    prefs.toggle_mode()?;
                    print_state(&prefs, false)?;
                }
            }
        }
        Commands::Color { action, store } => {
            let prefs = Preferences::open(&store.store, config, store.prefers_dark)?;
            match action {
                ColorAction::Get { json } => print_state(&prefs, json)?,
                ColorAction::Set { theme } => {
                    prefs.set_color_theme(&theme)?;
                    print_state(&prefs, false)?;
                }
            }
        }
    }

    Ok(())
}

fn print_state(prefs: &Preferences, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&prefs.state())?);
    } else {
        print!("{}", prefs.summary());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn store_flags_follow_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "tint", "mode", "set", "dark", "--store", "prefs.toml", "--prefers-dark",
        ])
        .unwrap();
        match cli.command {
            Commands::Mode {
                action: ModeAction::Set { mode },
                store,
            } => {
                assert_eq!(mode, "dark");
                assert_eq!(store.store, PathBuf::from("prefs.toml"));
                assert!(store.prefers_dark);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn css_all_conflicts_with_theme() {
        assert!(Cli::try_parse_from(["tint", "css", "warm", "--all"]).is_err());
        assert!(Cli::try_parse_from(["tint", "css", "--all"]).is_ok());
    }
}
