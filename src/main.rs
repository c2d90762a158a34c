use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use wallthemes::themes::{resolve_root, Preferences, ScanResult, ThemeScanner, ThemeSettings};

#[derive(Parser)]
#[command(name = "wallthemes")]
#[command(about = "Discover wallpaper themes and theme groups in a wallpaper folder")]
struct Cli {
    /// Preferences file (defaults to <config dir>/wallthemes/preferences.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the wallpaper folder and list themes
    Scan {
        /// Folder to scan instead of the configured one
        #[arg(long)]
        root: Option<String>,

        /// Collapse groups with a single non-empty subtheme
        #[arg(long, conflicts_with = "no_flatten")]
        flatten: bool,

        /// Keep single-subtheme groups as groups
        #[arg(long)]
        no_flatten: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or edit stored preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Store a wallpaper folder
    SetDir { dir: String },
    /// Forget the stored wallpaper folder
    ClearDir,
    /// Store the single-subtheme flattening flag
    SetFlatten {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Preferences::default_path()?,
    };
    let mut prefs = Preferences::load(&config_path)?;

    match cli.command {
        Command::Scan {
            root,
            flatten,
            no_flatten,
            json,
        } => {
            if root.is_some() {
                prefs.wallpaper_directory = root;
            }
            if flatten {
                prefs.flatten_single_subthemes = true;
            } else if no_flatten {
                prefs.flatten_single_subthemes = false;
            }

            let result = run_scan(&prefs).await?;
            if json {
                let out = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize scan result")?;
                println!("{}", out);
            } else {
                print_result(&result);
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let directory = prefs.wallpaper_directory();
                println!("Preferences:       {}", config_path.display());
                println!(
                    "Wallpaper folder:  {}",
                    directory.as_deref().unwrap_or("(default)")
                );
                println!(
                    "Resolved root:     {}",
                    resolve_root(directory.as_deref()).display()
                );
                println!("Flatten subthemes: {}", prefs.flatten_single_subthemes());
            }
            ConfigAction::SetDir { dir } => {
                prefs.wallpaper_directory = Some(dir);
                prefs.save(&config_path)?;
            }
            ConfigAction::ClearDir => {
                prefs.wallpaper_directory = None;
                prefs.save(&config_path)?;
            }
            ConfigAction::SetFlatten { enabled } => {
                prefs.flatten_single_subthemes = enabled;
                prefs.save(&config_path)?;
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wallthemes=debug" } else { "wallthemes=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Scan in the background and wait for the callback to hand the result back
async fn run_scan(settings: &dyn ThemeSettings) -> Result<ScanResult> {
    let (tx, rx) = oneshot::channel();
    let scanner = ThemeScanner::from_settings(settings);

    scanner.scan_with_callback(&Handle::current(), move |result| {
        let _ = tx.send(result);
    });

    rx.await.context("Theme scan ended without delivering a result")
}

fn print_result(result: &ScanResult) {
    println!("{} {}", "Wallpapers:".bold(), result.root.display());

    if result.is_empty() {
        println!("{}", "No themes found".yellow());
        return;
    }

    for theme in &result.flat_themes {
        println!(
            "  {} {}",
            theme.name.green().bold(),
            format!("({} images)", theme.image_count()).dimmed()
        );
    }

    for group in &result.grouped_themes {
        println!("  {}", format!("{}/", group.name).cyan().bold());
        for theme in group.themes() {
            println!(
                "    └─ {} {}",
                theme.name.green(),
                format!("({} images)", theme.image_count()).dimmed()
            );
        }
    }

    println!(
        "\n{} flat, {} grouped ({} themes)",
        result.flat_themes.len(),
        result.grouped_themes.len(),
        result.theme_count()
    );
}
