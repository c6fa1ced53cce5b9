use clap::Parser;
use std::path::PathBuf;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "palette")]
#[command(about = "Theme color palette tools", long_about = None)]
struct Cli {
    /// Theme document to read (overrides the site config)
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    /// Site config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let theme = commands::ThemeArgs {
        theme: cli.theme,
        config: cli.config,
    };
    cli.command.execute(&theme)?;

    Ok(())
}
