use std::fs;
use std::path::PathBuf;

use checkout_forms::calendar::CheckoutCalendar;
use checkout_forms::config::{Config, ConfigFile};
use checkout_forms::generate;
use checkout_forms::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => execute_generate(args),
        Command::Dates(args) => execute_dates(args),
        Command::InitConfig(args) => execute_init_config(args),
    }
}

fn execute_generate(args: GenerateArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(roster) = args.roster {
        config.roster.path = roster;
    }
    if let Some(inventory) = args.inventory {
        config.inventory.path = inventory;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }

    let files = generate::run(&config)?;
    println!("{}", files.checkout_form.display());
    println!("{}", files.hang_tags.display());
    Ok(())
}

fn execute_dates(args: DatesArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let calendar = CheckoutCalendar::from_config(&config);
    for (week, pair) in calendar.iter().enumerate() {
        println!(
            "{:>2}  {}  ->  {}",
            week + 1,
            pair.checkout_label(),
            pair.due_label()
        );
    }
    Ok(())
}

fn execute_init_config(args: InitConfigArgs) -> Result<()> {
    let text = ConfigFile::default().to_toml()?;
    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(ToolError::InvalidConfiguration(format!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                )));
            }
            fs::write(&path, text).map_err(|source| ToolError::OutputWriteFailure {
                path: path.clone(),
                source,
            })?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate equipment checkout forms and hang tags from a roster and an inventory."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the checkout form and hang tags.
    Generate(GenerateArgs),
    /// Print the semester's checkout and due dates.
    Dates(DatesArgs),
    /// Write the default configuration as TOML.
    InitConfig(InitConfigArgs),
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster CSV, overriding the configured path.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Inventory CSV, overriding the configured path.
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Directory receiving the generated HTML files.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
struct DatesArgs {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct InitConfigArgs {
    /// Destination file; the configuration is printed when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Overwrite an existing destination file.
    #[arg(long)]
    force: bool,
}
