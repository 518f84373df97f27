mod commands;

use clap::{Parser, Subcommand};
use commands::{classify::ClassifyArgs, tactics::TacticsCommand};

#[derive(Parser)]
#[command(
    name = "tactica",
    version,
    about = "Tactica — flag marketing tactics in statements by keyword"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "tactica.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every statement in a CSV file and export the results.
    Classify(ClassifyArgs),
    /// Classify one ad-hoc statement.
    Check {
        /// Dictionary file (overrides config).
        #[arg(long)]
        dictionary: Option<String>,
        /// The statement to classify.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Inspect or edit the tactic dictionary.
    Tactics {
        #[command(subcommand)]
        command: TacticsCommand,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // The log level lives in the config, so config loading logs through a
    // temporary subscriber at the default level.
    let cfg = commands::load_config(&cli.config, std::io::stderr)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.tactica.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Classify(args) => commands::classify::run(&cfg, args)?,
        Commands::Check { dictionary, text } => {
            if text.is_empty() {
                anyhow::bail!("no statement provided. Usage: tactica check <text>");
            }
            let dict = commands::load_dictionary(&cfg, dictionary.as_deref())?;
            print!("{}", commands::classify::render_check(&text.join(" "), &dict));
        }
        Commands::Tactics { command } => commands::tactics::run(&cfg, command)?,
    }

    Ok(())
}
