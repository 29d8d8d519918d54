use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use deckforge::action::ActionEnv;
use tracing::error;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Long-press threshold in milliseconds (the host toolkit setting)
    #[arg(global = true, short = 't', long, default_value_t = 500)]
    long_press_ms: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Simulate(cmd::simulate::SimulateArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let env = ActionEnv {
        long_press: Duration::from_millis(cli.long_press_ms),
    };

    let result = match cli.command {
        Commands::Simulate(args) => cmd::simulate::run(args, &env),
        Commands::Validate(args) => cmd::validate::run(args, &env),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
