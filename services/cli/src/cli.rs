use clap::{Parser, Subcommand};

use crate::demo::{run_demo, run_progress, run_roster, run_serve, DemoArgs, RosterArgs, ServeArgs};
use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Bakeshop",
    about = "Bake, serve, and level up a virtual bakery from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve a scripted run of walk-in customers without touching the save file (default command)
    Demo(DemoArgs),
    /// Build one cake, serve it, and persist the progress
    Serve(ServeArgs),
    /// Show the saved player progress
    Progress,
    /// List the customers who might walk in, with their tastes
    Roster(RosterArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Serve(args) => run_serve(args),
        Command::Progress => run_progress(),
        Command::Roster(args) => run_roster(args),
    }
}
