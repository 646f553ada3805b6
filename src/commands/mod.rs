pub mod appointment;
pub mod backup;
pub mod day;
pub mod export;
pub mod import;
pub mod init;
pub mod month;
pub mod todo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Manage appointments")]
    Appt(appointment::ApptArgs),
    #[command(about = "Manage TODO items")]
    Todo(todo::TodoArgs),
    #[command(about = "Show the agenda for a date")]
    Day(day::DayArgs),
    #[command(about = "Show a month grid with appointment markers")]
    Month(month::MonthArgs),
    #[command(about = "Export appointments (ICS) or TODOs (CSV) to a file")]
    Export(export::ExportArgs),
    #[command(about = "Import appointments or TODOs from a file")]
    Import(import::ImportArgs),
    #[command(about = "Create a compressed backup bundle")]
    Backup(backup::BackupArgs),
    #[command(about = "Restore data from a backup bundle")]
    Restore(backup::RestoreArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Appt(args) => appointment::cmd(args),
            Commands::Todo(args) => todo::cmd(args),
            Commands::Day(args) => day::cmd(args),
            Commands::Month(args) => month::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Backup(args) => backup::cmd(args),
            Commands::Restore(args) => backup::restore(args),
        }
    }
}
