//! Data export command.
//!
//! Appointments export as an ICS calendar, TODO items as a CSV table.
//! Without an explicit output path the file lands in the current
//! directory under a timestamped name, so repeated exports never
//! overwrite each other.

use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::{csv, ics};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// ICS calendar file with one VEVENT per appointment.
    Ics,
    /// CSV table of TODO items.
    Csv,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    format: ExportFormat,
    /// Output file path (timestamped default if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let session = Session::load()?;

    // Timestamp-based default name for uniqueness
    let default_name = format!("agenda_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
    let extension = match args.format {
        ExportFormat::Ics => "ics",
        ExportFormat::Csv => "csv",
    };
    let output = args.output.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

    match args.format {
        ExportFormat::Ics => ics::export_appointments(&session.appointments, &output)?,
        ExportFormat::Csv => csv::export_todos(&session.todos, &output)?,
    }

    msg_success!(Message::ExportCompleted(output.display().to_string()));
    Ok(())
}
