//! Data import command.
//!
//! The file format is detected from the extension: `.ics` files feed
//! the appointment store, `.csv` files the todo store. Imports merge
//! into the existing items by default; `--replace` clears the target
//! store first. Either way the stores end up sorted, since every item
//! arrives through `add`.

use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::{csv, ics};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File to import (.ics for appointments, .csv for TODOs)
    file: PathBuf,
    /// Replace existing items instead of merging
    #[arg(long)]
    replace: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut session = Session::load()?;
    let extension = args.file.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();

    match extension.as_str() {
        "ics" => {
            let imported = ics::import_appointments(&args.file)?;
            let count = imported.len();
            if args.replace {
                session.appointments.clear();
            }
            for appointment in imported {
                session.appointments.add(appointment);
            }
            session.save()?;
            msg_success!(Message::ImportedAppointments(count, args.file.display().to_string()));
        }
        "csv" => {
            let imported = csv::import_todos(&args.file)?;
            let count = imported.len();
            if args.replace {
                session.todos.clear();
            }
            for todo in imported {
                session.todos.add(todo);
            }
            session.save()?;
            msg_success!(Message::ImportedTodos(count, args.file.display().to_string()));
        }
        _ => msg_bail_anyhow!(Message::UnsupportedImportFile(args.file.display().to_string())),
    }

    Ok(())
}
