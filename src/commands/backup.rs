//! Backup and restore commands.
//!
//! A backup is a single compressed bundle containing the ICS and CSV
//! exports of both stores, produced through the injected archiving
//! capability. Restore replaces the current data by default and asks
//! for confirmation first; `--merge` folds the bundle contents into the
//! existing stores instead.

use crate::libs::appointment::AppointmentList;
use crate::libs::archive::{self, TarGzArchiver, ARCHIVE_FILE_NAME};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::todo::TodoList;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Archive path (data directory default if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Backup archive to restore from
    file: PathBuf,
    /// Merge into existing items instead of replacing them
    #[arg(long)]
    merge: bool,
}

pub fn cmd(args: BackupArgs) -> Result<()> {
    let session = Session::load()?;
    let work_dir = session.storage().dir()?;
    let output = match args.output {
        Some(output) => output,
        None => session.storage().get_path(ARCHIVE_FILE_NAME)?,
    };

    archive::bundle(&session.appointments, &session.todos, &TarGzArchiver, &work_dir, &output)?;

    msg_success!(Message::BackupCreated(output.display().to_string()));
    Ok(())
}

pub fn restore(args: RestoreArgs) -> Result<()> {
    let mut session = Session::load()?;

    if !args.merge {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmRestore.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let work_dir = session.storage().dir()?;
    let (appointments, todos) = archive::unbundle(&TarGzArchiver, &args.file, &work_dir)?;
    let (appointment_count, todo_count) = (appointments.len(), todos.len());

    if args.merge {
        for appointment in appointments {
            session.appointments.add(appointment);
        }
        for todo in todos {
            session.todos.add(todo);
        }
    } else {
        session.appointments = AppointmentList::from_items(appointments);
        session.todos = TodoList::from_items(todos);
    }

    session.save()?;
    msg_success!(Message::BackupRestored(appointment_count, todo_count));
    Ok(())
}
