//! Appointment management commands.
//!
//! `add` and `edit` are interactive: they prompt for the time, duration
//! and description the way the original dialogs did, re-prompting on
//! invalid input. The date acts as the "current selection" — an
//! argument on `add` (today if omitted), the appointment's own start
//! date on `edit`.

use crate::libs::appointment::Appointment;
use crate::libs::calendar::{Date, DateTime};
use crate::libs::duration::{format_duration_compact, parse_duration};
use crate::libs::formatter::{format_time, parse_time, FormattedAppointment};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct ApptArgs {
    #[command(subcommand)]
    action: ApptAction,
}

#[derive(Debug, Subcommand)]
enum ApptAction {
    #[command(about = "Add an appointment")]
    Add {
        /// Date of the appointment, YYYY-MM-DD (today if omitted)
        date: Option<Date>,
    },
    #[command(about = "Edit the appointment at the given index")]
    Edit { index: usize },
    #[command(about = "Delete the appointment at the given index")]
    Delete { index: usize },
    #[command(about = "List all appointments")]
    List,
}

pub fn cmd(args: ApptArgs) -> Result<()> {
    let mut session = Session::load()?;

    match args.action {
        ApptAction::Add { date } => {
            let selected = date.unwrap_or_else(Date::today);
            let appointment = prompt_appointment(selected, None)?;
            session.appointments.add(appointment);
            session.save()?;
            msg_success!(Message::AppointmentAdded);
        }
        ApptAction::Edit { index } => {
            let current = session
                .appointments
                .get(index)
                .cloned()
                .ok_or_else(|| msg_error_anyhow!(Message::AppointmentIndexInvalid(index)))?;
            let updated = prompt_appointment(current.start.date(), Some(&current))?;
            session
                .appointments
                .edit(index, updated)
                .map_err(|_| msg_error_anyhow!(Message::AppointmentIndexInvalid(index)))?;
            session.save()?;
            msg_success!(Message::AppointmentUpdated);
        }
        ApptAction::Delete { index } => {
            if session.appointments.get(index).is_none() {
                return Err(msg_error_anyhow!(Message::AppointmentIndexInvalid(index)));
            }
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmDelete.to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            session
                .appointments
                .delete(index)
                .map_err(|_| msg_error_anyhow!(Message::AppointmentIndexInvalid(index)))?;
            session.save()?;
            msg_success!(Message::AppointmentDeleted);
        }
        ApptAction::List => {
            if session.appointments.is_empty() {
                msg_info!(Message::NoAppointments);
                return Ok(());
            }
            let rows: Vec<FormattedAppointment> = session
                .appointments
                .items()
                .iter()
                .enumerate()
                .map(|(index, appointment)| FormattedAppointment::new(index, appointment))
                .collect();
            View::appointments(&rows);
        }
    }

    Ok(())
}

/// Prompts for the appointment fields, pre-filling from `current` when
/// editing. Invalid time or duration input re-prompts instead of
/// failing the command.
fn prompt_appointment(selected: Date, current: Option<&Appointment>) -> Result<Appointment> {
    let theme = ColorfulTheme::default();

    let time: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTime.to_string())
        .with_initial_text(current.map(|a| format_time(&a.start)).unwrap_or_default())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_time(input).map(|_| ()).ok_or_else(|| Message::InvalidTimeFormat.to_string())
        })
        .interact_text()?;
    let (hour, minute) = parse_time(&time).ok_or_else(|| msg_error_anyhow!(Message::InvalidTimeFormat))?;

    let duration: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptDuration.to_string())
        .with_initial_text(current.map(|a| format_duration_compact(a.duration_minutes)).unwrap_or_default())
        .validate_with(|input: &String| -> Result<(), String> {
            let trimmed = input.trim();
            if trimmed == "0" {
                return Ok(());
            }
            parse_duration(trimmed)
                .map(|_| ())
                .map_err(|err| Message::InvalidDuration(err.to_string()).to_string())
        })
        .interact_text()?;
    let trimmed = duration.trim();
    // Literal "0" means a point-in-time event with no end; the grammar
    // itself has no unit-less form
    let duration_minutes = if trimmed == "0" {
        0
    } else {
        parse_duration(trimmed).map_err(|err| msg_error_anyhow!(Message::InvalidDuration(err.to_string())))?
    };

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptDescription.to_string())
        .with_initial_text(current.map(|a| a.description.clone()).unwrap_or_default())
        .interact_text()?;

    Ok(Appointment::new(DateTime::from_date(selected, hour, minute), duration_minutes, &description))
}
