use crate::libs::calendar::Date;
use crate::libs::formatter::{day_heading, FormattedAppointment};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Date to show, YYYY-MM-DD (today if omitted)
    date: Option<Date>,
}

pub fn cmd(args: DayArgs) -> Result<()> {
    let session = Session::load()?;
    let date = args.date.unwrap_or_else(Date::today);

    // Multi-day appointments show up on every day of their span
    let indices = session.appointments.find_by_date(date);
    if indices.is_empty() {
        msg_info!(Message::NoAppointmentsOnDate(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::AppointmentsHeader(day_heading(&date)), true);

    let rows: Vec<FormattedAppointment> = indices
        .iter()
        .filter_map(|&index| session.appointments.get(index).map(|appointment| FormattedAppointment::new(index, appointment)))
        .collect();
    View::appointments(&rows);

    Ok(())
}
