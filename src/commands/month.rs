use crate::libs::calendar::Date;
use crate::libs::session::Session;
use crate::libs::view::View;
use anyhow::{bail, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month to show, 1-12 (current month if omitted)
    #[arg(short, long)]
    month: Option<i32>,
    /// Year to show (current year if omitted)
    #[arg(short, long)]
    year: Option<i32>,
}

pub fn cmd(args: MonthArgs) -> Result<()> {
    let session = Session::load()?;
    let today = Date::today();

    let month = args.month.unwrap_or(today.month);
    let year = args.year.unwrap_or(today.year);
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {}", month);
    }

    View::month(year, month, &session.appointments);

    Ok(())
}
