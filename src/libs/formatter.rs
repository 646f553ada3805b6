//! Display formatting helpers for dates, times and appointment rows.
//!
//! Pre-formats values into plain strings so table rendering and any
//! serialized output share the exact same representation:
//!
//! - times are `HH:MM` in 24-hour format
//! - dates are `YYYY-MM-DD`
//! - durations use the compact `XdYhZm` grammar accepted back by the
//!   duration parser
//!
//! [`FormattedAppointment`] and [`FormattedTodo`] hold one display row
//! each; building them up front keeps the view layer free of formatting
//! decisions.

use crate::libs::appointment::Appointment;
use crate::libs::calendar::{day_name, day_of_week, month_name, Date, DateTime};
use crate::libs::duration::format_duration_compact;
use crate::libs::todo::TodoItem;
use serde::{Deserialize, Serialize};

/// One appointment prepared for display or serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedAppointment {
    /// Position of the appointment in its store, 0-based.
    pub index: usize,
    /// Start timestamp, `YYYY-MM-DD HH:MM`.
    pub start: String,
    /// End timestamp, or `-` for point-in-time events.
    pub end: String,
    /// Compact duration, or `-` for point-in-time events.
    pub duration: String,
    pub description: String,
}

impl FormattedAppointment {
    pub fn new(index: usize, appointment: &Appointment) -> Self {
        let (end, duration) = if appointment.duration_minutes == 0 {
            ("-".to_string(), "-".to_string())
        } else {
            (appointment.end().to_string(), format_duration_compact(appointment.duration_minutes))
        };

        Self {
            index,
            start: appointment.start.to_string(),
            end,
            duration,
            description: appointment.description.clone(),
        }
    }
}

/// One todo item prepared for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedTodo {
    pub index: usize,
    pub priority: String,
    pub completed: String,
    pub description: String,
}

impl FormattedTodo {
    pub fn new(index: usize, todo: &TodoItem) -> Self {
        Self {
            index,
            priority: todo.priority.label().to_string(),
            completed: if todo.completed { "Yes" } else { "No" }.to_string(),
            description: todo.description.clone(),
        }
    }
}

/// `HH:MM` for a datetime's time-of-day portion.
pub fn format_time(dt: &DateTime) -> String {
    format!("{:02}:{:02}", dt.hour, dt.minute)
}

/// Human heading for a date: `Friday, March 1 2025`.
pub fn day_heading(date: &Date) -> String {
    let weekday = day_name(day_of_week(date.year, date.month, date.day));
    format!("{}, {} {} {}", weekday, month_name(date.month), date.day, date.year)
}

/// Parses `HH:MM` into an (hour, minute) pair, rejecting out-of-range
/// components.
pub fn parse_time(input: &str) -> Option<(i32, i32)> {
    let (hour, minute) = input.trim().split_once(':')?;
    let hour: i32 = hour.parse().ok()?;
    let minute: i32 = minute.parse().ok()?;

    if (0..24).contains(&hour) && (0..60).contains(&minute) {
        Some((hour, minute))
    } else {
        None
    }
}
