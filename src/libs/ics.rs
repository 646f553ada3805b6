//! ICS (RFC 5545 subset) export and import for appointments.
//!
//! The exporter writes one `VEVENT` per appointment with floating local
//! `DTSTART`/`DTEND` stamps (`YYYYMMDDTHHMMSS`, no timezone), a UID
//! synthesized from the start stamp and a slug of the description, the
//! raw description as `SUMMARY` and the duration restated as free text
//! in `DESCRIPTION`.
//!
//! The importer is deliberately lenient: it scans line by line, collects
//! the properties it knows inside each `VEVENT` block and silently skips
//! blocks that are malformed or incomplete, favoring partial recovery of
//! a damaged file over strict validation. Duration is recomputed from
//! the time-of-day difference between `DTSTART` and `DTEND` under a
//! same-calendar-day assumption, substituting 60 minutes when the result
//! is non-positive, so multi-day appointments do not round-trip exactly.

use crate::libs::appointment::{Appointment, AppointmentList};
use crate::libs::calendar::DateTime;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Fallback duration for events whose recomputed length is unusable.
const DEFAULT_DURATION_MINUTES: i32 = 60;

const PRODID: &str = "-//agenda//agenda 0.1.0//EN";

pub fn export_appointments(list: &AppointmentList, path: &Path) -> Result<()> {
    fs::write(path, render_calendar(list))?;
    Ok(())
}

pub fn import_appointments(path: &Path) -> Result<Vec<Appointment>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_calendar(&content))
}

/// Renders the full VCALENDAR document, CRLF-terminated lines.
pub fn render_calendar(list: &AppointmentList) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", PRODID));
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for appointment in list.items() {
        let start = format_stamp(&appointment.start);
        let end = format_stamp(&appointment.end());

        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}-{}", start, slugify(&appointment.description)));
        push_line(&mut out, &format!("DTSTART:{}", start));
        push_line(&mut out, &format!("DTEND:{}", end));
        push_line(&mut out, &format!("SUMMARY:{}", appointment.description));
        push_line(&mut out, &format!("DESCRIPTION:Duration: {} minutes", appointment.duration_minutes));
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Extracts every well-formed VEVENT from an ICS document. Blocks
/// missing a parsable `DTSTART` or a `SUMMARY` are dropped without
/// error.
pub fn parse_calendar(content: &str) -> Vec<Appointment> {
    let mut appointments = Vec::new();

    let mut in_event = false;
    let mut start: Option<DateTime> = None;
    let mut end: Option<DateTime> = None;
    let mut summary: Option<String> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim_end_matches('\r');

        if line == "BEGIN:VEVENT" {
            in_event = true;
            start = None;
            end = None;
            summary = None;
            continue;
        }

        if line == "END:VEVENT" {
            if in_event {
                if let (Some(start), Some(summary)) = (start.take(), summary.take()) {
                    let duration = recompute_duration(&start, end.as_ref());
                    appointments.push(Appointment::new(start, duration, &summary));
                }
            }
            in_event = false;
            continue;
        }

        if !in_event {
            continue;
        }

        if let Some(value) = line.strip_prefix("DTSTART:") {
            start = parse_stamp(value);
        } else if let Some(value) = line.strip_prefix("DTEND:") {
            end = parse_stamp(value);
        } else if let Some(value) = line.strip_prefix("SUMMARY:") {
            summary = Some(value.to_string());
        }
    }

    appointments
}

// Same-day assumption: only the time of day enters the difference.
// Multi-day events come back shortened, which is the documented loss.
fn recompute_duration(start: &DateTime, end: Option<&DateTime>) -> i32 {
    let minutes = match end {
        Some(end) => (end.hour * 60 + end.minute) - (start.hour * 60 + start.minute),
        None => 0,
    };
    if minutes > 0 {
        minutes
    } else {
        DEFAULT_DURATION_MINUTES
    }
}

fn format_stamp(dt: &DateTime) -> String {
    format!("{:04}{:02}{:02}T{:02}{:02}00", dt.year, dt.month, dt.day, dt.hour, dt.minute)
}

fn parse_stamp(value: &str) -> Option<DateTime> {
    let value = value.trim();
    if !value.is_ascii() || value.len() < 15 || value.as_bytes()[8] != b'T' {
        return None;
    }

    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    let hour = value[9..11].parse().ok()?;
    let minute = value[11..13].parse().ok()?;

    Some(DateTime::new(year, month, day, hour, minute))
}

/// Filename-safe slug of a description: lowercased, non-alphanumeric
/// runs collapsed to single hyphens, length-limited.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}
