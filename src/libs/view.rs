use crate::libs::appointment::AppointmentList;
use crate::libs::calendar::{days_in_month, first_day_of_month, month_name, Date};
use crate::libs::formatter::{FormattedAppointment, FormattedTodo};
use prettytable::{row, Row, Table};

pub struct View {}

impl View {
    pub fn appointments(rows: &[FormattedAppointment]) {
        let mut table = Table::new();

        table.add_row(row!["#", "START", "END", "DURATION", "DESCRIPTION"]);
        for entry in rows {
            table.add_row(row![entry.index, entry.start, entry.end, entry.duration, entry.description]);
        }
        table.printstd();
    }

    pub fn todos(rows: &[FormattedTodo]) {
        let mut table = Table::new();

        table.add_row(row!["#", "PRIORITY", "DONE", "DESCRIPTION"]);
        for entry in rows {
            table.add_row(row![entry.index, entry.priority, entry.completed, entry.description]);
        }
        table.printstd();
    }

    /// Month grid, weeks as rows and Sunday first. Days that have at
    /// least one appointment spanning them are marked with an asterisk.
    pub fn month(year: i32, month: i32, appointments: &AppointmentList) {
        let mut table = Table::new();
        table.set_titles(row![H7c -> format!("{} {}", month_name(month), year)]);
        table.add_row(row!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);

        let offset = first_day_of_month(year, month);
        let total_days = days_in_month(year, month);

        let mut cells: Vec<String> = vec![String::new(); offset as usize];
        for day in 1..=total_days {
            let marker = if appointments.has_on_date(Date::new(year, month, day)) {
                "*"
            } else {
                ""
            };
            cells.push(format!("{:2}{}", day, marker));
        }
        while cells.len() % 7 != 0 {
            cells.push(String::new());
        }

        for week in cells.chunks(7) {
            table.add_row(Row::from(week.iter().cloned()));
        }

        table.printstd();
    }
}
