//! Appointments and the always-sorted appointment store.
//!
//! An appointment is a start `DateTime`, a duration in minutes and a
//! bounded description. A zero duration means a point-in-time event with
//! no defined end. The store keeps its items sorted ascending by start
//! after every mutation, so queries and listings can rely on the order
//! without re-sorting.

use crate::libs::calendar::{Date, DateTime};
use crate::libs::store::{clip_description, StoreError};

/// Initial backing capacity of an appointment store.
pub const APPOINTMENT_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub start: DateTime,
    pub duration_minutes: i32,
    pub description: String,
}

impl Appointment {
    /// Creates an appointment, clipping the description to the store
    /// bound. Negative durations are treated as zero.
    pub fn new(start: DateTime, duration_minutes: i32, description: &str) -> Self {
        Self {
            start,
            duration_minutes: duration_minutes.max(0),
            description: clip_description(description),
        }
    }

    /// End of the appointment: start plus duration, carried across day,
    /// month and year boundaries. Every spanning query and exporter
    /// derives the end through this method.
    pub fn end(&self) -> DateTime {
        self.start.add_minutes(self.duration_minutes)
    }
}

/// Growable list of appointments, sorted ascending by start time.
#[derive(Debug, Default)]
pub struct AppointmentList {
    items: Vec<Appointment>,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(APPOINTMENT_CAPACITY),
        }
    }

    /// Builds a list from unordered items, restoring the sort invariant.
    pub fn from_items(items: Vec<Appointment>) -> Self {
        let mut list = Self { items };
        list.sort();
        list
    }

    pub fn items(&self) -> &[Appointment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.items.get(index)
    }

    pub fn add(&mut self, appointment: Appointment) {
        self.items.push(appointment);
        self.sort();
    }

    pub fn edit(&mut self, index: usize, appointment: Appointment) -> Result<(), StoreError> {
        let len = self.items.len();
        let slot = self.items.get_mut(index).ok_or(StoreError::IndexOutOfRange { index, len })?;
        *slot = appointment;
        self.sort();
        Ok(())
    }

    /// Removes the item at `index`, shifting every later item left by
    /// one. Fails without mutation when the index is out of range.
    pub fn delete(&mut self, index: usize) -> Result<Appointment, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange { index, len: self.items.len() });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Indices of every appointment whose span covers `date`, in store
    /// order. The span is the inclusive date range from the start date
    /// to the end date, so multi-day appointments match every day they
    /// touch; zero-duration appointments match only their start date.
    pub fn find_by_date(&self, date: Date) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, appointment)| {
                let start = appointment.start.date();
                let end = appointment.end().date();
                start <= date && date <= end
            })
            .map(|(index, _)| index)
            .collect()
    }

    pub fn has_on_date(&self, date: Date) -> bool {
        !self.find_by_date(date).is_empty()
    }

    // Stable sort: insertion order among equal start times is preserved
    fn sort(&mut self) {
        self.items.sort_by(|a, b| a.start.cmp(&b.start));
    }
}
