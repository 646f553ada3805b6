//! # Agenda - Personal Scheduling Organizer
//!
//! A command-line organizer for timed appointments and prioritized
//! TODO items.
//!
//! ## Features
//!
//! - **Appointments**: Timed events with optional multi-day durations
//! - **TODO Items**: Prioritized tasks with completion tracking
//! - **Calendar Views**: Daily agenda and month grid with markers
//! - **Persistence**: Versioned binary snapshots across sessions
//! - **Data Interchange**: ICS (calendar) and CSV (spreadsheet) export/import
//! - **Backups**: Combined compressed backup bundles
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
