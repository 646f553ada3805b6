//! Versioned binary snapshots of the appointment and todo stores.
//!
//! The snapshot layout is fixed-width `i32` fields in native byte order
//! with no padding, preceded by a version header and a record count:
//!
//! ```text
//! i32 version            -- must equal CURRENT_VERSION or the load fails
//! i32 count
//! count x record
//! ```
//!
//! An appointment record is `year, month, day, hour, minute`, a 256-byte
//! zero-padded description buffer and `duration_minutes`. A todo record
//! is the description buffer, `priority` and `completed` (0/1). A
//! version mismatch is a hard failure that leaves the caller's in-memory
//! store untouched; a truncated tail is tolerated and the records read
//! before the truncation point are returned.

use crate::libs::appointment::{Appointment, AppointmentList};
use crate::libs::calendar::DateTime;
use crate::libs::todo::{Priority, TodoItem, TodoList};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Version written into every snapshot header.
pub const CURRENT_VERSION: i32 = 1;

/// Size of the fixed description buffer inside each record.
const DESCRIPTION_BUF_LEN: usize = 256;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot version {found} is not supported (expected {expected})")]
    VersionMismatch { found: i32, expected: i32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn save_appointments(list: &AppointmentList, path: &Path) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(File::create(path)?);

    write_i32(&mut writer, CURRENT_VERSION)?;
    write_i32(&mut writer, list.len() as i32)?;

    for appointment in list.items() {
        write_i32(&mut writer, appointment.start.year)?;
        write_i32(&mut writer, appointment.start.month)?;
        write_i32(&mut writer, appointment.start.day)?;
        write_i32(&mut writer, appointment.start.hour)?;
        write_i32(&mut writer, appointment.start.minute)?;
        write_description(&mut writer, &appointment.description)?;
        write_i32(&mut writer, appointment.duration_minutes)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn load_appointments(path: &Path) -> Result<Vec<Appointment>, SnapshotError> {
    let mut reader = BufReader::new(File::open(path)?);

    let count = read_header(&mut reader)?;
    let mut appointments = Vec::with_capacity(count);

    for _ in 0..count {
        let record = (|| -> Result<Appointment, SnapshotError> {
            let year = read_i32(&mut reader)?;
            let month = read_i32(&mut reader)?;
            let day = read_i32(&mut reader)?;
            let hour = read_i32(&mut reader)?;
            let minute = read_i32(&mut reader)?;
            let description = read_description(&mut reader)?;
            let duration_minutes = read_i32(&mut reader)?;

            Ok(Appointment::new(DateTime::new(year, month, day, hour, minute), duration_minutes, &description))
        })();

        match record {
            Ok(appointment) => appointments.push(appointment),
            // Truncated file: keep what was read so far
            Err(SnapshotError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        }
    }

    Ok(appointments)
}

pub fn save_todos(list: &TodoList, path: &Path) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(File::create(path)?);

    write_i32(&mut writer, CURRENT_VERSION)?;
    write_i32(&mut writer, list.len() as i32)?;

    for todo in list.items() {
        write_description(&mut writer, &todo.description)?;
        write_i32(&mut writer, todo.priority as i32)?;
        write_i32(&mut writer, if todo.completed { 1 } else { 0 })?;
    }

    writer.flush()?;
    Ok(())
}

pub fn load_todos(path: &Path) -> Result<Vec<TodoItem>, SnapshotError> {
    let mut reader = BufReader::new(File::open(path)?);

    let count = read_header(&mut reader)?;
    let mut todos = Vec::with_capacity(count);

    for _ in 0..count {
        let record = (|| -> Result<TodoItem, SnapshotError> {
            let description = read_description(&mut reader)?;
            let priority = read_i32(&mut reader)?;
            let completed = read_i32(&mut reader)?;

            Ok(TodoItem::new(&description, Priority::from_i32(priority), completed != 0))
        })();

        match record {
            Ok(todo) => todos.push(todo),
            Err(SnapshotError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        }
    }

    Ok(todos)
}

fn read_header<R: Read>(reader: &mut R) -> Result<usize, SnapshotError> {
    let version = read_i32(reader)?;
    if version != CURRENT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found: version,
            expected: CURRENT_VERSION,
        });
    }

    let count = read_i32(reader)?;
    Ok(count.max(0) as usize)
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> io::Result<()> {
    writer.write_all(&value.to_ne_bytes())
}

fn read_i32<R: Read>(reader: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_ne_bytes(buf))
}

// Zero-padded fixed buffer; anything past the buffer is dropped
fn write_description<W: Write>(writer: &mut W, description: &str) -> io::Result<()> {
    let mut buf = [0u8; DESCRIPTION_BUF_LEN];
    let bytes = description.as_bytes();
    let mut len = bytes.len().min(DESCRIPTION_BUF_LEN - 1);
    // Never split a UTF-8 sequence
    while len > 0 && !description.is_char_boundary(len) {
        len -= 1;
    }
    buf[..len].copy_from_slice(&bytes[..len]);
    writer.write_all(&buf)
}

fn read_description<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut buf = [0u8; DESCRIPTION_BUF_LEN];
    reader.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(DESCRIPTION_BUF_LEN);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}
