//! Combined ICS+CSV backup bundles behind an archiving capability.
//!
//! `bundle` exports the appointment store as ICS and the todo store as
//! CSV into two temporary artifacts, then hands the pair to an
//! [`Archiver`] to produce a single compressed file; `unbundle` reverses
//! the process through the same capability. The archiver is an injected
//! trait so the bundling logic stays independent of the concrete
//! compression format; [`TarGzArchiver`] is the built-in adapter.
//!
//! Temporary artifacts are removed on success and failure alike.

use crate::libs::appointment::{Appointment, AppointmentList};
use crate::libs::todo::{TodoItem, TodoList};
use crate::libs::{csv, ics};
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::{Archive, Builder};

/// Default file name of a backup bundle.
pub const ARCHIVE_FILE_NAME: &str = "agenda_backup.tar.gz";

const ICS_ENTRY: &str = "appointments.ics";
const CSV_ENTRY: &str = "todos.csv";

/// Compression capability the bundler delegates to. Implementations
/// archive a flat list of files and extract them back out; entry names
/// are the file names of the inputs.
pub trait Archiver {
    fn compress(&self, files: &[PathBuf], archive: &Path) -> Result<()>;
    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Gzip-compressed tar adapter.
pub struct TarGzArchiver;

impl Archiver for TarGzArchiver {
    fn compress(&self, files: &[PathBuf], archive: &Path) -> Result<()> {
        let file = File::create(archive).with_context(|| format!("failed to create archive {}", archive.display()))?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = Builder::new(encoder);

        for path in files {
            let name = path
                .file_name()
                .with_context(|| format!("archive input {} has no file name", path.display()))?;
            builder.append_path_with_name(path, name)?;
        }

        builder.into_inner()?.finish()?;
        Ok(())
    }

    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        let file = File::open(archive).with_context(|| format!("failed to open archive {}", archive.display()))?;
        let mut tar = Archive::new(GzDecoder::new(file));

        let mut extracted = Vec::new();
        for entry in tar.entries()? {
            let mut entry = entry?;
            let name = entry
                .path()?
                .file_name()
                .map(PathBuf::from)
                .context("archive entry has no file name")?;
            let dest = dest_dir.join(name);
            entry.unpack(&dest)?;
            extracted.push(dest);
        }

        Ok(extracted)
    }
}

/// Writes both stores through the interchange codecs and compresses the
/// pair into `archive_path`. `work_dir` hosts the temporary artifacts,
/// which are removed whether or not the archiver succeeds.
pub fn bundle(appointments: &AppointmentList, todos: &TodoList, archiver: &dyn Archiver, work_dir: &Path, archive_path: &Path) -> Result<()> {
    let ics_path = work_dir.join(ICS_ENTRY);
    let csv_path = work_dir.join(CSV_ENTRY);

    let outcome = write_artifacts(appointments, todos, archiver, &ics_path, &csv_path, archive_path);

    let _ = fs::remove_file(&ics_path);
    let _ = fs::remove_file(&csv_path);

    outcome
}

/// Extracts a bundle into `work_dir` and decodes both stores. The
/// extracted artifacts are removed whether or not decoding succeeds.
pub fn unbundle(archiver: &dyn Archiver, archive_path: &Path, work_dir: &Path) -> Result<(Vec<Appointment>, Vec<TodoItem>)> {
    let outcome = read_artifacts(archiver, archive_path, work_dir);

    let _ = fs::remove_file(work_dir.join(ICS_ENTRY));
    let _ = fs::remove_file(work_dir.join(CSV_ENTRY));

    outcome
}

fn write_artifacts(
    appointments: &AppointmentList,
    todos: &TodoList,
    archiver: &dyn Archiver,
    ics_path: &Path,
    csv_path: &Path,
    archive_path: &Path,
) -> Result<()> {
    ics::export_appointments(appointments, ics_path).context("failed to write appointment export")?;
    csv::export_todos(todos, csv_path).context("failed to write todo export")?;

    archiver
        .compress(&[ics_path.to_path_buf(), csv_path.to_path_buf()], archive_path)
        .context("archiver failed to compress backup")
}

fn read_artifacts(archiver: &dyn Archiver, archive_path: &Path, work_dir: &Path) -> Result<(Vec<Appointment>, Vec<TodoItem>)> {
    archiver.extract(archive_path, work_dir).context("archiver failed to extract backup")?;

    let ics_path = work_dir.join(ICS_ENTRY);
    let csv_path = work_dir.join(CSV_ENTRY);

    let appointments = ics::import_appointments(&ics_path).context("backup is missing a readable appointment export")?;
    let todos = csv::import_todos(&csv_path).context("backup is missing a readable todo export")?;

    Ok((appointments, todos))
}
