//! Append-only workout log.
//!
//! Each check-in of a paying member appends one entry block. A new log
//! file starts with a fixed header line:
//!
//! ```text
//! Workout sheet:
//! <identifier>, <name>
//! <YYYY-MM-DD>
//! ```

use crate::roster::format_date;
use crate::{Error, Member, Result};
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// First line of every workout log file
pub const WORKOUT_LOG_HEADER: &str = "Workout sheet:";

/// Destination for recorded workouts
pub trait CheckInSink {
    fn append(&mut self, member: &Member, today: NaiveDate) -> Result<()>;
}

/// Render one log entry, including its leading line break
pub fn format_entry(member: &Member, today: NaiveDate) -> String {
    format!(
        "\n{}, {}\n{}",
        member.identifier,
        member.name,
        format_date(today)
    )
}

/// Workout log kept in a plain text file
///
/// The header goes in whenever the file has no content yet, so a log
/// file that exists but is empty also receives it before its first entry.
pub struct WorkoutSheet {
    path: PathBuf,
}

impl WorkoutSheet {
    /// Create a new workout log for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write_entry(&self, member: &Member, today: NaiveDate) -> std::io::Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // A file with no content yet has never received its header
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = BufWriter::new(file);
        if needs_header {
            writer.write_all(WORKOUT_LOG_HEADER.as_bytes())?;
        }
        writer.write_all(format_entry(member, today).as_bytes())?;
        writer.flush()
    }
}

impl CheckInSink for WorkoutSheet {
    fn append(&mut self, member: &Member, today: NaiveDate) -> Result<()> {
        self.write_entry(member, today)
            .map_err(|source| Error::WorkoutLog {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Appended workout for {} to {:?}", member.identifier, self.path);
        Ok(())
    }
}
