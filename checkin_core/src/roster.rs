//! Roster file codec.
//!
//! The roster holds two physical lines per member:
//!
//! ```text
//! <identifier>, <name>
//! <YYYY-MM-DD>
//! ```
//!
//! Any record that fails to parse fails the whole load.

use crate::{Error, Member, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// chrono pattern for every date the system reads or writes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` date
///
/// chrono accepts single-digit months and days, so the shape is checked
/// before handing the text over.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(Error::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parse the `<identifier>, <name>` line of a record
fn parse_member_line(line: &str, line_num: usize) -> Result<(String, String)> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != 2 {
        return Err(Error::RosterMalformed {
            line: line_num,
            message: format!(
                "expected \"<identifier>, <name>\", found {} field(s)",
                fields.len()
            ),
        });
    }
    Ok((fields[0].trim().to_string(), fields[1].trim().to_string()))
}

/// Parse roster records from a reader, in file order
pub fn parse_roster<R: BufRead>(reader: R) -> Result<Vec<Member>> {
    let mut members = Vec::new();
    let mut lines = reader.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            tracing::debug!("Skipping blank roster line {}", idx + 1);
            continue;
        }
        let (identifier, name) = parse_member_line(&line, idx + 1)?;

        let (date_idx, date_line) = match lines.next() {
            Some((i, l)) => (i, l?),
            None => {
                return Err(Error::RosterMalformed {
                    line: idx + 1,
                    message: format!("record for {:?} has no payment date line", name),
                })
            }
        };
        let membership_paid_date =
            parse_date(date_line.trim()).map_err(|e| Error::RosterMalformed {
                line: date_idx + 1,
                message: e.to_string(),
            })?;

        tracing::debug!("Parsed roster record for {}", identifier);
        members.push(Member {
            identifier,
            name,
            membership_paid_date,
        });
    }

    Ok(members)
}

/// Load the roster from a file
///
/// A missing file is reported as [`Error::RosterNotFound`] so callers can
/// choose between falling back to an empty roster and aborting.
pub fn load_roster(path: &Path) -> Result<Vec<Member>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::RosterNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let members = parse_roster(BufReader::new(file))?;
    tracing::info!("Loaded {} members from {:?}", members.len(), path);
    Ok(members)
}
