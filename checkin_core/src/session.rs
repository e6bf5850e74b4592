//! The check-in session loop.
//!
//! A session owns the roster loaded at startup, the date it treats as
//! today, and the sink that records workouts. Each input line is handled
//! independently; only the quit token or the end of input ends the loop.

use crate::input::{validate, Input, InputSource};
use crate::membership::{check_status, MembershipStatus};
use crate::workout_log::CheckInSink;
use crate::{Member, Result};
use chrono::NaiveDate;
use std::io::Write;

/// What the loop does after handling one line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Terminate,
}

pub struct Session<S> {
    roster: Vec<Member>,
    today: NaiveDate,
    sink: S,
}

impl<S: CheckInSink> Session<S> {
    pub fn new(roster: Vec<Member>, today: NaiveDate, sink: S) -> Self {
        Self {
            roster,
            today,
            sink,
        }
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one raw input line, writing any user-facing text to `out`
    ///
    /// Only failures to write to `out` are returned as errors. A workout
    /// log failure is reported on `out` after the status line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Step> {
        let query = match validate(line) {
            Ok(Input::Quit) => {
                writeln!(out, "Good bye!")?;
                return Ok(Step::Terminate);
            }
            Ok(Input::Identifier(q)) | Ok(Input::Token(q)) => q,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {:?}", line, e);
                writeln!(out, "{}", e)?;
                return Ok(Step::Continue);
            }
        };

        let (status, member) = check_status(&query, &self.roster, self.today);

        let mut log_failure = None;
        if let (MembershipStatus::Paying, Some(member)) = (status, member) {
            if let Err(e) = self.sink.append(member, self.today) {
                tracing::error!("Failed to record workout for {}: {}", member.identifier, e);
                log_failure = Some(e);
            }
        }

        writeln!(out, "{}", status.message(&query))?;
        if let Some(e) = log_failure {
            writeln!(out, "Could not record workout: {}", e)?;
        }

        Ok(Step::Continue)
    }

    /// Read and handle lines until quit or end of input
    pub fn run<I: InputSource, W: Write>(&mut self, source: &mut I, out: &mut W) -> Result<()> {
        loop {
            let Some(line) = source.read_line()? else {
                tracing::info!("Input closed, ending session");
                return Ok(());
            };

            if self.handle_line(&line, out)? == Step::Terminate {
                return Ok(());
            }
        }
    }
}
