//! Core domain types for gym check-in.

use chrono::NaiveDate;

/// Length of a member identifier, in decimal digits
pub const IDENTIFIER_LEN: usize = 10;

/// One roster entry
///
/// Records are built once when the roster is loaded and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// 10-digit national identifier
    pub identifier: String,
    pub name: String,
    /// Most recent date the membership fee was paid
    pub membership_paid_date: NaiveDate,
}

impl Member {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        membership_paid_date: NaiveDate,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            membership_paid_date,
        }
    }
}
