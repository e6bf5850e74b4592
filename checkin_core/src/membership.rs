//! Membership rules: who is a customer, and whose fee is current.

use crate::Member;
use chrono::{Months, NaiveDate};

/// Outcome of checking one person against the roster
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipStatus {
    NotCustomer,
    /// Known member whose last payment is a year old or more
    Lapsed,
    Paying,
}

impl MembershipStatus {
    pub fn from_flags(customer: bool, paying: bool) -> Self {
        match (customer, paying) {
            (false, _) => MembershipStatus::NotCustomer,
            (true, false) => MembershipStatus::Lapsed,
            (true, true) => MembershipStatus::Paying,
        }
    }

    /// Status line shown at the terminal for `input`
    pub fn message(&self, input: &str) -> String {
        match self {
            MembershipStatus::NotCustomer => format!("{} is not a customer", input),
            MembershipStatus::Lapsed => {
                format!("{} is a customer, but has not paid their fee", input)
            }
            MembershipStatus::Paying => format!("{} is a paying customer", input),
        }
    }
}

fn matches(member: &Member, name_or_identifier: &str) -> bool {
    member.identifier == name_or_identifier
        || member.name.to_lowercase() == name_or_identifier.to_lowercase()
}

/// First roster record whose name (ignoring case) or identifier (exactly)
/// matches
pub fn find_member<'a>(name_or_identifier: &str, roster: &'a [Member]) -> Option<&'a Member> {
    roster.iter().find(|m| matches(m, name_or_identifier))
}

pub fn is_customer(name_or_identifier: &str, roster: &[Member]) -> bool {
    find_member(name_or_identifier, roster).is_some()
}

/// True when the fee was paid strictly after the same calendar day one
/// year before `today`
pub fn is_paying_customer(member: &Member, today: NaiveDate) -> bool {
    match today.checked_sub_months(Months::new(12)) {
        Some(cutoff) => member.membership_paid_date > cutoff,
        None => true,
    }
}

/// Look up `input` and classify it
pub fn check_status<'a>(
    input: &str,
    roster: &'a [Member],
    today: NaiveDate,
) -> (MembershipStatus, Option<&'a Member>) {
    match find_member(input, roster) {
        Some(member) => {
            let paying = is_paying_customer(member, today);
            (MembershipStatus::from_flags(true, paying), Some(member))
        }
        None => (MembershipStatus::NotCustomer, None),
    }
}
