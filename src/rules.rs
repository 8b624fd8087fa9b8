//! Contract lifecycle and event scheduling rules.
//!
//! Kept as pure functions over plain values so the command layer and the
//! repository hooks stay thin and the rules are testable without a database.

use chrono::NaiveDate;

use crate::error::{CrmError, CrmResult};
use crate::models::contracts;

/// Decide whether a freshly created contract is already complete.
///
/// Fires only for the post-create hook: a contract whose `end_date` has
/// passed and whose payment has been received starts its life TERMINE.
/// Updates that later push a contract into the same condition do NOT
/// re-evaluate this rule.
pub fn completed_on_create(end_date: NaiveDate, payment_received: bool, today: NaiveDate) -> bool {
    end_date < today && payment_received
}

/// An event may only be attached to a contract that is signed and paid.
pub fn check_event_preconditions(contract: &contracts::Model) -> CrmResult<()> {
    if !(contract.is_signed && contract.payment_received) {
        return Err(CrmError::Validation(format!(
            "contract {} must be signed and paid before an event can be added",
            contract.id
        )));
    }
    Ok(())
}

/// Event dates must satisfy `contract.start <= start <= end <= contract.end`.
pub fn check_event_window(
    contract: &contracts::Model,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> CrmResult<()> {
    if start_date < contract.start_date || start_date > contract.end_date {
        return Err(CrmError::Validation(format!(
            "event start date {start_date} is outside the contract window ({} to {})",
            contract.start_date, contract.end_date
        )));
    }
    if end_date < start_date || end_date > contract.end_date {
        return Err(CrmError::Validation(format!(
            "event end date {end_date} must fall between {start_date} and {}",
            contract.end_date
        )));
    }
    Ok(())
}

/// Attendee counts are non-negative integers.
pub fn check_attendees(attendees: i32) -> CrmResult<()> {
    if attendees < 0 {
        return Err(CrmError::Validation(
            "the number of attendees must be a non-negative integer".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contracts::ContractStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(start: NaiveDate, end: NaiveDate, signed: bool, paid: bool) -> contracts::Model {
        contracts::Model {
            id: 1,
            client_id: 1,
            status: ContractStatus::EnCours,
            start_date: start,
            end_date: end,
            price: 1000,
            payment_received: paid,
            is_signed: signed,
            author_id: 1,
        }
    }

    #[test]
    fn past_end_date_and_paid_completes() {
        let today = date(2023, 12, 15);
        assert!(completed_on_create(date(2023, 12, 1), true, today));
    }

    #[test]
    fn future_end_date_stays_open() {
        let today = date(2023, 11, 15);
        assert!(!completed_on_create(date(2023, 12, 1), true, today));
    }

    #[test]
    fn unpaid_contract_stays_open_even_past_end() {
        let today = date(2023, 12, 15);
        assert!(!completed_on_create(date(2023, 12, 1), false, today));
    }

    #[test]
    fn end_date_today_is_not_past() {
        let today = date(2023, 12, 1);
        assert!(!completed_on_create(today, true, today));
    }

    #[test]
    fn unsigned_contract_refuses_events() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), false, true);
        assert!(check_event_preconditions(&c).is_err());
    }

    #[test]
    fn unpaid_contract_refuses_events() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, false);
        assert!(check_event_preconditions(&c).is_err());
    }

    #[test]
    fn signed_and_paid_contract_accepts_events() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_preconditions(&c).is_ok());
    }

    #[test]
    fn event_inside_window_is_accepted() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_window(&c, date(2023, 11, 15), date(2023, 11, 20)).is_ok());
    }

    #[test]
    fn event_window_boundaries_are_inclusive() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_window(&c, date(2023, 11, 1), date(2023, 12, 1)).is_ok());
    }

    #[test]
    fn event_starting_before_contract_is_rejected() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_window(&c, date(2023, 10, 31), date(2023, 11, 20)).is_err());
    }

    #[test]
    fn event_ending_after_contract_is_rejected() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_window(&c, date(2023, 11, 15), date(2023, 12, 2)).is_err());
    }

    #[test]
    fn event_ending_before_it_starts_is_rejected() {
        let c = contract(date(2023, 11, 1), date(2023, 12, 1), true, true);
        assert!(check_event_window(&c, date(2023, 11, 20), date(2023, 11, 15)).is_err());
    }

    #[test]
    fn negative_attendees_are_rejected() {
        assert!(check_attendees(-1).is_err());
        assert!(check_attendees(0).is_ok());
        assert!(check_attendees(150).is_ok());
    }
}
