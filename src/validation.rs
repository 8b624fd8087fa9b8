//! Input parsing and validation.
//!
//! Every field the CLI accepts goes through one parser function of the shape
//! `fn(&str) -> Result<T, String>`. `resolve` applies a parser to a value
//! supplied as a flag, or falls back to an interactive prompt loop when the
//! flag is missing, so commands never hand-roll their own validate/re-prompt
//! cycles.

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{CrmError, CrmResult};
use crate::models::contracts::ContractStatus;
use crate::models::users::Role;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+[._]?[a-z0-9]+@\w+\.\w+$").expect("email pattern is valid")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_nonempty(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        Err("value cannot be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

pub fn parse_email(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if EMAIL_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a valid email address"))
    }
}

/// Passwords must be at least 8 characters long.
pub fn parse_password(raw: &str) -> Result<String, String> {
    if raw.len() >= 8 {
        Ok(raw.to_string())
    } else {
        Err("the password must be at least 8 characters long".to_string())
    }
}

/// Phone numbers must be at least 10 characters long.
pub fn parse_phone(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.len() >= 10 {
        Ok(value.to_string())
    } else {
        Err("the phone number must be at least 10 characters long".to_string())
    }
}

pub fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse()
}

pub fn parse_status(raw: &str) -> Result<ContractStatus, String> {
    raw.parse()
}

pub fn parse_id(raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| "the ID must be an integer".to_string())
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw.trim()))
}

/// Parser for contract dates, which must not lie in the past at entry time.
pub fn date_not_past(today: NaiveDate) -> impl Fn(&str) -> Result<NaiveDate, String> {
    move |raw| {
        let date = parse_date(raw)?;
        if date < today {
            Err(format!("the date {date} is already in the past"))
        } else {
            Ok(date)
        }
    }
}

pub fn parse_price(raw: &str) -> Result<i32, String> {
    let price = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| "the price must be an integer".to_string())?;
    if price < 0 {
        Err("the price must not be negative".to_string())
    } else {
        Ok(price)
    }
}

pub fn parse_attendees(raw: &str) -> Result<i32, String> {
    let attendees = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| "the number of attendees must be an integer".to_string())?;
    if attendees < 0 {
        Err("the number of attendees must not be negative".to_string())
    } else {
        Ok(attendees)
    }
}

pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(format!("'{other}' is not a valid answer (expected yes or no)")),
    }
}

/// Apply a parser to an already-supplied value, labelling the error.
pub fn validated<T>(
    label: &str,
    raw: &str,
    parser: impl Fn(&str) -> Result<T, String>,
) -> CrmResult<T> {
    parser(raw).map_err(|e| CrmError::Validation(format!("{label}: {e}")))
}

/// Resolve a required field: parse the flag value when present, otherwise
/// prompt for it until the parser accepts the input.
pub fn resolve<T>(
    provided: Option<String>,
    label: &str,
    parser: impl Fn(&str) -> Result<T, String>,
) -> CrmResult<T> {
    match provided {
        Some(raw) => validated(label, &raw, parser),
        None => prompt(label, parser),
    }
}

/// Resolve an optional field: parse when present, `None` otherwise.
pub fn resolve_opt<T>(
    provided: Option<String>,
    label: &str,
    parser: impl Fn(&str) -> Result<T, String>,
) -> CrmResult<Option<T>> {
    provided
        .map(|raw| validated(label, &raw, parser))
        .transpose()
}

/// Interactive prompt loop: re-prompt on invalid input, abort on EOF.
fn prompt<T>(label: &str, parser: impl Fn(&str) -> Result<T, String>) -> CrmResult<T> {
    let stdin = io::stdin();
    loop {
        print!("{label}: ");
        io::stdout()
            .flush()
            .map_err(|e| CrmError::Validation(format!("{label}: {e}")))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CrmError::Validation(format!("{label}: {e}")))?;
        if read == 0 {
            return Err(CrmError::Validation(format!("{label}: no input provided")));
        }

        match parser(line.trim_end_matches(['\r', '\n'])) {
            Ok(value) => return Ok(value),
            Err(message) => eprintln!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(parse_email("alice@example.com").is_ok());
        assert!(parse_email("a.lice@example.com").is_ok());
        assert!(parse_email("not-an-email").is_err());
        assert!(parse_email("@example.com").is_err());
        assert!(parse_email("alice@").is_err());
    }

    #[test]
    fn password_length() {
        assert!(parse_password("12345678").is_ok());
        assert!(parse_password("1234567").is_err());
    }

    #[test]
    fn phone_length() {
        assert!(parse_phone("0601020304").is_ok());
        assert!(parse_phone("12345").is_err());
    }

    #[test]
    fn dates_parse_iso_only() {
        assert_eq!(
            parse_date("2023-11-01").unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
        );
        assert!(parse_date("01/11/2023").is_err());
        assert!(parse_date("2023-13-01").is_err());
    }

    #[test]
    fn past_dates_are_rejected_at_entry() {
        let today = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
        let parser = date_not_past(today);
        assert!(parser("2023-11-14").is_err());
        assert!(parser("2023-11-15").is_ok());
        assert!(parser("2023-12-01").is_ok());
    }

    #[test]
    fn price_must_be_a_non_negative_integer() {
        assert_eq!(parse_price("1000").unwrap(), 1000);
        assert_eq!(parse_price("0").unwrap(), 0);
        assert!(parse_price("-1").is_err());
        assert!(parse_price("12.5").is_err());
    }

    #[test]
    fn attendees_must_be_a_non_negative_integer() {
        assert_eq!(parse_attendees("0").unwrap(), 0);
        assert!(parse_attendees("-3").is_err());
        assert!(parse_attendees("many").is_err());
    }

    #[test]
    fn booleans_accept_yes_no_forms() {
        assert!(parse_bool("yes").unwrap());
        assert!(parse_bool("Y").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn resolve_uses_the_flag_value_when_present() {
        let id = resolve(Some("12".to_string()), "client ID", parse_id).unwrap();
        assert_eq!(id, 12);
    }

    #[test]
    fn resolve_labels_validation_errors() {
        let err = resolve(Some("abc".to_string()), "client ID", parse_id).unwrap_err();
        assert!(err.to_string().contains("client ID"));
    }

    #[test]
    fn resolve_opt_passes_none_through() {
        assert_eq!(resolve_opt(None, "phone", parse_phone).unwrap(), None);
        assert!(resolve_opt(Some("123".to_string()), "phone", parse_phone).is_err());
    }
}
