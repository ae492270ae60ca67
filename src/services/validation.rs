use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::InvalidDateError;

/// First date the upstream data source has rates for.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1999, 1, 4).unwrap_or(NaiveDate::MIN)
}

pub fn validate_date(date: NaiveDate) -> Result<(), InvalidDateError> {
    validate_date_at(date, Local::now().naive_local())
}

/// Checks `date` (taken at the start of the day) against `now`.
pub fn validate_date_at(date: NaiveDate, now: NaiveDateTime) -> Result<(), InvalidDateError> {
    if date.and_time(NaiveTime::MIN) >= now {
        return Err(InvalidDateError::NotInPast);
    }

    if date < earliest_date() {
        return Err(InvalidDateError::BeforeEarliest);
    }

    Ok(())
}

pub fn validate_start_and_end_dates(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), InvalidDateError> {
    validate_start_and_end_dates_at(start, end, Local::now().naive_local())
}

pub fn validate_start_and_end_dates_at(
    start: NaiveDate,
    end: NaiveDate,
    now: NaiveDateTime,
) -> Result<(), InvalidDateError> {
    validate_date_at(start, now)?;
    validate_date_at(end, now)?;

    if start > end {
        return Err(InvalidDateError::StartAfterEnd);
    }

    Ok(())
}
