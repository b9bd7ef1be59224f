use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::domain::constants::{
    EVENT_DATE, EVENT_MONTH, EVENT_YEAR, FILE_CREATE_DATE, FILE_SAVE_AS, FILE_URL, MEETUP_WEEKDAY,
    PAGE_TAG, SAVE_EXT, URL_DIR,
};
use crate::domain::models::EventRecord;

/// Next cadence weekday strictly after `today`. A `today` already on the
/// cadence day advances a full week rather than returning itself.
pub fn next_occurrence(today: NaiveDate) -> NaiveDate {
    let mut ahead = (MEETUP_WEEKDAY.num_days_from_monday() + 7
        - today.weekday().num_days_from_monday())
        % 7;
    if ahead == 0 {
        ahead = 7;
    }
    today + Days::new(u64::from(ahead))
}

/// Day-of-month with its English ordinal suffix, no leading zero.
pub fn ordinal_day(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

/// Fill in the derived fields for the occurrence following `now`,
/// overwriting extracted fields of the same name. `FILE_CREATE_DATE`
/// carries the computed date with the hour and minute of `now`.
pub fn apply_derived_fields(record: &mut EventRecord, now: NaiveDateTime) {
    let next = next_occurrence(now.date());
    let created = NaiveDateTime::new(next, now.time());
    let url = format!("{URL_DIR}/{}/{}-{PAGE_TAG}", next.year(), next.format("%m%d"));
    record.insert(EVENT_YEAR.to_string(), next.year().to_string());
    record.insert(EVENT_MONTH.to_string(), next.format("%B").to_string());
    record.insert(EVENT_DATE.to_string(), ordinal_day(next.day()));
    record.insert(
        FILE_CREATE_DATE.to_string(),
        created.format("%Y-%m-%d %H:%M").to_string(),
    );
    record.insert(FILE_URL.to_string(), url.clone());
    record.insert(FILE_SAVE_AS.to_string(), format!("{url}{SAVE_EXT}"));
}
