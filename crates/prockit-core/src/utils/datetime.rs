//! Date and time display helpers
//!
//! Each formatter projects the instant into the local time zone before
//! rendering, whatever zone the caller's value carries.

use chrono::{DateTime, Local, TimeZone};

/// `hh:mm AM` (12-hour clock)
pub const TIME_FORMAT: &str = "%I:%M %p";
/// `MM/DD/YYYY`
pub const DATE_FORMAT: &str = "%m/%d/%Y";
/// `YYYYMMDDHHmm` (24-hour clock, no separators)
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M";

fn local<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Local> {
    date.with_timezone(&Local)
}

/// Hour and minute with an AM/PM marker, e.g. `02:30 PM`
pub fn format_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    local(date).format(TIME_FORMAT).to_string()
}

/// Zero-padded month/day/year, e.g. `03/07/2024`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    local(date).format(DATE_FORMAT).to_string()
}

/// [`format_date`] and [`format_time`] separated by a space
pub fn format_full<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    [format_date(date), format_time(date)].join(" ")
}

/// Sortable, filename-safe stamp, e.g. `202403071430`
pub fn file_stamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    local(date).format(FILE_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn afternoon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 7, 14, 30, 0)
            .earliest()
            .expect("valid local time")
    }

    fn morning() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 11, 2, 9, 5, 59)
            .earliest()
            .expect("valid local time")
    }

    #[test]
    fn test_format_time_uses_twelve_hour_clock() {
        assert_eq!(format_time(&afternoon()), "02:30 PM");
        assert_eq!(format_time(&morning()), "09:05 AM");
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        assert_eq!(format_date(&afternoon()), "03/07/2024");
        assert_eq!(format_date(&morning()), "11/02/2024");
    }

    #[test]
    fn test_format_full_delegates() {
        let date = afternoon();
        assert_eq!(format_full(&date), "03/07/2024 02:30 PM");
        assert_eq!(
            format_full(&date),
            format!("{} {}", format_date(&date), format_time(&date))
        );
    }

    #[test]
    fn test_file_stamp_uses_twenty_four_hour_clock() {
        assert_eq!(file_stamp(&afternoon()), "202403071430");
        assert_eq!(file_stamp(&morning()), "202411020905");
    }

    #[test]
    fn test_other_zones_are_projected_to_local() {
        let utc = Utc::now();
        let local_now = utc.with_timezone(&Local);
        assert_eq!(file_stamp(&utc), file_stamp(&local_now));
        assert_eq!(format_full(&utc), format_full(&local_now));
    }

    #[test]
    fn test_midnight_and_noon_markers() {
        let midnight = Local
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .latest()
            .expect("valid local time");
        assert_eq!(format_time(&midnight), "12:00 AM");
        let noon = Local
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .earliest()
            .expect("valid local time");
        assert_eq!(format_time(&noon), "12:00 PM");
    }
}
