//! Fixed English month and weekday names.
//!
//! Names come from these tables rather than a formatter so that derived
//! columns never depend on locale.

use chrono::Weekday;

/// Weekdays in Monday-first order.
pub static WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

static WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of `day`, e.g. `"Wednesday"`.
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Full English name of a 1-based month number, or `None` outside 1–12.
#[must_use]
pub fn month_name(number: u32) -> Option<&'static str> {
    let idx = usize::try_from(number).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        for (day, name) in WEEKDAYS.iter().zip(WEEKDAY_NAMES) {
            assert_eq!(weekday_name(*day), name);
        }
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
