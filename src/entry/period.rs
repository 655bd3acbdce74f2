use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unit of the reporting period length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PeriodUnit {
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl PeriodUnit {
    pub const ALL: [PeriodUnit; 5] = [
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hours => "Hours",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
        }
    }

    /// `end` minus `quantity` units.
    ///
    /// Hours, days and weeks are exact durations. Months and years are calendar
    /// steps; a day that does not exist in the target month is clamped to that
    /// month's last day (March 31 minus one month is February 28 or 29).
    /// Returns `None` if the result is outside chrono's representable range.
    pub fn start_before(self, end: DateTime<Utc>, quantity: u32) -> Option<DateTime<Utc>> {
        let q = i64::from(quantity);
        match self {
            Self::Hours => end.checked_sub_signed(TimeDelta::try_hours(q)?),
            Self::Days => end.checked_sub_signed(TimeDelta::try_days(q)?),
            Self::Weeks => end.checked_sub_signed(TimeDelta::try_weeks(q)?),
            Self::Months => end.checked_sub_months(Months::new(quantity)),
            Self::Years => end.checked_sub_months(Months::new(quantity.checked_mul(12)?)),
        }
    }
}

impl std::str::FromStr for PeriodUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown period unit: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(dt: Option<DateTime<Utc>>) -> NaiveDate {
        dt.unwrap().date_naive()
    }

    #[test]
    fn seven_days_before_june_tenth() {
        let start = PeriodUnit::Days.start_before(at(2024, 6, 10, 12), 7);
        assert_eq!(date(start), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn hours_can_cross_midnight() {
        let start = PeriodUnit::Hours.start_before(at(2024, 6, 10, 3), 5).unwrap();
        assert_eq!(start, at(2024, 6, 9, 22));
    }

    #[test]
    fn weeks_months_years() {
        let end = at(2024, 3, 31, 9);
        assert_eq!(
            date(PeriodUnit::Weeks.start_before(end, 2)),
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
        );
        assert_eq!(
            date(PeriodUnit::Months.start_before(end, 1)),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            date(PeriodUnit::Years.start_before(at(2024, 2, 29, 0), 1)),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("weeks".parse::<PeriodUnit>().unwrap(), PeriodUnit::Weeks);
        assert!("fortnights".parse::<PeriodUnit>().is_err());
    }
}
