//! Resampling frequency for summary reports
//!
//! A frequency maps each calendar date to the closing edge of the bucket it
//! falls in: the day itself, the following Sunday, the last day of the month,
//! or December 31st.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

/// Bucket length for periodic transaction summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// The closing edge of the bucket containing `date`
    pub fn period_end(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => {
                // Weeks close on Sunday
                let to_sunday = 6 - u64::from(date.weekday().num_days_from_monday());
                date + Days::new(to_sunday)
            }
            Self::Monthly => month_end(date.year(), date.month()),
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 12, 31)
                .expect("December 31st exists in every year"),
        }
    }

    /// The closing edge of the bucket after the one closing at `end`
    pub fn next_period_end(&self, end: NaiveDate) -> NaiveDate {
        self.period_end(end + Days::new(1))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(format!(
                "Unknown frequency '{}' (expected daily, weekly, monthly, or yearly)",
                other
            )),
        }
    }
}

/// Last day of the given month
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month exists")
        .pred_opt()
        .expect("date has a predecessor")
}
