use crate::statistic::error::StatisticError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

/// Trading days per year used by [`CalendarConvention::TradingDays`].
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Calendar days per year used by [`CalendarConvention::CalendarDays`].
pub const CALENDAR_DAYS_PER_YEAR: u32 = 365;

pub trait TimeInterval: Copy {
    fn name(&self) -> SmolStr;
    fn interval(&self) -> TimeDelta;
}

/// Number of days that make up one year when annualising a daily statistic.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CalendarConvention {
    /// 252 trading days per year.
    #[default]
    TradingDays,
    /// 365 calendar days per year.
    CalendarDays,
}

impl CalendarConvention {
    pub fn days_per_year(&self) -> u32 {
        match self {
            Self::TradingDays => TRADING_DAYS_PER_YEAR,
            Self::CalendarDays => CALENDAR_DAYS_PER_YEAR,
        }
    }
}

impl TimeInterval for CalendarConvention {
    fn name(&self) -> SmolStr {
        format_smolstr!("Annual({})", self.days_per_year())
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.days_per_year()))
    }
}

/// Closed set of sampling periods that can be annualised.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Day,
    Week,
    Month,
    Year,
}

impl Frequency {
    /// Number of `self` periods in one year under the provided [`CalendarConvention`].
    ///
    /// Only [`Frequency::Day`] depends on the convention.
    pub fn periods_per_year(&self, convention: CalendarConvention) -> f64 {
        match self {
            Self::Day => f64::from(convention.days_per_year()),
            Self::Week => 52.0,
            Self::Month => 12.0,
            Self::Year => 1.0,
        }
    }

    /// Classify a gap of whole days as a [`Frequency`].
    ///
    /// Calendar months span 28 to 31 days, and calendar years 365 or 366 days.
    pub fn from_gap_days(days: i64) -> Option<Self> {
        match days {
            1 => Some(Self::Day),
            7 => Some(Self::Week),
            28..=31 => Some(Self::Month),
            365..=366 => Some(Self::Year),
            _ => None,
        }
    }
}

impl TimeInterval for Frequency {
    fn name(&self) -> SmolStr {
        SmolStr::new_static(match self {
            Self::Day => "Daily",
            Self::Week => "Weekly",
            Self::Month => "Monthly",
            Self::Year => "Yearly",
        })
    }

    /// Nominal length of one period. Calendar months and years vary, so [`Frequency::Month`]
    /// and [`Frequency::Year`] report 30 and 365 days respectively.
    fn interval(&self) -> TimeDelta {
        match self {
            Self::Day => TimeDelta::days(1),
            Self::Week => TimeDelta::weeks(1),
            Self::Month => TimeDelta::days(30),
            Self::Year => TimeDelta::days(365),
        }
    }
}

impl TryFrom<TimeDelta> for Frequency {
    type Error = StatisticError;

    fn try_from(value: TimeDelta) -> Result<Self, Self::Error> {
        let days = value.num_days();
        if value != TimeDelta::days(days) {
            return Err(StatisticError::UnsupportedFrequency(value));
        }

        Self::from_gap_days(days).ok_or(StatisticError::UnsupportedFrequency(value))
    }
}

impl TimeInterval for TimeDelta {
    fn name(&self) -> SmolStr {
        format_smolstr!("Duration {} (days)", self.num_days())
    }

    fn interval(&self) -> TimeDelta {
        *self
    }
}

/// Map a sampling interval to the number of such periods per year.
///
/// | interval | result |
/// |---|---|
/// | 1 day | `convention.days_per_year()` (252 or 365) |
/// | 1 week | 52 |
/// | 1 month | 12 |
/// | 1 year | 1 |
///
/// Any other interval fails with [`StatisticError::UnsupportedFrequency`].
pub fn periods_per_year<Interval>(
    interval: Interval,
    convention: CalendarConvention,
) -> Result<f64, StatisticError>
where
    Interval: TimeInterval,
{
    Frequency::try_from(interval.interval()).map(|frequency| frequency.periods_per_year(convention))
}
