use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::locale::Locale;

/// Storage format of expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored `yyyy-MM-dd` date. Surrounding whitespace is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Current local calendar date. Callers read this once and pass it down.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Time range used to narrow expense records before aggregation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeRangeSelector {
    #[default]
    All,
    LastWeek,
    ThisMonth,
    LastThreeMonths,
    ThisYear,
    /// Explicit inclusive bounds, used verbatim.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl FromStr for TimeRangeSelector {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(Self::All),
            "last_week" => Ok(Self::LastWeek),
            "this_month" => Ok(Self::ThisMonth),
            "last_three_months" | "last_3_months" => Ok(Self::LastThreeMonths),
            "this_year" => Ok(Self::ThisYear),
            _ => Err(()),
        }
    }
}

impl TimeRangeSelector {
    /// Resolve user supplied parameters into a selector.
    ///
    /// A preset wins over explicit dates. Unknown presets and unparseable
    /// dates fall back to [`TimeRangeSelector::All`].
    pub fn from_params(preset: Option<&str>, from: Option<&str>, to: Option<&str>) -> Self {
        if let Some(preset) = preset {
            return preset.parse().unwrap_or_else(|_| {
                warn!(preset, "Unknown time range preset, using all records");
                Self::All
            });
        }

        match (from.and_then(parse_date), to.and_then(parse_date)) {
            (Some(start), Some(end)) => Self::Custom { start, end },
            _ => {
                if from.is_some() || to.is_some() {
                    warn!(?from, ?to, "Incomplete or invalid custom range, using all records");
                }
                Self::All
            }
        }
    }

    pub fn named() -> &'static [TimeRangeSelector] {
        &[
            Self::All,
            Self::LastWeek,
            Self::ThisMonth,
            Self::LastThreeMonths,
            Self::ThisYear,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::LastWeek => "last_week",
            Self::ThisMonth => "this_month",
            Self::LastThreeMonths => "last_three_months",
            Self::ThisYear => "this_year",
            Self::Custom { .. } => "custom",
        }
    }

    /// Human-readable label; custom ranges render their bounds.
    pub fn label(&self, locale: Locale) -> String {
        let named = match (self, locale) {
            (Self::All, Locale::PtBr) => "Tudo",
            (Self::All, Locale::EnUs) => "All",
            (Self::LastWeek, Locale::PtBr) => "Última semana",
            (Self::LastWeek, Locale::EnUs) => "Last Week",
            (Self::ThisMonth, Locale::PtBr) => "Este mês",
            (Self::ThisMonth, Locale::EnUs) => "This Month",
            (Self::LastThreeMonths, Locale::PtBr) => "Últimos 3 meses",
            (Self::LastThreeMonths, Locale::EnUs) => "Last 3 Months",
            (Self::ThisYear, Locale::PtBr) => "Este ano",
            (Self::ThisYear, Locale::EnUs) => "This Year",
            (Self::Custom { start, end }, _) => {
                return DateRange::new(*start, *end).display_label(locale)
            }
        };
        named.to_string()
    }
}

/// Inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Resolve a selector against `today`. `None` means unbounded.
    pub fn resolve(selector: &TimeRangeSelector, today: NaiveDate) -> Option<Self> {
        let range = match *selector {
            TimeRangeSelector::All => return None,
            TimeRangeSelector::LastWeek => {
                let start = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
                Self::new(start, today)
            }
            TimeRangeSelector::ThisMonth => Self::new(month_start(today), today),
            TimeRangeSelector::LastThreeMonths => {
                let start = today
                    .checked_sub_months(Months::new(3))
                    .unwrap_or(NaiveDate::MIN);
                Self::new(start, today)
            }
            TimeRangeSelector::ThisYear => Self::new(year_start(today), today),
            TimeRangeSelector::Custom { start, end } => {
                if start > end {
                    debug!(%start, %end, "Custom range is inverted and matches nothing");
                }
                Self::new(start, end)
            }
        };
        Some(range)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Label such as "15 – 31 Jan 2024" or "20 Dez 2023 – 10 Jan 2024".
    pub fn display_label(&self, locale: Locale) -> String {
        let month = |d: NaiveDate| locale.month_abbreviation(d.month0() as usize).unwrap_or("?");
        if self.from.year() == self.to.year() && self.from.month() == self.to.month() {
            format!(
                "{} – {} {} {}",
                self.from.day(),
                self.to.day(),
                month(self.to),
                self.to.year()
            )
        } else {
            format!(
                "{} {} {} – {} {} {}",
                self.from.day(),
                month(self.from),
                self.from.year(),
                self.to.day(),
                month(self.to),
                self.to.year()
            )
        }
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn year_start(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}
