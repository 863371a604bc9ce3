use std::fmt;

use serde::Deserialize;

use super::metrics::MarketMetrics;

/// Upper bound of the experience slider, in years.
pub const MAX_EXPERIENCE_YEARS: u32 = 20;

/// A closed-form salary formula: `base + years * per_year + tech_premium` (tech only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryEstimator {
    pub base_salary: i64,
    pub per_year: i64,
    pub tech_premium: i64,
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self {
            base_salary: 200_000,
            per_year: 90_000,
            tech_premium: 100_000,
        }
    }
}

impl SalaryEstimator {
    /// Inputs outside `0..=MAX_EXPERIENCE_YEARS` are not validated here; the
    /// slider bounds them.  Saturates instead of overflowing on extreme
    /// coefficients.
    pub fn estimate(&self, experience_years: u32, is_tech: bool) -> i64 {
        self.base_salary
            .saturating_add(i64::from(experience_years).saturating_mul(self.per_year))
            .saturating_add(i64::from(is_tech).saturating_mul(self.tech_premium))
    }

    pub fn checked_estimate(&self, experience_years: u32, is_tech: bool) -> Option<i64> {
        i64::from(experience_years)
            .checked_mul(self.per_year)?
            .checked_add(self.base_salary)?
            .checked_add(i64::from(is_tech) * self.tech_premium)
    }

    /// Whether every slider position yields an estimate without overflow.
    ///
    /// The formula is linear, so checking the four corners covers the range.
    pub fn fits_slider_range(&self) -> bool {
        [0, MAX_EXPERIENCE_YEARS]
            .into_iter()
            .all(|years| [false, true].into_iter().all(|tech| self.checked_estimate(years, tech).is_some()))
    }
}

/// How a prediction compares with the filtered market average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketComparison {
    Above,
    /// Also used when the prediction equals the average.
    Below,
    /// No postings match the filters, so there is nothing to compare with.
    NoData,
}

impl MarketComparison {
    pub fn compare(predicted: i64, metrics: &MarketMetrics) -> Self {
        match metrics.avg_salary {
            Some(avg) if metrics.total_jobs > 0 => {
                if predicted > avg {
                    MarketComparison::Above
                } else {
                    MarketComparison::Below
                }
            }
            _ => MarketComparison::NoData,
        }
    }
}

impl fmt::Display for MarketComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketComparison::Above => write!(f, "This is above the current filtered market average!"),
            MarketComparison::Below => write!(f, "This is below the current filtered market average."),
            MarketComparison::NoData => write!(f, "No postings match the current filters to compare against."),
        }
    }
}
