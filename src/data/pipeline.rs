//! The whole dashboard computation as one pure function.
//!
//! The host calls [`run`] on every input change; nothing here is cached.

use super::estimate::{MarketComparison, SalaryEstimator};
use super::filter::{self, FilterCriteria};
use super::metrics::{compute_metrics, MarketMetrics};
use super::model::JobTable;
use super::views::{
    city_ranking, experience_trend, salary_histogram, CityAverage, SalaryHistogram, TrendPoint,
    DEFAULT_HISTOGRAM_BINS, DEFAULT_TOP_CITIES,
};

/// Values of the predictor controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorInputs {
    pub experience_years: u32,
    pub is_tech: bool,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            experience_years: 2,
            is_tech: false,
        }
    }
}

/// Everything the user can change between two runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardInputs {
    pub criteria: FilterCriteria,
    pub estimator: EstimatorInputs,
}

/// Fixed knobs, taken from the configuration at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub histogram_bins: usize,
    pub top_cities: usize,
    pub estimator: SalaryEstimator,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            top_cities: DEFAULT_TOP_CITIES,
            estimator: SalaryEstimator::default(),
        }
    }
}

/// One full render's worth of derived data.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub metrics: MarketMetrics,
    pub histogram: SalaryHistogram,
    pub trend: Vec<TrendPoint>,
    pub ranking: Vec<CityAverage>,
    pub predicted_salary: i64,
    pub comparison: MarketComparison,
}

pub fn run(table: &JobTable, inputs: &DashboardInputs, settings: &PipelineSettings) -> DashboardSnapshot {
    let filtered = filter::apply(table, &inputs.criteria);
    let rows = filtered.postings();

    let metrics = compute_metrics(rows);
    let histogram = salary_histogram(rows, settings.histogram_bins);
    let trend = experience_trend(rows);
    let ranking = city_ranking(rows, settings.top_cities);

    let predicted_salary = settings
        .estimator
        .estimate(inputs.estimator.experience_years, inputs.estimator.is_tech);
    let comparison = MarketComparison::compare(predicted_salary, &metrics);

    DashboardSnapshot {
        metrics,
        histogram,
        trend,
        ranking,
        predicted_salary,
        comparison,
    }
}
