//! Read-only chart views over the filtered postings.
//!
//! Each view is independent of the others and recomputed from scratch.  The
//! means here stay as `f64`; only the headline metrics are truncated.

use super::aggregate::group_mean;
use super::model::JobPosting;

pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_TOP_CITIES: usize = 10;

// ---------------------------------------------------------------------------
// Salary histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryHistogram {
    /// Empty when there was nothing to bin.
    pub bins: Vec<HistogramBin>,
}

impl SalaryHistogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Equal-width bins over the observed `[min, max]` salary range.
///
/// Bins are half-open `[lower, upper)` except the last, which also takes
/// `max`.  A degenerate range (all salaries equal) is widened by 0.5 on each
/// side so the single value lands in the middle bin.
pub fn salary_histogram(rows: &[JobPosting], bin_count: usize) -> SalaryHistogram {
    if rows.is_empty() || bin_count == 0 {
        return SalaryHistogram::default();
    }

    let (min, max) = rows
        .iter()
        .map(|p| p.average_salary)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
    let width = (hi - lo) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bin_count { hi } else { lo + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();

    for p in rows {
        let idx = ((p.average_salary - lo) / width) as usize;
        bins[idx.min(bin_count - 1)].count += 1;
    }

    SalaryHistogram { bins }
}

// ---------------------------------------------------------------------------
// Experience trend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub experience: f64,
    pub mean_salary: f64,
}

/// Exact-equality grouping key for experience values (`-0.0` folds into `0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExperienceKey(u64);

impl ExperienceKey {
    fn new(v: f64) -> Self {
        let v = if v == 0.0 { 0.0 } else { v };
        ExperienceKey(v.to_bits())
    }

    fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Mean salary per distinct experience value, ascending by experience.
pub fn experience_trend(rows: &[JobPosting]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = group_mean(
        rows,
        |p| ExperienceKey::new(p.average_experience),
        |p| p.average_salary,
    )
    .into_iter()
    .map(|(key, mean_salary)| TrendPoint {
        experience: key.value(),
        mean_salary,
    })
    .collect();

    points.sort_by(|a, b| a.experience.total_cmp(&b.experience));
    points
}

// ---------------------------------------------------------------------------
// City ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CityAverage {
    pub city: String,
    pub mean_salary: f64,
}

/// The `top_n` cities by mean salary, highest first.
///
/// The sort is stable, so cities with equal means keep the order in which
/// they first appear in `rows`.
pub fn city_ranking(rows: &[JobPosting], top_n: usize) -> Vec<CityAverage> {
    let mut ranking: Vec<CityAverage> = group_mean(rows, |p| p.location.clone(), |p| p.average_salary)
        .into_iter()
        .map(|(city, mean_salary)| CityAverage { city, mean_salary })
        .collect();

    ranking.sort_by(|a, b| b.mean_salary.total_cmp(&a.mean_salary));
    ranking.truncate(top_n);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(location: &str, salary: f64, experience: f64) -> JobPosting {
        JobPosting {
            location: location.to_string(),
            is_tech: true,
            average_salary: salary,
            average_experience: experience,
        }
    }

    #[test]
    fn test_histogram_empty() {
        let h = salary_histogram(&[], DEFAULT_HISTOGRAM_BINS);
        assert!(h.bins.is_empty());
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn test_histogram_counts_every_row() {
        let rows: Vec<JobPosting> = (0..97)
            .map(|i| posting("Pune", 200_000.0 + i as f64 * 13_337.0, 1.0))
            .collect();
        let h = salary_histogram(&rows, DEFAULT_HISTOGRAM_BINS);
        assert_eq!(h.bins.len(), 30);
        assert_eq!(h.total(), 97);
        assert_eq!(h.bins[0].lower, 200_000.0);
        assert_eq!(h.bins[29].upper, 200_000.0 + 96.0 * 13_337.0);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let rows = [posting("A", 0.0, 0.0), posting("A", 10.0, 0.0), posting("A", 5.0, 0.0)];
        let h = salary_histogram(&rows, 2);
        assert_eq!(h.bins[0].count, 1);
        assert_eq!(h.bins[1].count, 2);
    }

    #[test]
    fn test_histogram_single_value() {
        let rows = [posting("A", 300_000.0, 0.0), posting("B", 300_000.0, 0.0)];
        let h = salary_histogram(&rows, 30);
        assert_eq!(h.bins.len(), 30);
        assert_eq!(h.bins[0].lower, 299_999.5);
        assert_eq!(h.bins[15].count, 2);
        assert_eq!(h.total(), 2);
    }

    #[test]
    fn test_trend_groups_exactly_and_sorts() {
        let rows = [
            posting("A", 600_000.0, 5.0),
            posting("A", 200_000.0, 0.0),
            posting("A", 400_000.0, 5.0),
            posting("A", 300_000.0, 1.5),
            posting("A", 100_000.0, -0.0),
        ];
        let trend = experience_trend(&rows);
        assert_eq!(
            trend,
            vec![
                TrendPoint {
                    experience: 0.0,
                    mean_salary: 150_000.0
                },
                TrendPoint {
                    experience: 1.5,
                    mean_salary: 300_000.0
                },
                TrendPoint {
                    experience: 5.0,
                    mean_salary: 500_000.0
                },
            ]
        );
    }

    #[test]
    fn test_ranking_top_ten_descending() {
        let rows: Vec<JobPosting> = (0..15)
            .flat_map(|i| {
                let city = format!("City{i}");
                [
                    posting(&city, 100_000.0 * i as f64, 1.0),
                    posting(&city, 100_000.0 * i as f64 + 50_000.0, 1.0),
                ]
            })
            .collect();
        let ranking = city_ranking(&rows, DEFAULT_TOP_CITIES);
        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0].city, "City14");
        assert_eq!(ranking[0].mean_salary, 1_425_000.0);
        assert!(ranking.windows(2).all(|w| w[0].mean_salary >= w[1].mean_salary));
    }

    #[test]
    fn test_ranking_ties_keep_first_appearance() {
        let rows = [
            posting("Jaipur", 400_000.0, 1.0),
            posting("Indore", 500_000.0, 1.0),
            posting("Agra", 400_000.0, 1.0),
        ];
        let cities: Vec<String> = city_ranking(&rows, 10).into_iter().map(|c| c.city).collect();
        assert_eq!(cities, vec!["Indore", "Jaipur", "Agra"]);
    }

    #[test]
    fn test_ranking_empty() {
        assert!(city_ranking(&[], 10).is_empty());
    }
}
