use super::aggregate::truncated_mean;
use super::model::JobPosting;

/// Headline numbers for the filtered table.
///
/// Averages are whole currency units, `None` when the subset they cover is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarketMetrics {
    pub total_jobs: usize,
    pub avg_salary: Option<i64>,
    pub tech_avg_salary: Option<i64>,
    pub non_tech_avg_salary: Option<i64>,
}

pub fn compute_metrics(rows: &[JobPosting]) -> MarketMetrics {
    let salaries = |tech: Option<bool>| {
        truncated_mean(
            rows.iter()
                .filter(|p| tech.map_or(true, |t| p.is_tech == t))
                .map(|p| p.average_salary),
        )
    };

    MarketMetrics {
        total_jobs: rows.len(),
        avg_salary: salaries(None),
        tech_avg_salary: salaries(Some(true)),
        non_tech_avg_salary: salaries(Some(false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(salary: f64, is_tech: bool) -> JobPosting {
        JobPosting {
            location: "Kolkata".to_string(),
            is_tech,
            average_salary: salary,
            average_experience: 1.0,
        }
    }

    #[test]
    fn test_empty_table() {
        let m = compute_metrics(&[]);
        assert_eq!(m.total_jobs, 0);
        assert_eq!(m.avg_salary, None);
        assert_eq!(m.tech_avg_salary, None);
        assert_eq!(m.non_tech_avg_salary, None);
    }

    #[test]
    fn test_all_tech() {
        let rows = [
            posting(100_000.0, true),
            posting(200_000.0, true),
            posting(300_000.0, true),
        ];
        let m = compute_metrics(&rows);
        assert_eq!(
            m,
            MarketMetrics {
                total_jobs: 3,
                avg_salary: Some(200_000),
                tech_avg_salary: Some(200_000),
                non_tech_avg_salary: None,
            }
        );
    }

    #[test]
    fn test_mixed_roles_truncate() {
        let rows = [
            posting(100_000.0, true),
            posting(100_001.0, true),
            posting(50_000.0, false),
        ];
        let m = compute_metrics(&rows);
        assert_eq!(m.avg_salary, Some(83_333));
        assert_eq!(m.tech_avg_salary, Some(100_000));
        assert_eq!(m.non_tech_avg_salary, Some(50_000));
    }
}
