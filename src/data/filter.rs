use std::fmt;

use super::model::{JobPosting, JobTable};

// ---------------------------------------------------------------------------
// Filter criteria: one city (or all) and one role category
// ---------------------------------------------------------------------------

/// City selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `location`.
    City(String),
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityFilter::All => write!(f, "All"),
            CityFilter::City(c) => write!(f, "{c}"),
        }
    }
}

/// Role selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleCategory {
    #[default]
    All,
    Tech,
    NonTech,
}

impl RoleCategory {
    /// Selector options, in display order.
    pub const OPTIONS: [RoleCategory; 3] = [RoleCategory::All, RoleCategory::Tech, RoleCategory::NonTech];

    fn accepts(self, is_tech: bool) -> bool {
        match self {
            RoleCategory::All => true,
            RoleCategory::Tech => is_tech,
            RoleCategory::NonTech => !is_tech,
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleCategory::All => write!(f, "All"),
            RoleCategory::Tech => write!(f, "Tech"),
            RoleCategory::NonTech => write!(f, "Non-Tech"),
        }
    }
}

/// The user's current selection.  `Default` selects everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub city: CityFilter,
    pub role: RoleCategory,
}

impl FilterCriteria {
    /// Both filters are conjunctive.
    pub fn matches(&self, posting: &JobPosting) -> bool {
        let city_ok = match &self.city {
            CityFilter::All => true,
            CityFilter::City(c) => posting.location == *c,
        };
        city_ok && self.role.accepts(posting.is_tech)
    }
}

// ---------------------------------------------------------------------------
// Applying the criteria
// ---------------------------------------------------------------------------

/// Return indices of postings that pass the criteria, in table order.
pub fn filtered_indices(table: &JobTable, criteria: &FilterCriteria) -> Vec<usize> {
    table
        .postings()
        .iter()
        .enumerate()
        .filter(|(_, p)| criteria.matches(p))
        .map(|(i, _)| i)
        .collect()
}

/// Build a fresh table holding only the matching postings.  May be empty.
pub fn apply(table: &JobTable, criteria: &FilterCriteria) -> JobTable {
    let rows = table.postings();
    let postings = filtered_indices(table, criteria)
        .into_iter()
        .map(|i| rows[i].clone())
        .collect();
    JobTable::from_postings(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(location: &str, is_tech: bool) -> JobPosting {
        JobPosting {
            location: location.to_string(),
            is_tech,
            average_salary: 500_000.0,
            average_experience: 2.0,
        }
    }

    fn sample_table() -> JobTable {
        JobTable::from_postings(vec![
            posting("Pune", true),
            posting("Mumbai", false),
            posting("Pune", false),
            posting("pune", true),
            posting("Delhi", true),
        ])
    }

    fn city(name: &str) -> CityFilter {
        CityFilter::City(name.to_string())
    }

    #[test]
    fn test_all_all_is_identity() {
        let table = sample_table();
        assert_eq!(apply(&table, &FilterCriteria::default()), table);
    }

    #[test]
    fn test_city_filter_is_exact() {
        let table = sample_table();
        let criteria = FilterCriteria {
            city: city("Pune"),
            role: RoleCategory::All,
        };
        let out = apply(&table, &criteria);
        assert_eq!(out.len(), 2);
        assert!(out.postings().iter().all(|p| p.location == "Pune"));
    }

    #[test]
    fn test_role_filters() {
        let table = sample_table();
        let tech = apply(
            &table,
            &FilterCriteria {
                city: CityFilter::All,
                role: RoleCategory::Tech,
            },
        );
        assert_eq!(tech.len(), 3);
        assert!(tech.postings().iter().all(|p| p.is_tech));

        let non_tech = apply(
            &table,
            &FilterCriteria {
                city: CityFilter::All,
                role: RoleCategory::NonTech,
            },
        );
        assert_eq!(non_tech.len(), 2);
        assert!(non_tech.postings().iter().all(|p| !p.is_tech));
    }

    #[test]
    fn test_filters_combine() {
        let table = sample_table();
        let criteria = FilterCriteria {
            city: city("Pune"),
            role: RoleCategory::NonTech,
        };
        assert_eq!(filtered_indices(&table, &criteria), vec![2]);

        let out = apply(&table, &criteria);
        assert_eq!(out.postings(), &table.postings()[2..3]);
    }

    #[test]
    fn test_unknown_city_yields_empty() {
        let table = sample_table();
        let criteria = FilterCriteria {
            city: city("Atlantis"),
            role: RoleCategory::All,
        };
        assert!(apply(&table, &criteria).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let table = sample_table();
        let criteria = FilterCriteria {
            city: city("Pune"),
            role: RoleCategory::Tech,
        };
        let once = apply(&table, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_role_labels() {
        let labels: Vec<String> = RoleCategory::OPTIONS.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["All", "Tech", "Non-Tech"]);
    }
}
