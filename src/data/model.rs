use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_LOCATION: &str = "location";
pub const COL_IS_TECH: &str = "is_tech";
pub const COL_SALARY: &str = "averageSalary";
pub const COL_EXPERIENCE: &str = "averageExperience";

/// Columns every source must provide.  Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_LOCATION, COL_IS_TECH, COL_SALARY, COL_EXPERIENCE];

// ---------------------------------------------------------------------------
// JobPosting – one row of the dataset
// ---------------------------------------------------------------------------

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// City name, used verbatim as a categorical key.
    pub location: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_tech: bool,
    #[serde(rename = "averageSalary")]
    pub average_salary: f64,
    /// Years of experience.
    #[serde(rename = "averageExperience")]
    pub average_experience: f64,
}

/// Parse the textual spellings a cleaned export may use for a boolean flag.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim() {
        "true" | "True" | "TRUE" | "1" | "yes" | "Yes" | "YES" => Some(true),
        "false" | "False" | "FALSE" | "0" | "no" | "No" | "NO" => Some(false),
        _ => None,
    }
}

/// Accepts real booleans (JSON), 0/1 integers and the spellings in [`parse_flag`].
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean flag (true/false, True/False, 1/0, yes/no)")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(de::Unexpected::Signed(other), &self)),
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(de::Unexpected::Unsigned(other), &self)),
            }
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
            if v == 0.0 {
                Ok(false)
            } else if v == 1.0 {
                Ok(true)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            parse_flag(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

// ---------------------------------------------------------------------------
// JobTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An immutable table of postings with the distinct city index pre-computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobTable {
    postings: Vec<JobPosting>,
    /// Sorted distinct `location` values.
    cities: BTreeSet<String>,
}

impl JobTable {
    /// Build the city index from the loaded postings.
    pub fn from_postings(postings: Vec<JobPosting>) -> Self {
        let cities = postings.iter().map(|p| p.location.clone()).collect();
        JobTable { postings, cities }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn cities(&self) -> &BTreeSet<String> {
        &self.cities
    }

    /// Number of postings.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(location: &str) -> JobPosting {
        JobPosting {
            location: location.to_string(),
            is_tech: false,
            average_salary: 100_000.0,
            average_experience: 1.0,
        }
    }

    #[test]
    fn test_cities_are_sorted_and_distinct() {
        let table = JobTable::from_postings(vec![posting("Pune"), posting("Bengaluru"), posting("Pune")]);
        let cities: Vec<&str> = table.cities().iter().map(String::as_str).collect();
        assert_eq!(cities, vec!["Bengaluru", "Pune"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_locations_are_not_normalised() {
        let table = JobTable::from_postings(vec![posting("pune"), posting("Pune"), posting("Pune ")]);
        assert_eq!(table.cities().len(), 3);
    }

    #[test]
    fn test_parse_flag_spellings() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_deserialize_flag_from_json_bool() {
        let json = r#"{"location":"Delhi","is_tech":true,"averageSalary":5.0,"averageExperience":2}"#;
        let p: JobPosting = serde_json::from_str(json).unwrap();
        assert!(p.is_tech);
        assert_eq!(p.average_experience, 2.0);
    }

    #[test]
    fn test_deserialize_flag_rejects_other_integers() {
        let json = r#"{"location":"Delhi","is_tech":3,"averageSalary":5.0,"averageExperience":2}"#;
        assert!(serde_json::from_str::<JobPosting>(json).is_err());
    }
}
