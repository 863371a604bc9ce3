use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::CityColors;
use crate::config::DashboardConfig;
use crate::data::filter::{CityFilter, RoleCategory};
use crate::data::loader::load_file;
use crate::data::model::JobTable;
use crate::data::pipeline::{self, DashboardInputs, DashboardSnapshot, EstimatorInputs, PipelineSettings};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a source loads successfully).
    pub table: Option<Arc<JobTable>>,

    /// Source of the current (or last attempted) load.
    pub source: PathBuf,

    /// Current control values.
    pub inputs: DashboardInputs,

    /// Output of the last pipeline run.
    pub snapshot: Option<DashboardSnapshot>,

    pub settings: PipelineSettings,
    pub currency_symbol: String,
    pub city_colors: CityColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            table: None,
            source: config.dataset_path.clone(),
            inputs: DashboardInputs {
                estimator: EstimatorInputs {
                    experience_years: config.default_experience,
                    is_tech: false,
                },
                ..Default::default()
            },
            snapshot: None,
            settings: config.pipeline_settings(),
            currency_symbol: config.currency_symbol.clone(),
            city_colors: CityColors::default(),
            status_message: None,
        }
    }

    /// Load `path`, replacing the current dataset on success.
    ///
    /// On failure the previous dataset is dropped too: a failed source never
    /// leaves stale numbers on screen.
    pub fn load_source(&mut self, path: &Path) {
        self.source = path.to_path_buf();
        match load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} postings across {} cities from {}",
                    table.len(),
                    table.cities().len(),
                    path.display()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.table = None;
                self.snapshot = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Reload the current source from disk.
    pub fn reload(&mut self) {
        let source = self.source.clone();
        self.load_source(&source);
    }

    /// Ingest a newly loaded table, reset the filters and recompute.
    pub fn set_table(&mut self, table: JobTable) {
        self.city_colors = CityColors::new(table.cities());
        self.inputs.criteria = Default::default();
        self.table = Some(Arc::new(table));
        self.status_message = None;
        self.recompute();
    }

    /// Rerun the whole pipeline against the current inputs.
    pub fn recompute(&mut self) {
        self.snapshot = self.table.as_ref().map(|table| {
            log::debug!("recomputing dashboard for {:?}", self.inputs);
            pipeline::run(table, &self.inputs, &self.settings)
        });
    }

    pub fn set_city(&mut self, city: CityFilter) {
        if self.inputs.criteria.city != city {
            self.inputs.criteria.city = city;
            self.recompute();
        }
    }

    pub fn set_role(&mut self, role: RoleCategory) {
        if self.inputs.criteria.role != role {
            self.inputs.criteria.role = role;
            self.recompute();
        }
    }

    pub fn set_estimator_inputs(&mut self, estimator: EstimatorInputs) {
        if self.inputs.estimator != estimator {
            self.inputs.estimator = estimator;
            self.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::estimate::MarketComparison;
    use crate::data::model::JobPosting;

    fn table() -> JobTable {
        JobTable::from_postings(vec![
            JobPosting {
                location: "Pune".to_string(),
                is_tech: true,
                average_salary: 900_000.0,
                average_experience: 3.0,
            },
            JobPosting {
                location: "Delhi".to_string(),
                is_tech: false,
                average_salary: 300_000.0,
                average_experience: 1.0,
            },
        ])
    }

    #[test]
    fn test_controls_trigger_recompute() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.set_table(table());
        assert_eq!(state.snapshot.as_ref().unwrap().metrics.total_jobs, 2);

        state.set_city(CityFilter::City("Delhi".to_string()));
        let snap = state.snapshot.as_ref().unwrap();
        assert_eq!(snap.metrics.total_jobs, 1);
        assert_eq!(snap.metrics.avg_salary, Some(300_000));

        state.set_role(RoleCategory::Tech);
        let snap = state.snapshot.as_ref().unwrap();
        assert_eq!(snap.metrics.total_jobs, 0);
        assert_eq!(snap.comparison, MarketComparison::NoData);

        state.set_estimator_inputs(EstimatorInputs {
            experience_years: 5,
            is_tech: true,
        });
        assert_eq!(state.snapshot.as_ref().unwrap().predicted_salary, 750_000);
    }

    #[test]
    fn test_new_table_resets_filters() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.set_table(table());
        state.set_role(RoleCategory::NonTech);
        state.set_table(table());
        assert_eq!(state.inputs.criteria.role, RoleCategory::All);
        assert_eq!(state.snapshot.as_ref().unwrap().metrics.total_jobs, 2);
    }

    #[test]
    fn test_failed_load_clears_dashboard() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.set_table(table());
        state.load_source(Path::new("/nonexistent/jobs.csv"));
        assert!(state.table.is_none());
        assert!(state.snapshot.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }
}
