use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::data::estimate::{SalaryEstimator, MAX_EXPERIENCE_YEARS};
use crate::data::pipeline::PipelineSettings;
use crate::data::views::{DEFAULT_HISTOGRAM_BINS, DEFAULT_TOP_CITIES};

/// Looked up in the working directory at start-up.
pub const CONFIG_FILE: &str = "job_dashboard.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Start-up settings.  Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Dataset opened at start-up.
    pub dataset_path: PathBuf,
    pub histogram_bins: usize,
    pub top_cities: usize,
    pub currency_symbol: String,
    /// Initial position of the experience slider.
    pub default_experience: u32,
    pub estimator: SalaryEstimator,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("cleaned_job_market_data.csv"),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            top_cities: DEFAULT_TOP_CITIES,
            currency_symbol: "₹".to_string(),
            default_experience: 2,
            estimator: SalaryEstimator::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a configuration file.  A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.default_experience = config.default_experience.min(MAX_EXPERIENCE_YEARS);
        config
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`DashboardConfig::load`], but a malformed file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Ignoring configuration: {e:#}");
            Self::default()
        })
    }

    /// Reject values that would blank the charts or overflow the estimator.
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            bail!("histogram_bins must be at least 1");
        }
        if self.top_cities == 0 {
            bail!("top_cities must be at least 1");
        }
        if !self.estimator.fits_slider_range() {
            bail!(
                "estimator overflows for experience up to {MAX_EXPERIENCE_YEARS} years: {:?}",
                self.estimator
            );
        }
        Ok(())
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            histogram_bins: self.histogram_bins,
            top_cities: self.top_cities,
            estimator: self.estimator,
        }
    }
}
