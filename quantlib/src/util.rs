use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::{Observation, RiskLevel, SignalSeries};

pub const DEFAULT_TITLE: &str = "ILLUSTRATION: LOGGING BITCOIN/US DOLLAR TRANSACTIONS";

/// A set of observations to load into a series, along with the risk level
/// the weighted signal should be reported at.
///
/// Scenario files are JSON:
///
/// ```json
/// {
///     "title": "BTC/USD",
///     "riskLevel": "medium",
///     "logFile": "logs/illustration.log",
///     "observations": [{ "price": 96601.02, "volume": 1.23, "timestamp": 4500 }]
/// }
/// ```
///
/// Everything except `observations` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_risk_level")]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub log_file: Option<String>,

    pub observations: Vec<Observation>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_risk_level() -> RiskLevel {
    RiskLevel::High
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    // Build a series by inserting the observations in file order
    pub fn series(&self) -> SignalSeries {
        let mut series = SignalSeries::with_capacity(self.observations.len());
        for obs in &self.observations {
            series.insert(*obs);
        }
        series
    }
}

// BTC/USD trades used when no scenario file is given
impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            title: default_title(),
            risk_level: default_risk_level(),
            log_file: None,
            observations: vec![
                Observation::new(96601.02, 1.23, 4500),
                Observation::new(96601.08, 0.56, 4501),
                Observation::new(96601.10, 0.22, 4502),
                Observation::new(96601.09, 1.57, 4503),
            ],
        }
    }
}
