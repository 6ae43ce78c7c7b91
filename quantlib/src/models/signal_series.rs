use serde::{Deserialize, Serialize};

use crate::models::{Observation, RiskLevel};

// An append-only, insertion-ordered collection of observations.
// There is no way to remove or reorder what has been inserted; the
// weighted signal always sums in insertion order so repeated runs over the
// same data give bit-identical results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSeries {
    series: Vec<Observation>,
}

impl SignalSeries {
    pub fn new() -> Self {
        SignalSeries { series: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SignalSeries {
            series: Vec::with_capacity(capacity),
        }
    }

    // Append a new observation to the end of the series
    pub fn insert(&mut self, obs: Observation) {
        self.series.push(obs);
        log::debug!(
            "Inserted observation at t={} (cardinality {})",
            obs.get_time(),
            self.series.len()
        );
    }

    pub fn observations(&self) -> &[Observation] {
        &self.series
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.series.iter()
    }

    pub fn cardinality(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn risk_multiplier(&self, level: RiskLevel) -> f64 {
        level.multiplier()
    }

    // Sum of every observation's dollar value, in insertion order
    pub fn total_dollar_value(&self) -> f64 {
        let mut sum_of_vals = 0.0;
        for obs in &self.series {
            sum_of_vals += obs.dollar_value();
        }
        sum_of_vals
    }

    pub fn weighted_signal(&self, level: RiskLevel) -> f64 {
        let risk = self.risk_multiplier(level);
        let signal = risk * self.total_dollar_value();
        log::debug!(
            "Weighted signal at {} risk over {} observations: {}",
            level,
            self.series.len(),
            signal
        );
        signal
    }
}

impl<'a> IntoIterator for &'a SignalSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

impl Extend<Observation> for SignalSeries {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        for obs in iter {
            self.insert(obs);
        }
    }
}

impl FromIterator<Observation> for SignalSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut series = SignalSeries::new();
        series.extend(iter);
        series
    }
}
