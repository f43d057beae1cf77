use serde::Deserialize;
use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_result_count: usize,      // Truncation limit for find_top_documents
    pub relevance_epsilon: f64,       // Relevance difference treated as a tie
    pub accumulator_shards: usize,    // Shards in the parallel relevance accumulator
    pub worker_threads: usize,        // Size of the ranking/removal worker pool

    pub request_window: usize,        // RequestQueue history length, one tick per request
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_result_count: 5,
            relevance_epsilon: 1e-6,
            accumulator_shards: 8,
            worker_threads: num_cpus::get(),

            request_window: 1440,                  // a day of one-per-minute requests
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |what: &str| Err(Error::new(ErrorKind::InvalidConfiguration, what.to_string()));

        if self.max_result_count == 0 {
            return invalid("max_result_count must be positive");
        }
        if !self.relevance_epsilon.is_finite() || self.relevance_epsilon <= 0.0 {
            return invalid("relevance_epsilon must be a positive finite number");
        }
        if self.accumulator_shards == 0 {
            return invalid("accumulator_shards must be positive");
        }
        if self.worker_threads == 0 {
            return invalid("worker_threads must be positive");
        }
        if self.request_window == 0 {
            return invalid("request_window must be positive");
        }
        Ok(())
    }
}
