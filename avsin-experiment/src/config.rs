use serde::{Deserialize, Serialize};

/// Engine constants that are not part of an individual test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Extra lead time between masker fade-in and target onset when eye tracking.
    pub additional_target_delay_seconds: f64,
    /// Delay applied to masker channel 0 in the delayed-masker paradigm.
    pub masker_channel_delay_seconds: f64,
    /// Minimum keyword count scored as a correct trial.
    pub keyword_correct_threshold: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            additional_target_delay_seconds: 0.5,
            masker_channel_delay_seconds: 0.004,
            keyword_correct_threshold: 2,
        }
    }
}
