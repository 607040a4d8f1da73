use crate::response::Color;
use serde::{Deserialize, Serialize};

/// Trial state machine of the recognition test model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrialState {
    #[default]
    Idle,
    ReadyForTrial,
    MaskerFadingIn,
    TargetPlaying,
    MaskerFadingOut,
    AwaitingResponse,
    TestComplete,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveCoordinateResponseTrial {
    pub target: String,
    pub subject_color: Color,
    pub correct_color: Color,
    pub subject_number: i32,
    pub correct_number: i32,
    pub correct: bool,
    pub snr_db: i32,
    pub reversals: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedLevelCoordinateResponseTrial {
    pub target: String,
    pub subject_color: Color,
    pub correct_color: Color,
    pub subject_number: i32,
    pub correct_number: i32,
    pub correct: bool,
}

/// Experimenter-scored open-set trial of an adaptive test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenSetAdaptiveTrial {
    pub target: String,
    pub correct: bool,
    pub snr_db: i32,
    pub reversals: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectKeywordsTrial {
    pub target: String,
    pub count: i32,
    pub correct: bool,
    pub snr_db: i32,
    pub reversals: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsonantTrial {
    pub target: String,
    pub subject_consonant: char,
    pub correct_consonant: char,
    pub correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeResponseTrial {
    pub target: String,
    pub response: String,
    pub flagged: bool,
}

/// Threshold estimate for one target list of an adaptive test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveTestResult {
    pub targets_directory: String,
    pub threshold: f64,
}
