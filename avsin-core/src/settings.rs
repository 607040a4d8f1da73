use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    AuditoryOnly,
    AudioVisual,
}

/// Speaker layout used when presenting masker and target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelMode {
    #[default]
    AllChannels,
    SingleSpeaker,
    DelayedMasker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestIdentity {
    pub subject_id: String,
    pub tester_id: String,
    pub session: String,
    pub method: String,
}

/// Parameters shared by every kind of test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub masker_file_path: String,
    pub masker_level_db_spl: i32,
    pub full_scale_level_db_spl: i32,
    pub condition: Condition,
    pub target_list_directory: String,
    pub identity: TestIdentity,
    pub channel_mode: ChannelMode,
}

/// One stage of a staircase: `up`/`down` consecutive responses move the
/// level by `step_size`, and the stage lasts for `run_count` reversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSequence {
    pub up: i32,
    pub down: i32,
    pub run_count: i32,
    pub step_size: i32,
}

pub type TrackingRule = Vec<TrackingSequence>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveTest {
    pub test: Test,
    pub starting_snr_db: i32,
    pub ceiling_snr_db: i32,
    pub floor_snr_db: i32,
    pub track_bump_limit: i32,
    pub tracking_rule: TrackingRule,
    pub threshold_reversals: i32,
}

impl Default for AdaptiveTest {
    fn default() -> Self {
        Self {
            test: Test::default(),
            starting_snr_db: 0,
            ceiling_snr_db: i32::MAX,
            floor_snr_db: i32::MIN,
            track_bump_limit: i32::MAX,
            tracking_rule: TrackingRule::new(),
            threshold_reversals: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedLevelTest {
    pub test: Test,
    pub snr_db: i32,
    pub trials: usize,
    pub target_repeats: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub audio_device: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub file_path: String,
    pub level_db_spl: i32,
    pub full_scale_level_db_spl: i32,
    pub condition: Condition,
    pub audio_device: String,
}
