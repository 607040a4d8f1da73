pub mod error;
pub mod evaluator;
pub mod eye;
pub mod output;
pub mod player;
pub mod random;
pub mod response;
pub mod settings;
pub mod target;
pub mod track;
pub mod trial;

pub use error::{InvalidAudioDevice, InvalidAudioFile, OpenFailure, RequestFailure};
pub use evaluator::ResponseEvaluator;
pub use eye::{BinocularGazeSample, EyeGaze, EyeTracker};
pub use output::{OutputFile, Record};
pub use player::{db, MaskerPlayer, TargetPlayer};
pub use random::Randomizer;
pub use response::{Color, ConsonantResponse, CoordinateResponse, CorrectKeywords, FreeResponse};
pub use settings::{
    AdaptiveTest, AudioSettings, Calibration, ChannelMode, Condition, FixedLevelTest, Test,
    TestIdentity, TrackingRule, TrackingSequence,
};
pub use target::{TargetList, TargetListReader};
pub use track::{Track, TrackFactory, TrackSettings};
pub use trial::{
    AdaptiveCoordinateResponseTrial, AdaptiveTestResult, ConsonantTrial, CorrectKeywordsTrial,
    FixedLevelCoordinateResponseTrial, FreeResponseTrial, OpenSetAdaptiveTrial, TrialState,
};
