use crate::error::OpenFailure;
use crate::eye::BinocularGazeSample;
use crate::settings::{AdaptiveTest, FixedLevelTest, TestIdentity};
use crate::trial::{
    AdaptiveCoordinateResponseTrial, AdaptiveTestResult, ConsonantTrial, CorrectKeywordsTrial,
    FixedLevelCoordinateResponseTrial, FreeResponseTrial, OpenSetAdaptiveTrial,
};
use avsin_timing::{EyeTrackerTargetPlayerSynchronization, TargetStartTime};
use serde::Serialize;

/// Everything the engine persists, in write order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Record {
    AdaptiveTest(AdaptiveTest),
    FixedLevelTest(FixedLevelTest),
    AdaptiveCoordinateResponseTrial(AdaptiveCoordinateResponseTrial),
    FixedLevelCoordinateResponseTrial(FixedLevelCoordinateResponseTrial),
    FreeResponseTrial(FreeResponseTrial),
    CorrectKeywordsTrial(CorrectKeywordsTrial),
    OpenSetAdaptiveTrial(OpenSetAdaptiveTrial),
    ConsonantTrial(ConsonantTrial),
    AdaptiveTestResults(Vec<AdaptiveTestResult>),
    EyeGazes(Vec<BinocularGazeSample>),
    TargetStartTime(TargetStartTime),
    Synchronization(EyeTrackerTargetPlayerSynchronization),
}

pub trait OutputFile {
    fn open_new_file(&mut self, identity: &TestIdentity) -> Result<(), OpenFailure>;
    fn write(&mut self, record: Record);
    fn save(&mut self);
    fn close(&mut self);
}
