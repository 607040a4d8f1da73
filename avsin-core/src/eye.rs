use avsin_timing::EyeTrackerSystemTime;
use serde::{Deserialize, Serialize};

/// Normalized display coordinates of one eye.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeGaze {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BinocularGazeSample {
    pub system_time: EyeTrackerSystemTime,
    pub left: EyeGaze,
    pub right: EyeGaze,
}

pub trait EyeTracker {
    fn allocate_recording_time_seconds(&mut self, seconds: f64);
    fn start(&mut self);
    fn stop(&mut self);
    fn gaze_samples(&self) -> Vec<BinocularGazeSample>;
    fn current_system_time(&self) -> EyeTrackerSystemTime;
}
